//! [`Requirement`]-related [`Database`] implementations.

use common::{
    money,
    operations::{By, Insert, Select, Update},
    Money,
};
use rust_decimal::Decimal;
use tokio_postgres::Row;
use tracerr::Traced;

use crate::{
    domain::{requirement, Requirement},
    infra::{
        database::{self, postgres::Connection, Postgres},
        Database,
    },
};

/// Columns of the `requirements` table selected for a [`Requirement`].
const COLUMNS: &str = "\
    id, customer_name, customer_phone, customer_email, profession, \
    kind, property_kind, \
    budget_min, budget_min_currency, budget_max, budget_max_currency, \
    preferred_location, area_preference, notes, \
    inquiry_date, follow_up_date, assigned_to, status, created_at";

/// Builds a [`Requirement`] from the provided [`Row`].
fn from_row(row: &Row) -> Requirement {
    Requirement {
        id: row.get("id"),
        customer_name: row.get("customer_name"),
        customer_phone: row.get("customer_phone"),
        customer_email: row.get("customer_email"),
        profession: row.get("profession"),
        kind: row.get("kind"),
        property_kind: row.get("property_kind"),
        budget_min: money_from_row(row, "budget_min", "budget_min_currency"),
        budget_max: money_from_row(row, "budget_max", "budget_max_currency"),
        preferred_location: row.get("preferred_location"),
        area_preference: row.get("area_preference"),
        notes: row.get("notes"),
        inquiry_date: row.get("inquiry_date"),
        follow_up_date: row.get("follow_up_date"),
        assigned_to: row.get("assigned_to"),
        status: row.get("status"),
        created_at: row.get("created_at"),
    }
}

/// Reads an optional [`Money`] from the provided pair of columns.
fn money_from_row(row: &Row, amount: &str, currency: &str) -> Option<Money> {
    Some(Money {
        amount: row.get::<_, Option<Decimal>>(amount)?,
        currency: row.get::<_, Option<money::Currency>>(currency)?,
    })
}

impl<C> Database<Select<By<Option<Requirement>, requirement::Id>>>
    for Postgres<C>
where
    C: Connection,
{
    type Ok = Option<Requirement>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Requirement>, requirement::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let id: requirement::Id = by.into_inner();

        let sql = format!(
            "SELECT {COLUMNS} \
             FROM requirements \
             WHERE id = $1::UUID \
             LIMIT 1",
        );
        Ok(self
            .query_opt(&sql, &[&id])
            .await
            .map_err(tracerr::wrap!())?
            .map(|row| from_row(&row)))
    }
}

impl<C> Database<Select<By<Vec<Requirement>, ()>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Vec<Requirement>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(_): Select<By<Vec<Requirement>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        let sql = format!(
            "SELECT {COLUMNS} \
             FROM requirements \
             ORDER BY inquiry_date DESC, id",
        );
        Ok(self
            .query(&sql, &[])
            .await
            .map_err(tracerr::wrap!())?
            .iter()
            .map(from_row)
            .collect())
    }
}

impl<C> Database<Insert<Requirement>> for Postgres<C>
where
    C: Connection,
    Self: Database<
        Update<Requirement>,
        Ok = (),
        Err = Traced<database::Error>,
    >,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(requirement): Insert<Requirement>,
    ) -> Result<Self::Ok, Self::Err> {
        self.execute(Update(requirement))
            .await
            .map_err(tracerr::wrap!())
    }
}

impl<C> Database<Update<Requirement>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(requirement): Update<Requirement>,
    ) -> Result<Self::Ok, Self::Err> {
        let Requirement {
            id,
            customer_name,
            customer_phone,
            customer_email,
            profession,
            kind,
            property_kind,
            budget_min,
            budget_max,
            preferred_location,
            area_preference,
            notes,
            inquiry_date,
            follow_up_date,
            assigned_to,
            status,
            created_at,
        } = requirement;

        let (budget_min, budget_min_currency) =
            (budget_min.map(|m| m.amount), budget_min.map(|m| m.currency));
        let (budget_max, budget_max_currency) =
            (budget_max.map(|m| m.amount), budget_max.map(|m| m.currency));

        const SQL: &str = "\
            INSERT INTO requirements (\
                id, customer_name, customer_phone, customer_email, \
                profession, kind, property_kind, \
                budget_min, budget_min_currency, \
                budget_max, budget_max_currency, \
                preferred_location, area_preference, notes, \
                inquiry_date, follow_up_date, assigned_to, status, \
                created_at \
            ) VALUES (\
                $1::UUID, $2::VARCHAR, $3::VARCHAR, $4::VARCHAR, \
                $5::VARCHAR, $6::INT2, $7::INT2, \
                $8::NUMERIC, $9::INT2, \
                $10::NUMERIC, $11::INT2, \
                $12::VARCHAR, $13::VARCHAR, $14::VARCHAR, \
                $15::DATE, $16::DATE, $17::VARCHAR, $18::INT2, \
                $19::TIMESTAMPTZ \
            ) \
            ON CONFLICT (id) DO UPDATE \
            SET customer_name = EXCLUDED.customer_name, \
                customer_phone = EXCLUDED.customer_phone, \
                customer_email = EXCLUDED.customer_email, \
                profession = EXCLUDED.profession, \
                kind = EXCLUDED.kind, \
                property_kind = EXCLUDED.property_kind, \
                budget_min = EXCLUDED.budget_min, \
                budget_min_currency = EXCLUDED.budget_min_currency, \
                budget_max = EXCLUDED.budget_max, \
                budget_max_currency = EXCLUDED.budget_max_currency, \
                preferred_location = EXCLUDED.preferred_location, \
                area_preference = EXCLUDED.area_preference, \
                notes = EXCLUDED.notes, \
                inquiry_date = EXCLUDED.inquiry_date, \
                follow_up_date = EXCLUDED.follow_up_date, \
                assigned_to = EXCLUDED.assigned_to, \
                status = EXCLUDED.status, \
                created_at = EXCLUDED.created_at";
        self.exec(
            SQL,
            &[
                &id,
                &customer_name,
                &customer_phone,
                &customer_email,
                &profession,
                &kind,
                &property_kind,
                &budget_min,
                &budget_min_currency,
                &budget_max,
                &budget_max_currency,
                &preferred_location,
                &area_preference,
                &notes,
                &inquiry_date,
                &follow_up_date,
                &assigned_to,
                &status,
                &created_at,
            ],
        )
        .await
        .map_err(tracerr::wrap!())
        .map(drop)
    }
}
