//! [`RentAgreement`]-related [`Database`] implementations.

use common::{
    operations::{By, Insert, Select, Update},
    Date, Money,
};
use tokio_postgres::Row;
use tracerr::Traced;

use crate::{
    domain::{agreement, RentAgreement},
    infra::{
        database::{self, postgres::Connection, Postgres},
        Database,
    },
    read,
};

/// Columns of the `rent_agreements` table selected for a [`RentAgreement`].
const COLUMNS: &str = "\
    ra.id, ra.property_id, ra.tenant_id, ra.owner_id, \
    ra.start_date, ra.end_date, \
    ra.monthly_rent, ra.monthly_rent_currency, \
    ra.security_deposit, ra.security_deposit_currency, \
    ra.terms, ra.status, ra.created_at";

/// Builds a [`RentAgreement`] from the provided [`Row`].
fn from_row(row: &Row) -> RentAgreement {
    RentAgreement {
        id: row.get("id"),
        property_id: row.get("property_id"),
        tenant_id: row.get("tenant_id"),
        owner_id: row.get("owner_id"),
        start_date: row.get("start_date"),
        end_date: row.get("end_date"),
        monthly_rent: Money {
            amount: row.get("monthly_rent"),
            currency: row.get("monthly_rent_currency"),
        },
        security_deposit: Money {
            amount: row.get("security_deposit"),
            currency: row.get("security_deposit_currency"),
        },
        terms: row.get("terms"),
        status: row.get("status"),
        created_at: row.get("created_at"),
    }
}

/// Builds a [`read::agreement::ListItem`] from the provided [`Row`] of a
/// query joining `properties` and `tenants`.
fn list_item_from_row(row: &Row) -> read::agreement::ListItem {
    read::agreement::ListItem {
        agreement: from_row(row),
        property_title: row.get("property_title"),
        tenant_name: row.get("tenant_name"),
    }
}

impl<C> Database<Select<By<Option<RentAgreement>, agreement::Id>>>
    for Postgres<C>
where
    C: Connection,
{
    type Ok = Option<RentAgreement>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<RentAgreement>, agreement::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let id: agreement::Id = by.into_inner();

        let sql = format!(
            "SELECT {COLUMNS} \
             FROM rent_agreements AS ra \
             WHERE ra.id = $1::UUID \
             LIMIT 1",
        );
        Ok(self
            .query_opt(&sql, &[&id])
            .await
            .map_err(tracerr::wrap!())?
            .map(|row| from_row(&row)))
    }
}

impl<C> Database<Select<By<Vec<read::agreement::ListItem>, ()>>>
    for Postgres<C>
where
    C: Connection,
{
    type Ok = Vec<read::agreement::ListItem>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(_): Select<By<Vec<read::agreement::ListItem>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        let sql = format!(
            "SELECT {COLUMNS}, \
                    p.title AS property_title, \
                    t.full_name AS tenant_name \
             FROM rent_agreements AS ra \
             JOIN properties AS p ON p.id = ra.property_id \
             JOIN tenants AS t ON t.id = ra.tenant_id \
             ORDER BY ra.start_date DESC, ra.id",
        );
        Ok(self
            .query(&sql, &[])
            .await
            .map_err(tracerr::wrap!())?
            .iter()
            .map(list_item_from_row)
            .collect())
    }
}

impl<C> Database<Insert<RentAgreement>> for Postgres<C>
where
    C: Connection,
    Self: Database<
        Update<RentAgreement>,
        Ok = (),
        Err = Traced<database::Error>,
    >,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(agreement): Insert<RentAgreement>,
    ) -> Result<Self::Ok, Self::Err> {
        self.execute(Update(agreement))
            .await
            .map_err(tracerr::wrap!())
    }
}

impl<C> Database<Update<RentAgreement>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(agreement): Update<RentAgreement>,
    ) -> Result<Self::Ok, Self::Err> {
        let RentAgreement {
            id,
            property_id,
            tenant_id,
            owner_id,
            start_date,
            end_date,
            monthly_rent,
            security_deposit,
            terms,
            status,
            created_at,
        } = agreement;

        const SQL: &str = "\
            INSERT INTO rent_agreements (\
                id, property_id, tenant_id, owner_id, \
                start_date, end_date, \
                monthly_rent, monthly_rent_currency, \
                security_deposit, security_deposit_currency, \
                terms, status, created_at \
            ) VALUES (\
                $1::UUID, $2::UUID, $3::UUID, $4::UUID, \
                $5::DATE, $6::DATE, \
                $7::NUMERIC, $8::INT2, \
                $9::NUMERIC, $10::INT2, \
                $11::VARCHAR, $12::INT2, $13::TIMESTAMPTZ \
            ) \
            ON CONFLICT (id) DO UPDATE \
            SET property_id = EXCLUDED.property_id, \
                tenant_id = EXCLUDED.tenant_id, \
                owner_id = EXCLUDED.owner_id, \
                start_date = EXCLUDED.start_date, \
                end_date = EXCLUDED.end_date, \
                monthly_rent = EXCLUDED.monthly_rent, \
                monthly_rent_currency = EXCLUDED.monthly_rent_currency, \
                security_deposit = EXCLUDED.security_deposit, \
                security_deposit_currency = \
                    EXCLUDED.security_deposit_currency, \
                terms = EXCLUDED.terms, \
                status = EXCLUDED.status, \
                created_at = EXCLUDED.created_at";
        self.exec(
            SQL,
            &[
                &id,
                &property_id,
                &tenant_id,
                &owner_id,
                &start_date,
                &end_date,
                &monthly_rent.amount,
                &monthly_rent.currency,
                &security_deposit.amount,
                &security_deposit.currency,
                &terms,
                &status,
                &created_at,
            ],
        )
        .await
        .map_err(tracerr::wrap!())
        .map(drop)
    }
}

impl<C> Database<Select<By<read::agreement::ActiveCount, ()>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = read::agreement::ActiveCount;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(_): Select<By<read::agreement::ActiveCount, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        const SQL: &str = "\
            SELECT COUNT(*)::INT4 \
            FROM rent_agreements \
            WHERE status = $1::INT2";
        self.query_opt(SQL, &[&agreement::Status::Active])
            .await
            .map_err(tracerr::wrap!())
            .map(|row| row.expect("always exists").get::<_, i32>(0).into())
    }
}

impl<C> Database<Select<By<read::dashboard::UpcomingExpirations, Date>>>
    for Postgres<C>
where
    C: Connection,
{
    type Ok = read::dashboard::UpcomingExpirations;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<read::dashboard::UpcomingExpirations, Date>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let today: Date = by.into_inner();

        let sql = format!(
            "SELECT {COLUMNS}, \
                    p.title AS property_title, \
                    t.full_name AS tenant_name \
             FROM rent_agreements AS ra \
             JOIN properties AS p ON p.id = ra.property_id \
             JOIN tenants AS t ON t.id = ra.tenant_id \
             WHERE ra.end_date >= $1::DATE \
             ORDER BY ra.end_date, ra.id \
             LIMIT {limit}",
            limit = read::dashboard::WIDGET_LIMIT,
        );
        Ok(self
            .query(&sql, &[&today])
            .await
            .map_err(tracerr::wrap!())?
            .iter()
            .map(list_item_from_row)
            .collect::<Vec<_>>()
            .into())
    }
}

impl<C> Database<Update<By<RentAgreement, agreement::EndDate>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(by): Update<By<RentAgreement, agreement::EndDate>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let deadline: agreement::EndDate = by.into_inner();

        const SQL: &str = "\
            UPDATE rent_agreements \
            SET status = $1::INT2 \
            WHERE status = $2::INT2 \
              AND end_date < $3::DATE";
        self.exec(
            SQL,
            &[
                &agreement::Status::Expired,
                &agreement::Status::Active,
                &deadline,
            ],
        )
        .await
        .map_err(tracerr::wrap!())
        .map(drop)
    }
}
