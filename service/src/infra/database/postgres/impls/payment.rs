//! [`Payment`]-related [`Database`] implementations.

use common::{
    operations::{By, Insert, Select},
    Money,
};
use tokio_postgres::Row;
use tracerr::Traced;

use crate::{
    domain::{payment, Payment},
    infra::{
        database::{self, postgres::Connection, Postgres},
        Database,
    },
    read,
};

/// Columns of a query joining `payments` with `rent_agreements`,
/// `properties` and `tenants`.
const LIST_COLUMNS: &str = "\
    pm.id, pm.agreement_id, pm.kind, \
    pm.amount, pm.amount_currency, \
    pm.date, pm.method, pm.reference, pm.notes, pm.status, pm.created_at, \
    p.title AS property_title, \
    t.full_name AS tenant_name";

/// Builds a [`read::payment::ListItem`] from the provided [`Row`].
fn list_item_from_row(row: &Row) -> read::payment::ListItem {
    read::payment::ListItem {
        payment: Payment {
            id: row.get("id"),
            agreement_id: row.get("agreement_id"),
            kind: row.get("kind"),
            amount: Money {
                amount: row.get("amount"),
                currency: row.get("amount_currency"),
            },
            date: row.get("date"),
            method: row.get("method"),
            reference: row.get("reference"),
            notes: row.get("notes"),
            status: row.get("status"),
            created_at: row.get("created_at"),
        },
        property_title: row.get("property_title"),
        tenant_name: row.get("tenant_name"),
    }
}

impl<C> Database<Select<By<Option<read::payment::ListItem>, payment::Id>>>
    for Postgres<C>
where
    C: Connection,
{
    type Ok = Option<read::payment::ListItem>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<read::payment::ListItem>, payment::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let id: payment::Id = by.into_inner();

        let sql = format!(
            "SELECT {LIST_COLUMNS} \
             FROM payments AS pm \
             JOIN rent_agreements AS ra ON ra.id = pm.agreement_id \
             JOIN properties AS p ON p.id = ra.property_id \
             JOIN tenants AS t ON t.id = ra.tenant_id \
             WHERE pm.id = $1::UUID \
             LIMIT 1",
        );
        Ok(self
            .query_opt(&sql, &[&id])
            .await
            .map_err(tracerr::wrap!())?
            .map(|row| list_item_from_row(&row)))
    }
}

impl<C> Database<Select<By<Vec<read::payment::ListItem>, ()>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Vec<read::payment::ListItem>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(_): Select<By<Vec<read::payment::ListItem>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        let sql = format!(
            "SELECT {LIST_COLUMNS} \
             FROM payments AS pm \
             JOIN rent_agreements AS ra ON ra.id = pm.agreement_id \
             JOIN properties AS p ON p.id = ra.property_id \
             JOIN tenants AS t ON t.id = ra.tenant_id \
             ORDER BY pm.date DESC, pm.id",
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

impl<C> Database<Select<By<read::dashboard::RecentPayments, ()>>>
    for Postgres<C>
where
    C: Connection,
{
    type Ok = read::dashboard::RecentPayments;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(_): Select<By<read::dashboard::RecentPayments, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        let sql = format!(
            "SELECT {LIST_COLUMNS} \
             FROM payments AS pm \
             JOIN rent_agreements AS ra ON ra.id = pm.agreement_id \
             JOIN properties AS p ON p.id = ra.property_id \
             JOIN tenants AS t ON t.id = ra.tenant_id \
             ORDER BY pm.date DESC, pm.id \
             LIMIT {limit}",
            limit = read::dashboard::WIDGET_LIMIT,
        );
        Ok(self
            .query(&sql, &[])
            .await
            .map_err(tracerr::wrap!())?
            .iter()
            .map(list_item_from_row)
            .collect::<Vec<_>>()
            .into())
    }
}

impl<C> Database<Insert<Payment>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(payment): Insert<Payment>,
    ) -> Result<Self::Ok, Self::Err> {
        let Payment {
            id,
            agreement_id,
            kind,
            amount,
            date,
            method,
            reference,
            notes,
            status,
            created_at,
        } = payment;

        const SQL: &str = "\
            INSERT INTO payments (\
                id, agreement_id, kind, amount, amount_currency, \
                date, method, reference, notes, status, created_at \
            ) VALUES (\
                $1::UUID, $2::UUID, $3::INT2, $4::NUMERIC, $5::INT2, \
                $6::DATE, $7::INT2, $8::VARCHAR, $9::VARCHAR, $10::INT2, \
                $11::TIMESTAMPTZ \
            )";
        self.exec(
            SQL,
            &[
                &id,
                &agreement_id,
                &kind,
                &amount.amount,
                &amount.currency,
                &date,
                &method,
                &reference,
                &notes,
                &status,
                &created_at,
            ],
        )
        .await
        .map_err(tracerr::wrap!())
        .map(drop)
    }
}
