//! [`Broker`]-related [`Database`] implementations.

use common::operations::{By, Insert, Select, Update};
use tokio_postgres::Row;
use tracerr::Traced;

use crate::{
    domain::{broker, Broker},
    infra::{
        database::{self, postgres::Connection, Postgres},
        Database,
    },
};

/// Builds a [`Broker`] from the provided [`Row`].
fn from_row(row: &Row) -> Broker {
    Broker {
        id: row.get("id"),
        full_name: row.get("full_name"),
        phone: row.get("phone"),
        email: row.get("email"),
        agency_name: row.get("agency_name"),
        agency_address: row.get("agency_address"),
        created_at: row.get("created_at"),
    }
}

impl<C> Database<Select<By<Option<Broker>, broker::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Option<Broker>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Broker>, broker::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let id: broker::Id = by.into_inner();

        const SQL: &str = "\
            SELECT id, full_name, phone, email, \
                   agency_name, agency_address, created_at \
            FROM brokers \
            WHERE id = $1::UUID \
            LIMIT 1";
        Ok(self
            .query_opt(SQL, &[&id])
            .await
            .map_err(tracerr::wrap!())?
            .map(|row| from_row(&row)))
    }
}

impl<C> Database<Select<By<Vec<Broker>, ()>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Vec<Broker>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(_): Select<By<Vec<Broker>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        const SQL: &str = "\
            SELECT id, full_name, phone, email, \
                   agency_name, agency_address, created_at \
            FROM brokers \
            ORDER BY full_name, id";
        Ok(self
            .query(SQL, &[])
            .await
            .map_err(tracerr::wrap!())?
            .iter()
            .map(from_row)
            .collect())
    }
}

impl<C> Database<Insert<Broker>> for Postgres<C>
where
    C: Connection,
    Self: Database<Update<Broker>, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(broker): Insert<Broker>,
    ) -> Result<Self::Ok, Self::Err> {
        self.execute(Update(broker)).await.map_err(tracerr::wrap!())
    }
}

impl<C> Database<Update<Broker>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(broker): Update<Broker>,
    ) -> Result<Self::Ok, Self::Err> {
        let Broker {
            id,
            full_name,
            phone,
            email,
            agency_name,
            agency_address,
            created_at,
        } = broker;

        const SQL: &str = "\
            INSERT INTO brokers (\
                id, full_name, phone, email, \
                agency_name, agency_address, created_at \
            ) VALUES (\
                $1::UUID, $2::VARCHAR, $3::VARCHAR, $4::VARCHAR, \
                $5::VARCHAR, $6::VARCHAR, $7::TIMESTAMPTZ \
            ) \
            ON CONFLICT (id) DO UPDATE \
            SET full_name = EXCLUDED.full_name, \
                phone = EXCLUDED.phone, \
                email = EXCLUDED.email, \
                agency_name = EXCLUDED.agency_name, \
                agency_address = EXCLUDED.agency_address, \
                created_at = EXCLUDED.created_at";
        self.exec(
            SQL,
            &[
                &id,
                &full_name,
                &phone,
                &email,
                &agency_name,
                &agency_address,
                &created_at,
            ],
        )
        .await
        .map_err(tracerr::wrap!())
        .map(drop)
    }
}
