//! [`Owner`]-related [`Database`] implementations.

use common::operations::{By, Insert, Select};
use tokio_postgres::Row;
use tracerr::Traced;

use crate::{
    domain::{owner, Owner},
    infra::{
        database::{self, postgres::Connection, Postgres},
        Database,
    },
    read,
};

/// Builds an [`Owner`] from the provided [`Row`].
pub(super) fn from_row(row: &Row) -> Owner {
    Owner {
        id: row.get("id"),
        full_name: row.get("full_name"),
        phone: row.get("phone"),
        email: row.get("email"),
        address: row.get("address"),
        created_at: row.get("created_at"),
    }
}

impl<C> Database<Select<By<Option<Owner>, owner::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Option<Owner>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Owner>, owner::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let id: owner::Id = by.into_inner();

        const SQL: &str = "\
            SELECT id, full_name, phone, email, address, created_at \
            FROM owners \
            WHERE id = $1::UUID \
            LIMIT 1";
        Ok(self
            .query_opt(SQL, &[&id])
            .await
            .map_err(tracerr::wrap!())?
            .map(|row| from_row(&row)))
    }
}

impl<C> Database<Select<By<Vec<Owner>, ()>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Vec<Owner>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(_): Select<By<Vec<Owner>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        const SQL: &str = "\
            SELECT id, full_name, phone, email, address, created_at \
            FROM owners \
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

impl<C> Database<Insert<Owner>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(owner): Insert<Owner>,
    ) -> Result<Self::Ok, Self::Err> {
        let Owner {
            id,
            full_name,
            phone,
            email,
            address,
            created_at,
        } = owner;

        const SQL: &str = "\
            INSERT INTO owners (\
                id, full_name, phone, email, address, created_at \
            ) VALUES (\
                $1::UUID, $2::VARCHAR, $3::VARCHAR, $4::VARCHAR, \
                $5::VARCHAR, $6::TIMESTAMPTZ \
            )";
        self.exec(SQL, &[&id, &full_name, &phone, &email, &address, &created_at])
            .await
            .map_err(tracerr::wrap!())
            .map(drop)
    }
}

impl<C> Database<Select<By<read::owner::TotalCount, ()>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = read::owner::TotalCount;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(_): Select<By<read::owner::TotalCount, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        const SQL: &str = "\
            SELECT COUNT(*)::INT4 \
            FROM owners";
        self.query_opt(SQL, &[])
            .await
            .map_err(tracerr::wrap!())
            .map(|row| row.expect("always exists").get::<_, i32>(0).into())
    }
}
