//! [`Tenant`]-related [`Database`] implementations.

use common::operations::{By, Insert, Select};
use tokio_postgres::Row;
use tracerr::Traced;

use crate::{
    domain::{tenant, Tenant},
    infra::{
        database::{self, postgres::Connection, Postgres},
        Database,
    },
    read,
};

/// Builds a [`Tenant`] from the provided [`Row`].
fn from_row(row: &Row) -> Tenant {
    Tenant {
        id: row.get("id"),
        full_name: row.get("full_name"),
        phone: row.get("phone"),
        email: row.get("email"),
        address: row.get("address"),
        created_at: row.get("created_at"),
    }
}

impl<C> Database<Select<By<Option<Tenant>, tenant::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Option<Tenant>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Tenant>, tenant::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let id: tenant::Id = by.into_inner();

        const SQL: &str = "\
            SELECT id, full_name, phone, email, address, created_at \
            FROM tenants \
            WHERE id = $1::UUID \
            LIMIT 1";
        Ok(self
            .query_opt(SQL, &[&id])
            .await
            .map_err(tracerr::wrap!())?
            .map(|row| from_row(&row)))
    }
}

impl<C> Database<Select<By<Vec<Tenant>, ()>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Vec<Tenant>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(_): Select<By<Vec<Tenant>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        const SQL: &str = "\
            SELECT id, full_name, phone, email, address, created_at \
            FROM tenants \
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

impl<C> Database<Insert<Tenant>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(tenant): Insert<Tenant>,
    ) -> Result<Self::Ok, Self::Err> {
        let Tenant {
            id,
            full_name,
            phone,
            email,
            address,
            created_at,
        } = tenant;

        const SQL: &str = "\
            INSERT INTO tenants (\
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

impl<C> Database<Select<By<read::tenant::TotalCount, ()>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = read::tenant::TotalCount;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(_): Select<By<read::tenant::TotalCount, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        const SQL: &str = "\
            SELECT COUNT(*)::INT4 \
            FROM tenants";
        self.query_opt(SQL, &[])
            .await
            .map_err(tracerr::wrap!())
            .map(|row| row.expect("always exists").get::<_, i32>(0).into())
    }
}
