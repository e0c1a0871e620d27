//! [`Property`]-related [`Database`] implementations.

use std::collections::HashMap;

use common::{
    operations::{By, Delete, Insert, Lock, Select, Update},
    Money,
};
use tokio_postgres::Row;
use tracerr::Traced;

use crate::{
    domain::{property, Property},
    infra::{
        database::{self, postgres::Connection, Postgres},
        Database,
    },
    read,
};

/// Columns of the `properties` table selected for a [`Property`].
const COLUMNS: &str = "\
    id, title, address, city, state, zip_code, \
    kind, area, price, price_currency, status, furnishing, \
    bedrooms, bathrooms, description, \
    created_at";

/// Builds a [`Property`] from the provided [`Row`].
fn from_row(row: &Row) -> Property {
    Property {
        id: row.get("id"),
        title: row.get("title"),
        address: row.get("address"),
        city: row.get("city"),
        state: row.get("state"),
        zip_code: row.get("zip_code"),
        kind: row.get("kind"),
        area: row.get("area"),
        price: Money {
            amount: row.get("price"),
            currency: row.get("price_currency"),
        },
        status: row.get("status"),
        furnishing: row.get("furnishing"),
        bedrooms: row
            .get::<_, Option<i32>>("bedrooms")
            .map(u16::try_from)
            .transpose()
            .expect("`bedrooms` overflow"),
        bathrooms: row
            .get::<_, Option<i32>>("bathrooms")
            .map(u16::try_from)
            .transpose()
            .expect("`bathrooms` overflow"),
        description: row.get("description"),
        created_at: row.get("created_at"),
    }
}

impl<C> Database<Select<By<Option<Property>, property::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Option<Property>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Property>, property::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let id: property::Id = by.into_inner();

        let sql = format!(
            "SELECT {COLUMNS} \
             FROM properties \
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

impl<C> Database<Select<By<Vec<read::property::ListItem>, ()>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Vec<read::property::ListItem>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(_): Select<By<Vec<read::property::ListItem>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        let sql = format!(
            "SELECT {COLUMNS} \
             FROM properties \
             ORDER BY title, id",
        );
        let properties = self
            .query(&sql, &[])
            .await
            .map_err(tracerr::wrap!())?
            .iter()
            .map(from_row)
            .collect::<Vec<_>>();

        const OWNERS_SQL: &str = "\
            SELECT po.property_id, po.owner_id, po.ownership_share, \
                   o.full_name \
            FROM property_owners AS po \
            JOIN owners AS o ON o.id = po.owner_id \
            ORDER BY po.created_at, po.owner_id";
        let mut owners = HashMap::<property::Id, Vec<_>>::new();
        for row in self
            .query(OWNERS_SQL, &[])
            .await
            .map_err(tracerr::wrap!())?
        {
            owners
                .entry(row.get("property_id"))
                .or_default()
                .push(read::property::OwnerRef {
                    id: row.get("owner_id"),
                    full_name: row.get("full_name"),
                    share: row.get("ownership_share"),
                });
        }

        const BROKERS_SQL: &str = "\
            SELECT pb.property_id, pb.broker_id, b.full_name \
            FROM property_brokers AS pb \
            JOIN brokers AS b ON b.id = pb.broker_id \
            ORDER BY pb.created_at, pb.broker_id";
        let mut brokers = HashMap::<property::Id, Vec<_>>::new();
        for row in self
            .query(BROKERS_SQL, &[])
            .await
            .map_err(tracerr::wrap!())?
        {
            brokers
                .entry(row.get("property_id"))
                .or_default()
                .push(read::property::BrokerRef {
                    id: row.get("broker_id"),
                    full_name: row.get("full_name"),
                });
        }

        Ok(properties
            .into_iter()
            .map(|property| read::property::ListItem {
                owners: owners.remove(&property.id).unwrap_or_default(),
                brokers: brokers.remove(&property.id).unwrap_or_default(),
                property,
            })
            .collect())
    }
}

impl<C> Database<Select<By<Vec<property::Ownership>, property::Id>>>
    for Postgres<C>
where
    C: Connection,
{
    type Ok = Vec<property::Ownership>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<property::Ownership>, property::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let id: property::Id = by.into_inner();

        const SQL: &str = "\
            SELECT property_id, owner_id, ownership_share \
            FROM property_owners \
            WHERE property_id = $1::UUID \
            ORDER BY created_at, owner_id";
        Ok(self
            .query(SQL, &[&id])
            .await
            .map_err(tracerr::wrap!())?
            .into_iter()
            .map(|row| property::Ownership {
                property_id: row.get("property_id"),
                owner_id: row.get("owner_id"),
                share: row.get("ownership_share"),
            })
            .collect())
    }
}

impl<C> Database<Select<By<Vec<read::property::OwnerRef>, property::Id>>>
    for Postgres<C>
where
    C: Connection,
{
    type Ok = Vec<read::property::OwnerRef>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<read::property::OwnerRef>, property::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let id: property::Id = by.into_inner();

        const SQL: &str = "\
            SELECT po.owner_id, po.ownership_share, o.full_name \
            FROM property_owners AS po \
            JOIN owners AS o ON o.id = po.owner_id \
            WHERE po.property_id = $1::UUID \
            ORDER BY po.created_at, po.owner_id";
        Ok(self
            .query(SQL, &[&id])
            .await
            .map_err(tracerr::wrap!())?
            .into_iter()
            .map(|row| read::property::OwnerRef {
                id: row.get("owner_id"),
                full_name: row.get("full_name"),
                share: row.get("ownership_share"),
            })
            .collect())
    }
}

impl<C> Database<Select<By<Vec<read::property::BrokerRef>, property::Id>>>
    for Postgres<C>
where
    C: Connection,
{
    type Ok = Vec<read::property::BrokerRef>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<read::property::BrokerRef>, property::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let id: property::Id = by.into_inner();

        const SQL: &str = "\
            SELECT pb.broker_id, b.full_name \
            FROM property_brokers AS pb \
            JOIN brokers AS b ON b.id = pb.broker_id \
            WHERE pb.property_id = $1::UUID \
            ORDER BY pb.created_at, pb.broker_id";
        Ok(self
            .query(SQL, &[&id])
            .await
            .map_err(tracerr::wrap!())?
            .into_iter()
            .map(|row| read::property::BrokerRef {
                id: row.get("broker_id"),
                full_name: row.get("full_name"),
            })
            .collect())
    }
}

impl<C> Database<Select<By<Option<read::property::PrimaryOwner>, property::Id>>>
    for Postgres<C>
where
    C: Connection,
{
    type Ok = Option<read::property::PrimaryOwner>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<
            By<Option<read::property::PrimaryOwner>, property::Id>,
        >,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let id: property::Id = by.into_inner();

        const SQL: &str = "\
            SELECT po.ownership_share, \
                   o.id, o.full_name, o.phone, o.email, o.address, \
                   o.created_at \
            FROM property_owners AS po \
            JOIN owners AS o ON o.id = po.owner_id \
            WHERE po.property_id = $1::UUID \
            ORDER BY po.created_at, po.owner_id \
            LIMIT 1";
        Ok(self
            .query_opt(SQL, &[&id])
            .await
            .map_err(tracerr::wrap!())?
            .map(|row| read::property::PrimaryOwner {
                owner: super::owner::from_row(&row),
                share: row.get("ownership_share"),
            }))
    }
}

impl<C> Database<Insert<Property>> for Postgres<C>
where
    C: Connection,
    Self: Database<Update<Property>, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(property): Insert<Property>,
    ) -> Result<Self::Ok, Self::Err> {
        self.execute(Update(property))
            .await
            .map_err(tracerr::wrap!())
    }
}

impl<C> Database<Update<Property>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(property): Update<Property>,
    ) -> Result<Self::Ok, Self::Err> {
        let Property {
            id,
            title,
            address,
            city,
            state,
            zip_code,
            kind,
            area,
            price,
            status,
            furnishing,
            bedrooms,
            bathrooms,
            description,
            created_at,
        } = property;

        let bedrooms = bedrooms.map(i32::from);
        let bathrooms = bathrooms.map(i32::from);

        const SQL: &str = "\
            INSERT INTO properties (\
                id, title, address, city, state, zip_code, \
                kind, area, price, price_currency, status, furnishing, \
                bedrooms, bathrooms, description, \
                created_at \
            ) VALUES (\
                $1::UUID, $2::VARCHAR, $3::VARCHAR, $4::VARCHAR, \
                $5::VARCHAR, $6::VARCHAR, \
                $7::INT2, $8::NUMERIC, $9::NUMERIC, $10::INT2, \
                $11::INT2, $12::INT2, \
                $13::INT4, $14::INT4, $15::VARCHAR, \
                $16::TIMESTAMPTZ \
            ) \
            ON CONFLICT (id) DO UPDATE \
            SET title = EXCLUDED.title, \
                address = EXCLUDED.address, \
                city = EXCLUDED.city, \
                state = EXCLUDED.state, \
                zip_code = EXCLUDED.zip_code, \
                kind = EXCLUDED.kind, \
                area = EXCLUDED.area, \
                price = EXCLUDED.price, \
                price_currency = EXCLUDED.price_currency, \
                status = EXCLUDED.status, \
                furnishing = EXCLUDED.furnishing, \
                bedrooms = EXCLUDED.bedrooms, \
                bathrooms = EXCLUDED.bathrooms, \
                description = EXCLUDED.description, \
                created_at = EXCLUDED.created_at";
        self.exec(
            SQL,
            &[
                &id,
                &title,
                &address,
                &city,
                &state,
                &zip_code,
                &kind,
                &area,
                &price.amount,
                &price.currency,
                &status,
                &furnishing,
                &bedrooms,
                &bathrooms,
                &description,
                &created_at,
            ],
        )
        .await
        .map_err(tracerr::wrap!())
        .map(drop)
    }
}

impl<C> Database<Lock<By<Property, property::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Lock(by): Lock<By<Property, property::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let id: property::Id = by.into_inner();

        const SQL: &str = "\
            INSERT INTO properties_lock \
            VALUES ($1::UUID) \
            ON CONFLICT (id) DO NOTHING";
        self.query(SQL, &[&id])
            .await
            .map_err(tracerr::wrap!())
            .map(drop)
    }
}

impl<C> Database<Delete<By<property::Ownership, property::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<property::Ownership, property::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let id: property::Id = by.into_inner();

        const SQL: &str = "\
            DELETE FROM property_owners \
            WHERE property_id = $1::UUID";
        self.exec(SQL, &[&id])
            .await
            .map_err(tracerr::wrap!())
            .map(drop)
    }
}

impl<C> Database<Insert<property::Ownership>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(ownership): Insert<property::Ownership>,
    ) -> Result<Self::Ok, Self::Err> {
        let property::Ownership {
            property_id,
            owner_id,
            share,
        } = ownership;

        const SQL: &str = "\
            INSERT INTO property_owners (\
                property_id, owner_id, ownership_share \
            ) VALUES (\
                $1::UUID, $2::UUID, $3::NUMERIC \
            ) \
            ON CONFLICT (property_id, owner_id) DO UPDATE \
            SET ownership_share = EXCLUDED.ownership_share";
        self.exec(SQL, &[&property_id, &owner_id, &share])
            .await
            .map_err(tracerr::wrap!())
            .map(drop)
    }
}

impl<C> Database<Delete<By<property::Brokerage, property::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<property::Brokerage, property::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let id: property::Id = by.into_inner();

        const SQL: &str = "\
            DELETE FROM property_brokers \
            WHERE property_id = $1::UUID";
        self.exec(SQL, &[&id])
            .await
            .map_err(tracerr::wrap!())
            .map(drop)
    }
}

impl<C> Database<Insert<property::Brokerage>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(brokerage): Insert<property::Brokerage>,
    ) -> Result<Self::Ok, Self::Err> {
        let property::Brokerage {
            property_id,
            broker_id,
        } = brokerage;

        const SQL: &str = "\
            INSERT INTO property_brokers (property_id, broker_id) \
            VALUES ($1::UUID, $2::UUID) \
            ON CONFLICT (property_id, broker_id) DO NOTHING";
        self.exec(SQL, &[&property_id, &broker_id])
            .await
            .map_err(tracerr::wrap!())
            .map(drop)
    }
}

impl<C> Database<Select<By<read::property::TotalCount, ()>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = read::property::TotalCount;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(_): Select<By<read::property::TotalCount, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        const SQL: &str = "\
            SELECT COUNT(*)::INT4 \
            FROM properties";
        self.query_opt(SQL, &[])
            .await
            .map_err(tracerr::wrap!())
            .map(|row| row.expect("always exists").get::<_, i32>(0).into())
    }
}

impl<C> Database<Select<By<read::dashboard::RecentProperties, ()>>>
    for Postgres<C>
where
    C: Connection,
{
    type Ok = read::dashboard::RecentProperties;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(_): Select<By<read::dashboard::RecentProperties, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        let sql = format!(
            "SELECT {COLUMNS} \
             FROM properties \
             ORDER BY created_at DESC, id \
             LIMIT {limit}",
            limit = read::dashboard::WIDGET_LIMIT,
        );
        Ok(self
            .query(&sql, &[])
            .await
            .map_err(tracerr::wrap!())?
            .iter()
            .map(from_row)
            .collect::<Vec<_>>()
            .into())
    }
}
