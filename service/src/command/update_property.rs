//! [`Command`] for updating a [`Property`].

use common::{
    operations::{
        By, Commit, Delete, Insert, Lock, Select, Transact, Transacted,
        Update,
    },
    Money, Percent,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{broker, owner, property, Broker, Owner, Property},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for updating a [`Property`] and replacing its [`Owner`] and
/// [`Broker`] assignments.
///
/// The join rows are replaced, not diffed: all existing rows are deleted
/// and the selected ones re-inserted.
#[derive(Clone, Debug)]
pub struct UpdateProperty {
    /// ID of the [`Property`] to update.
    pub id: property::Id,

    /// New [`property::Title`] of the [`Property`] listing.
    pub title: property::Title,

    /// New street [`property::Address`] of the [`Property`].
    pub address: property::Address,

    /// New [`property::City`] of the [`Property`].
    pub city: property::City,

    /// New [`property::State`] of the [`Property`], if known.
    pub state: Option<property::State>,

    /// New [`property::ZipCode`] of the [`Property`], if known.
    pub zip_code: Option<property::ZipCode>,

    /// New [`property::Kind`] of the [`Property`].
    pub kind: property::Kind,

    /// New [`property::Area`] of the [`Property`] in square feet.
    pub area: property::Area,

    /// New asking price of the [`Property`].
    pub price: Money,

    /// New [`property::Status`] of the [`Property`].
    pub status: property::Status,

    /// New [`property::Furnishing`] of the [`Property`].
    pub furnishing: property::Furnishing,

    /// Number of bedrooms, if applicable.
    pub bedrooms: Option<property::Bedrooms>,

    /// Number of bathrooms, if applicable.
    pub bathrooms: Option<property::Bathrooms>,

    /// Free-form [`property::Description`], if any.
    pub description: Option<property::Description>,

    /// ID of the [`Owner`] to assign, if any.
    pub owner_id: Option<owner::Id>,

    /// ID of the [`Broker`] to assign, if any.
    pub broker_id: Option<broker::Id>,
}

impl<Db> Command<UpdateProperty> for Service<Db>
where
    Db: Database<Transact, Err = Traced<database::Error>>
        + Database<
            Select<By<Option<Owner>, owner::Id>>,
            Ok = Option<Owner>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<Broker>, broker::Id>>,
            Ok = Option<Broker>,
            Err = Traced<database::Error>,
        >,
    Transacted<Db>: Database<
            Lock<By<Property, property::Id>>,
            Ok = (),
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<Property>, property::Id>>,
            Ok = Option<Property>,
            Err = Traced<database::Error>,
        > + Database<Update<Property>, Ok = (), Err = Traced<database::Error>>
        + Database<
            Delete<By<property::Ownership, property::Id>>,
            Ok = (),
            Err = Traced<database::Error>,
        > + Database<
            Insert<property::Ownership>,
            Ok = (),
            Err = Traced<database::Error>,
        > + Database<
            Delete<By<property::Brokerage, property::Id>>,
            Ok = (),
            Err = Traced<database::Error>,
        > + Database<
            Insert<property::Brokerage>,
            Ok = (),
            Err = Traced<database::Error>,
        > + Database<Commit, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = Property;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: UpdateProperty,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let UpdateProperty {
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
            owner_id,
            broker_id,
        } = cmd;

        if price.is_negative() {
            return Err(tracerr::new!(E::NegativeAmount));
        }

        if let Some(owner_id) = owner_id {
            self.database()
                .execute(Select(By::<Option<Owner>, _>::new(owner_id)))
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))?
                .ok_or(E::OwnerNotExists(owner_id))
                .map_err(tracerr::wrap!())
                .map(drop)?;
        }
        if let Some(broker_id) = broker_id {
            self.database()
                .execute(Select(By::<Option<Broker>, _>::new(broker_id)))
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))?
                .ok_or(E::BrokerNotExists(broker_id))
                .map_err(tracerr::wrap!())
                .map(drop)?;
        }

        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        // Avoid concurrent actions upon the same `Property`.
        tx.execute(Lock(By::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let mut property = tx
            .execute(Select(By::<Option<Property>, _>::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::PropertyNotExists(id))
            .map_err(tracerr::wrap!())?;

        property.title = title;
        property.address = address;
        property.city = city;
        property.state = state;
        property.zip_code = zip_code;
        property.kind = kind;
        property.area = area;
        property.price = price;
        property.status = status;
        property.furnishing = furnishing;
        property.bedrooms = bedrooms;
        property.bathrooms = bathrooms;
        property.description = description;
        tx.execute(Update(property.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        tx.execute(Delete(By::<property::Ownership, _>::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        if let Some(owner_id) = owner_id {
            tx.execute(Insert(property::Ownership {
                property_id: id,
                owner_id,
                share: Percent::ONE_HUNDRED,
            }))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        }

        tx.execute(Delete(By::<property::Brokerage, _>::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        if let Some(broker_id) = broker_id {
            tx.execute(Insert(property::Brokerage {
                property_id: id,
                broker_id,
            }))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        }

        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(property)
    }
}

/// Error of [`UpdateProperty`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`Property`] with the provided ID does not exist.
    #[display("`Property(id: {_0})` does not exist")]
    #[from(ignore)]
    PropertyNotExists(#[error(not(source))] property::Id),

    /// [`Owner`] with the provided ID does not exist.
    #[display("`Owner(id: {_0})` does not exist")]
    #[from(ignore)]
    OwnerNotExists(#[error(not(source))] owner::Id),

    /// [`Broker`] with the provided ID does not exist.
    #[display("`Broker(id: {_0})` does not exist")]
    #[from(ignore)]
    BrokerNotExists(#[error(not(source))] broker::Id),

    /// Provided price is negative.
    #[display("`Property` price cannot be negative")]
    NegativeAmount,
}

#[cfg(test)]
mod spec {
    use super::UpdateProperty;
    use crate::{
        command::fake::{build, Fake},
        domain::property,
        Command as _, Service,
    };

    #[tokio::test]
    async fn replaces_join_rows_instead_of_diffing() {
        let db = Fake::default();
        let p = build::property("Flat A", property::Status::ForRent);
        let o1 = build::owner("Ahmed Khan");
        let o2 = build::owner("Sana Malik");
        {
            let mut state = db.state();
            state.properties.push(p.clone());
            state.owners.push(o1.clone());
            state.owners.push(o2.clone());
            state.ownerships.push(property::Ownership {
                property_id: p.id,
                owner_id: o1.id,
                share: common::Percent::ONE_HUNDRED,
            });
        }
        let (svc, _bg) = Service::new(build::config(), db.clone());

        let updated = svc
            .execute(UpdateProperty {
                id: p.id,
                title: "Flat A (renovated)".parse().unwrap(),
                address: p.address.clone(),
                city: p.city.clone(),
                state: p.state.clone(),
                zip_code: None,
                kind: p.kind,
                area: p.area,
                price: "18000PKR".parse().unwrap(),
                status: property::Status::ForRent,
                furnishing: property::Furnishing::SemiFurnished,
                bedrooms: p.bedrooms,
                bathrooms: p.bathrooms,
                description: None,
                owner_id: Some(o2.id),
                broker_id: None,
            })
            .await
            .unwrap();

        let title: &str = updated.title.as_ref();
        assert_eq!(title, "Flat A (renovated)");

        let state = db.state();
        assert_eq!(state.ownerships.len(), 1);
        assert_eq!(state.ownerships[0].owner_id, o2.id);
        assert!(state.brokerages.is_empty());
    }
}
