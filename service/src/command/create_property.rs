//! [`Command`] for creating a new [`Property`].

use common::{
    operations::{By, Commit, Delete, Insert, Select, Transact, Transacted},
    DateTime, Money, Percent,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{broker, owner, property, Broker, Owner, Property},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for creating a new [`Property`].
#[derive(Clone, Debug)]
pub struct CreateProperty {
    /// [`property::Title`] of the new [`Property`] listing.
    pub title: property::Title,

    /// Street [`property::Address`] of the new [`Property`].
    pub address: property::Address,

    /// [`property::City`] the new [`Property`] is located in.
    pub city: property::City,

    /// [`property::State`] the new [`Property`] is located in, if known.
    pub state: Option<property::State>,

    /// [`property::ZipCode`] of the new [`Property`], if known.
    pub zip_code: Option<property::ZipCode>,

    /// [`property::Kind`] of the new [`Property`].
    pub kind: property::Kind,

    /// [`property::Area`] of the new [`Property`] in square feet.
    pub area: property::Area,

    /// Asking price of the new [`Property`].
    pub price: Money,

    /// [`property::Status`] of the new [`Property`].
    pub status: property::Status,

    /// [`property::Furnishing`] of the new [`Property`].
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

impl<Db> Command<CreateProperty> for Service<Db>
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
    Transacted<Db>: Database<Insert<Property>, Ok = (), Err = Traced<database::Error>>
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
        cmd: CreateProperty,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateProperty {
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

        let property = Property {
            id: property::Id::new(),
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
            created_at: DateTime::now().coerce(),
        };

        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        tx.execute(Insert(property.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        if let Some(owner_id) = owner_id {
            tx.execute(Delete(By::<property::Ownership, _>::new(property.id)))
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))?;
            tx.execute(Insert(property::Ownership {
                property_id: property.id,
                owner_id,
                share: Percent::ONE_HUNDRED,
            }))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        }
        if let Some(broker_id) = broker_id {
            tx.execute(Delete(By::<property::Brokerage, _>::new(property.id)))
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))?;
            tx.execute(Insert(property::Brokerage {
                property_id: property.id,
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

/// Error of [`CreateProperty`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

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
    use common::Percent;

    use super::CreateProperty;
    use crate::{
        command::fake::{build, Fake},
        domain::property,
        Command as _, Service,
    };

    fn command(title: &str) -> CreateProperty {
        CreateProperty {
            title: title.parse().unwrap(),
            address: "12 Canal Road".parse().unwrap(),
            city: "Lahore".parse().unwrap(),
            state: None,
            zip_code: None,
            kind: property::Kind::Residential,
            area: "1200".parse().unwrap(),
            price: "15000PKR".parse().unwrap(),
            status: property::Status::ForRent,
            furnishing: property::Furnishing::Unfurnished,
            bedrooms: Some(2),
            bathrooms: Some(1),
            description: None,
            owner_id: None,
            broker_id: None,
        }
    }

    #[tokio::test]
    async fn links_the_selected_owner_at_full_share() {
        let db = Fake::default();
        let ahmed = build::owner("Ahmed Khan");
        db.state().owners.push(ahmed.clone());
        let (svc, _bg) = Service::new(build::config(), db.clone());

        let property = svc
            .execute(CreateProperty {
                owner_id: Some(ahmed.id),
                ..command("Flat A")
            })
            .await
            .unwrap();

        let state = db.state();
        assert_eq!(state.properties.len(), 1);
        assert_eq!(state.ownerships.len(), 1);
        assert_eq!(state.ownerships[0].property_id, property.id);
        assert_eq!(state.ownerships[0].owner_id, ahmed.id);
        assert_eq!(state.ownerships[0].share, Percent::ONE_HUNDRED);
    }

    #[tokio::test]
    async fn unknown_owner_writes_nothing() {
        let db = Fake::default();
        let (svc, _bg) = Service::new(build::config(), db.clone());

        let result = svc
            .execute(CreateProperty {
                owner_id: Some(crate::domain::owner::Id::new()),
                ..command("Flat A")
            })
            .await;

        assert!(result.is_err());
        let state = db.state();
        assert!(state.properties.is_empty());
        assert!(state.ownerships.is_empty());
    }
}
