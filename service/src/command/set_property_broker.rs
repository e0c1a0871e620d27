//! [`Command`] replacing the broker assignment of a [`Property`].

use common::operations::{
    By, Commit, Delete, Insert, Lock, Select, Transact, Transacted,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{broker, property, Broker, Property},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] replacing the broker assignment of a [`Property`].
///
/// Same single-select replacement contract as
/// [`SetPropertyOwner`](super::SetPropertyOwner), without a share.
#[derive(Clone, Copy, Debug)]
pub struct SetPropertyBroker {
    /// ID of the [`Property`] to assign the [`Broker`] to.
    pub property_id: property::Id,

    /// ID of the [`Broker`] to assign, if any.
    pub broker_id: Option<broker::Id>,
}

impl<Db> Command<SetPropertyBroker> for Service<Db>
where
    Db: Database<Transact, Err = Traced<database::Error>>
        + Database<
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
    type Ok = Option<property::Brokerage>;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: SetPropertyBroker,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let SetPropertyBroker {
            property_id,
            broker_id,
        } = cmd;

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
        tx.execute(Lock(By::new(property_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        tx.execute(Select(By::<Option<Property>, _>::new(property_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::PropertyNotExists(property_id))
            .map_err(tracerr::wrap!())
            .map(drop)?;

        tx.execute(Delete(By::<property::Brokerage, _>::new(property_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let brokerage = if let Some(broker_id) = broker_id {
            let brokerage = property::Brokerage {
                property_id,
                broker_id,
            };
            tx.execute(Insert(brokerage))
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))?;
            Some(brokerage)
        } else {
            None
        };

        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(brokerage)
    }
}

/// Error of [`SetPropertyBroker`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// [`Broker`] with the provided ID does not exist.
    #[display("`Broker(id: {_0})` does not exist")]
    #[from(ignore)]
    BrokerNotExists(#[error(not(source))] broker::Id),

    /// [`Property`] with the provided ID does not exist.
    #[display("`Property(id: {_0})` does not exist")]
    #[from(ignore)]
    PropertyNotExists(#[error(not(source))] property::Id),
}
