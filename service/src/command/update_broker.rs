//! [`Command`] for updating a [`Broker`].

use common::operations::{By, Commit, Select, Transact, Transacted, Update};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{
        broker,
        contact::{Email, FullName, Phone, PostalAddress},
        Broker,
    },
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for updating a [`Broker`].
#[derive(Clone, Debug)]
pub struct UpdateBroker {
    /// ID of the [`Broker`] to update.
    pub id: broker::Id,

    /// New [`FullName`] of the [`Broker`].
    pub full_name: FullName,

    /// New [`Phone`] number of the [`Broker`].
    pub phone: Phone,

    /// New [`Email`] address of the [`Broker`], if any.
    pub email: Option<Email>,

    /// New [`broker::AgencyName`] of the [`Broker`].
    pub agency_name: broker::AgencyName,

    /// New [`PostalAddress`] of the agency, if any.
    pub agency_address: Option<PostalAddress>,
}

impl<Db> Command<UpdateBroker> for Service<Db>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Select<By<Option<Broker>, broker::Id>>,
            Ok = Option<Broker>,
            Err = Traced<database::Error>,
        > + Database<Update<Broker>, Ok = (), Err = Traced<database::Error>>
        + Database<Commit, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = Broker;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: UpdateBroker) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let UpdateBroker {
            id,
            full_name,
            phone,
            email,
            agency_name,
            agency_address,
        } = cmd;

        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let mut broker = tx
            .execute(Select(By::<Option<Broker>, _>::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::BrokerNotExists(id))
            .map_err(tracerr::wrap!())?;

        broker.full_name = full_name;
        broker.phone = phone;
        broker.email = email;
        broker.agency_name = agency_name;
        broker.agency_address = agency_address;
        tx.execute(Update(broker.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(broker)
    }
}

/// Error of [`UpdateBroker`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// [`Broker`] with the provided ID does not exist.
    #[display("`Broker(id: {_0})` does not exist")]
    #[from(ignore)]
    BrokerNotExists(#[error(not(source))] broker::Id),
}
