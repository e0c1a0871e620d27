//! [`Command`] for creating a new [`Broker`].

use common::{operations::Insert, DateTime};
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

/// [`Command`] for creating a new [`Broker`].
#[derive(Clone, Debug)]
pub struct CreateBroker {
    /// [`FullName`] of the new [`Broker`].
    pub full_name: FullName,

    /// [`Phone`] number of the new [`Broker`].
    pub phone: Phone,

    /// [`Email`] address of the new [`Broker`], if any.
    pub email: Option<Email>,

    /// [`broker::AgencyName`] the new [`Broker`] works for.
    pub agency_name: broker::AgencyName,

    /// [`PostalAddress`] of the agency, if any.
    pub agency_address: Option<PostalAddress>,
}

impl<Db> Command<CreateBroker> for Service<Db>
where
    Db: Database<Insert<Broker>, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = Broker;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: CreateBroker) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateBroker {
            full_name,
            phone,
            email,
            agency_name,
            agency_address,
        } = cmd;

        let broker = Broker {
            id: broker::Id::new(),
            full_name,
            phone,
            email,
            agency_name,
            agency_address,
            created_at: DateTime::now().coerce(),
        };
        self.database()
            .execute(Insert(broker.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(broker)
    }
}

/// Error of [`CreateBroker`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),
}
