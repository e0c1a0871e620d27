//! [`Command`] for creating a new [`Owner`].

use common::{operations::Insert, DateTime};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{
        contact::{Email, FullName, Phone, PostalAddress},
        owner, Owner,
    },
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for creating a new [`Owner`].
#[derive(Clone, Debug)]
pub struct CreateOwner {
    /// [`FullName`] of the new [`Owner`].
    pub full_name: FullName,

    /// [`Phone`] number of the new [`Owner`].
    pub phone: Phone,

    /// [`Email`] address of the new [`Owner`], if any.
    pub email: Option<Email>,

    /// [`PostalAddress`] of the new [`Owner`], if any.
    pub address: Option<PostalAddress>,
}

impl<Db> Command<CreateOwner> for Service<Db>
where
    Db: Database<Insert<Owner>, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = Owner;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: CreateOwner) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateOwner {
            full_name,
            phone,
            email,
            address,
        } = cmd;

        let owner = Owner {
            id: owner::Id::new(),
            full_name,
            phone,
            email,
            address,
            created_at: DateTime::now().coerce(),
        };
        self.database()
            .execute(Insert(owner.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(owner)
    }
}

/// Error of [`CreateOwner`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),
}
