//! [`Command`] for creating a new [`Tenant`].

use common::{operations::Insert, DateTime};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{
        contact::{Email, FullName, Phone, PostalAddress},
        tenant, Tenant,
    },
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for creating a new [`Tenant`].
#[derive(Clone, Debug)]
pub struct CreateTenant {
    /// [`FullName`] of the new [`Tenant`].
    pub full_name: FullName,

    /// [`Phone`] number of the new [`Tenant`].
    pub phone: Phone,

    /// [`Email`] address of the new [`Tenant`], if any.
    pub email: Option<Email>,

    /// [`PostalAddress`] of the new [`Tenant`], if any.
    pub address: Option<PostalAddress>,
}

impl<Db> Command<CreateTenant> for Service<Db>
where
    Db: Database<Insert<Tenant>, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = Tenant;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: CreateTenant) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateTenant {
            full_name,
            phone,
            email,
            address,
        } = cmd;

        let tenant = Tenant {
            id: tenant::Id::new(),
            full_name,
            phone,
            email,
            address,
            created_at: DateTime::now().coerce(),
        };
        self.database()
            .execute(Insert(tenant.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(tenant)
    }
}

/// Error of [`CreateTenant`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),
}
