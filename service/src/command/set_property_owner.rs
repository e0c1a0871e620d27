//! [`Command`] replacing the [`Owner`] assignment of a [`Property`].

use common::{
    operations::{By, Commit, Delete, Insert, Lock, Select, Transact, Transacted},
    Percent,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{owner, property, Owner, Property},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] replacing the [`Owner`] assignment of a [`Property`].
///
/// The single-select assignment contract: every existing [`Ownership`] row
/// of the [`Property`] is deleted, and one new row with the whole share is
/// inserted when an [`Owner`] is given. No [`Owner`] means the [`Property`]
/// is left unowned.
///
/// [`Ownership`]: property::Ownership
#[derive(Clone, Copy, Debug)]
pub struct SetPropertyOwner {
    /// ID of the [`Property`] to assign the [`Owner`] to.
    pub property_id: property::Id,

    /// ID of the [`Owner`] to assign, if any.
    pub owner_id: Option<owner::Id>,
}

impl<Db> Command<SetPropertyOwner> for Service<Db>
where
    Db: Database<Transact, Err = Traced<database::Error>>
        + Database<
            Select<By<Option<Owner>, owner::Id>>,
            Ok = Option<Owner>,
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
            Delete<By<property::Ownership, property::Id>>,
            Ok = (),
            Err = Traced<database::Error>,
        > + Database<
            Insert<property::Ownership>,
            Ok = (),
            Err = Traced<database::Error>,
        > + Database<Commit, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = Option<property::Ownership>;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: SetPropertyOwner,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let SetPropertyOwner {
            property_id,
            owner_id,
        } = cmd;

        if let Some(owner_id) = owner_id {
            self.database()
                .execute(Select(By::<Option<Owner>, _>::new(owner_id)))
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))?
                .ok_or(E::OwnerNotExists(owner_id))
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

        tx.execute(Delete(By::<property::Ownership, _>::new(property_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let ownership = if let Some(owner_id) = owner_id {
            let ownership = property::Ownership {
                property_id,
                owner_id,
                share: Percent::ONE_HUNDRED,
            };
            tx.execute(Insert(ownership))
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))?;
            Some(ownership)
        } else {
            None
        };

        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(ownership)
    }
}

/// Error of [`SetPropertyOwner`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// [`Owner`] with the provided ID does not exist.
    #[display("`Owner(id: {_0})` does not exist")]
    #[from(ignore)]
    OwnerNotExists(#[error(not(source))] owner::Id),

    /// [`Property`] with the provided ID does not exist.
    #[display("`Property(id: {_0})` does not exist")]
    #[from(ignore)]
    PropertyNotExists(#[error(not(source))] property::Id),
}

#[cfg(test)]
mod spec {
    use common::Percent;

    use super::SetPropertyOwner;
    use crate::{
        command::fake::{build, Fake},
        domain::property,
        Command as _, Service,
    };

    #[tokio::test]
    async fn setting_none_leaves_the_property_unowned() {
        let db = Fake::default();
        let p = build::property("Flat A", property::Status::ForRent);
        let o = build::owner("Ahmed Khan");
        {
            let mut state = db.state();
            state.properties.push(p.clone());
            state.owners.push(o.clone());
        }
        let (svc, _bg) = Service::new(build::config(), db.clone());

        svc.execute(SetPropertyOwner {
            property_id: p.id,
            owner_id: Some(o.id),
        })
        .await
        .unwrap();
        svc.execute(SetPropertyOwner {
            property_id: p.id,
            owner_id: None,
        })
        .await
        .unwrap();

        assert_eq!(db.state().ownerships.len(), 0);
    }

    #[tokio::test]
    async fn reassignment_keeps_exactly_one_row() {
        let db = Fake::default();
        let p = build::property("Flat A", property::Status::ForRent);
        let o1 = build::owner("Ahmed Khan");
        let o2 = build::owner("Sana Malik");
        {
            let mut state = db.state();
            state.properties.push(p.clone());
            state.owners.push(o1.clone());
            state.owners.push(o2.clone());
        }
        let (svc, _bg) = Service::new(build::config(), db.clone());

        svc.execute(SetPropertyOwner {
            property_id: p.id,
            owner_id: Some(o1.id),
        })
        .await
        .unwrap();
        svc.execute(SetPropertyOwner {
            property_id: p.id,
            owner_id: Some(o2.id),
        })
        .await
        .unwrap();

        let state = db.state();
        assert_eq!(state.ownerships.len(), 1);
        assert_eq!(state.ownerships[0].owner_id, o2.id);
        assert_eq!(state.ownerships[0].share, Percent::ONE_HUNDRED);
    }

    #[tokio::test]
    async fn missing_owner_aborts_before_any_write() {
        let db = Fake::default();
        let p = build::property("Flat A", property::Status::ForRent);
        let o = build::owner("Ahmed Khan");
        {
            let mut state = db.state();
            state.properties.push(p.clone());
            state.owners.push(o.clone());
        }
        let (svc, _bg) = Service::new(build::config(), db.clone());

        svc.execute(SetPropertyOwner {
            property_id: p.id,
            owner_id: Some(o.id),
        })
        .await
        .unwrap();

        let absent = crate::domain::owner::Id::new();
        let result = svc
            .execute(SetPropertyOwner {
                property_id: p.id,
                owner_id: Some(absent),
            })
            .await;

        assert!(result.is_err());
        // The previous assignment is untouched.
        let state = db.state();
        assert_eq!(state.ownerships.len(), 1);
        assert_eq!(state.ownerships[0].owner_id, o.id);
    }
}
