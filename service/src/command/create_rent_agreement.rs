//! [`Command`] for creating a new [`RentAgreement`].

use common::{
    operations::{
        By, Commit, Insert, Lock, Select, Transact, Transacted, Update,
    },
    DateTime, Money, Percent,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{
        agreement, owner, property, tenant, Owner, Property, RentAgreement,
        Tenant,
    },
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for creating a new [`RentAgreement`].
///
/// Besides inserting the agreement itself, in the same transaction:
/// - the [`Property`] status flips to [`property::Status::Rented`];
/// - when an [`Owner`] is given, an [`Ownership`] row linking it to the
///   [`Property`] is ensured (inserted only if absent).
///
/// [`Ownership`]: property::Ownership
#[derive(Clone, Debug)]
pub struct CreateRentAgreement {
    /// ID of the [`Property`] to rent out.
    pub property_id: property::Id,

    /// ID of the renting [`Tenant`].
    pub tenant_id: tenant::Id,

    /// ID of the [`Owner`] the agreement is signed with, if recorded.
    pub owner_id: Option<owner::Id>,

    /// [`agreement::StartDate`] of the rent term.
    pub start_date: agreement::StartDate,

    /// [`agreement::EndDate`] of the rent term.
    pub end_date: agreement::EndDate,

    /// Monthly rent amount.
    pub monthly_rent: Money,

    /// Security deposit paid at the beginning of the term.
    pub security_deposit: Money,

    /// Free-form [`agreement::Terms`], if any.
    pub terms: Option<agreement::Terms>,

    /// [`agreement::Status`] of the new [`RentAgreement`].
    pub status: agreement::Status,
}

impl<Db> Command<CreateRentAgreement> for Service<Db>
where
    Db: Database<Transact, Err = Traced<database::Error>>
        + Database<
            Select<By<Option<Property>, property::Id>>,
            Ok = Option<Property>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<Tenant>, tenant::Id>>,
            Ok = Option<Tenant>,
            Err = Traced<database::Error>,
        > + Database<
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
            Insert<RentAgreement>,
            Ok = (),
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Vec<property::Ownership>, property::Id>>,
            Ok = Vec<property::Ownership>,
            Err = Traced<database::Error>,
        > + Database<
            Insert<property::Ownership>,
            Ok = (),
            Err = Traced<database::Error>,
        > + Database<Update<Property>, Ok = (), Err = Traced<database::Error>>
        + Database<Commit, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = RentAgreement;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: CreateRentAgreement,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateRentAgreement {
            property_id,
            tenant_id,
            owner_id,
            start_date,
            end_date,
            monthly_rent,
            security_deposit,
            terms,
            status,
        } = cmd;

        if monthly_rent.is_negative() || security_deposit.is_negative() {
            return Err(tracerr::new!(E::NegativeAmount));
        }

        self.database()
            .execute(Select(By::<Option<Property>, _>::new(property_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::PropertyNotExists(property_id))
            .map_err(tracerr::wrap!())
            .map(drop)?;
        self.database()
            .execute(Select(By::<Option<Tenant>, _>::new(tenant_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::TenantNotExists(tenant_id))
            .map_err(tracerr::wrap!())
            .map(drop)?;
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

        let mut property = tx
            .execute(Select(By::<Option<Property>, _>::new(property_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::PropertyNotExists(property_id))
            .map_err(tracerr::wrap!())?;

        let rent_agreement = RentAgreement {
            id: agreement::Id::new(),
            property_id,
            tenant_id,
            owner_id,
            start_date,
            end_date,
            monthly_rent,
            security_deposit,
            terms,
            status,
            created_at: DateTime::now().coerce(),
        };
        tx.execute(Insert(rent_agreement.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        if let Some(owner_id) = owner_id {
            let linked = tx
                .execute(Select(By::<Vec<property::Ownership>, _>::new(
                    property_id,
                )))
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))?
                .iter()
                .any(|o| o.owner_id == owner_id);
            if !linked {
                tx.execute(Insert(property::Ownership {
                    property_id,
                    owner_id,
                    share: Percent::ONE_HUNDRED,
                }))
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))?;
            }
        }

        property.status = property::Status::Rented;
        tx.execute(Update(property))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(rent_agreement)
    }
}

/// Error of [`CreateRentAgreement`] [`Command`] execution.
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

    /// [`Tenant`] with the provided ID does not exist.
    #[display("`Tenant(id: {_0})` does not exist")]
    #[from(ignore)]
    TenantNotExists(#[error(not(source))] tenant::Id),

    /// [`Owner`] with the provided ID does not exist.
    #[display("`Owner(id: {_0})` does not exist")]
    #[from(ignore)]
    OwnerNotExists(#[error(not(source))] owner::Id),

    /// Provided rent or deposit amount is negative.
    #[display("`RentAgreement` amounts cannot be negative")]
    NegativeAmount,
}

#[cfg(test)]
mod spec {
    use common::{Date, Money};

    use super::CreateRentAgreement;
    use crate::{
        command::fake::{build, Fake},
        domain::{agreement, property},
        Command as _, Service,
    };

    fn command(
        property_id: property::Id,
        tenant_id: crate::domain::tenant::Id,
        owner_id: Option<crate::domain::owner::Id>,
    ) -> CreateRentAgreement {
        CreateRentAgreement {
            property_id,
            tenant_id,
            owner_id,
            start_date: Date::from_iso8601("2025-07-01").unwrap().coerce(),
            end_date: Date::from_iso8601("2026-06-30").unwrap().coerce(),
            monthly_rent: "15000PKR".parse().unwrap(),
            security_deposit: Money::ZERO_PKR,
            terms: None,
            status: agreement::Status::Active,
        }
    }

    #[tokio::test]
    async fn marks_the_property_rented() {
        let db = Fake::default();
        let p = build::property("Flat A", property::Status::ForRent);
        let t = build::tenant("Bilal Hussain");
        {
            let mut state = db.state();
            state.properties.push(p.clone());
            state.tenants.push(t.clone());
        }
        let (svc, _bg) = Service::new(build::config(), db.clone());

        let agreement = svc
            .execute(command(p.id, t.id, None))
            .await
            .unwrap();

        assert_eq!(agreement.property_id, p.id);
        assert_eq!(agreement.tenant_id, t.id);

        let state = db.state();
        assert_eq!(state.agreements.len(), 1);
        assert_eq!(state.properties[0].status, property::Status::Rented);
    }

    #[tokio::test]
    async fn ensures_the_ownership_link_idempotently() {
        let db = Fake::default();
        let p = build::property("Flat A", property::Status::ForRent);
        let o = build::owner("Ahmed Khan");
        let t = build::tenant("Bilal Hussain");
        {
            let mut state = db.state();
            state.properties.push(p.clone());
            state.owners.push(o.clone());
            state.tenants.push(t.clone());
        }
        let (svc, _bg) = Service::new(build::config(), db.clone());

        svc.execute(command(p.id, t.id, Some(o.id))).await.unwrap();
        // A second agreement with the same pair must not duplicate the link.
        svc.execute(command(p.id, t.id, Some(o.id))).await.unwrap();

        let state = db.state();
        assert_eq!(state.agreements.len(), 2);
        assert_eq!(state.ownerships.len(), 1);
        assert_eq!(state.ownerships[0].owner_id, o.id);
    }

    #[tokio::test]
    async fn unknown_tenant_writes_nothing() {
        let db = Fake::default();
        let p = build::property("Flat A", property::Status::ForRent);
        db.state().properties.push(p.clone());
        let (svc, _bg) = Service::new(build::config(), db.clone());

        let result = svc
            .execute(command(p.id, crate::domain::tenant::Id::new(), None))
            .await;

        assert!(result.is_err());
        let state = db.state();
        assert!(state.agreements.is_empty());
        assert_eq!(state.properties[0].status, property::Status::ForRent);
    }
}
