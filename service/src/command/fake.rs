//! In-memory fake [`Database`] for [`Command`] tests.
//!
//! Substituted through the `Service<Db>` generic in place of the Postgres
//! infrastructure.

use std::sync::{Arc, Mutex, MutexGuard};

use common::operations::{
    By, Commit, Delete, Insert, Lock, Select, Transact, Update,
};
use tracerr::Traced;

#[cfg(doc)]
use super::Command;
use crate::{
    domain::{
        agreement, broker, owner, property, tenant, Broker, Owner, Payment,
        Property, RentAgreement, Tenant,
    },
    infra::{database, Database},
};

/// In-memory [`Database`] fake backed by shared [`State`].
///
/// Transactions are modelled as clones sharing the same state; `Commit` is
/// a no-op.
#[derive(Clone, Debug, Default)]
pub(crate) struct Fake(Arc<Mutex<State>>);

/// Rows held by a [`Fake`] database.
#[derive(Debug, Default)]
pub(crate) struct State {
    pub(crate) properties: Vec<Property>,
    pub(crate) owners: Vec<Owner>,
    pub(crate) brokers: Vec<Broker>,
    pub(crate) tenants: Vec<Tenant>,
    pub(crate) ownerships: Vec<property::Ownership>,
    pub(crate) brokerages: Vec<property::Brokerage>,
    pub(crate) agreements: Vec<RentAgreement>,
    pub(crate) payments: Vec<Payment>,
}

impl Fake {
    /// Returns the [`State`] of this [`Fake`] database.
    pub(crate) fn state(&self) -> MutexGuard<'_, State> {
        self.0.lock().expect("not poisoned")
    }
}

impl Database<Transact> for Fake {
    type Ok = Self;
    type Err = Traced<database::Error>;

    async fn execute(&self, _: Transact) -> Result<Self::Ok, Self::Err> {
        Ok(self.clone())
    }
}

impl Database<Commit> for Fake {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(&self, _: Commit) -> Result<Self::Ok, Self::Err> {
        Ok(())
    }
}

impl Database<Lock<By<Property, property::Id>>> for Fake {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        _: Lock<By<Property, property::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(())
    }
}

impl Database<Select<By<Option<Property>, property::Id>>> for Fake {
    type Ok = Option<Property>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Property>, property::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        Ok(self.state().properties.iter().find(|p| p.id == id).cloned())
    }
}

impl Database<Select<By<Option<Owner>, owner::Id>>> for Fake {
    type Ok = Option<Owner>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Owner>, owner::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        Ok(self.state().owners.iter().find(|o| o.id == id).cloned())
    }
}

impl Database<Select<By<Option<Broker>, broker::Id>>> for Fake {
    type Ok = Option<Broker>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Broker>, broker::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        Ok(self.state().brokers.iter().find(|b| b.id == id).cloned())
    }
}

impl Database<Select<By<Option<Tenant>, tenant::Id>>> for Fake {
    type Ok = Option<Tenant>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Tenant>, tenant::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        Ok(self.state().tenants.iter().find(|t| t.id == id).cloned())
    }
}

impl Database<Select<By<Option<RentAgreement>, agreement::Id>>> for Fake {
    type Ok = Option<RentAgreement>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<RentAgreement>, agreement::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        Ok(self.state().agreements.iter().find(|a| a.id == id).cloned())
    }
}

impl Database<Select<By<Vec<property::Ownership>, property::Id>>> for Fake {
    type Ok = Vec<property::Ownership>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<property::Ownership>, property::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        Ok(self
            .state()
            .ownerships
            .iter()
            .filter(|o| o.property_id == id)
            .copied()
            .collect())
    }
}

impl Database<Insert<Property>> for Fake {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(property): Insert<Property>,
    ) -> Result<Self::Ok, Self::Err> {
        self.state().properties.push(property);
        Ok(())
    }
}

impl Database<Update<Property>> for Fake {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(property): Update<Property>,
    ) -> Result<Self::Ok, Self::Err> {
        let mut state = self.state();
        if let Some(p) =
            state.properties.iter_mut().find(|p| p.id == property.id)
        {
            *p = property;
        }
        Ok(())
    }
}

impl Database<Insert<Owner>> for Fake {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(owner): Insert<Owner>,
    ) -> Result<Self::Ok, Self::Err> {
        self.state().owners.push(owner);
        Ok(())
    }
}

impl Database<Insert<Broker>> for Fake {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(broker): Insert<Broker>,
    ) -> Result<Self::Ok, Self::Err> {
        self.state().brokers.push(broker);
        Ok(())
    }
}

impl Database<Insert<Tenant>> for Fake {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(tenant): Insert<Tenant>,
    ) -> Result<Self::Ok, Self::Err> {
        self.state().tenants.push(tenant);
        Ok(())
    }
}

impl Database<Insert<property::Ownership>> for Fake {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(ownership): Insert<property::Ownership>,
    ) -> Result<Self::Ok, Self::Err> {
        self.state().ownerships.push(ownership);
        Ok(())
    }
}

impl Database<Delete<By<property::Ownership, property::Id>>> for Fake {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<property::Ownership, property::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        self.state().ownerships.retain(|o| o.property_id != id);
        Ok(())
    }
}

impl Database<Insert<property::Brokerage>> for Fake {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(brokerage): Insert<property::Brokerage>,
    ) -> Result<Self::Ok, Self::Err> {
        self.state().brokerages.push(brokerage);
        Ok(())
    }
}

impl Database<Delete<By<property::Brokerage, property::Id>>> for Fake {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<property::Brokerage, property::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        self.state().brokerages.retain(|b| b.property_id != id);
        Ok(())
    }
}

impl Database<Insert<RentAgreement>> for Fake {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(agreement): Insert<RentAgreement>,
    ) -> Result<Self::Ok, Self::Err> {
        self.state().agreements.push(agreement);
        Ok(())
    }
}

impl Database<Update<RentAgreement>> for Fake {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(agreement): Update<RentAgreement>,
    ) -> Result<Self::Ok, Self::Err> {
        let mut state = self.state();
        if let Some(a) =
            state.agreements.iter_mut().find(|a| a.id == agreement.id)
        {
            *a = agreement;
        }
        Ok(())
    }
}

impl Database<Insert<Payment>> for Fake {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(payment): Insert<Payment>,
    ) -> Result<Self::Ok, Self::Err> {
        self.state().payments.push(payment);
        Ok(())
    }
}

impl Database<Update<By<RentAgreement, agreement::EndDate>>> for Fake {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(by): Update<By<RentAgreement, agreement::EndDate>>,
    ) -> Result<Self::Ok, Self::Err> {
        let deadline = by.into_inner();
        for a in &mut self.state().agreements {
            if a.status == agreement::Status::Active && a.end_date < deadline {
                a.status = agreement::Status::Expired;
            }
        }
        Ok(())
    }
}

/// Test helpers building domain values.
pub(crate) mod build {
    use common::{DateTime, Money};

    use crate::domain::{owner, property, tenant, Owner, Property, Tenant};

    /// Builds a [`Property`] with the provided `title` and `status`.
    pub(crate) fn property(
        title: &str,
        status: property::Status,
    ) -> Property {
        Property {
            id: property::Id::new(),
            title: title.parse().unwrap(),
            address: "12 Canal Road".parse().unwrap(),
            city: "Lahore".parse().unwrap(),
            state: Some("Punjab".parse().unwrap()),
            zip_code: None,
            kind: property::Kind::Residential,
            area: "1200".parse().unwrap(),
            price: Money::pkr("15000".parse().unwrap()),
            status,
            furnishing: property::Furnishing::Unfurnished,
            bedrooms: Some(2),
            bathrooms: Some(1),
            description: None,
            created_at: DateTime::now().coerce(),
        }
    }

    /// Builds an [`Owner`] with the provided `full_name`.
    pub(crate) fn owner(full_name: &str) -> Owner {
        Owner {
            id: owner::Id::new(),
            full_name: full_name.parse().unwrap(),
            phone: "+92 321 1234567".parse().unwrap(),
            email: None,
            address: None,
            created_at: DateTime::now().coerce(),
        }
    }

    /// Builds a [`Tenant`] with the provided `full_name`.
    pub(crate) fn tenant(full_name: &str) -> Tenant {
        Tenant {
            id: tenant::Id::new(),
            full_name: full_name.parse().unwrap(),
            phone: "0300-1112223".parse().unwrap(),
            email: None,
            address: None,
            created_at: DateTime::now().coerce(),
        }
    }

    /// [`crate::Config`] for tests.
    pub(crate) fn config() -> crate::Config {
        crate::Config {
            expire_agreements: crate::task::expire_agreements::Config {
                interval: std::time::Duration::from_secs(60 * 60),
            },
        }
    }
}
