//! [`ExpireAgreements`] [`Task`].

use std::{convert::Infallible, error::Error, time};

use common::{
    operations::{By, Perform, Start, Update},
    Date,
};
use tokio::time::interval;
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{agreement, RentAgreement},
    infra::{database, Database},
    Service,
};

use super::Task;

/// Configuration for [`ExpireAgreements`] [`Task`].
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Interval between [`RentAgreement`] expiration sweeps.
    pub interval: time::Duration,
}

/// [`Task`] marking [`agreement::Status::Active`] [`RentAgreement`]s whose
/// term has ended as [`agreement::Status::Expired`].
///
/// The property status is left untouched: it only transitions on agreement
/// creation and property edits.
#[derive(Clone, Copy, Debug)]
pub struct ExpireAgreements<S> {
    /// [`Config`] of this [`Task`].
    config: Config,

    /// [`Service`] instance.
    service: S,
}

impl<Db> Task<Start<By<ExpireAgreements<Self>, Config>>> for Service<Db>
where
    ExpireAgreements<Service<Db>>:
        Task<Perform<()>, Ok = (), Err: Error> + Send + Sync + 'static,
    Self: Clone,
{
    type Ok = ();
    type Err = Infallible;

    async fn execute(
        &self,
        Start(by): Start<By<ExpireAgreements<Self>, Config>>,
    ) -> Result<Self::Ok, Self::Err> {
        let config = by.into_inner();
        let task = ExpireAgreements {
            config,
            service: self.clone(),
        };

        let mut interval = interval(task.config.interval);
        loop {
            let _ = interval.tick().await;
            _ = task.execute(Perform(())).await.map_err(|e| {
                log::error!("`task::ExpireAgreements` failed: {e}");
            });
        }
    }
}

impl<Db> Task<Perform<()>> for ExpireAgreements<Service<Db>>
where
    Db: Database<
        Update<By<RentAgreement, agreement::EndDate>>,
        Ok = (),
        Err = Traced<database::Error>,
    >,
{
    type Ok = ();
    type Err = ExecutionError;

    async fn execute(&self, _: Perform<()>) -> Result<Self::Ok, Self::Err> {
        let today: agreement::EndDate = Date::today().coerce();
        self.service
            .database()
            .execute(Update(By::new(today)))
            .await
            .map_err(tracerr::map_from_and_wrap!())
    }
}

/// Error of [`ExpireAgreements`] execution.
pub type ExecutionError = Traced<database::Error>;

#[cfg(test)]
mod spec {
    use common::operations::{By, Update};

    use crate::{
        command::fake::Fake,
        domain::{agreement, property, tenant, RentAgreement},
        infra::Database as _,
    };

    fn agreement(end: &str, status: agreement::Status) -> RentAgreement {
        RentAgreement {
            id: agreement::Id::new(),
            property_id: property::Id::new(),
            tenant_id: tenant::Id::new(),
            owner_id: None,
            start_date: common::Date::from_iso8601("2020-01-01")
                .unwrap()
                .coerce(),
            end_date: common::Date::from_iso8601(end).unwrap().coerce(),
            monthly_rent: "15000PKR".parse().unwrap(),
            security_deposit: common::Money::ZERO_PKR,
            terms: None,
            status,
            created_at: common::DateTime::now().coerce(),
        }
    }

    #[tokio::test]
    async fn marks_overdue_active_agreements_expired() {
        let db = Fake::default();
        {
            let mut state = db.state();
            state
                .agreements
                .push(agreement("2020-12-31", agreement::Status::Active));
            state
                .agreements
                .push(agreement("2999-12-31", agreement::Status::Active));
            state
                .agreements
                .push(agreement("2020-12-31", agreement::Status::Terminated));
        }

        let deadline: agreement::EndDate = common::Date::today().coerce();
        db.execute(Update(By::new(deadline))).await.unwrap();

        let state = db.state();
        assert_eq!(state.agreements[0].status, agreement::Status::Expired);
        assert_eq!(state.agreements[1].status, agreement::Status::Active);
        assert_eq!(state.agreements[2].status, agreement::Status::Terminated);
    }
}
