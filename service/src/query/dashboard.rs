//! Dashboard [`Summary`] query.

use common::{
    operations::{By, Select},
    Date,
};
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::{Owner, Payment, Property, RentAgreement, Tenant};
use crate::{
    infra::{database, Database},
    read, Query, Service,
};

/// [`Query`] aggregating the dashboard widgets.
///
/// All underlying reads are issued concurrently and joined before the
/// aggregate is returned.
#[derive(Clone, Copy, Debug, Default)]
pub struct Summary;

/// Output of the [`Summary`] [`Query`].
#[derive(Clone, Debug)]
pub struct Output {
    /// Total count of [`Property`]s.
    pub total_properties: read::property::TotalCount,

    /// Total count of [`Owner`]s.
    pub total_owners: read::owner::TotalCount,

    /// Total count of [`Tenant`]s.
    pub total_tenants: read::tenant::TotalCount,

    /// Count of active [`RentAgreement`]s.
    pub active_agreements: read::agreement::ActiveCount,

    /// Most recently created [`Property`]s.
    pub recent_properties: read::dashboard::RecentProperties,

    /// Most recent [`Payment`]s.
    pub recent_payments: read::dashboard::RecentPayments,

    /// [`RentAgreement`]s expiring soonest.
    pub upcoming_expirations: read::dashboard::UpcomingExpirations,
}

impl<Db> Query<Summary> for Service<Db>
where
    Db: Database<
            Select<By<read::property::TotalCount, ()>>,
            Ok = read::property::TotalCount,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<read::owner::TotalCount, ()>>,
            Ok = read::owner::TotalCount,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<read::tenant::TotalCount, ()>>,
            Ok = read::tenant::TotalCount,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<read::agreement::ActiveCount, ()>>,
            Ok = read::agreement::ActiveCount,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<read::dashboard::RecentProperties, ()>>,
            Ok = read::dashboard::RecentProperties,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<read::dashboard::RecentPayments, ()>>,
            Ok = read::dashboard::RecentPayments,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<read::dashboard::UpcomingExpirations, Date>>,
            Ok = read::dashboard::UpcomingExpirations,
            Err = Traced<database::Error>,
        >,
{
    type Ok = Output;
    type Err = Traced<database::Error>;

    async fn execute(&self, _: Summary) -> Result<Self::Ok, Self::Err> {
        let db = self.database();

        let (
            total_properties,
            total_owners,
            total_tenants,
            active_agreements,
            recent_properties,
            recent_payments,
            upcoming_expirations,
        ) = futures::try_join!(
            db.execute(Select(By::<read::property::TotalCount, _>::new(()))),
            db.execute(Select(By::<read::owner::TotalCount, _>::new(()))),
            db.execute(Select(By::<read::tenant::TotalCount, _>::new(()))),
            db.execute(Select(By::<read::agreement::ActiveCount, _>::new(()))),
            db.execute(Select(
                By::<read::dashboard::RecentProperties, _>::new(())
            )),
            db.execute(Select(By::<read::dashboard::RecentPayments, _>::new(
                ()
            ))),
            db.execute(Select(
                By::<read::dashboard::UpcomingExpirations, _>::new(
                    Date::today()
                )
            )),
        )
        .map_err(tracerr::wrap!())?;

        Ok(Output {
            total_properties,
            total_owners,
            total_tenants,
            active_agreements,
            recent_properties,
            recent_payments,
            upcoming_expirations,
        })
    }
}
