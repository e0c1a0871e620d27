//! Dashboard-related definitions.

use derive_more::{From, Into};
use juniper::graphql_object;
use service::query;

use crate::{api, Context};

/// Aggregated dashboard widgets.
#[derive(Clone, Debug, From, Into)]
pub struct Dashboard(query::dashboard::Output);

/// Aggregated dashboard widgets.
#[graphql_object(context = Context)]
impl Dashboard {
    /// Total count of `Property`s.
    #[must_use]
    pub fn total_properties(&self) -> i32 {
        self.0.total_properties.into()
    }

    /// Total count of `Owner`s.
    #[must_use]
    pub fn total_owners(&self) -> i32 {
        self.0.total_owners.into()
    }

    /// Total count of `Tenant`s.
    #[must_use]
    pub fn total_tenants(&self) -> i32 {
        self.0.total_tenants.into()
    }

    /// Count of active `RentAgreement`s.
    #[must_use]
    pub fn active_agreements(&self) -> i32 {
        self.0.active_agreements.into()
    }

    /// Most recently created `Property`s, newest first.
    #[must_use]
    pub fn recent_properties(&self) -> Vec<api::Property> {
        self.0
            .recent_properties
            .0
            .iter()
            .cloned()
            .map(Into::into)
            .collect()
    }

    /// Most recent `Payment`s by payment date, newest first.
    #[must_use]
    pub fn recent_payments(&self) -> Vec<api::Payment> {
        self.0
            .recent_payments
            .0
            .iter()
            .cloned()
            .map(Into::into)
            .collect()
    }

    /// `RentAgreement`s whose term ends today or later, nearest first.
    #[must_use]
    pub fn upcoming_expirations(&self) -> Vec<api::agreement::ListItem> {
        self.0
            .upcoming_expirations
            .0
            .iter()
            .cloned()
            .map(Into::into)
            .collect()
    }
}
