//! Dashboard read definitions.

use derive_more::{From, Into};

use crate::domain::Property;
#[cfg(doc)]
use crate::domain::{Payment, RentAgreement};

use super::{agreement, payment};

/// Most recently created [`Property`]s, newest first.
#[derive(Clone, Debug, From, Into)]
pub struct RecentProperties(pub Vec<Property>);

/// Most recent [`Payment`]s by payment date, newest first.
#[derive(Clone, Debug, From, Into)]
pub struct RecentPayments(pub Vec<payment::ListItem>);

/// [`RentAgreement`]s whose term ends today or later, nearest first.
#[derive(Clone, Debug, From, Into)]
pub struct UpcomingExpirations(pub Vec<agreement::ListItem>);

/// Number of rows a dashboard widget shows.
pub const WIDGET_LIMIT: i32 = 5;
