//! [`Query`] collection related to multiple [`Broker`]s.

use common::operations::By;

use crate::domain::Broker;
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries the full [`Broker`] list, ordered by full name.
///
/// Filtering is applied in memory by the caller.
pub type List = DatabaseQuery<By<Vec<Broker>, ()>>;
