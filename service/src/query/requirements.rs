//! [`Query`] collection related to multiple [`Requirement`]s.

use common::operations::By;

use crate::domain::Requirement;
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries the full [`Requirement`] list, ordered by inquiry date
/// descending.
///
/// Filtering is applied in memory by the caller.
pub type List = DatabaseQuery<By<Vec<Requirement>, ()>>;
