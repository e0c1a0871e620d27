//! [`Query`] collection related to multiple [`Owner`]s.

use common::operations::By;

use crate::domain::Owner;
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries the full [`Owner`] list, ordered by full name.
///
/// Filtering is applied in memory by the caller.
pub type List = DatabaseQuery<By<Vec<Owner>, ()>>;
