//! [`Query`] collection related to multiple [`Tenant`]s.

use common::operations::By;

use crate::domain::Tenant;
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries the full [`Tenant`] list, ordered by full name.
///
/// Filtering is applied in memory by the caller.
pub type List = DatabaseQuery<By<Vec<Tenant>, ()>>;
