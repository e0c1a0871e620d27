//! [`Query`] collection related to multiple [`Property`]s.

use common::operations::By;

#[cfg(doc)]
use crate::domain::Property;
use crate::read;
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries the full [`Property`] list with its display joins, ordered by
/// title.
///
/// Filtering is applied in memory by the caller.
pub type List = DatabaseQuery<By<Vec<read::property::ListItem>, ()>>;
