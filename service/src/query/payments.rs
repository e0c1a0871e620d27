//! [`Query`] collection related to multiple [`Payment`]s.

use common::operations::By;

#[cfg(doc)]
use crate::domain::Payment;
use crate::read;
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries the full [`Payment`] list with its display joins, ordered by
/// payment date descending.
///
/// Filtering is applied in memory by the caller.
pub type List = DatabaseQuery<By<Vec<read::payment::ListItem>, ()>>;
