//! [`Query`] collection related to multiple [`RentAgreement`]s.

use common::operations::By;

#[cfg(doc)]
use crate::domain::RentAgreement;
use crate::read;
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries the full [`RentAgreement`] list with its display joins, ordered
/// by start date descending.
///
/// Filtering is applied in memory by the caller.
pub type List = DatabaseQuery<By<Vec<read::agreement::ListItem>, ()>>;
