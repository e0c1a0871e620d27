//! [`Query`] collection related to a single [`Owner`].

use common::operations::By;

use crate::domain::{owner, Owner};
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries an [`Owner`] by its [`owner::Id`].
pub type ById = DatabaseQuery<By<Option<Owner>, owner::Id>>;
