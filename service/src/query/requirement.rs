//! [`Query`] collection related to a single [`Requirement`].

use common::operations::By;

use crate::domain::{requirement, Requirement};
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries a [`Requirement`] by its [`requirement::Id`].
pub type ById = DatabaseQuery<By<Option<Requirement>, requirement::Id>>;
