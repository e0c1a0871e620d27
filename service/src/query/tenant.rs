//! [`Query`] collection related to a single [`Tenant`].

use common::operations::By;

use crate::domain::{tenant, Tenant};
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries a [`Tenant`] by its [`tenant::Id`].
pub type ById = DatabaseQuery<By<Option<Tenant>, tenant::Id>>;
