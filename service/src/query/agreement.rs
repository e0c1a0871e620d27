//! [`Query`] collection related to a single [`RentAgreement`].

use common::operations::By;

use crate::domain::{agreement, RentAgreement};
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries a [`RentAgreement`] by its [`agreement::Id`].
pub type ById = DatabaseQuery<By<Option<RentAgreement>, agreement::Id>>;
