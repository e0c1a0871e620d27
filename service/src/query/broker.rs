//! [`Query`] collection related to a single [`Broker`].

use common::operations::By;

use crate::domain::{broker, Broker};
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries a [`Broker`] by its [`broker::Id`].
pub type ById = DatabaseQuery<By<Option<Broker>, broker::Id>>;
