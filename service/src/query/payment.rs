//! [`Query`] collection related to a single [`Payment`].

use common::operations::By;

#[cfg(doc)]
use crate::domain::Payment;
use crate::{domain::payment, read};
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries a [`Payment`] with its display joins by its [`payment::Id`].
pub type ById =
    DatabaseQuery<By<Option<read::payment::ListItem>, payment::Id>>;
