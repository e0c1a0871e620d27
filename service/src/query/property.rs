//! [`Query`] collection related to a single [`Property`].

use common::operations::By;

use crate::{
    domain::{property, Property},
    read,
};
#[cfg(doc)]
use crate::{domain::Owner, Query};

use super::DatabaseQuery;

/// Queries a [`Property`] by its [`property::Id`].
pub type ById = DatabaseQuery<By<Option<Property>, property::Id>>;

/// Queries the primary [`Owner`] of a [`Property`], powering the owner
/// pre-fill of the rent-agreement form.
pub type PrimaryOwner =
    DatabaseQuery<By<Option<read::property::PrimaryOwner>, property::Id>>;

/// Queries the [`Owner`] references linked to a [`Property`].
pub type Owners =
    DatabaseQuery<By<Vec<read::property::OwnerRef>, property::Id>>;

/// Queries the broker references linked to a [`Property`].
pub type Brokers =
    DatabaseQuery<By<Vec<read::property::BrokerRef>, property::Id>>;
