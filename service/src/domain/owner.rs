//! [`Owner`] definitions.

use common::{unit, DateTimeOf};
#[cfg(doc)]
use common::DateTime;
use derive_more::{Display, From, FromStr, Into};
#[cfg(feature = "postgres")]
use postgres_types::{FromSql, ToSql};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::contact::{Email, FullName, Phone, PostalAddress};
#[cfg(doc)]
use crate::domain::Property;

/// Owner of one or more [`Property`]s.
#[derive(Clone, Debug)]
pub struct Owner {
    /// ID of this [`Owner`].
    pub id: Id,

    /// [`FullName`] of this [`Owner`].
    pub full_name: FullName,

    /// [`Phone`] number of this [`Owner`].
    pub phone: Phone,

    /// [`Email`] address of this [`Owner`], if any.
    pub email: Option<Email>,

    /// [`PostalAddress`] of this [`Owner`], if any.
    pub address: Option<PostalAddress>,

    /// [`DateTime`] when this [`Owner`] was created.
    pub created_at: CreationDateTime,
}

/// ID of an [`Owner`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
#[cfg_attr(feature = "postgres", derive(ToSql, FromSql), postgres(transparent))]
pub struct Id(Uuid);

impl Id {
    /// Creates a new random [`Id`].
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

/// [`DateTime`] when an [`Owner`] was created.
pub type CreationDateTime = DateTimeOf<(Owner, unit::Creation)>;
