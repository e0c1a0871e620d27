//! [`Broker`] definitions.

use std::str::FromStr;

use common::{unit, DateTimeOf};
#[cfg(doc)]
use common::DateTime;
use derive_more::{AsRef, Display, From, FromStr as DeriveFromStr, Into};
#[cfg(feature = "postgres")]
use postgres_types::{FromSql, ToSql};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::contact::{Email, FullName, Phone, PostalAddress};
#[cfg(doc)]
use crate::domain::Property;

/// Broker assigned to [`Property`]s.
#[derive(Clone, Debug)]
pub struct Broker {
    /// ID of this [`Broker`].
    pub id: Id,

    /// [`FullName`] of this [`Broker`].
    pub full_name: FullName,

    /// [`Phone`] number of this [`Broker`].
    pub phone: Phone,

    /// [`Email`] address of this [`Broker`], if any.
    pub email: Option<Email>,

    /// [`AgencyName`] this [`Broker`] works for.
    pub agency_name: AgencyName,

    /// [`PostalAddress`] of the agency, if any.
    pub agency_address: Option<PostalAddress>,

    /// [`DateTime`] when this [`Broker`] was created.
    pub created_at: CreationDateTime,
}

/// ID of a [`Broker`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    DeriveFromStr,
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

/// Name of the agency a [`Broker`] works for.
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "postgres", derive(FromSql, ToSql), postgres(transparent))]
#[as_ref(forward)]
pub struct AgencyName(String);

impl AgencyName {
    /// Creates a new [`AgencyName`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `name` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Creates a new [`AgencyName`] if the given `name` is valid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        Self::check(&name).then_some(Self(name))
    }

    /// Checks whether the given `name` is a valid [`AgencyName`].
    fn check(name: impl AsRef<str>) -> bool {
        let name = name.as_ref();
        name.trim() == name && !name.is_empty() && name.len() <= 512
    }
}

impl FromStr for AgencyName {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `AgencyName`")
    }
}

/// [`DateTime`] when a [`Broker`] was created.
pub type CreationDateTime = DateTimeOf<(Broker, unit::Creation)>;
