//! [`Tenant`] definitions.

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
use crate::domain::RentAgreement;

/// Tenant renting properties under [`RentAgreement`]s.
#[derive(Clone, Debug)]
pub struct Tenant {
    /// ID of this [`Tenant`].
    pub id: Id,

    /// [`FullName`] of this [`Tenant`].
    pub full_name: FullName,

    /// [`Phone`] number of this [`Tenant`].
    pub phone: Phone,

    /// [`Email`] address of this [`Tenant`], if any.
    pub email: Option<Email>,

    /// [`PostalAddress`] of this [`Tenant`], if any.
    pub address: Option<PostalAddress>,

    /// [`DateTime`] when this [`Tenant`] was created.
    pub created_at: CreationDateTime,
}

/// ID of a [`Tenant`].
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

/// [`DateTime`] when a [`Tenant`] was created.
pub type CreationDateTime = DateTimeOf<(Tenant, unit::Creation)>;
