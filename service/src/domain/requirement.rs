//! [`Requirement`] definitions.

use std::str::FromStr;

use common::{define_kind, unit, DateOf, DateTimeOf, Money};
#[cfg(doc)]
use common::{Date, DateTime};
use derive_more::{AsRef, Display, From, FromStr as DeriveFromStr, Into};
#[cfg(feature = "postgres")]
use postgres_types::{FromSql, ToSql};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    contact::{Email, FullName, Phone},
    property,
};
#[cfg(doc)]
use crate::domain::{Property, Tenant};

/// Customer inquiry describing what kind of [`Property`] a customer is
/// looking for.
///
/// Standalone: not linked to any [`Property`] or [`Tenant`].
#[derive(Clone, Debug)]
pub struct Requirement {
    /// ID of this [`Requirement`].
    pub id: Id,

    /// [`FullName`] of the inquiring customer.
    pub customer_name: FullName,

    /// [`Phone`] number of the inquiring customer.
    pub customer_phone: Phone,

    /// [`Email`] address of the inquiring customer, if any.
    pub customer_email: Option<Email>,

    /// [`Profession`] of the inquiring customer, if known.
    pub profession: Option<Profession>,

    /// [`Kind`] of this [`Requirement`].
    pub kind: Kind,

    /// [`property::Kind`] the customer is looking for.
    pub property_kind: property::Kind,

    /// Lower bound of the customer's budget, if given.
    pub budget_min: Option<Money>,

    /// Upper bound of the customer's budget, if given.
    pub budget_max: Option<Money>,

    /// [`Location`] the customer prefers, if given.
    pub preferred_location: Option<Location>,

    /// Area preference of the customer, if given.
    pub area_preference: Option<Location>,

    /// Free-form [`Notes`] on this [`Requirement`], if any.
    pub notes: Option<Notes>,

    /// [`Date`] the inquiry was made on.
    pub inquiry_date: InquiryDate,

    /// [`Date`] to follow up on, if scheduled.
    pub follow_up_date: Option<FollowUpDate>,

    /// [`FullName`] of the staff member the inquiry is assigned to, if any.
    pub assigned_to: Option<FullName>,

    /// [`Status`] of this [`Requirement`].
    pub status: Status,

    /// [`DateTime`] when this [`Requirement`] was created.
    pub created_at: CreationDateTime,
}

/// ID of a [`Requirement`].
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

/// Profession of an inquiring customer.
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "postgres", derive(FromSql, ToSql), postgres(transparent))]
#[as_ref(forward)]
pub struct Profession(String);

impl Profession {
    /// Creates a new [`Profession`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `name` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Creates a new [`Profession`] if the given `name` is valid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        Self::check(&name).then_some(Self(name))
    }

    /// Checks whether the given `name` is a valid [`Profession`].
    fn check(name: impl AsRef<str>) -> bool {
        let name = name.as_ref();
        name.trim() == name && !name.is_empty() && name.len() <= 256
    }
}

impl FromStr for Profession {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Profession`")
    }
}

/// Preferred location or area of an inquiring customer.
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "postgres", derive(FromSql, ToSql), postgres(transparent))]
#[as_ref(forward)]
pub struct Location(String);

impl Location {
    /// Creates a new [`Location`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `location` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(location: impl Into<String>) -> Self {
        Self(location.into())
    }

    /// Creates a new [`Location`] if the given `location` is valid.
    #[must_use]
    pub fn new(location: impl Into<String>) -> Option<Self> {
        let location = location.into();
        Self::check(&location).then_some(Self(location))
    }

    /// Checks whether the given `location` is a valid [`Location`].
    fn check(location: impl AsRef<str>) -> bool {
        let location = location.as_ref();
        location.trim() == location
            && !location.is_empty()
            && location.len() <= 512
    }
}

impl FromStr for Location {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Location`")
    }
}

/// Free-form notes on a [`Requirement`].
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "postgres", derive(FromSql, ToSql), postgres(transparent))]
#[as_ref(forward)]
pub struct Notes(String);

impl Notes {
    /// Creates a new [`Notes`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `text` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Creates a new [`Notes`] if the given `text` is valid.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        Self::check(&text).then_some(Self(text))
    }

    /// Checks whether the given `text` is a valid [`Notes`].
    fn check(text: impl AsRef<str>) -> bool {
        let text = text.as_ref();
        !text.is_empty() && text.len() <= 4096
    }
}

impl FromStr for Notes {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Notes`")
    }
}

define_kind! {
    #[doc = "Kind of a [`Requirement`]."]
    enum Kind {
        #[doc = "The customer is looking to rent."]
        Rent = 1,

        #[doc = "The customer is looking to buy."]
        Sale = 2,

        #[doc = "The customer considers both renting and buying."]
        Both = 3,
    }
}

define_kind! {
    #[doc = "Status of a [`Requirement`]."]
    enum Status {
        #[doc = "The inquiry is being worked on."]
        Open = 1,

        #[doc = "The inquiry is paused."]
        OnHold = 2,

        #[doc = "The inquiry is closed."]
        Closed = 3,
    }
}

/// [`Date`] a [`Requirement`] inquiry was made on.
pub type InquiryDate = DateOf<(Requirement, unit::Inquiry)>;

/// [`Date`] to follow up on a [`Requirement`].
pub type FollowUpDate = DateOf<(Requirement, unit::FollowUp)>;

/// [`DateTime`] when a [`Requirement`] was created.
pub type CreationDateTime = DateTimeOf<(Requirement, unit::Creation)>;
