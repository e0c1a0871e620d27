//! [`Property`] definitions.

use std::str::FromStr;

use common::{define_kind, unit, DateTimeOf, Money, Percent};
#[cfg(doc)]
use common::DateTime;
use derive_more::{AsRef, Display, From, FromStr as DeriveFromStr, Into};
#[cfg(feature = "postgres")]
use postgres_types::{FromSql, ToSql};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{broker, owner};
#[cfg(doc)]
use crate::domain::{Broker, Owner};

/// Property listed for rent or sale.
#[derive(Clone, Debug)]
pub struct Property {
    /// ID of this [`Property`].
    pub id: Id,

    /// [`Title`] of this [`Property`] listing.
    pub title: Title,

    /// Street [`Address`] of this [`Property`].
    pub address: Address,

    /// [`City`] this [`Property`] is located in.
    pub city: City,

    /// [`State`] this [`Property`] is located in, if known.
    pub state: Option<State>,

    /// [`ZipCode`] of this [`Property`], if known.
    pub zip_code: Option<ZipCode>,

    /// [`Kind`] of this [`Property`].
    pub kind: Kind,

    /// [`Area`] of this [`Property`] in square feet.
    pub area: Area,

    /// Asking price of this [`Property`].
    ///
    /// Monthly rent for `FOR_RENT` listings, sale price otherwise.
    pub price: Money,

    /// [`Status`] of this [`Property`].
    pub status: Status,

    /// [`Furnishing`] of this [`Property`].
    pub furnishing: Furnishing,

    /// Number of bedrooms, if applicable.
    pub bedrooms: Option<Bedrooms>,

    /// Number of bathrooms, if applicable.
    pub bathrooms: Option<Bathrooms>,

    /// Free-form [`Description`] of this [`Property`], if any.
    pub description: Option<Description>,

    /// [`DateTime`] when this [`Property`] was created.
    pub created_at: CreationDateTime,
}

/// ID of a [`Property`].
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

/// Title of a [`Property`] listing.
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "postgres", derive(FromSql, ToSql), postgres(transparent))]
#[as_ref(forward)]
pub struct Title(String);

impl Title {
    /// Creates a new [`Title`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `title` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(title: impl Into<String>) -> Self {
        Self(title.into())
    }

    /// Creates a new [`Title`] if the given `title` is valid.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Option<Self> {
        let title = title.into();
        Self::check(&title).then_some(Self(title))
    }

    /// Checks whether the given `title` is a valid [`Title`].
    fn check(title: impl AsRef<str>) -> bool {
        let title = title.as_ref();
        title.trim() == title && !title.is_empty() && title.len() <= 512
    }
}

impl FromStr for Title {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Title`")
    }
}

/// Street address of a [`Property`].
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "postgres", derive(FromSql, ToSql), postgres(transparent))]
#[as_ref(forward)]
pub struct Address(String);

impl Address {
    /// Creates a new [`Address`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `address` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    /// Creates a new [`Address`] if the given `address` is valid.
    #[must_use]
    pub fn new(address: impl Into<String>) -> Option<Self> {
        let address = address.into();
        Self::check(&address).then_some(Self(address))
    }

    /// Checks whether the given `address` is a valid [`Address`].
    fn check(address: impl AsRef<str>) -> bool {
        let address = address.as_ref();
        address.trim() == address && !address.is_empty() && address.len() <= 512
    }
}

impl FromStr for Address {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Address`")
    }
}

/// City a [`Property`] is located in.
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "postgres", derive(FromSql, ToSql), postgres(transparent))]
#[as_ref(forward)]
pub struct City(String);

impl City {
    /// Creates a new [`City`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `city` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(city: impl Into<String>) -> Self {
        Self(city.into())
    }

    /// Creates a new [`City`] if the given `city` is valid.
    #[must_use]
    pub fn new(city: impl Into<String>) -> Option<Self> {
        let city = city.into();
        Self::check(&city).then_some(Self(city))
    }

    /// Checks whether the given `city` is a valid [`City`].
    fn check(city: impl AsRef<str>) -> bool {
        let city = city.as_ref();
        city.trim() == city && !city.is_empty() && city.len() <= 512
    }
}

impl FromStr for City {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `City`")
    }
}

/// State a [`Property`] is located in.
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "postgres", derive(FromSql, ToSql), postgres(transparent))]
#[as_ref(forward)]
pub struct State(String);

impl State {
    /// Creates a new [`State`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `state` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(state: impl Into<String>) -> Self {
        Self(state.into())
    }

    /// Creates a new [`State`] if the given `state` is valid.
    #[must_use]
    pub fn new(state: impl Into<String>) -> Option<Self> {
        let state = state.into();
        Self::check(&state).then_some(Self(state))
    }

    /// Checks whether the given `state` is a valid [`State`].
    fn check(state: impl AsRef<str>) -> bool {
        let state = state.as_ref();
        state.trim() == state && !state.is_empty() && state.len() <= 512
    }
}

impl FromStr for State {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `State`")
    }
}

/// Zip code of a [`Property`].
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "postgres", derive(FromSql, ToSql), postgres(transparent))]
#[as_ref(forward)]
pub struct ZipCode(String);

impl ZipCode {
    /// Creates a new [`ZipCode`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `code` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Creates a new [`ZipCode`] if the given `code` is valid.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Option<Self> {
        let code = code.into();
        Self::check(&code).then_some(Self(code))
    }

    /// Checks whether the given `code` is a valid [`ZipCode`].
    fn check(code: impl AsRef<str>) -> bool {
        let code = code.as_ref();
        code.trim() == code && !code.is_empty() && code.len() <= 32
    }
}

impl FromStr for ZipCode {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `ZipCode`")
    }
}

/// Area of a [`Property`] in square feet.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "postgres", derive(FromSql, ToSql), postgres(transparent))]
pub struct Area(Decimal);

impl Area {
    /// Creates a new [`Area`] if the given `value` is positive.
    #[must_use]
    pub fn new(value: Decimal) -> Option<Self> {
        (value > Decimal::ZERO).then_some(Self(value))
    }
}

impl FromStr for Area {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s)
            .ok()
            .and_then(Self::new)
            .ok_or("invalid `Area`")
    }
}

/// Free-form description of a [`Property`].
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "postgres", derive(FromSql, ToSql), postgres(transparent))]
#[as_ref(forward)]
pub struct Description(String);

impl Description {
    /// Creates a new [`Description`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `text` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Creates a new [`Description`] if the given `text` is valid.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        Self::check(&text).then_some(Self(text))
    }

    /// Checks whether the given `text` is a valid [`Description`].
    fn check(text: impl AsRef<str>) -> bool {
        let text = text.as_ref();
        !text.is_empty() && text.len() <= 8192
    }
}

impl FromStr for Description {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Description`")
    }
}

/// Number of bedrooms in a [`Property`].
pub type Bedrooms = u16;

/// Number of bathrooms in a [`Property`].
pub type Bathrooms = u16;

define_kind! {
    #[doc = "Kind of a [`Property`]."]
    enum Kind {
        #[doc = "A residential property."]
        Residential = 1,

        #[doc = "A commercial property."]
        Commercial = 2,
    }
}

define_kind! {
    #[doc = "Status of a [`Property`] listing."]
    enum Status {
        #[doc = "Available for rent."]
        ForRent = 1,

        #[doc = "Available for sale."]
        ForSale = 2,

        #[doc = "Rented out under an active agreement."]
        Rented = 3,

        #[doc = "Sold."]
        Sold = 4,
    }
}

define_kind! {
    #[doc = "Furnishing of a [`Property`]."]
    enum Furnishing {
        #[doc = "No furniture."]
        Unfurnished = 1,

        #[doc = "Partially furnished."]
        SemiFurnished = 2,

        #[doc = "Fully furnished."]
        Furnished = 3,
    }
}

/// Join row associating a [`Property`] with one of its [`Owner`]s.
#[derive(Clone, Copy, Debug)]
pub struct Ownership {
    /// ID of the [`Property`].
    pub property_id: Id,

    /// ID of the [`Owner`].
    pub owner_id: owner::Id,

    /// Share of the [`Property`] the [`Owner`] holds.
    ///
    /// Single-select owner assignment always writes the whole share.
    pub share: Percent,
}

/// Join row associating a [`Property`] with its [`Broker`].
#[derive(Clone, Copy, Debug)]
pub struct Brokerage {
    /// ID of the [`Property`].
    pub property_id: Id,

    /// ID of the [`Broker`].
    pub broker_id: broker::Id,
}

/// [`DateTime`] when a [`Property`] was created.
pub type CreationDateTime = DateTimeOf<(Property, unit::Creation)>;
