//! [`Payment`] definitions.

use std::str::FromStr;

use common::{define_kind, unit, DateOf, DateTimeOf, Money};
#[cfg(doc)]
use common::{Date, DateTime};
use derive_more::{AsRef, Display, From, FromStr as DeriveFromStr, Into};
#[cfg(feature = "postgres")]
use postgres_types::{FromSql, ToSql};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::agreement;
#[cfg(doc)]
use crate::domain::RentAgreement;

/// Payment recorded against a [`RentAgreement`].
///
/// Recorded independently of the agreement's expected schedule.
#[derive(Clone, Debug)]
pub struct Payment {
    /// ID of this [`Payment`].
    pub id: Id,

    /// ID of the [`RentAgreement`] this [`Payment`] belongs to.
    pub agreement_id: agreement::Id,

    /// [`Kind`] of this [`Payment`].
    pub kind: Kind,

    /// Paid amount.
    pub amount: Money,

    /// [`Date`] the payment was made on.
    pub date: PaymentDate,

    /// [`Method`] the payment was made with.
    pub method: Method,

    /// External [`Reference`] number of this [`Payment`], if any.
    pub reference: Option<Reference>,

    /// Free-form [`Notes`] on this [`Payment`], if any.
    pub notes: Option<Notes>,

    /// [`Status`] of this [`Payment`].
    pub status: Status,

    /// [`DateTime`] when this [`Payment`] was created.
    pub created_at: CreationDateTime,
}

/// ID of a [`Payment`].
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

/// External reference number of a [`Payment`].
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "postgres", derive(FromSql, ToSql), postgres(transparent))]
#[as_ref(forward)]
pub struct Reference(String);

impl Reference {
    /// Creates a new [`Reference`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `num` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(num: impl Into<String>) -> Self {
        Self(num.into())
    }

    /// Creates a new [`Reference`] if the given `num` is valid.
    #[must_use]
    pub fn new(num: impl Into<String>) -> Option<Self> {
        let num = num.into();
        Self::check(&num).then_some(Self(num))
    }

    /// Checks whether the given `num` is a valid [`Reference`].
    fn check(num: impl AsRef<str>) -> bool {
        let num = num.as_ref();
        num.trim() == num && !num.is_empty() && num.len() <= 128
    }
}

impl FromStr for Reference {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Reference`")
    }
}

/// Free-form notes on a [`Payment`].
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
    #[doc = "Kind of a [`Payment`]."]
    enum Kind {
        #[doc = "Monthly rent payment."]
        Rent = 1,

        #[doc = "Security deposit payment."]
        SecurityDeposit = 2,

        #[doc = "Maintenance charge."]
        Maintenance = 3,

        #[doc = "Utility charge."]
        Utility = 4,

        #[doc = "Any other payment."]
        Other = 5,
    }
}

define_kind! {
    #[doc = "Method a [`Payment`] was made with."]
    enum Method {
        #[doc = "Cash."]
        Cash = 1,

        #[doc = "Bank transfer."]
        BankTransfer = 2,

        #[doc = "Cheque."]
        Cheque = 3,

        #[doc = "Online payment."]
        Online = 4,

        #[doc = "Any other method."]
        Other = 5,
    }
}

define_kind! {
    #[doc = "Status of a [`Payment`]."]
    enum Status {
        #[doc = "The payment went through."]
        Completed = 1,

        #[doc = "The payment is pending."]
        Pending = 2,

        #[doc = "The payment failed."]
        Failed = 3,

        #[doc = "The payment was refunded."]
        Refunded = 4,
    }
}

/// [`Date`] a [`Payment`] was made on.
pub type PaymentDate = DateOf<(Payment, unit::Creation)>;

/// [`DateTime`] when a [`Payment`] was created.
pub type CreationDateTime = DateTimeOf<(Payment, unit::Creation)>;
