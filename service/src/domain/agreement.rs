//! [`RentAgreement`] definitions.

use std::str::FromStr;

use common::{define_kind, unit, Date, DateOf, DateTimeOf, Money};
#[cfg(doc)]
use common::DateTime;
use derive_more::{AsRef, Display, From, FromStr as DeriveFromStr, Into};
#[cfg(feature = "postgres")]
use postgres_types::{FromSql, ToSql};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{owner, property, tenant};
#[cfg(doc)]
use crate::domain::{Owner, Property, Tenant};

/// Agreement renting a [`Property`] out to a [`Tenant`].
///
/// Always references exactly one [`Property`] and one [`Tenant`]; may
/// reference the [`Owner`] the agreement was signed with.
#[derive(Clone, Debug)]
pub struct RentAgreement {
    /// ID of this [`RentAgreement`].
    pub id: Id,

    /// ID of the rented [`Property`].
    pub property_id: property::Id,

    /// ID of the renting [`Tenant`].
    pub tenant_id: tenant::Id,

    /// ID of the [`Owner`] the agreement was signed with, if recorded.
    pub owner_id: Option<owner::Id>,

    /// [`Date`] the rent term starts on.
    pub start_date: StartDate,

    /// [`Date`] the rent term ends on.
    pub end_date: EndDate,

    /// Monthly rent amount.
    pub monthly_rent: Money,

    /// Security deposit paid at the beginning of the term.
    pub security_deposit: Money,

    /// Free-form [`Terms`] of this [`RentAgreement`], if any.
    pub terms: Option<Terms>,

    /// [`Status`] of this [`RentAgreement`].
    pub status: Status,

    /// [`DateTime`] when this [`RentAgreement`] was created.
    pub created_at: CreationDateTime,
}

impl RentAgreement {
    /// Returns the number of whole days remaining until this
    /// [`RentAgreement`]'s term ends, relative to the provided `today`.
    ///
    /// Negative once the term has ended.
    #[must_use]
    pub fn days_remaining(&self, today: Date) -> i64 {
        today.days_until(self.end_date)
    }
}

/// ID of a [`RentAgreement`].
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

/// Free-form terms and conditions of a [`RentAgreement`].
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "postgres", derive(FromSql, ToSql), postgres(transparent))]
#[as_ref(forward)]
pub struct Terms(String);

impl Terms {
    /// Creates a new [`Terms`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `text` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Creates a new [`Terms`] if the given `text` is valid.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        Self::check(&text).then_some(Self(text))
    }

    /// Checks whether the given `text` is a valid [`Terms`].
    fn check(text: impl AsRef<str>) -> bool {
        let text = text.as_ref();
        !text.is_empty() && text.len() <= 16384
    }
}

impl FromStr for Terms {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Terms`")
    }
}

define_kind! {
    #[doc = "Status of a [`RentAgreement`]."]
    enum Status {
        #[doc = "The rent term is running."]
        Active = 1,

        #[doc = "The rent term has ended."]
        Expired = 2,

        #[doc = "The agreement was terminated before its term ended."]
        Terminated = 3,

        #[doc = "The agreement awaits renewal."]
        PendingRenewal = 4,
    }
}

/// [`Date`] a [`RentAgreement`] term starts on.
pub type StartDate = DateOf<(RentAgreement, unit::Commencement)>;

/// [`Date`] a [`RentAgreement`] term ends on.
pub type EndDate = DateOf<(RentAgreement, unit::Expiration)>;

/// [`DateTime`] when a [`RentAgreement`] was created.
pub type CreationDateTime = DateTimeOf<(RentAgreement, unit::Creation)>;

#[cfg(test)]
mod spec {
    use common::Date;

    use super::{RentAgreement, Status};
    use crate::domain::{property, tenant};

    fn agreement(end: &str) -> RentAgreement {
        RentAgreement {
            id: super::Id::new(),
            property_id: property::Id::new(),
            tenant_id: tenant::Id::new(),
            owner_id: None,
            start_date: Date::from_iso8601("2025-01-01").unwrap().coerce(),
            end_date: Date::from_iso8601(end).unwrap().coerce(),
            monthly_rent: "15000PKR".parse().unwrap(),
            security_deposit: common::Money::ZERO_PKR,
            terms: None,
            status: Status::Active,
            created_at: common::DateTime::now().coerce(),
        }
    }

    #[test]
    fn days_remaining_counts_from_today() {
        let today = Date::from_iso8601("2025-06-01").unwrap();

        assert_eq!(agreement("2025-06-11").days_remaining(today), 10);
        assert_eq!(agreement("2025-06-01").days_remaining(today), 0);
        assert_eq!(agreement("2025-05-31").days_remaining(today), -1);
    }
}
