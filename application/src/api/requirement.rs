//! [`Requirement`]-related definitions.

use std::future;

use common::{Date, DateTime, Handler as _, Money};
use derive_more::{AsRef, Display, From, Into};
use futures::TryFutureExt as _;
use juniper::{graphql_object, GraphQLEnum, GraphQLScalar};
use service::{domain, query};
use tokio::sync::OnceCell;
use uuid::Uuid;

use crate::{api, api::scalar, AsError, Context, Error};

/// A customer inquiry describing what kind of property a customer is
/// looking for.
#[derive(Clone, Debug, From)]
pub struct Requirement {
    /// ID of this [`Requirement`].
    id: Id,

    /// Underlying [`domain::Requirement`].
    requirement: OnceCell<domain::Requirement>,
}

impl From<domain::Requirement> for Requirement {
    fn from(requirement: domain::Requirement) -> Self {
        Self {
            id: requirement.id.into(),
            requirement: OnceCell::new_with(Some(requirement)),
        }
    }
}

impl Requirement {
    /// Creates a new [`Requirement`] with the provided ID.
    ///
    /// # Safety
    ///
    /// Caller must ensure that [`Requirement`] with the provided ID exists,
    /// otherwise accessing this [`Requirement`] will result with an error.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(id: impl Into<Id>) -> Self {
        Self {
            id: id.into(),
            requirement: OnceCell::new(),
        }
    }

    /// Returns the underlying [`domain::Requirement`].
    ///
    /// # Errors
    ///
    /// Errors if the [`domain::Requirement`] doesn't exist.
    async fn requirement(
        &self,
        ctx: &Context,
    ) -> Result<&domain::Requirement, Error> {
        let id = self.id.into();
        self.requirement
            .get_or_try_init(|| {
                ctx.service()
                    .execute(query::requirement::ById::by(id))
                    .map_err(AsError::into_error)
                    .map_err(ctx.error())
                    .and_then(|r| {
                        future::ready(r.ok_or_else(|| {
                            api::query::RequirementError::NotExists.into()
                        }))
                    })
            })
            .await
    }
}

/// A customer inquiry describing what kind of property a customer is
/// looking for.
#[graphql_object(context = Context)]
impl Requirement {
    /// Unique identifier of this `Requirement`.
    pub fn id(&self) -> Id {
        self.id
    }

    /// Full name of the inquiring customer.
    pub async fn customer_name(
        &self,
        ctx: &Context,
    ) -> Result<api::contact::FullName, Error> {
        Ok(self.requirement(ctx).await?.customer_name.clone().into())
    }

    /// Phone number of the inquiring customer.
    pub async fn customer_phone(
        &self,
        ctx: &Context,
    ) -> Result<api::contact::Phone, Error> {
        Ok(self.requirement(ctx).await?.customer_phone.clone().into())
    }

    /// E-mail address of the inquiring customer, if any.
    pub async fn customer_email(
        &self,
        ctx: &Context,
    ) -> Result<Option<api::contact::Email>, Error> {
        Ok(self.requirement(ctx).await?.customer_email.clone().map(Into::into))
    }

    /// Profession of the inquiring customer, if known.
    pub async fn profession(
        &self,
        ctx: &Context,
    ) -> Result<Option<Profession>, Error> {
        Ok(self.requirement(ctx).await?.profession.clone().map(Into::into))
    }

    /// Kind of this `Requirement`.
    pub async fn kind(&self, ctx: &Context) -> Result<Kind, Error> {
        Ok(self.requirement(ctx).await?.kind.into())
    }

    /// Kind of property the customer is looking for.
    pub async fn property_kind(
        &self,
        ctx: &Context,
    ) -> Result<api::property::Kind, Error> {
        Ok(self.requirement(ctx).await?.property_kind.into())
    }

    /// Lower bound of the customer's budget, if given.
    pub async fn budget_min(
        &self,
        ctx: &Context,
    ) -> Result<Option<Money>, Error> {
        Ok(self.requirement(ctx).await?.budget_min)
    }

    /// Upper bound of the customer's budget, if given.
    pub async fn budget_max(
        &self,
        ctx: &Context,
    ) -> Result<Option<Money>, Error> {
        Ok(self.requirement(ctx).await?.budget_max)
    }

    /// Location the customer prefers, if given.
    pub async fn preferred_location(
        &self,
        ctx: &Context,
    ) -> Result<Option<Location>, Error> {
        Ok(self
            .requirement(ctx)
            .await?
            .preferred_location
            .clone()
            .map(Into::into))
    }

    /// Area preference of the customer, if given.
    pub async fn area_preference(
        &self,
        ctx: &Context,
    ) -> Result<Option<Location>, Error> {
        Ok(self
            .requirement(ctx)
            .await?
            .area_preference
            .clone()
            .map(Into::into))
    }

    /// Free-form notes on this `Requirement`, if any.
    pub async fn notes(&self, ctx: &Context) -> Result<Option<Notes>, Error> {
        Ok(self.requirement(ctx).await?.notes.clone().map(Into::into))
    }

    /// `Date` the inquiry was made on.
    pub async fn inquiry_date(&self, ctx: &Context) -> Result<Date, Error> {
        Ok(self.requirement(ctx).await?.inquiry_date.coerce())
    }

    /// `Date` to follow up on, if scheduled.
    pub async fn follow_up_date(
        &self,
        ctx: &Context,
    ) -> Result<Option<Date>, Error> {
        Ok(self
            .requirement(ctx)
            .await?
            .follow_up_date
            .map(common::DateOf::coerce))
    }

    /// Full name of the staff member the inquiry is assigned to, if any.
    pub async fn assigned_to(
        &self,
        ctx: &Context,
    ) -> Result<Option<api::contact::FullName>, Error> {
        Ok(self.requirement(ctx).await?.assigned_to.clone().map(Into::into))
    }

    /// Status of this `Requirement`.
    pub async fn status(&self, ctx: &Context) -> Result<Status, Error> {
        Ok(self.requirement(ctx).await?.status.into())
    }

    /// `DateTime` when this `Requirement` was created.
    pub async fn created_at(&self, ctx: &Context) -> Result<DateTime, Error> {
        Ok(self.requirement(ctx).await?.created_at.coerce())
    }
}

/// Unique identifier of a `Requirement`.
#[derive(Clone, Copy, Debug, Display, Into, From, GraphQLScalar)]
#[from(domain::requirement::Id)]
#[into(domain::requirement::Id)]
#[graphql(name = "RequirementId", transparent)]
pub struct Id(Uuid);

/// Profession of an inquiring customer.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "RequirementProfession",
    with = scalar::Via::<domain::requirement::Profession>,
)]
pub struct Profession(domain::requirement::Profession);

/// Preferred location or area of an inquiring customer.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "RequirementLocation",
    with = scalar::Via::<domain::requirement::Location>,
)]
pub struct Location(domain::requirement::Location);

/// Free-form notes on a `Requirement`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "RequirementNotes",
    with = scalar::Via::<domain::requirement::Notes>,
)]
pub struct Notes(domain::requirement::Notes);

/// Kind of a `Requirement`.
#[derive(Clone, Copy, Debug, GraphQLEnum)]
#[graphql(name = "RequirementKind")]
pub enum Kind {
    /// The customer is looking to rent.
    Rent,

    /// The customer is looking to buy.
    Sale,

    /// The customer considers both renting and buying.
    Both,
}

impl From<domain::requirement::Kind> for Kind {
    fn from(kind: domain::requirement::Kind) -> Self {
        use domain::requirement::Kind as K;
        match kind {
            K::Rent => Self::Rent,
            K::Sale => Self::Sale,
            K::Both => Self::Both,
        }
    }
}

impl From<Kind> for domain::requirement::Kind {
    fn from(kind: Kind) -> Self {
        use Kind as K;
        match kind {
            K::Rent => Self::Rent,
            K::Sale => Self::Sale,
            K::Both => Self::Both,
        }
    }
}

/// Status of a `Requirement`.
#[derive(Clone, Copy, Debug, GraphQLEnum)]
#[graphql(name = "RequirementStatus")]
pub enum Status {
    /// The inquiry is being worked on.
    Open,

    /// The inquiry is paused.
    OnHold,

    /// The inquiry is closed.
    Closed,
}

impl From<domain::requirement::Status> for Status {
    fn from(status: domain::requirement::Status) -> Self {
        use domain::requirement::Status as S;
        match status {
            S::Open => Self::Open,
            S::OnHold => Self::OnHold,
            S::Closed => Self::Closed,
        }
    }
}

impl From<Status> for domain::requirement::Status {
    fn from(status: Status) -> Self {
        use Status as S;
        match status {
            S::Open => Self::Open,
            S::OnHold => Self::OnHold,
            S::Closed => Self::Closed,
        }
    }
}
