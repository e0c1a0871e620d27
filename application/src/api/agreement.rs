//! [`RentAgreement`]-related definitions.

use std::future;

use common::{Date, DateTime, Handler as _, Money};
use derive_more::{AsRef, Display, From, Into};
use futures::TryFutureExt as _;
use juniper::{graphql_object, GraphQLEnum, GraphQLScalar};
use service::{domain, query, read};
use tokio::sync::OnceCell;
use uuid::Uuid;

use crate::{api, api::scalar, AsError, Context, Error};

/// An agreement renting a property out to a tenant.
#[derive(Clone, Debug, From)]
pub struct RentAgreement {
    /// ID of this [`RentAgreement`].
    id: Id,

    /// Underlying [`domain::RentAgreement`].
    agreement: OnceCell<domain::RentAgreement>,
}

impl From<domain::RentAgreement> for RentAgreement {
    fn from(agreement: domain::RentAgreement) -> Self {
        Self {
            id: agreement.id.into(),
            agreement: OnceCell::new_with(Some(agreement)),
        }
    }
}

impl RentAgreement {
    /// Creates a new [`RentAgreement`] with the provided ID.
    ///
    /// # Safety
    ///
    /// Caller must ensure that [`RentAgreement`] with the provided ID exists,
    /// otherwise accessing this [`RentAgreement`] will result with an error.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(id: impl Into<Id>) -> Self {
        Self {
            id: id.into(),
            agreement: OnceCell::new(),
        }
    }

    /// Returns the underlying [`domain::RentAgreement`].
    ///
    /// # Errors
    ///
    /// Errors if the [`domain::RentAgreement`] doesn't exist.
    async fn agreement(
        &self,
        ctx: &Context,
    ) -> Result<&domain::RentAgreement, Error> {
        let id = self.id.into();
        self.agreement
            .get_or_try_init(|| {
                ctx.service()
                    .execute(query::agreement::ById::by(id))
                    .map_err(AsError::into_error)
                    .map_err(ctx.error())
                    .and_then(|a| {
                        future::ready(a.ok_or_else(|| {
                            api::query::AgreementError::NotExists.into()
                        }))
                    })
            })
            .await
    }
}

/// An agreement renting a property out to a tenant.
#[graphql_object(context = Context)]
impl RentAgreement {
    /// Unique identifier of this `RentAgreement`.
    pub fn id(&self) -> Id {
        self.id
    }

    /// The rented `Property`.
    pub async fn property(&self, ctx: &Context) -> Result<api::Property, Error> {
        let property_id = self.agreement(ctx).await?.property_id;
        #[expect(
            unsafe_code,
            reason = "`RentAgreement` always references an existing `Property`"
        )]
        Ok(unsafe { api::Property::new_unchecked(property_id) })
    }

    /// The renting `Tenant`.
    pub async fn tenant(&self, ctx: &Context) -> Result<api::Tenant, Error> {
        let tenant_id = self.agreement(ctx).await?.tenant_id;
        #[expect(
            unsafe_code,
            reason = "`RentAgreement` always references an existing `Tenant`"
        )]
        Ok(unsafe { api::Tenant::new_unchecked(tenant_id) })
    }

    /// The `Owner` the agreement was signed with, if recorded.
    pub async fn owner(
        &self,
        ctx: &Context,
    ) -> Result<Option<api::Owner>, Error> {
        let owner_id = self.agreement(ctx).await?.owner_id;
        #[expect(
            unsafe_code,
            reason = "recorded `owner_id` references an existing `Owner`"
        )]
        Ok(owner_id.map(|id| unsafe { api::Owner::new_unchecked(id) }))
    }

    /// `Date` the rent term starts on.
    pub async fn start_date(&self, ctx: &Context) -> Result<Date, Error> {
        Ok(self.agreement(ctx).await?.start_date.coerce())
    }

    /// `Date` the rent term ends on.
    pub async fn end_date(&self, ctx: &Context) -> Result<Date, Error> {
        Ok(self.agreement(ctx).await?.end_date.coerce())
    }

    /// Monthly rent amount.
    pub async fn monthly_rent(&self, ctx: &Context) -> Result<Money, Error> {
        Ok(self.agreement(ctx).await?.monthly_rent)
    }

    /// Security deposit paid at the beginning of the term.
    pub async fn security_deposit(
        &self,
        ctx: &Context,
    ) -> Result<Money, Error> {
        Ok(self.agreement(ctx).await?.security_deposit)
    }

    /// Free-form terms of this `RentAgreement`, if any.
    pub async fn terms(&self, ctx: &Context) -> Result<Option<Terms>, Error> {
        Ok(self.agreement(ctx).await?.terms.clone().map(Into::into))
    }

    /// Status of this `RentAgreement`.
    pub async fn status(&self, ctx: &Context) -> Result<Status, Error> {
        Ok(self.agreement(ctx).await?.status.into())
    }

    /// Number of whole days remaining until the rent term ends.
    ///
    /// Negative once the term has ended.
    pub async fn days_remaining(&self, ctx: &Context) -> Result<i32, Error> {
        let days = self.agreement(ctx).await?.days_remaining(Date::today());
        days.try_into().map_err(AsError::into_error)
    }

    /// `DateTime` when this `RentAgreement` was created.
    pub async fn created_at(&self, ctx: &Context) -> Result<DateTime, Error> {
        Ok(self.agreement(ctx).await?.created_at.coerce())
    }
}

/// `RentAgreement` row of a list, with the shallow joins the list screen
/// displays.
#[derive(Clone, Debug, From, Into)]
pub struct ListItem(read::agreement::ListItem);

/// `RentAgreement` row of a list, with the shallow joins the list screen
/// displays.
#[graphql_object(name = "RentAgreementListItem", context = Context)]
impl ListItem {
    /// The `RentAgreement` itself.
    #[must_use]
    pub fn agreement(&self) -> RentAgreement {
        self.0.agreement.clone().into()
    }

    /// Title of the rented property.
    #[must_use]
    pub fn property_title(&self) -> api::property::Title {
        self.0.property_title.clone().into()
    }

    /// Full name of the renting tenant.
    #[must_use]
    pub fn tenant_name(&self) -> api::contact::FullName {
        self.0.tenant_name.clone().into()
    }
}

/// Unique identifier of a `RentAgreement`.
#[derive(Clone, Copy, Debug, Display, Into, From, GraphQLScalar)]
#[from(domain::agreement::Id)]
#[into(domain::agreement::Id)]
#[graphql(name = "RentAgreementId", transparent)]
pub struct Id(Uuid);

/// Free-form terms and conditions of a `RentAgreement`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "RentAgreementTerms",
    with = scalar::Via::<domain::agreement::Terms>,
)]
pub struct Terms(domain::agreement::Terms);

/// Status of a `RentAgreement`.
#[derive(Clone, Copy, Debug, GraphQLEnum)]
#[graphql(name = "RentAgreementStatus")]
pub enum Status {
    /// The rent term is running.
    Active,

    /// The rent term has ended.
    Expired,

    /// The agreement was terminated before its term ended.
    Terminated,

    /// The agreement awaits renewal.
    PendingRenewal,
}

impl From<domain::agreement::Status> for Status {
    fn from(status: domain::agreement::Status) -> Self {
        use domain::agreement::Status as S;
        match status {
            S::Active => Self::Active,
            S::Expired => Self::Expired,
            S::Terminated => Self::Terminated,
            S::PendingRenewal => Self::PendingRenewal,
        }
    }
}

impl From<Status> for domain::agreement::Status {
    fn from(status: Status) -> Self {
        use Status as S;
        match status {
            S::Active => Self::Active,
            S::Expired => Self::Expired,
            S::Terminated => Self::Terminated,
            S::PendingRenewal => Self::PendingRenewal,
        }
    }
}
