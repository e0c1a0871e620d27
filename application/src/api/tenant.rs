//! [`Tenant`]-related definitions.

use std::future;

use common::{DateTime, Handler as _};
use derive_more::{Display, From, Into};
use futures::TryFutureExt as _;
use juniper::{graphql_object, GraphQLScalar};
use service::{domain, query};
use tokio::sync::OnceCell;
use uuid::Uuid;

use crate::{api, AsError, Context, Error};

/// A tenant renting properties.
#[derive(Clone, Debug, From)]
pub struct Tenant {
    /// ID of this [`Tenant`].
    id: Id,

    /// Underlying [`domain::Tenant`].
    tenant: OnceCell<domain::Tenant>,
}

impl From<domain::Tenant> for Tenant {
    fn from(tenant: domain::Tenant) -> Self {
        Self {
            id: tenant.id.into(),
            tenant: OnceCell::new_with(Some(tenant)),
        }
    }
}

impl Tenant {
    /// Creates a new [`Tenant`] with the provided ID.
    ///
    /// # Safety
    ///
    /// Caller must ensure that [`Tenant`] with the provided ID exists,
    /// otherwise accessing this [`Tenant`] will result with an error.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(id: impl Into<Id>) -> Self {
        Self {
            id: id.into(),
            tenant: OnceCell::new(),
        }
    }

    /// Returns the underlying [`domain::Tenant`].
    ///
    /// # Errors
    ///
    /// Errors if the [`domain::Tenant`] doesn't exist.
    async fn tenant(&self, ctx: &Context) -> Result<&domain::Tenant, Error> {
        let id = self.id.into();
        self.tenant
            .get_or_try_init(|| {
                ctx.service()
                    .execute(query::tenant::ById::by(id))
                    .map_err(AsError::into_error)
                    .map_err(ctx.error())
                    .and_then(|t| {
                        future::ready(t.ok_or_else(|| {
                            api::query::TenantError::NotExists.into()
                        }))
                    })
            })
            .await
    }
}

/// A tenant renting properties.
#[graphql_object(context = Context)]
impl Tenant {
    /// Unique identifier of this `Tenant`.
    pub fn id(&self) -> Id {
        self.id
    }

    /// Full name of this `Tenant`.
    pub async fn full_name(
        &self,
        ctx: &Context,
    ) -> Result<api::contact::FullName, Error> {
        Ok(self.tenant(ctx).await?.full_name.clone().into())
    }

    /// Phone number of this `Tenant`.
    pub async fn phone(
        &self,
        ctx: &Context,
    ) -> Result<api::contact::Phone, Error> {
        Ok(self.tenant(ctx).await?.phone.clone().into())
    }

    /// E-mail address of this `Tenant`, if any.
    pub async fn email(
        &self,
        ctx: &Context,
    ) -> Result<Option<api::contact::Email>, Error> {
        Ok(self.tenant(ctx).await?.email.clone().map(Into::into))
    }

    /// Postal address of this `Tenant`, if any.
    pub async fn address(
        &self,
        ctx: &Context,
    ) -> Result<Option<api::contact::PostalAddress>, Error> {
        Ok(self.tenant(ctx).await?.address.clone().map(Into::into))
    }

    /// `DateTime` when this `Tenant` was created.
    pub async fn created_at(&self, ctx: &Context) -> Result<DateTime, Error> {
        Ok(self.tenant(ctx).await?.created_at.coerce())
    }
}

/// Unique identifier of a `Tenant`.
#[derive(Clone, Copy, Debug, Display, Into, From, GraphQLScalar)]
#[from(domain::tenant::Id)]
#[into(domain::tenant::Id)]
#[graphql(name = "TenantId", transparent)]
pub struct Id(Uuid);
