//! [`Owner`]-related definitions.

use std::future;

use common::{DateTime, Handler as _};
use derive_more::{Display, From, Into};
use futures::TryFutureExt as _;
use juniper::{graphql_object, GraphQLScalar};
use service::{domain, query};
use tokio::sync::OnceCell;
use uuid::Uuid;

use crate::{api, AsError, Context, Error};

/// An owner of properties.
#[derive(Clone, Debug, From)]
pub struct Owner {
    /// ID of this [`Owner`].
    id: Id,

    /// Underlying [`domain::Owner`].
    owner: OnceCell<domain::Owner>,
}

impl From<domain::Owner> for Owner {
    fn from(owner: domain::Owner) -> Self {
        Self {
            id: owner.id.into(),
            owner: OnceCell::new_with(Some(owner)),
        }
    }
}

impl Owner {
    /// Creates a new [`Owner`] with the provided ID.
    ///
    /// # Safety
    ///
    /// Caller must ensure that [`Owner`] with the provided ID exists,
    /// otherwise accessing this [`Owner`] will result with an error.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(id: impl Into<Id>) -> Self {
        Self {
            id: id.into(),
            owner: OnceCell::new(),
        }
    }

    /// Returns the underlying [`domain::Owner`].
    ///
    /// # Errors
    ///
    /// Errors if the [`domain::Owner`] doesn't exist.
    async fn owner(&self, ctx: &Context) -> Result<&domain::Owner, Error> {
        let id = self.id.into();
        self.owner
            .get_or_try_init(|| {
                ctx.service()
                    .execute(query::owner::ById::by(id))
                    .map_err(AsError::into_error)
                    .map_err(ctx.error())
                    .and_then(|o| {
                        future::ready(o.ok_or_else(|| {
                            api::query::OwnerError::NotExists.into()
                        }))
                    })
            })
            .await
    }
}

/// An owner of properties.
#[graphql_object(context = Context)]
impl Owner {
    /// Unique identifier of this `Owner`.
    pub fn id(&self) -> Id {
        self.id
    }

    /// Full name of this `Owner`.
    pub async fn full_name(
        &self,
        ctx: &Context,
    ) -> Result<api::contact::FullName, Error> {
        Ok(self.owner(ctx).await?.full_name.clone().into())
    }

    /// Phone number of this `Owner`.
    pub async fn phone(
        &self,
        ctx: &Context,
    ) -> Result<api::contact::Phone, Error> {
        Ok(self.owner(ctx).await?.phone.clone().into())
    }

    /// E-mail address of this `Owner`, if any.
    pub async fn email(
        &self,
        ctx: &Context,
    ) -> Result<Option<api::contact::Email>, Error> {
        Ok(self.owner(ctx).await?.email.clone().map(Into::into))
    }

    /// Postal address of this `Owner`, if any.
    pub async fn address(
        &self,
        ctx: &Context,
    ) -> Result<Option<api::contact::PostalAddress>, Error> {
        Ok(self.owner(ctx).await?.address.clone().map(Into::into))
    }

    /// `DateTime` when this `Owner` was created.
    pub async fn created_at(&self, ctx: &Context) -> Result<DateTime, Error> {
        Ok(self.owner(ctx).await?.created_at.coerce())
    }
}

/// Unique identifier of an `Owner`.
#[derive(Clone, Copy, Debug, Display, Into, From, GraphQLScalar)]
#[from(domain::owner::Id)]
#[into(domain::owner::Id)]
#[graphql(name = "OwnerId", transparent)]
pub struct Id(Uuid);
