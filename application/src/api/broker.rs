//! [`Broker`]-related definitions.

use std::future;

use common::{DateTime, Handler as _};
use derive_more::{AsRef, Display, From, Into};
use futures::TryFutureExt as _;
use juniper::{graphql_object, GraphQLScalar};
use service::{domain, query};
use tokio::sync::OnceCell;
use uuid::Uuid;

use crate::{api, api::scalar, AsError, Context, Error};

/// A broker assigned to properties.
#[derive(Clone, Debug, From)]
pub struct Broker {
    /// ID of this [`Broker`].
    id: Id,

    /// Underlying [`domain::Broker`].
    broker: OnceCell<domain::Broker>,
}

impl From<domain::Broker> for Broker {
    fn from(broker: domain::Broker) -> Self {
        Self {
            id: broker.id.into(),
            broker: OnceCell::new_with(Some(broker)),
        }
    }
}

impl Broker {
    /// Creates a new [`Broker`] with the provided ID.
    ///
    /// # Safety
    ///
    /// Caller must ensure that [`Broker`] with the provided ID exists,
    /// otherwise accessing this [`Broker`] will result with an error.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(id: impl Into<Id>) -> Self {
        Self {
            id: id.into(),
            broker: OnceCell::new(),
        }
    }

    /// Returns the underlying [`domain::Broker`].
    ///
    /// # Errors
    ///
    /// Errors if the [`domain::Broker`] doesn't exist.
    async fn broker(&self, ctx: &Context) -> Result<&domain::Broker, Error> {
        let id = self.id.into();
        self.broker
            .get_or_try_init(|| {
                ctx.service()
                    .execute(query::broker::ById::by(id))
                    .map_err(AsError::into_error)
                    .map_err(ctx.error())
                    .and_then(|b| {
                        future::ready(b.ok_or_else(|| {
                            api::query::BrokerError::NotExists.into()
                        }))
                    })
            })
            .await
    }
}

/// A broker assigned to properties.
#[graphql_object(context = Context)]
impl Broker {
    /// Unique identifier of this `Broker`.
    pub fn id(&self) -> Id {
        self.id
    }

    /// Full name of this `Broker`.
    pub async fn full_name(
        &self,
        ctx: &Context,
    ) -> Result<api::contact::FullName, Error> {
        Ok(self.broker(ctx).await?.full_name.clone().into())
    }

    /// Phone number of this `Broker`.
    pub async fn phone(
        &self,
        ctx: &Context,
    ) -> Result<api::contact::Phone, Error> {
        Ok(self.broker(ctx).await?.phone.clone().into())
    }

    /// E-mail address of this `Broker`, if any.
    pub async fn email(
        &self,
        ctx: &Context,
    ) -> Result<Option<api::contact::Email>, Error> {
        Ok(self.broker(ctx).await?.email.clone().map(Into::into))
    }

    /// Name of the agency this `Broker` works for.
    pub async fn agency_name(
        &self,
        ctx: &Context,
    ) -> Result<AgencyName, Error> {
        Ok(self.broker(ctx).await?.agency_name.clone().into())
    }

    /// Postal address of the agency, if any.
    pub async fn agency_address(
        &self,
        ctx: &Context,
    ) -> Result<Option<api::contact::PostalAddress>, Error> {
        Ok(self.broker(ctx).await?.agency_address.clone().map(Into::into))
    }

    /// `DateTime` when this `Broker` was created.
    pub async fn created_at(&self, ctx: &Context) -> Result<DateTime, Error> {
        Ok(self.broker(ctx).await?.created_at.coerce())
    }
}

/// Unique identifier of a `Broker`.
#[derive(Clone, Copy, Debug, Display, Into, From, GraphQLScalar)]
#[from(domain::broker::Id)]
#[into(domain::broker::Id)]
#[graphql(name = "BrokerId", transparent)]
pub struct Id(Uuid);

/// Name of the agency a `Broker` works for.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "BrokerAgencyName",
    with = scalar::Via::<domain::broker::AgencyName>,
)]
pub struct AgencyName(domain::broker::AgencyName);
