//! [`Payment`]-related definitions.

use std::future;

use common::{Date, DateTime, Handler as _, Money};
use derive_more::{AsRef, Display, From, Into};
use futures::TryFutureExt as _;
use juniper::{graphql_object, GraphQLEnum, GraphQLScalar};
use service::{domain, query, read};
use tokio::sync::OnceCell;
use uuid::Uuid;

use crate::{api, api::scalar, AsError, Context, Error};

/// A payment recorded against a `RentAgreement`.
#[derive(Clone, Debug, From)]
pub struct Payment {
    /// ID of this [`Payment`].
    id: Id,

    /// Underlying [`read::payment::ListItem`] carrying the shallow joins
    /// the payments screen displays.
    item: OnceCell<read::payment::ListItem>,
}

impl From<read::payment::ListItem> for Payment {
    fn from(item: read::payment::ListItem) -> Self {
        Self {
            id: item.payment.id.into(),
            item: OnceCell::new_with(Some(item)),
        }
    }
}

impl Payment {
    /// Creates a new [`Payment`] with the provided ID.
    ///
    /// # Safety
    ///
    /// Caller must ensure that [`Payment`] with the provided ID exists,
    /// otherwise accessing this [`Payment`] will result with an error.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(id: impl Into<Id>) -> Self {
        Self {
            id: id.into(),
            item: OnceCell::new(),
        }
    }

    /// Returns the underlying [`read::payment::ListItem`].
    ///
    /// # Errors
    ///
    /// Errors if the `Payment` doesn't exist.
    async fn item(
        &self,
        ctx: &Context,
    ) -> Result<&read::payment::ListItem, Error> {
        let id = self.id.into();
        self.item
            .get_or_try_init(|| {
                ctx.service()
                    .execute(query::payment::ById::by(id))
                    .map_err(AsError::into_error)
                    .map_err(ctx.error())
                    .and_then(|p| {
                        future::ready(p.ok_or_else(|| {
                            api::query::PaymentError::NotExists.into()
                        }))
                    })
            })
            .await
    }
}

/// A payment recorded against a `RentAgreement`.
#[graphql_object(context = Context)]
impl Payment {
    /// Unique identifier of this `Payment`.
    pub fn id(&self) -> Id {
        self.id
    }

    /// The paid `RentAgreement`.
    pub async fn agreement(
        &self,
        ctx: &Context,
    ) -> Result<api::RentAgreement, Error> {
        let agreement_id = self.item(ctx).await?.payment.agreement_id;
        #[expect(
            unsafe_code,
            reason = "`Payment` always references an existing `RentAgreement`"
        )]
        Ok(unsafe { api::RentAgreement::new_unchecked(agreement_id) })
    }

    /// Kind of this `Payment`.
    pub async fn kind(&self, ctx: &Context) -> Result<Kind, Error> {
        Ok(self.item(ctx).await?.payment.kind.into())
    }

    /// Paid amount.
    pub async fn amount(&self, ctx: &Context) -> Result<Money, Error> {
        Ok(self.item(ctx).await?.payment.amount)
    }

    /// `Date` the payment was made on.
    pub async fn date(&self, ctx: &Context) -> Result<Date, Error> {
        Ok(self.item(ctx).await?.payment.date.coerce())
    }

    /// Method the payment was made with.
    pub async fn method(&self, ctx: &Context) -> Result<Method, Error> {
        Ok(self.item(ctx).await?.payment.method.into())
    }

    /// External reference number of this `Payment`, if any.
    pub async fn reference(
        &self,
        ctx: &Context,
    ) -> Result<Option<Reference>, Error> {
        Ok(self.item(ctx).await?.payment.reference.clone().map(Into::into))
    }

    /// Free-form notes on this `Payment`, if any.
    pub async fn notes(&self, ctx: &Context) -> Result<Option<Notes>, Error> {
        Ok(self.item(ctx).await?.payment.notes.clone().map(Into::into))
    }

    /// Status of this `Payment`.
    pub async fn status(&self, ctx: &Context) -> Result<Status, Error> {
        Ok(self.item(ctx).await?.payment.status.into())
    }

    /// Title of the property the paid agreement rents out.
    pub async fn property_title(
        &self,
        ctx: &Context,
    ) -> Result<api::property::Title, Error> {
        Ok(self.item(ctx).await?.property_title.clone().into())
    }

    /// Full name of the paying tenant.
    pub async fn tenant_name(
        &self,
        ctx: &Context,
    ) -> Result<api::contact::FullName, Error> {
        Ok(self.item(ctx).await?.tenant_name.clone().into())
    }

    /// `DateTime` when this `Payment` was created.
    pub async fn created_at(&self, ctx: &Context) -> Result<DateTime, Error> {
        Ok(self.item(ctx).await?.payment.created_at.coerce())
    }
}

/// Unique identifier of a `Payment`.
#[derive(Clone, Copy, Debug, Display, Into, From, GraphQLScalar)]
#[from(domain::payment::Id)]
#[into(domain::payment::Id)]
#[graphql(name = "PaymentId", transparent)]
pub struct Id(Uuid);

/// External reference number of a `Payment`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "PaymentReference",
    with = scalar::Via::<domain::payment::Reference>,
)]
pub struct Reference(domain::payment::Reference);

/// Free-form notes on a `Payment`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "PaymentNotes",
    with = scalar::Via::<domain::payment::Notes>,
)]
pub struct Notes(domain::payment::Notes);

/// Kind of a `Payment`.
#[derive(Clone, Copy, Debug, GraphQLEnum)]
#[graphql(name = "PaymentKind")]
pub enum Kind {
    /// Monthly rent payment.
    Rent,

    /// Security deposit payment.
    SecurityDeposit,

    /// Maintenance charge.
    Maintenance,

    /// Utility charge.
    Utility,

    /// Any other payment.
    Other,
}

impl From<domain::payment::Kind> for Kind {
    fn from(kind: domain::payment::Kind) -> Self {
        use domain::payment::Kind as K;
        match kind {
            K::Rent => Self::Rent,
            K::SecurityDeposit => Self::SecurityDeposit,
            K::Maintenance => Self::Maintenance,
            K::Utility => Self::Utility,
            K::Other => Self::Other,
        }
    }
}

impl From<Kind> for domain::payment::Kind {
    fn from(kind: Kind) -> Self {
        use Kind as K;
        match kind {
            K::Rent => Self::Rent,
            K::SecurityDeposit => Self::SecurityDeposit,
            K::Maintenance => Self::Maintenance,
            K::Utility => Self::Utility,
            K::Other => Self::Other,
        }
    }
}

/// Method a `Payment` was made with.
#[derive(Clone, Copy, Debug, GraphQLEnum)]
#[graphql(name = "PaymentMethod")]
pub enum Method {
    /// Cash.
    Cash,

    /// Bank transfer.
    BankTransfer,

    /// Cheque.
    Cheque,

    /// Online payment.
    Online,

    /// Any other method.
    Other,
}

impl From<domain::payment::Method> for Method {
    fn from(method: domain::payment::Method) -> Self {
        use domain::payment::Method as M;
        match method {
            M::Cash => Self::Cash,
            M::BankTransfer => Self::BankTransfer,
            M::Cheque => Self::Cheque,
            M::Online => Self::Online,
            M::Other => Self::Other,
        }
    }
}

impl From<Method> for domain::payment::Method {
    fn from(method: Method) -> Self {
        use Method as M;
        match method {
            M::Cash => Self::Cash,
            M::BankTransfer => Self::BankTransfer,
            M::Cheque => Self::Cheque,
            M::Online => Self::Online,
            M::Other => Self::Other,
        }
    }
}

/// Status of a `Payment`.
#[derive(Clone, Copy, Debug, GraphQLEnum)]
#[graphql(name = "PaymentStatus")]
pub enum Status {
    /// The payment went through.
    Completed,

    /// The payment is pending.
    Pending,

    /// The payment failed.
    Failed,

    /// The payment was refunded.
    Refunded,
}

impl From<domain::payment::Status> for Status {
    fn from(status: domain::payment::Status) -> Self {
        use domain::payment::Status as S;
        match status {
            S::Completed => Self::Completed,
            S::Pending => Self::Pending,
            S::Failed => Self::Failed,
            S::Refunded => Self::Refunded,
        }
    }
}

impl From<Status> for domain::payment::Status {
    fn from(status: Status) -> Self {
        use Status as S;
        match status {
            S::Completed => Self::Completed,
            S::Pending => Self::Pending,
            S::Failed => Self::Failed,
            S::Refunded => Self::Refunded,
        }
    }
}
