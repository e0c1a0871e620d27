//! [`Property`]-related definitions.

use std::future;

use common::{DateTime, Handler as _, Money, Percent};
use derive_more::{AsRef, Display, From, Into};
use futures::TryFutureExt as _;
use juniper::{graphql_object, GraphQLEnum, GraphQLScalar};
use service::{domain, query, read};
use tokio::sync::OnceCell;
use uuid::Uuid;

use crate::{api, api::scalar, AsError, Context, Error};

/// A property listed for rent or sale.
#[derive(Clone, Debug, From)]
pub struct Property {
    /// ID of this [`Property`].
    id: Id,

    /// Underlying [`domain::Property`].
    property: OnceCell<domain::Property>,

    /// [`Owner`] references linked to this [`Property`].
    ///
    /// [`Owner`]: api::Owner
    owners: OnceCell<Vec<read::property::OwnerRef>>,

    /// Broker references linked to this [`Property`].
    brokers: OnceCell<Vec<read::property::BrokerRef>>,
}

impl From<domain::Property> for Property {
    fn from(property: domain::Property) -> Self {
        Self {
            id: property.id.into(),
            property: OnceCell::new_with(Some(property)),
            owners: OnceCell::new(),
            brokers: OnceCell::new(),
        }
    }
}

impl From<read::property::ListItem> for Property {
    fn from(item: read::property::ListItem) -> Self {
        Self {
            id: item.property.id.into(),
            property: OnceCell::new_with(Some(item.property)),
            owners: OnceCell::new_with(Some(item.owners)),
            brokers: OnceCell::new_with(Some(item.brokers)),
        }
    }
}

impl Property {
    /// Creates a new [`Property`] with the provided ID.
    ///
    /// # Safety
    ///
    /// Caller must ensure that [`Property`] with the provided ID exists,
    /// otherwise accessing this [`Property`] will result with an error.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(id: impl Into<Id>) -> Self {
        Self {
            id: id.into(),
            property: OnceCell::new(),
            owners: OnceCell::new(),
            brokers: OnceCell::new(),
        }
    }

    /// Returns the underlying [`domain::Property`].
    ///
    /// # Errors
    ///
    /// Errors if the [`domain::Property`] doesn't exist.
    async fn property(
        &self,
        ctx: &Context,
    ) -> Result<&domain::Property, Error> {
        let id = self.id.into();
        self.property
            .get_or_try_init(|| {
                ctx.service()
                    .execute(query::property::ById::by(id))
                    .map_err(AsError::into_error)
                    .map_err(ctx.error())
                    .and_then(|p| {
                        future::ready(p.ok_or_else(|| {
                            api::query::PropertyError::NotExists.into()
                        }))
                    })
            })
            .await
    }
}

/// A property listed for rent or sale.
#[graphql_object(context = Context)]
impl Property {
    /// Unique identifier of this `Property`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Property.id",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn id(&self) -> Id {
        self.id
    }

    /// Title of this `Property` listing.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Property.title",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn title(&self, ctx: &Context) -> Result<Title, Error> {
        Ok(self.property(ctx).await?.title.clone().into())
    }

    /// Street address of this `Property`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Property.address",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn address(&self, ctx: &Context) -> Result<Address, Error> {
        Ok(self.property(ctx).await?.address.clone().into())
    }

    /// City this `Property` is located in.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Property.city",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn city(&self, ctx: &Context) -> Result<City, Error> {
        Ok(self.property(ctx).await?.city.clone().into())
    }

    /// State this `Property` is located in, if known.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Property.state",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn state(&self, ctx: &Context) -> Result<Option<State>, Error> {
        Ok(self.property(ctx).await?.state.clone().map(Into::into))
    }

    /// Zip code of this `Property`, if known.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Property.zipCode",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn zip_code(
        &self,
        ctx: &Context,
    ) -> Result<Option<ZipCode>, Error> {
        Ok(self.property(ctx).await?.zip_code.clone().map(Into::into))
    }

    /// Kind of this `Property`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Property.kind",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn kind(&self, ctx: &Context) -> Result<Kind, Error> {
        Ok(self.property(ctx).await?.kind.into())
    }

    /// Area of this `Property` in square feet.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Property.area",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn area(&self, ctx: &Context) -> Result<Area, Error> {
        Ok(self.property(ctx).await?.area.into())
    }

    /// Asking price of this `Property`.
    ///
    /// Monthly rent for `FOR_RENT` listings, sale price otherwise.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Property.price",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn price(&self, ctx: &Context) -> Result<Money, Error> {
        Ok(self.property(ctx).await?.price)
    }

    /// Status of this `Property` listing.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Property.status",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn status(&self, ctx: &Context) -> Result<Status, Error> {
        Ok(self.property(ctx).await?.status.into())
    }

    /// Furnishing of this `Property`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Property.furnishing",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn furnishing(&self, ctx: &Context) -> Result<Furnishing, Error> {
        Ok(self.property(ctx).await?.furnishing.into())
    }

    /// Number of bedrooms, if applicable.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Property.bedrooms",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn bedrooms(&self, ctx: &Context) -> Result<Option<i32>, Error> {
        Ok(self.property(ctx).await?.bedrooms.map(i32::from))
    }

    /// Number of bathrooms, if applicable.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Property.bathrooms",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn bathrooms(&self, ctx: &Context) -> Result<Option<i32>, Error> {
        Ok(self.property(ctx).await?.bathrooms.map(i32::from))
    }

    /// Free-form description of this `Property`, if any.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Property.description",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn description(
        &self,
        ctx: &Context,
    ) -> Result<Option<Description>, Error> {
        Ok(self.property(ctx).await?.description.clone().map(Into::into))
    }

    /// `DateTime` when this `Property` was created.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Property.createdAt",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn created_at(&self, ctx: &Context) -> Result<DateTime, Error> {
        Ok(self.property(ctx).await?.created_at.coerce())
    }

    /// `Owner`s linked to this `Property` with their shares.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Property.owners",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn owners(
        &self,
        ctx: &Context,
    ) -> Result<Vec<OwnerShare>, Error> {
        let id = self.id.into();
        self.owners
            .get_or_try_init(|| {
                ctx.service()
                    .execute(query::property::Owners::by(id))
                    .map_err(AsError::into_error)
                    .map_err(ctx.error())
            })
            .await
            .map(|owners| owners.iter().cloned().map(Into::into).collect())
    }

    /// Brokers assigned to this `Property`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Property.brokers",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn brokers(
        &self,
        ctx: &Context,
    ) -> Result<Vec<AssignedBroker>, Error> {
        let id = self.id.into();
        self.brokers
            .get_or_try_init(|| {
                ctx.service()
                    .execute(query::property::Brokers::by(id))
                    .map_err(AsError::into_error)
                    .map_err(ctx.error())
            })
            .await
            .map(|brokers| brokers.iter().cloned().map(Into::into).collect())
    }
}

/// `Owner` linked to a `Property` with its share.
#[derive(Clone, Debug, From, Into)]
pub struct OwnerShare(read::property::OwnerRef);

/// `Owner` linked to a `Property` with its share.
#[graphql_object(name = "PropertyOwnerShare", context = Context)]
impl OwnerShare {
    /// The linked `Owner`.
    #[must_use]
    pub fn owner(&self) -> api::Owner {
        #[expect(
            unsafe_code,
            reason = "`OwnerShare` loaded from repository guarantees `Owner` \
                      existence"
        )]
        unsafe {
            api::Owner::new_unchecked(self.0.id)
        }
    }

    /// Full name of the linked `Owner`.
    #[must_use]
    pub fn full_name(&self) -> api::contact::FullName {
        self.0.full_name.clone().into()
    }

    /// Share of the `Property` the `Owner` holds.
    #[must_use]
    pub fn share(&self) -> Percent {
        self.0.share
    }
}

/// Broker assigned to a `Property`.
#[derive(Clone, Debug, From, Into)]
pub struct AssignedBroker(read::property::BrokerRef);

/// Broker assigned to a `Property`.
#[graphql_object(name = "PropertyBroker", context = Context)]
impl AssignedBroker {
    /// The assigned `Broker`.
    #[must_use]
    pub fn broker(&self) -> api::Broker {
        #[expect(
            unsafe_code,
            reason = "`AssignedBroker` loaded from repository guarantees \
                      `Broker` existence"
        )]
        unsafe {
            api::Broker::new_unchecked(self.0.id)
        }
    }

    /// Full name of the assigned `Broker`.
    #[must_use]
    pub fn full_name(&self) -> api::contact::FullName {
        self.0.full_name.clone().into()
    }
}

/// Unique identifier of a `Property`.
#[derive(Clone, Copy, Debug, Display, Into, From, GraphQLScalar)]
#[from(domain::property::Id)]
#[into(domain::property::Id)]
#[graphql(name = "PropertyId", transparent)]
pub struct Id(Uuid);

/// Title of a `Property` listing.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "PropertyTitle",
    with = scalar::Via::<domain::property::Title>,
)]
pub struct Title(domain::property::Title);

/// Street address of a `Property`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "PropertyAddress",
    with = scalar::Via::<domain::property::Address>,
)]
pub struct Address(domain::property::Address);

/// City a `Property` is located in.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "PropertyCity",
    with = scalar::Via::<domain::property::City>,
)]
pub struct City(domain::property::City);

/// State a `Property` is located in.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "PropertyState",
    with = scalar::Via::<domain::property::State>,
)]
pub struct State(domain::property::State);

/// Zip code of a `Property`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "PropertyZipCode",
    with = scalar::Via::<domain::property::ZipCode>,
)]
pub struct ZipCode(domain::property::ZipCode);

/// Area of a `Property` in square feet.
#[derive(AsRef, Clone, Copy, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "PropertyArea",
    with = scalar::Via::<domain::property::Area>,
)]
pub struct Area(domain::property::Area);

/// Free-form description of a `Property`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "PropertyDescription",
    with = scalar::Via::<domain::property::Description>,
)]
pub struct Description(domain::property::Description);

/// Kind of a `Property`.
#[derive(Clone, Copy, Debug, GraphQLEnum)]
#[graphql(name = "PropertyKind")]
pub enum Kind {
    /// A residential property.
    Residential,

    /// A commercial property.
    Commercial,
}

impl From<domain::property::Kind> for Kind {
    fn from(kind: domain::property::Kind) -> Self {
        use domain::property::Kind as K;
        match kind {
            K::Residential => Self::Residential,
            K::Commercial => Self::Commercial,
        }
    }
}

impl From<Kind> for domain::property::Kind {
    fn from(kind: Kind) -> Self {
        use Kind as K;
        match kind {
            K::Residential => Self::Residential,
            K::Commercial => Self::Commercial,
        }
    }
}

/// Status of a `Property` listing.
#[derive(Clone, Copy, Debug, GraphQLEnum)]
#[graphql(name = "PropertyStatus")]
pub enum Status {
    /// Available for rent.
    ForRent,

    /// Available for sale.
    ForSale,

    /// Rented out under an active agreement.
    Rented,

    /// Sold.
    Sold,
}

impl From<domain::property::Status> for Status {
    fn from(status: domain::property::Status) -> Self {
        use domain::property::Status as S;
        match status {
            S::ForRent => Self::ForRent,
            S::ForSale => Self::ForSale,
            S::Rented => Self::Rented,
            S::Sold => Self::Sold,
        }
    }
}

impl From<Status> for domain::property::Status {
    fn from(status: Status) -> Self {
        use Status as S;
        match status {
            S::ForRent => Self::ForRent,
            S::ForSale => Self::ForSale,
            S::Rented => Self::Rented,
            S::Sold => Self::Sold,
        }
    }
}

/// Furnishing of a `Property`.
#[derive(Clone, Copy, Debug, GraphQLEnum)]
#[graphql(name = "PropertyFurnishing")]
pub enum Furnishing {
    /// No furniture.
    Unfurnished,

    /// Partially furnished.
    SemiFurnished,

    /// Fully furnished.
    Furnished,
}

impl From<domain::property::Furnishing> for Furnishing {
    fn from(furnishing: domain::property::Furnishing) -> Self {
        use domain::property::Furnishing as F;
        match furnishing {
            F::Unfurnished => Self::Unfurnished,
            F::SemiFurnished => Self::SemiFurnished,
            F::Furnished => Self::Furnished,
        }
    }
}

impl From<Furnishing> for domain::property::Furnishing {
    fn from(furnishing: Furnishing) -> Self {
        use Furnishing as F;
        match furnishing {
            F::Unfurnished => Self::Unfurnished,
            F::SemiFurnished => Self::SemiFurnished,
            F::Furnished => Self::Furnished,
        }
    }
}
