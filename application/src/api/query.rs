//! GraphQL [`Query`]s definitions.

use juniper::graphql_object;
use service::{query, read, Query as _};

use crate::{api, define_error, AsError, Context, Error};

/// Root of all GraphQL queries.
#[derive(Clone, Copy, Debug)]
pub struct Query;

impl Query {
    /// Name of the [`tracing::Span`] for the queries.
    pub(crate) const SPAN_NAME: &'static str = "GraphQL query";
}

#[graphql_object(context = Context)]
impl Query {
    /// Returns the aggregated dashboard widgets.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "dashboard",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn dashboard(ctx: &Context) -> Result<api::Dashboard, Error> {
        ctx.service()
            .execute(query::dashboard::Summary)
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Returns the `Property` with the specified ID.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `PROPERTY_NOT_EXISTS` - the `Property` with the specified ID does
    ///                           not exist.
    #[tracing::instrument(
        skip_all,
        fields(
            id = %id,
            gql.name = "property",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn property(
        id: api::property::Id,
        ctx: &Context,
    ) -> Result<api::Property, Error> {
        ctx.service()
            .execute(query::property::ById::by(id.into()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())?
            .ok_or_else(|| PropertyError::NotExists.into())
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Fetches all `Property`s, filtered in memory by the provided
    /// arguments.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "properties",
            kind = ?kind,
            otel.name = Self::SPAN_NAME,
            owner_id = ?owner_id.as_ref().map(ToString::to_string),
            search = ?search,
            status = ?status,
        ),
    )]
    pub async fn properties(
        search: Option<String>,
        status: Option<api::property::Status>,
        kind: Option<api::property::Kind>,
        owner_id: Option<api::owner::Id>,
        ctx: &Context,
    ) -> Result<Vec<api::Property>, Error> {
        let filter = read::property::Filter {
            search: search.as_deref().and_then(read::Search::new),
            status: status.map(Into::into),
            kind: kind.map(Into::into),
            owner: owner_id.map(Into::into),
        };

        ctx.service()
            .execute(query::properties::List::by(()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|items| {
                items
                    .into_iter()
                    .filter(|i| filter.matches(i))
                    .map(Into::into)
                    .collect()
            })
    }

    /// Returns the primary `Owner` of the `Property` with the specified ID,
    /// if any.
    ///
    /// Powers the owner pre-fill of the rent-agreement form.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "propertyPrimaryOwner",
            id = %id,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn property_primary_owner(
        id: api::property::Id,
        ctx: &Context,
    ) -> Result<Option<api::Owner>, Error> {
        ctx.service()
            .execute(query::property::PrimaryOwner::by(id.into()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|primary| primary.map(|p| p.owner.into()))
    }

    /// Returns the `Owner` with the specified ID.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `OWNER_NOT_EXISTS` - the `Owner` with the specified ID does not
    ///                        exist.
    #[tracing::instrument(
        skip_all,
        fields(
            id = %id,
            gql.name = "owner",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn owner(
        id: api::owner::Id,
        ctx: &Context,
    ) -> Result<api::Owner, Error> {
        ctx.service()
            .execute(query::owner::ById::by(id.into()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())?
            .ok_or_else(|| OwnerError::NotExists.into())
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Fetches all `Owner`s, filtered in memory by the provided search term.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "owners",
            otel.name = Self::SPAN_NAME,
            search = ?search,
        ),
    )]
    pub async fn owners(
        search: Option<String>,
        ctx: &Context,
    ) -> Result<Vec<api::Owner>, Error> {
        let filter = read::owner::Filter {
            search: search.as_deref().and_then(read::Search::new),
        };

        ctx.service()
            .execute(query::owners::List::by(()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|owners| {
                owners
                    .into_iter()
                    .filter(|o| filter.matches(o))
                    .map(Into::into)
                    .collect()
            })
    }

    /// Returns the `Broker` with the specified ID.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `BROKER_NOT_EXISTS` - the `Broker` with the specified ID does not
    ///                         exist.
    #[tracing::instrument(
        skip_all,
        fields(
            id = %id,
            gql.name = "broker",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn broker(
        id: api::broker::Id,
        ctx: &Context,
    ) -> Result<api::Broker, Error> {
        ctx.service()
            .execute(query::broker::ById::by(id.into()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())?
            .ok_or_else(|| BrokerError::NotExists.into())
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Fetches all `Broker`s, filtered in memory by the provided search term.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "brokers",
            otel.name = Self::SPAN_NAME,
            search = ?search,
        ),
    )]
    pub async fn brokers(
        search: Option<String>,
        ctx: &Context,
    ) -> Result<Vec<api::Broker>, Error> {
        let filter = read::broker::Filter {
            search: search.as_deref().and_then(read::Search::new),
        };

        ctx.service()
            .execute(query::brokers::List::by(()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|brokers| {
                brokers
                    .into_iter()
                    .filter(|b| filter.matches(b))
                    .map(Into::into)
                    .collect()
            })
    }

    /// Returns the `Tenant` with the specified ID.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `TENANT_NOT_EXISTS` - the `Tenant` with the specified ID does not
    ///                         exist.
    #[tracing::instrument(
        skip_all,
        fields(
            id = %id,
            gql.name = "tenant",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn tenant(
        id: api::tenant::Id,
        ctx: &Context,
    ) -> Result<api::Tenant, Error> {
        ctx.service()
            .execute(query::tenant::ById::by(id.into()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())?
            .ok_or_else(|| TenantError::NotExists.into())
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Fetches all `Tenant`s, filtered in memory by the provided search term.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "tenants",
            otel.name = Self::SPAN_NAME,
            search = ?search,
        ),
    )]
    pub async fn tenants(
        search: Option<String>,
        ctx: &Context,
    ) -> Result<Vec<api::Tenant>, Error> {
        let filter = read::tenant::Filter {
            search: search.as_deref().and_then(read::Search::new),
        };

        ctx.service()
            .execute(query::tenants::List::by(()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|tenants| {
                tenants
                    .into_iter()
                    .filter(|t| filter.matches(t))
                    .map(Into::into)
                    .collect()
            })
    }

    /// Returns the `RentAgreement` with the specified ID.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `AGREEMENT_NOT_EXISTS` - the `RentAgreement` with the specified ID
    ///                            does not exist.
    #[tracing::instrument(
        skip_all,
        fields(
            id = %id,
            gql.name = "rentAgreement",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn rent_agreement(
        id: api::agreement::Id,
        ctx: &Context,
    ) -> Result<api::RentAgreement, Error> {
        ctx.service()
            .execute(query::agreement::ById::by(id.into()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())?
            .ok_or_else(|| AgreementError::NotExists.into())
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Fetches all `RentAgreement`s with their display joins, filtered in
    /// memory by the provided arguments.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "rentAgreements",
            otel.name = Self::SPAN_NAME,
            search = ?search,
            status = ?status,
        ),
    )]
    pub async fn rent_agreements(
        search: Option<String>,
        status: Option<api::agreement::Status>,
        ctx: &Context,
    ) -> Result<Vec<api::agreement::ListItem>, Error> {
        let filter = read::agreement::Filter {
            search: search.as_deref().and_then(read::Search::new),
            status: status.map(Into::into),
        };

        ctx.service()
            .execute(query::agreements::List::by(()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|items| {
                items
                    .into_iter()
                    .filter(|i| filter.matches(i))
                    .map(Into::into)
                    .collect()
            })
    }

    /// Fetches all `Payment`s with their display joins, filtered in memory
    /// by the provided arguments.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "payments",
            kind = ?kind,
            otel.name = Self::SPAN_NAME,
            search = ?search,
            status = ?status,
        ),
    )]
    pub async fn payments(
        search: Option<String>,
        kind: Option<api::payment::Kind>,
        status: Option<api::payment::Status>,
        ctx: &Context,
    ) -> Result<Vec<api::Payment>, Error> {
        let filter = read::payment::Filter {
            search: search.as_deref().and_then(read::Search::new),
            kind: kind.map(Into::into),
            status: status.map(Into::into),
        };

        ctx.service()
            .execute(query::payments::List::by(()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|items| {
                items
                    .into_iter()
                    .filter(|i| filter.matches(i))
                    .map(Into::into)
                    .collect()
            })
    }

    /// Returns the `Requirement` with the specified ID.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `REQUIREMENT_NOT_EXISTS` - the `Requirement` with the specified ID
    ///                              does not exist.
    #[tracing::instrument(
        skip_all,
        fields(
            id = %id,
            gql.name = "requirement",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn requirement(
        id: api::requirement::Id,
        ctx: &Context,
    ) -> Result<api::Requirement, Error> {
        ctx.service()
            .execute(query::requirement::ById::by(id.into()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())?
            .ok_or_else(|| RequirementError::NotExists.into())
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Fetches all `Requirement`s, filtered in memory by the provided
    /// arguments.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "requirements",
            kind = ?kind,
            otel.name = Self::SPAN_NAME,
            search = ?search,
            status = ?status,
        ),
    )]
    pub async fn requirements(
        search: Option<String>,
        status: Option<api::requirement::Status>,
        kind: Option<api::requirement::Kind>,
        ctx: &Context,
    ) -> Result<Vec<api::Requirement>, Error> {
        let filter = read::requirement::Filter {
            search: search.as_deref().and_then(read::Search::new),
            status: status.map(Into::into),
            kind: kind.map(Into::into),
        };

        ctx.service()
            .execute(query::requirements::List::by(()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|reqs| {
                reqs.into_iter()
                    .filter(|r| filter.matches(r))
                    .map(Into::into)
                    .collect()
            })
    }
}

define_error! {
    enum PropertyError {
        #[code = "PROPERTY_NOT_EXISTS"]
        #[status = NOT_FOUND]
        #[message = "`Property` with the specified ID does not exist"]
        NotExists,
    }
}

define_error! {
    enum OwnerError {
        #[code = "OWNER_NOT_EXISTS"]
        #[status = NOT_FOUND]
        #[message = "`Owner` with the specified ID does not exist"]
        NotExists,
    }
}

define_error! {
    enum BrokerError {
        #[code = "BROKER_NOT_EXISTS"]
        #[status = NOT_FOUND]
        #[message = "`Broker` with the specified ID does not exist"]
        NotExists,
    }
}

define_error! {
    enum TenantError {
        #[code = "TENANT_NOT_EXISTS"]
        #[status = NOT_FOUND]
        #[message = "`Tenant` with the specified ID does not exist"]
        NotExists,
    }
}

define_error! {
    enum AgreementError {
        #[code = "AGREEMENT_NOT_EXISTS"]
        #[status = NOT_FOUND]
        #[message = "`RentAgreement` with the specified ID does not exist"]
        NotExists,
    }
}

define_error! {
    enum PaymentError {
        #[code = "PAYMENT_NOT_EXISTS"]
        #[status = NOT_FOUND]
        #[message = "`Payment` with the specified ID does not exist"]
        NotExists,
    }
}

define_error! {
    enum RequirementError {
        #[code = "REQUIREMENT_NOT_EXISTS"]
        #[status = NOT_FOUND]
        #[message = "`Requirement` with the specified ID does not exist"]
        NotExists,
    }
}
