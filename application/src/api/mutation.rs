//! GraphQL [`Mutation`]s definitions.

use common::{Date, Money};
use juniper::graphql_object;
use service::{command, Command as _};

use crate::{api, define_error, AsError, Context, Error};

/// Root of all GraphQL mutations.
#[derive(Clone, Copy, Debug)]
pub struct Mutation;

impl Mutation {
    /// Name of the [`tracing::Span`] for the mutations.
    const SPAN_NAME: &'static str = "GraphQL mutation";
}

#[graphql_object(context = Context)]
impl Mutation {
    /// Creates a new `Owner` with the provided contact info.
    #[tracing::instrument(
        skip_all,
        fields(
            address = ?address.as_ref().map(ToString::to_string),
            email = ?email.as_ref().map(ToString::to_string),
            full_name = %full_name,
            gql.name = "createOwner",
            otel.name = Self::SPAN_NAME,
            phone = %phone,
        ),
    )]
    pub async fn create_owner(
        full_name: api::contact::FullName,
        phone: api::contact::Phone,
        email: Option<api::contact::Email>,
        address: Option<api::contact::PostalAddress>,
        ctx: &Context,
    ) -> Result<api::Owner, Error> {
        ctx.service()
            .execute(command::CreateOwner {
                full_name: full_name.into(),
                phone: phone.into(),
                email: email.map(Into::into),
                address: address.map(Into::into),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Creates a new `Broker` with the provided contact and agency info.
    #[tracing::instrument(
        skip_all,
        fields(
            agency_name = %agency_name,
            full_name = %full_name,
            gql.name = "createBroker",
            otel.name = Self::SPAN_NAME,
            phone = %phone,
        ),
    )]
    pub async fn create_broker(
        full_name: api::contact::FullName,
        phone: api::contact::Phone,
        email: Option<api::contact::Email>,
        agency_name: api::broker::AgencyName,
        agency_address: Option<api::contact::PostalAddress>,
        ctx: &Context,
    ) -> Result<api::Broker, Error> {
        ctx.service()
            .execute(command::CreateBroker {
                full_name: full_name.into(),
                phone: phone.into(),
                email: email.map(Into::into),
                agency_name: agency_name.into(),
                agency_address: agency_address.map(Into::into),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Updates the `Broker` with the provided ID.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `BROKER_NOT_EXISTS` - the `Broker` with the provided ID does not
    ///                         exist.
    #[tracing::instrument(
        skip_all,
        fields(
            full_name = %full_name,
            gql.name = "updateBroker",
            id = %id,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn update_broker(
        id: api::broker::Id,
        full_name: api::contact::FullName,
        phone: api::contact::Phone,
        email: Option<api::contact::Email>,
        agency_name: api::broker::AgencyName,
        agency_address: Option<api::contact::PostalAddress>,
        ctx: &Context,
    ) -> Result<api::Broker, Error> {
        ctx.service()
            .execute(command::UpdateBroker {
                id: id.into(),
                full_name: full_name.into(),
                phone: phone.into(),
                email: email.map(Into::into),
                agency_name: agency_name.into(),
                agency_address: agency_address.map(Into::into),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Creates a new `Tenant` with the provided contact info.
    #[tracing::instrument(
        skip_all,
        fields(
            full_name = %full_name,
            gql.name = "createTenant",
            otel.name = Self::SPAN_NAME,
            phone = %phone,
        ),
    )]
    pub async fn create_tenant(
        full_name: api::contact::FullName,
        phone: api::contact::Phone,
        email: Option<api::contact::Email>,
        address: Option<api::contact::PostalAddress>,
        ctx: &Context,
    ) -> Result<api::Tenant, Error> {
        ctx.service()
            .execute(command::CreateTenant {
                full_name: full_name.into(),
                phone: phone.into(),
                email: email.map(Into::into),
                address: address.map(Into::into),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Creates a new `Property` with the provided details, optionally
    /// assigning an `Owner` and a `Broker`.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `OWNER_NOT_EXISTS` - the `Owner` with the provided ID does not
    ///                        exist;
    /// - `BROKER_NOT_EXISTS` - the `Broker` with the provided ID does not
    ///                         exist;
    /// - `NEGATIVE_AMOUNT` - the provided price is negative.
    #[tracing::instrument(
        skip_all,
        fields(
            broker_id = ?broker_id.as_ref().map(ToString::to_string),
            city = %city,
            gql.name = "createProperty",
            kind = ?kind,
            otel.name = Self::SPAN_NAME,
            owner_id = ?owner_id.as_ref().map(ToString::to_string),
            status = ?status,
            title = %title,
        ),
    )]
    #[expect(clippy::too_many_arguments, reason = "still readable")]
    pub async fn create_property(
        title: api::property::Title,
        address: api::property::Address,
        city: api::property::City,
        state: Option<api::property::State>,
        zip_code: Option<api::property::ZipCode>,
        kind: api::property::Kind,
        area: api::property::Area,
        price: Money,
        status: api::property::Status,
        furnishing: api::property::Furnishing,
        bedrooms: Option<i32>,
        bathrooms: Option<i32>,
        description: Option<api::property::Description>,
        owner_id: Option<api::owner::Id>,
        broker_id: Option<api::broker::Id>,
        ctx: &Context,
    ) -> Result<api::Property, Error> {
        let bedrooms = bedrooms
            .map(TryInto::try_into)
            .transpose()
            .map_err(AsError::into_error)?;
        let bathrooms = bathrooms
            .map(TryInto::try_into)
            .transpose()
            .map_err(AsError::into_error)?;

        ctx.service()
            .execute(command::CreateProperty {
                title: title.into(),
                address: address.into(),
                city: city.into(),
                state: state.map(Into::into),
                zip_code: zip_code.map(Into::into),
                kind: kind.into(),
                area: area.into(),
                price,
                status: status.into(),
                furnishing: furnishing.into(),
                bedrooms,
                bathrooms,
                description: description.map(Into::into),
                owner_id: owner_id.map(Into::into),
                broker_id: broker_id.map(Into::into),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Updates the `Property` with the provided ID, replacing its `Owner`
    /// and `Broker` assignments.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `PROPERTY_NOT_EXISTS` - the `Property` with the provided ID does
    ///                           not exist;
    /// - `OWNER_NOT_EXISTS` - the `Owner` with the provided ID does not
    ///                        exist;
    /// - `BROKER_NOT_EXISTS` - the `Broker` with the provided ID does not
    ///                         exist;
    /// - `NEGATIVE_AMOUNT` - the provided price is negative.
    #[tracing::instrument(
        skip_all,
        fields(
            broker_id = ?broker_id.as_ref().map(ToString::to_string),
            gql.name = "updateProperty",
            id = %id,
            otel.name = Self::SPAN_NAME,
            owner_id = ?owner_id.as_ref().map(ToString::to_string),
            status = ?status,
            title = %title,
        ),
    )]
    #[expect(clippy::too_many_arguments, reason = "still readable")]
    pub async fn update_property(
        id: api::property::Id,
        title: api::property::Title,
        address: api::property::Address,
        city: api::property::City,
        state: Option<api::property::State>,
        zip_code: Option<api::property::ZipCode>,
        kind: api::property::Kind,
        area: api::property::Area,
        price: Money,
        status: api::property::Status,
        furnishing: api::property::Furnishing,
        bedrooms: Option<i32>,
        bathrooms: Option<i32>,
        description: Option<api::property::Description>,
        owner_id: Option<api::owner::Id>,
        broker_id: Option<api::broker::Id>,
        ctx: &Context,
    ) -> Result<api::Property, Error> {
        let bedrooms = bedrooms
            .map(TryInto::try_into)
            .transpose()
            .map_err(AsError::into_error)?;
        let bathrooms = bathrooms
            .map(TryInto::try_into)
            .transpose()
            .map_err(AsError::into_error)?;

        ctx.service()
            .execute(command::UpdateProperty {
                id: id.into(),
                title: title.into(),
                address: address.into(),
                city: city.into(),
                state: state.map(Into::into),
                zip_code: zip_code.map(Into::into),
                kind: kind.into(),
                area: area.into(),
                price,
                status: status.into(),
                furnishing: furnishing.into(),
                bedrooms,
                bathrooms,
                description: description.map(Into::into),
                owner_id: owner_id.map(Into::into),
                broker_id: broker_id.map(Into::into),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Replaces the `Owner` assignment of the `Property` with the provided
    /// ID.
    ///
    /// All existing ownership rows of the `Property` are deleted; when an
    /// `Owner` is given, a single row with the whole share is inserted.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `PROPERTY_NOT_EXISTS` - the `Property` with the provided ID does
    ///                           not exist;
    /// - `OWNER_NOT_EXISTS` - the `Owner` with the provided ID does not
    ///                        exist.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "setPropertyOwner",
            otel.name = Self::SPAN_NAME,
            owner_id = ?owner_id.as_ref().map(ToString::to_string),
            property_id = %property_id,
        ),
    )]
    pub async fn set_property_owner(
        property_id: api::property::Id,
        owner_id: Option<api::owner::Id>,
        ctx: &Context,
    ) -> Result<api::Property, Error> {
        ctx.service()
            .execute(command::SetPropertyOwner {
                property_id: property_id.into(),
                owner_id: owner_id.map(Into::into),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())?;

        #[expect(
            unsafe_code,
            reason = "existence checked by the executed command"
        )]
        Ok(unsafe { api::Property::new_unchecked(property_id) })
    }

    /// Replaces the `Broker` assignment of the `Property` with the provided
    /// ID.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `PROPERTY_NOT_EXISTS` - the `Property` with the provided ID does
    ///                           not exist;
    /// - `BROKER_NOT_EXISTS` - the `Broker` with the provided ID does not
    ///                         exist.
    #[tracing::instrument(
        skip_all,
        fields(
            broker_id = ?broker_id.as_ref().map(ToString::to_string),
            gql.name = "setPropertyBroker",
            otel.name = Self::SPAN_NAME,
            property_id = %property_id,
        ),
    )]
    pub async fn set_property_broker(
        property_id: api::property::Id,
        broker_id: Option<api::broker::Id>,
        ctx: &Context,
    ) -> Result<api::Property, Error> {
        ctx.service()
            .execute(command::SetPropertyBroker {
                property_id: property_id.into(),
                broker_id: broker_id.map(Into::into),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())?;

        #[expect(
            unsafe_code,
            reason = "existence checked by the executed command"
        )]
        Ok(unsafe { api::Property::new_unchecked(property_id) })
    }

    /// Creates a new `RentAgreement` with the provided details.
    ///
    /// Flips the `Property` status to `RENTED` and, when an `Owner` is
    /// given, ensures an ownership row linking it to the `Property` exists.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `PROPERTY_NOT_EXISTS` - the `Property` with the provided ID does
    ///                           not exist;
    /// - `TENANT_NOT_EXISTS` - the `Tenant` with the provided ID does not
    ///                         exist;
    /// - `OWNER_NOT_EXISTS` - the `Owner` with the provided ID does not
    ///                        exist;
    /// - `NEGATIVE_AMOUNT` - a provided amount is negative.
    #[tracing::instrument(
        skip_all,
        fields(
            end_date = %end_date.to_iso8601(),
            gql.name = "createRentAgreement",
            monthly_rent = %monthly_rent,
            otel.name = Self::SPAN_NAME,
            owner_id = ?owner_id.as_ref().map(ToString::to_string),
            property_id = %property_id,
            start_date = %start_date.to_iso8601(),
            tenant_id = %tenant_id,
        ),
    )]
    #[expect(clippy::too_many_arguments, reason = "still readable")]
    pub async fn create_rent_agreement(
        property_id: api::property::Id,
        tenant_id: api::tenant::Id,
        owner_id: Option<api::owner::Id>,
        start_date: Date,
        end_date: Date,
        monthly_rent: Money,
        security_deposit: Option<Money>,
        terms: Option<api::agreement::Terms>,
        status: Option<api::agreement::Status>,
        ctx: &Context,
    ) -> Result<api::RentAgreement, Error> {
        ctx.service()
            .execute(command::CreateRentAgreement {
                property_id: property_id.into(),
                tenant_id: tenant_id.into(),
                owner_id: owner_id.map(Into::into),
                start_date: start_date.coerce(),
                end_date: end_date.coerce(),
                monthly_rent,
                security_deposit: security_deposit
                    .unwrap_or(Money::ZERO_PKR),
                terms: terms.map(Into::into),
                status: status
                    .map_or(service::domain::agreement::Status::Active, Into::into),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Updates the term, amounts and status of the `RentAgreement` with the
    /// provided ID.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `AGREEMENT_NOT_EXISTS` - the `RentAgreement` with the provided ID
    ///                            does not exist;
    /// - `NEGATIVE_AMOUNT` - a provided amount is negative.
    #[tracing::instrument(
        skip_all,
        fields(
            end_date = %end_date.to_iso8601(),
            gql.name = "updateRentAgreement",
            id = %id,
            monthly_rent = %monthly_rent,
            otel.name = Self::SPAN_NAME,
            start_date = %start_date.to_iso8601(),
            status = ?status,
        ),
    )]
    #[expect(clippy::too_many_arguments, reason = "still readable")]
    pub async fn update_rent_agreement(
        id: api::agreement::Id,
        start_date: Date,
        end_date: Date,
        monthly_rent: Money,
        security_deposit: Option<Money>,
        terms: Option<api::agreement::Terms>,
        status: api::agreement::Status,
        ctx: &Context,
    ) -> Result<api::RentAgreement, Error> {
        ctx.service()
            .execute(command::UpdateRentAgreement {
                id: id.into(),
                start_date: start_date.coerce(),
                end_date: end_date.coerce(),
                monthly_rent,
                security_deposit: security_deposit
                    .unwrap_or(Money::ZERO_PKR),
                terms: terms.map(Into::into),
                status: status.into(),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Records a new `Payment` against the `RentAgreement` with the
    /// provided ID.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `AGREEMENT_NOT_EXISTS` - the `RentAgreement` with the provided ID
    ///                            does not exist;
    /// - `NEGATIVE_AMOUNT` - the provided amount is negative.
    #[tracing::instrument(
        skip_all,
        fields(
            agreement_id = %agreement_id,
            amount = %amount,
            date = %date.to_iso8601(),
            gql.name = "createPayment",
            kind = ?kind,
            method = ?method,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    #[expect(clippy::too_many_arguments, reason = "still readable")]
    pub async fn create_payment(
        agreement_id: api::agreement::Id,
        kind: api::payment::Kind,
        amount: Money,
        date: Date,
        method: api::payment::Method,
        reference: Option<api::payment::Reference>,
        notes: Option<api::payment::Notes>,
        status: Option<api::payment::Status>,
        ctx: &Context,
    ) -> Result<api::Payment, Error> {
        let payment = ctx
            .service()
            .execute(command::CreatePayment {
                agreement_id: agreement_id.into(),
                kind: kind.into(),
                amount,
                date: date.coerce(),
                method: method.into(),
                reference: reference.map(Into::into),
                notes: notes.map(Into::into),
                status: status
                    .map_or(service::domain::payment::Status::Completed, Into::into),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())?;

        #[expect(unsafe_code, reason = "just created by the executed command")]
        Ok(unsafe { api::Payment::new_unchecked(payment.id) })
    }

    /// Creates a new `Requirement` with the provided details.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `NEGATIVE_AMOUNT` - a provided budget bound is negative.
    #[tracing::instrument(
        skip_all,
        fields(
            customer_name = %customer_name,
            customer_phone = %customer_phone,
            gql.name = "createRequirement",
            inquiry_date = %inquiry_date.to_iso8601(),
            kind = ?kind,
            otel.name = Self::SPAN_NAME,
            property_kind = ?property_kind,
        ),
    )]
    #[expect(clippy::too_many_arguments, reason = "still readable")]
    pub async fn create_requirement(
        customer_name: api::contact::FullName,
        customer_phone: api::contact::Phone,
        customer_email: Option<api::contact::Email>,
        profession: Option<api::requirement::Profession>,
        kind: api::requirement::Kind,
        property_kind: api::property::Kind,
        budget_min: Option<Money>,
        budget_max: Option<Money>,
        preferred_location: Option<api::requirement::Location>,
        area_preference: Option<api::requirement::Location>,
        notes: Option<api::requirement::Notes>,
        inquiry_date: Date,
        follow_up_date: Option<Date>,
        assigned_to: Option<api::contact::FullName>,
        status: Option<api::requirement::Status>,
        ctx: &Context,
    ) -> Result<api::Requirement, Error> {
        ctx.service()
            .execute(command::CreateRequirement {
                customer_name: customer_name.into(),
                customer_phone: customer_phone.into(),
                customer_email: customer_email.map(Into::into),
                profession: profession.map(Into::into),
                kind: kind.into(),
                property_kind: property_kind.into(),
                budget_min,
                budget_max,
                preferred_location: preferred_location.map(Into::into),
                area_preference: area_preference.map(Into::into),
                notes: notes.map(Into::into),
                inquiry_date: inquiry_date.coerce(),
                follow_up_date: follow_up_date.map(Date::coerce),
                assigned_to: assigned_to.map(Into::into),
                status: status
                    .map_or(service::domain::requirement::Status::Open, Into::into),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Updates the `Requirement` with the provided ID.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `REQUIREMENT_NOT_EXISTS` - the `Requirement` with the provided ID
    ///                              does not exist;
    /// - `NEGATIVE_AMOUNT` - a provided budget bound is negative.
    #[tracing::instrument(
        skip_all,
        fields(
            customer_name = %customer_name,
            gql.name = "updateRequirement",
            id = %id,
            otel.name = Self::SPAN_NAME,
            status = ?status,
        ),
    )]
    #[expect(clippy::too_many_arguments, reason = "still readable")]
    pub async fn update_requirement(
        id: api::requirement::Id,
        customer_name: api::contact::FullName,
        customer_phone: api::contact::Phone,
        customer_email: Option<api::contact::Email>,
        profession: Option<api::requirement::Profession>,
        kind: api::requirement::Kind,
        property_kind: api::property::Kind,
        budget_min: Option<Money>,
        budget_max: Option<Money>,
        preferred_location: Option<api::requirement::Location>,
        area_preference: Option<api::requirement::Location>,
        notes: Option<api::requirement::Notes>,
        follow_up_date: Option<Date>,
        assigned_to: Option<api::contact::FullName>,
        status: api::requirement::Status,
        ctx: &Context,
    ) -> Result<api::Requirement, Error> {
        ctx.service()
            .execute(command::UpdateRequirement {
                id: id.into(),
                customer_name: customer_name.into(),
                customer_phone: customer_phone.into(),
                customer_email: customer_email.map(Into::into),
                profession: profession.map(Into::into),
                kind: kind.into(),
                property_kind: property_kind.into(),
                budget_min,
                budget_max,
                preferred_location: preferred_location.map(Into::into),
                area_preference: area_preference.map(Into::into),
                notes: notes.map(Into::into),
                follow_up_date: follow_up_date.map(Date::coerce),
                assigned_to: assigned_to.map(Into::into),
                status: status.into(),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }
}

define_error! {
    enum AmountError {
        #[code = "NEGATIVE_AMOUNT"]
        #[status = BAD_REQUEST]
        #[message = "Monetary amounts cannot be negative"]
        Negative,
    }
}

define_error! {
    enum NotExistsError {
        #[code = "PROPERTY_NOT_EXISTS"]
        #[status = NOT_FOUND]
        #[message = "`Property` with the provided ID does not exist"]
        Property,

        #[code = "OWNER_NOT_EXISTS"]
        #[status = NOT_FOUND]
        #[message = "`Owner` with the provided ID does not exist"]
        Owner,

        #[code = "BROKER_NOT_EXISTS"]
        #[status = NOT_FOUND]
        #[message = "`Broker` with the provided ID does not exist"]
        Broker,

        #[code = "TENANT_NOT_EXISTS"]
        #[status = NOT_FOUND]
        #[message = "`Tenant` with the provided ID does not exist"]
        Tenant,

        #[code = "AGREEMENT_NOT_EXISTS"]
        #[status = NOT_FOUND]
        #[message = "`RentAgreement` with the provided ID does not exist"]
        Agreement,

        #[code = "REQUIREMENT_NOT_EXISTS"]
        #[status = NOT_FOUND]
        #[message = "`Requirement` with the provided ID does not exist"]
        Requirement,
    }
}

impl AsError for command::create_owner::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Db(e) => e.try_as_error(),
        }
    }
}

impl AsError for command::create_broker::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Db(e) => e.try_as_error(),
        }
    }
}

impl AsError for command::update_broker::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Db(e) => e.try_as_error(),
            Self::BrokerNotExists(_) => Some(NotExistsError::Broker.into()),
        }
    }
}

impl AsError for command::create_tenant::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Db(e) => e.try_as_error(),
        }
    }
}

impl AsError for command::create_property::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        Some(match self {
            Self::Db(e) => return e.try_as_error(),
            Self::OwnerNotExists(_) => NotExistsError::Owner.into(),
            Self::BrokerNotExists(_) => NotExistsError::Broker.into(),
            Self::NegativeAmount => AmountError::Negative.into(),
        })
    }
}

impl AsError for command::update_property::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        Some(match self {
            Self::Db(e) => return e.try_as_error(),
            Self::PropertyNotExists(_) => NotExistsError::Property.into(),
            Self::OwnerNotExists(_) => NotExistsError::Owner.into(),
            Self::BrokerNotExists(_) => NotExistsError::Broker.into(),
            Self::NegativeAmount => AmountError::Negative.into(),
        })
    }
}

impl AsError for command::set_property_owner::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        Some(match self {
            Self::Db(e) => return e.try_as_error(),
            Self::OwnerNotExists(_) => NotExistsError::Owner.into(),
            Self::PropertyNotExists(_) => NotExistsError::Property.into(),
        })
    }
}

impl AsError for command::set_property_broker::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        Some(match self {
            Self::Db(e) => return e.try_as_error(),
            Self::BrokerNotExists(_) => NotExistsError::Broker.into(),
            Self::PropertyNotExists(_) => NotExistsError::Property.into(),
        })
    }
}

impl AsError for command::create_rent_agreement::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        Some(match self {
            Self::Db(e) => return e.try_as_error(),
            Self::PropertyNotExists(_) => NotExistsError::Property.into(),
            Self::TenantNotExists(_) => NotExistsError::Tenant.into(),
            Self::OwnerNotExists(_) => NotExistsError::Owner.into(),
            Self::NegativeAmount => AmountError::Negative.into(),
        })
    }
}

impl AsError for command::update_rent_agreement::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        Some(match self {
            Self::Db(e) => return e.try_as_error(),
            Self::AgreementNotExists(_) => NotExistsError::Agreement.into(),
            Self::NegativeAmount => AmountError::Negative.into(),
        })
    }
}

impl AsError for command::create_payment::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        Some(match self {
            Self::Db(e) => return e.try_as_error(),
            Self::AgreementNotExists(_) => NotExistsError::Agreement.into(),
            Self::NegativeAmount => AmountError::Negative.into(),
        })
    }
}

impl AsError for command::create_requirement::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        Some(match self {
            Self::Db(e) => return e.try_as_error(),
            Self::NegativeAmount => AmountError::Negative.into(),
        })
    }
}

impl AsError for command::update_requirement::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        Some(match self {
            Self::Db(e) => return e.try_as_error(),
            Self::RequirementNotExists(_) => {
                NotExistsError::Requirement.into()
            }
            Self::NegativeAmount => AmountError::Negative.into(),
        })
    }
}
