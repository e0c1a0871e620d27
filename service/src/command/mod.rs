//! [`Command`] definition.

pub mod create_broker;
pub mod create_owner;
pub mod create_payment;
pub mod create_property;
pub mod create_rent_agreement;
pub mod create_requirement;
pub mod create_tenant;
pub mod set_property_broker;
pub mod set_property_owner;
pub mod update_broker;
pub mod update_property;
pub mod update_rent_agreement;
pub mod update_requirement;

#[cfg(test)]
pub(crate) mod fake;

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;

pub use self::{
    create_broker::CreateBroker, create_owner::CreateOwner,
    create_payment::CreatePayment, create_property::CreateProperty,
    create_rent_agreement::CreateRentAgreement,
    create_requirement::CreateRequirement, create_tenant::CreateTenant,
    set_property_broker::SetPropertyBroker,
    set_property_owner::SetPropertyOwner, update_broker::UpdateBroker,
    update_property::UpdateProperty,
    update_rent_agreement::UpdateRentAgreement,
    update_requirement::UpdateRequirement,
};
