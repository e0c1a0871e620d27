//! Domain model definitions.

pub mod agreement;
pub mod broker;
pub mod contact;
pub mod owner;
pub mod payment;
pub mod property;
pub mod requirement;
pub mod tenant;

pub use self::{
    agreement::RentAgreement, broker::Broker, owner::Owner, payment::Payment,
    property::Property, requirement::Requirement, tenant::Tenant,
};
