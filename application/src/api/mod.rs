//! GraphQL API definitions.

pub mod agreement;
pub mod broker;
pub mod contact;
pub mod dashboard;
mod mutation;
pub mod owner;
pub mod payment;
pub mod property;
mod query;
pub mod requirement;
pub mod scalar;
pub mod tenant;

use crate::Context;

pub use self::{
    agreement::RentAgreement, broker::Broker, dashboard::Dashboard,
    mutation::Mutation, owner::Owner, payment::Payment, property::Property,
    query::Query, requirement::Requirement, tenant::Tenant,
};

/// GraphQL schema.
pub type Schema = juniper::RootNode<
    'static,
    Query,
    Mutation,
    juniper::EmptySubscription<Context>,
>;
