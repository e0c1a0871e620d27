//! Contact-related GraphQL scalar definitions shared by people-shaped
//! entities.

use derive_more::{AsRef, Display, From, Into};
use juniper::GraphQLScalar;
use service::domain;

use crate::api::scalar;

/// Full name of a person.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(with = scalar::Via::<domain::contact::FullName>)]
pub struct FullName(domain::contact::FullName);

/// Phone number.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(with = scalar::Via::<domain::contact::Phone>)]
pub struct Phone(domain::contact::Phone);

/// E-mail address.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(with = scalar::Via::<domain::contact::Email>)]
pub struct Email(domain::contact::Email);

/// Postal address.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(with = scalar::Via::<domain::contact::PostalAddress>)]
pub struct PostalAddress(domain::contact::PostalAddress);
