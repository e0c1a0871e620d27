//! [`Command`] for creating a new [`Requirement`].

use common::{operations::Insert, DateTime, Money};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{
        contact::{Email, FullName, Phone},
        property, requirement, Requirement,
    },
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for creating a new [`Requirement`].
#[derive(Clone, Debug)]
pub struct CreateRequirement {
    /// [`FullName`] of the inquiring customer.
    pub customer_name: FullName,

    /// [`Phone`] number of the inquiring customer.
    pub customer_phone: Phone,

    /// [`Email`] address of the inquiring customer, if any.
    pub customer_email: Option<Email>,

    /// [`requirement::Profession`] of the customer, if known.
    pub profession: Option<requirement::Profession>,

    /// [`requirement::Kind`] of the new [`Requirement`].
    pub kind: requirement::Kind,

    /// [`property::Kind`] the customer is looking for.
    pub property_kind: property::Kind,

    /// Lower bound of the customer's budget, if given.
    pub budget_min: Option<Money>,

    /// Upper bound of the customer's budget, if given.
    pub budget_max: Option<Money>,

    /// Preferred [`requirement::Location`], if given.
    pub preferred_location: Option<requirement::Location>,

    /// Area preference, if given.
    pub area_preference: Option<requirement::Location>,

    /// Free-form [`requirement::Notes`], if any.
    pub notes: Option<requirement::Notes>,

    /// [`requirement::InquiryDate`] the inquiry was made on.
    pub inquiry_date: requirement::InquiryDate,

    /// [`requirement::FollowUpDate`] to follow up on, if scheduled.
    pub follow_up_date: Option<requirement::FollowUpDate>,

    /// [`FullName`] of the staff member the inquiry is assigned to, if any.
    pub assigned_to: Option<FullName>,

    /// [`requirement::Status`] of the new [`Requirement`].
    pub status: requirement::Status,
}

impl<Db> Command<CreateRequirement> for Service<Db>
where
    Db: Database<Insert<Requirement>, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = Requirement;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: CreateRequirement,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateRequirement {
            customer_name,
            customer_phone,
            customer_email,
            profession,
            kind,
            property_kind,
            budget_min,
            budget_max,
            preferred_location,
            area_preference,
            notes,
            inquiry_date,
            follow_up_date,
            assigned_to,
            status,
        } = cmd;

        if budget_min.as_ref().is_some_and(Money::is_negative)
            || budget_max.as_ref().is_some_and(Money::is_negative)
        {
            return Err(tracerr::new!(E::NegativeAmount));
        }

        let requirement = Requirement {
            id: requirement::Id::new(),
            customer_name,
            customer_phone,
            customer_email,
            profession,
            kind,
            property_kind,
            budget_min,
            budget_max,
            preferred_location,
            area_preference,
            notes,
            inquiry_date,
            follow_up_date,
            assigned_to,
            status,
            created_at: DateTime::now().coerce(),
        };
        self.database()
            .execute(Insert(requirement.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(requirement)
    }
}

/// Error of [`CreateRequirement`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// Provided budget bound is negative.
    #[display("`Requirement` budget cannot be negative")]
    NegativeAmount,
}
