//! [`Command`] for updating a [`Requirement`].

use common::{
    operations::{By, Commit, Select, Transact, Transacted, Update},
    Money,
};
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

/// [`Command`] for updating a [`Requirement`].
#[derive(Clone, Debug)]
pub struct UpdateRequirement {
    /// ID of the [`Requirement`] to update.
    pub id: requirement::Id,

    /// New [`FullName`] of the inquiring customer.
    pub customer_name: FullName,

    /// New [`Phone`] number of the inquiring customer.
    pub customer_phone: Phone,

    /// New [`Email`] address of the inquiring customer, if any.
    pub customer_email: Option<Email>,

    /// New [`requirement::Profession`] of the customer, if known.
    pub profession: Option<requirement::Profession>,

    /// New [`requirement::Kind`] of the [`Requirement`].
    pub kind: requirement::Kind,

    /// New [`property::Kind`] the customer is looking for.
    pub property_kind: property::Kind,

    /// New lower bound of the customer's budget, if given.
    pub budget_min: Option<Money>,

    /// New upper bound of the customer's budget, if given.
    pub budget_max: Option<Money>,

    /// New preferred [`requirement::Location`], if given.
    pub preferred_location: Option<requirement::Location>,

    /// New area preference, if given.
    pub area_preference: Option<requirement::Location>,

    /// New free-form [`requirement::Notes`], if any.
    pub notes: Option<requirement::Notes>,

    /// New [`requirement::FollowUpDate`], if scheduled.
    pub follow_up_date: Option<requirement::FollowUpDate>,

    /// New assignee [`FullName`], if any.
    pub assigned_to: Option<FullName>,

    /// New [`requirement::Status`] of the [`Requirement`].
    pub status: requirement::Status,
}

impl<Db> Command<UpdateRequirement> for Service<Db>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Select<By<Option<Requirement>, requirement::Id>>,
            Ok = Option<Requirement>,
            Err = Traced<database::Error>,
        > + Database<Update<Requirement>, Ok = (), Err = Traced<database::Error>>
        + Database<Commit, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = Requirement;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: UpdateRequirement,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let UpdateRequirement {
            id,
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
            follow_up_date,
            assigned_to,
            status,
        } = cmd;

        if budget_min.as_ref().is_some_and(Money::is_negative)
            || budget_max.as_ref().is_some_and(Money::is_negative)
        {
            return Err(tracerr::new!(E::NegativeAmount));
        }

        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let mut requirement = tx
            .execute(Select(By::<Option<Requirement>, _>::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::RequirementNotExists(id))
            .map_err(tracerr::wrap!())?;

        requirement.customer_name = customer_name;
        requirement.customer_phone = customer_phone;
        requirement.customer_email = customer_email;
        requirement.profession = profession;
        requirement.kind = kind;
        requirement.property_kind = property_kind;
        requirement.budget_min = budget_min;
        requirement.budget_max = budget_max;
        requirement.preferred_location = preferred_location;
        requirement.area_preference = area_preference;
        requirement.notes = notes;
        requirement.follow_up_date = follow_up_date;
        requirement.assigned_to = assigned_to;
        requirement.status = status;
        tx.execute(Update(requirement.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(requirement)
    }
}

/// Error of [`UpdateRequirement`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`Requirement`] with the provided ID does not exist.
    #[display("`Requirement(id: {_0})` does not exist")]
    #[from(ignore)]
    RequirementNotExists(#[error(not(source))] requirement::Id),

    /// Provided budget bound is negative.
    #[display("`Requirement` budget cannot be negative")]
    NegativeAmount,
}
