//! [`Command`] for updating a [`RentAgreement`].

use common::{
    operations::{By, Commit, Select, Transact, Transacted, Update},
    Money,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{agreement, RentAgreement},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for updating a [`RentAgreement`].
///
/// The referenced property, tenant and owner stay as they were recorded at
/// creation; only the term, amounts and status are editable.
#[derive(Clone, Debug)]
pub struct UpdateRentAgreement {
    /// ID of the [`RentAgreement`] to update.
    pub id: agreement::Id,

    /// New [`agreement::StartDate`] of the rent term.
    pub start_date: agreement::StartDate,

    /// New [`agreement::EndDate`] of the rent term.
    pub end_date: agreement::EndDate,

    /// New monthly rent amount.
    pub monthly_rent: Money,

    /// New security deposit.
    pub security_deposit: Money,

    /// New free-form [`agreement::Terms`], if any.
    pub terms: Option<agreement::Terms>,

    /// New [`agreement::Status`].
    pub status: agreement::Status,
}

impl<Db> Command<UpdateRentAgreement> for Service<Db>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Select<By<Option<RentAgreement>, agreement::Id>>,
            Ok = Option<RentAgreement>,
            Err = Traced<database::Error>,
        > + Database<
            Update<RentAgreement>,
            Ok = (),
            Err = Traced<database::Error>,
        > + Database<Commit, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = RentAgreement;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: UpdateRentAgreement,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let UpdateRentAgreement {
            id,
            start_date,
            end_date,
            monthly_rent,
            security_deposit,
            terms,
            status,
        } = cmd;

        if monthly_rent.is_negative() || security_deposit.is_negative() {
            return Err(tracerr::new!(E::NegativeAmount));
        }

        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let mut rent_agreement = tx
            .execute(Select(By::<Option<RentAgreement>, _>::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::AgreementNotExists(id))
            .map_err(tracerr::wrap!())?;

        rent_agreement.start_date = start_date;
        rent_agreement.end_date = end_date;
        rent_agreement.monthly_rent = monthly_rent;
        rent_agreement.security_deposit = security_deposit;
        rent_agreement.terms = terms;
        rent_agreement.status = status;
        tx.execute(Update(rent_agreement.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(rent_agreement)
    }
}

/// Error of [`UpdateRentAgreement`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`RentAgreement`] with the provided ID does not exist.
    #[display("`RentAgreement(id: {_0})` does not exist")]
    #[from(ignore)]
    AgreementNotExists(#[error(not(source))] agreement::Id),

    /// Provided rent or deposit amount is negative.
    #[display("`RentAgreement` amounts cannot be negative")]
    NegativeAmount,
}
