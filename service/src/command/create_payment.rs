//! [`Command`] for recording a new [`Payment`].

use common::{
    operations::{By, Insert, Select},
    DateTime, Money,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{agreement, payment, Payment, RentAgreement},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for recording a new [`Payment`] against a [`RentAgreement`].
///
/// Payments are recorded as reported and are not reconciled against the
/// agreement's expected schedule.
#[derive(Clone, Debug)]
pub struct CreatePayment {
    /// ID of the [`RentAgreement`] the [`Payment`] belongs to.
    pub agreement_id: agreement::Id,

    /// [`payment::Kind`] of the [`Payment`].
    pub kind: payment::Kind,

    /// Paid amount.
    pub amount: Money,

    /// [`payment::PaymentDate`] the payment was made on.
    pub date: payment::PaymentDate,

    /// [`payment::Method`] the payment was made with.
    pub method: payment::Method,

    /// External [`payment::Reference`] number, if any.
    pub reference: Option<payment::Reference>,

    /// Free-form [`payment::Notes`], if any.
    pub notes: Option<payment::Notes>,

    /// [`payment::Status`] of the [`Payment`].
    pub status: payment::Status,
}

impl<Db> Command<CreatePayment> for Service<Db>
where
    Db: Database<
            Select<By<Option<RentAgreement>, agreement::Id>>,
            Ok = Option<RentAgreement>,
            Err = Traced<database::Error>,
        > + Database<Insert<Payment>, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = Payment;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: CreatePayment,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreatePayment {
            agreement_id,
            kind,
            amount,
            date,
            method,
            reference,
            notes,
            status,
        } = cmd;

        if amount.is_negative() {
            return Err(tracerr::new!(E::NegativeAmount));
        }

        self.database()
            .execute(Select(By::<Option<RentAgreement>, _>::new(agreement_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::AgreementNotExists(agreement_id))
            .map_err(tracerr::wrap!())
            .map(drop)?;

        let payment = Payment {
            id: payment::Id::new(),
            agreement_id,
            kind,
            amount,
            date,
            method,
            reference,
            notes,
            status,
            created_at: DateTime::now().coerce(),
        };
        self.database()
            .execute(Insert(payment.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(payment)
    }
}

/// Error of [`CreatePayment`] [`Command`] execution.
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

    /// Provided amount is negative.
    #[display("`Payment` amount cannot be negative")]
    NegativeAmount,
}

#[cfg(test)]
mod spec {
    use common::Date;

    use super::CreatePayment;
    use crate::{
        command::fake::{build, Fake},
        domain::payment,
        Command as _, Service,
    };

    #[tokio::test]
    async fn unknown_agreement_writes_nothing() {
        let db = Fake::default();
        let (svc, _bg) = Service::new(build::config(), db.clone());

        let result = svc
            .execute(CreatePayment {
                agreement_id: crate::domain::agreement::Id::new(),
                kind: payment::Kind::Rent,
                amount: "15000PKR".parse().unwrap(),
                date: Date::from_iso8601("2025-07-05").unwrap().coerce(),
                method: payment::Method::Cash,
                reference: None,
                notes: None,
                status: payment::Status::Completed,
            })
            .await;

        assert!(result.is_err());
        assert!(db.state().payments.is_empty());
    }
}
