use crate::modules::consultations::adapters::outbound::ledger::LedgerError;
use crate::modules::consultations::use_cases::book_slot::decide::DecideError;
use crate::modules::directory::use_cases::resolve_caller::handler::AuthError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BookingError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("not found")]
    NotFound,

    #[error("already booked: you already have a consultation on this topic")]
    AlreadyBooked,

    #[error("slot taken: this time is already booked")]
    SlotTaken,

    #[error("backend error: {0}")]
    Backend(String),
}

impl From<DecideError> for BookingError {
    fn from(reason: DecideError) -> Self {
        match reason {
            DecideError::AlreadyBooked => BookingError::AlreadyBooked,
            DecideError::SlotTaken => BookingError::SlotTaken,
        }
    }
}

impl From<LedgerError> for BookingError {
    fn from(error: LedgerError) -> Self {
        match error {
            LedgerError::Rejected(reason) => reason.into(),
            LedgerError::NotFound => BookingError::NotFound,
            LedgerError::Backend(message) => BookingError::Backend(message),
        }
    }
}

impl From<anyhow::Error> for BookingError {
    fn from(error: anyhow::Error) -> Self {
        BookingError::Backend(error.to_string())
    }
}

#[cfg(test)]
mod booking_error_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(LedgerError::Rejected(DecideError::AlreadyBooked), BookingError::AlreadyBooked)]
    #[case(LedgerError::Rejected(DecideError::SlotTaken), BookingError::SlotTaken)]
    #[case(LedgerError::NotFound, BookingError::NotFound)]
    #[case(LedgerError::Backend("down".into()), BookingError::Backend("down".into()))]
    fn it_should_translate_ledger_errors(#[case] error: LedgerError, #[case] expected: BookingError) {
        assert_eq!(BookingError::from(error), expected);
    }
}
