use busstation_core::{ClientError, SessionError};

#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("Action {action} is not allowed while {state}")]
    InvalidTransition {
        state: &'static str,
        action: &'static str,
    },

    #[error("No seat selected")]
    NoSeatsSelected,

    #[error("Form is incomplete")]
    InvalidForm,

    #[error("No passenger at position {0}")]
    PassengerIndex(usize),

    #[error("Trip could not be loaded: {0}")]
    Load(ClientError),

    #[error(transparent)]
    Session(#[from] SessionError),
}
