pub mod booking;
pub mod error;
pub mod messages;
pub mod orchestrator;
pub mod passengers;

pub use booking::{BookingAction, BookingFlow, BookingState, Command, FailureKind, PaymentField, PaymentForm, Receipt};
pub use error::BookingError;
pub use orchestrator::BookingOrchestrator;
pub use passengers::{PassengerDraft, PassengerField, PassengerForm};
