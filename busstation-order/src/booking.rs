//! Booking flow as one finite-state machine.
//!
//! ```text
//! Idle -> PassengerForm -> Submitting -> Success -> PaymentForm -> PayingSubmitting -> Redirected
//!                              |                                        |
//!                              +-> Error (resumes PassengerForm)        +-> Error (resumes PaymentForm)
//! ```
//!
//! [`BookingFlow::apply`] is the only way to move between states. It never performs I/O;
//! it returns [`Command`]s for the orchestrator to run and report back as actions.

use busstation_catalog::SelectionState;
use busstation_core::{PaymentRequest, Route};
use busstation_shared::models::{Reservation, ReservationRequest, Voyage};
use busstation_shared::{Language, Masked};

use crate::error::BookingError;
use crate::messages;
use crate::passengers::{PassengerField, PassengerForm};

/// What the reservation step left us with; drives the payment modal.
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub reservation_id: String,
    pub total_price: f64,
    pub seats: Vec<u32>,
}

/// Mock mobile-money details.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentForm {
    pub phone: Masked<String>,
    pub holder_name: String,
}

impl PaymentForm {
    pub fn is_complete(&self) -> bool {
        !self.phone.expose().trim().is_empty() && !self.holder_name.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PaymentField {
    Phone(String),
    HolderName(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Booking,
    Payment,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BookingState {
    Idle,
    PassengerForm(PassengerForm),
    Submitting(PassengerForm),
    Success(Receipt),
    PaymentForm { receipt: Receipt, form: PaymentForm },
    PayingSubmitting { receipt: Receipt, form: PaymentForm },
    Redirected(Route),
    Error {
        kind: FailureKind,
        message: String,
        /// State restored when the error modal is dismissed.
        resume: Box<BookingState>,
    },
}

impl BookingState {
    pub fn name(&self) -> &'static str {
        match self {
            BookingState::Idle => "Idle",
            BookingState::PassengerForm(_) => "PassengerForm",
            BookingState::Submitting(_) => "Submitting",
            BookingState::Success(_) => "Success",
            BookingState::PaymentForm { .. } => "PaymentForm",
            BookingState::PayingSubmitting { .. } => "PayingSubmitting",
            BookingState::Redirected(_) => "Redirected",
            BookingState::Error { .. } => "Error",
        }
    }

    /// A request is in flight; the triggering control stays disabled.
    pub fn is_pending(&self) -> bool {
        matches!(
            self,
            BookingState::Submitting(_) | BookingState::PayingSubmitting { .. }
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum BookingAction {
    ToggleSeat(u32),
    RequestBooking { default_baggage: u32 },
    UpdatePassenger { index: usize, field: PassengerField },
    CancelPassengerForm,
    SubmitPassengers,
    ReservationSucceeded(Reservation),
    ReservationFailed(String),
    TripLoaded(Voyage),
    AcknowledgeSuccess,
    UpdatePayment(PaymentField),
    SubmitPayment,
    PaymentSucceeded,
    PaymentFailed(String),
    DismissError,
}

impl BookingAction {
    pub fn name(&self) -> &'static str {
        match self {
            BookingAction::ToggleSeat(_) => "ToggleSeat",
            BookingAction::RequestBooking { .. } => "RequestBooking",
            BookingAction::UpdatePassenger { .. } => "UpdatePassenger",
            BookingAction::CancelPassengerForm => "CancelPassengerForm",
            BookingAction::SubmitPassengers => "SubmitPassengers",
            BookingAction::ReservationSucceeded(_) => "ReservationSucceeded",
            BookingAction::ReservationFailed(_) => "ReservationFailed",
            BookingAction::TripLoaded(_) => "TripLoaded",
            BookingAction::AcknowledgeSuccess => "AcknowledgeSuccess",
            BookingAction::UpdatePayment(_) => "UpdatePayment",
            BookingAction::SubmitPayment => "SubmitPayment",
            BookingAction::PaymentSucceeded => "PaymentSucceeded",
            BookingAction::PaymentFailed(_) => "PaymentFailed",
            BookingAction::DismissError => "DismissError",
        }
    }
}

/// Side effects requested by the reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    SubmitReservation(ReservationRequest),
    RefetchTrip(String),
    SubmitPayment(PaymentRequest),
    Navigate(Route),
}

type Transition = Result<(BookingState, Vec<Command>), (BookingState, BookingError)>;

/// Booking state for one traveler on one trip page.
#[derive(Debug, Clone)]
pub struct BookingFlow {
    user_id: String,
    voyage: Voyage,
    selection: SelectionState,
    state: BookingState,
    language: Language,
}

impl BookingFlow {
    pub fn new(user_id: impl Into<String>, voyage: Voyage) -> Self {
        let selection = SelectionState::new(voyage.seat_capacity(), voyage.place_reservees.iter().copied());
        Self {
            user_id: user_id.into(),
            voyage,
            selection,
            state: BookingState::Idle,
            language: Language::default(),
        }
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn state(&self) -> &BookingState {
        &self.state
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn voyage(&self) -> &Voyage {
        &self.voyage
    }

    /// Apply `action`. On error the state is left exactly as it was.
    pub fn apply(&mut self, action: BookingAction) -> Result<Vec<Command>, BookingError> {
        let current = std::mem::replace(&mut self.state, BookingState::Idle);
        let from = current.name();

        match self.transition(current, action) {
            Ok((next, commands)) => {
                if next.name() != from {
                    tracing::debug!("Booking flow {} -> {}", from, next.name());
                }
                self.state = next;
                Ok(commands)
            }
            Err((previous, err)) => {
                self.state = previous;
                Err(err)
            }
        }
    }

    fn transition(&mut self, state: BookingState, action: BookingAction) -> Transition {
        use BookingAction as A;
        use BookingState as S;

        match (state, action) {
            (state, A::TripLoaded(voyage)) => {
                self.selection
                    .refresh(voyage.seat_capacity(), voyage.place_reservees.iter().copied());
                self.voyage = voyage;
                Ok((state, vec![]))
            }

            (S::Idle, A::ToggleSeat(seat)) => {
                self.selection.toggle(seat);
                Ok((S::Idle, vec![]))
            }

            (S::Idle, A::RequestBooking { default_baggage }) => {
                if self.selection.is_empty() {
                    return Err((S::Idle, BookingError::NoSeatsSelected));
                }
                let form = PassengerForm::initiate(&self.selection.seats(), default_baggage);
                Ok((S::PassengerForm(form), vec![]))
            }

            (S::PassengerForm(mut form), A::UpdatePassenger { index, field }) => {
                match form.update_field(index, field) {
                    Ok(()) => Ok((S::PassengerForm(form), vec![])),
                    Err(err) => Err((S::PassengerForm(form), err)),
                }
            }

            (S::PassengerForm(_), A::CancelPassengerForm) => Ok((S::Idle, vec![])),

            (S::PassengerForm(form), A::SubmitPassengers) => match self.reservation_request(&form) {
                Ok(request) => Ok((S::Submitting(form), vec![Command::SubmitReservation(request)])),
                Err(err) => Err((S::PassengerForm(form), err)),
            },

            (S::Submitting(form), A::ReservationSucceeded(reservation)) => {
                let receipt = Receipt {
                    reservation_id: reservation.id_reservation,
                    total_price: self.voyage.total_for(form.len()),
                    seats: form.seats(),
                };
                tracing::info!(
                    "Reservation {} created for {} seat(s)",
                    receipt.reservation_id,
                    receipt.seats.len()
                );
                self.selection.clear();
                Ok((
                    S::Success(receipt),
                    vec![Command::RefetchTrip(self.voyage.id_voyage.clone())],
                ))
            }

            (S::Submitting(form), A::ReservationFailed(detail)) => {
                tracing::warn!("Reservation failed: {}", detail);
                Ok((
                    S::Error {
                        kind: FailureKind::Booking,
                        message: messages::booking_failed(self.language).to_string(),
                        resume: Box::new(S::PassengerForm(form)),
                    },
                    vec![],
                ))
            }

            (S::Success(receipt), A::AcknowledgeSuccess) => Ok((
                S::PaymentForm { receipt, form: PaymentForm::default() },
                vec![],
            )),

            (S::PaymentForm { receipt, mut form }, A::UpdatePayment(field)) => {
                match field {
                    PaymentField::Phone(value) => form.phone = Masked(value),
                    PaymentField::HolderName(value) => form.holder_name = value,
                }
                Ok((S::PaymentForm { receipt, form }, vec![]))
            }

            (S::PaymentForm { receipt, form }, A::SubmitPayment) => {
                if !form.is_complete() {
                    return Err((S::PaymentForm { receipt, form }, BookingError::InvalidForm));
                }
                let request = PaymentRequest {
                    id_reservation: receipt.reservation_id.clone(),
                    user_id: self.user_id.clone(),
                    amount: receipt.total_price,
                    mobile_phone: Masked(form.phone.expose().trim().to_string()),
                    mobile_phone_name: form.holder_name.trim().to_string(),
                    // The backend only offers a simulated settlement.
                    simulate_success: true,
                };
                Ok((
                    S::PayingSubmitting { receipt, form },
                    vec![Command::SubmitPayment(request)],
                ))
            }

            (S::PayingSubmitting { receipt, .. }, A::PaymentSucceeded) => {
                tracing::info!("Payment confirmed for reservation {}", receipt.reservation_id);
                Ok((
                    S::Redirected(Route::Tickets),
                    vec![Command::Navigate(Route::Tickets)],
                ))
            }

            (S::PayingSubmitting { receipt, form }, A::PaymentFailed(detail)) => {
                tracing::warn!("Payment for reservation {} failed: {}", receipt.reservation_id, detail);
                Ok((
                    S::Error {
                        kind: FailureKind::Payment,
                        message: messages::payment_failed(self.language).to_string(),
                        resume: Box::new(S::PaymentForm { receipt, form }),
                    },
                    vec![],
                ))
            }

            (S::Error { resume, .. }, A::DismissError) => Ok((*resume, vec![])),

            (state, action) => {
                let err = BookingError::InvalidTransition {
                    state: state.name(),
                    action: action.name(),
                };
                Err((state, err))
            }
        }
    }

    fn reservation_request(&self, form: &PassengerForm) -> Result<ReservationRequest, BookingError> {
        let passagers = form.to_payload()?;
        Ok(ReservationRequest {
            id_user: self.user_id.clone(),
            id_voyage: self.voyage.id_voyage.clone(),
            nbr_passager: passagers.len() as u32,
            montant_paye: self.voyage.total_for(passagers.len()),
            passagers,
        })
    }
}
