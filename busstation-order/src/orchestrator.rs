use busstation_core::{BookingBackend, Route, Session};
use busstation_shared::Language;
use std::collections::VecDeque;
use std::sync::Arc;

use crate::booking::{BookingAction, BookingFlow, BookingState, Command};
use crate::error::BookingError;
use crate::messages;

/// Runs the booking flow against the backend.
///
/// Commands are executed one at a time, in order, so at most one request is in
/// flight per page.
pub struct BookingOrchestrator {
    backend: Arc<dyn BookingBackend>,
    flow: BookingFlow,
    redirect: Option<Route>,
}

impl BookingOrchestrator {
    /// Open the booking page for `voyage_id`.
    ///
    /// Fails with the login redirect when no user is signed in, or with
    /// [`BookingError::Load`] when the trip cannot be fetched.
    pub async fn load(
        backend: Arc<dyn BookingBackend>,
        session: &Session,
        voyage_id: &str,
        language: Language,
    ) -> Result<Self, BookingError> {
        let user = session.require_user()?;

        let voyage = backend.fetch_voyage(voyage_id).await.map_err(|e| {
            tracing::error!("Failed to load voyage {}: {}", voyage_id, e);
            BookingError::Load(e)
        })?;

        let flow = BookingFlow::new(user.profile.user_id, voyage).with_language(language);
        Ok(Self {
            backend,
            flow,
            redirect: None,
        })
    }

    /// Message shown on the error panel when [`load`](Self::load) fails.
    pub fn load_error_message(language: Language) -> &'static str {
        messages::load_failed(language)
    }

    pub fn state(&self) -> &BookingState {
        self.flow.state()
    }

    pub fn flow(&self) -> &BookingFlow {
        &self.flow
    }

    /// Set once the payment is confirmed.
    pub fn redirect(&self) -> Option<&Route> {
        self.redirect.as_ref()
    }

    /// Apply a user action and run every command it leads to.
    pub async fn dispatch(&mut self, action: BookingAction) -> Result<&BookingState, BookingError> {
        let mut queue: VecDeque<Command> = self.flow.apply(action)?.into();

        while let Some(command) = queue.pop_front() {
            if let Some(outcome) = self.execute(command).await {
                queue.extend(self.flow.apply(outcome)?);
            }
        }

        Ok(self.flow.state())
    }

    async fn execute(&mut self, command: Command) -> Option<BookingAction> {
        match command {
            Command::SubmitReservation(request) => {
                match self.backend.create_reservation(&request).await {
                    Ok(reservation) => Some(BookingAction::ReservationSucceeded(reservation)),
                    Err(e) => Some(BookingAction::ReservationFailed(e.to_string())),
                }
            }
            Command::RefetchTrip(voyage_id) => match self.backend.fetch_voyage(&voyage_id).await {
                Ok(voyage) => Some(BookingAction::TripLoaded(voyage)),
                Err(e) => {
                    // The seat map stays on the previous snapshot until the next page load.
                    tracing::warn!("Failed to refresh voyage {}: {}", voyage_id, e);
                    None
                }
            },
            Command::SubmitPayment(request) => match self.backend.simulate_payment(&request).await {
                Ok(()) => Some(BookingAction::PaymentSucceeded),
                Err(e) => Some(BookingAction::PaymentFailed(e.to_string())),
            },
            Command::Navigate(route) => {
                tracing::info!("Redirecting to {}", route);
                self.redirect = Some(route);
                None
            }
        }
    }
}
