use async_trait::async_trait;
use busstation_shared::models::{Reservation, ReservationRequest, Voyage};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::payment::PaymentRequest;

/// Failures talking to the REST backend.
///
/// Transient and permanent failures are not distinguished; callers show a generic
/// message and log the detail.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClientError {
    #[error("Network failure: {0}")]
    Network(String),

    #[error("Session rejected by backend (status {0})")]
    Unauthorized(u16),

    #[error("Backend returned status {status}: {body}")]
    Status {
        status: u16,
        body: String,
    },

    #[error("Malformed response from {endpoint}: {reason}")]
    Malformed {
        endpoint: String,
        reason: String,
    },
}

impl ClientError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Unauthorized(status) => Some(*status),
            ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// The three endpoints the booking flow depends on.
#[async_trait]
pub trait BookingBackend: Send + Sync {
    /// `GET /voyage/byId/{id}`
    async fn fetch_voyage(&self, voyage_id: &str) -> Result<Voyage, ClientError>;

    /// `POST /reservation/reserver`
    async fn create_reservation(
        &self,
        request: &ReservationRequest,
    ) -> Result<Reservation, ClientError>;

    /// `POST /reservation/simulate-payment`
    async fn simulate_payment(&self, request: &PaymentRequest) -> Result<(), ClientError>;
}

/// In-memory backend: keeps trips in a map and marks seats reserved on each reservation.
pub struct MockBookingBackend {
    voyages: Mutex<HashMap<String, Voyage>>,
    reservations: Mutex<Vec<ReservationRequest>>,
    payments: Mutex<Vec<PaymentRequest>>,
    voyage_fetches: AtomicUsize,
    fail_reservations: AtomicBool,
    fail_payments: AtomicBool,
}

impl MockBookingBackend {
    pub fn new(voyages: Vec<Voyage>) -> Self {
        Self {
            voyages: Mutex::new(
                voyages
                    .into_iter()
                    .map(|v| (v.id_voyage.clone(), v))
                    .collect(),
            ),
            reservations: Mutex::new(Vec::new()),
            payments: Mutex::new(Vec::new()),
            voyage_fetches: AtomicUsize::new(0),
            fail_reservations: AtomicBool::new(false),
            fail_payments: AtomicBool::new(false),
        }
    }

    pub fn fail_reservations(&self, fail: bool) {
        self.fail_reservations.store(fail, Ordering::SeqCst);
    }

    pub fn fail_payments(&self, fail: bool) {
        self.fail_payments.store(fail, Ordering::SeqCst);
    }

    pub fn voyage_fetches(&self) -> usize {
        self.voyage_fetches.load(Ordering::SeqCst)
    }

    pub fn reservation_requests(&self) -> Vec<ReservationRequest> {
        self.reservations.lock().map(|r| r.clone()).unwrap_or_default()
    }

    pub fn payment_requests(&self) -> Vec<PaymentRequest> {
        self.payments.lock().map(|p| p.clone()).unwrap_or_default()
    }

    fn poisoned() -> ClientError {
        ClientError::Network("mock backend lock poisoned".to_string())
    }
}

#[async_trait]
impl BookingBackend for MockBookingBackend {
    async fn fetch_voyage(&self, voyage_id: &str) -> Result<Voyage, ClientError> {
        self.voyage_fetches.fetch_add(1, Ordering::SeqCst);
        let voyages = self.voyages.lock().map_err(|_| Self::poisoned())?;
        voyages.get(voyage_id).cloned().ok_or(ClientError::Status {
            status: 404,
            body: format!("voyage {} not found", voyage_id),
        })
    }

    async fn create_reservation(
        &self,
        request: &ReservationRequest,
    ) -> Result<Reservation, ClientError> {
        if self.fail_reservations.load(Ordering::SeqCst) {
            return Err(ClientError::Status {
                status: 500,
                body: "simulated reservation failure".to_string(),
            });
        }

        let mut voyages = self.voyages.lock().map_err(|_| Self::poisoned())?;
        let voyage = voyages.get_mut(&request.id_voyage).ok_or(ClientError::Status {
            status: 404,
            body: format!("voyage {} not found", request.id_voyage),
        })?;

        let seats = request.seats();
        if seats.iter().any(|s| voyage.place_reservees.contains(s)) {
            return Err(ClientError::Status {
                status: 409,
                body: "seat already reserved".to_string(),
            });
        }

        voyage.place_reservees.extend(seats.iter().copied());
        voyage.nbr_place_restante = voyage.nbr_place_restante.saturating_sub(seats.len() as u32);
        voyage.nbr_place_reservable = voyage.nbr_place_reservable.saturating_sub(seats.len() as u32);

        let mut reservations = self.reservations.lock().map_err(|_| Self::poisoned())?;
        reservations.push(request.clone());

        Ok(Reservation {
            id_reservation: format!("R{}", reservations.len()),
            prix_total: Some(request.montant_paye),
            date_reservation: None,
            statut_reservation: None,
            places: seats,
            voyage: Some(voyage.clone()),
        })
    }

    async fn simulate_payment(&self, request: &PaymentRequest) -> Result<(), ClientError> {
        if self.fail_payments.load(Ordering::SeqCst) {
            return Err(ClientError::Status {
                status: 502,
                body: "simulated payment gateway failure".to_string(),
            });
        }

        tracing::info!("Simulated payment for reservation {}", request.id_reservation);
        self.payments
            .lock()
            .map_err(|_| Self::poisoned())?
            .push(request.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use busstation_shared::models::{Gender, PassengerPayload};
    use busstation_shared::Masked;
    use chrono::NaiveDate;

    fn voyage() -> Voyage {
        Voyage {
            id_voyage: "V1".to_string(),
            nom_agence: "Touristique Express".to_string(),
            lieu_depart: "Douala".to_string(),
            lieu_arrive: "Yaoundé".to_string(),
            point_de_depart: None,
            point_arrivee: None,
            date_depart_prev: NaiveDate::from_ymd_opt(2026, 10, 20)
                .unwrap()
                .and_hms_opt(7, 0, 0)
                .unwrap(),
            nbr_place_restante: 10,
            nbr_place_reservable: 10,
            nom_classe_voyage: None,
            prix: 5000.0,
            place_reservees: vec![1],
            vehicule: None,
        }
    }

    fn request(seat: u32) -> ReservationRequest {
        ReservationRequest {
            id_user: "U1".to_string(),
            id_voyage: "V1".to_string(),
            nbr_passager: 1,
            montant_paye: 5000.0,
            passagers: vec![PassengerPayload {
                numero_piece_identific: Masked::from("CNI-1"),
                nom: "Jean".to_string(),
                genre: Gender::Male,
                age: 40,
                nbr_baggage: 0,
                place_choisis: seat,
            }],
        }
    }

    #[tokio::test]
    async fn test_mock_backend_marks_seats_reserved() {
        let backend = MockBookingBackend::new(vec![voyage()]);

        let reservation = backend.create_reservation(&request(2)).await.unwrap();
        assert_eq!(reservation.id_reservation, "R1");

        let refreshed = backend.fetch_voyage("V1").await.unwrap();
        assert_eq!(refreshed.place_reservees, vec![1, 2]);
        assert_eq!(refreshed.nbr_place_reservable, 9);
    }

    #[tokio::test]
    async fn test_mock_backend_rejects_double_booking() {
        let backend = MockBookingBackend::new(vec![voyage()]);

        let err = backend.create_reservation(&request(1)).await.unwrap_err();
        assert_eq!(err.status(), Some(409));
        assert!(backend.reservation_requests().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_voyage() {
        let backend = MockBookingBackend::new(vec![]);
        let err = backend.fetch_voyage("nope").await.unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert_eq!(backend.voyage_fetches(), 1);
    }
}
