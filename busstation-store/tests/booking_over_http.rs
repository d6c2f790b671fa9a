use busstation_core::{BookingBackend, MemorySessionStore, Route, Session, UserProfile, UserRole};
use busstation_order::{BookingAction, BookingOrchestrator, BookingState, PassengerField, PaymentField};
use busstation_shared::Language;
use busstation_store::app_config::BackendConfig;
use busstation_store::BackendClient;
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn trip(reserved: &[u32]) -> serde_json::Value {
    json!({
        "idVoyage": "V1",
        "nomAgence": "Général Express",
        "lieuDepart": "Douala",
        "lieuArrive": "Yaoundé",
        "dateDepartPrev": "2026-10-20T07:30:00",
        "nbrPlaceRestante": 10,
        "nbrPlaceReservable": 10,
        "prix": 6000.0,
        "placeReservees": reserved
    })
}

fn session() -> Session {
    let session = Session::new(Arc::new(MemorySessionStore::new()));
    session
        .login_user(
            "jwt",
            &UserProfile {
                user_id: "U42".to_string(),
                username: "awa".to_string(),
                email: None,
                role: vec![UserRole::Usager],
                agency_id: None,
                organisation_id: None,
            },
        )
        .unwrap();
    session
}

#[tokio::test]
async fn test_booking_through_rest_backend() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/voyage/byId/V1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(trip(&[1, 2])))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/voyage/byId/V1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(trip(&[1, 2, 3, 4])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/reservation/reserver"))
        .and(header("authorization", "Bearer jwt"))
        .and(body_partial_json(json!({
            "idUser": "U42",
            "idVoyage": "V1",
            "nbrPassager": 2,
            "montantPaye": 12000.0
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "idReservation": "R1" })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/reservation/simulate-payment"))
        .and(body_partial_json(json!({
            "idReservation": "R1",
            "amount": 12000.0,
            "simulate_success": true
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let session = session();
    let user = session.require_user().unwrap();
    let client = BackendClient::new(&BackendConfig {
        base_url: server.uri(),
        timeout_seconds: 5,
    })
    .unwrap()
    .with_token(user.token);
    let backend: Arc<dyn BookingBackend> = Arc::new(client);

    let mut page = BookingOrchestrator::load(backend, &session, "V1", Language::Fr)
        .await
        .unwrap();
    page.dispatch(BookingAction::ToggleSeat(3)).await.unwrap();
    page.dispatch(BookingAction::ToggleSeat(4)).await.unwrap();
    page.dispatch(BookingAction::RequestBooking { default_baggage: 1 })
        .await
        .unwrap();

    for (index, (id, name, age)) in [("CNI-001", "Awa Ngono", "31"), ("CNI-002", "Paul Ngono", "8")]
        .into_iter()
        .enumerate()
    {
        for field in [
            PassengerField::IdentityNumber(id.to_string()),
            PassengerField::Name(name.to_string()),
            PassengerField::Age(age.to_string()),
        ] {
            page.dispatch(BookingAction::UpdatePassenger { index, field })
                .await
                .unwrap();
        }
    }

    let state = page.dispatch(BookingAction::SubmitPassengers).await.unwrap();
    assert!(matches!(state, BookingState::Success(receipt) if receipt.total_price == 12000.0));
    assert!(page.flow().selection().is_empty());
    assert_eq!(page.flow().voyage().place_reservees, vec![1, 2, 3, 4]);

    page.dispatch(BookingAction::AcknowledgeSuccess).await.unwrap();
    page.dispatch(BookingAction::UpdatePayment(PaymentField::Phone("677000111".to_string())))
        .await
        .unwrap();
    page.dispatch(BookingAction::UpdatePayment(PaymentField::HolderName("Awa Ngono".to_string())))
        .await
        .unwrap();
    let state = page.dispatch(BookingAction::SubmitPayment).await.unwrap();

    assert_eq!(state, &BookingState::Redirected(Route::Tickets));
}

#[tokio::test]
async fn test_rejected_reservation_shows_generic_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/voyage/byId/V1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(trip(&[])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/reservation/reserver"))
        .respond_with(ResponseTemplate::new(400).set_body_string("place 3 déjà réservée"))
        .mount(&server)
        .await;

    let client = BackendClient::new(&BackendConfig {
        base_url: server.uri(),
        timeout_seconds: 5,
    })
    .unwrap();
    let mut page = BookingOrchestrator::load(Arc::new(client), &session(), "V1", Language::En)
        .await
        .unwrap();
    page.dispatch(BookingAction::ToggleSeat(3)).await.unwrap();
    page.dispatch(BookingAction::RequestBooking { default_baggage: 0 })
        .await
        .unwrap();
    for field in [
        PassengerField::IdentityNumber("CNI-9".to_string()),
        PassengerField::Name("Eric".to_string()),
        PassengerField::Age("40".to_string()),
    ] {
        page.dispatch(BookingAction::UpdatePassenger { index: 0, field })
            .await
            .unwrap();
    }

    let state = page.dispatch(BookingAction::SubmitPassengers).await.unwrap();
    match state {
        BookingState::Error { message, .. } => assert!(!message.contains("déjà")),
        other => panic!("unexpected state {:?}", other),
    }
    assert_eq!(page.flow().selection().seats(), vec![3]);
}
