use async_trait::async_trait;
use busstation_core::{BookingBackend, ClientError, PaymentRequest};
use busstation_shared::models::{
    Agence, AgenceRequest, BsmStatistics, Chauffeur, EvolutionStatistics, GeneralStatistics,
    Historique, Organisation, OrganisationStatistics, Page, PageRequest, Reservation,
    ReservationRequest, Vehicule, Voyage, VoyageStatistics, MAX_SEAT_CAPACITY,
};
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::app_config::BackendConfig;

/// REST client for the BusStation backend.
///
/// Every response body is decoded into the endpoint's typed schema at this boundary;
/// a 2xx body that does not fit is a [`ClientError::Malformed`], never an empty default.
#[derive(Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl BackendClient {
    pub fn new(config: &BackendConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| ClientError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: None,
        })
    }

    /// Attaches `Authorization: Bearer <token>` to every subsequent request.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ========================================================================
    // Trips, tickets, history
    // ========================================================================

    pub async fn list_agency_voyages(
        &self,
        agency_id: &str,
        page: PageRequest,
    ) -> Result<Page<Voyage>, ClientError> {
        let path = format!("/voyage/agence/{}", agency_id);
        self.fetch(&path, self.request(Method::GET, &path).query(&page))
            .await
    }

    pub async fn list_user_reservations(
        &self,
        user_id: &str,
        page: PageRequest,
    ) -> Result<Page<Reservation>, ClientError> {
        let path = format!("/reservation/utilisateur/{}", user_id);
        self.fetch(&path, self.request(Method::GET, &path).query(&page))
            .await
    }

    pub async fn list_user_history(
        &self,
        user_id: &str,
        page: PageRequest,
    ) -> Result<Page<Historique>, ClientError> {
        let path = format!("/historique/utilisateur/{}", user_id);
        self.fetch(&path, self.request(Method::GET, &path).query(&page))
            .await
    }

    /// Cancellation rules (refund rate, compensation) are applied by the backend.
    pub async fn cancel_reservation(&self, reservation_id: &str) -> Result<(), ClientError> {
        let path = format!("/reservation/annuler/{}", reservation_id);
        self.execute(&path, self.request(Method::DELETE, &path))
            .await?;
        tracing::info!("Reservation {} cancelled", reservation_id);
        Ok(())
    }

    // ========================================================================
    // Agencies and directory
    // ========================================================================

    pub async fn list_agencies(&self, page: PageRequest) -> Result<Page<Agence>, ClientError> {
        self.fetch("/agence", self.request(Method::GET, "/agence").query(&page))
            .await
    }

    pub async fn get_agency(&self, agency_id: &str) -> Result<Agence, ClientError> {
        let path = format!("/agence/{}", agency_id);
        self.fetch(&path, self.request(Method::GET, &path)).await
    }

    pub async fn create_agency(&self, body: &AgenceRequest) -> Result<Agence, ClientError> {
        self.fetch("/agence", self.request(Method::POST, "/agence").json(body))
            .await
    }

    pub async fn update_agency(
        &self,
        agency_id: &str,
        body: &AgenceRequest,
    ) -> Result<Agence, ClientError> {
        let path = format!("/agence/{}", agency_id);
        self.fetch(&path, self.request(Method::PATCH, &path).json(body))
            .await
    }

    pub async fn delete_agency(&self, agency_id: &str) -> Result<(), ClientError> {
        let path = format!("/agence/{}", agency_id);
        self.execute(&path, self.request(Method::DELETE, &path))
            .await
            .map(|_| ())
    }

    pub async fn list_organisations(
        &self,
        page: PageRequest,
    ) -> Result<Page<Organisation>, ClientError> {
        self.fetch(
            "/organisation",
            self.request(Method::GET, "/organisation").query(&page),
        )
        .await
    }

    pub async fn list_drivers(&self, agency_id: &str) -> Result<Vec<Chauffeur>, ClientError> {
        let path = format!("/chauffeur/agence/{}", agency_id);
        self.fetch(&path, self.request(Method::GET, &path)).await
    }

    pub async fn list_vehicles(&self, agency_id: &str) -> Result<Vec<Vehicule>, ClientError> {
        let path = format!("/vehicule/agence/{}", agency_id);
        self.fetch(&path, self.request(Method::GET, &path)).await
    }

    // ========================================================================
    // Statistics (read-only)
    // ========================================================================

    pub async fn agency_statistics(&self, agency_id: &str) -> Result<GeneralStatistics, ClientError> {
        let path = format!("/statistiques/agence/{}/general", agency_id);
        self.fetch(&path, self.request(Method::GET, &path)).await
    }

    pub async fn agency_evolution(
        &self,
        agency_id: &str,
    ) -> Result<EvolutionStatistics, ClientError> {
        let path = format!("/statistiques/agence/{}/evolution", agency_id);
        self.fetch(&path, self.request(Method::GET, &path)).await
    }

    pub async fn organisation_statistics(
        &self,
        organisation_id: &str,
    ) -> Result<OrganisationStatistics, ClientError> {
        let path = format!("/statistiques/organisation/{}", organisation_id);
        self.fetch(&path, self.request(Method::GET, &path)).await
    }

    pub async fn voyage_statistics(&self, voyage_id: &str) -> Result<VoyageStatistics, ClientError> {
        let path = format!("/statistiques/voyage/{}", voyage_id);
        self.fetch(&path, self.request(Method::GET, &path)).await
    }

    pub async fn city_statistics(&self, city: &str) -> Result<BsmStatistics, ClientError> {
        self.fetch(
            "/bsm/statistiques",
            self.request(Method::GET, "/bsm/statistiques")
                .query(&[("ville", city)]),
        )
        .await
    }

    // ========================================================================
    // Transport
    // ========================================================================

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self
            .client
            .request(method, format!("{}{}", self.base_url, path));
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        request: RequestBuilder,
    ) -> Result<T, ClientError> {
        let body = self.execute(endpoint, request).await?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::warn!("Malformed response from {}: {}", endpoint, e);
            ClientError::Malformed {
                endpoint: endpoint.to_string(),
                reason: e.to_string(),
            }
        })
    }

    async fn execute(&self, endpoint: &str, request: RequestBuilder) -> Result<String, ClientError> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!("Request to {} failed: {}", endpoint, e);
            ClientError::Network(e.to_string())
        })?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                tracing::warn!("{} rejected the session ({})", endpoint, response.status());
                Err(ClientError::Unauthorized(response.status().as_u16()))
            }
            status if status.is_success() => response
                .text()
                .await
                .map_err(|e| ClientError::Network(e.to_string())),
            status => {
                let body = response.text().await.unwrap_or_default();
                tracing::warn!("{} returned {}: {}", endpoint, status, body);
                Err(ClientError::Status {
                    status: status.as_u16(),
                    body,
                })
            }
        }
    }
}

#[async_trait]
impl BookingBackend for BackendClient {
    async fn fetch_voyage(&self, voyage_id: &str) -> Result<Voyage, ClientError> {
        let path = format!("/voyage/byId/{}", voyage_id);
        let voyage: Voyage = self.fetch(&path, self.request(Method::GET, &path)).await?;
        if !voyage.has_drawable_capacity() {
            tracing::warn!("Voyage {} reports {} seats", voyage_id, voyage.seat_capacity());
            return Err(ClientError::Malformed {
                endpoint: path,
                reason: format!(
                    "seat capacity {} exceeds {}",
                    voyage.seat_capacity(),
                    MAX_SEAT_CAPACITY
                ),
            });
        }
        Ok(voyage)
    }

    async fn create_reservation(
        &self,
        request: &ReservationRequest,
    ) -> Result<Reservation, ClientError> {
        let reservation: Reservation = self
            .fetch(
                "/reservation/reserver",
                self.request(Method::POST, "/reservation/reserver").json(request),
            )
            .await?;
        tracing::info!(
            "Reservation {} created for voyage {}",
            reservation.id_reservation,
            request.id_voyage
        );
        Ok(reservation)
    }

    async fn simulate_payment(&self, request: &PaymentRequest) -> Result<(), ClientError> {
        // No body is required on success
        self.execute(
            "/reservation/simulate-payment",
            self.request(Method::POST, "/reservation/simulate-payment")
                .json(request),
        )
        .await?;
        tracing::info!("Payment recorded for reservation {}", request.id_reservation);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> BackendClient {
        BackendClient::new(&BackendConfig {
            base_url: format!("{}/", server.uri()),
            timeout_seconds: 5,
        })
        .unwrap()
        .with_token("jwt-token")
    }

    fn voyage_json() -> serde_json::Value {
        json!({
            "idVoyage": "V1",
            "nomAgence": "Touristique Express",
            "lieuDepart": "Douala",
            "lieuArrive": "Bafoussam",
            "dateDepartPrev": "2026-11-02T06:00:00",
            "nbrPlaceRestante": 54,
            "nbrPlaceReservable": 54,
            "prix": 5000.0,
            "placeReservees": [7, 8],
            "vehicule": { "nbrPlaces": 56 }
        })
    }

    #[tokio::test]
    async fn test_fetch_voyage_sends_bearer_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/voyage/byId/V1"))
            .and(header("authorization", "Bearer jwt-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(voyage_json()))
            .expect(1)
            .mount(&server)
            .await;

        let voyage = client(&server).fetch_voyage("V1").await.unwrap();
        assert_eq!(voyage.place_reservees, vec![7, 8]);
        assert_eq!(voyage.seat_capacity(), 56);
    }

    #[tokio::test]
    async fn test_schema_mismatch_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/voyage/byId/V1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "idVoyage": "V1" })))
            .mount(&server)
            .await;

        let err = client(&server).fetch_voyage("V1").await.unwrap_err();
        assert!(matches!(err, ClientError::Malformed { endpoint, .. } if endpoint == "/voyage/byId/V1"));
    }

    #[tokio::test]
    async fn test_absurd_capacity_is_malformed() {
        let server = MockServer::start().await;
        let mut body = voyage_json();
        body["vehicule"] = json!({ "nbrPlaces": 4_000_000_000u32 });
        Mock::given(method("GET"))
            .and(path("/voyage/byId/V1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let err = client(&server).fetch_voyage("V1").await.unwrap_err();
        assert!(matches!(err, ClientError::Malformed { reason, .. } if reason.contains("4000000000")));
    }

    #[tokio::test]
    async fn test_status_mapping() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/agence/A1"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/agence/A2"))
            .respond_with(ResponseTemplate::new(409).set_body_string("agency has trips"))
            .mount(&server)
            .await;

        let backend = client(&server);
        assert_eq!(
            backend.get_agency("A1").await.unwrap_err(),
            ClientError::Unauthorized(403)
        );
        assert_eq!(
            backend.delete_agency("A2").await.unwrap_err(),
            ClientError::Status {
                status: 409,
                body: "agency has trips".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_network_error() {
        let backend = BackendClient::new(&BackendConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            timeout_seconds: 2,
        })
        .unwrap();

        let err = backend.fetch_voyage("V1").await.unwrap_err();
        assert!(matches!(err, ClientError::Network(_)));
        assert_eq!(err.status(), None);
    }

    #[tokio::test]
    async fn test_paginated_listing() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/agence"))
            .and(query_param("page", "1"))
            .and(query_param("size", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "content": [
                    { "agencyId": "A3", "longName": "Buca Voyages", "ville": "Douala" },
                    { "agencyId": "A4", "longName": "Finexs Voyages" }
                ],
                "totalPages": 2,
                "totalElements": 4,
                "number": 1,
                "size": 2
            })))
            .mount(&server)
            .await;

        let page = client(&server)
            .list_agencies(PageRequest::new(1, 2))
            .await
            .unwrap();
        assert_eq!(page.content.len(), 2);
        assert_eq!(page.content[0].ville.as_deref(), Some("Douala"));
        assert!(page.is_last());
    }

    #[tokio::test]
    async fn test_update_agency_sends_only_changed_fields() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/agence/A1"))
            .and(body_partial_json(json!({ "description": "Night buses" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "agencyId": "A1",
                "longName": "Buca Voyages",
                "description": "Night buses"
            })))
            .mount(&server)
            .await;

        let body = AgenceRequest {
            description: Some("Night buses".to_string()),
            ..AgenceRequest::default()
        };
        let agency = client(&server).update_agency("A1", &body).await.unwrap();
        assert_eq!(agency.description.as_deref(), Some("Night buses"));

        let sent = server.received_requests().await.unwrap();
        let sent: serde_json::Value = serde_json::from_slice(&sent[0].body).unwrap();
        assert_eq!(sent, json!({ "description": "Night buses" }));
    }

    #[tokio::test]
    async fn test_city_statistics_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/bsm/statistiques"))
            .and(query_param("ville", "Yaoundé"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "ville": "Yaoundé",
                "nombreAgences": 2,
                "nombreVoyages": 30,
                "nombreReservations": 410,
                "revenus": 2050000.0,
                "agences": []
            })))
            .mount(&server)
            .await;

        let stats = client(&server).city_statistics("Yaoundé").await.unwrap();
        assert_eq!(stats.nombre_reservations, 410);
    }

    #[tokio::test]
    async fn test_payment_accepts_empty_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/reservation/simulate-payment"))
            .and(body_partial_json(json!({ "idReservation": "R9", "simulate_success": true })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let request = PaymentRequest {
            id_reservation: "R9".to_string(),
            user_id: "U1".to_string(),
            amount: 10000.0,
            mobile_phone: "677000111".into(),
            mobile_phone_name: "Awa".to_string(),
            simulate_success: true,
        };
        client(&server).simulate_payment(&request).await.unwrap();
    }
}
