use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::voyage::Voyage;
use crate::pii::Masked;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

/// One traveler in `POST /reservation/reserver`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PassengerPayload {
    pub numero_piece_identific: Masked<String>,
    pub nom: String,
    pub genre: Gender,
    pub age: u32,
    pub nbr_baggage: u32,
    pub place_choisis: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReservationRequest {
    pub id_user: String,
    pub id_voyage: String,
    pub nbr_passager: u32,
    pub montant_paye: f64,
    pub passagers: Vec<PassengerPayload>,
}

impl ReservationRequest {
    pub fn seats(&self) -> Vec<u32> {
        self.passagers.iter().map(|p| p.place_choisis).collect()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationStatus {
    Reserver,
    Confirmer,
    Annuler,
    Valider,
}

/// A reservation as echoed by the backend. Only the identifier is guaranteed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id_reservation: String,
    #[serde(default)]
    pub prix_total: Option<f64>,
    #[serde(default)]
    pub date_reservation: Option<NaiveDateTime>,
    #[serde(default)]
    pub statut_reservation: Option<ReservationStatus>,
    #[serde(default)]
    pub places: Vec<u32>,
    #[serde(default)]
    pub voyage: Option<Voyage>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HistoriqueStatus {
    Valider,
    Annuler,
}

/// Terminal status record of a reservation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Historique {
    pub id_historique: String,
    pub id_reservation: String,
    pub statut_historique: HistoriqueStatus,
    pub date_reservation: NaiveDateTime,
    #[serde(default)]
    pub date_confirmation: Option<NaiveDateTime>,
    #[serde(default)]
    pub date_annulation: Option<NaiveDateTime>,
    #[serde(default)]
    pub cause_annulation: Option<String>,
    #[serde(default)]
    pub origine_annulation: Option<String>,
    #[serde(default)]
    pub taux_annulation: Option<f64>,
    #[serde(default)]
    pub compensation: Option<f64>,
}
