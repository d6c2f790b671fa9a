use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A scheduled trip as returned by `GET /voyage/byId/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Voyage {
    pub id_voyage: String,
    pub nom_agence: String,
    pub lieu_depart: String,
    pub lieu_arrive: String,
    #[serde(default)]
    pub point_de_depart: Option<String>,
    #[serde(default)]
    pub point_arrivee: Option<String>,
    pub date_depart_prev: NaiveDateTime,
    pub nbr_place_restante: u32,
    pub nbr_place_reservable: u32,
    #[serde(default)]
    pub nom_classe_voyage: Option<String>,
    /// Price of one seat.
    pub prix: f64,
    pub place_reservees: Vec<u32>,
    #[serde(default)]
    pub vehicule: Option<VehiculeSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VehiculeSummary {
    pub nbr_places: u32,
    #[serde(default)]
    pub nom: Option<String>,
    #[serde(default)]
    pub plaque_matricule: Option<String>,
}

/// Largest coach the seat map will draw. Anything above is bad data from the backend.
pub const MAX_SEAT_CAPACITY: u32 = 120;

impl Voyage {
    /// Number of seats drawn on the seat map.
    ///
    /// The vehicle's capacity wins; trips published without a vehicle fall back to
    /// the reservable count plus whatever is already reserved. Saturates rather than
    /// overflowing on corrupt counts; see [`has_drawable_capacity`](Self::has_drawable_capacity).
    pub fn seat_capacity(&self) -> u32 {
        match &self.vehicule {
            Some(v) if v.nbr_places > 0 => v.nbr_places,
            _ => {
                let reserved = u32::try_from(self.place_reservees.len()).unwrap_or(u32::MAX);
                self.nbr_place_reservable.saturating_add(reserved)
            }
        }
    }

    pub fn has_drawable_capacity(&self) -> bool {
        self.seat_capacity() <= MAX_SEAT_CAPACITY
    }

    /// `prix × seats`, the amount charged for a reservation of `seats` passengers.
    pub fn total_for(&self, seats: usize) -> f64 {
        self.prix * seats as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> serde_json::Value {
        serde_json::json!({
            "idVoyage": "V1",
            "nomAgence": "Général Express",
            "lieuDepart": "Douala",
            "lieuArrive": "Yaoundé",
            "pointDeDepart": "Akwa",
            "dateDepartPrev": "2026-10-20T07:30:00",
            "nbrPlaceRestante": 68,
            "nbrPlaceReservable": 68,
            "nomClasseVoyage": "VIP",
            "prix": 6000.0,
            "placeReservees": [1, 2],
            "vehicule": { "nbrPlaces": 70 }
        })
    }

    #[test]
    fn test_voyage_deserialization() {
        let voyage: Voyage = serde_json::from_value(sample_json()).unwrap();
        assert_eq!(voyage.id_voyage, "V1");
        assert_eq!(voyage.place_reservees, vec![1, 2]);
        assert_eq!(voyage.point_arrivee, None);
        assert_eq!(voyage.seat_capacity(), 70);
        assert_eq!(voyage.total_for(2), 12000.0);
    }

    #[test]
    fn test_missing_reserved_seats_is_rejected() {
        let mut json = sample_json();
        json.as_object_mut().unwrap().remove("placeReservees");
        assert!(serde_json::from_value::<Voyage>(json).is_err());
    }

    #[test]
    fn test_capacity_without_vehicle() {
        let mut voyage: Voyage = serde_json::from_value(sample_json()).unwrap();
        voyage.vehicule = None;
        voyage.nbr_place_reservable = 10;
        assert_eq!(voyage.seat_capacity(), 12);
        assert!(voyage.has_drawable_capacity());
    }

    #[test]
    fn test_corrupt_counts_saturate() {
        let mut json = sample_json();
        let fields = json.as_object_mut().unwrap();
        fields.remove("vehicule");
        fields.insert("nbrPlaceReservable".to_string(), serde_json::json!(u32::MAX));
        fields.insert("placeReservees".to_string(), serde_json::json!([1]));

        let voyage: Voyage = serde_json::from_value(json).unwrap();
        assert_eq!(voyage.seat_capacity(), u32::MAX);
        assert!(!voyage.has_drawable_capacity());
    }
}
