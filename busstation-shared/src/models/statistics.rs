use serde::{Deserialize, Serialize};

// ============================================================================
// Backend-computed aggregates, rendered read-only
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeneralStatistics {
    pub nombre_voyages: u64,
    pub nombre_reservations: u64,
    pub revenus: f64,
    pub taux_occupation: f64,
    #[serde(default)]
    pub nombre_chauffeurs: Option<u64>,
    #[serde(default)]
    pub nombre_vehicules: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EvolutionPoint {
    pub date: String,
    pub valeur: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EvolutionStatistics {
    pub reservations: Vec<EvolutionPoint>,
    pub revenus: Vec<EvolutionPoint>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AgencyStatistics {
    pub agence_id: String,
    pub nom_agence: String,
    pub nombre_voyages: u64,
    pub nombre_reservations: u64,
    pub revenus: f64,
    pub taux_occupation: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrganisationStatistics {
    pub organisation_id: String,
    pub nombre_agences: u64,
    pub nombre_voyages: u64,
    pub nombre_reservations: u64,
    pub revenus: f64,
    pub agences: Vec<AgencyStatistics>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VoyageStatistics {
    pub id_voyage: String,
    pub nbr_places_reservees: u32,
    pub nbr_places_total: u32,
    pub taux_occupation: f64,
    pub revenus: f64,
}

/// City-wide aggregates shown to the monitoring bureau.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BsmStatistics {
    pub ville: String,
    pub nombre_agences: u64,
    pub nombre_voyages: u64,
    pub nombre_reservations: u64,
    pub revenus: f64,
    pub agences: Vec<AgencyStatistics>,
}

impl BsmStatistics {
    /// Agencies ordered by revenue, highest first.
    pub fn top_agencies(&self, limit: usize) -> Vec<&AgencyStatistics> {
        let mut ranked: Vec<&AgencyStatistics> = self.agences.iter().collect();
        ranked.sort_by(|a, b| {
            b.revenus
                .partial_cmp(&a.revenus)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        ranked.truncate(limit);
        ranked
    }
}
