pub mod directory;
pub mod page;
pub mod reservation;
pub mod statistics;
pub mod voyage;

pub use directory::{Agence, AgenceRequest, Chauffeur, Organisation, Vehicule};
pub use page::{Page, PageRequest};
pub use reservation::{
    Gender, Historique, HistoriqueStatus, PassengerPayload, Reservation, ReservationRequest,
    ReservationStatus,
};
pub use statistics::{
    AgencyStatistics, BsmStatistics, EvolutionPoint, EvolutionStatistics, GeneralStatistics,
    OrganisationStatistics, VoyageStatistics,
};
pub use voyage::{VehiculeSummary, Voyage, MAX_SEAT_CAPACITY};
