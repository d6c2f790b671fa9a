//! Generic user-facing failure messages. Backend detail is logged, never shown.

use busstation_shared::Language;

pub fn load_failed(language: Language) -> &'static str {
    match language {
        Language::Fr => "Impossible de charger les détails du voyage. Veuillez réessayer.",
        Language::En => "Unable to load the trip details. Please try again.",
    }
}

pub fn booking_failed(language: Language) -> &'static str {
    match language {
        Language::Fr => "Une erreur est survenue lors de la réservation. Veuillez réessayer.",
        Language::En => "An error occurred while booking your seats. Please try again.",
    }
}

pub fn payment_failed(language: Language) -> &'static str {
    match language {
        Language::Fr => "Le paiement n'a pas pu être effectué. Veuillez réessayer.",
        Language::En => "The payment could not be completed. Please try again.",
    }
}
