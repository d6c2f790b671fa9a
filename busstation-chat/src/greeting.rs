use busstation_shared::Language;
use regex::Regex;

const GREETING_FR: &str = r"(?i)^\s*(bonjour|bonsoir|salut|coucou|bjr|slt|hello|hi|hey)(\s+(à tous|tout le monde))?\s*[!.?]*\s*$";
const GREETING_EN: &str = r"(?i)^\s*(hello|hi|hey|hiya|greetings|good\s+(morning|afternoon|evening))(\s+there)?\s*[!.?]*\s*$";

/// Whole-message greeting detection, answered locally without calling the model.
///
/// Only a message that is nothing but a greeting matches; "bonjour, comment
/// annuler ?" is a real question and goes upstream.
#[derive(Debug, Clone)]
pub struct Greetings {
    fr: Regex,
    en: Regex,
}

impl Greetings {
    pub fn compile() -> Result<Self, regex::Error> {
        Ok(Self {
            fr: Regex::new(GREETING_FR)?,
            en: Regex::new(GREETING_EN)?,
        })
    }

    pub fn is_greeting(&self, language: Language, message: &str) -> bool {
        match language {
            Language::Fr => self.fr.is_match(message),
            Language::En => self.en.is_match(message),
        }
    }

    pub fn reply(language: Language) -> &'static str {
        match language {
            Language::Fr => "Bonjour ! Je suis l'assistant BusStation. Posez-moi vos questions sur les réservations, les paiements ou les annulations.",
            Language::En => "Hello! I'm the BusStation assistant. Ask me anything about bookings, payments or cancellations.",
        }
    }
}
