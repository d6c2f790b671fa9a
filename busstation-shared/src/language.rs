use serde::{Deserialize, Serialize};

/// Interface languages. French is the platform default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Fr,
    En,
}

impl Language {
    /// Lenient parse of a client-supplied tag (`"en"`, `"en-US"`, `"FR"`); anything unknown is French.
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag.map(|t| t.trim().to_ascii_lowercase()) {
            Some(t) if t == "en" || t.starts_with("en-") || t.starts_with("en_") => Language::En,
            _ => Language::Fr,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::Fr => "fr",
            Language::En => "en",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag() {
        assert_eq!(Language::from_tag(Some("en")), Language::En);
        assert_eq!(Language::from_tag(Some("EN-us")), Language::En);
        assert_eq!(Language::from_tag(Some("fr")), Language::Fr);
        assert_eq!(Language::from_tag(Some("de")), Language::Fr);
        assert_eq!(Language::from_tag(None), Language::Fr);
    }
}
