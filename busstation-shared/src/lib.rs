pub mod format;
pub mod language;
pub mod models;
pub mod pii;

pub use language::Language;
pub use pii::Masked;
