use thiserror::Error;

/// Errors originating from the core module.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Invalid configuration value or structure.
    #[error("Configuration invalide : {0}")]
    Config(String),

    /// Color string is not `#RGB` or `#RRGGBB`.
    #[error("Couleur invalide : {value}")]
    InvalidColor {
        /// The rejected color string.
        value: String,
    },

    /// A catalog record whose fields disagree with each other.
    #[error("Enregistrement incohérent {code_point} : {reason}")]
    InconsistentRecord {
        /// `U+XXXX` form as read from the catalog.
        code_point: String,
        /// Which field disagreed.
        reason: String,
    },
}
