use thiserror::Error;

/// Errors originating from the render module.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// Theme not in the palette and no explicit colors given.
    #[error("Thème inconnu : {theme}")]
    UnknownTheme {
        /// The requested theme name.
        theme: String,
    },

    /// Theme name cannot be used as a single directory name.
    #[error("Nom de thème invalide : {theme:?}")]
    InvalidTheme {
        /// The rejected theme name.
        theme: String,
    },

    /// Category cannot be used as a single directory name.
    #[error("Catégorie invalide : {category:?}")]
    InvalidCategory {
        /// The rejected category.
        category: String,
    },
}
