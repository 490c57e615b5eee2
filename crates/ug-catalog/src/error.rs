use thiserror::Error;

/// Errors originating from the catalog module.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A block definition line that could not be understood.
    #[error("Ligne {line} ignorée ({reason}) : {content:?}")]
    MalformedLine {
        /// 1-based line number in the definition file.
        line: usize,
        /// The raw line, without its terminator.
        content: String,
        /// What was wrong with it.
        reason: &'static str,
    },
}
