//! Error types for catalog assembly and lookup.

/// Errors that can occur while assembling or querying the target catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Two catalog entries ended up with the same name.
    #[error("duplicate target name in catalog: {name}")]
    DuplicateTarget {
        /// The name that appeared more than once.
        name: String,
    },

    /// A lookup asked for a name the catalog does not contain.
    #[error("unknown target: {name}")]
    UnknownTarget {
        /// The requested name.
        name: String,
    },
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
