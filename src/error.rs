use thiserror::Error;

/// Failures surfaced by catalog loading and browsing operations.
///
/// Absent lookups are not failures; those come back as `None`.
#[derive(Error, Debug)]
pub enum Error {
    /// A song record that cannot enter the catalog. The whole load aborts;
    /// a partial catalog never escapes.
    #[error("invalid song record: {0}")]
    Validation(String),

    #[error("unsupported sort field: {0}")]
    UnsupportedField(String),

    /// A catalog-dependent operation ran before a successful load.
    #[error("no catalog loaded")]
    CatalogNotLoaded,

    /// Payload text that does not parse as the expected JSON shape.
    #[error("malformed payload: {0}")]
    Payload(String),

    #[error("data source failure: {0}")]
    Source(String),

    #[error("payload cache failure: {0}")]
    Cache(String),

    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
