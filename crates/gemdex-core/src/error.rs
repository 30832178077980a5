use thiserror::Error;

#[derive(Error, Debug)]
pub enum DependencyError {
    #[error("dependency specification must carry a requirement list and a kind")]
    InvalidSpecification,

    #[error("no gem named '{name}' is registered")]
    UnknownPackage { name: String },

    #[error("invalid dependency scope '{value}' (expected 'development' or 'runtime')")]
    InvalidScope { value: String },

    #[error("dependency requirements must not be empty")]
    MissingRequirements,

    #[error("dependency cache unavailable: {reason}")]
    CacheUnavailable { reason: String },

    #[error("too many gems in one query: {count} (limit {limit})")]
    QueryTooLarge { count: usize, limit: usize },
}
