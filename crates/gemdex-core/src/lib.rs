mod error;
mod keys;
mod record;
mod validate;

pub use error::DependencyError;
pub use keys::{runtime_dependencies_key, version_info_key, versions_key};
pub use record::{DependencyPayload, DependencyRecord, DependencyScope, RegisteredGem};
pub use validate::{validate_dependency, RawDependency};
