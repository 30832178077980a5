use gemdex_core::{runtime_dependencies_key, DependencyError, DependencyRecord};
use gemdex_store::KeyValueStore;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct CacheWriter<S> {
    store: S,
}

impl<S: KeyValueStore> CacheWriter<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    // Front-inserts the record's wire form, so the most recently declared
    // dependency reads back first. Consumers must not assume declaration
    // order.
    pub fn publish(&self, record: &DependencyRecord) -> Result<(), DependencyError> {
        if !record.scope().is_runtime() {
            return Err(DependencyError::InvalidScope {
                value: record.scope().as_str().to_string(),
            });
        }

        let key = runtime_dependencies_key(record.version_full_name());
        self.store
            .list_prepend(&key, &record.to_string())
            .map_err(|err| DependencyError::CacheUnavailable {
                reason: err.to_string(),
            })
    }

    // Post-commit hook for freshly persisted records: development-scope
    // records never reach the cache, and a publish failure must not undo
    // the committed record.
    pub fn publish_created(&self, record: &DependencyRecord) {
        if !record.scope().is_runtime() {
            return;
        }

        if let Err(err) = self.publish(record) {
            warn!(
                version = record.version_full_name(),
                dependency = %record,
                "record committed but cache publish failed: {err}"
            );
        }
    }
}
