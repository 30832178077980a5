use std::collections::BTreeMap;

use gemdex_core::{runtime_dependencies_key, version_info_key, versions_key, DependencyError};
use gemdex_store::{KeyValueStore, StoreError};
use serde::Serialize;

use crate::settings::ResolveSettings;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedDependency {
    pub name: String,
    pub requirements: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedVersion {
    pub name: String,
    pub number: String,
    pub platform: String,
    pub dependencies: Vec<ResolvedDependency>,
}

#[derive(Debug, Clone)]
pub struct CacheResolver<S> {
    store: S,
    settings: ResolveSettings,
}

impl<S: KeyValueStore> CacheResolver<S> {
    pub fn new(store: S) -> Self {
        Self::with_settings(store, ResolveSettings::default())
    }

    pub fn with_settings(store: S, settings: ResolveSettings) -> Self {
        Self { store, settings }
    }

    // Read-only bulk lookup against the cache, never the relational store.
    // Output order is input-gem order, then stored-version order. A gem with
    // no version-list entry contributes nothing; a store failure fails the
    // whole call.
    pub fn resolve<T: AsRef<str>>(
        &self,
        gem_names: &[T],
    ) -> Result<Vec<ResolvedVersion>, DependencyError> {
        let limit = self.settings.max_gems_per_query;
        if gem_names.len() > limit {
            return Err(DependencyError::QueryTooLarge {
                count: gem_names.len(),
                limit,
            });
        }

        let mut resolved = Vec::new();
        for gem_name in gem_names {
            let versions = self.whole_list(&versions_key(gem_name.as_ref()))?;
            for full_name in versions {
                let info = self
                    .store
                    .hash_get_all(&version_info_key(&full_name))
                    .map_err(cache_unavailable)?;
                let dependencies = self
                    .whole_list(&runtime_dependencies_key(&full_name))?
                    .iter()
                    .map(|entry| split_dependency(entry))
                    .collect();

                resolved.push(ResolvedVersion {
                    name: field(&info, "name"),
                    number: field(&info, "number"),
                    platform: field(&info, "platform"),
                    dependencies,
                });
            }
        }

        Ok(resolved)
    }

    fn whole_list(&self, key: &str) -> Result<Vec<String>, DependencyError> {
        self.store.list_range(key, 0, -1).map_err(cache_unavailable)
    }
}

// Missing info fields degrade to empty strings rather than failing the read.
fn field(info: &BTreeMap<String, String>, name: &str) -> String {
    info.get(name).cloned().unwrap_or_default()
}

// Wire form is "<name> <requirements>"; split on the first space only, since
// requirement strings contain spaces themselves.
fn split_dependency(entry: &str) -> ResolvedDependency {
    match entry.split_once(' ') {
        Some((name, requirements)) => ResolvedDependency {
            name: name.to_string(),
            requirements: requirements.to_string(),
        },
        None => ResolvedDependency {
            name: entry.to_string(),
            requirements: String::new(),
        },
    }
}

fn cache_unavailable(err: StoreError) -> DependencyError {
    DependencyError::CacheUnavailable {
        reason: err.to_string(),
    }
}
