use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyScope {
    Development,
    Runtime,
}

impl DependencyScope {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Runtime => "runtime",
        }
    }

    pub fn is_runtime(self) -> bool {
        matches!(self, Self::Runtime)
    }

    pub fn is_development(self) -> bool {
        matches!(self, Self::Development)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredGem {
    pub name: String,
}

// Validated dependency edge. Constructed only by validate_dependency and
// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyRecord {
    gem_name: String,
    version_full_name: String,
    requirements: String,
    scope: DependencyScope,
}

impl DependencyRecord {
    pub(crate) fn new(
        gem_name: String,
        version_full_name: String,
        requirements: String,
        scope: DependencyScope,
    ) -> Self {
        Self {
            gem_name,
            version_full_name,
            requirements,
            scope,
        }
    }

    pub fn gem_name(&self) -> &str {
        &self.gem_name
    }

    pub fn version_full_name(&self) -> &str {
        &self.version_full_name
    }

    pub fn requirements(&self) -> &str {
        &self.requirements
    }

    pub fn scope(&self) -> DependencyScope {
        self.scope
    }

    pub fn payload(&self) -> DependencyPayload {
        DependencyPayload {
            name: self.gem_name.clone(),
            requirements: self.requirements.clone(),
        }
    }
}

impl fmt::Display for DependencyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.gem_name, self.requirements)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyPayload {
    pub name: String,
    pub requirements: String,
}
