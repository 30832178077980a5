use serde::Deserialize;

use crate::{DependencyError, DependencyRecord, DependencyScope, RegisteredGem};

// Untrusted dependency specification as handed over by a package-authoring
// tool. Requirements and kind may be missing when the input was built from
// loosely-structured data.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDependency {
    pub name: String,
    #[serde(default)]
    pub requirements: Option<Vec<String>>,
    #[serde(default)]
    pub kind: Option<String>,
}

pub fn validate_dependency<F>(
    raw: &RawDependency,
    version_full_name: &str,
    mut find_gem: F,
) -> Result<DependencyRecord, DependencyError>
where
    F: FnMut(&str) -> Option<RegisteredGem>,
{
    let (Some(requirements), Some(kind)) = (&raw.requirements, &raw.kind) else {
        return Err(DependencyError::InvalidSpecification);
    };

    let Some(gem) = find_gem(&raw.name) else {
        return Err(DependencyError::UnknownPackage {
            name: raw.name.clone(),
        });
    };

    let scope = match kind.as_str() {
        "development" => DependencyScope::Development,
        "runtime" => DependencyScope::Runtime,
        other => {
            return Err(DependencyError::InvalidScope {
                value: other.to_string(),
            });
        }
    };

    let requirements = requirements.join(", ");
    if requirements.is_empty() {
        return Err(DependencyError::MissingRequirements);
    }

    Ok(DependencyRecord::new(
        gem.name,
        version_full_name.to_string(),
        requirements,
        scope,
    ))
}
