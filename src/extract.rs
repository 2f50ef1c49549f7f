//! SPDX document walking.
//!
//! Only the three fields the report needs are deserialized; everything
//! else in the document is ignored. No schema validation happens here.

use serde::Deserialize;

use crate::error::ExtractError;
use crate::model::{split_package_name, Dependency, NOASSERTION};

/// Raw shape of an SPDX package entry, before validation.
///
/// Required fields are `Option` so that absence can be reported as a
/// [`ExtractError::MissingRequiredField`] naming the entry, instead of
/// a generic deserialization error.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SpdxPackage {
    name: Option<String>,
    version_info: Option<String>,
    license_concluded: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SpdxDocument {
    packages: Option<Vec<SpdxPackage>>,
}

/// Extract one [`Dependency`] per package entry, preserving input order.
pub fn extract_dependencies(content: &str) -> Result<Vec<Dependency>, ExtractError> {
    let document: SpdxDocument = serde_json::from_str(content)?;
    let packages = document.packages.ok_or(ExtractError::MissingPackages)?;

    let mut dependencies = Vec::with_capacity(packages.len());
    for (index, package) in packages.into_iter().enumerate() {
        let raw_name = package.name.ok_or(ExtractError::MissingRequiredField {
            index,
            field: "name",
        })?;
        let version = package.version_info.ok_or(ExtractError::MissingRequiredField {
            index,
            field: "versionInfo",
        })?;

        let (ecosystem, name) = split_package_name(&raw_name);

        // Only true absence of licenseConcluded triggers the default;
        // an explicitly present empty string is kept.
        let license = package.license_concluded.unwrap_or_else(|| NOASSERTION.to_string());

        dependencies.push(Dependency { name, version, ecosystem, license });
    }

    Ok(dependencies)
}
