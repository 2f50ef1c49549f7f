//! The normalized dependency record and package-name splitting.

/// SPDX convention for "no license claim was made".
pub const NOASSERTION: &str = "NOASSERTION";

/// One dependency extracted from an SPDX package entry.
///
/// Created once by the extractor and never mutated afterwards. `name`
/// never contains the ecosystem prefix; joining `ecosystem` and `name`
/// with `:` recovers the original identifier up to whitespace trimming
/// of the name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    pub name: String,
    /// Copied verbatim from `versionInfo`.
    pub version: String,
    /// Empty string when the package name carried no ecosystem prefix.
    pub ecosystem: String,
    /// [`NOASSERTION`] when `licenseConcluded` was absent.
    pub license: String,
}

/// Split a raw SPDX package name into `(ecosystem, name)`.
///
/// The name may be a compound like `npm:lodash`, split on the first
/// `:`. A trailing colon with nothing after it is ignored (`"foo:"`
/// yields no ecosystem), and anything after the first colon, further
/// colons included, stays in the name verbatim. Whitespace is trimmed
/// from the final name only.
pub fn split_package_name(raw: &str) -> (String, String) {
    match raw.split_once(':') {
        Some((left, "")) if !left.is_empty() => (String::new(), left.trim().to_string()),
        Some((left, right)) => (left.to_string(), right.trim().to_string()),
        None => (String::new(), raw.trim().to_string()),
    }
}
