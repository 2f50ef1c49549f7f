//! Human-readable block output.

use crate::model::Dependency;

/// Header line, four labeled lines per record separated by blank
/// lines, then a total count.
pub fn render(dependencies: &[Dependency]) -> String {
    let mut out = String::from("Dependency Details:\n");
    for dependency in dependencies {
        out.push_str(&format!("Name: {}\n", dependency.name));
        out.push_str(&format!("Version: {}\n", dependency.version));
        out.push_str(&format!("Ecosystem: {}\n", dependency.ecosystem));
        out.push_str(&format!("License: {}\n", dependency.license));
        out.push('\n');
    }
    out.push_str(&format!("Total Dependencies: {}\n", dependencies.len()));
    out
}
