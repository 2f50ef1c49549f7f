//! Markdown table output.

use crate::model::Dependency;

/// One pipe-delimited table, one row per record in order.
///
/// Pipe characters inside field values are NOT escaped; a `|` in a
/// license string will break the table layout. This mirrors the
/// original tool's behavior and is deliberately left unfixed.
pub fn render(dependencies: &[Dependency]) -> String {
    let mut out = String::from("| Name | Version | Ecosystem | License |\n");
    out.push_str("|------|---------|-----------|---------|\n");
    for dependency in dependencies {
        out.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            dependency.name, dependency.version, dependency.ecosystem, dependency.license
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::render;
    use crate::model::Dependency;

    fn dep(name: &str, version: &str, ecosystem: &str, license: &str) -> Dependency {
        Dependency {
            name: name.to_string(),
            version: version.to_string(),
            ecosystem: ecosystem.to_string(),
            license: license.to_string(),
        }
    }

    #[test]
    fn renders_header_and_rows_in_order() {
        let deps = vec![
            dep("lodash", "4.17.21", "npm", "MIT"),
            dep("openssl", "3.0.2", "", "NOASSERTION"),
        ];

        insta::assert_snapshot!(render(&deps), @r"
        | Name | Version | Ecosystem | License |
        |------|---------|-----------|---------|
        | lodash | 4.17.21 | npm | MIT |
        | openssl | 3.0.2 |  | NOASSERTION |
        ");
    }

    #[test]
    fn empty_list_is_header_only() {
        assert_eq!(
            render(&[]),
            "| Name | Version | Ecosystem | License |\n|------|---------|-----------|---------|\n"
        );
    }

    #[test]
    fn pipes_in_values_are_not_escaped() {
        let out = render(&[dep("a", "1", "npm", "MIT | Apache-2.0")]);
        assert!(out.contains("| a | 1 | npm | MIT | Apache-2.0 |"));
    }
}
