//! Stable sorting of the dependency list.

use clap::ValueEnum;

use crate::model::Dependency;

/// Field a `--sort-by` request selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortKey {
    Name,
    Version,
    Ecosystem,
    License,
}

fn field_of<'a>(dependency: &'a Dependency, key: SortKey) -> &'a str {
    match key {
        SortKey::Name => &dependency.name,
        SortKey::Version => &dependency.version,
        SortKey::Ecosystem => &dependency.ecosystem,
        SortKey::License => &dependency.license,
    }
}

/// Sort ascending by the selected field's string value.
///
/// `Vec::sort_by` is stable, so records with equal keys keep their
/// original relative order. `None` returns the input unchanged.
pub fn sort_dependencies(
    mut dependencies: Vec<Dependency>,
    key: Option<SortKey>,
) -> Vec<Dependency> {
    if let Some(key) = key {
        dependencies.sort_by(|a, b| field_of(a, key).cmp(field_of(b, key)));
    }
    dependencies
}
