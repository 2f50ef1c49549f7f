//! spdx-deptool: report dependency metadata from SPDX documents
//!
//! Walks the `packages` list of one or more SPDX JSON files, normalizes
//! each entry into a [`model::Dependency`], and renders the combined
//! list as plain text, a Markdown table, or CSV.

pub mod cli;
pub mod error;
pub mod extract;
pub mod model;
pub mod render;
pub mod sort;
