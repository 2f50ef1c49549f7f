//! Binary entry point; all logic lives in the library crate.

use anyhow::Result;

fn main() -> Result<()> {
    spdx_deptool::cli::run()
}
