//! CSV output.

use anyhow::Result;

use crate::model::Dependency;

/// Header row plus one row per record, quoted per RFC 4180 rules,
/// followed by a blank line after the block.
pub fn render(dependencies: &[Dependency]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["Name", "Version", "Ecosystem", "License"])?;
    for dependency in dependencies {
        writer.write_record([
            &dependency.name,
            &dependency.version,
            &dependency.ecosystem,
            &dependency.license,
        ])?;
    }
    writer.flush()?;
    let bytes = writer.into_inner().map_err(|e| anyhow::anyhow!("finalizing csv buffer: {e}"))?;
    let mut out = String::from_utf8(bytes)?;
    out.push('\n');
    Ok(out)
}
