use crate::error::IndexError;
use crate::results::PageRecord;
use std::fs;
use std::path::Path;

/// Renders the records as a script assigning them to `global_var`
///
/// The JSON is indented with two spaces and keeps non-ASCII characters literal.
pub fn render(records: &[PageRecord], global_var: &str) -> Result<String, IndexError> {
    let json = serde_json::to_string_pretty(records).map_err(IndexError::Serialize)?;
    Ok(format!("{global_var} = {json};\n"))
}

/// Writes the rendered index to `path`, replacing any previous artifact
pub fn write(path: &Path, records: &[PageRecord], global_var: &str) -> Result<(), IndexError> {
    let script = render(records, global_var)?;
    fs::write(path, script).map_err(|source| IndexError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    ::log::info!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}
