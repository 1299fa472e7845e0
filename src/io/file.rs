use std::path::Path;

use tracing::info;

use crate::error::{Result, TrackerError};
use crate::model::{ImportSummary, ProjectManager, ProjectRecord};

/// File name offered for exports.
pub const DEFAULT_FILE_NAME: &str = "projects.json";

/// Serialize every project as a pretty-printed JSON array (2-space indent).
pub fn export_json(manager: &ProjectManager) -> Result<String> {
    Ok(serde_json::to_string_pretty(&manager.export_snapshot())?)
}

/// Parse the text of a `projects.json` file without touching any manager.
pub fn parse_records(json: &str) -> Result<Vec<ProjectRecord>> {
    Ok(serde_json::from_str(json)?)
}

/// Parse `json` and merge it into `manager`.
///
/// A syntax error fails before anything is applied.
pub fn import_json(manager: &mut ProjectManager, json: &str) -> Result<ImportSummary> {
    let records = parse_records(json)?;
    manager.import_snapshot(records)
}

/// Write all projects to `path`. Returns the number of projects written.
pub fn export_to_file(manager: &ProjectManager, path: &Path) -> Result<usize> {
    let json = export_json(manager)?;
    std::fs::write(path, json).map_err(|e| TrackerError::io(path, e))?;
    info!(path = %path.display(), count = manager.len(), "projects exported");
    Ok(manager.len())
}

/// Read `path` and merge its projects into `manager`.
pub fn import_from_file(manager: &mut ProjectManager, path: &Path) -> Result<ImportSummary> {
    let json = std::fs::read_to_string(path).map_err(|e| TrackerError::io(path, e))?;
    let summary = import_json(manager, &json)?;
    info!(
        path = %path.display(),
        created = summary.created,
        updated = summary.updated,
        "projects imported"
    );
    Ok(summary)
}
