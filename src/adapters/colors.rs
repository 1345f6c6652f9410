use serde::{Deserialize, Serialize};

use crate::domain::ports::Storage;
use crate::utils::error::{AuditError, Result};

/// One row of the colour reference CSV.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorEntry {
    #[serde(rename = "BrickLink ID")]
    pub bricklink_id: u32,
    #[serde(rename = "BrickLink Color Name")]
    pub bricklink_name: String,
    #[serde(rename = "LEGO Name")]
    pub lego_name: String,
    #[serde(rename = "LEGO ID")]
    pub lego_id: u32,
    #[serde(rename = "Category")]
    pub category: String,
}

const ID_COLUMN: &str = "BrickLink ID";

/// BrickLink ids already present in the colour CSV. Rows whose id is not a
/// number are kept in the file but cannot collide with a new entry.
pub fn existing_ids(data: &[u8]) -> Result<Vec<u32>> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(data);
    let Some(column) = reader.headers()?.iter().position(|h| h.trim() == ID_COLUMN) else {
        return Ok(Vec::new());
    };

    let mut ids = Vec::new();
    for record in reader.records() {
        if let Some(id) = record?.get(column).and_then(|id| id.trim().parse().ok()) {
            ids.push(id);
        }
    }
    Ok(ids)
}

/// Serializes one colour as a CSV row, with the header row when `with_header`.
pub fn color_row(entry: &ColorEntry, with_header: bool) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(with_header)
        .from_writer(Vec::new());
    writer.serialize(entry)?;
    writer
        .into_inner()
        .map_err(|e| AuditError::IoError(e.into_error()))
}

/// Appends `entry` to the colour CSV at `path`, creating it when absent.
/// Existing rows and columns are left untouched. Returns `true` when the
/// file was newly created.
pub async fn add_color<S: Storage>(storage: &S, path: &str, entry: ColorEntry) -> Result<bool> {
    let created = !storage.exists(path).await;
    let mut content = if created {
        Vec::new()
    } else {
        storage.read_file(path).await?
    };

    if !created && existing_ids(&content)?.contains(&entry.bricklink_id) {
        return Err(AuditError::DuplicateColor {
            id: entry.bricklink_id,
        });
    }

    tracing::info!("Adding color {} ({})", entry.bricklink_id, entry.bricklink_name);
    if !content.is_empty() && !content.ends_with(b"\n") {
        content.push(b'\n');
    }
    let row = color_row(&entry, content.is_empty())?;
    content.extend(row);
    storage.write_file(path, &content).await?;
    Ok(created)
}
