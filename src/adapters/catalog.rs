use crate::domain::model::PartCatalog;
use crate::utils::error::Result;

const ID_COLUMN: usize = 2;
const NAME_COLUMN: usize = 3;

/// Parses the tab separated parts reference (Latin-1, header row first).
/// Column 3 holds the part number and column 4 its name.
pub fn parse_parts_catalog(data: &[u8]) -> Result<PartCatalog> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .from_reader(data);

    let mut catalog = Vec::new();
    for record in reader.byte_records() {
        let record = record?;
        let (Some(id), Some(name)) = (record.get(ID_COLUMN), record.get(NAME_COLUMN)) else {
            continue;
        };
        let id = latin1(id);
        if id.trim().is_empty() {
            continue;
        }
        catalog.push((id.trim().to_string(), latin1(name).trim().to_string()));
    }

    Ok(catalog.into_iter().collect())
}

fn latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}
