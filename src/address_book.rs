// File: ./src/address_book.rs
//! Loads the building reference list (`buildingName, code, address`).
use crate::model::AddressTable;
use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

/// Reads a CSV with one header row and columns `name, code, address`.
/// Rows without a code are skipped.
pub fn load_from_reader<R: Read>(reader: R) -> Result<AddressTable> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut table = AddressTable::new();
    for (line, result) in csv_reader.records().enumerate() {
        // +2: one for the header, one for 1-based numbering
        let record = result.with_context(|| format!("Bad building record at line {}", line + 2))?;
        let name = record.get(0).unwrap_or_default();
        let code = record.get(1).unwrap_or_default();
        let address = record.get(2).unwrap_or_default();
        if code.is_empty() {
            log::debug!("Skipping building '{}' without a code", name);
            continue;
        }
        table.insert(code, name, address);
    }
    Ok(table)
}

pub fn load_from_path(path: &Path) -> Result<AddressTable> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open address table '{}'", path.display()))?;
    let table = load_from_reader(file)
        .with_context(|| format!("Failed to parse address table '{}'", path.display()))?;
    log::info!("Loaded {} building(s) from {}", table.len(), path.display());
    Ok(table)
}
