use crate::ports::outbound::BomSource;
use crate::shared::error::StockCheckError;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_FILE_SIZE};
use crate::shared::Result;
use crate::stock_check::domain::ReferenceEntry;
use std::fs;
use std::path::Path;

const REFERENCE_HEADERS: [&str; 4] = ["reference", "references", "ref", "designator"];
const MPN_HEADERS: [&str; 3] = ["mpn", "manufacturer part number", "manufacturer_part_number"];

/// CsvBomReader adapter for reading a CSV bill of materials
///
/// Expects a header row with a reference column and an MPN column. Grouped
/// exports list several references in one cell ("R1, R2 R3"); every
/// reference becomes its own entry with the row's MPN.
pub struct CsvBomReader;

impl CsvBomReader {
    pub fn new() -> Self {
        Self
    }

    /// Reads the file after rejecting symlinks, non-regular files and
    /// oversized input.
    fn safe_read_file(&self, path: &Path) -> Result<String> {
        let file_size = validate_regular_file(path, "BOM file")?;
        validate_file_size(file_size, path, MAX_FILE_SIZE)?;
        fs::read_to_string(path).map_err(|e| anyhow::anyhow!("Failed to read BOM file: {}", e))
    }

    fn parse(&self, content: &str) -> Result<Vec<ReferenceEntry>> {
        let content = content.trim_start_matches('\u{feff}');
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(content.as_bytes());

        let headers = reader.headers()?.clone();
        let reference_column = find_column(&headers, &REFERENCE_HEADERS)
            .ok_or_else(|| anyhow::anyhow!("No 'Reference' column in header row"))?;
        let mpn_column = find_column(&headers, &MPN_HEADERS)
            .ok_or_else(|| anyhow::anyhow!("No 'MPN' column in header row"))?;

        let mut entries = Vec::new();
        for (index, record) in reader.records().enumerate() {
            let record = record?;
            let cell = record.get(reference_column).unwrap_or("");
            let mpn = record.get(mpn_column);

            for reference in split_references(cell) {
                let entry = ReferenceEntry::from_raw(reference, mpn)
                    .map_err(|e| anyhow::anyhow!("Row {}: {}", index + 2, e))?;
                entries.push(entry);
            }
        }

        tracing::debug!(references = entries.len(), "read BOM");
        Ok(entries)
    }
}

impl Default for CsvBomReader {
    fn default() -> Self {
        Self::new()
    }
}

impl BomSource for CsvBomReader {
    fn read_references(&self, source: &Path) -> Result<Vec<ReferenceEntry>> {
        let bom_error = |e: anyhow::Error| StockCheckError::BomReadError {
            path: source.to_path_buf(),
            details: e.to_string(),
        };

        let content = self.safe_read_file(source).map_err(bom_error)?;
        let entries = self.parse(&content).map_err(bom_error)?;
        Ok(entries)
    }
}

fn find_column(headers: &csv::StringRecord, names: &[&str]) -> Option<usize> {
    headers
        .iter()
        .position(|header| names.iter().any(|name| header.eq_ignore_ascii_case(name)))
}

fn split_references(cell: &str) -> impl Iterator<Item = &str> {
    cell.split(|c: char| c == ',' || c == ';' || c.is_whitespace())
        .filter(|reference| !reference.is_empty())
}
