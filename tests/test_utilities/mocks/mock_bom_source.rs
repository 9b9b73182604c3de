use bom_stockcheck::prelude::*;
use bom_stockcheck::stock_check::domain::ReferenceEntry;
use std::path::Path;

/// Mock BomSource returning a fixed list of (reference, MPN) rows
pub struct MockBomSource {
    rows: Vec<(String, Option<String>)>,
}

impl MockBomSource {
    pub fn new(rows: &[(&str, Option<&str>)]) -> Self {
        Self {
            rows: rows
                .iter()
                .map(|(reference, mpn)| (reference.to_string(), mpn.map(str::to_string)))
                .collect(),
        }
    }
}

impl BomSource for MockBomSource {
    fn read_references(&self, _source: &Path) -> Result<Vec<ReferenceEntry>> {
        self.rows
            .iter()
            .map(|(reference, mpn)| ReferenceEntry::from_raw(reference, mpn.as_deref()))
            .collect()
    }
}
