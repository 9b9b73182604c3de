use super::ReferenceFilter;
use crate::shared::error::StockCheckError;
use crate::stock_check::domain::{BillOfMaterials, PartIdentifier, ReferenceEntry};

/// BomAggregator - Reduces board references to unique MPNs with quantities
///
/// Virtual symbols (`#PWR01`) and references matching an exclusion pattern
/// are skipped and counted as excluded before the MPN is looked at, so a
/// test point without an MPN never fails the run. Any other reference without
/// a valid MPN aborts aggregation immediately.
#[derive(Debug)]
pub struct BomAggregator {
    filter: ReferenceFilter,
}

impl BomAggregator {
    pub fn new(filter: ReferenceFilter) -> Self {
        Self { filter }
    }

    /// Aggregates references into a bill of materials
    ///
    /// # Arguments
    /// * `references` - Every reference read from the BOM, in any order
    ///
    /// # Errors
    /// Returns an error if a non-excluded reference:
    /// - Has no MPN (`MissingIdentifier`)
    /// - Has an MPN that is not a valid part identifier (`Validation`)
    pub fn aggregate(
        &self,
        references: &[ReferenceEntry],
    ) -> std::result::Result<BillOfMaterials, StockCheckError> {
        let mut bom = BillOfMaterials::new();

        for entry in references {
            let reference = entry.reference();
            if reference.is_virtual() || self.filter.is_excluded(reference.as_str()) {
                bom.record_excluded();
                continue;
            }

            let Some(raw_mpn) = entry.raw_mpn() else {
                return Err(StockCheckError::MissingIdentifier {
                    reference: reference.to_string(),
                });
            };
            let mpn = PartIdentifier::new(raw_mpn).map_err(|e| StockCheckError::Validation {
                message: format!("{}: {}", reference, e),
            })?;

            bom.add_reference(mpn);
        }

        Ok(bom)
    }

    /// Exclusion patterns that matched no reference during aggregation
    pub fn unmatched_patterns(&self) -> Vec<String> {
        self.filter.unmatched_patterns()
    }
}
