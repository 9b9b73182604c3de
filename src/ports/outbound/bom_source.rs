use crate::shared::Result;
use crate::stock_check::domain::ReferenceEntry;
use std::path::Path;

/// BomSource port for reading board references
///
/// Abstracts wherever the `(reference, MPN)` pairs come from: a BOM export,
/// a board file, or an EDA tool's scripting API.
pub trait BomSource {
    /// Reads every footprint reference together with its optional MPN field
    ///
    /// # Arguments
    /// * `source` - Path to the BOM export or board file
    ///
    /// # Returns
    /// One entry per reference, in source order. Power symbols and other
    /// virtual references are returned as-is; exclusion happens later.
    ///
    /// # Errors
    /// Returns an error if the source cannot be read or has an unusable layout.
    /// A reference without an MPN is not an error at this stage.
    fn read_references(&self, source: &Path) -> Result<Vec<ReferenceEntry>>;
}
