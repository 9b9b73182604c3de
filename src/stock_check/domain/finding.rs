use super::{PartIdentifier, StockLevel, VendorAvailability};

/// What one vendor reported for one part during a run
#[derive(Debug, Clone, PartialEq)]
pub struct VendorFinding {
    pub mpn: PartIdentifier,
    pub vendor_bit: u8,
    pub required: u32,
    pub level: StockLevel,
}

impl VendorFinding {
    pub fn availability(&self) -> VendorAvailability {
        VendorAvailability::assess(&self.level, self.required)
    }
}
