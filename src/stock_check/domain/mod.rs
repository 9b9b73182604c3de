pub mod bill_of_materials;
pub mod finding;
pub mod part;
pub mod part_score;
pub mod stock_level;
pub mod stock_report;
pub mod vendor;

pub use bill_of_materials::BillOfMaterials;
pub use finding::VendorFinding;
pub use part::{PartIdentifier, PartReference, ReferenceEntry};
pub use part_score::{PartScore, MAX_VENDORS};
pub use stock_level::{StockLevel, UnknownReason, VendorAvailability};
pub use stock_report::{ReportRow, StockReport};
pub use vendor::VendorKind;
