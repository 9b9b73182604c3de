/// Use cases module containing application business logic orchestration
mod check_stock;

pub use check_stock::{CheckStockUseCase, ScoreSheet, StockCheckOrchestrator, VendorSlot};
