//! bom-stockcheck - Multi-distributor stock verification for PCB bills of materials
//!
//! This library aggregates a BOM export into part quantities, asks every
//! configured distributor whether it can supply each part, and renders the
//! answers as a report. It follows hexagonal architecture and Domain-Driven
//! Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`stock_check`): BOM aggregation, scoring, rate-limit policies
//! - **Application Layer** (`application`): Use cases, orchestration and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use bom_stockcheck::prelude::*;
//! use std::path::PathBuf;
//!
//! # async fn run() -> Result<()> {
//! let credentials = ResolvedCredentials::new()
//!     .with_key(VendorKind::Mouser, std::env::var("MOUSER_API_KEY").ok())
//!     .with_key(VendorKind::Farnell, std::env::var("FARNELL_API_KEY").ok());
//!
//! let use_case = CheckStockUseCase::new(
//!     CsvBomReader::new(),
//!     credentials,
//!     ConsoleNotifier::new(),
//!     StderrProgressReporter::new(),
//!     HttpVendorFactory::new(),
//! );
//!
//! let request = StockCheckRequest::new(
//!     PathBuf::from("board.csv"),
//!     vec![],
//!     VendorKind::ALL.to_vec(),
//!     false,
//! );
//! let response = use_case.execute(request).await?;
//!
//! if let Some(report) = &response.report {
//!     println!("{}", MarkdownFormatter::new().format(report)?);
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod shared;
pub mod stock_check;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{ConsoleNotifier, StderrProgressReporter};
    pub use crate::adapters::outbound::credentials::ResolvedCredentials;
    pub use crate::adapters::outbound::filesystem::{
        CsvBomReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::adapters::outbound::network::{FarnellClient, MouserClient};
    pub use crate::application::dto::{OutputFormat, StockCheckRequest, StockCheckResponse};
    pub use crate::application::factories::{HttpVendorFactory, VendorClientFactory};
    pub use crate::application::use_cases::{CheckStockUseCase, StockCheckOrchestrator, VendorSlot};
    pub use crate::ports::outbound::{
        BomSource, CredentialProvider, NotificationSink, OutputPresenter, ProgressReporter,
        ReportFormatter, StockChecker,
    };
    pub use crate::stock_check::domain::{
        BillOfMaterials, PartIdentifier, PartScore, StockLevel, StockReport, VendorKind,
    };
    pub use crate::stock_check::policies::{RateLimitPolicy, RateLimiter};
    pub use crate::stock_check::services::{BomAggregator, ReferenceFilter, ReportBuilder};
    pub use crate::shared::Result;
}
