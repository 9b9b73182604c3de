mod orchestrator;


pub use orchestrator::{ScoreSheet, StockCheckOrchestrator, VendorSlot};

use crate::application::dto::{StockCheckRequest, StockCheckResponse};
use crate::application::factories::VendorClientFactory;
use crate::ports::outbound::{BomSource, CredentialProvider, NotificationSink, ProgressReporter};
use crate::shared::error::StockCheckError;
use crate::shared::Result;
use crate::stock_check::domain::{BillOfMaterials, ReferenceEntry, VendorKind, MAX_VENDORS};
use crate::stock_check::services::{BomAggregator, ReferenceFilter, ReportBuilder};
use std::time::Duration;

/// Estimated runs at least this long trigger a "may take a while" warning
const LONG_RUN_WARNING: Duration = Duration::from_secs(60);

/// Title used for the final notification of a run
const NOTIFICATION_TITLE: &str = "bom-stockcheck";

/// CheckStockUseCase - Core use case for the BOM stock check
///
/// Reads the BOM, aggregates it, resolves vendor credentials, queries every
/// vendor and turns the answers into an ordered report.
///
/// # Type Parameters
/// * `BS` - BomSource implementation
/// * `CP` - CredentialProvider implementation
/// * `NS` - NotificationSink implementation
/// * `PR` - ProgressReporter implementation
/// * `VF` - VendorClientFactory implementation
pub struct CheckStockUseCase<BS, CP, NS, PR, VF> {
    bom_source: BS,
    credentials: CP,
    notifier: NS,
    progress_reporter: PR,
    vendor_factory: VF,
}

impl<BS, CP, NS, PR, VF> CheckStockUseCase<BS, CP, NS, PR, VF>
where
    BS: BomSource,
    CP: CredentialProvider,
    NS: NotificationSink,
    PR: ProgressReporter,
    VF: VendorClientFactory,
{
    pub fn new(
        bom_source: BS,
        credentials: CP,
        notifier: NS,
        progress_reporter: PR,
        vendor_factory: VF,
    ) -> Self {
        Self {
            bom_source,
            credentials,
            notifier,
            progress_reporter,
            vendor_factory,
        }
    }

    /// Executes the stock check
    ///
    /// # Errors
    /// Missing MPNs and missing credentials are reported through the
    /// notification sink and then returned; no vendor is queried in that case.
    pub async fn execute(&self, request: StockCheckRequest) -> Result<StockCheckResponse> {
        // Step 1: Read references
        let references = self.read_references(&request)?;

        // Step 2: Aggregate into a BOM
        let (bom, unmatched_patterns) = self.aggregate(&references, &request)?;

        if request.dry_run {
            return Ok(self.build_dry_run_response(bom, unmatched_patterns));
        }

        // Step 3: Resolve credentials and build vendor clients
        let slots = self.build_vendor_slots(&request.vendors)?;

        // Step 4: Query vendors
        self.warn_if_long_running(&bom, &slots);
        self.progress_reporter.report(&format!(
            "🔍 Checking stock for {} part(s) at {} vendor(s)...",
            bom.len(),
            slots.len()
        ));
        let sheet = StockCheckOrchestrator::new(&self.progress_reporter)
            .run(&bom, &slots)
            .await?;

        // Step 5: Build report and notify
        let labels: Vec<String> = slots
            .iter()
            .map(|slot| slot.checker.vendor_name().to_string())
            .collect();
        let mut report = ReportBuilder::build(sheet.scores(), &labels);
        ReportBuilder::annotate_required(&mut report, &bom);

        let findings = sheet.into_findings();
        let issue_summary = ReportBuilder::describe_issues(&report, &findings);
        match &issue_summary {
            Some(summary) => self.notifier.warn("BOM Issues found", summary),
            None => self.notifier.info(NOTIFICATION_TITLE, "No BOM issues found"),
        }

        self.progress_reporter.report_completion(&format!(
            "✅ Stock check complete: {} of {} part(s) available from at least one vendor",
            report.rows().len() - report.issues().len(),
            report.rows().len()
        ));

        Ok(StockCheckResponse {
            bom,
            report: Some(report),
            findings,
            issue_summary,
            unmatched_patterns,
        })
    }

    fn read_references(&self, request: &StockCheckRequest) -> Result<Vec<ReferenceEntry>> {
        self.progress_reporter.report(&format!(
            "📖 Loading BOM from: {}",
            request.bom_path.display()
        ));

        let references = self.bom_source.read_references(&request.bom_path)?;

        self.progress_reporter
            .report(&format!("✅ Detected {} reference(s)", references.len()));
        Ok(references)
    }

    fn aggregate(
        &self,
        references: &[ReferenceEntry],
        request: &StockCheckRequest,
    ) -> Result<(BillOfMaterials, Vec<String>)> {
        let filter = if request.exclude_patterns.is_empty() {
            ReferenceFilter::with_defaults()
        } else {
            ReferenceFilter::new(request.exclude_patterns.clone())?
        };
        let aggregator = BomAggregator::new(filter);

        let bom = aggregator
            .aggregate(references)
            .map_err(|e| self.notify_fatal(e))?;

        if bom.excluded_references() > 0 {
            self.progress_reporter.report(&format!(
                "🚫 Excluded {} reference(s) based on filters",
                bom.excluded_references()
            ));
        }

        let unmatched_patterns = aggregator.unmatched_patterns();
        for pattern in &unmatched_patterns {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Exclude pattern '{}' did not match any reference.",
                pattern
            ));
        }

        self.progress_reporter.report(&format!(
            "✅ {} unique part(s) across {} reference(s)",
            bom.len(),
            bom.total_references()
        ));

        Ok((bom, unmatched_patterns))
    }

    fn build_dry_run_response(
        &self,
        bom: BillOfMaterials,
        unmatched_patterns: Vec<String>,
    ) -> StockCheckResponse {
        self.progress_reporter
            .report_completion("Success: BOM validated. No vendor was queried.");
        StockCheckResponse {
            bom,
            report: None,
            findings: Vec::new(),
            issue_summary: None,
            unmatched_patterns,
        }
    }

    /// Resolves every credential before the first lookup, so a missing key
    /// never leaves a half-finished run behind.
    fn build_vendor_slots(&self, vendors: &[VendorKind]) -> Result<Vec<VendorSlot>> {
        if vendors.is_empty() {
            return Err(StockCheckError::Validation {
                message: "At least one vendor must be selected".to_string(),
            }
            .into());
        }
        if vendors.len() > usize::from(MAX_VENDORS) {
            return Err(StockCheckError::Validation {
                message: format!("At most {} vendors can be checked", MAX_VENDORS),
            }
            .into());
        }

        let mut keys = Vec::with_capacity(vendors.len());
        for vendor in vendors {
            let key = self
                .credentials
                .credential(*vendor)
                .map_err(|e| self.notify_fatal(e))?;
            keys.push((*vendor, key));
        }

        keys.into_iter()
            .zip(0u8..)
            .map(|((vendor, key), bit)| {
                let checker = self.vendor_factory.create(vendor, key)?;
                Ok(VendorSlot::new(checker, bit))
            })
            .collect()
    }

    fn warn_if_long_running(&self, bom: &BillOfMaterials, slots: &[VendorSlot]) {
        let Some(slowest) = slots
            .iter()
            .max_by_key(|slot| slot.checker.rate_limit().minimum_duration(bom.len()))
        else {
            return;
        };

        let policy = slowest.checker.rate_limit();
        let estimate = policy.minimum_duration(bom.len());
        if estimate < LONG_RUN_WARNING {
            return;
        }

        let minutes = estimate.as_secs().div_ceil(60);
        self.notifier.warn(
            "This may take a while...",
            &format!(
                "{} limits requests to {}. Checking {} part(s) will take at least {} minute(s).",
                slowest.checker.vendor_name(),
                policy,
                bom.len(),
                minutes
            ),
        );
    }

    /// Sends a blocking notification for errors the user has to act on,
    /// then hands the error back for propagation.
    fn notify_fatal(&self, error: StockCheckError) -> anyhow::Error {
        if error.is_notified() {
            self.notifier.error(error.title(), &error.to_string());
        }
        error.into()
    }
}
