use crate::ports::outbound::{ProgressReporter, StockChecker};
use crate::shared::error::StockCheckError;
use crate::shared::Result;
use crate::stock_check::domain::{
    BillOfMaterials, PartIdentifier, PartScore, VendorAvailability, VendorFinding, MAX_VENDORS,
};
use dashmap::DashMap;
use futures::future::join_all;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// A vendor client together with the score bit it owns
#[derive(Clone)]
pub struct VendorSlot {
    pub checker: Arc<dyn StockChecker>,
    pub bit: u8,
}

impl VendorSlot {
    pub fn new(checker: Arc<dyn StockChecker>, bit: u8) -> Self {
        Self { checker, bit }
    }
}

/// Scores and vendor answers collected by one orchestrator run
#[derive(Debug, Clone, Default)]
pub struct ScoreSheet {
    scores: HashMap<PartIdentifier, PartScore>,
    findings: Vec<VendorFinding>,
}

impl ScoreSheet {
    pub fn scores(&self) -> &HashMap<PartIdentifier, PartScore> {
        &self.scores
    }

    /// Findings ordered by MPN, then vendor bit
    pub fn findings(&self) -> &[VendorFinding] {
        &self.findings
    }

    pub fn into_findings(self) -> Vec<VendorFinding> {
        self.findings
    }
}

/// StockCheckOrchestrator - Runs every vendor over the BOM
///
/// One worker per vendor, all driven concurrently on the current task. A
/// worker walks the parts in MPN order and awaits each lookup before the
/// next one, so the vendor's own rate limiter is the only pacing. Workers
/// only ever set their own bit in a part's score.
pub struct StockCheckOrchestrator<'a, PR: ProgressReporter> {
    progress_reporter: &'a PR,
}

impl<'a, PR: ProgressReporter> StockCheckOrchestrator<'a, PR> {
    pub fn new(progress_reporter: &'a PR) -> Self {
        Self { progress_reporter }
    }

    /// Checks every BOM part at every vendor slot.
    ///
    /// # Errors
    /// Returns a validation error before any lookup when a slot bit is out
    /// of range or used twice.
    pub async fn run(&self, bom: &BillOfMaterials, slots: &[VendorSlot]) -> Result<ScoreSheet> {
        Self::validate_slots(slots)?;

        let parts = bom.sorted_parts();
        let scores: DashMap<PartIdentifier, PartScore> = parts
            .iter()
            .map(|(mpn, _)| (mpn.clone(), PartScore::EMPTY))
            .collect();

        let progress = Progress {
            completed: AtomicUsize::new(0),
            total: parts.len() * slots.len(),
        };

        let workers = slots
            .iter()
            .map(|slot| self.run_vendor(slot, &parts, &scores, &progress));
        let mut findings: Vec<VendorFinding> =
            join_all(workers).await.into_iter().flatten().collect();
        findings.sort_by(|a, b| a.mpn.cmp(&b.mpn).then(a.vendor_bit.cmp(&b.vendor_bit)));

        Ok(ScoreSheet {
            scores: scores.into_iter().collect(),
            findings,
        })
    }

    async fn run_vendor(
        &self,
        slot: &VendorSlot,
        parts: &[(PartIdentifier, u32)],
        scores: &DashMap<PartIdentifier, PartScore>,
        progress: &Progress,
    ) -> Vec<VendorFinding> {
        let vendor = slot.checker.vendor_name();
        tracing::info!(
            vendor,
            parts = parts.len(),
            policy = %slot.checker.rate_limit(),
            "vendor worker started"
        );

        let mut findings = Vec::with_capacity(parts.len());
        for (mpn, required) in parts {
            let level = slot.checker.check_stock(mpn).await;

            if VendorAvailability::assess(&level, *required) == VendorAvailability::Sufficient {
                if let Some(mut score) = scores.get_mut(mpn) {
                    score.set(slot.bit);
                }
            }

            let completed = progress.completed.fetch_add(1, Ordering::Relaxed) + 1;
            self.progress_reporter
                .report_progress(completed, progress.total, Some(vendor));

            findings.push(VendorFinding {
                mpn: mpn.clone(),
                vendor_bit: slot.bit,
                required: *required,
                level,
            });
        }

        tracing::info!(vendor, "vendor worker finished");
        findings
    }

    fn validate_slots(slots: &[VendorSlot]) -> Result<()> {
        let mut seen = HashSet::new();
        for slot in slots {
            if slot.bit >= MAX_VENDORS {
                return Err(StockCheckError::Validation {
                    message: format!(
                        "Vendor slot {} is out of range (maximum: {})",
                        slot.bit,
                        MAX_VENDORS - 1
                    ),
                }
                .into());
            }
            if !seen.insert(slot.bit) {
                return Err(StockCheckError::Validation {
                    message: format!("Vendor slot {} is assigned twice", slot.bit),
                }
                .into());
            }
        }
        Ok(())
    }
}

struct Progress {
    completed: AtomicUsize,
    total: usize,
}
