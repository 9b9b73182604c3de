use super::PartIdentifier;
use crate::shared::Result;
use std::collections::HashMap;

/// BillOfMaterials maps each unique MPN to the number of references using it
///
/// Quantities are always >= 1. Iteration order carries no meaning; callers
/// that need a stable order use [`BillOfMaterials::sorted_parts`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BillOfMaterials {
    quantities: HashMap<PartIdentifier, u32>,
    excluded_references: usize,
}

impl BillOfMaterials {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a BOM from explicit quantities, rejecting zero quantities.
    pub fn from_quantities<I>(quantities: I) -> Result<Self>
    where
        I: IntoIterator<Item = (PartIdentifier, u32)>,
    {
        let mut bom = Self::new();
        for (mpn, quantity) in quantities {
            if quantity == 0 {
                anyhow::bail!("Required quantity for {} must be at least 1", mpn);
            }
            *bom.quantities.entry(mpn).or_insert(0) += quantity;
        }
        Ok(bom)
    }

    /// Counts one more reference using `mpn`.
    pub fn add_reference(&mut self, mpn: PartIdentifier) {
        *self.quantities.entry(mpn).or_insert(0) += 1;
    }

    pub(crate) fn record_excluded(&mut self) {
        self.excluded_references += 1;
    }

    pub fn quantity(&self, mpn: &PartIdentifier) -> Option<u32> {
        self.quantities.get(mpn).copied()
    }

    pub fn len(&self) -> usize {
        self.quantities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }

    /// Number of references skipped by exclusion patterns
    pub fn excluded_references(&self) -> usize {
        self.excluded_references
    }

    /// Total number of counted references across all parts
    pub fn total_references(&self) -> u64 {
        self.quantities.values().map(|q| u64::from(*q)).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PartIdentifier, u32)> {
        self.quantities.iter().map(|(mpn, q)| (mpn, *q))
    }

    /// Parts with their quantities, ordered by identifier
    pub fn sorted_parts(&self) -> Vec<(PartIdentifier, u32)> {
        let mut parts: Vec<(PartIdentifier, u32)> = self
            .quantities
            .iter()
            .map(|(mpn, q)| (mpn.clone(), *q))
            .collect();
        parts.sort_by(|a, b| a.0.cmp(&b.0));
        parts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mpn(s: &str) -> PartIdentifier {
        PartIdentifier::new(s).unwrap()
    }

    #[test]
    fn test_add_reference_counts() {
        let mut bom = BillOfMaterials::new();
        bom.add_reference(mpn("R-10K"));
        bom.add_reference(mpn("R-10K"));
        bom.add_reference(mpn("C-100N"));

        assert_eq!(bom.len(), 2);
        assert_eq!(bom.quantity(&mpn("R-10K")), Some(2));
        assert_eq!(bom.quantity(&mpn("C-100N")), Some(1));
        assert_eq!(bom.quantity(&mpn("missing")), None);
        assert_eq!(bom.total_references(), 3);
    }

    #[test]
    fn test_from_quantities_rejects_zero() {
        let result = BillOfMaterials::from_quantities(vec![(mpn("R1"), 0)]);
        assert!(result.is_err());
    }

    #[test]
    fn test_from_quantities_merges_duplicates() {
        let bom = BillOfMaterials::from_quantities(vec![(mpn("R1"), 2), (mpn("R1"), 3)]).unwrap();
        assert_eq!(bom.quantity(&mpn("R1")), Some(5));
    }

    #[test]
    fn test_sorted_parts() {
        let bom =
            BillOfMaterials::from_quantities(vec![(mpn("Z9"), 1), (mpn("A1"), 4), (mpn("M5"), 2)])
                .unwrap();
        let order: Vec<String> = bom
            .sorted_parts()
            .into_iter()
            .map(|(m, _)| m.to_string())
            .collect();
        assert_eq!(order, vec!["A1", "M5", "Z9"]);
    }

    #[test]
    fn test_empty_bom() {
        let bom = BillOfMaterials::new();
        assert!(bom.is_empty());
        assert_eq!(bom.excluded_references(), 0);
    }
}
