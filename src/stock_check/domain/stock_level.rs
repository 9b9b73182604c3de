use std::fmt;

/// Why a vendor could not provide a usable stock quantity
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnknownReason {
    /// The vendor has no part with this MPN
    NotFound,
    /// The vendor returned several candidate parts for this MPN
    Ambiguous(usize),
    /// The request failed after retries, or the response was unusable
    RequestFailed(String),
}

impl fmt::Display for UnknownReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnknownReason::NotFound => write!(f, "not found"),
            UnknownReason::Ambiguous(count) => write!(f, "{} ambiguous matches", count),
            UnknownReason::RequestFailed(details) => write!(f, "lookup failed ({})", details),
        }
    }
}

/// Result of a single vendor stock lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StockLevel {
    Available(u64),
    Unknown(UnknownReason),
}

impl StockLevel {
    pub fn not_found() -> Self {
        StockLevel::Unknown(UnknownReason::NotFound)
    }

    pub fn failed(details: impl Into<String>) -> Self {
        StockLevel::Unknown(UnknownReason::RequestFailed(details.into()))
    }

    /// Maps a list of candidate quantities to a stock level:
    /// exactly one candidate is usable, none is "not found", several are ambiguous.
    pub fn from_candidates(candidates: &[u64]) -> Self {
        match candidates {
            [] => StockLevel::not_found(),
            [quantity] => StockLevel::Available(*quantity),
            many => StockLevel::Unknown(UnknownReason::Ambiguous(many.len())),
        }
    }

    pub fn quantity(&self) -> Option<u64> {
        match self {
            StockLevel::Available(quantity) => Some(*quantity),
            StockLevel::Unknown(_) => None,
        }
    }
}

impl fmt::Display for StockLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StockLevel::Available(quantity) => write!(f, "{} available", quantity),
            StockLevel::Unknown(reason) => write!(f, "{}", reason),
        }
    }
}

/// Availability of one part at one vendor, relative to the required quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VendorAvailability {
    Sufficient,
    Insufficient,
    Unknown,
}

impl VendorAvailability {
    pub fn assess(level: &StockLevel, required: u32) -> Self {
        match level.quantity() {
            Some(available) if available >= u64::from(required) => VendorAvailability::Sufficient,
            Some(_) => VendorAvailability::Insufficient,
            None => VendorAvailability::Unknown,
        }
    }

    pub fn is_sufficient(self) -> bool {
        self == VendorAvailability::Sufficient
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assess_sufficient_at_exact_quantity() {
        assert_eq!(
            VendorAvailability::assess(&StockLevel::Available(5), 5),
            VendorAvailability::Sufficient
        );
        assert_eq!(
            VendorAvailability::assess(&StockLevel::Available(6), 5),
            VendorAvailability::Sufficient
        );
    }

    #[test]
    fn test_assess_insufficient_below_quantity() {
        assert_eq!(
            VendorAvailability::assess(&StockLevel::Available(4), 5),
            VendorAvailability::Insufficient
        );
        assert_eq!(
            VendorAvailability::assess(&StockLevel::Available(0), 1),
            VendorAvailability::Insufficient
        );
    }

    #[test]
    fn test_assess_unknown_for_every_reason() {
        for level in [
            StockLevel::not_found(),
            StockLevel::Unknown(UnknownReason::Ambiguous(3)),
            StockLevel::failed("timeout"),
        ] {
            let availability = VendorAvailability::assess(&level, 1);
            assert_eq!(availability, VendorAvailability::Unknown);
            assert!(!availability.is_sufficient());
        }
    }

    #[test]
    fn test_from_candidates() {
        assert_eq!(StockLevel::from_candidates(&[]), StockLevel::not_found());
        assert_eq!(StockLevel::from_candidates(&[42]), StockLevel::Available(42));
        assert_eq!(
            StockLevel::from_candidates(&[1, 2]),
            StockLevel::Unknown(UnknownReason::Ambiguous(2))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(StockLevel::Available(12).to_string(), "12 available");
        assert_eq!(StockLevel::not_found().to_string(), "not found");
        assert_eq!(
            StockLevel::Unknown(UnknownReason::Ambiguous(2)).to_string(),
            "2 ambiguous matches"
        );
        assert_eq!(
            StockLevel::failed("HTTP 503").to_string(),
            "lookup failed (HTTP 503)"
        );
    }
}
