use serde::Serialize;

/// Number of vendor slots a score can track
pub const MAX_VENDORS: u8 = 32;

/// Bitmask of vendors able to supply a part's required quantity
///
/// Bit `n` is set when the vendor in slot `n` reported sufficient stock.
/// Scores order numerically, which puts uncovered parts (score 0) first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PartScore(u32);

impl PartScore {
    pub const EMPTY: PartScore = PartScore(0);

    pub fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub fn bits(self) -> u32 {
        self.0
    }

    /// Sets the bit for vendor slot `bit`. Bits outside the mask are ignored.
    pub fn set(&mut self, bit: u8) {
        if bit < MAX_VENDORS {
            self.0 |= 1 << bit;
        }
    }

    pub fn is_set(self, bit: u8) -> bool {
        bit < MAX_VENDORS && self.0 & (1 << bit) != 0
    }

    /// True when no vendor can supply the part
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn vendor_count(self) -> u32 {
        self.0.count_ones()
    }
}

impl std::fmt::Display for PartScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
