use crate::shared::Result;

/// Maximum length for part identifiers (security limit)
const MAX_IDENTIFIER_LENGTH: usize = 255;

/// NewType wrapper for a board-local reference designator (e.g. "R1")
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PartReference(String);

impl PartReference {
    pub fn new(reference: impl Into<String>) -> Result<Self> {
        let reference = reference.into().trim().to_string();
        if reference.is_empty() {
            anyhow::bail!("Reference designator cannot be empty");
        }
        Ok(Self(reference))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Power symbols and net labels ("#PWR01", "#FLG02") are not physical parts.
    pub fn is_virtual(&self) -> bool {
        self.0.starts_with('#')
    }
}

impl std::fmt::Display for PartReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// NewType wrapper for a manufacturer part number (MPN)
///
/// Opaque to the checker: characters such as '/', '#' or '+' are valid in
/// real MPNs, so only emptiness and length are validated. Vendor clients
/// URL-encode the value themselves.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PartIdentifier(String);

impl PartIdentifier {
    pub fn new(mpn: impl Into<String>) -> Result<Self> {
        let mpn = mpn.into().trim().to_string();
        if mpn.is_empty() {
            anyhow::bail!("Part identifier cannot be empty");
        }
        if mpn.len() > MAX_IDENTIFIER_LENGTH {
            anyhow::bail!(
                "Part identifier is too long ({} bytes). Maximum allowed: {} bytes",
                mpn.len(),
                MAX_IDENTIFIER_LENGTH
            );
        }
        Ok(Self(mpn))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PartIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A footprint as seen by the checker: its reference and optional MPN field
///
/// The MPN is kept as read and only validated once the reference is known
/// not to be excluded.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceEntry {
    reference: PartReference,
    mpn: Option<String>,
}

impl ReferenceEntry {
    /// Creates an entry; a blank MPN counts as missing.
    pub fn new(reference: PartReference, mpn: Option<&str>) -> Self {
        let mpn = mpn
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string);
        Self { reference, mpn }
    }

    /// Builds an entry from raw strings.
    ///
    /// # Errors
    /// Returns an error if the reference is blank
    pub fn from_raw(reference: &str, mpn: Option<&str>) -> Result<Self> {
        Ok(Self::new(PartReference::new(reference)?, mpn))
    }

    pub fn reference(&self) -> &PartReference {
        &self.reference
    }

    /// The trimmed MPN field, `None` when blank
    pub fn raw_mpn(&self) -> Option<&str> {
        self.mpn.as_deref()
    }
}
