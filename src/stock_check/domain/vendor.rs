/// Distributors with a built-in stock lookup client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VendorKind {
    Mouser,
    Farnell,
}

impl VendorKind {
    /// Default vendor order; the position is the vendor's score bit.
    pub const ALL: [VendorKind; 2] = [VendorKind::Mouser, VendorKind::Farnell];

    /// Column label used in reports
    pub fn label(self) -> &'static str {
        match self {
            VendorKind::Mouser => "Mouser",
            VendorKind::Farnell => "Farnell",
        }
    }

    /// Environment variable holding the vendor's API key
    pub fn credential_env_var(self) -> &'static str {
        match self {
            VendorKind::Mouser => "MOUSER_API_KEY",
            VendorKind::Farnell => "FARNELL_API_KEY",
        }
    }
}

impl std::str::FromStr for VendorKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mouser" => Ok(VendorKind::Mouser),
            "farnell" | "element14" | "newark" => Ok(VendorKind::Farnell),
            _ => Err(format!(
                "Invalid vendor: {}. Please specify 'mouser' or 'farnell'",
                s
            )),
        }
    }
}

impl std::fmt::Display for VendorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
