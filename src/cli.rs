use bom_stockcheck::application::dto::OutputFormat;
use bom_stockcheck::stock_check::domain::VendorKind;
use clap::Parser;
use std::path::PathBuf;

/// Check distributor stock for every part in a board BOM
#[derive(Parser, Debug)]
#[command(name = "bom-stockcheck")]
#[command(version)]
#[command(about = "Check distributor stock for every part in a board BOM", long_about = None)]
pub struct Args {
    /// BOM exported as CSV, with 'Reference' and 'MPN' columns
    #[arg(value_name = "BOM")]
    pub bom: PathBuf,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format: markdown or json [default: markdown]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Skip references matching a regular expression.
    /// Can be specified multiple times: -e "^TP" -e "^FID".
    /// Replaces the default patterns (^kibuzzard, ^LAYOUT, ^TP, ^H)
    #[arg(short, long = "exclude", value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Vendor to query (mouser, farnell). Can be repeated; defaults to all
    #[arg(long = "vendor", value_name = "VENDOR")]
    pub vendors: Vec<VendorKind>,

    /// element14 storefront used for Farnell lookups
    #[arg(long, value_name = "STORE", value_parser = parse_store)]
    pub farnell_store: Option<String>,

    /// Path to a config file (defaults to bom-stockcheck.config.yml next to the BOM)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Mouser Search API key
    #[arg(long, env = "MOUSER_API_KEY", hide_env_values = true)]
    pub mouser_api_key: Option<String>,

    /// element14 Product Search API key
    #[arg(long, env = "FARNELL_API_KEY", hide_env_values = true)]
    pub farnell_api_key: Option<String>,

    /// Validate and aggregate the BOM without querying any vendor
    #[arg(long)]
    pub dry_run: bool,

    /// Exit with code 1 when a part cannot be sourced from any vendor
    #[arg(long)]
    pub fail_on_shortage: bool,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Store ids are host names such as "de.farnell.com"; blank values are rejected
/// the same way the config file rejects them.
fn parse_store(value: &str) -> Result<String, String> {
    let store = value.trim();
    if store.is_empty() {
        return Err("farnell store must not be empty".to_string());
    }
    Ok(store.to_string())
}
