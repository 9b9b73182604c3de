mod cli;

use bom_stockcheck::adapters::outbound::console::{ConsoleNotifier, StderrProgressReporter};
use bom_stockcheck::adapters::outbound::credentials::ResolvedCredentials;
use bom_stockcheck::adapters::outbound::filesystem::CsvBomReader;
use bom_stockcheck::adapters::outbound::network::DEFAULT_FARNELL_STORE;
use bom_stockcheck::application::dto::{OutputFormat, StockCheckRequest, StockCheckResponse};
use bom_stockcheck::application::factories::{
    FormatterFactory, HttpVendorFactory, PresenterFactory, PresenterType,
};
use bom_stockcheck::application::use_cases::CheckStockUseCase;
use bom_stockcheck::config::{self, ConfigFile};
use bom_stockcheck::ports::outbound::{OutputPresenter, ReportFormatter};
use bom_stockcheck::shared::error::{ExitCode, StockCheckError};
use bom_stockcheck::shared::logging::init_cli_logger;
use bom_stockcheck::shared::Result;
use bom_stockcheck::stock_check::domain::VendorKind;
use cli::Args;
use std::path::{Path, PathBuf};
use std::process;

#[tokio::main]
async fn main() {
    let args = Args::parse_args();
    init_cli_logger(args.verbose);

    match run(args).await {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            let already_notified = e
                .downcast_ref::<StockCheckError>()
                .is_some_and(StockCheckError::is_notified);

            if !already_notified {
                eprintln!("\n❌ An error occurred:\n");
                eprintln!("{}", e);

                let mut source = e.source();
                while let Some(err) = source {
                    eprintln!("\nCaused by: {}", err);
                    source = err.source();
                }
                eprintln!();
            }

            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

async fn run(args: Args) -> Result<ExitCode> {
    let config = load_config(&args)?;
    let options = RunOptions::merge(&args, config.unwrap_or_default())?;
    tracing::debug!(?options, "resolved options");

    let credentials = ResolvedCredentials::new()
        .with_key(VendorKind::Mouser, args.mouser_api_key.clone())
        .with_key(VendorKind::Farnell, args.farnell_api_key.clone());
    let vendor_factory = HttpVendorFactory::new().with_farnell_store(options.farnell_store.clone());

    let use_case = CheckStockUseCase::new(
        CsvBomReader::new(),
        credentials,
        ConsoleNotifier::new(),
        StderrProgressReporter::new(),
        vendor_factory,
    );

    let request = StockCheckRequest::new(
        args.bom.clone(),
        options.exclude_patterns.clone(),
        options.vendors.clone(),
        args.dry_run,
    );
    let response = use_case.execute(request).await?;

    write_report(&response, &options)?;

    if args.fail_on_shortage && response.has_shortages() {
        return Ok(ExitCode::ShortagesDetected);
    }
    Ok(ExitCode::Success)
}

fn load_config(args: &Args) -> Result<Option<ConfigFile>> {
    if let Some(path) = &args.config {
        let config = config::load_config_from_path(path)?;
        eprintln!("📄 Loaded config from: {}", path.display());
        return Ok(Some(config));
    }

    let bom_dir = bom_directory(&args.bom);
    let config = config::discover_config(bom_dir)?;
    if config.is_some() {
        eprintln!(
            "📄 Auto-discovered config file: {}",
            bom_dir.join(config::CONFIG_FILENAME).display()
        );
    }
    Ok(config)
}

fn bom_directory(bom: &Path) -> &Path {
    match bom.parent() {
        Some(parent) if parent != Path::new("") => parent,
        _ => Path::new("."),
    }
}

fn write_report(response: &StockCheckResponse, options: &RunOptions) -> Result<()> {
    let Some(report) = &response.report else {
        eprintln!(
            "📋 {} unique part(s), {} reference(s) counted, {} excluded",
            response.bom.len(),
            response.bom.total_references(),
            response.bom.excluded_references()
        );
        return Ok(());
    };

    eprintln!("{}", FormatterFactory::progress_message(options.format));
    let content = FormatterFactory::create(options.format).format(report)?;

    let presenter_type = match &options.output {
        Some(path) => PresenterType::File(path.clone()),
        None => PresenterType::Stdout,
    };
    PresenterFactory::create(presenter_type).present(&content)
}

/// Options after merging CLI arguments over the config file.
///
/// Precedence: CLI > config file > defaults.
#[derive(Debug, Clone, PartialEq)]
struct RunOptions {
    format: OutputFormat,
    output: Option<PathBuf>,
    exclude_patterns: Vec<String>,
    vendors: Vec<VendorKind>,
    farnell_store: String,
}

impl RunOptions {
    fn merge(args: &Args, config: ConfigFile) -> Result<Self> {
        let vendors = if !args.vendors.is_empty() {
            args.vendors.clone()
        } else {
            config
                .vendor_kinds()?
                .unwrap_or_else(|| VendorKind::ALL.to_vec())
        };

        let exclude_patterns = if !args.exclude.is_empty() {
            args.exclude.clone()
        } else {
            config.exclude_references.unwrap_or_default()
        };

        Ok(Self {
            format: args.format.or(config.format).unwrap_or_default(),
            output: args.output.clone().or(config.output),
            exclude_patterns,
            vendors: dedup_vendors(vendors),
            farnell_store: args
                .farnell_store
                .clone()
                .or(config.farnell_store)
                .unwrap_or_else(|| DEFAULT_FARNELL_STORE.to_string()),
        })
    }
}

/// Keeps the first occurrence of each vendor; the order defines the report columns.
fn dedup_vendors(vendors: Vec<VendorKind>) -> Vec<VendorKind> {
    let mut unique = Vec::with_capacity(vendors.len());
    for vendor in vendors {
        if !unique.contains(&vendor) {
            unique.push(vendor);
        }
    }
    unique
}
