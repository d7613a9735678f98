//! NotifyScan CLI
//!
//! The `notifyscan` command reports which types in a module manifest inherit a
//! `PropertyChanged` change-notification contract.
//!
//! ## Commands
//!
//! - `scan`: classify every type defined in a manifest
//! - `check`: classify a single type by full name

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use notify_core::{
    analyze_types, init_tracing, AnalysisOptions, AnalysisReport, AnalysisSpan,
    HierarchyClassifier, VerdictCache,
};
use notify_metadata::{InMemoryProvider, ModuleManifest, TypeReference};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, Level};

#[derive(Parser)]
#[command(name = "notifyscan")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(
    about = "Find types whose inheritance chain implements PropertyChanged notification",
    long_about = None
)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long, global = true, env = "NOTIFYSCAN_JSON_LOGS")]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify every type defined in a module manifest
    Scan {
        /// Path to the module manifest (JSON)
        manifest: PathBuf,

        /// Only classify types declared in this module
        #[arg(short, long)]
        module: Option<String>,

        /// Output format for the verdicts
        #[arg(
            short,
            long,
            value_enum,
            default_value_t = OutputFormat::Text,
            env = "NOTIFYSCAN_FORMAT"
        )]
        format: OutputFormat,

        /// Stop at the first type that cannot be classified
        #[arg(long)]
        fail_fast: bool,

        /// Include every cached verdict, ancestors included, in the output
        #[arg(long)]
        dump_cache: bool,
    },

    /// Classify a single type by full name
    Check {
        /// Path to the module manifest (JSON)
        manifest: PathBuf,

        /// Fully-qualified type name
        type_name: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "snake_case")]
enum OutputFormat {
    Text,
    Json,
}

/// JSON document printed by `scan --format json`.
#[derive(Serialize)]
struct ScanOutput<'a> {
    #[serde(flatten)]
    report: &'a AnalysisReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    cache: Option<BTreeMap<String, bool>>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    init_tracing(cli.json_logs, level);

    match cli.command {
        Commands::Scan {
            manifest,
            module,
            format,
            fail_fast,
            dump_cache,
        } => {
            let options = AnalysisOptions::default().with_fail_fast(fail_fast);
            let (report, cache) = run_scan(&manifest, module.as_deref(), options)?;
            let cache = dump_cache.then(|| cache.snapshot());
            print!("{}", render_report(&report, cache, format)?);
            match scan_exit_code(&report) {
                0 => Ok(()),
                code => std::process::exit(code),
            }
        }
        Commands::Check {
            manifest,
            type_name,
        } => cmd_check(&manifest, &type_name),
    }
}

fn load_provider(manifest_path: &Path) -> Result<InMemoryProvider> {
    let manifest = ModuleManifest::from_path(manifest_path)
        .with_context(|| format!("Failed to load manifest {}", manifest_path.display()))?;
    InMemoryProvider::from_manifest(&manifest)
        .with_context(|| format!("Invalid manifest {}", manifest_path.display()))
}

/// Classify the manifest's types, returning the report and the final cache.
fn run_scan(
    manifest_path: &Path,
    module: Option<&str>,
    options: AnalysisOptions,
) -> Result<(AnalysisReport, VerdictCache)> {
    let provider = load_provider(manifest_path)?;

    let types: Vec<TypeReference> = match module {
        Some(module) => provider
            .definitions_in(module)
            .map(|def| TypeReference::Definition(Arc::clone(def)))
            .collect(),
        None => provider
            .definitions()
            .map(|def| TypeReference::Definition(Arc::clone(def)))
            .collect(),
    };
    if let Some(module) = module {
        if types.is_empty() {
            bail!("Module {module} declares no types in {}", manifest_path.display());
        }
    }

    let scope = module
        .map(str::to_string)
        .unwrap_or_else(|| manifest_path.display().to_string());
    let _span = AnalysisSpan::enter(&scope);
    info!("Scanning {} types", types.len());

    let mut classifier = HierarchyClassifier::new(provider);
    let report = analyze_types(&mut classifier, types, options);
    Ok((report, classifier.cache().clone()))
}

/// Process exit status for a finished scan: 1 when any type failed.
fn scan_exit_code(report: &AnalysisReport) -> i32 {
    if report.passed() {
        0
    } else {
        1
    }
}

fn render_report(
    report: &AnalysisReport,
    cache: Option<BTreeMap<String, bool>>,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let output = ScanOutput { report, cache };
            Ok(format!("{}\n", serde_json::to_string_pretty(&output)?))
        }
        OutputFormat::Text => {
            let mut out = String::new();
            for verdict in &report.verdicts {
                let marker = if verdict.implements_notification {
                    "notifies"
                } else {
                    "-"
                };
                writeln!(out, "{marker:<10} {}", verdict.type_name)?;
            }
            for failure in &report.failures {
                writeln!(out, "{:<10} {}: {}", "FAILED", failure.type_name, failure.error)?;
            }

            let implementing = report.implementing().count();
            writeln!(
                out,
                "\n{} classified, {} implement notification, {} failed{}",
                report.verdicts.len(),
                implementing,
                report.failures.len(),
                if report.aborted { " (aborted)" } else { "" },
            )?;

            if let Some(cache) = cache {
                writeln!(out, "\nverdict cache ({} entries):", cache.len())?;
                for (name, verdict) in cache {
                    writeln!(out, "  {name} = {verdict}")?;
                }
            }
            Ok(out)
        }
    }
}

/// Classify one type and print `true` or `false`.
fn cmd_check(manifest_path: &Path, type_name: &str) -> Result<()> {
    let verdict = check_type(manifest_path, type_name)?;
    println!("{verdict}");
    Ok(())
}

fn check_type(manifest_path: &Path, type_name: &str) -> Result<bool> {
    let provider = load_provider(manifest_path)?;
    let reference = provider
        .get(type_name)
        .map(|def| TypeReference::Definition(Arc::clone(def)))
        .unwrap_or_else(|| TypeReference::named(type_name));

    let mut classifier = HierarchyClassifier::new(provider);
    classifier
        .implements_notification(&reference)
        .with_context(|| format!("Failed to classify {type_name}"))
}
