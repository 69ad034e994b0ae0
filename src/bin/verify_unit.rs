//! Verify mech design files
//!
//! Usage:
//!   cargo run --bin verify_unit -- data/designs/*.json
//!   cargo run --bin verify_unit -- --config data/verifier.toml --print design.json
//!   cargo run --bin verify_unit -- --format json --catalog data/equipment.toml design.json

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use rayon::prelude::*;
use serde::Serialize;

use mech_verifier::catalog::EquipmentCatalog;
use mech_verifier::core::{Result, VerifierConfig, VerifierError};
use mech_verifier::unit::{Mech, UnitDesign};
use mech_verifier::verifier::{full_report, VerificationReport, Verifier};

#[derive(Parser, Debug)]
#[command(name = "verify_unit")]
#[command(about = "Check mech designs against the construction rules")]
struct Args {
    /// Design files (JSON)
    #[arg(required = true)]
    designs: Vec<PathBuf>,

    /// Extra equipment entries (TOML), merged over the built-in catalog
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Verifier settings (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the full unit breakdown after each report
    #[arg(long)]
    print: bool,

    /// Output format: text or json
    #[arg(long, default_value = "text")]
    format: String,
}

/// What happened to one file
enum Outcome {
    Verified {
        report: VerificationReport,
        printout: Option<String>,
    },
    Failed(VerifierError),
}

#[derive(Serialize)]
struct JsonOutcome<'a> {
    file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<&'a VerificationReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn load_design(path: &Path) -> Result<UnitDesign> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn verify_file(verifier: &Verifier<'_>, path: &Path, print: bool) -> Outcome {
    let design = match load_design(path) {
        Ok(design) => design,
        Err(err) => return Outcome::Failed(err),
    };
    let report = match verifier.verify(&design) {
        Ok(report) => report,
        Err(err) => return Outcome::Failed(err),
    };
    let printout = if print && !report.skipped {
        Mech::resolve(&design, verifier.catalog())
            .ok()
            .map(|mech| full_report(&mech, verifier.config()))
    } else {
        None
    };
    Outcome::Verified { report, printout }
}

fn setup(args: &Args) -> Result<(EquipmentCatalog, VerifierConfig)> {
    let mut catalog = EquipmentCatalog::standard();
    if let Some(path) = &args.catalog {
        let added = catalog.extend_from_toml(&std::fs::read_to_string(path)?)?;
        tracing::info!("Merged {} equipment kinds from {}", added, path.display());
    }
    let config = match &args.config {
        Some(path) => VerifierConfig::load(path)?,
        None => VerifierConfig::default(),
    };
    Ok((catalog, config))
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let json = match args.format.as_str() {
        "json" => true,
        "text" => false,
        other => {
            eprintln!("Unknown format '{}', expected text or json", other);
            return ExitCode::from(2);
        }
    };

    let (catalog, config) = match setup(&args) {
        Ok(loaded) => loaded,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::from(2);
        }
    };
    let verifier = Verifier::with_config(&catalog, config);

    let outcomes: Vec<(PathBuf, Outcome)> = args
        .designs
        .par_iter()
        .map(|path| (path.clone(), verify_file(&verifier, path, args.print)))
        .collect();

    let mut any_illegal = false;
    let mut any_invalid = false;
    for (_, outcome) in &outcomes {
        match outcome {
            Outcome::Verified { report, .. } => any_illegal |= !report.is_legal,
            Outcome::Failed(_) => any_invalid = true,
        }
    }

    if json {
        let rows: Vec<JsonOutcome<'_>> = outcomes
            .iter()
            .map(|(path, outcome)| match outcome {
                Outcome::Verified { report, .. } => JsonOutcome {
                    file: path.display().to_string(),
                    report: Some(report),
                    error: None,
                },
                Outcome::Failed(err) => JsonOutcome {
                    file: path.display().to_string(),
                    report: None,
                    error: Some(err.to_string()),
                },
            })
            .collect();
        match serde_json::to_string_pretty(&rows) {
            Ok(text) => println!("{}", text),
            Err(err) => {
                eprintln!("{}", err);
                return ExitCode::from(2);
            }
        }
    } else {
        for (path, outcome) in &outcomes {
            match outcome {
                Outcome::Verified { report, printout } => {
                    print!("{}", report);
                    if let Some(text) = printout {
                        println!();
                        print!("{}", text);
                    }
                }
                Outcome::Failed(VerifierError::InvalidInput { defects, partial }) => {
                    println!("{}: invalid input", path.display());
                    for defect in defects {
                        println!("  {}", defect);
                    }
                    for finding in partial {
                        println!("{}", finding);
                    }
                }
                Outcome::Failed(err) => println!("{}: {}", path.display(), err),
            }
            println!();
        }
    }

    if any_invalid {
        ExitCode::from(2)
    } else if any_illegal {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}
