use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::{Parser, ValueEnum};
use paye_engine::TaxEngine;
use paye_engine::config::ConfigLoader;
use paye_engine::error::{EngineError, ValidationError};
use paye_engine::models::{AuditTrace, SalaryField, SalaryForm};
use paye_engine::report::render_payslip;
use paye_engine::telemetry::{self, DEFAULT_LOG_LEVEL, TelemetryError};
use thiserror::Error;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "paye",
    about = "Compute a monthly payslip: statutory levies, PAYE tax and net pay",
    version
)]
struct Cli {
    /// Basic salary (required)
    #[arg(long, default_value = "")]
    basic_salary: String,
    /// Benefits and allowances
    #[arg(long)]
    benefits: Option<String>,
    /// Pension contribution
    #[arg(long)]
    pension: Option<String>,
    /// Mortgage interest
    #[arg(long)]
    mortgage_interest: Option<String>,
    /// Medical fund contribution
    #[arg(long)]
    medical_fund: Option<String>,
    /// Statutory schedule YAML (defaults to the built-in snapshot)
    #[arg(long)]
    schedule: Option<PathBuf>,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Include the step-by-step audit trace
    #[arg(long)]
    audit: bool,
    /// Log level or filter directive, overridden by RUST_LOG
    #[arg(long, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    #[error("failed to serialize result: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ValidationError> for CliError {
    fn from(err: ValidationError) -> Self {
        CliError::Engine(err.into())
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    let cli = Cli::parse();
    telemetry::init(&cli.log_level)?;

    let engine = match &cli.schedule {
        Some(path) => TaxEngine::new(ConfigLoader::load(path)?.into_schedule()),
        None => TaxEngine::default(),
    };

    let form = fill_form(&cli);
    let inputs = form.snapshot();
    let calculation = engine.compute_audited(&inputs)?;
    info!(net_pay = %calculation.result.net_pay, "Payslip computed");

    match cli.format {
        OutputFormat::Json if cli.audit => {
            println!("{}", serde_json::to_string_pretty(&calculation)?);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&calculation.result)?);
        }
        OutputFormat::Text => {
            let today: NaiveDate = Local::now().date_naive();
            print!(
                "{}",
                render_payslip(
                    &inputs,
                    &calculation.result,
                    &engine.schedule().currency,
                    today
                )
            );
            if cli.audit {
                print!("{}", render_audit(&calculation.audit_trace));
            }
        }
    }

    Ok(())
}

/// Enters every given option into a form, reporting rejected text on stderr.
///
/// Rejected fields stay marked on the form, so the computation that follows
/// refuses to run.
fn fill_form(cli: &Cli) -> SalaryForm {
    let entries = [
        (SalaryField::BasicSalary, Some(&cli.basic_salary)),
        (SalaryField::Benefits, cli.benefits.as_ref()),
        (SalaryField::PensionContribution, cli.pension.as_ref()),
        (SalaryField::MortgageInterest, cli.mortgage_interest.as_ref()),
        (SalaryField::MedicalFundContribution, cli.medical_fund.as_ref()),
    ];

    let mut form = SalaryForm::new();
    for (field, raw) in entries {
        if let Some(raw) = raw {
            if let Err(err) = form.enter(field, raw) {
                eprintln!("{err}");
            }
        }
    }
    form
}

fn render_audit(trace: &AuditTrace) -> String {
    let mut out = String::from("\nAudit Trace\n-----------\n");
    for step in &trace.steps {
        out.push_str(&format!(
            "{:>2}. {}: {}\n",
            step.step_number, step.rule_name, step.reasoning
        ));
    }
    out
}
