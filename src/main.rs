//! `payroll` command-line interface.
//!
//! Runs batch calculations, renders workbooks, verifies results and serves
//! the HTTP API.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use payroll_engine::api::{AppState, create_router};
use payroll_engine::calculation::process_payroll;
use payroll_engine::config::ConfigLoader;
use payroll_engine::io::{load_input, load_output, write_json};
use payroll_engine::models::PayrollResult;
use payroll_engine::report::write_workbook;
use payroll_engine::verify::{format_amount, verify_results};

/// Exit status for a run that completed but found problems.
const EXIT_FINDINGS: u8 = 1;
/// Exit status for configuration or I/O failures.
const EXIT_FAILURE: u8 = 2;

#[derive(Parser)]
#[command(name = "payroll", version, about = "Monthly payroll calculation engine")]
struct Cli {
    /// Directory holding payroll.yaml and schedule.yaml (built-in schedule if omitted)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate payroll for an input document
    Calculate {
        /// Input document (employees, attendance, grade table)
        input: PathBuf,
        /// Where to write the output document
        output: PathBuf,
    },
    /// Render an output document as a spreadsheet
    Report {
        /// Output document produced by `calculate`
        output: PathBuf,
        /// Where to write the workbook
        workbook: PathBuf,
    },
    /// Compare calculated results against expected results
    Verify {
        /// Calculated output document
        calculated: PathBuf,
        /// Expected output document
        expected: PathBuf,
    },
    /// Serve the HTTP API
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: SocketAddr,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(code) => code,
        Err(err) => {
            error!(error = %err, "Command failed");
            eprintln!("error: {err:#}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Calculate { input, output } => calculate(&config, &input, &output),
        Commands::Report { output, workbook } => {
            let document = load_output(&output)?;
            write_workbook(&workbook, &document)?;
            println!("Workbook written to {}", workbook.display());
            Ok(ExitCode::SUCCESS)
        }
        Commands::Verify {
            calculated,
            expected,
        } => {
            let report = verify_results(&load_output(&calculated)?, &load_output(&expected)?);
            println!("{report}");
            Ok(if report.passed() {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(EXIT_FINDINGS)
            })
        }
        Commands::Serve { addr } => {
            serve(config, addr).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn load_config(dir: Option<&Path>) -> anyhow::Result<ConfigLoader> {
    let Some(dir) = dir else {
        return Ok(ConfigLoader::builtin());
    };
    let loader = ConfigLoader::load(dir)
        .with_context(|| format!("loading configuration from {}", dir.display()))?;
    info!(
        code = %loader.metadata().code,
        version = %loader.metadata().version,
        "Using rate schedule"
    );
    Ok(loader)
}

fn calculate(config: &ConfigLoader, input: &Path, output: &Path) -> anyhow::Result<ExitCode> {
    let document = load_input(input)?;
    let result = process_payroll(&document, config.schedule());
    write_json(output, &result)?;

    println!(
        "{:<10} {:<20} {:>14} {:>14} {:>14}",
        "Employee", "Name", "Gross", "Statutory", "Net"
    );
    for employee in &result.results {
        println!("{}", employee_line(employee));
    }

    let summary = &result.summary;
    println!();
    println!("Employees:        {}", summary.employee_count);
    println!("Calculated:       {}", result.results.len());
    println!("Total gross pay:  {}", format_amount(summary.total_gross_pay));
    println!("Total deductions: {}", format_amount(summary.total_deductions));
    println!("Total net pay:    {}", format_amount(summary.total_net_pay));

    if result.skipped.is_empty() {
        return Ok(ExitCode::SUCCESS);
    }
    for skipped in &result.skipped {
        warn!(employee_id = %skipped.employee_id, reason = %skipped.reason, "Employee skipped");
        println!("Skipped {}: {}", skipped.employee_id, skipped.reason);
    }
    Ok(ExitCode::from(EXIT_FINDINGS))
}

fn employee_line(result: &PayrollResult) -> String {
    format!(
        "{:<10} {:<20} {:>14} {:>14} {:>14}",
        result.employee_id,
        result.employee_name,
        format_amount(result.gross_pay),
        format_amount(result.statutory_deductions.total),
        format_amount(result.net_pay),
    )
}

async fn serve(config: ConfigLoader, addr: SocketAddr) -> anyhow::Result<()> {
    let router = create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!(addr = %addr, "Payroll API listening");
    axum::serve(listener, router).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use payroll_engine::calculation::calculate_employee_payroll;
    use payroll_engine::config::RateSchedule;
    use payroll_engine::models::{AttendanceRecord, Employee, GradeInfo, GradeTable};
    use rust_decimal::Decimal;

    #[test]
    fn test_employee_line_shows_gross_statutory_and_net() {
        let employee = Employee {
            id: "E001".to_string(),
            name: "Tanaka Taro".to_string(),
            department: "Sales".to_string(),
            grade: "G1".to_string(),
            base_salary: 320_000,
            commute_allowance: 10_000,
            dependents: 1,
        };
        let mut attendance = AttendanceRecord::zero("E001");
        attendance.regular_overtime_hours = Decimal::from(50);
        let mut grades = GradeTable::new();
        grades.insert(
            "G1".to_string(),
            GradeInfo {
                insurance_rate: Decimal::new(1, 1),
                base_deduction: 50_000,
            },
        );
        let result =
            calculate_employee_payroll(&employee, &attendance, &grades, &RateSchedule::default())
                .unwrap();

        let line = employee_line(&result);
        assert!(line.starts_with("E001       Tanaka Taro"));
        assert!(line.contains("456,000"));
        assert!(line.contains("73,655"));
        assert!(line.ends_with("382,345"));
    }

    #[test]
    fn test_cli_parses_calculate() {
        let cli = Cli::try_parse_from(["payroll", "calculate", "in.json", "out.json"]).unwrap();
        assert!(matches!(cli.command, Commands::Calculate { .. }));
        assert!(cli.config.is_none());
    }
}
