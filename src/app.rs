//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - collects the output name (flag or interactive prompt)
//! - generates the dataset
//! - builds the charts and renders the report
//! - writes the artifacts

use clap::Parser;

use crate::chart::{category_totals_chart, sales_trend_chart};
use crate::cli::{Command, GenArgs, ReportArgs};
use crate::domain::{GenConfig, ReportConfig};
use crate::error::AppError;
use crate::report::html::{ReportDocument, TOTALS_DIV_ID, TREND_DIV_ID};

pub mod pipeline;

/// Entry point for the `sdash` binary.
pub fn run() -> Result<(), AppError> {
    pretty_env_logger::init();

    // We want `sdash` and `sdash -o out.html` to behave like `sdash report ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of
    // the argv list before parsing. This preserves a clean clap structure
    // while keeping the zero-argument UX.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Report(args) => handle_report(args),
        Command::Summary(args) => handle_summary(args),
    }
}

fn handle_report(args: ReportArgs) -> Result<(), AppError> {
    let config = report_config_from_args(&args);

    println!("Sales report generator");

    // Collect and validate the output path before doing any work, so an
    // invalid name never costs a generation pass.
    let output = match &config.output {
        Some(path) => crate::cli::prompt::parse_output_name(&path.to_string_lossy())?,
        None => crate::cli::prompt::prompt_for_output_name()?,
    };
    let output = crate::io::normalize_report_path(&output);

    println!("1) Generating dataset...");
    let run = pipeline::run_dataset(&config.r#gen)?;

    println!("2) Building charts...");
    let mut doc = ReportDocument::new("Sales report");
    doc.push_chart(TREND_DIV_ID, sales_trend_chart(&run.records));
    doc.push_chart(TOTALS_DIV_ID, category_totals_chart(&run.totals));

    println!("3) Writing '{}'...", output.display());
    crate::io::write_report_html(&output, &doc.render())?;

    if let Some(path) = &config.export {
        crate::io::write_dataset_csv(path, &run.records)?;
        println!("Dataset exported to '{}'.", path.display());
    }

    println!(
        "Done. Open {} in a browser to view the report.",
        output.display()
    );
    Ok(())
}

fn handle_summary(args: GenArgs) -> Result<(), AppError> {
    let config = gen_config_from_args(&args);
    let run = pipeline::run_dataset(&config)?;

    println!(
        "{}",
        crate::report::format_summary(&config, &run.stats, &run.totals)
    );
    Ok(())
}

pub fn gen_config_from_args(args: &GenArgs) -> GenConfig {
    GenConfig {
        rows: args.rows,
        seed: args.seed,
    }
}

pub fn report_config_from_args(args: &ReportArgs) -> ReportConfig {
    ReportConfig {
        r#gen: gen_config_from_args(&args.r#gen),
        output: args.output.clone(),
        export: args.export.clone(),
    }
}

/// Rewrite argv so `sdash` defaults to `sdash report`.
///
/// Rules:
/// - `sdash`                     -> `sdash report`
/// - `sdash -o out.html ...`     -> `sdash report -o out.html ...`
/// - `sdash --help/--version/-h` -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("report".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "report" | "summary");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "report flags".
    if arg1.starts_with('-') {
        argv.insert(1, "report".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}
