mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::dataset::TemplateArgs;
use commands::payback::{ChartArgs, PaybackArgs};
use commands::unit_economics::UnitBreakevenArgs;

/// Break-even and payback analysis
#[derive(Parser)]
#[command(
    name = "bke",
    version,
    about = "Break-even and investment payback calculations with decimal precision",
    long_about = "A CLI for break-even analysis with decimal precision. Computes \
                  cumulative cash flow payback with an interpolated break-even year, \
                  unit-economics break-even points, chart data for external renderers, \
                  and spreadsheet-style dataset templates."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Cumulative cash flow payback with interpolated break-even year
    Payback(PaybackArgs),
    /// Unit-economics break-even point (fixed costs, price, variable cost)
    UnitBreakeven(UnitBreakevenArgs),
    /// Chart data for the cumulative cash flow line plot
    Chart(ChartArgs),
    /// Write the spreadsheet-style dataset template as CSV
    Template(TemplateArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Payback(args) => commands::payback::run_payback(args),
        Commands::UnitBreakeven(args) => commands::unit_economics::run_unit_breakeven(args),
        Commands::Chart(args) => commands::payback::run_chart(args),
        Commands::Template(args) => {
            // Writes CSV directly; the --output formatters do not apply
            if let Err(e) = commands::dataset::run_template(args) {
                eprintln!("{}: {}", "error".red().bold(), e);
                process::exit(1);
            }
            return;
        }
        Commands::Version => {
            println!("bke {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
