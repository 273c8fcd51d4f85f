use clap::Args;
use std::io;

use breakeven_core::dataset::FinancialDataset;

/// Arguments for template export
#[derive(Args)]
pub struct TemplateArgs {
    /// Output CSV path; writes to stdout when omitted
    #[arg(long)]
    pub out: Option<String>,
}

/// Write the spreadsheet-style dataset template as CSV. Headers and example
/// values are a compatibility surface for files filled in against them.
pub fn run_template(args: TemplateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let template = FinancialDataset::template();

    match args.out {
        Some(ref path) => {
            let mut wtr = csv::Writer::from_path(path)
                .map_err(|e| format!("Failed to create '{}': {}", path, e))?;
            for row in &template.rows {
                wtr.serialize(row)?;
            }
            wtr.flush()?;
            eprintln!("Wrote template to {}", path);
        }
        None => {
            let stdout = io::stdout();
            let mut wtr = csv::Writer::from_writer(stdout.lock());
            for row in &template.rows {
                wtr.serialize(row)?;
            }
            wtr.flush()?;
        }
    }

    Ok(())
}
