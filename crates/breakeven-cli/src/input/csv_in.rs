use breakeven_core::dataset::{DatasetRow, FinancialDataset};

/// Read a spreadsheet-style CSV dataset (Year, Cash Flow, Initial
/// Investment headers) into the tabular form. Missing or malformed cells
/// surface here as load failures; the core never sees partially-typed data.
pub fn read_dataset(path: &str) -> Result<FinancialDataset, Box<dyn std::error::Error>> {
    let mut rdr =
        csv::Reader::from_path(path).map_err(|e| format!("Failed to read '{}': {}", path, e))?;

    let mut rows: Vec<DatasetRow> = Vec::new();
    for (i, record) in rdr.deserialize::<DatasetRow>().enumerate() {
        // Line numbering accounts for the header row
        let row = record.map_err(|e| format!("Failed to parse '{}' line {}: {}", path, i + 2, e))?;
        rows.push(row);
    }

    Ok(FinancialDataset { rows })
}
