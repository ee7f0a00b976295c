use crate::error::ReportError;
use crate::types::{ImporterRank, TradeRecord};
use csv::ReaderBuilder;

/// Load the processed trade register and sort it by supplier and delivery
/// year start, the order the data table is displayed in.
///
/// Both source files are produced by the upstream processing pipeline and
/// are assumed clean and correctly typed; any read or parse failure is
/// propagated to the caller and treated as fatal there.
pub fn load_trade_register(path: &str) -> Result<Vec<TradeRecord>, ReportError> {
    let mut rdr = ReaderBuilder::new().from_path(path)?;
    let mut records = Vec::new();
    for result in rdr.deserialize::<TradeRecord>() {
        records.push(result?);
    }
    records.sort_by(|a, b| {
        a.supplier
            .cmp(&b.supplier)
            .then(a.delivery_year_start.cmp(&b.delivery_year_start))
    });
    Ok(records)
}

/// Load the Ukraine importer rank table (one row per period label).
pub fn load_importer_ranks(path: &str) -> Result<Vec<ImporterRank>, ReportError> {
    let mut rdr = ReaderBuilder::new().from_path(path)?;
    let mut records = Vec::new();
    for result in rdr.deserialize::<ImporterRank>() {
        records.push(result?);
    }
    Ok(records)
}
