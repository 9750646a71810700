//! CSV rendering of the signal table for the download collaborator.

use crate::models::{IndicatorRow, Signal};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("csv write error: {0}")]
    Csv(#[from] csv::Error),
    #[error("csv output is not valid utf-8")]
    Encoding,
}

/// Render signal rows as CSV text with a `Date,Close,Short_MA,Long_MA,Signal`
/// header. Intended for the filtered signal table, but accepts any rows.
pub fn signal_table_csv(rows: &[IndicatorRow]) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["Date", "Close", "Short_MA", "Long_MA", "Signal"])?;

    for row in rows {
        let signal = match row.signal {
            Signal::Buy => "Buy",
            Signal::Sell => "Sell",
            Signal::None => "",
        };
        writer.write_record([
            row.date.format("%Y-%m-%d").to_string(),
            format!("{:.4}", row.close),
            row.short_ma.map(|v| format!("{v:.4}")).unwrap_or_default(),
            row.long_ma.map(|v| format!("{v:.4}")).unwrap_or_default(),
            signal.to_string(),
        ])?;
    }

    let bytes = writer.into_inner().map_err(|_| ExportError::Encoding)?;
    String::from_utf8(bytes).map_err(|_| ExportError::Encoding)
}
