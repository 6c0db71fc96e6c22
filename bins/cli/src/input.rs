//! CSV ingestion of invoice exports.

use std::io::Read;

use csv::{ReaderBuilder, Trim};
use monotax_core::ingest::RawRow;
use monotax_shared::config::InputConfig;
use monotax_shared::{AppError, AppResult};

/// Reads every data row of a delimited file into column-name maps.
///
/// Header names are trimmed; rows may be shorter than the header, in which
/// case the trailing columns are simply absent from the row.
///
/// # Errors
///
/// Returns `AppError::Configuration` for a non-ASCII delimiter and
/// `AppError::Input` for unreadable or non-UTF-8 CSV.
pub fn read_rows<R: Read>(reader: R, input: &InputConfig) -> AppResult<Vec<RawRow>> {
    let delimiter = u8::try_from(input.delimiter)
        .ok()
        .filter(u8::is_ascii)
        .ok_or_else(|| {
            AppError::Configuration(format!(
                "delimiter '{}' is not an ASCII character",
                input.delimiter
            ))
        })?;

    let mut rdr = ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|e| AppError::Input(format!("CSV header: {e}")))?
        .clone();

    let mut rows = Vec::new();
    for rec in rdr.records() {
        let record = rec.map_err(|e| AppError::Input(format!("CSV: {e}")))?;
        let row: RawRow = headers
            .iter()
            .zip(record.iter())
            .map(|(column, value)| (column.to_string(), value.to_string()))
            .collect();
        rows.push(row);
    }

    tracing::debug!(rows = rows.len(), "read CSV rows");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use monotax_shared::AppConfig;

    fn input_config() -> InputConfig {
        AppConfig::load().unwrap().input
    }

    #[test]
    fn test_reads_semicolon_export() {
        let data = "Fecha de Emisión;Punto de Venta;Imp. Total\n\
                    2024-01-15;3;1.000,50\n\
                    2024-02-01;3;200\n";

        let rows = read_rows(data.as_bytes(), &input_config()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["Fecha de Emisión"], "2024-01-15");
        assert_eq!(rows[0]["Imp. Total"], "1.000,50");
        assert_eq!(rows[1]["Punto de Venta"], "3");
    }

    #[test]
    fn test_trims_headers() {
        let data = " Fecha de Emisión ; Imp. Total \n2024-01-15;100\n";
        let rows = read_rows(data.as_bytes(), &input_config()).unwrap();
        assert!(rows[0].contains_key("Imp. Total"));
    }

    #[test]
    fn test_short_row_drops_trailing_columns() {
        let data = "Fecha de Emisión;Imp. Total\n2024-01-15\n";
        let rows = read_rows(data.as_bytes(), &input_config()).unwrap();
        assert!(!rows[0].contains_key("Imp. Total"));
    }

    #[test]
    fn test_header_only_file_has_no_rows() {
        let data = "Fecha de Emisión;Imp. Total\n";
        let rows = read_rows(data.as_bytes(), &input_config()).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_rejects_multibyte_delimiter() {
        let mut input = input_config();
        input.delimiter = '¦';
        let err = read_rows("a\n".as_bytes(), &input).unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
    }
}
