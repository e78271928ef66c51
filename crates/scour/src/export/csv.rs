//! CSV serialization of a cleaned table.

use crate::error::Result;
use crate::table::Table;

/// Serialize a table to CSV bytes.
///
/// UTF-8, header row first, standard quoting for fields containing
/// commas, quotes or newlines. Missing cells become empty fields.
pub fn to_csv_bytes(table: &Table) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    {
        let mut writer = csv::Writer::from_writer(&mut buf);
        writer.write_record(&table.columns)?;
        for row in &table.rows {
            let fields: Vec<String> = row.iter().map(|cell| cell.display()).collect();
            writer.write_record(&fields)?;
        }
        writer.flush().map_err(csv::Error::from)?;
    }
    Ok(buf)
}
