use socialscrape_core::Record;

use crate::errors::GenerationError;

/// Serialize records to CSV text with the given column order.
///
/// Emits a header row followed by one row per record; fields the record does
/// not have are written empty. An empty slice yields an empty string with no
/// header.
pub fn serialize<R: Record>(records: &[R], columns: &[&str]) -> Result<String, GenerationError> {
    if records.is_empty() {
        return Ok(String::new());
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());

    writer.write_record(columns)?;
    for record in records {
        writer.write_record(
            columns
                .iter()
                .map(|column| record.field(column).unwrap_or_default()),
        )?;
    }

    writer.flush().map_err(csv::Error::from)?;
    let bytes = writer
        .into_inner()
        .map_err(|err| csv::Error::from(err.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}

/// Serialize records using their declared column order.
pub fn serialize_records<R: Record>(records: &[R]) -> Result<String, GenerationError> {
    serialize(records, R::COLUMNS)
}
