use crate::core::models::record::InteractionRecord;
use std::io::Write;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecordWriteError {
    #[error("CSV writing error: {0}")]
    Csv(#[from] csv::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Writes records as CSV with a `Res1,Res2,Dist` header.
///
/// The header is written even when there are no records.
pub fn write_records<'r, W, I>(records: I, writer: W) -> Result<(), RecordWriteError>
where
    W: Write,
    I: IntoIterator<Item = &'r InteractionRecord>,
{
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv_writer.write_record(InteractionRecord::SCHEMA.iter().map(|f| f.name))?;
    for record in records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;
    Ok(())
}
