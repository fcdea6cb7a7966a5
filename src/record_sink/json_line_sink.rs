use std::io::Write;
use std::sync::Mutex;

use crate::record::request_record::RequestRecord;
use crate::record_sink::record_sink::RecordSink;
use crate::record_sink::record_sink_error::RecordSinkError;

/// Serializes each record to a single JSON line. Production wiring points this
/// at standard output; tests inject a buffer.
pub struct JsonLineSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonLineSink {
    pub fn new(writer: Box<dyn Write + Send>) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn stdout() -> Self {
        Self::new(Box::new(std::io::stdout()))
    }
}

impl RecordSink for JsonLineSink {
    fn emit(&self, record: &RequestRecord) -> Result<(), RecordSinkError> {
        // Serialize before taking the lock, then write record + newline in a
        // single call so concurrent emissions never interleave.
        let mut line = serde_json::to_string(record)?;
        line.push('\n');

        let mut writer = self
            .writer
            .lock()
            .map_err(|_| RecordSinkError::WriterPoisoned)?;
        writer.write_all(line.as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}
