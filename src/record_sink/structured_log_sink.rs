use std::io::Write;
use std::sync::Mutex;

use crate::record::request_record::RequestRecord;
use crate::record_sink::record_sink::RecordSink;
use crate::record_sink::record_sink_error::RecordSinkError;

/// Renders a record as a block of human-readable lines, framed by delimiter
/// lines carrying the request id, on the writer chosen at startup.
pub struct StructuredLogSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl StructuredLogSink {
    pub fn new(writer: Box<dyn Write + Send>) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    // The lock covers a single line: blocks from concurrent requests may
    // interleave, but no individual line tears.
    fn write_line(&self, line: &str) -> Result<(), RecordSinkError> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| RecordSinkError::WriterPoisoned)?;
        writer.write_all(format!("{line}\n").as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}

impl RecordSink for StructuredLogSink {
    fn emit(&self, record: &RequestRecord) -> Result<(), RecordSinkError> {
        self.write_line(&format!("## ----- New Request {} ----- ##", record.id))?;
        self.write_line(&format!(
            "{}\tRequest : \t'{} {}', {} bytes, from {}",
            record.id, record.method, record.url, record.content_length, record.ip_client
        ))?;

        self.write_line("Headers:")?;
        for (name, values) in &record.headers {
            for value in values {
                self.write_line(&format!("\t{name}: {value}"))?;
            }
        }

        if !record.body.is_empty() {
            self.write_line(&format!("{}\tBody: {}", record.id, record.body))?;
        }

        self.write_line(&format!("## ----- End Request {} ----- ##", record.id))
    }
}
