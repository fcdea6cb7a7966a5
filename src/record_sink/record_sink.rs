use crate::record::request_record::RequestRecord;
use crate::record_sink::record_sink_error::RecordSinkError;

#[cfg_attr(test, mockall::automock)]
pub trait RecordSink: Send + Sync {
    fn emit(&self, record: &RequestRecord) -> Result<(), RecordSinkError>;
}
