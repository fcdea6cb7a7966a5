pub mod json_line_sink;
pub mod record_sink;
pub mod record_sink_error;
pub mod structured_log_sink;
