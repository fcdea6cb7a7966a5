#[derive(Debug, thiserror::Error)]
pub enum RecordSinkError {
    #[error("Write failed: {0}")]
    Write(#[from] std::io::Error),

    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Writer is poisoned")]
    WriterPoisoned,
}
