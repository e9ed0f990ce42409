use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store is not connected")]
    NotConnected,
    #[error("storage backend error: {0}")]
    Backend(String),
}

#[derive(Error, Debug)]
#[error("confirmation delivery failed: {0}")]
pub struct NotifyError(pub String);

#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),
    #[error("notification error: {0}")]
    Notification(#[from] NotifyError),
}

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
