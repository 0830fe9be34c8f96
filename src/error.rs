use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("URL error: {0}")]
    UrlError(#[from] url::ParseError),
    #[error("Missing environment variable {0}")]
    MissingEnv(&'static str),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invoice id {0} exceeds the gateway maximum of 2147483647")]
    InvoiceIdOutOfRange(u32),
    #[error("User parameter {0:?} must carry the Shp_ prefix")]
    InvalidUserParam(String),
}
