use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum ScrapeError {
    Network(String),
    Selector(String),
    BadLink(String),
    Xlsx(String),
}

impl fmt::Display for ScrapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScrapeError::Network(msg) => write!(f, "Network error: {msg}"),
            ScrapeError::Selector(msg) => write!(f, "Selector error: {msg}"),
            ScrapeError::BadLink(msg) => write!(f, "Bad link: {msg}"),
            ScrapeError::Xlsx(msg) => write!(f, "Spreadsheet error: {msg}"),
        }
    }
}

impl Error for ScrapeError {}
