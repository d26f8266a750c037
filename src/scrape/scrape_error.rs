use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum ScraperError {
    Network(String),
    Config(String),
    HtmlParse(String),
    Pattern(String),
    Csv(String),
}

impl fmt::Display for ScraperError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScraperError::Network(msg) => write!(f, "Network error: {msg}"),
            ScraperError::Config(msg) => write!(f, "Config error: {msg}"),
            ScraperError::HtmlParse(msg) => write!(f, "HTML parse error: {msg}"),
            ScraperError::Pattern(msg) => write!(f, "Pattern error: {msg}"),
            ScraperError::Csv(msg) => write!(f, "CSV error: {msg}"),
        }
    }
}

impl Error for ScraperError {}
