use std::error::Error;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum GenError {
    Io(String),
    Csv(String),
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenError::Io(msg) => write!(f, "I/O error: {msg}"),
            GenError::Csv(msg) => write!(f, "CSV error: {msg}"),
        }
    }
}

impl Error for GenError {}

impl From<io::Error> for GenError {
    fn from(e: io::Error) -> Self {
        GenError::Io(e.to_string())
    }
}

impl From<csv::Error> for GenError {
    fn from(e: csv::Error) -> Self {
        GenError::Csv(e.to_string())
    }
}
