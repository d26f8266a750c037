mod extract;
mod models;
mod scrape;
mod scrape_error;

pub use extract::{PageExtraction, RecordExtractor};
pub use models::{Listing, RegistrationInfo, CSV_HEADERS};
pub use scrape::{HttpFetcher, ListingScraper, PageFetcher, ScrapeSummary, StopReason};
pub use scrape_error::ScraperError;
