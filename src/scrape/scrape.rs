// scrape.rs

use std::path::PathBuf;
use std::time::Duration;

use chrono::Local;
use reqwest::blocking::Client;
use scraper::Html;

use crate::config::ScrapeConfig;
use crate::scrape::models::CSV_HEADERS;
use crate::scrape::RecordExtractor;
use crate::scrape::ScraperError;

const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0 Safari/537.36";

/// Fetches the HTML body of one listing page. A non-success HTTP status is
/// an error; the traversal treats any fetch error as fatal for the run.
pub trait PageFetcher {
    fn fetch(&self, url: &str) -> Result<String, ScraperError>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, ScraperError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        Ok(Self { client })
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, ScraperError> {
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ScraperError::Network(format!("HTTP {status} for {url}")));
        }

        resp.text().map_err(|e| ScraperError::Network(e.to_string()))
    }
}

/// Why the traversal stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    NoNextPage,
    RepeatedUrl,
    FetchFailed,
}

#[derive(Debug)]
pub struct ScrapeSummary {
    pub pages_fetched: usize,
    pub records_written: usize,
    pub records_skipped: usize,
    pub stopped: StopReason,
    pub csv_path: PathBuf,
}

// Traversal states. Done and Failed are terminal; both flush the CSV.
enum Step {
    Fetch { url: String, page: usize },
    Parse { url: String, page: usize, body: String },
    Delay { next_url: String, page: usize },
    Done(StopReason),
    Failed,
}

pub struct ListingScraper<'a, F> {
    config: &'a ScrapeConfig,
    fetcher: F,
    extractor: RecordExtractor,
}

impl<'a, F: PageFetcher> ListingScraper<'a, F> {
    pub fn new(config: &'a ScrapeConfig, fetcher: F) -> Result<Self, ScraperError> {
        let extractor = RecordExtractor::new(config)?;
        Ok(Self {
            config,
            fetcher,
            extractor,
        })
    }

    /// Walk the paginated listing, appending records to a timestamped CSV.
    /// Records already written survive a mid-run fetch failure; the summary
    /// reports how and where the traversal stopped.
    pub fn run(&self) -> Result<ScrapeSummary, ScraperError> {
        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        let csv_path = self
            .config
            .output_dir
            .join(format!("tadika_listings_{timestamp}.csv"));

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&csv_path)
            .map_err(|e| ScraperError::Csv(e.to_string()))?;
        writer
            .write_record(CSV_HEADERS)
            .map_err(|e| ScraperError::Csv(e.to_string()))?;

        let mut pages_fetched = 0;
        let mut records_written = 0;
        let mut records_skipped = 0;

        let mut step = Step::Fetch {
            url: self.config.start_url.clone(),
            page: 1,
        };

        let stopped = loop {
            step = match step {
                Step::Fetch { url, page } => {
                    eprintln!("📄 Scraping page {page}: {url}");
                    match self.fetcher.fetch(&url) {
                        Ok(body) => Step::Parse { url, page, body },
                        Err(e) => {
                            eprintln!("⚠️ Failed to retrieve page {page}: {e}");
                            Step::Failed
                        }
                    }
                }

                Step::Parse { url, page, body } => {
                    let html = Html::parse_document(&body);
                    let extraction = self.extractor.extract_listings(&html);
                    pages_fetched += 1;
                    records_skipped += extraction.skipped;

                    for listing in &extraction.listings {
                        writer
                            .serialize(listing)
                            .map_err(|e| ScraperError::Csv(e.to_string()))?;
                        records_written += 1;
                    }
                    eprintln!("✅ Page {page} parsed ({} records)", extraction.listings.len());

                    match self.extractor.next_page_url(&html) {
                        None => Step::Done(StopReason::NoNextPage),
                        Some(next_url) if next_url == url => {
                            eprintln!(
                                "🔁 Next page URL is the same as the current URL, stopping to avoid a loop"
                            );
                            Step::Done(StopReason::RepeatedUrl)
                        }
                        Some(next_url) => Step::Delay { next_url, page },
                    }
                }

                Step::Delay { next_url, page } => {
                    std::thread::sleep(self.config.page_delay);
                    Step::Fetch {
                        url: next_url,
                        page: page + 1,
                    }
                }

                Step::Done(reason) => break reason,
                Step::Failed => break StopReason::FetchFailed,
            };
        };

        writer.flush().map_err(|e| ScraperError::Csv(e.to_string()))?;

        Ok(ScrapeSummary {
            pages_fetched,
            records_written,
            records_skipped,
            stopped,
            csv_path,
        })
    }
}
