use std::collections::HashMap;
use std::fs;
use std::time::Duration;

use crate::config::ScrapeConfig;
use crate::scrape::{ListingScraper, PageFetcher, ScraperError, StopReason, CSV_HEADERS};
use crate::tests::utils::{listing_page, listing_row, sample_row, temp_output_dir};

/// Serves canned bodies by URL; a `None` body simulates a failed fetch.
struct StubFetcher {
    pages: HashMap<String, Option<String>>,
}

impl StubFetcher {
    fn new(pages: Vec<(&str, Option<String>)>) -> Self {
        Self {
            pages: pages
                .into_iter()
                .map(|(url, body)| (url.to_string(), body))
                .collect(),
        }
    }
}

impl PageFetcher for StubFetcher {
    fn fetch(&self, url: &str) -> Result<String, ScraperError> {
        match self.pages.get(url) {
            Some(Some(body)) => Ok(body.clone()),
            Some(None) => Err(ScraperError::Network(format!(
                "HTTP 500 Internal Server Error for {url}"
            ))),
            None => Err(ScraperError::Network(format!("unexpected fetch of {url}"))),
        }
    }
}

fn test_config(label: &str) -> ScrapeConfig {
    ScrapeConfig {
        base_url: "https://example.com".to_string(),
        start_url: "https://example.com/listings?page=1".to_string(),
        page_delay: Duration::ZERO,
        output_dir: temp_output_dir(label),
        ..ScrapeConfig::default()
    }
}

fn csv_lines(summary_path: &std::path::Path) -> Vec<String> {
    fs::read_to_string(summary_path)
        .expect("Failed to read CSV output")
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn traversal_follows_next_links_until_the_last_page() {
    let page1 = listing_page(&[sample_row()], Some("/listings?page=2"));
    let page2 = listing_page(&[sample_row(), sample_row()], None);
    let fetcher = StubFetcher::new(vec![
        ("https://example.com/listings?page=1", Some(page1)),
        ("https://example.com/listings?page=2", Some(page2)),
    ]);

    let config = test_config("follow");
    let scraper = ListingScraper::new(&config, fetcher).expect("Failed to build scraper");
    let summary = scraper.run().expect("Scrape run failed");

    assert_eq!(summary.stopped, StopReason::NoNextPage);
    assert_eq!(summary.pages_fetched, 2);
    assert_eq!(summary.records_written, 3);
    assert_eq!(summary.records_skipped, 0);

    let lines = csv_lines(&summary.csv_path);
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], CSV_HEADERS.join(","));
}

#[test]
fn repeated_next_url_stops_the_traversal() {
    // The page advertises a next control pointing back at itself.
    let page = listing_page(&[sample_row()], Some("/listings?page=1"));
    let fetcher = StubFetcher::new(vec![(
        "https://example.com/listings?page=1",
        Some(page),
    )]);

    let config = test_config("cycle");
    let scraper = ListingScraper::new(&config, fetcher).expect("Failed to build scraper");
    let summary = scraper.run().expect("Scrape run failed");

    assert_eq!(summary.stopped, StopReason::RepeatedUrl);
    assert_eq!(summary.pages_fetched, 1);
    assert_eq!(summary.records_written, 1);
}

#[test]
fn fetch_failure_preserves_records_from_earlier_pages() {
    let page1 = listing_page(&[sample_row()], Some("/listings?page=2"));
    let fetcher = StubFetcher::new(vec![
        ("https://example.com/listings?page=1", Some(page1)),
        ("https://example.com/listings?page=2", None),
    ]);

    let config = test_config("abort");
    let scraper = ListingScraper::new(&config, fetcher).expect("Failed to build scraper");
    let summary = scraper.run().expect("Scrape run failed");

    assert_eq!(summary.stopped, StopReason::FetchFailed);
    assert_eq!(summary.pages_fetched, 1);
    assert_eq!(summary.records_written, 1);

    // Page 1's record is flushed to disk despite the page 2 failure.
    let lines = csv_lines(&summary.csv_path);
    assert_eq!(lines.len(), 2);
    assert!(lines[1].starts_with("Taska Ceria Montessori,ABC123,2020-02-01,2023-02-01,TASKA,"));
}

#[test]
fn failed_first_fetch_still_writes_the_header_row() {
    let fetcher = StubFetcher::new(vec![("https://example.com/listings?page=1", None)]);

    let config = test_config("empty");
    let scraper = ListingScraper::new(&config, fetcher).expect("Failed to build scraper");
    let summary = scraper.run().expect("Scrape run failed");

    assert_eq!(summary.stopped, StopReason::FetchFailed);
    assert_eq!(summary.pages_fetched, 0);
    assert_eq!(summary.records_written, 0);

    let lines = csv_lines(&summary.csv_path);
    assert_eq!(lines, vec![CSV_HEADERS.join(",")]);
}

#[test]
fn skipped_records_are_counted_but_not_written() {
    let bogus = listing_row(
        "No. Pendaftaran : X-1 (Tarikh Tempoh : 01.01.2022 - 01.01.2025) - TASKA",
        "TASKA ATLANTIS",
        &["1 OCEAN DRIVE,", "DEEP END,", "00000 NOWHERE, Atlantis"],
        "00-000 0000",
        "atlantis@example.com",
        None,
    );
    let page = listing_page(&[bogus, sample_row()], None);
    let fetcher = StubFetcher::new(vec![(
        "https://example.com/listings?page=1",
        Some(page),
    )]);

    let config = test_config("skip");
    let scraper = ListingScraper::new(&config, fetcher).expect("Failed to build scraper");
    let summary = scraper.run().expect("Scrape run failed");

    assert_eq!(summary.records_written, 1);
    assert_eq!(summary.records_skipped, 1);

    let lines = csv_lines(&summary.csv_path);
    assert_eq!(lines.len(), 2);
}
