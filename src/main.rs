use crate::config::ScrapeConfig;
use crate::scrape::{HttpFetcher, ListingScraper, StopReason};

mod config;
mod scrape;
mod sqlgen;

#[cfg(test)]
mod tests;

fn main() {
    // `gen-sql` converts an existing CSV; the default mode scrapes.
    if std::env::args().nth(1).as_deref() == Some("gen-sql") {
        if let Err(e) = sqlgen::run() {
            eprintln!("❌ SQL generation failed: {e}");
            std::process::exit(1);
        }
        return;
    }

    let config = ScrapeConfig::default();

    let fetcher = match HttpFetcher::new() {
        Ok(f) => f,
        Err(e) => {
            eprintln!("❌ HTTP client init failed: {e}");
            std::process::exit(1);
        }
    };

    let scraper = match ListingScraper::new(&config, fetcher) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("❌ Scraper init failed: {e}");
            std::process::exit(1);
        }
    };

    match scraper.run() {
        Ok(summary) => {
            let stopped = match summary.stopped {
                StopReason::NoNextPage => "no next page",
                StopReason::RepeatedUrl => "repeated next page URL",
                StopReason::FetchFailed => "fetch failed",
            };
            println!(
                "✅ Scrape complete ({stopped}): {} pages, {} records written, {} skipped, saved to {}",
                summary.pages_fetched,
                summary.records_written,
                summary.records_skipped,
                summary.csv_path.display()
            );
        }
        Err(e) => {
            eprintln!("❌ Scrape failed: {e}");
            std::process::exit(1);
        }
    }
}
