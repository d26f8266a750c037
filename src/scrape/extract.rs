// extract.rs
//
// The one component coupled to the registry's markup. Every CSS selector
// and text pattern the site dictates lives here.

use chrono::NaiveDate;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::config::ScrapeConfig;
use crate::scrape::models::{Listing, RegistrationInfo};
use crate::scrape::scrape_error::ScraperError;

/// Records extracted from one page, plus the count of rows dropped by the
/// state gate.
pub struct PageExtraction {
    pub listings: Vec<Listing>,
    pub skipped: usize,
}

pub struct RecordExtractor {
    base_url: Url,
    valid_states: Vec<String>,
    state_aliases: Vec<(String, String)>,
    row_selector: Selector,
    name_selector: Selector,
    address_selector: Selector,
    contact_selector: Selector,
    anchor_selector: Selector,
    registration_selector: Selector,
    next_page_selector: Selector,
    registration_re: Regex,
    gps_re: Regex,
}

impl RecordExtractor {
    pub fn new(config: &ScrapeConfig) -> Result<Self, ScraperError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            ScraperError::Config(format!("invalid base URL {}: {e}", config.base_url))
        })?;

        Ok(Self {
            base_url,
            valid_states: config.valid_states.clone(),
            state_aliases: config.state_aliases.clone(),
            row_selector: selector(".table.portal-map tbody tr")?,
            name_selector: selector("h5")?,
            address_selector: selector("div.col-md-6.col-xs-12 p")?,
            contact_selector: selector("div.col-md-4.col-xs-12 p")?,
            anchor_selector: selector("div a")?,
            registration_selector: selector(".col-xs-12")?,
            next_page_selector: selector("li.next a")?,
            registration_re: pattern(
                r"No\. Pendaftaran : (.+?) \(Tarikh Tempoh : (\d{2}\.\d{2}\.\d{4}) - (\d{2}\.\d{2}\.\d{4})\) - (\w+)",
            )?,
            gps_re: pattern(r"q=([-.\d]+),([-.\d]+)")?,
        })
    }

    /// Extract every listing on the page, dropping rows that fail the
    /// state gate.
    pub fn extract_listings(&self, html: &Html) -> PageExtraction {
        let mut listings = Vec::new();
        let mut skipped = 0;

        for row in html.select(&self.row_selector) {
            match self.extract_row(row) {
                Some(listing) => listings.push(listing),
                None => skipped += 1,
            }
        }

        PageExtraction { listings, skipped }
    }

    /// Resolve the pagination control's link against the base URL.
    /// `None` means the traversal has reached the last page.
    pub fn next_page_url(&self, html: &Html) -> Option<String> {
        let href = html
            .select(&self.next_page_selector)
            .next()?
            .value()
            .attr("href")?;

        match self.base_url.join(href) {
            Ok(url) => Some(url.to_string()),
            Err(e) => {
                eprintln!("⚠️ Ignoring malformed next page link {href}: {e}");
                None
            }
        }
    }

    fn extract_row(&self, row: ElementRef<'_>) -> Option<Listing> {
        let name = row
            .select(&self.name_selector)
            .next()
            .map(|el| title_case(&element_text(el)))
            .unwrap_or_default();

        // Address paragraphs render one line per text node, split by <br>.
        let address_lines: Vec<String> = row
            .select(&self.address_selector)
            .flat_map(|p| p.text())
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        let address_line_1 = address_lines
            .first()
            .map(|line| chomp_comma(&title_case(line)));
        let address_line_2 = address_lines
            .get(1)
            .map(|line| chomp_comma(&title_case(line)));

        let (postcode, city, state) = match address_lines.last() {
            Some(line) => self.split_location(line),
            None => (None, None, None),
        };

        // Data-quality gate: a record whose state is not a known Malaysian
        // state (or has no state segment at all) is dropped, not emitted.
        let state = match state {
            Some(s) if self.valid_states.contains(&s) => s,
            other => {
                eprintln!(
                    "⚠️ Skipping record with invalid state: {}",
                    other.unwrap_or_default()
                );
                return None;
            }
        };

        let phone = row
            .select(&self.contact_selector)
            .map(element_text)
            .find(|text| text.contains("Tel"))
            .map(|text| text.chars().filter(|c| c.is_ascii_digit()).collect());

        let email = row
            .select(&self.contact_selector)
            .map(element_text)
            .find(|text| text.contains("Emel"))
            .map(|text| text.replace("Emel : ", "").trim().to_string());

        let google_map = row
            .select(&self.anchor_selector)
            .filter_map(|a| a.value().attr("href"))
            .find(|href| href.contains("maps.google.com"))
            .map(str::to_string);
        let gps_coordinate = google_map
            .as_deref()
            .and_then(|link| self.gps_coordinates(link));

        let registration_text = row
            .select(&self.registration_selector)
            .next()
            .map(element_text)
            .unwrap_or_default();

        let (registration_number, valid_from, valid_until, business_type) =
            match self.registration_info(&registration_text) {
                RegistrationInfo::Matched {
                    registration_number,
                    valid_from,
                    valid_until,
                    business_type,
                } => (
                    Some(registration_number),
                    Some(valid_from),
                    Some(valid_until),
                    Some(business_type),
                ),
                RegistrationInfo::Unrecognized => (None, None, None, None),
            };

        Some(Listing {
            name,
            registration_number,
            valid_from,
            valid_until,
            business_type,
            address_line_1,
            address_line_2,
            postcode,
            city,
            state,
            phone,
            email,
            gps_coordinate,
            google_map,
        })
    }

    /// Match the free-text registration blurb. A blurb that fails the
    /// pattern (or carries an impossible date) degrades to `Unrecognized`;
    /// the caller still emits the record with empty registration fields.
    pub fn registration_info(&self, text: &str) -> RegistrationInfo {
        let flattened = text.split_whitespace().collect::<Vec<_>>().join(" ");

        if let Some(caps) = self.registration_re.captures(&flattened) {
            if let Some((valid_from, valid_until)) = iso_date(&caps[2]).zip(iso_date(&caps[3])) {
                return RegistrationInfo::Matched {
                    registration_number: caps[1].trim().to_string(),
                    valid_from,
                    valid_until,
                    business_type: caps[4].to_string(),
                };
            }
        }

        eprintln!("⚠️ Unknown registration: {flattened}");
        RegistrationInfo::Unrecognized
    }

    /// The last address line reads `<postcode> <city...>, <state>`.
    fn split_location(
        &self,
        line: &str,
    ) -> (Option<String>, Option<String>, Option<String>) {
        let segments: Vec<&str> = line.split(',').collect();

        let mut tokens = segments[0].trim().split_whitespace();
        let postcode = tokens.next().map(str::to_string);
        let city_tokens: Vec<&str> = tokens.collect();
        let city = if city_tokens.is_empty() {
            None
        } else {
            Some(city_tokens.join(" "))
        };

        let state = segments
            .get(1)
            .map(|segment| self.canonical_state(&title_case(&segment.trim().replace('.', ""))));

        (postcode, city, state)
    }

    fn canonical_state(&self, state: &str) -> String {
        for (alias, canonical) in &self.state_aliases {
            if alias == state {
                return canonical.clone();
            }
        }
        state.to_string()
    }

    fn gps_coordinates(&self, link: &str) -> Option<String> {
        let caps = self.gps_re.captures(link)?;
        Some(format!("{}, {}", &caps[1], &caps[2]))
    }
}

fn selector(css: &str) -> Result<Selector, ScraperError> {
    Selector::parse(css).map_err(|e| ScraperError::HtmlParse(format!("selector `{css}`: {e}")))
}

fn pattern(re: &str) -> Result<Regex, ScraperError> {
    Regex::new(re).map_err(|e| ScraperError::Pattern(e.to_string()))
}

fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Uppercase the first letter of each word, lowercase the rest.
fn title_case(raw: &str) -> String {
    raw.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

fn chomp_comma(value: &str) -> String {
    value.strip_suffix(',').unwrap_or(value).to_string()
}

fn iso_date(raw: &str) -> Option<String> {
    NaiveDate::parse_from_str(raw, "%d.%m.%Y")
        .ok()
        .map(|date| date.format("%Y-%m-%d").to_string())
}
