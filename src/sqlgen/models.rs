use serde::Deserialize;

/// One row of the scraper's CSV output, keyed by header name rather than
/// position. Empty CSV fields deserialize to `None`.
#[derive(Debug, Deserialize)]
pub struct CsvListing {
    #[serde(rename = "Name")]
    pub name: Option<String>,
    #[serde(rename = "Registration Number")]
    pub registration_number: Option<String>,
    #[serde(rename = "Valid From")]
    pub valid_from: Option<String>,
    #[serde(rename = "Valid Until")]
    pub valid_until: Option<String>,
    #[serde(rename = "Business Type")]
    pub business_type: Option<String>,
    #[serde(rename = "Address Line 1")]
    pub address_line_1: Option<String>,
    #[serde(rename = "Address Line 2")]
    pub address_line_2: Option<String>,
    #[serde(rename = "Postcode")]
    pub postcode: Option<String>,
    #[serde(rename = "City")]
    pub city: Option<String>,
    #[serde(rename = "State")]
    pub state: Option<String>,
    #[serde(rename = "Phone")]
    pub phone: Option<String>,
    #[serde(rename = "Email")]
    pub email: Option<String>,
    #[serde(rename = "GPS Coordinate")]
    pub gps_coordinate: Option<String>,
    #[serde(rename = "Google Map")]
    pub google_map: Option<String>,
}
