use serde::Serialize;

/// CSV column order shared by the scraper output and the SQL generator input.
pub const CSV_HEADERS: [&str; 14] = [
    "Name",
    "Registration Number",
    "Valid From",
    "Valid Until",
    "Business Type",
    "Address Line 1",
    "Address Line 2",
    "Postcode",
    "City",
    "State",
    "Phone",
    "Email",
    "GPS Coordinate",
    "Google Map",
];

/// One childcare business listing, flattened and normalized for CSV emission.
/// Field order matches the CSV column order; the serde renames carry the
/// exact header names.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Listing {
    #[serde(rename = "Name")]
    pub name: String,
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
    pub state: String,
    #[serde(rename = "Phone")]
    pub phone: Option<String>,
    #[serde(rename = "Email")]
    pub email: Option<String>,
    #[serde(rename = "GPS Coordinate")]
    pub gps_coordinate: Option<String>,
    #[serde(rename = "Google Map")]
    pub google_map: Option<String>,
}

/// Outcome of matching a row's free-text registration blurb.
///
/// `Unrecognized` keeps the record alive with empty registration fields;
/// the mismatch is logged where it is produced.
#[derive(Debug, Clone, PartialEq)]
pub enum RegistrationInfo {
    Matched {
        registration_number: String,
        valid_from: String,
        valid_until: String,
        business_type: String,
    },
    Unrecognized,
}
