// src/config.rs

use std::path::PathBuf;
use std::time::Duration;

/// Registry front door; relative next-page links resolve against this.
pub const BASE_URL: &str = "https://www.jkm.gov.my";

/// First results page for registered childcare centres (inst_cat 02).
pub const START_URL: &str = "https://www.jkm.gov.my/jkm/index.php?r=portal/nursery&map_type=01&inst_cat=&id=blB5RlVjdVRpSk9kTmVNYWFkWFJjdz09&Map%5Bname%5D=&Map%5Binst_cat%5D=02&Map%5Bstate%5D=&Map%5Bdistrict%5D=";

/// States and federal territories the registry may legitimately list.
const MALAYSIAN_STATES: [&str; 16] = [
    "Johor",
    "Kedah",
    "Kelantan",
    "Melaka",
    "Negeri Sembilan",
    "Pahang",
    "Penang",
    "Perak",
    "Perlis",
    "Sabah",
    "Sarawak",
    "Selangor",
    "Terengganu",
    "Kuala Lumpur",
    "Labuan",
    "Putrajaya",
];

// Alternate and historical spellings mapped onto the canonical set.
const STATE_ALIASES: [(&str, &str); 2] = [("Malacca", "Melaka"), ("Pulau Pinang", "Penang")];

#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    pub base_url: String,
    pub start_url: String,
    pub page_delay: Duration,
    pub output_dir: PathBuf,
    pub valid_states: Vec<String>,
    pub state_aliases: Vec<(String, String)>,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            start_url: START_URL.to_string(),
            page_delay: Duration::from_secs(3),
            output_dir: PathBuf::from("."),
            valid_states: MALAYSIAN_STATES.iter().map(|s| s.to_string()).collect(),
            state_aliases: STATE_ALIASES
                .iter()
                .map(|(alias, canonical)| (alias.to_string(), canonical.to_string()))
                .collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SqlConfig {
    pub table_name: String,
    pub business_category: String,
    pub output_path: PathBuf,
}

impl Default for SqlConfig {
    fn default() -> Self {
        Self {
            table_name: "kindergartens".to_string(),
            business_category: "taska".to_string(),
            output_path: PathBuf::from("insert_statements.sql"),
        }
    }
}
