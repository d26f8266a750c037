// gen.rs
//
// Turns a scraped CSV into INSERT statements for the kindergartens table.
// The SQL is text only; nothing here touches a database.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use chrono::Local;

use crate::config::SqlConfig;
use crate::sqlgen::gen_error::GenError;
use crate::sqlgen::models::CsvListing;

const INSERT_COLUMNS: &str = "name, jkm_registration_no, jkm_valid_from, jkm_valid_to, business_type, address_line_1, address_line_2, postcode, city, state, phone_number, email, gps_coordinates, google_maps_link, created_at, updated_at, business_category";

/// Prompt for a CSV path on stdin, then write one INSERT per row to the
/// configured output file.
pub fn run() -> Result<(), GenError> {
    println!("Please enter the path to the CSV file:");
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    let csv_path = line.trim();

    let config = SqlConfig::default();
    let statements = generate_inserts(Path::new(csv_path), &config)?;

    let mut file = File::create(&config.output_path)?;
    for sql in &statements {
        writeln!(file, "{sql}")?;
    }

    println!(
        "SQL insert statements generated and saved to '{}'.",
        config.output_path.display()
    );
    Ok(())
}

/// One statement per CSV row. The created_at/updated_at timestamp is
/// captured once here and stamped identically on every row of the run.
pub fn generate_inserts(csv_path: &Path, config: &SqlConfig) -> Result<Vec<String>, GenError> {
    let run_timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

    let mut reader = csv::Reader::from_path(csv_path)?;
    let mut statements = Vec::new();
    for row in reader.deserialize() {
        let row: CsvListing = row?;
        statements.push(render_insert(&row, config, &run_timestamp));
    }

    Ok(statements)
}

/// Absent values become the unquoted literal NULL; present values are
/// single-quoted with internal single quotes doubled.
pub fn escape_sql(value: Option<&str>) -> String {
    match value {
        Some(v) => format!("'{}'", v.replace('\'', "''")),
        None => "NULL".to_string(),
    }
}

fn render_insert(row: &CsvListing, config: &SqlConfig, timestamp: &str) -> String {
    let values = [
        escape_sql(row.name.as_deref()),
        escape_sql(row.registration_number.as_deref()),
        escape_sql(row.valid_from.as_deref()),
        escape_sql(row.valid_until.as_deref()),
        escape_sql(row.business_type.as_deref()),
        escape_sql(row.address_line_1.as_deref()),
        escape_sql(row.address_line_2.as_deref()),
        escape_sql(row.postcode.as_deref()),
        escape_sql(row.city.as_deref()),
        escape_sql(row.state.as_deref()),
        escape_sql(row.phone.as_deref()),
        escape_sql(row.email.as_deref()),
        escape_sql(row.gps_coordinate.as_deref()),
        escape_sql(row.google_map.as_deref()),
        escape_sql(Some(timestamp)),
        escape_sql(Some(timestamp)),
        escape_sql(Some(&config.business_category)),
    ];

    format!(
        "INSERT INTO {} ({})\nVALUES ({});",
        config.table_name,
        INSERT_COLUMNS,
        values.join(", ")
    )
}
