use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// Fresh scratch directory under the system temp dir, unique per call.
pub fn temp_output_dir(label: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "tadika_test_{label}_{}",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    std::fs::create_dir_all(&dir).expect("Failed to create temp dir");
    dir
}

/// One registry table row in the markup shape the extractor expects.
/// `address_lines` render as a single paragraph separated by <br>.
pub fn listing_row(
    registration: &str,
    name: &str,
    address_lines: &[&str],
    phone: &str,
    email: &str,
    map_href: Option<&str>,
) -> String {
    let address = address_lines.join("<br>");
    let map_anchor = map_href
        .map(|href| format!(r#"<div><a href="{href}">Lokasi</a></div>"#))
        .unwrap_or_default();

    format!(
        r#"<tr><td>
            <div class="col-xs-12">{registration}</div>
            <h5>{name}</h5>
            <div class="col-md-6 col-xs-12"><p>{address}</p></div>
            <div class="col-md-4 col-xs-12"><p>Tel : {phone}</p><p>Emel : {email}</p></div>
            {map_anchor}
        </td></tr>"#
    )
}

/// A row with every field present and well-formed.
pub fn sample_row() -> String {
    listing_row(
        "No. Pendaftaran : ABC123 (Tarikh Tempoh : 01.02.2020 - 01.02.2023) - TASKA",
        "TASKA CERIA MONTESSORI",
        &[
            "NO. 12, JALAN MAWAR 3,",
            "TAMAN MAWAR,",
            "68000 AMPANG, Selangor.",
        ],
        "03-4105 1234",
        "ceria@example.com",
        Some("https://maps.google.com/?q=3.211008,101.491105"),
    )
}

/// Wrap rows in the registry's listing table, with an optional pagination
/// "next" control.
pub fn listing_page(rows: &[String], next_href: Option<&str>) -> String {
    let pagination = next_href
        .map(|href| {
            format!(r#"<ul class="pagination"><li class="next"><a href="{href}">&gt;</a></li></ul>"#)
        })
        .unwrap_or_default();

    format!(
        r#"<html><body>
        <table class="table portal-map"><tbody>{}</tbody></table>
        {pagination}
        </body></html>"#,
        rows.concat()
    )
}
