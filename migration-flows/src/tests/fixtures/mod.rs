use std::fs;
use std::path::Path;

/// Load test HTML fixture by name
pub fn load_html_fixture(fixture_name: &str) -> String {
    let path = Path::new("src/tests/fixtures").join(format!("{}.html", fixture_name));
    fs::read_to_string(path)
        .unwrap_or_else(|_| panic!("Failed to load test fixture: {}", fixture_name))
}

/// Listing page with one anchor per (title, href) pair.
pub fn listing_html(anchors: &[(&str, &str)]) -> String {
    let body: String = anchors
        .iter()
        .map(|(text, href)| format!("<a href=\"{}\">{}</a>\n", href, text))
        .collect();
    format!("<html><body>\n{}</body></html>", body)
}

/// A small but real xlsx workbook.
pub fn xlsx_bytes() -> Vec<u8> {
    let mut workbook = rust_xlsxwriter::Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.write_string(0, 0, "Current residence").unwrap();
    worksheet.write_string(0, 1, "Alabama").unwrap();
    worksheet.write_string(1, 0, "Alabama").unwrap();
    worksheet.write_number(1, 1, 4_123_456.0).unwrap();
    workbook.save_to_buffer().unwrap()
}
