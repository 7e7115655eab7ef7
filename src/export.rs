// src/export.rs
// =============================================================================
// Formats link records as text.
//
// These are the export buttons of a link scraper:
// - urls: one clean URL per line
// - domain-path: "example.com/some/page" per line, handy for comparing lists
// - csv: Text,URL,Domain with every field quoted
// - tsv: tab separated, pastes straight into a spreadsheet
// - text: "Link text: example.com/some/page" per line, for reading
// - json: the full records, pretty printed
// =============================================================================

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::normalize::LinkRecord;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Format {
    /// One canonical URL per line
    #[default]
    Urls,
    /// Domain and path per line, no scheme or query
    DomainPath,
    /// Quoted CSV with a Text,URL,Domain header
    Csv,
    /// Tab-separated text, URL and domain
    Tsv,
    /// Link text and domain+path per line, e.g. "Docs: example.com/docs"
    Text,
    /// Pretty-printed JSON array of records
    Json,
}

/// Renders records in the given format.
///
/// The result has no trailing newline. Only JSON can fail.
pub fn render(records: &[LinkRecord], format: Format) -> serde_json::Result<String> {
    let output = match format {
        Format::Urls => join_lines(records.iter().map(|r| r.link.url.clone())),
        Format::DomainPath => join_lines(records.iter().map(|r| r.link.domain_path.clone())),
        Format::Csv => {
            let header = std::iter::once("Text,URL,Domain".to_string());
            let rows = records.iter().map(|r| {
                [r.text.as_str(), r.link.url.as_str(), r.link.domain.as_str()]
                    .iter()
                    .map(|field| csv_field(field))
                    .collect::<Vec<_>>()
                    .join(",")
            });
            join_lines(header.chain(rows))
        }
        Format::Tsv => join_lines(records.iter().map(|r| {
            format!("{}\t{}\t{}", tsv_field(&r.text), r.link.url, r.link.domain)
        })),
        Format::Text => join_lines(
            records
                .iter()
                .map(|r| format!("{}: {}", r.text, r.link.domain_path)),
        ),
        Format::Json => serde_json::to_string_pretty(records)?,
    };

    Ok(output)
}

fn join_lines(lines: impl Iterator<Item = String>) -> String {
    lines.collect::<Vec<_>>().join("\n")
}

// Wraps a field in quotes, doubling any quotes inside it
fn csv_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

// Tabs and line breaks would split the row, so they become spaces
fn tsv_field(value: &str) -> String {
    value.replace(['\t', '\r', '\n'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::RawAnchor;
    use crate::normalize::normalize;

    fn records() -> Vec<LinkRecord> {
        normalize(&[
            RawAnchor::new("https://www.Example.com/Docs/?utm_source=x", "Say \"hi\"", ""),
            RawAnchor::new("https://rust-lang.org", "Multi\tline\ntext", ""),
        ])
    }

    #[test]
    fn test_urls() {
        let out = render(&records(), Format::Urls).unwrap();
        assert_eq!(out, "https://www.example.com/Docs/\nhttps://rust-lang.org/");
    }

    #[test]
    fn test_domain_path() {
        let out = render(&records(), Format::DomainPath).unwrap();
        assert_eq!(out, "example.com/Docs\nrust-lang.org");
    }

    #[test]
    fn test_csv_quotes_everything() {
        let out = render(&records(), Format::Csv).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Text,URL,Domain");
        assert_eq!(
            lines[1],
            r#""Say ""hi""","https://www.example.com/Docs/","example.com""#
        );
    }

    #[test]
    fn test_tsv_keeps_one_row_per_record() {
        let out = render(&records(), Format::Tsv).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "Multi line text\thttps://rust-lang.org/\trust-lang.org");
    }

    #[test]
    fn test_text_pairs_link_text_with_domain_path() {
        let out = render(&records(), Format::Text).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Say \"hi\": example.com/Docs");
        assert_eq!(render(&[], Format::Text).unwrap(), "");
    }

    #[test]
    fn test_json_round_trips_records() {
        let records = records();
        let out = render(&records, Format::Json).unwrap();
        let back: Vec<LinkRecord> = serde_json::from_str(&out).unwrap();
        assert_eq!(back, records);
    }

    #[test]
    fn test_empty_exports() {
        assert_eq!(render(&[], Format::Urls).unwrap(), "");
        assert_eq!(render(&[], Format::Csv).unwrap(), "Text,URL,Domain");
        assert_eq!(render(&[], Format::Json).unwrap(), "[]");
    }
}
