use std::collections::BTreeMap;
use std::time::Duration;

use super::*;
use crate::aggregate::Breakdown;
use crate::counter::LineCounts;
use crate::scanner::WalkSummary;

#[test]
fn output_format_from_str() {
    assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
    assert_eq!("TXT".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
    assert_eq!("Json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
}

#[test]
fn output_format_rejects_unknown() {
    let err = "xml".parse::<OutputFormat>().unwrap_err();
    assert_eq!(err, "Unknown output format: xml");
}

#[test]
fn output_format_defaults_to_text() {
    assert_eq!(OutputFormat::default(), OutputFormat::Text);
}

#[test]
fn formatter_matches_format() {
    let report = AnalysisReport {
        grand_total: LineCounts::default(),
        files: 0,
        unreadable: 0,
        walk: WalkSummary::default(),
        breakdown: Breakdown::ByType(BTreeMap::new()),
        elapsed: Duration::from_millis(3),
    };

    let text = OutputFormat::Text.formatter().format(&report).unwrap();
    assert!(text.starts_with("Analysis completed in 3 ms"));

    let json = OutputFormat::Json.formatter().format(&report).unwrap();
    assert!(json.trim_start().starts_with('{'));
}
