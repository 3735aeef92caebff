// Integration tests for writing reports to disk

use chrono::{TimeZone, Utc};
use lexcolor::lexer::tokenize;
use lexcolor::report::{write_reports, ReportError, ReportFormat};
use std::fs;

const VALID_PROGRAM: &str = include_str!("fixtures/valid_program.cs");

#[test]
fn test_write_all_formats() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("reports").join("nested");
    let result = tokenize(VALID_PROGRAM);
    let at = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();

    let written = write_reports(&result, "valid_program.cs", &ReportFormat::ALL, &out_dir, at).unwrap();

    let names: Vec<String> = written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        vec![
            "lexical_report.html",
            "lexical_analysis.json",
            "token_report.csv",
            "summary.txt",
        ]
    );
    for path in &written {
        assert!(path.starts_with(&out_dir));
        assert!(fs::metadata(path).unwrap().len() > 0);
    }

    let text = fs::read_to_string(out_dir.join("summary.txt")).unwrap();
    assert!(text.starts_with("TOKEN COUNT SUMMARY\n"));
    assert!(text.contains("| Reserved Words | using |"));

    let csv = fs::read_to_string(out_dir.join("token_report.csv")).unwrap();
    assert!(csv.starts_with("\"Category\",\"Token\",\"Count\",\"Relative Frequency\"\n"));
    let total: usize = result.summary.iter().map(|s| s.count).sum();
    assert!(csv.ends_with(&format!("\n\n\"TOTAL\",\"\",{},\"100.00%\"\n", total)));

    let html = fs::read_to_string(out_dir.join("lexical_report.html")).unwrap();
    assert!(html.contains("<code>valid_program.cs</code>"));
    assert!(html.contains("Generated 2024-03-01 09:00:00 UTC"));

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out_dir.join("lexical_analysis.json")).unwrap())
            .unwrap();
    assert_eq!(json["metadata"]["generatedAt"], "2024-03-01T09:00:00Z");
    assert_eq!(json["metadata"]["errorTokens"], 0);
    assert_eq!(json["statistics"]["totalTokens"], total);
    assert_eq!(json["mostFrequentTokens"].as_array().map(Vec::len), Some(10));
}

#[test]
fn test_write_selected_formats_only() {
    let dir = tempfile::tempdir().unwrap();
    let result = tokenize("a = 1;\n");

    let written = write_reports(
        &result,
        "a.cs",
        &[ReportFormat::Csv],
        dir.path(),
        Utc::now(),
    )
    .unwrap();

    assert_eq!(written, vec![dir.path().join("token_report.csv")]);
    assert!(!dir.path().join("summary.txt").exists());
}

#[test]
fn test_unwritable_directory_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "not a directory").unwrap();

    let result = tokenize("a = 1;\n");
    let err = write_reports(
        &result,
        "a.cs",
        &ReportFormat::ALL,
        &blocker.join("out"),
        Utc::now(),
    )
    .unwrap_err();

    assert!(matches!(err, ReportError::CreateDir { .. }));
    assert!(err.to_string().starts_with("cannot create report directory"));
}
