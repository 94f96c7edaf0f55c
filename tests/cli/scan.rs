use anyhow::Result;
use calamine::{Reader, Xlsx, open_workbook};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::CliTest;

/// Read every cell of the first sheet as text.
fn read_sheet(test: &CliTest, path: &str) -> Result<Vec<Vec<String>>> {
    let mut workbook: Xlsx<_> = open_workbook(test.root().join(path))?;
    let range = workbook.worksheet_range("SOPs")?;
    Ok(range
        .rows()
        .map(|row| row.iter().map(|c| c.to_string()).collect())
        .collect())
}

fn sample_tree() -> Result<CliTest> {
    let test = CliTest::new()?;
    test.write_docx(
        "sops/1200-Finance/1201 - Budget Review.docx",
        &["Effective 3/4/21", "1/1/2020 supersedes 1/1/2019"],
        &[],
    )?;
    test.write_docx(
        "sops/1200-Finance/Archive/1202-Old Budget.docx",
        &["Effective 1/1/2015"],
        &[],
    )?;
    test.write_docx(
        "sops/1300 - Human Resources/1301a HR - Onboarding Policy.docx",
        &["Purpose"],
        &["Rev. 7/15/22"],
    )?;
    test.write_docx("sops/1300 - Human Resources/notes.docx", &["5/5/2020"], &[])?;
    test.write_file("sops/1300 - Human Resources/1302-Broken.docx", "not a docx")?;
    test.write_file("sops/1300 - Human Resources/1303-Checklist.pdf", "%PDF")?;
    Ok(test)
}

#[test]
fn test_scan_writes_spreadsheet() -> Result<()> {
    let test = sample_tree()?;

    let output = test
        .scan_command()
        .args(["--root", "sops", "--output", "SOPS.xlsx", "--pattern"])
        .arg(r"^\d{4}\w?\s?\w*\s?-.+")
        .output()?;

    let stdout = String::from_utf8(output.stdout)?;
    let stderr = String::from_utf8(output.stderr)?;
    assert!(output.status.success(), "stderr: {}", stderr);
    assert!(
        stdout.contains("Indexed 3 SOP documents"),
        "stdout: {}",
        stdout
    );

    let broken = test
        .root()
        .join("sops/1300 - Human Resources/1302-Broken.docx");
    assert!(
        stderr.contains(&format!("warning: Could not open file {}", broken.display())),
        "stderr: {}",
        stderr
    );

    let budget = test
        .root()
        .join("sops/1200-Finance/1201 - Budget Review.docx");
    let onboarding = test
        .root()
        .join("sops/1300 - Human Resources/1301a HR - Onboarding Policy.docx");

    assert_eq!(
        read_sheet(&test, "SOPS.xlsx")?,
        vec![
            vec![
                "Department".to_string(),
                "Number".to_string(),
                "File Name/Title".to_string(),
                "Link to documents".to_string(),
                "Last Revision Date".to_string(),
            ],
            vec![
                "Finance".to_string(),
                "1201".to_string(),
                "Budget Review".to_string(),
                budget.display().to_string(),
                "2021-03-04".to_string(),
            ],
            vec![
                "Human Resources".to_string(),
                "1301a".to_string(),
                "Onboarding Policy".to_string(),
                onboarding.display().to_string(),
                "2022-07-15".to_string(),
            ],
            vec![
                "Human Resources".to_string(),
                "1302".to_string(),
                "Broken".to_string(),
                broken.display().to_string(),
                String::new(),
            ],
        ]
    );

    Ok(())
}

#[test]
fn test_default_pattern_requires_hyphen_after_code() -> Result<()> {
    let test = sample_tree()?;

    let output = test.scan_command().args(["--root", "sops", "--json"]).output()?;
    assert!(output.status.success());

    let records: Value = serde_json::from_slice(&output.stdout)?;
    let numbers: Vec<&str> = records
        .as_array()
        .map(|a| a.iter().filter_map(|r| r["number"].as_str()).collect())
        .unwrap_or_default();
    assert_eq!(numbers, vec!["1201", "1302"]);
    assert!(test.root().join("SOPS.xlsx").exists());

    Ok(())
}

#[test]
fn test_json_output_fields() -> Result<()> {
    let test = CliTest::new()?;
    test.write_docx(
        "sops/4000-Quality/4001 - Inspection.docx",
        &["Approved 8/1/2023", "Created 2/14/2019"],
        &[],
    )?;

    let output = test
        .scan_command()
        .args(["--root", "sops", "--json", "--policy", "last-seen"])
        .output()?;
    assert!(output.status.success());

    let records: Value = serde_json::from_slice(&output.stdout)?;
    let record = &records[0];
    assert_eq!(record["department"], "Quality");
    assert_eq!(record["number"], "4001");
    assert_eq!(record["title"], "Inspection");
    assert_eq!(record["lastRevisionDate"], "2019-02-14");
    assert_eq!(record["dateStatus"], "body");

    let output = test
        .scan_command()
        .args(["--root", "sops", "--json"])
        .output()?;
    let records: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(records[0]["lastRevisionDate"], "2023-08-01");

    Ok(())
}

#[test]
fn test_root_from_environment() -> Result<()> {
    let test = CliTest::new()?;
    test.write_docx("docs/1200-Finance/1201-Budget.docx", &["3/4/2021"], &[])?;

    let output = test
        .scan_command()
        .env("SOPSCAN_ROOT", test.root().join("docs"))
        .env("SOPSCAN_OUTPUT", "index.xlsx")
        .output()?;

    assert!(output.status.success());
    assert!(test.root().join("index.xlsx").exists());

    Ok(())
}

#[test]
fn test_root_from_config_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_docx("docs/1200-Finance/1201-Budget.docx", &["3/4/2021"], &[])?;
    test.write_file(
        ".sopscanrc.json",
        r#"{ "root": "docs", "output": "out.xlsx", "sheetName": "Procedures" }"#,
    )?;

    let output = test.scan_command().output()?;
    assert!(output.status.success());

    let mut workbook: Xlsx<_> = open_workbook(test.root().join("out.xlsx"))?;
    assert_eq!(workbook.sheet_names(), vec!["Procedures".to_string()]);

    Ok(())
}

#[test]
fn test_empty_root_exits_with_failure() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("sops/1200-Finance/readme.txt", "nothing here")?;

    let output = test.scan_command().args(["--root", "sops"]).output()?;

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("No SOP documents found"), "stdout: {}", stdout);
    assert!(test.root().join("SOPS.xlsx").exists());

    Ok(())
}

#[test]
fn test_missing_root_is_an_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.scan_command().args(["--root", "missing"]).output()?;

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr)?;
    assert!(
        stderr.starts_with("Error: Root directory does not exist"),
        "stderr: {}",
        stderr
    );

    Ok(())
}

#[test]
fn test_shallow_file_is_reported() -> Result<()> {
    let test = CliTest::new()?;
    test.write_docx("sops/1201-Loose.docx", &["3/4/2021"], &[])?;
    test.write_docx("sops/1200-Finance/1202-Budget.docx", &["3/4/2021"], &[])?;

    let output = test.scan_command().args(["--root", "sops"]).output()?;

    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("1201-Loose.docx"), "stderr: {}", stderr);
    assert!(stderr.contains("department folder"), "stderr: {}", stderr);

    Ok(())
}

#[test]
fn test_invalid_pattern_is_an_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("sops/.keep", "")?;

    let output = test
        .scan_command()
        .args(["--root", "sops", "--pattern", "(unclosed"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("filePattern"), "stderr: {}", stderr);

    Ok(())
}
