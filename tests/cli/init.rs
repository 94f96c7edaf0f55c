use anyhow::Result;
use insta::assert_snapshot;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;
    assert!(output.status.success());
    assert!(String::from_utf8(output.stdout)?.contains("Created"));

    assert_snapshot!(test.read_file(".sopscanrc.json")?, @r#"
    {
      "root": "./",
      "filePattern": "^\\d{4}\\w?\\s?-.+",
      "excludeDirs": [
        "Archive"
      ],
      "extensions": [
        "docx"
      ],
      "departmentDepth": 0,
      "ignores": [],
      "output": "SOPS.xlsx",
      "sheetName": "SOPs",
      "policy": "latest"
    }
    "#);

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".sopscanrc.json", "{}")?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: .sopscanrc.json already exists
    ");

    assert_eq!(test.read_file(".sopscanrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;
    test.write_docx(
        "1200-Finance/1201 - Budget Review.docx",
        &["Effective 3/4/21"],
        &[],
    )?;

    let output = test.scan_command().output()?;
    assert!(
        output.status.success(),
        "Scan should work with initialized config. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(test.root().join("SOPS.xlsx").exists());

    Ok(())
}
