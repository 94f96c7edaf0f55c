use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
    process::Command,
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;
use zip::{ZipWriter, write::SimpleFileOptions};

mod init;
mod scan;

const BIN_NAME: &str = "sopscan";

const WORD_NS: &str = r#"xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships""#;

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        // Stop config lookup from leaving the temp dir.
        fs::create_dir(project_dir.join(".git"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);
        self.create_parent(&file_path)?;

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    /// Write a `.docx` whose body has one single-cell table per entry of
    /// `body`, and whose first-section footer has one per entry of `footer`.
    pub fn write_docx(&self, path: &str, body: &[&str], footer: &[&str]) -> Result<()> {
        let file_path = self.project_dir.join(path);
        self.create_parent(&file_path)?;

        let body_xml = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document {WORD_NS}><w:body><w:p><w:r><w:t>Standard Operating Procedure</w:t></w:r></w:p>{}<w:sectPr><w:footerReference w:type="default" r:id="rId9"/></w:sectPr></w:body></w:document>"#,
            tables_xml(body)
        );
        let footer_xml = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:ftr {WORD_NS}>{}<w:p/></w:ftr>"#,
            tables_xml(footer)
        );
        let rels_xml = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId9" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/footer" Target="footer1.xml"/></Relationships>"#;

        let file = fs::File::create(&file_path)
            .with_context(|| format!("Failed to create file: {}", file_path.display()))?;
        let mut zip = ZipWriter::new(file);
        let parts = [
            ("word/document.xml", body_xml.as_str()),
            ("word/_rels/document.xml.rels", rels_xml),
            ("word/footer1.xml", footer_xml.as_str()),
        ];
        for (name, content) in parts {
            zip.start_file(name, SimpleFileOptions::default())?;
            zip.write_all(content.as_bytes())?;
        }
        zip.finish()?;

        Ok(())
    }

    fn create_parent(&self, file_path: &Path) -> Result<()> {
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }
        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn scan_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("scan");
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }
}

fn tables_xml(paragraphs: &[&str]) -> String {
    paragraphs
        .iter()
        .map(|text| {
            format!(
                r#"<w:tbl><w:tr><w:tc><w:p><w:r><w:t xml:space="preserve">{text}</w:t></w:r></w:p></w:tc></w:tr></w:tbl>"#
            )
        })
        .collect()
}
