//! `.docx` reader.
//!
//! A `.docx` file is a ZIP archive of WordprocessingML parts. The body lives in
//! `word/document.xml`. Footers are separate parts reached through the
//! relationships in `word/_rels/document.xml.rels`.

mod tables;

use std::{
    collections::HashMap,
    fs::File,
    io::{Read, Seek},
    path::Path,
};

use quick_xml::{Reader, events::Event};
use zip::ZipArchive;

use crate::core::document::{Document, DocumentError, DocumentReader, Table};
use tables::parse_part_tables;

const DOCUMENT_PART: &str = "word/document.xml";
const DOCUMENT_RELS_PART: &str = "word/_rels/document.xml.rels";

/// Reads body tables and the first section's default footer tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocxReader;

impl DocumentReader for DocxReader {
    fn read(&self, path: &Path) -> Result<Document, DocumentError> {
        let file = File::open(path)?;
        read_document(file)
    }
}

/// Parse a `.docx` archive from any seekable source.
pub fn read_document<R: Read + Seek>(source: R) -> Result<Document, DocumentError> {
    let mut archive = ZipArchive::new(source)?;

    let document_xml = read_part(&mut archive, DOCUMENT_PART)?
        .ok_or_else(|| DocumentError::MissingPart(DOCUMENT_PART.to_string()))?;
    let body = parse_part_tables(&document_xml, DOCUMENT_PART)?;

    let footer = match body.default_footer_id {
        Some(id) => read_footer_tables(&mut archive, &id)?,
        None => Vec::new(),
    };

    Ok(Document {
        body: body.tables,
        footer,
    })
}

fn read_footer_tables<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    relationship_id: &str,
) -> Result<Vec<Table>, DocumentError> {
    let Some(rels_xml) = read_part(archive, DOCUMENT_RELS_PART)? else {
        return Ok(Vec::new());
    };
    let relationships = parse_relationships(&rels_xml)?;
    let Some(target) = relationships.get(relationship_id) else {
        return Ok(Vec::new());
    };

    let part = part_name(target);
    match read_part(archive, &part)? {
        Some(xml) => Ok(parse_part_tables(&xml, &part)?.tables),
        None => Ok(Vec::new()),
    }
}

/// Read a part as text. A part that isn't in the archive is `None`.
fn read_part<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    name: &str,
) -> Result<Option<String>, DocumentError> {
    let mut entry = match archive.by_name(name) {
        Ok(entry) => entry,
        Err(zip::result::ZipError::FileNotFound) => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let mut content = String::new();
    entry.read_to_string(&mut content)?;
    Ok(Some(content))
}

/// Map relationship ids (`rId7`) to their targets (`footer1.xml`).
fn parse_relationships(xml: &str) -> Result<HashMap<String, String>, DocumentError> {
    let mut relationships = HashMap::new();
    let mut reader = Reader::from_str(xml);

    loop {
        match reader.read_event() {
            Ok(Event::Empty(e) | Event::Start(e)) if e.name().as_ref() == b"Relationship" => {
                let mut id = None;
                let mut target = None;
                for attr in e.attributes().flatten() {
                    match attr.key.as_ref() {
                        b"Id" => id = Some(String::from_utf8_lossy(&attr.value).to_string()),
                        b"Target" => {
                            target = Some(String::from_utf8_lossy(&attr.value).to_string())
                        }
                        _ => {}
                    }
                }
                if let (Some(id), Some(target)) = (id, target) {
                    relationships.insert(id, target);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(DocumentError::Xml {
                    part: DOCUMENT_RELS_PART.to_string(),
                    message: e.to_string(),
                });
            }
            _ => {}
        }
    }

    Ok(relationships)
}

/// Archive name of a relationship target, which is relative to `word/`
/// unless it starts with `/`.
fn part_name(target: &str) -> String {
    match target.strip_prefix('/') {
        Some(absolute) => absolute.to_string(),
        None => format!("word/{}", target),
    }
}
