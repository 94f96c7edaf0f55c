use quick_xml::{
    Reader,
    events::{BytesStart, Event},
};

use crate::core::document::{Cell, DocumentError, Row, Table};

/// Tables of one WordprocessingML part, plus the first section's footer link.
#[derive(Debug, Default)]
pub(super) struct PartTables {
    pub tables: Vec<Table>,
    /// Relationship id of the default footer of the first section, if any.
    pub default_footer_id: Option<String>,
}

/// Extract an attribute value by its qualified name.
fn get_attr(e: &BytesStart, key: &[u8]) -> Option<String> {
    e.attributes()
        .find(|a| a.as_ref().ok().map(|x| x.key.as_ref()) == Some(key))
        .and_then(Result::ok)
        .map(|attr| String::from_utf8_lossy(&attr.value).to_string())
}

/// Walks a part's XML and collects its top-level tables.
///
/// A cell keeps only its own paragraphs. Tables nested inside a cell are
/// skipped along with everything in them.
#[derive(Default)]
struct TableCollector {
    tables: Vec<Table>,
    table_depth: usize,
    paragraph_depth: usize,
    paragraph: String,
    in_text: bool,
    // 0: not seen, 1: inside the first w:sectPr, 2: done
    sect_pr_state: u8,
    default_footer_id: Option<String>,
}

impl TableCollector {
    fn current_cell(&mut self) -> Option<&mut Cell> {
        self.tables.last_mut()?.rows.last_mut()?.cells.last_mut()
    }

    fn handle_start(&mut self, e: &BytesStart) {
        match e.name().as_ref() {
            b"w:tbl" => {
                self.table_depth += 1;
                if self.table_depth == 1 {
                    self.tables.push(Table::default());
                }
            }
            b"w:tr" if self.table_depth == 1 => {
                if let Some(table) = self.tables.last_mut() {
                    table.rows.push(Row::default());
                }
            }
            b"w:tc" if self.table_depth == 1 => {
                if let Some(row) = self.tables.last_mut().and_then(|t| t.rows.last_mut()) {
                    row.cells.push(Cell::default());
                }
            }
            b"w:p" if self.table_depth == 1 => {
                self.paragraph_depth += 1;
            }
            b"w:t" if self.paragraph_depth > 0 => {
                self.in_text = true;
            }
            b"w:sectPr" if self.sect_pr_state == 0 => {
                self.sect_pr_state = 1;
            }
            _ => {}
        }
    }

    fn handle_empty(&mut self, e: &BytesStart) {
        match e.name().as_ref() {
            b"w:p" if self.table_depth == 1 && self.paragraph_depth == 0 => {
                if let Some(cell) = self.current_cell() {
                    cell.paragraphs.push(String::new());
                }
            }
            b"w:tab" if self.paragraph_depth > 0 => self.paragraph.push('\t'),
            b"w:br" | b"w:cr" if self.paragraph_depth > 0 => self.paragraph.push('\n'),
            b"w:footerReference" if self.sect_pr_state == 1 => {
                if get_attr(e, b"w:type").as_deref() == Some("default") {
                    self.default_footer_id = get_attr(e, b"r:id");
                }
            }
            b"w:sectPr" if self.sect_pr_state == 0 => {
                self.sect_pr_state = 2;
            }
            _ => {}
        }
    }

    fn handle_end(&mut self, name: &[u8]) {
        match name {
            b"w:tbl" if self.table_depth > 0 => {
                self.table_depth -= 1;
            }
            b"w:t" => {
                self.in_text = false;
            }
            b"w:p" if self.paragraph_depth > 0 => {
                self.paragraph_depth -= 1;
                if self.paragraph_depth == 0 {
                    let text = std::mem::take(&mut self.paragraph);
                    if let Some(cell) = self.current_cell() {
                        cell.paragraphs.push(text);
                    }
                }
            }
            b"w:sectPr" if self.sect_pr_state == 1 => {
                self.sect_pr_state = 2;
            }
            _ => {}
        }
    }

    fn handle_text(&mut self, text: &str) {
        if self.in_text {
            self.paragraph.push_str(text);
        }
    }
}

/// Collect the tables of a document, header or footer part.
pub(super) fn parse_part_tables(xml: &str, part: &str) -> Result<PartTables, DocumentError> {
    let xml_error = |message: String| DocumentError::Xml {
        part: part.to_string(),
        message,
    };

    let mut reader = Reader::from_str(xml);
    let mut collector = TableCollector::default();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => collector.handle_start(&e),
            Ok(Event::Empty(e)) => collector.handle_empty(&e),
            Ok(Event::End(e)) => collector.handle_end(e.name().as_ref()),
            Ok(Event::Text(t)) => {
                let text = t.unescape().map_err(|e| xml_error(e.to_string()))?;
                collector.handle_text(&text);
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(xml_error(format!(
                    "at position {}: {}",
                    reader.buffer_position(),
                    e
                )));
            }
            _ => {}
        }
    }

    Ok(PartTables {
        tables: collector.tables,
        default_footer_id: collector.default_footer_id,
    })
}
