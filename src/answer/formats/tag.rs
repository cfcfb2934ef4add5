//! XML-like tag serialization
//!
//! Serializes a document to an XML-like format that directly reflects the tree.
//!
//! ## Format
//!
//! - Node type → tag name (`section`, `heading`, `callout`, `bullet`, `table`, `paragraph`)
//! - Heading level, callout tag and table width → attributes
//! - Bold and italic spans → nested `<bold>` / `<italic>` elements, plain spans → text
//! - Table rows → `<row>` of `<cell>` elements, each cell parsed for inline spans
//!
//! ## Example
//!
//! ```text
//! <document>
//!   <section>
//!     <callout tag="summary">Summary:</callout>
//!     <bullet><bold>Sales</bold> rose</bullet>
//!   </section>
//! </document>
//! ```

use crate::answer::ast::{Block, Document, Section, Span, SpanKind, Table};

struct TagSerializer {
    output: String,
    indent_level: usize,
}

impl TagSerializer {
    fn new() -> Self {
        TagSerializer {
            output: String::new(),
            indent_level: 0,
        }
    }

    fn push_indent(&mut self, s: &str) {
        self.output.push_str(&"  ".repeat(self.indent_level));
        self.output.push_str(s);
    }

    fn document(&mut self, doc: &Document) {
        self.push_indent("<document>");
        if !doc.sections.is_empty() {
            self.output.push('\n');
            self.indent_level += 1;
            for section in &doc.sections {
                self.section(section);
            }
            self.indent_level -= 1;
        }
        self.output.push_str("</document>\n");
    }

    fn section(&mut self, section: &Section) {
        self.push_indent("<section>");
        if !section.blocks.is_empty() {
            self.output.push('\n');
            self.indent_level += 1;
            for block in &section.blocks {
                self.block(block);
            }
            self.indent_level -= 1;
            self.push_indent("");
        }
        self.output.push_str("</section>\n");
    }

    fn block(&mut self, block: &Block) {
        match block {
            Block::Heading { level, spans } => {
                self.push_indent(&format!("<heading level=\"{level}\">"));
                self.spans(spans);
                self.output.push_str("</heading>\n");
            }
            Block::CalloutHeading { text, tag } => {
                self.push_indent(&format!(
                    "<callout tag=\"{tag}\">{}</callout>\n",
                    escape_xml(text)
                ));
            }
            Block::Bullet { spans } => {
                self.push_indent("<bullet>");
                self.spans(spans);
                self.output.push_str("</bullet>\n");
            }
            Block::Table(table) => self.table(table),
            Block::Paragraph { text } => {
                self.push_indent(&format!("<paragraph>{}</paragraph>\n", escape_xml(text)));
            }
        }
    }

    fn table(&mut self, table: &Table) {
        self.push_indent(&format!("<table columns=\"{}\">\n", table.column_count));
        self.indent_level += 1;
        for row in 0..table.row_count() {
            self.push_indent("<row>");
            for column in 0..table.column_count {
                self.output.push_str("<cell>");
                self.spans(&table.cell_spans(row, column));
                self.output.push_str("</cell>");
            }
            self.output.push_str("</row>\n");
        }
        self.indent_level -= 1;
        self.push_indent("</table>\n");
    }

    fn spans(&mut self, spans: &[Span]) {
        for span in spans {
            let text = escape_xml(&span.text);
            match span.kind {
                SpanKind::Plain => self.output.push_str(&text),
                SpanKind::Bold => self.output.push_str(&format!("<bold>{text}</bold>")),
                SpanKind::Italic => self.output.push_str(&format!("<italic>{text}</italic>")),
            }
        }
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Serialize a document to the tag format
pub fn serialize_document(doc: &Document) -> String {
    let mut serializer = TagSerializer::new();
    serializer.document(doc);
    serializer.output
}
