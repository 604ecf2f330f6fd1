use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use std::io::Cursor;

use crate::core::BillkitError;

fn markup_io(e: std::io::Error) -> BillkitError {
    BillkitError::TemplateGeneration(format!("markup write error: {e}"))
}

/// Structured HTML writer with a single escaping boundary.
///
/// Every string passed to [`text`](Self::text) and the `text_element`
/// helpers is entity-escaped (`& < > " '`) at write time, so user
/// content can never introduce raw markup. Line breaks in multi-line
/// fields are emitted as `<br/>` elements via
/// [`multiline_text`](Self::multiline_text) after escaping, never as
/// part of the text itself.
pub struct HtmlWriter {
    writer: Writer<Cursor<Vec<u8>>>,
}

impl HtmlWriter {
    /// Create a writer with the HTML5 doctype already emitted.
    pub fn new() -> Result<Self, BillkitError> {
        let mut writer = Writer::new(Cursor::new(Vec::new()));
        writer
            .write_event(Event::DocType(BytesText::new("html")))
            .map_err(markup_io)?;
        Ok(Self { writer })
    }

    pub fn into_string(self) -> Result<String, BillkitError> {
        let buf = self.writer.into_inner().into_inner();
        String::from_utf8(buf)
            .map_err(|e| BillkitError::TemplateGeneration(format!("markup UTF-8 error: {e}")))
    }

    pub fn start_element(&mut self, name: &str) -> Result<&mut Self, BillkitError> {
        let elem = BytesStart::new(name);
        self.writer
            .write_event(Event::Start(elem))
            .map_err(markup_io)?;
        Ok(self)
    }

    pub fn start_element_with_attrs(
        &mut self,
        name: &str,
        attrs: &[(&str, &str)],
    ) -> Result<&mut Self, BillkitError> {
        let mut elem = BytesStart::new(name);
        for (k, v) in attrs {
            elem.push_attribute((*k, *v));
        }
        self.writer
            .write_event(Event::Start(elem))
            .map_err(markup_io)?;
        Ok(self)
    }

    pub fn end_element(&mut self, name: &str) -> Result<&mut Self, BillkitError> {
        self.writer
            .write_event(Event::End(BytesEnd::new(name)))
            .map_err(markup_io)?;
        Ok(self)
    }

    /// Write an escaped text node.
    pub fn text(&mut self, text: &str) -> Result<&mut Self, BillkitError> {
        self.writer
            .write_event(Event::Text(BytesText::new(text)))
            .map_err(markup_io)?;
        Ok(self)
    }

    pub fn text_element(&mut self, name: &str, text: &str) -> Result<&mut Self, BillkitError> {
        self.start_element(name)?;
        self.text(text)?;
        self.end_element(name)
    }

    pub fn text_element_with_attrs(
        &mut self,
        name: &str,
        text: &str,
        attrs: &[(&str, &str)],
    ) -> Result<&mut Self, BillkitError> {
        self.start_element_with_attrs(name, attrs)?;
        self.text(text)?;
        self.end_element(name)
    }

    /// Write a void element, e.g. `<meta charset="utf-8"/>`.
    pub fn empty_element_with_attrs(
        &mut self,
        name: &str,
        attrs: &[(&str, &str)],
    ) -> Result<&mut Self, BillkitError> {
        let mut elem = BytesStart::new(name);
        for (k, v) in attrs {
            elem.push_attribute((*k, *v));
        }
        self.writer
            .write_event(Event::Empty(elem))
            .map_err(markup_io)?;
        Ok(self)
    }

    pub fn line_break(&mut self) -> Result<&mut Self, BillkitError> {
        self.writer
            .write_event(Event::Empty(BytesStart::new("br")))
            .map_err(markup_io)?;
        Ok(self)
    }

    /// Write multi-line text, escaping each line and separating them
    /// with `<br/>` elements. The break marker itself never passes
    /// through escaping, so it cannot be double-encoded.
    pub fn multiline_text(&mut self, text: &str) -> Result<&mut Self, BillkitError> {
        for (i, line) in text.split('\n').enumerate() {
            if i > 0 {
                self.line_break()?;
            }
            self.text(line.trim_end_matches('\r'))?;
        }
        Ok(self)
    }
}
