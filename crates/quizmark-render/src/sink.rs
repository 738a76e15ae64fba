//! Append-only markup sink over a `quick_xml` event writer.

use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use crate::error::RenderError;

/// Indentation width of emitted markup.
const INDENT: usize = 2;

/// Append-only markup emitter.
///
/// Wraps a [`quick_xml::Writer`] with two-space indentation writing into an
/// in-memory buffer. Untrusted text goes through [`text`](Self::text), which
/// escapes markup-significant characters; trusted markup goes through
/// [`raw`](Self::raw) verbatim.
///
/// Each render call owns its own sink; sinks are never shared across
/// concurrent renders.
pub struct MarkupSink {
    writer: Writer<Vec<u8>>,
}

impl MarkupSink {
    /// Create a sink with an empty output buffer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            writer: Writer::new_with_indent(Vec::new(), b' ', INDENT),
        }
    }

    /// Open an element with the given attributes.
    pub fn open(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<(), RenderError> {
        let mut start = BytesStart::new(name);
        for attr in attrs {
            start.push_attribute(*attr);
        }
        self.writer.write_event(Event::Start(start))?;
        Ok(())
    }

    /// Close an element opened with [`open`](Self::open).
    pub fn close(&mut self, name: &str) -> Result<(), RenderError> {
        self.writer.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }

    /// Emit a self-closing element.
    pub fn empty(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<(), RenderError> {
        let mut element = BytesStart::new(name);
        for attr in attrs {
            element.push_attribute(*attr);
        }
        self.writer.write_event(Event::Empty(element))?;
        Ok(())
    }

    /// Insert text, escaping markup-significant characters.
    pub fn text(&mut self, text: &str) -> Result<(), RenderError> {
        self.writer.write_event(Event::Text(BytesText::new(text)))?;
        Ok(())
    }

    /// Insert trusted markup verbatim.
    pub fn raw(&mut self, markup: &str) -> Result<(), RenderError> {
        self.writer
            .write_event(Event::Text(BytesText::from_escaped(markup)))?;
        Ok(())
    }

    /// Emit a comment.
    pub fn comment(&mut self, text: &str) -> Result<(), RenderError> {
        self.writer
            .write_event(Event::Comment(BytesText::new(text)))?;
        Ok(())
    }

    /// Emit an element containing escaped text.
    pub fn text_element(
        &mut self,
        name: &str,
        attrs: &[(&str, &str)],
        text: &str,
    ) -> Result<(), RenderError> {
        self.open(name, attrs)?;
        self.text(text)?;
        self.close(name)
    }

    /// Emit an element containing trusted markup.
    pub fn raw_element(
        &mut self,
        name: &str,
        attrs: &[(&str, &str)],
        markup: &str,
    ) -> Result<(), RenderError> {
        self.open(name, attrs)?;
        self.raw(markup)?;
        self.close(name)
    }

    /// Consume the sink and return the accumulated markup.
    pub fn into_markup(self) -> Result<String, RenderError> {
        Ok(String::from_utf8(self.writer.into_inner())?)
    }
}

impl Default for MarkupSink {
    fn default() -> Self {
        Self::new()
    }
}
