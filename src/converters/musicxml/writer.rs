//! Indenting MusicXML writer
//!
//! String-buffer output, one element per line. The writer tracks open
//! elements itself so callers only say `end_element()`.

/// Streaming XML writer
pub struct XmlWriter {
    buffer: String,
    indent: usize,
    open: Vec<String>,
}

impl XmlWriter {
    pub fn new(indent: usize) -> Self {
        Self {
            buffer: String::new(),
            indent,
            open: Vec::new(),
        }
    }

    pub fn declaration(&mut self) {
        self.buffer
            .push_str("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"no\"?>\n");
    }

    /// Write a `<!DOCTYPE ...>` line verbatim
    pub fn doctype(&mut self, doctype: &str) {
        self.buffer.push_str("<!DOCTYPE ");
        self.buffer.push_str(doctype);
        self.buffer.push_str(">\n");
    }

    /// `<name attrs>` and descend
    pub fn start_element(&mut self, name: &str, attributes: &[(&str, &str)]) {
        self.pad();
        self.open_tag(name, attributes);
        self.buffer.push_str(">\n");
        self.open.push(name.to_string());
    }

    /// Close the innermost open element
    pub fn end_element(&mut self) {
        if let Some(name) = self.open.pop() {
            self.pad();
            self.buffer.push_str("</");
            self.buffer.push_str(&name);
            self.buffer.push_str(">\n");
        }
    }

    /// `<name>text</name>`
    pub fn text_element(&mut self, name: &str, text: &str) {
        self.text_element_with_attributes(name, &[], text);
    }

    pub fn text_element_with_attributes(&mut self, name: &str, attributes: &[(&str, &str)], text: &str) {
        self.pad();
        self.open_tag(name, attributes);
        self.buffer.push('>');
        self.buffer.push_str(&xml_escape(text));
        self.buffer.push_str("</");
        self.buffer.push_str(name);
        self.buffer.push_str(">\n");
    }

    /// `<name attrs/>`
    pub fn empty_element(&mut self, name: &str, attributes: &[(&str, &str)]) {
        self.pad();
        self.open_tag(name, attributes);
        self.buffer.push_str("/>\n");
    }

    /// Close anything still open and return the document
    pub fn finish(mut self) -> String {
        while !self.open.is_empty() {
            self.end_element();
        }
        self.buffer
    }

    fn open_tag(&mut self, name: &str, attributes: &[(&str, &str)]) {
        self.buffer.push('<');
        self.buffer.push_str(name);
        for (key, value) in attributes {
            self.buffer.push(' ');
            self.buffer.push_str(key);
            self.buffer.push_str("=\"");
            self.buffer.push_str(&xml_escape(value));
            self.buffer.push('"');
        }
    }

    fn pad(&mut self) {
        let width = self.open.len() * self.indent;
        self.buffer.extend(std::iter::repeat(' ').take(width));
    }
}

/// Escape XML special characters
pub fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_output() {
        let mut w = XmlWriter::new(2);
        w.start_element("a", &[("id", "P1")]);
        w.text_element("b", "x < y");
        w.empty_element("c", &[]);
        let out = w.finish();
        assert_eq!(out, "<a id=\"P1\">\n  <b>x &lt; y</b>\n  <c/>\n</a>\n");
    }

    #[test]
    fn test_xml_escape() {
        assert_eq!(xml_escape("Tom & Jerry's \"show\""), "Tom &amp; Jerry&apos;s &quot;show&quot;");
    }
}
