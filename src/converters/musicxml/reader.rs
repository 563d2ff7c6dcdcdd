//! Location-aware MusicXML token stream
//!
//! A thin pull interface over `quick_xml::Reader` in the shape the element
//! decoders want: "advance to the next child start element", "read this
//! element's text", "skip this element". Comments, processing instructions,
//! the declaration and the DOCTYPE never surface as tokens.
//!
//! Every recoverable problem is recorded as a located diagnostic on the
//! stream; structural problems come back as [`ParseError`].

use super::errors::ParseError;
use super::support::Resolution;
use crate::diagnostics::{DiagnosticMark, DiagnosticSeverity, Diagnostics};
use quick_xml::events::Event;
use quick_xml::Reader;

/// Current token
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    StartDocument,
    StartElement {
        name: String,
        attributes: Vec<(String, String)>,
    },
    EndElement {
        name: String,
    },
    Characters(String),
    EndDocument,
}

impl Token {
    pub fn type_name(&self) -> &'static str {
        match self {
            Token::StartDocument => "StartDocument",
            Token::StartElement { .. } => "StartElement",
            Token::EndElement { .. } => "EndElement",
            Token::Characters(_) => "Characters",
            Token::EndDocument => "EndDocument",
        }
    }
}

pub struct XmlStreamReader<'a> {
    input: &'a [u8],
    reader: Reader<&'a [u8]>,
    token: Token,
    position: usize,
    /// Line and line start up to `scanned`; the read position only moves forward
    line: usize,
    line_start: usize,
    scanned: usize,
    diagnostics: Diagnostics,
}

impl<'a> XmlStreamReader<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        // text is kept verbatim, callers trim where the vocabulary allows it
        let mut reader = Reader::from_reader(input);
        reader.expand_empty_elements(true);
        Self {
            input,
            reader,
            token: Token::StartDocument,
            position: 0,
            line: 1,
            line_start: 0,
            scanned: 0,
            diagnostics: Diagnostics::new(),
        }
    }

    // ========================================================================
    // Token navigation
    // ========================================================================

    /// Advance to the next token
    pub fn read_next(&mut self) -> Result<&Token, ParseError> {
        loop {
            let event = self.reader.read_event();
            self.position = self.reader.buffer_position();
            self.track_location();
            let event = event.map_err(|e| self.structural_error(e.to_string()))?;

            let token = match event {
                Event::Start(e) | Event::Empty(e) => {
                    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                    let mut attributes = Vec::new();
                    for attr in e.attributes() {
                        let attr = attr.map_err(|err| self.structural_error(err.to_string()))?;
                        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
                        let value = attr
                            .unescape_value()
                            .map_err(|err| self.structural_error(err.to_string()))?
                            .into_owned();
                        attributes.push((key, value));
                    }
                    Token::StartElement { name, attributes }
                }
                Event::End(e) => Token::EndElement {
                    name: String::from_utf8_lossy(e.name().as_ref()).into_owned(),
                },
                Event::Text(e) => {
                    let text = e
                        .unescape()
                        .map_err(|err| self.structural_error(err.to_string()))?
                        .into_owned();
                    if text.is_empty() {
                        continue;
                    }
                    Token::Characters(text)
                }
                Event::CData(e) => Token::Characters(String::from_utf8_lossy(&e.into_inner()).into_owned()),
                Event::Eof => Token::EndDocument,
                _ => continue,
            };
            self.token = token;
            return Ok(&self.token);
        }
    }

    /// Advance to the next start element inside the current element
    ///
    /// Returns `false` once the current element's end (or the end of the
    /// document) is reached.
    pub fn read_next_start_element(&mut self) -> Result<bool, ParseError> {
        loop {
            match self.read_next()? {
                Token::StartElement { .. } => return Ok(true),
                Token::EndElement { .. } | Token::EndDocument => return Ok(false),
                Token::StartDocument | Token::Characters(_) => continue,
            }
        }
    }

    /// Collect the text of the current element and move to its end
    ///
    /// Nested elements are reported and skipped.
    pub fn read_text(&mut self) -> Result<String, ParseError> {
        let element = self.name().to_string();
        let mut text = String::new();
        loop {
            match self.read_next()? {
                Token::Characters(chars) => text.push_str(chars),
                Token::EndElement { .. } => return Ok(text),
                Token::StartElement { .. } => self.unknown()?,
                Token::EndDocument => {
                    return Err(self.structural_error(format!(
                        "unexpected end of document inside <{}>",
                        element
                    )))
                }
                Token::StartDocument => {}
            }
        }
    }

    /// Skip the current element and everything inside it
    pub fn skip_current_element(&mut self) -> Result<(), ParseError> {
        let element = self.name().to_string();
        let mut depth = 1usize;
        loop {
            match self.read_next()? {
                Token::StartElement { .. } => depth += 1,
                Token::EndElement { .. } => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(());
                    }
                }
                Token::EndDocument => {
                    return Err(self.structural_error(format!(
                        "unexpected end of document inside <{}>",
                        element
                    )))
                }
                _ => {}
            }
        }
    }

    /// Report the current element as unexpected, then skip it
    pub fn unknown(&mut self) -> Result<(), ParseError> {
        let tag = format!("<{}>", self.name());
        let mark = DiagnosticMark::new(
            self.line_number(),
            self.column_number(),
            DiagnosticSeverity::Warning,
            "unexpected_element",
            format!("unexpected element {}", tag),
        )
        .with_len(tag.len());
        self.diagnostics.add(mark);
        self.skip_current_element()
    }

    /// Fail unless the current token is the end of `expected`
    pub fn check_at_end_element(&self, expected: &str) -> Result<(), ParseError> {
        match &self.token {
            Token::EndElement { name } if name == expected => Ok(()),
            _ => Err(self.structural_error(format!(
                "expected token type and name 'EndElement {}', actual '{}'",
                expected,
                self.token_string()
            ))),
        }
    }

    // ========================================================================
    // Current token
    // ========================================================================

    pub fn token(&self) -> &Token {
        &self.token
    }

    /// Element name of the current start or end token, empty otherwise
    pub fn name(&self) -> &str {
        match &self.token {
            Token::StartElement { name, .. } | Token::EndElement { name } => name,
            _ => "",
        }
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        match &self.token {
            Token::StartElement { attributes, .. } => attributes
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str()),
            _ => None,
        }
    }

    pub fn is_start_element(&self) -> bool {
        matches!(self.token, Token::StartElement { .. })
    }

    pub fn is_end_element(&self) -> bool {
        matches!(self.token, Token::EndElement { .. })
    }

    /// "TokenType name" of the current token, for messages
    pub fn token_string(&self) -> String {
        match &self.token {
            Token::StartElement { name, .. } | Token::EndElement { name } => {
                format!("{} {}", self.token.type_name(), name)
            }
            other => other.type_name().to_string(),
        }
    }

    // ========================================================================
    // Location
    // ========================================================================

    fn track_location(&mut self) {
        let end = self.position.min(self.input.len());
        if end <= self.scanned {
            return;
        }
        for (offset, byte) in self.input[self.scanned..end].iter().enumerate() {
            if *byte == b'\n' {
                self.line += 1;
                self.line_start = self.scanned + offset + 1;
            }
        }
        self.scanned = end;
    }

    /// 1-based line of the read position
    pub fn line_number(&self) -> usize {
        self.line
    }

    /// 1-based column of the read position
    pub fn column_number(&self) -> usize {
        self.position.min(self.input.len()) - self.line_start + 1
    }

    pub fn structural_error(&self, message: impl Into<String>) -> ParseError {
        ParseError::Structural {
            line: self.line_number(),
            column: self.column_number(),
            message: message.into(),
        }
    }

    pub fn missing_element(&self, element: &str) -> ParseError {
        ParseError::MissingRequiredElement {
            line: self.line_number(),
            column: self.column_number(),
            element: element.to_string(),
        }
    }

    // ========================================================================
    // Diagnostics
    // ========================================================================

    /// Record a located warning at the read position
    pub fn warn(&mut self, kind: &str, message: impl Into<String>) {
        let (line, col) = (self.line_number(), self.column_number());
        self.diagnostics.warn(line, col, kind, message);
    }

    /// Unwrap a lenient lookup, recording its fallback message if any
    pub fn resolve<T>(&mut self, kind: &str, resolution: Resolution<T>) -> T {
        if let Some(message) = resolution.diagnostic {
            self.warn(kind, message);
        }
        resolution.value
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Diagnostics {
        self.diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_and_text() {
        let xml = br#"<?xml version="1.0"?>
<!-- comment -->
<root a="1">
  <x>hello &amp; bye</x>
  <y/>
</root>"#;
        let mut reader = XmlStreamReader::new(xml);
        assert!(reader.read_next_start_element().unwrap());
        assert_eq!(reader.name(), "root");
        assert_eq!(reader.attribute("a"), Some("1"));

        assert!(reader.read_next_start_element().unwrap());
        assert_eq!(reader.name(), "x");
        assert_eq!(reader.read_text().unwrap(), "hello & bye");

        assert!(reader.read_next_start_element().unwrap());
        assert_eq!(reader.name(), "y");
        assert_eq!(reader.read_text().unwrap(), "");

        assert!(!reader.read_next_start_element().unwrap());
        reader.check_at_end_element("root").unwrap();
    }

    #[test]
    fn test_unknown_records_location_and_skips() {
        let xml = b"<root>\n  <bogus><deep>1</deep></bogus>\n  <ok>2</ok>\n</root>";
        let mut reader = XmlStreamReader::new(xml);
        reader.read_next_start_element().unwrap();
        reader.read_next_start_element().unwrap();
        reader.unknown().unwrap();

        assert_eq!(reader.diagnostics().len(), 1);
        let mark = reader.diagnostics().iter().next().unwrap();
        assert_eq!(mark.line, 2);
        assert!(mark.message.contains("<bogus>"));

        assert!(reader.read_next_start_element().unwrap());
        assert_eq!(reader.name(), "ok");
    }

    #[test]
    fn test_text_is_kept_verbatim() {
        let xml = b"<root>\n  <t>  two  words </t>\n  <blank>   </blank>\n</root>";
        let mut reader = XmlStreamReader::new(xml);
        reader.read_next_start_element().unwrap();
        reader.read_next_start_element().unwrap();
        assert_eq!(reader.read_text().unwrap(), "  two  words ");
        reader.read_next_start_element().unwrap();
        assert_eq!(reader.name(), "blank");
        assert_eq!(reader.read_text().unwrap(), "   ");
        assert!(!reader.read_next_start_element().unwrap());
        reader.check_at_end_element("root").unwrap();
    }

    #[test]
    fn test_location_follows_the_read_position() {
        let xml = b"<root>\n  <a>1</a>\n  <b>2</b>\n</root>";
        let mut reader = XmlStreamReader::new(xml);
        reader.read_next_start_element().unwrap();
        assert_eq!((reader.line_number(), reader.column_number()), (1, 7));
        reader.read_next_start_element().unwrap();
        assert_eq!((reader.line_number(), reader.column_number()), (2, 6));
        reader.read_text().unwrap();
        reader.read_next_start_element().unwrap();
        assert_eq!(reader.name(), "b");
        assert_eq!((reader.line_number(), reader.column_number()), (3, 6));
        // asking twice does not move anything
        assert_eq!(reader.line_number(), 3);
    }

    #[test]
    fn test_unknown_highlights_the_tag() {
        let mut reader = XmlStreamReader::new(b"<root><sparkle/></root>");
        reader.read_next_start_element().unwrap();
        reader.read_next_start_element().unwrap();
        reader.unknown().unwrap();
        let mark = reader.diagnostics().iter().next().unwrap();
        assert_eq!(mark.len, "<sparkle>".len());
    }

    #[test]
    fn test_check_at_end_element_message() {
        let xml = b"<root><child/></root>";
        let mut reader = XmlStreamReader::new(xml);
        reader.read_next_start_element().unwrap();
        reader.read_next_start_element().unwrap();
        let err = reader.check_at_end_element("root").unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("line 1, column "));
        assert!(message.contains("expected token type and name 'EndElement root', actual 'StartElement child'"));
    }

    #[test]
    fn test_mismatched_end_tag_is_structural() {
        let xml = b"<root>\n<a></b>\n</root>";
        let mut reader = XmlStreamReader::new(xml);
        reader.read_next_start_element().unwrap();
        reader.read_next_start_element().unwrap();
        let err = reader.read_next().unwrap_err();
        assert!(matches!(err, ParseError::Structural { line: 2, .. }));
    }
}
