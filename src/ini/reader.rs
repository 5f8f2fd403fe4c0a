//! INI file reader implementation
//!
//! The reader consumes a document one line at a time. Each non-empty line is
//! scanned character by character:
//!
//! * `[` opens a section header and `]` closes it, making the text in between
//!   the current section for this and the following lines
//! * `=` turns the text scanned so far into a key; the rest of the line is
//!   its value
//! * `#` discards the remainder of the line
//!
//! Keys and values are stored exactly as scanned, including inner spaces.

use std::collections::BTreeMap;
use std::mem;
use std::path::Path;
use std::str::FromStr;

use log::{debug, info};

use super::error::{IniError, Result};
use super::section::Section;
use super::value::Lookup;
use crate::utils::{file_get, strip};

/// Parsed INI document, a read-only mapping from section name to [`Section`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IniReader {
    sections: BTreeMap<String, Section>,
}

impl IniReader {
    /// Read and parse an INI file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = file_get(path)?;
        let reader = Self::parse(&content)?;
        info!(
            "Loaded {} section(s) from {}",
            reader.section_count(),
            path.display()
        );
        Ok(reader)
    }

    /// Parse INI content held in memory
    pub fn parse(content: &str) -> Result<Self> {
        let mut parser = Parser::default();
        for (index, line) in content.lines().enumerate() {
            parser.feed_line(index + 1, line)?;
        }
        Ok(IniReader {
            sections: parser.sections,
        })
    }

    /// Get a section by its exact name
    pub fn get(&self, name: &str) -> Result<&Section> {
        self.sections
            .get(name)
            .ok_or_else(|| IniError::SectionNotFound {
                section: name.to_string(),
            })
    }

    /// Shortcut for `reader.get(section)?.get(key)`
    pub fn value<'a>(&'a self, section: &str, key: &'a str) -> Result<Lookup<'a>> {
        Ok(self.get(section)?.get(key))
    }

    /// Check if a section exists
    pub fn section_exist(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    /// Get the count of sections
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Get all section names, in sorted order
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// Iterate over all sections, in sorted order
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.values()
    }
}

impl FromStr for IniReader {
    type Err = IniError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Parsing state carried from one line to the next
#[derive(Default)]
struct Parser {
    current_section: String,
    sections: BTreeMap<String, Section>,
}

impl Parser {
    fn feed_line(&mut self, line_num: usize, line: &str) -> Result<()> {
        let line = strip(line);
        if line.is_empty() {
            return Ok(());
        }

        let mut in_brackets = false;
        let mut token = String::new();
        let mut key: Option<String> = None;

        for ch in line.chars() {
            match ch {
                '[' => in_brackets = true,
                ']' => {
                    if !in_brackets || token.is_empty() {
                        return Err(IniError::InvalidCharacter {
                            ch: ']',
                            line: line_num,
                        });
                    }
                    self.current_section = mem::take(&mut token);
                    in_brackets = false;
                }
                '=' => {
                    if token.is_empty() {
                        return Err(IniError::EmptyKey { line: line_num });
                    }
                    key = Some(mem::take(&mut token));
                }
                '#' => break,
                _ => token.push(ch),
            }
        }

        if in_brackets {
            return Err(IniError::InvalidCharacter {
                ch: '[',
                line: line_num,
            });
        }

        if !self.current_section.is_empty()
            && !self.sections.contains_key(&self.current_section)
        {
            debug!(
                "Created section '{}' at line {}",
                self.current_section, line_num
            );
            self.sections.insert(
                self.current_section.clone(),
                Section::new(self.current_section.as_str()),
            );
        }

        if let Some(key) = key {
            let section = self.sections.get_mut(&self.current_section).ok_or_else(|| {
                IniError::UndeclaredSection {
                    section: self.current_section.clone(),
                    line: line_num,
                }
            })?;
            section.add_item(key, mem::take(&mut token));
        }

        if !token.is_empty() {
            return Err(IniError::InvalidLine { line: line_num });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ini::error::IniErrorKind;

    fn parse_err(content: &str) -> IniError {
        IniReader::parse(content).unwrap_err()
    }

    #[test]
    fn test_basic_document() {
        let reader =
            IniReader::parse("[server]\nip=127.0.0.1\nport=8080\n# comment\ntimeout=2.5\n").unwrap();

        let server = reader.get("server").unwrap();
        assert_eq!(server.get("ip").to_string().unwrap(), "127.0.0.1");
        assert_eq!(server.get("port").to_int().unwrap(), 8080);
        assert_eq!(server.get("timeout").to_float().unwrap(), 2.5);
        assert_eq!(server.get("missing").to_float_or(1.5).unwrap(), 1.5);
    }

    #[test]
    fn test_values_are_kept_verbatim() {
        let reader = IniReader::parse("[a]\nname=hello world # trailing\nempty=\n").unwrap();
        let a = reader.get("a").unwrap();

        assert_eq!(a.get("name").to_string().unwrap(), "hello world ");
        assert_eq!(a.get("empty").to_string().unwrap(), "");
    }

    #[test]
    fn test_spaces_around_equals_belong_to_key_and_value() {
        let reader = IniReader::parse("[a]\nport = 80\n").unwrap();
        let a = reader.get("a").unwrap();

        assert!(!a.contains_key("port"));
        assert_eq!(a.get("port ").to_string().unwrap(), " 80");
        assert_eq!(a.get("port ").to_int().unwrap(), 80);
    }

    #[test]
    fn test_header_and_item_on_one_line() {
        let reader = IniReader::parse("[a]x=1").unwrap();
        assert_eq!(reader.value("a", "x").unwrap().to_int().unwrap(), 1);
    }

    #[test]
    fn test_empty_section_is_kept() {
        let reader = IniReader::parse("[empty]\n[full]\nk=v\n").unwrap();
        assert!(reader.section_exist("empty"));
        assert!(reader.get("empty").unwrap().is_empty());
        assert_eq!(reader.section_names().collect::<Vec<_>>(), vec!["empty", "full"]);
    }

    #[test]
    fn test_reopened_section_merges() {
        let reader = IniReader::parse("[a]\nx=1\n[b]\nz=3\n[a]\ny=2\n").unwrap();
        let a = reader.get("a").unwrap();

        assert_eq!(reader.section_count(), 2);
        assert_eq!(a.get("x").to_int().unwrap(), 1);
        assert_eq!(a.get("y").to_int().unwrap(), 2);
    }

    #[test]
    fn test_item_before_header() {
        let err = parse_err("x=1\n");
        assert_eq!(err.kind(), IniErrorKind::UndeclaredSection);
        assert_eq!(err.line(), Some(1));
        assert_eq!(err.to_string(), "section '' doesn't exist at line 1");
    }

    #[test]
    fn test_unmatched_closing_bracket() {
        let err = parse_err("[a]\nx=1\n\nfoo]\n");
        assert_eq!(err.kind(), IniErrorKind::InvalidCharacter);
        assert_eq!(err.to_string(), "invalid character ']' at line 4");
    }

    #[test]
    fn test_empty_header() {
        let err = parse_err("[]\n");
        assert_eq!(err.to_string(), "invalid character ']' at line 1");
    }

    #[test]
    fn test_unterminated_header() {
        let err = parse_err("[a]\nx=1\n[b\n");
        assert_eq!(err.to_string(), "invalid character '[' at line 3");
    }

    #[test]
    fn test_comment_hides_closing_bracket() {
        let err = parse_err("[a # ]\n");
        assert_eq!(err.kind(), IniErrorKind::InvalidCharacter);
        assert_eq!(err.line(), Some(1));
    }

    #[test]
    fn test_empty_key() {
        let err = parse_err("[a]\n=value\n");
        assert_eq!(err.kind(), IniErrorKind::EmptyKey);
        assert_eq!(err.to_string(), "key is empty at line 2");

        let err = parse_err("[a]\nk==v\n");
        assert_eq!(err.kind(), IniErrorKind::EmptyKey);
    }

    #[test]
    fn test_each_equals_sign_starts_a_new_key() {
        let reader = IniReader::parse("[a]\na=b=c\n").unwrap();
        let a = reader.get("a").unwrap();

        assert!(!a.contains_key("a"));
        assert_eq!(a.get("b").to_string().unwrap(), "c");
    }

    #[test]
    fn test_bare_text_is_invalid() {
        let err = parse_err("[a]\njust some text\n");
        assert_eq!(err.kind(), IniErrorKind::InvalidLine);
        assert_eq!(err.to_string(), "invalid line at line 2");

        let err = parse_err("[a] trailing\n");
        assert_eq!(err.kind(), IniErrorKind::InvalidLine);
    }

    #[test]
    fn test_comments_and_blank_lines_are_inert() {
        let reader = IniReader::parse("\n# top\n   \n[a]\n\t# inside\nx=1\n\r\n").unwrap();
        assert_eq!(reader.section_count(), 1);
        assert_eq!(reader.get("a").unwrap().len(), 1);
    }

    #[test]
    fn test_crlf_line_endings() {
        let reader = IniReader::parse("[a]\r\nx=1\r\ny=two\r\n").unwrap();
        assert_eq!(reader.value("a", "y").unwrap().to_string().unwrap(), "two");
    }

    #[test]
    fn test_unknown_section_lookup() {
        let reader = IniReader::parse("[a]\nx=1\n").unwrap();
        let err = reader.get("b").unwrap_err();
        assert_eq!(err.kind(), IniErrorKind::SectionNotFound);
        assert_eq!(err.to_string(), "section 'b' doesn't exist");
        assert!(reader.value("b", "x").is_err());
    }

    #[test]
    fn test_from_str() {
        let reader: IniReader = "[a]\nx=1\n".parse().unwrap();
        assert!(reader.section_exist("a"));
        assert!("x=1".parse::<IniReader>().is_err());
    }
}
