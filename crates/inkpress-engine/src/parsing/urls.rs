use std::collections::BTreeMap;

use serde::Serialize;

use super::{
    error::{ReadError, ReadResult, require},
    reader::Reader,
};

/// A `[name]: url` line. It produces no output of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlDeclaration {
    pub name: String,
    pub url: String,
}

impl UrlDeclaration {
    pub const OPEN: char = '[';
    pub const CLOSE: char = ']';
    pub const SEPARATOR: char = ':';

    /// Whether `line` has the shape of a declaration.
    pub fn opens(line: &[char]) -> bool {
        if line.first() != Some(&Self::OPEN) {
            return false;
        }
        line.iter()
            .position(|&c| c == Self::CLOSE)
            .is_some_and(|close| close > 1 && line.get(close + 1) == Some(&Self::SEPARATOR))
    }

    /// Reads a declaration. The URL is the first whitespace-delimited token
    /// after the colon; anything after it on the line is ignored.
    pub fn read(reader: &mut Reader) -> ReadResult<Self> {
        reader.read(Self::OPEN)?;
        let name = reader.read_until(&[Self::CLOSE])?;
        require(!name.trim().is_empty(), "url declaration")?;
        reader.read(Self::CLOSE)?;
        reader.read(Self::SEPARATOR)?;
        reader.discard_whitespace();

        let url = reader.read_while(|c| !c.is_whitespace());
        if url.is_empty() {
            return Err(ReadError::UnexpectedEndOfInput);
        }
        reader.skip_to(reader.line_end());

        Ok(Self { name, url })
    }
}

/// Declared URLs by normalised name.
///
/// Filled while blocks are read and only consulted when rendering, so a link
/// may reference a declaration that appears later in the document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NamedUrlCollection {
    urls: BTreeMap<String, String>,
}

impl NamedUrlCollection {
    pub const fn new() -> Self {
        Self {
            urls: BTreeMap::new(),
        }
    }

    /// Records a declaration. A later declaration of the same name wins.
    pub fn insert(&mut self, declaration: UrlDeclaration) {
        self.urls
            .insert(Self::normalize(&declaration.name), declaration.url);
    }

    /// Looks up `name`, ignoring case and runs of whitespace.
    pub fn url(&self, name: &str) -> Option<&str> {
        self.urls.get(&Self::normalize(name)).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    fn normalize(name: &str) -> String {
        name.split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }
}
