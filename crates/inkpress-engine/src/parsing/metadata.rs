use serde::{Serialize, Serializer, ser::SerializeMap};

use crate::modifiers::{ModifierCollection, ModifierTarget};

use super::{
    error::{ReadError, ReadResult, require},
    reader::Reader,
    span::Span,
};

/// Key/value pairs from a leading `---` front-matter block, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    entries: Vec<(String, String)>,
}

impl Metadata {
    pub const DELIMITER: char = '-';
    pub const MIN_DELIMITER: usize = 3;
    pub const SEPARATOR: char = ':';

    /// Reads a front-matter block at the reader's position.
    ///
    /// Every line between the delimiters must be blank or `key: value`.
    /// Keys and values pass through the metadata modifiers as they are read.
    pub fn read(reader: &mut Reader, modifiers: &ModifierCollection) -> ReadResult<Self> {
        let opening = Span::new(reader.pos(), reader.line_end());
        require(Self::is_delimiter(reader.chars(opening)), "front matter")?;
        reader.skip_to(opening.end);

        let mut metadata = Self::default();
        loop {
            let Some(line) = reader.next_line() else {
                return Err(ReadError::UnexpectedEndOfInput);
            };
            let chars = reader.chars(line);
            let closing = Self::is_delimiter(chars);
            let text: String = chars.iter().collect();
            reader.skip_to(line.end);
            if closing {
                return Ok(metadata);
            }

            if text.trim().is_empty() {
                continue;
            }
            let (key, value) = text.split_once(Self::SEPARATOR).ok_or(ReadError::Malformed {
                construct: "metadata entry",
            })?;
            let (key, value) = (key.trim(), value.trim());
            require(!key.is_empty(), "metadata entry")?;

            metadata.insert(
                modifiers.apply(ModifierTarget::MetadataKeys, key.to_string(), key),
                modifiers.apply(ModifierTarget::MetadataValues, value.to_string(), value),
            );
        }
    }

    fn is_delimiter(line: &[char]) -> bool {
        let marks = line.iter().take_while(|&&c| c == Self::DELIMITER).count();
        marks >= Self::MIN_DELIMITER && line[marks..].iter().all(|c| matches!(c, ' ' | '\t'))
    }

    /// Sets `key`, replacing an earlier value in place.
    pub fn insert(&mut self, key: String, value: String) {
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Metadata {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
