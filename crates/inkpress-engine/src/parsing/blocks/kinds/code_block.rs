use serde::Serialize;

use crate::{
    parsing::{
        blocks::classify::strip_indentation,
        error::{ReadResult, require},
        reader::Reader,
    },
    render::{escape_attribute, escape_text},
};

/// A fenced code block. The body is raw: no block or inline parsing happens
/// inside it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CodeBlock {
    pub language: Option<String>,
    /// Body lines, each followed by `'\n'`.
    pub code: String,
}

impl CodeBlock {
    pub const FENCE: char = '`';
    pub const MIN_FENCE: usize = 3;

    pub fn opens(line: &[char]) -> bool {
        Self::fence_len(line) >= Self::MIN_FENCE
    }

    fn fence_len(line: &[char]) -> usize {
        line.iter().take_while(|&&c| c == Self::FENCE).count()
    }

    /// Whether `line` closes a fence opened with `opener` backticks.
    pub fn closes(line: &[char], opener: usize) -> bool {
        let line = strip_indentation(line);
        let len = Self::fence_len(line);
        len >= opener && line[len..].iter().all(|c| matches!(c, ' ' | '\t'))
    }

    /// Reads a fence, its body and the closing fence.
    ///
    /// A missing closing fence is not an error: the block runs to the end of
    /// the input.
    pub fn read(reader: &mut Reader) -> ReadResult<Self> {
        let opener = reader.read_count(Self::FENCE);
        require(opener >= Self::MIN_FENCE, "code fence")?;

        let info = reader.read_line_content();
        let info = info.trim();
        // ```inline``` on one line is a code span, not a fence.
        require(!info.contains(Self::FENCE), "code fence")?;
        let language = info.split_whitespace().next().map(str::to_string);

        let mut code = String::new();
        while let Some(line) = reader.next_line() {
            let chars = reader.chars(line);
            if Self::closes(chars, opener) {
                reader.skip_to(line.end);
                break;
            }
            code.extend(chars);
            code.push('\n');
            reader.skip_to(line.end);
        }

        Ok(Self { language, code })
    }

    pub fn html(&self) -> String {
        let class = self
            .language
            .as_deref()
            .map(|language| format!(" class=\"language-{}\"", escape_attribute(language)))
            .unwrap_or_default();
        format!("<pre><code{class}>{}</code></pre>", escape_text(&self.code))
    }

    pub fn plain_text(&self) -> String {
        self.code.clone()
    }
}
