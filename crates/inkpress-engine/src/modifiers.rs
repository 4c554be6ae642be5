use std::{collections::BTreeMap, fmt, sync::Arc};

use serde::Serialize;

/// The kind of output a [`Modifier`] rewrites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum ModifierTarget {
    MetadataKeys,
    MetadataValues,
    Blockquotes,
    CodeBlocks,
    Headings,
    HorizontalLines,
    Html,
    Images,
    InlineCode,
    Links,
    Lists,
    Paragraphs,
    Tables,
}

/// What a modifier closure receives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input<'a> {
    /// The output so far: the default HTML, or the previous modifier's result.
    pub html: String,
    /// The source text the output was produced from.
    pub markdown: &'a str,
}

type Closure = dyn Fn(Input<'_>) -> String + Send + Sync;

/// A hook that rewrites the HTML generated for one kind of construct.
#[derive(Clone)]
pub struct Modifier {
    pub target: ModifierTarget,
    closure: Arc<Closure>,
}

impl Modifier {
    pub fn new(
        target: ModifierTarget,
        closure: impl Fn(Input<'_>) -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            target,
            closure: Arc::new(closure),
        }
    }

    pub fn apply(&self, input: Input<'_>) -> String {
        (self.closure)(input)
    }
}

impl fmt::Debug for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Modifier")
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}

/// Modifiers grouped by target, each group in registration order.
#[derive(Debug, Clone, Default)]
pub struct ModifierCollection {
    modifiers: BTreeMap<ModifierTarget, Vec<Modifier>>,
}

impl ModifierCollection {
    pub const fn new() -> Self {
        Self {
            modifiers: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, modifier: Modifier) {
        self.modifiers
            .entry(modifier.target)
            .or_default()
            .push(modifier);
    }

    /// Runs every modifier for `target` over `html`, feeding each one the
    /// previous one's output. Without modifiers `html` is returned as is.
    pub fn apply(&self, target: ModifierTarget, html: String, markdown: &str) -> String {
        self.modifiers
            .get(&target)
            .into_iter()
            .flatten()
            .fold(html, |html, modifier| modifier.apply(Input { html, markdown }))
    }

    pub fn len(&self) -> usize {
        self.modifiers.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.modifiers.is_empty()
    }
}

impl FromIterator<Modifier> for ModifierCollection {
    fn from_iter<I: IntoIterator<Item = Modifier>>(iter: I) -> Self {
        let mut collection = Self::new();
        for modifier in iter {
            collection.insert(modifier);
        }
        collection
    }
}
