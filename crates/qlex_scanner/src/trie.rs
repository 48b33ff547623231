//! Keyword/operator classifier.
//!
//! A byte trie over every fixed spelling in [`LITERALS`]. Edges live in one
//! hash table keyed by `(node, byte)`; each node records the kind it accepts,
//! if any. Classification walks from the root while an edge exists and
//! returns the deepest accepting node seen, which gives longest-match
//! semantics (`<>=` over `<>` over `<`, `wj1` over `wj`).

use qlex_syntax::{TokenKind, LITERALS};
use rustc_hash::FxHashMap;
use std::sync::OnceLock;

/// A fixed-spelling token recognised at some offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiteralMatch {
    pub kind: TokenKind,
    /// Length in bytes. Always at least 1.
    pub len: usize,
}

impl LiteralMatch {
    pub fn new(kind: TokenKind, len: usize) -> Self {
        Self { kind, len }
    }
}

/// Problems found while building a classifier from a literal table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrieBuildError {
    #[error("spelling {spelling:?} is mapped to both {existing} and {duplicate}")]
    DuplicateSpelling {
        spelling: String,
        existing: TokenKind,
        duplicate: TokenKind,
    },

    #[error("empty spelling for {0}")]
    EmptySpelling(TokenKind),
}

type NodeId = u32;

const ROOT: NodeId = 0;

/// Read-only longest-match classifier.
pub struct Classifier {
    edges: FxHashMap<(NodeId, u8), NodeId>,
    /// Accepting kind per node, indexed by node id.
    accepts: Vec<Option<TokenKind>>,
}

impl Classifier {
    /// Build a classifier from `(spelling, kind)` pairs.
    pub fn new(table: &[(&str, TokenKind)]) -> Result<Self, TrieBuildError> {
        let mut classifier = Classifier {
            edges: FxHashMap::default(),
            accepts: vec![None],
        };
        for &(spelling, kind) in table {
            classifier.insert(spelling, kind)?;
        }
        Ok(classifier)
    }

    fn insert(&mut self, spelling: &str, kind: TokenKind) -> Result<(), TrieBuildError> {
        if spelling.is_empty() {
            return Err(TrieBuildError::EmptySpelling(kind));
        }
        let mut node = ROOT;
        for &byte in spelling.as_bytes() {
            let next = self.accepts.len() as NodeId;
            node = *self.edges.entry((node, byte)).or_insert(next);
            if node == next {
                self.accepts.push(None);
            }
        }
        let slot = &mut self.accepts[node as usize];
        if let Some(existing) = *slot {
            return Err(TrieBuildError::DuplicateSpelling {
                spelling: spelling.to_string(),
                existing,
                duplicate: kind,
            });
        }
        *slot = Some(kind);
        Ok(())
    }

    /// Find the longest fixed spelling that starts at `offset`.
    pub fn classify(&self, text: &[u8], offset: usize) -> Option<LiteralMatch> {
        let mut node = ROOT;
        let mut best = None;
        for (i, &byte) in text.get(offset..)?.iter().enumerate() {
            match self.edges.get(&(node, byte)) {
                Some(&next) => node = next,
                None => break,
            }
            if let Some(kind) = self.accepts[node as usize] {
                best = Some(LiteralMatch::new(kind, i + 1));
            }
        }
        best
    }

    /// Number of trie nodes, including the root.
    pub fn node_count(&self) -> usize {
        self.accepts.len()
    }

    /// Number of spellings recognised.
    pub fn len(&self) -> usize {
        self.accepts.iter().filter(|a| a.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

static CLASSIFIER: OnceLock<Classifier> = OnceLock::new();

/// The process-wide classifier over [`LITERALS`], built on first use.
pub fn classifier() -> &'static Classifier {
    CLASSIFIER.get_or_init(|| {
        let classifier = match Classifier::new(LITERALS) {
            Ok(classifier) => classifier,
            // LITERALS is static data checked by the tests below.
            Err(err) => panic!("invalid literal table: {err}"),
        };
        tracing::debug!(
            literals = LITERALS.len(),
            nodes = classifier.node_count(),
            "built literal classifier"
        );
        classifier
    })
}
