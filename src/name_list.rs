//! Composable name predicates.
//!
//! A [`NameList`] combines compiled patterns (and nested lists) under an
//! [`MatchMode::All`] or [`MatchMode::Any`] rule, giving arbitrary AND/OR
//! trees over base names.

use crate::error::FinderError;
use crate::pattern::Pattern;
use crate::traits::IntoNameMatcher;

// ---------------------------------------------------------------------------
// NameList
// ---------------------------------------------------------------------------

/// How a [`NameList`] combines its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Every child must match. An empty list matches everything.
    #[default]
    All,

    /// At least one child must match. An empty list matches nothing.
    Any,
}

/// One child of a [`NameList`]: a compiled pattern leaf, or a nested list.
///
/// The tree is built bottom-up by the caller, so it is always acyclic.
#[derive(Debug, Clone)]
pub enum NameMatcher {
    /// A single compiled pattern.
    Pattern(Pattern),

    /// A nested predicate with its own mode.
    List(NameList),
}

impl NameMatcher {
    fn matches(&self, candidate: &str) -> bool {
        match self {
            Self::Pattern(pattern) => pattern.matches(candidate),
            Self::List(list) => list.matches(candidate),
        }
    }
}

/// A composable boolean test over a base name.
///
/// # Example
///
/// ```rust
/// use finder::{MatchMode, NameList};
///
/// // "*.rs" AND ("test_*" OR "bench_*")
/// let mut special = NameList::new(MatchMode::Any);
/// special.add_name("test_*").unwrap().add_name("bench_*").unwrap();
///
/// let mut rule = NameList::new(MatchMode::All);
/// rule.add_name("*.rs").unwrap().add_name(special).unwrap();
///
/// assert!(rule.matches("test_parse.rs"));
/// assert!(rule.matches("bench_walk.rs"));
/// assert!(!rule.matches("main.rs"));
/// assert!(!rule.matches("test_parse.js"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct NameList {
    mode: MatchMode,
    names: Vec<NameMatcher>,
}

impl NameList {
    /// Create an empty list with the given mode.
    pub fn new(mode: MatchMode) -> Self {
        Self {
            mode,
            names: Vec::new(),
        }
    }

    /// Append a child.
    ///
    /// Accepts anything [`IntoNameMatcher`]: glob strings and `Regex`
    /// values compile to patterns, [`Pattern`]s are used directly, and a
    /// nested `NameList` is attached as a composite child.
    ///
    /// # Errors
    ///
    /// Returns [`FinderError::InvalidPattern`] if a glob argument fails to
    /// compile; the list is left unchanged.
    pub fn add_name<N: IntoNameMatcher>(&mut self, name: N) -> Result<&mut Self, FinderError> {
        let matcher = name.into_name_matcher()?;
        self.names.push(matcher);
        Ok(self)
    }

    /// Evaluate the predicate against a base name.
    ///
    /// Short-circuits: `All` stops at the first non-matching child, `Any`
    /// at the first matching one.
    pub fn matches(&self, candidate: &str) -> bool {
        match self.mode {
            MatchMode::All => self.names.iter().all(|n| n.matches(candidate)),
            MatchMode::Any => self.names.iter().any(|n| n.matches(candidate)),
        }
    }

    /// The combination mode of this list.
    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Whether the list has no children.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
