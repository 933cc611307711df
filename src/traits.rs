use std::path::{Path, PathBuf};

use regex::Regex;

use crate::entry::Entry;
use crate::error::FinderError;
use crate::name_list::{NameList, NameMatcher};
use crate::pattern::Pattern;

// ---------------------------------------------------------------------------
// Matcher
// ---------------------------------------------------------------------------

/// A custom predicate over a visited [`Entry`].
///
/// Implement this (or just pass a closure — any
/// `Fn(&Entry) -> bool + Send + Sync` qualifies) to filter on anything the
/// entry carries: path, stat info, depth.
///
/// # Thread Safety
///
/// `Send + Sync` are required so a configured [`Finder`](crate::Finder) can
/// be shared across threads and its asynchronous fetches can be spawned
/// onto multi-threaded runtimes.
///
/// # Example
///
/// ```rust
/// use finder::{Entry, Matcher};
///
/// struct NonEmpty;
///
/// impl Matcher for NonEmpty {
///     fn is_match(&self, entry: &Entry) -> bool {
///         entry.metadata.as_ref().map(|m| m.len() > 0).unwrap_or(false)
///     }
/// }
/// ```
pub trait Matcher: Send + Sync {
    /// Returns `true` if this entry should be included in results.
    fn is_match(&self, entry: &Entry) -> bool;
}

impl<F> Matcher for F
where
    F: Fn(&Entry) -> bool + Send + Sync,
{
    fn is_match(&self, entry: &Entry) -> bool {
        self(entry)
    }
}

// ---------------------------------------------------------------------------
// IntoPattern
// ---------------------------------------------------------------------------

/// Conversion into a compiled [`Pattern`].
///
/// This carries the pattern-argument polymorphism of the API: glob strings
/// compile via the translator, pre-built [`Regex`] values are adopted
/// as-is, and an existing [`Pattern`] passes through. Anything else is a
/// compile error — there is no runtime "invalid pattern type".
pub trait IntoPattern {
    /// Perform the conversion. Fails only when a glob does not compile.
    fn into_pattern(self) -> Result<Pattern, FinderError>;
}

impl IntoPattern for &str {
    fn into_pattern(self) -> Result<Pattern, FinderError> {
        Pattern::new(self)
    }
}

impl IntoPattern for String {
    fn into_pattern(self) -> Result<Pattern, FinderError> {
        Pattern::new(&self)
    }
}

impl IntoPattern for Regex {
    fn into_pattern(self) -> Result<Pattern, FinderError> {
        Ok(Pattern::from(self))
    }
}

impl IntoPattern for Pattern {
    fn into_pattern(self) -> Result<Pattern, FinderError> {
        Ok(self)
    }
}

// ---------------------------------------------------------------------------
// IntoNameMatcher
// ---------------------------------------------------------------------------

/// Conversion into a [`NameList`] child: a pattern leaf or a nested list.
///
/// Accepted by [`Finder::names`](crate::Finder::names) and
/// [`NameList::add_name`], which is what makes composite include rules
/// (`names(nested_any_list)`) possible.
pub trait IntoNameMatcher {
    /// Perform the conversion. Fails only when a glob does not compile.
    fn into_name_matcher(self) -> Result<NameMatcher, FinderError>;
}

impl IntoNameMatcher for &str {
    fn into_name_matcher(self) -> Result<NameMatcher, FinderError> {
        self.into_pattern().map(NameMatcher::Pattern)
    }
}

impl IntoNameMatcher for String {
    fn into_name_matcher(self) -> Result<NameMatcher, FinderError> {
        self.into_pattern().map(NameMatcher::Pattern)
    }
}

impl IntoNameMatcher for Regex {
    fn into_name_matcher(self) -> Result<NameMatcher, FinderError> {
        self.into_pattern().map(NameMatcher::Pattern)
    }
}

impl IntoNameMatcher for Pattern {
    fn into_name_matcher(self) -> Result<NameMatcher, FinderError> {
        Ok(NameMatcher::Pattern(self))
    }
}

impl IntoNameMatcher for NameList {
    fn into_name_matcher(self) -> Result<NameMatcher, FinderError> {
        Ok(NameMatcher::List(self))
    }
}

// ---------------------------------------------------------------------------
// IntoRoots
// ---------------------------------------------------------------------------

/// Conversion into a list of traversal roots.
///
/// A single path is shorthand for a one-element list, so
/// `fetch_sync("src")` and `fetch_sync(["src", "tests"])` both read
/// naturally.
pub trait IntoRoots {
    /// Perform the conversion.
    fn into_roots(self) -> Vec<PathBuf>;
}

impl IntoRoots for &str {
    fn into_roots(self) -> Vec<PathBuf> {
        vec![PathBuf::from(self)]
    }
}

impl IntoRoots for String {
    fn into_roots(self) -> Vec<PathBuf> {
        vec![PathBuf::from(self)]
    }
}

impl IntoRoots for &Path {
    fn into_roots(self) -> Vec<PathBuf> {
        vec![self.to_path_buf()]
    }
}

impl IntoRoots for PathBuf {
    fn into_roots(self) -> Vec<PathBuf> {
        vec![self]
    }
}

impl<P: AsRef<Path>> IntoRoots for &[P] {
    fn into_roots(self) -> Vec<PathBuf> {
        self.iter().map(|p| p.as_ref().to_path_buf()).collect()
    }
}

impl<P: AsRef<Path>, const N: usize> IntoRoots for [P; N] {
    fn into_roots(self) -> Vec<PathBuf> {
        self.iter().map(|p| p.as_ref().to_path_buf()).collect()
    }
}

impl<P: AsRef<Path>> IntoRoots for Vec<P> {
    fn into_roots(self) -> Vec<PathBuf> {
        self.iter().map(|p| p.as_ref().to_path_buf()).collect()
    }
}
