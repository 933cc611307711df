//! # finder
//!
//! Criteria-driven filesystem finder — glob filters, depth bounds, sync and
//! async traversal.
//!
//! finder walks one or more root directories and returns the paths of files
//! and/or directories matching a declarative set of criteria: entry type,
//! glob or regex name patterns, depth range, pruned subtrees, and custom
//! predicates. The same query runs blocking ([`Finder::fetch_sync`]) or with
//! non-blocking fan-out I/O ([`Finder::fetch`]); both produce the identical
//! sorted path list.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use finder::EntryType;
//!
//! # fn main() -> Result<(), finder::FinderError> {
//! // every Rust source file under src/ or tests/, skipping target/
//! let sources = finder::find()
//!     .entry_type(EntryType::File)
//!     .names("*.rs")?
//!     .exclude("target")?
//!     .fetch_sync(["src", "tests"])?;
//!
//! for path in sources {
//!     println!("{}", path.display());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Composing name rules
//!
//! [`names()`](Finder::names) calls AND together; a nested [`NameList`] in
//! `Any` mode expresses OR groups inside the conjunction:
//!
//! ```rust
//! use finder::{MatchMode, NameList};
//!
//! // "*.ext" AND ("*1*" OR "*2*")
//! let mut numbered = NameList::new(MatchMode::Any);
//! numbered.add_name("*1*").unwrap().add_name("*2*").unwrap();
//!
//! let mut query = finder::find();
//! query.names("*.ext").unwrap().names(numbered).unwrap();
//! ```
//!
//! # Prune vs. exclude
//!
//! [`exclude()`](Finder::exclude) prunes: a matching directory is never
//! entered, so nothing below it can appear. [`not_names()`](Finder::not_names)
//! only censors the result list — a matching directory is still descended
//! into, and its children are reported as usual.
//!
//! # Glob grammar
//!
//! `*` and `?` match within a single path segment (never across `/`),
//! `{a,b}` alternation nests, `\` escapes the next metacharacter, and a
//! wildcard never matches a leading `.` unless the pattern itself starts
//! with one. A delimiter-framed pattern (`/^v\d+$/i`) skips glob
//! translation entirely and is compiled as a raw regular expression;
//! pre-built [`regex::Regex`] values are accepted anywhere a pattern is.

#![forbid(unsafe_code)]

mod builder;
mod entry;
mod error;
mod name_list;
mod pattern;
mod traits;
mod walk;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use builder::Finder;
pub use entry::{Entry, EntryKind, EntryType};
pub use error::FinderError;
pub use name_list::{MatchMode, NameList, NameMatcher};
pub use pattern::Pattern;
pub use traits::{IntoNameMatcher, IntoPattern, IntoRoots, Matcher};

// ── Entry point ───────────────────────────────────────────────────────────────

/// Create a new [`Finder`] to configure and run a query.
///
/// # Example
///
/// ```rust,no_run
/// use finder::EntryType;
///
/// # fn main() -> Result<(), finder::FinderError> {
/// let dirs = finder::find()
///     .entry_type(EntryType::Dir)
///     .not_names(".git")?
///     .fetch_sync(".")?;
/// # Ok(())
/// # }
/// ```
pub fn find() -> Finder {
    Finder::new()
}
