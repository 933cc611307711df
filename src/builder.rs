use std::fmt;
use std::path::PathBuf;

use futures::future;

use crate::entry::{Entry, EntryType};
use crate::error::FinderError;
use crate::name_list::NameList;
use crate::pattern::Pattern;
use crate::traits::{IntoNameMatcher, IntoPattern, IntoRoots, Matcher};
use crate::walk::{walk_root_async, walk_root_sync, PreFilter};

// ---------------------------------------------------------------------------
// Finder
// ---------------------------------------------------------------------------

/// Entry point for configuring and executing a query.
///
/// Created via [`finder::find()`](crate::find). Configure with chained
/// builder methods, then run with [`fetch_sync()`](Finder::fetch_sync) or
/// [`fetch()`](Finder::fetch). A configuration is reusable — run it as many
/// times as you like, keep refining it between runs, or [`reset()`](Finder::reset)
/// it back to defaults.
///
/// # Example
///
/// ```rust,no_run
/// use finder::EntryType;
///
/// # fn main() -> Result<(), finder::FinderError> {
/// let paths = finder::find()
///     .entry_type(EntryType::File)
///     .names("*.{rs,toml}")?
///     .exclude("target")?
///     .fetch_sync(".")?;
///
/// for path in paths {
///     println!("{}", path.display());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct Finder {
    entry_type: EntryType,
    depth_min: Option<usize>,
    depth_max: Option<usize>,
    names: NameList,
    names_not: Vec<Pattern>,
    excludes: Vec<Pattern>,
    filters: Vec<Box<dyn Matcher>>,
}

impl Finder {
    /// Create a finder with default criteria: any type, unbounded depth,
    /// no patterns.
    pub fn new() -> Self {
        Self::default()
    }

    // ── Criteria ──────────────────────────────────────────────────────────

    /// Restore all criteria to their defaults.
    pub fn reset(&mut self) -> &mut Self {
        *self = Self::default();
        self
    }

    /// Restrict results to files, directories, or both.
    pub fn entry_type(&mut self, entry_type: EntryType) -> &mut Self {
        self.entry_type = entry_type;
        self
    }

    /// Keep only entries whose depth lies in `min..=max`.
    ///
    /// Either bound may be `None` for unbounded. The ceiling is enforced
    /// during descent — the walk never goes deeper than `max` — while the
    /// floor trims the collected results.
    pub fn depth(&mut self, min: impl Into<Option<usize>>, max: impl Into<Option<usize>>) -> &mut Self {
        self.depth_min = min.into();
        self.depth_max = max.into();
        self
    }

    /// Require the base name to match `name`.
    ///
    /// Repeated calls AND together. Pass a [`NameList`](crate::NameList) in
    /// `Any` mode for OR groups within the conjunction.
    ///
    /// # Errors
    ///
    /// [`FinderError::InvalidPattern`] if a glob fails to compile; the
    /// configuration is left unchanged.
    pub fn names<N: IntoNameMatcher>(&mut self, name: N) -> Result<&mut Self, FinderError> {
        self.names.add_name(name)?;
        Ok(self)
    }

    /// Reject any entry whose base name matches `pattern`.
    ///
    /// This only removes entries from the results — a matching directory is
    /// still descended into. Use [`exclude()`](Finder::exclude) to prune.
    pub fn not_names<P: IntoPattern>(&mut self, pattern: P) -> Result<&mut Self, FinderError> {
        self.names_not.push(pattern.into_pattern()?);
        Ok(self)
    }

    /// Prune whole subtrees: a directory whose base name matches `pattern`
    /// is neither reported nor entered.
    pub fn exclude<P: IntoPattern>(&mut self, pattern: P) -> Result<&mut Self, FinderError> {
        self.excludes.push(pattern.into_pattern()?);
        Ok(self)
    }

    /// Append a custom predicate over the full [`Entry`] (path, stat info,
    /// depth). Any `Fn(&Entry) -> bool + Send + Sync` closure works.
    ///
    /// # Example
    ///
    /// ```rust
    /// let mut query = finder::find();
    /// query.filter(|entry: &finder::Entry| entry.depth > 1);
    /// ```
    pub fn filter(&mut self, matcher: impl Matcher + 'static) -> &mut Self {
        self.filters.push(Box::new(matcher));
        self
    }

    // ── Execute ───────────────────────────────────────────────────────────

    /// Walk `roots` synchronously and return the matching paths, sorted
    /// lexicographically by full path string.
    ///
    /// A single path is accepted as shorthand for a one-element root list;
    /// an empty list returns empty without touching the file system.
    ///
    /// # Errors
    ///
    /// A root that cannot be statted or listed fails the whole fetch.
    /// Failures below a root (unreadable subdirectory, entry vanishing
    /// mid-walk) skip that entry or subtree and the walk continues.
    pub fn fetch_sync(&self, roots: impl IntoRoots) -> Result<Vec<PathBuf>, FinderError> {
        let roots = roots.into_roots();
        if roots.is_empty() {
            return Ok(Vec::new());
        }

        let filter = self.pre_filter();
        let mut paths = Vec::new();
        for root in &roots {
            let nodes = walk_root_sync(root, &filter)?;
            paths.extend(self.project(nodes));
        }
        sort_paths(&mut paths);
        Ok(paths)
    }

    /// Walk `roots` with non-blocking I/O and return the matching paths.
    ///
    /// All roots are walked concurrently, and within each root sibling
    /// stats and listings overlap. The returned list is identical to what
    /// [`fetch_sync()`](Finder::fetch_sync) produces for the same
    /// configuration and file-system state — same entries, same sorted
    /// order. Error policy is also identical.
    pub async fn fetch(&self, roots: impl IntoRoots) -> Result<Vec<PathBuf>, FinderError> {
        let roots = roots.into_roots();
        if roots.is_empty() {
            return Ok(Vec::new());
        }

        let filter = self.pre_filter();
        let walks = future::join_all(roots.iter().map(|root| walk_root_async(root, &filter))).await;

        let mut paths = Vec::new();
        for nodes in walks {
            paths.extend(self.project(nodes?));
        }
        sort_paths(&mut paths);
        Ok(paths)
    }

    // ── Filter pipeline ───────────────────────────────────────────────────

    fn pre_filter(&self) -> PreFilter<'_> {
        PreFilter {
            excludes: &self.excludes,
            depth_max: self.depth_max,
        }
    }

    /// The post-filter: checks run in a fixed order but are independent —
    /// an entry survives only if every one passes.
    fn post_filter(&self, entry: &Entry) -> bool {
        if !self.entry_type.admits(entry.kind) {
            return false;
        }
        if let Some(min) = self.depth_min {
            if entry.depth < min {
                return false;
            }
        }
        if !self.names.matches(&entry.name) {
            return false;
        }
        if self.names_not.iter().any(|p| p.matches(&entry.name)) {
            return false;
        }
        self.filters.iter().all(|f| f.is_match(entry))
    }

    fn project(&self, nodes: Vec<Entry>) -> impl Iterator<Item = PathBuf> + '_ {
        nodes
            .into_iter()
            .filter(|node| self.post_filter(node))
            .map(|node| node.path)
    }
}

impl fmt::Debug for Finder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Finder")
            .field("entry_type", &self.entry_type)
            .field("depth_min", &self.depth_min)
            .field("depth_max", &self.depth_max)
            .field("names", &self.names)
            .field("names_not", &self.names_not)
            .field("excludes", &self.excludes)
            .field("filters", &self.filters.len())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// `PathBuf`'s own ordering is component-wise; the promised ordering is
/// lexicographic over the full path string.
fn sort_paths(paths: &mut [PathBuf]) {
    paths.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
}
