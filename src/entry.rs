use std::fs::Metadata;
use std::path::PathBuf;

/// A single node visited during a walk.
///
/// Ephemeral — produced by the walkers, consumed by the post-filter, then
/// discarded. Custom [`Matcher`](crate::Matcher) implementations receive it
/// to decide inclusion on path, stat info, or depth.
///
/// `metadata` is an `Option` so entries can be constructed without touching
/// the file system (tests, synthetic matcher inputs). The walkers always
/// populate it with the stat result.
pub struct Entry {
    /// Full path to the entry.
    pub path: PathBuf,

    /// Base name — the final path segment, without its parent path.
    pub name: String,

    /// What kind of entry this is.
    pub kind: EntryKind,

    /// Number of path segments below the traversal root. Root = 0.
    pub depth: usize,

    /// Stat result for this entry, as reported by the file system.
    pub metadata: Option<Metadata>,
}

impl Entry {
    /// Build an entry from a stat result. Walker-internal.
    pub(crate) fn new(path: PathBuf, metadata: &Metadata, depth: usize) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            name,
            kind: EntryKind::from_metadata(metadata),
            depth,
            metadata: Some(metadata.clone()),
            path,
        }
    }
}

/// The kind of a visited entry.
///
/// Stats follow symlinks, so a link classifies as its target. `Other`
/// (sockets, devices, pipes) is statted but never emitted as a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A regular file.
    File,

    /// A directory.
    Dir,

    /// Anything else.
    Other,
}

impl EntryKind {
    fn from_metadata(metadata: &Metadata) -> Self {
        if metadata.is_file() {
            Self::File
        } else if metadata.is_dir() {
            Self::Dir
        } else {
            Self::Other
        }
    }
}

/// Which entry kinds a query admits. Set via [`Finder::entry_type`](crate::Finder::entry_type).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryType {
    /// Files only.
    File,

    /// Directories only.
    Dir,

    /// No type restriction.
    #[default]
    Any,
}

impl EntryType {
    /// Whether an entry of `kind` passes this restriction.
    pub(crate) fn admits(self, kind: EntryKind) -> bool {
        match self {
            Self::File => kind == EntryKind::File,
            Self::Dir => kind == EntryKind::Dir,
            Self::Any => true,
        }
    }
}
