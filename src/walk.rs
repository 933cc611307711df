//! The two traversal strategies.
//!
//! Both walkers share one contract: stat an entry, consult the pre-filter,
//! emit files and (non-root) directories that pass, descend into passing
//! directories, and skip rejected directories entirely — no descent, no
//! emission. Failures below the root are skipped for that entry or subtree;
//! failures at the root itself propagate to the caller.
//!
//! Neither walker orders its output. The builder sorts the final flattened
//! path list, which is the only ordering promised to callers.

use std::fs;
use std::path::{Path, PathBuf};

use futures::stream::{FuturesUnordered, StreamExt};
use tracing::debug;

use crate::entry::{Entry, EntryKind};
use crate::error::FinderError;
use crate::pattern::Pattern;

// ---------------------------------------------------------------------------
// Pre-filter
// ---------------------------------------------------------------------------

/// The descent-time filter: prune patterns over base names, plus the depth
/// ceiling. Rejecting a directory here is what prevents the walk from ever
/// entering it.
pub(crate) struct PreFilter<'a> {
    pub excludes: &'a [Pattern],
    pub depth_max: Option<usize>,
}

impl PreFilter<'_> {
    pub(crate) fn allows(&self, entry: &Entry) -> bool {
        if self.excludes.iter().any(|p| p.matches(&entry.name)) {
            return false;
        }
        match self.depth_max {
            Some(max) => entry.depth <= max,
            None => true,
        }
    }
}

// ---------------------------------------------------------------------------
// Synchronous walker
// ---------------------------------------------------------------------------

/// Blocking depth-first walk of one root.
///
/// Children are visited in directory-listing order; the result is the flat
/// unsorted visitation sequence. The root directory itself is never
/// emitted; a file root is emitted at depth 0 if the pre-filter accepts it.
pub(crate) fn walk_root_sync(
    root: &Path,
    filter: &PreFilter<'_>,
) -> Result<Vec<Entry>, FinderError> {
    let metadata = fs::metadata(root).map_err(|err| FinderError::from_io(root, err))?;
    let root_entry = Entry::new(root.to_path_buf(), &metadata, 0);

    let mut nodes = Vec::new();
    if !filter.allows(&root_entry) {
        return Ok(nodes);
    }

    match root_entry.kind {
        EntryKind::File => nodes.push(root_entry),
        EntryKind::Dir => {
            let listing = fs::read_dir(root).map_err(|err| FinderError::from_io(root, err))?;
            for child in listing.flatten() {
                visit_sync(child.path(), filter, 1, &mut nodes);
            }
        }
        EntryKind::Other => {}
    }
    Ok(nodes)
}

fn visit_sync(path: PathBuf, filter: &PreFilter<'_>, depth: usize, nodes: &mut Vec<Entry>) {
    let metadata = match fs::metadata(&path) {
        Ok(m) => m,
        Err(err) => {
            debug!("skipping {}: {}", path.display(), err);
            return;
        }
    };

    let entry = Entry::new(path, &metadata, depth);
    if !filter.allows(&entry) {
        return;
    }

    match entry.kind {
        EntryKind::File => nodes.push(entry),
        EntryKind::Dir => {
            let dir = entry.path.clone();
            nodes.push(entry);
            match fs::read_dir(&dir) {
                Ok(listing) => {
                    for child in listing.flatten() {
                        visit_sync(child.path(), filter, depth + 1, nodes);
                    }
                }
                Err(err) => debug!("skipping subtree {}: {}", dir.display(), err),
            }
        }
        EntryKind::Other => {}
    }
}

// ---------------------------------------------------------------------------
// Asynchronous walker
// ---------------------------------------------------------------------------

/// Non-blocking fan-out walk of one root. Same node set as
/// [`walk_root_sync`], unspecified arrival order.
///
/// Every entry becomes one visit future (its stat, and for accepted
/// directories its child listing), all pending futures for the walk live in
/// one [`FuturesUnordered`] set, and the walk is complete exactly when the
/// set drains. The set and the accumulator are exclusively owned by this
/// invocation, and every completion runs on the polling task, so sibling
/// and cousin I/O overlaps freely without any locking.
pub(crate) async fn walk_root_async(
    root: &Path,
    filter: &PreFilter<'_>,
) -> Result<Vec<Entry>, FinderError> {
    let metadata = tokio::fs::metadata(root)
        .await
        .map_err(|err| FinderError::from_io(root, err))?;
    let root_entry = Entry::new(root.to_path_buf(), &metadata, 0);

    let mut nodes = Vec::new();
    if !filter.allows(&root_entry) {
        return Ok(nodes);
    }

    let mut pending = FuturesUnordered::new();
    match root_entry.kind {
        EntryKind::File => nodes.push(root_entry),
        EntryKind::Dir => {
            let mut listing = tokio::fs::read_dir(root)
                .await
                .map_err(|err| FinderError::from_io(root, err))?;
            while let Ok(Some(child)) = listing.next_entry().await {
                pending.push(visit_async(child.path(), 1, filter));
            }
        }
        EntryKind::Other => {}
    }

    while let Some((emitted, expand)) = pending.next().await {
        if let Some(entry) = emitted {
            nodes.push(entry);
        }
        for (path, depth) in expand {
            pending.push(visit_async(path, depth, filter));
        }
    }

    Ok(nodes)
}

/// Visit one entry: stat it, apply the pre-filter, and return the node to
/// emit (if any) together with the child paths to fan out next. A failed
/// stat resolves empty — no partial node, siblings unaffected.
async fn visit_async(
    path: PathBuf,
    depth: usize,
    filter: &PreFilter<'_>,
) -> (Option<Entry>, Vec<(PathBuf, usize)>) {
    let metadata = match tokio::fs::metadata(&path).await {
        Ok(m) => m,
        Err(err) => {
            debug!("skipping {}: {}", path.display(), err);
            return (None, Vec::new());
        }
    };

    let entry = Entry::new(path, &metadata, depth);
    if !filter.allows(&entry) {
        return (None, Vec::new());
    }

    match entry.kind {
        EntryKind::File => (Some(entry), Vec::new()),
        EntryKind::Dir => {
            let dir = entry.path.clone();
            let mut expand = Vec::new();
            match tokio::fs::read_dir(&dir).await {
                Ok(mut listing) => {
                    while let Ok(Some(child)) = listing.next_entry().await {
                        expand.push((child.path(), depth + 1));
                    }
                }
                Err(err) => debug!("skipping subtree {}: {}", dir.display(), err),
            }
            (Some(entry), expand)
        }
        EntryKind::Other => (None, Vec::new()),
    }
}
