//! The bounded navigator: a working directory confined to a root subtree.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use crate::entry::DirEntry;

/// Errors produced by [`Navigator`] operations.
///
/// Every filesystem failure is classified here at the point it is
/// detected; no raw I/O error crosses the navigator boundary.
#[derive(Debug, Error)]
pub enum NavError {
    /// Root path does not exist (construction-time, no instance produced).
    #[error("root path not found: {0}")]
    RootNotFound(PathBuf),
    /// Root path exists but is not a directory (construction-time).
    #[error("root path is not a directory: {0}")]
    RootNotADirectory(PathBuf),
    /// Descend target is not a direct child of the current position.
    #[error("no such subdirectory: {0}")]
    ChildNotFound(String),
    /// Descend target exists but is not a directory.
    #[error("expected a directory, found a file: {0}")]
    NotADirectory(String),
    /// Descend target is a symbolic link. Links may point anywhere,
    /// including outside the root boundary, so descent through them is
    /// refused without resolving them.
    #[error("refusing to enter symbolic link: {0}")]
    SymlinkDescentDenied(String),
    /// Mutation target is a directory where a file was required.
    #[error("expected a file, found a directory: {0}")]
    NotAFile(String),
    /// Entry name is empty or not a single path component.
    #[error("invalid entry name: {0}")]
    InvalidName(String),
    /// Reading a directory failed at the filesystem level. Distinct from
    /// the directory being empty, which is a successful empty listing.
    #[error("failed to read directory {path}: {source}")]
    ListFailed {
        /// Directory that could not be read.
        path: PathBuf,
        /// Underlying filesystem error.
        #[source]
        source: io::Error,
    },
    /// A file mutation failed at the filesystem level.
    #[error("failed to modify {path}: {source}")]
    MutationFailed {
        /// Entry that could not be modified.
        path: PathBuf,
        /// Underlying filesystem error.
        #[source]
        source: io::Error,
    },
}

/// Outcome of [`Navigator::ascend`].
///
/// Ascending never fails. Reaching the root boundary is a successful,
/// informational outcome rather than an error, so callers can render a
/// message instead of a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ascent {
    /// Moved to the parent directory; carries the new current position.
    Moved(PathBuf),
    /// Already at the root boundary; position unchanged.
    AtRoot,
}

/// A working directory confined to a root subtree.
///
/// The navigator owns a canonical root boundary, a current position and
/// the trail of directories taken from the root to that position. The
/// current position only ever moves to an enumerated direct child
/// ([`descend`](Self::descend)) or back along the recorded trail
/// ([`ascend`](Self::ascend)), so it cannot leave the root subtree.
///
/// One instance is one logical session. Operations are synchronous
/// metadata queries; callers that share an instance across tasks must
/// serialize access (see [`NavigatorSession`](crate::NavigatorSession)).
///
/// # Example
///
/// ```no_run
/// use sextant::Navigator;
///
/// # fn main() -> Result<(), sextant::NavError> {
/// let mut nav = Navigator::open("/srv/workspace")?;
/// nav.descend("project")?;
/// for entry in nav.list()? {
///     println!("{}", entry.render());
/// }
/// nav.ascend();
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Navigator {
    root: PathBuf,
    current: PathBuf,
    trail: Vec<PathBuf>,
}

impl Navigator {
    /// Open a navigator rooted at `root`.
    ///
    /// The path is canonicalized and becomes both the root boundary and
    /// the initial current position; the trail starts as that single
    /// entry.
    ///
    /// # Errors
    ///
    /// [`NavError::RootNotFound`] if the path does not exist,
    /// [`NavError::RootNotADirectory`] if it exists but is not a
    /// directory.
    pub fn open(root: impl AsRef<Path>) -> Result<Self, NavError> {
        let root = root.as_ref();
        if !root.exists() {
            return Err(NavError::RootNotFound(root.to_path_buf()));
        }
        if !root.is_dir() {
            return Err(NavError::RootNotADirectory(root.to_path_buf()));
        }
        let root = root
            .canonicalize()
            .map_err(|_| NavError::RootNotFound(root.to_path_buf()))?;
        debug!(root = %root.display(), "opened navigator");
        Ok(Self {
            current: root.clone(),
            trail: vec![root.clone()],
            root,
        })
    }

    /// The immutable root boundary.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The current position. Always the root or a descendant of it.
    pub fn current_path(&self) -> &Path {
        &self.current
    }

    /// Snapshot of the trail from the root to the current position.
    ///
    /// The first element is always the root and the last is always the
    /// current position. Mutating the returned vector has no effect on
    /// the navigator.
    pub fn trail(&self) -> Vec<PathBuf> {
        self.trail.clone()
    }

    /// Move into a direct child directory of the current position.
    ///
    /// `target` may be a bare name or a path; either way the joined
    /// candidate must literally equal one of the enumerated direct
    /// children, which rejects `..`, `.` and multi-segment shortcuts as
    /// [`NavError::ChildNotFound`]. On success the candidate becomes the
    /// current position and is pushed onto the trail. Nothing changes on
    /// any failure.
    ///
    /// # Errors
    ///
    /// [`NavError::ChildNotFound`] if the candidate is not a direct
    /// child, [`NavError::NotADirectory`] if it is not a directory,
    /// [`NavError::SymlinkDescentDenied`] if it is a symbolic link (even
    /// one pointing at a directory), [`NavError::ListFailed`] if the
    /// current directory cannot be enumerated.
    pub fn descend(&mut self, target: &str) -> Result<&Path, NavError> {
        let requested = Path::new(target);
        let candidate = if requested.is_absolute() {
            requested.to_path_buf()
        } else {
            self.current.join(requested)
        };

        if !self.children()?.iter().any(|child| *child == candidate) {
            return Err(NavError::ChildNotFound(target.to_string()));
        }
        if !candidate.is_dir() {
            return Err(NavError::NotADirectory(target.to_string()));
        }
        let is_link = candidate
            .symlink_metadata()
            .map(|meta| meta.file_type().is_symlink())
            .unwrap_or(false);
        if is_link {
            warn!(target, "denied descent through symbolic link");
            return Err(NavError::SymlinkDescentDenied(target.to_string()));
        }

        debug!(from = %self.current.display(), to = %candidate.display(), "descend");
        self.current = candidate;
        self.trail.push(self.current.clone());
        Ok(&self.current)
    }

    /// Move back to the parent directory along the recorded trail.
    ///
    /// At the root boundary this is a no-op returning [`Ascent::AtRoot`].
    /// Otherwise the trail is popped and its new top becomes the current
    /// position. The recorded trail is authoritative over the physical
    /// filesystem parent, which may have changed since we descended.
    pub fn ascend(&mut self) -> Ascent {
        if self.current == self.root {
            debug!("ascend at root boundary; position unchanged");
            return Ascent::AtRoot;
        }
        self.trail.pop();
        self.current = self
            .trail
            .last()
            .cloned()
            .unwrap_or_else(|| self.root.clone());
        debug!(to = %self.current.display(), "ascend");
        Ascent::Moved(self.current.clone())
    }

    /// Describe every direct child of the current position.
    ///
    /// Entries are sorted by name so a given directory state always
    /// renders the same way. An empty directory yields an empty vector,
    /// not an error.
    ///
    /// # Errors
    ///
    /// [`NavError::ListFailed`] if the directory or an entry's metadata
    /// cannot be read.
    pub fn list(&self) -> Result<Vec<DirEntry>, NavError> {
        let read = fs::read_dir(&self.current).map_err(|source| NavError::ListFailed {
            path: self.current.clone(),
            source,
        })?;

        let mut entries = Vec::new();
        for entry in read {
            let entry = entry.map_err(|source| NavError::ListFailed {
                path: self.current.clone(),
                source,
            })?;
            let name = entry.file_name().to_string_lossy().into_owned();
            let descriptor =
                DirEntry::from_child(&self.current, name).map_err(|source| NavError::ListFailed {
                    path: entry.path(),
                    source,
                })?;
            entries.push(descriptor);
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    /// Create an empty file named `name` directly under the current
    /// position. Creating a file that already exists is a no-op success.
    ///
    /// # Errors
    ///
    /// [`NavError::InvalidName`] if `name` is not a single path
    /// component, [`NavError::MutationFailed`] on a filesystem error.
    pub fn create_file(&self, name: &str) -> Result<PathBuf, NavError> {
        validate_name(name)?;
        let path = self.current.join(name);
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| NavError::MutationFailed {
                path: path.clone(),
                source,
            })?;
        debug!(path = %path.display(), "created file");
        Ok(path)
    }

    /// Delete the direct child `name` of the current position. Only
    /// regular files and links are deletable; directories are refused.
    ///
    /// # Errors
    ///
    /// [`NavError::InvalidName`] for a malformed name,
    /// [`NavError::ChildNotFound`] if the child does not exist,
    /// [`NavError::NotAFile`] if it is a directory,
    /// [`NavError::MutationFailed`] on a filesystem error.
    pub fn remove_file(&self, name: &str) -> Result<(), NavError> {
        validate_name(name)?;
        let path = self.current.join(name);
        let meta = path
            .symlink_metadata()
            .map_err(|_| NavError::ChildNotFound(name.to_string()))?;
        if meta.is_dir() {
            return Err(NavError::NotAFile(name.to_string()));
        }
        fs::remove_file(&path).map_err(|source| NavError::MutationFailed {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), "removed file");
        Ok(())
    }

    /// Rename the direct child `old` to `new`, both within the current
    /// position.
    ///
    /// # Errors
    ///
    /// [`NavError::InvalidName`] for a malformed name,
    /// [`NavError::ChildNotFound`] if `old` does not exist,
    /// [`NavError::MutationFailed`] on a filesystem error.
    pub fn rename_file(&self, old: &str, new: &str) -> Result<PathBuf, NavError> {
        validate_name(old)?;
        validate_name(new)?;
        let from = self.current.join(old);
        if from.symlink_metadata().is_err() {
            return Err(NavError::ChildNotFound(old.to_string()));
        }
        let to = self.current.join(new);
        fs::rename(&from, &to).map_err(|source| NavError::MutationFailed {
            path: from.clone(),
            source,
        })?;
        debug!(from = %from.display(), to = %to.display(), "renamed file");
        Ok(to)
    }

    /// Enumerate the direct children of the current position as literal
    /// paths (current position joined with each entry name).
    fn children(&self) -> Result<Vec<PathBuf>, NavError> {
        let read = fs::read_dir(&self.current).map_err(|source| NavError::ListFailed {
            path: self.current.clone(),
            source,
        })?;
        let mut children = Vec::new();
        for entry in read {
            let entry = entry.map_err(|source| NavError::ListFailed {
                path: self.current.clone(),
                source,
            })?;
            children.push(entry.path());
        }
        Ok(children)
    }
}

/// Require a bare entry name: exactly one normal path component.
fn validate_name(name: &str) -> Result<(), NavError> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(NavError::InvalidName(name.to_string())),
    }
}
