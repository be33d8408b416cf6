//! Directory entry descriptors produced by listings.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Classification of a directory child.
///
/// Tested in order: regular file, directory, otherwise link. Everything
/// that is neither a regular file nor a directory (symbolic links, FIFOs,
/// sockets, device nodes) reports as [`EntryKind::Link`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Regular file.
    File,
    /// Directory.
    Directory,
    /// Symbolic link or other non-regular node.
    Link,
}

impl EntryKind {
    /// Uppercase label used in rendered listings.
    pub fn label(self) -> &'static str {
        match self {
            EntryKind::File => "FILE",
            EntryKind::Directory => "DIRECTORY",
            EntryKind::Link => "LINK",
        }
    }
}

/// Metadata for one child of a listed directory.
///
/// Produced transiently by [`Navigator::list`](crate::Navigator::list);
/// nothing here is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirEntry {
    /// Entry name (single component, no separators).
    pub name: String,
    /// Absolute path of the entry.
    pub path: String,
    /// Entry classification.
    pub kind: EntryKind,
    /// Size in bytes. Taken without following links, so link entries
    /// report the link's own size and dangling links stay listable.
    pub size: u64,
    /// For symbolic links: the file-name component of the link's literal
    /// one-hop target. `None` for every other kind.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

impl DirEntry {
    /// Build the descriptor for the child `name` of `parent`.
    ///
    /// Metadata is read with `symlink_metadata` so links are described as
    /// themselves rather than as their targets. The child path is the
    /// parent joined with the name; it is not re-canonicalized, keeping
    /// the non-following posture consistent for link entries.
    pub(crate) fn from_child(parent: &Path, name: String) -> io::Result<Self> {
        let path = parent.join(&name);
        let meta = path.symlink_metadata()?;
        let file_type = meta.file_type();

        let kind = if file_type.is_file() {
            EntryKind::File
        } else if file_type.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::Link
        };

        // One-hop target read: the literal target recorded by the link,
        // never resolved. Non-symlink specials have no target at all.
        let target = if file_type.is_symlink() {
            fs::read_link(&path)
                .ok()
                .and_then(|t| t.file_name().map(|n| n.to_string_lossy().into_owned()))
        } else {
            None
        };

        Ok(Self {
            name,
            path: path.to_string_lossy().into_owned(),
            kind,
            size: meta.len(),
            target,
        })
    }

    /// Render the entry as one listing line.
    ///
    /// ```text
    /// FILE: notes.txt (size: 120 bytes)
    /// LINK: latest (size: 9 bytes) -> build-42
    /// ```
    pub fn render(&self) -> String {
        let mut line = format!("{}: {} (size: {} bytes)", self.kind.label(), self.name, self.size);
        if let Some(target) = &self.target {
            line.push_str(" -> ");
            line.push_str(target);
        }
        line
    }
}
