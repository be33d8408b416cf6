//! Shared session handle exposing navigator operations as named actions.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde_json::Value;
use tokio::sync::Mutex;
use tracing::debug;

use crate::entry::DirEntry;
use crate::navigator::{Ascent, NavError, Navigator};

/// A sharable handle around one [`Navigator`].
///
/// This is the adapter between the navigator's typed API and callers that
/// speak in named actions with string results (tool dispatchers, front
/// ends). Clones share the same navigator; all access goes through one
/// mutex so concurrent dispatch cannot interleave descend/ascend
/// transitions and break the trail invariant.
///
/// Every method renders its outcome as descriptive text. Failures never
/// propagate: they become readable failure strings, so a dispatch layer
/// can hand them straight back to its caller.
#[derive(Debug, Clone)]
pub struct NavigatorSession {
    navigator: Arc<Mutex<Navigator>>,
}

impl NavigatorSession {
    /// Wrap an already-opened navigator.
    pub fn new(navigator: Navigator) -> Self {
        Self {
            navigator: Arc::new(Mutex::new(navigator)),
        }
    }

    /// Open a navigator rooted at `root` and wrap it.
    ///
    /// # Errors
    ///
    /// Same as [`Navigator::open`]: the root must exist and be a
    /// directory.
    pub fn open(root: impl AsRef<Path>) -> Result<Self, NavError> {
        Navigator::open(root).map(Self::new)
    }

    /// The root boundary of the underlying navigator.
    pub async fn root(&self) -> PathBuf {
        self.navigator.lock().await.root().to_path_buf()
    }

    /// The current position of the underlying navigator.
    pub async fn current_path(&self) -> PathBuf {
        self.navigator.lock().await.current_path().to_path_buf()
    }

    /// Move into a child directory and describe the result.
    pub async fn descend(&self, target: &str) -> String {
        match self.navigator.lock().await.descend(target) {
            Ok(path) => format!("moved into subdirectory: {}", display_name(path)),
            Err(err) => format!("failed to enter subdirectory: {err}"),
        }
    }

    /// Move to the parent directory and describe the result.
    ///
    /// Reaching the top never reads as a failure, only as information.
    pub async fn ascend(&self) -> String {
        match self.navigator.lock().await.ascend() {
            Ascent::Moved(path) => format!("moved to parent directory: {}", display_name(&path)),
            Ascent::AtRoot => "already at the top-level directory".to_string(),
        }
    }

    /// The trail from the root to the current position, as directory
    /// names joined with ` -> `.
    pub async fn current_trail(&self) -> String {
        self.navigator
            .lock()
            .await
            .trail()
            .iter()
            .map(|path| display_name(path))
            .collect::<Vec<_>>()
            .join(" -> ")
    }

    /// Render the current directory's contents, one entry per line.
    pub async fn list(&self) -> String {
        match self.navigator.lock().await.list() {
            Ok(entries) if entries.is_empty() => "directory is empty".to_string(),
            Ok(entries) => entries
                .iter()
                .map(DirEntry::render)
                .collect::<Vec<_>>()
                .join("\n"),
            Err(err) => format!("failed to list directory contents: {err}"),
        }
    }

    /// Create an empty file in the current directory.
    pub async fn create_file(&self, name: &str) -> String {
        match self.navigator.lock().await.create_file(name) {
            Ok(_) => format!("created file: {name}"),
            Err(err) => format!("failed to create file: {err}"),
        }
    }

    /// Delete a file from the current directory.
    pub async fn remove_file(&self, name: &str) -> String {
        match self.navigator.lock().await.remove_file(name) {
            Ok(()) => format!("removed file: {name}"),
            Err(err) => format!("failed to remove file: {err}"),
        }
    }

    /// Rename a file within the current directory.
    pub async fn rename_file(&self, old: &str, new: &str) -> String {
        match self.navigator.lock().await.rename_file(old, new) {
            Ok(_) => format!("renamed {old} to {new}"),
            Err(err) => format!("failed to rename file: {err}"),
        }
    }

    /// Dispatch a named action with JSON arguments.
    ///
    /// Unknown actions and missing arguments come back as descriptive
    /// failure strings like every other outcome, so a dispatch layer
    /// never has to special-case them.
    pub async fn invoke(&self, action: &str, args: &Value) -> String {
        debug!(action, "dispatching session action");
        match action {
            "descend" => match string_arg(args, "target") {
                Some(target) => self.descend(&target).await,
                None => missing_argument(action, "target"),
            },
            "ascend" => self.ascend().await,
            "current_trail" => self.current_trail().await,
            "list" => self.list().await,
            "create_file" => match string_arg(args, "name") {
                Some(name) => self.create_file(&name).await,
                None => missing_argument(action, "name"),
            },
            "remove_file" => match string_arg(args, "name") {
                Some(name) => self.remove_file(&name).await,
                None => missing_argument(action, "name"),
            },
            "rename_file" => match (string_arg(args, "old"), string_arg(args, "new")) {
                (Some(old), Some(new)) => self.rename_file(&old, &new).await,
                (None, _) => missing_argument(action, "old"),
                (_, None) => missing_argument(action, "new"),
            },
            other => format!("unknown action: {other}"),
        }
    }
}

fn string_arg(args: &Value, key: &str) -> Option<String> {
    args.get(key).and_then(Value::as_str).map(str::to_string)
}

fn missing_argument(action: &str, key: &str) -> String {
    format!("failed to run {action}: missing required argument '{key}'")
}

/// Final path component, or the whole path when there is none (e.g. `/`).
fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
