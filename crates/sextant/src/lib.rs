//! Sextant: bounded working-directory navigation for agent tools.
//!
//! Sextant confines filesystem navigation driven by an untrusted caller
//! (typically an LLM agent picking tool arguments) to a root subtree. A
//! [`Navigator`] tracks a current position and the trail taken from the
//! root, refuses descent through symbolic links, and produces structured
//! directory listings. A [`NavigatorSession`] wraps one navigator behind a
//! mutex and renders every outcome as descriptive text for a tool
//! dispatcher.

mod entry;
mod navigator;
mod session;
mod tools;

pub use entry::{DirEntry, EntryKind};
pub use navigator::{Ascent, NavError, Navigator};
pub use session::NavigatorSession;
pub use tools::{ToolDefinition, ToolSummary, navigation_tools};
