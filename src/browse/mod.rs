//! Filesystem side of the browser.
//!
//! This module turns a request sub-path into something the HTTP layer can
//! answer: a resolved location inside the base directory, a one-level
//! listing of a directory, and the HTML page for that listing.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │              HTTP Handlers              │
//! └────────────────────┬────────────────────┘
//!                      │  sub-path
//!                      ▼
//! ┌─────────────────────────────────────────┐
//! │                BaseDir                  │
//! │   (lexical check, canonicalize, kind)   │
//! └──────────┬─────────────────────┬────────┘
//!            │ Directory           │ File
//!            ▼                     ▼
//! ┌────────────────────┐   ┌────────────────┐
//! │  list_directory    │   │ file response  │
//! │  render_listing    │   │ (server layer) │
//! └────────────────────┘   └────────────────┘
//! ```
//!
//! Nothing here is cached: every call reads the filesystem as it is now.

mod listing;
mod render;
mod resolve;

pub use listing::{list_directory, DirectoryListing};
pub use render::{entry_href, html_escape, render_listing, render_template, ITEM_FRAGMENT, PAGE};
pub use resolve::{BaseDir, EntryKind, ResolvedPath};
