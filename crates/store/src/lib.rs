//! # Context Store
//!
//! Persistent, slug-addressed storage for project context documents.
//!
//! ## Layout
//!
//! ```text
//! <root>/
//!   ├── <slug>.md          document body (replaced whole on every write)
//!   └── <slug>.meta.json   ProjectMeta { slug, title, description, updatedAt }
//! ```
//!
//! Every slug-taking operation validates the raw slug first, then confines the
//! resulting path to the store root before touching the filesystem.
//!
//! ## Example
//!
//! ```no_run
//! use context_store::Store;
//!
//! #[tokio::main]
//! async fn main() -> context_store::Result<()> {
//!     let store = Store::new("contexts");
//!     store
//!         .write_context("demo-project", "# Demo\nHello", "Demo", "A demo")
//!         .await?;
//!
//!     for meta in store.list_projects().await? {
//!         println!("{}: {}", meta.slug, meta.description);
//!     }
//!     Ok(())
//! }
//! ```

mod error;
mod paths;
mod slug;
mod store;
mod types;

pub use error::{NotFoundKind, Result, StoreError};
pub use paths::{content_file_name, meta_file_name, resolve_safe_path, CONTENT_EXT, META_EXT};
pub use slug::{is_valid_slug, validate_slug};
pub use store::Store;
pub use types::ProjectMeta;
