//! # Playlist workflow
//!
//! The part between the catalog client and the CLI:
//!
//! ```text
//! orchestrate  (one entry or a list of entries)
//!     ↓
//! resolve      (free text → artist / album / track)
//!     ↓
//! collect      (cursor pagination, detail batches)  → rank (top N by popularity)
//!     ↓
//! writer       (playlist inserts, 100 per request)
//! ```
//!
//! All calls are sequential. The only suspension points besides the
//! requests themselves are the fixed [`crate::types::Pacing`] delays.

pub mod collect;
pub mod orchestrate;
pub mod rank;
pub mod resolve;
pub mod writer;

pub use orchestrate::{ArtistMode, EntryKind, PlaylistBuilder, read_entries};
pub use resolve::SelectionPolicy;
