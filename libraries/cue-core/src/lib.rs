//! Cue Player Core
//!
//! Platform-agnostic core types, traits, and error handling for Cue Player.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `TrackDescriptor`
//! - **Collaborator Traits**: `MediaHandle` (the host's media element) and
//!   `KeyValueStore` (the host's local persistence)
//! - **Error Handling**: Unified `CueError` and `Result` types
//! - **Time Formatting**: `format_time` for `m:ss` labels
//!
//! Nothing here depends on a browser; the `wasm` feature of `cue-playback`
//! provides the browser implementations of both traits.
//!
//! # Example
//!
//! ```rust
//! use cue_core::{format_time, TrackDescriptor};
//!
//! let track = TrackDescriptor::new("https://example.com/set.mp3", "Friday Set");
//! assert_eq!(track.name, "Friday Set");
//! assert_eq!(format_time(Some(75.9)), "1:15");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod time;
pub mod traits;
pub mod types;

pub use error::{CueError, Result};
pub use time::{format_time, known_time};
pub use traits::{KeyValueStore, MediaHandle};
pub use types::TrackDescriptor;
