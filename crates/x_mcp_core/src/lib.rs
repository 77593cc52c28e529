//! Core data types for the x_mcp draft server.
//!
//! A [`Draft`] is an ordered list of [`Segment`]s: one segment for a single
//! post, several for a thread. Segments may carry [`MediaReference`]s to local
//! image or GIF files that are uploaded when the draft is published.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod draft;
mod limits;
mod media;
mod segment;

pub use draft::{Draft, DraftId, DraftKind};
pub use limits::PostLimits;
pub use media::{MediaReference, MediaType};
pub use segment::{Segment, SegmentInput, build_segments};
