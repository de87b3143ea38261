//! Client-side logic of the cross-reference viewer.
//!
//! The centerpiece is the line range selector: URL hash fragments such as
//! `#L10-L25` or `#OL7` are parsed into a [`SelectionRange`], clicks on line
//! number anchors move it around, and [`highlight`] marks the affected lines.
//! Nothing here touches a live document; the DOM is reached through the
//! traits in [`dom`] so the whole state machine runs natively in tests.

pub mod config;
pub mod controller;
pub mod dom;
pub mod hash;
pub mod highlight;
pub mod links;
pub mod model;
pub mod request;
pub mod tags;
pub mod transition;

pub use config::{ConfigError, ScrollOffsets, ViewerConfig};
pub use controller::{ClickResponse, LineRangeController, Modifiers};
pub use dom::{LineDom, LineLookup};
pub use model::{LineRef, Scheme, SelectionRange, SelectionState};
pub use request::{RequestSequence, Ticket};
pub use tags::{Tag, TagMatch, filter_tags};
