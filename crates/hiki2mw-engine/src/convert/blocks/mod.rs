//! # Block Conversion
//!
//! Line-oriented conversion of Hiki block syntax.
//!
//! ## Phases
//!
//! 1. **Line Classification** (`classify`): each line gets a `BlockCategory`
//!    from its leading characters alone.
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` walks the lines once,
//!    rewriting regions and definition lists in place and recording headings
//!    and tables, which are written back after the walk.
//!
//! ## Modules
//!
//! - **`classify`**: `LineClassifier` and `BlockCategory`
//! - **`kinds`**: block types owning their markers (Region, Heading, DefinitionList, Table)
//! - **`builder`**: `BlockBuilder` single-pass state machine
//!
//! ## Key Invariants
//!
//! - Line indices are stable for the whole pass; builders never insert or remove lines
//! - Regions never nest; a line belongs to at most one run
//! - A table is exactly one maximal run of `||` lines

pub mod builder;
pub mod classify;
pub mod kinds;

pub use builder::{BlockBuilder, BlockStats};
pub use classify::{BlockCategory, LineClassifier};
