//! # Block Kinds
//!
//! Block-specific types that own their Hiki and MediaWiki syntax.
//!
//! - **`Region`**: preformatted (`" "`/`"\t"`) and quote (`""`) runs
//! - **`Heading`**: `!` markers, `//` comment prefix, and the heading tree
//! - **`DefinitionList`**: `:term:definition` lines
//! - **`Table`**: `||` rows, `!` heading cells, `^`/`>` span markers
//!
//! The classifier and builder use these constants; they never hardcode markers.

pub mod definition_list;
pub mod heading;
pub mod region;
pub mod table;

pub use definition_list::DefinitionList;
pub use heading::{Heading, HeadingNode, HeadingTree};
pub use region::Region;
pub use table::{Column, Row, Table, TableBlock};
