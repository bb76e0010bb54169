//! Core data model definitions shared across Marquee crates.
//!
//! Everything here is plain data: the aggregation core produces these values
//! and the presentation layer consumes them. No I/O, no provider wire formats.
#![allow(missing_docs)]

pub mod hero;
pub mod layout;
pub mod movie;
pub mod row;
pub mod search_term;

pub use hero::{HeroBadge, HeroModel};
pub use layout::{HomeLayout, LayoutRow};
pub use movie::{MediaKind, MovieRecord, POSTER_NOT_AVAILABLE};
pub use row::{
    EMPTY_ROW_MESSAGE, FAILED_ROW_MESSAGE, ResolvedRow, RowId, RowSpec,
    RowState,
};
pub use search_term::SearchTerm;
