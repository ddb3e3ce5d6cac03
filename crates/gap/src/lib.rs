//! Locate the single cell in a bounded square which no sensor covers.
//!
//! Every sensor excludes the diamond of cells within the Manhattan distance of
//! its nearest beacon. Rows are searched one at a time by intersecting each
//! diamond with the row, merging the resulting intervals into a [Cover], and
//! looking for what's left.
//!
//! [Cover]: crate::cover::Cover

mod macros;

pub mod cli;
pub mod cover;
mod error;
pub mod freq;
pub mod geom;
pub mod input;
pub mod interval;
pub mod scan;
pub mod source;

pub use self::error::ScanError;

#[doc(hidden)]
pub mod macro_support {
    pub use anyhow::Error;
}

pub mod prelude {
    //! Helper prelude with useful imports.
    pub use crate::cover::{merge_row, Cover};
    pub use crate::freq::tuning_frequency;
    pub use crate::geom::{Point, Sensor};
    pub use crate::input::IStr;
    pub use crate::interval::Interval;
    pub use crate::scan::{count_row, Bound, RowVerdict, Scanner};
    pub use crate::source::Exclusion;
    pub use crate::ScanError;
    pub use anyhow::{anyhow, bail, Context, Result};
}
