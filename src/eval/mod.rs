/// Module with the packed rank value and its category encoding.
mod rank;
/// Export `RankValue` and `HandCategory`
pub use self::rank::{HandCategory, RankValue};

/// Module that owns the precomputed lookup table and the hand walk.
mod table;
/// Export `RankTable` and its resource errors.
pub use self::table::{RankTable, TABLE_ENTRIES, TableError};
