use std::fs::File;
use std::io::{self, BufReader, ErrorKind};
use std::path::{Path, PathBuf};

use byteorder::{LittleEndian, ReadBytesExt};
use thiserror::Error;
use tracing::event;

use crate::core::{Card, CardSet, HandError};

use super::RankValue;

/// Number of 32-bit entries in the hand rank resource.
pub const TABLE_ENTRIES: usize = 32_487_834;

/// Errors raised while acquiring the rank table resource. Any of these
/// is fatal to evaluation; nothing here is retried internally.
#[derive(Error, Debug)]
pub enum TableError {
    #[error("rank table resource not found at {0}")]
    NotFound(PathBuf),

    #[error("rank table has {got} entries, expected {TABLE_ENTRIES}")]
    WrongLength { got: usize },

    #[error("failed reading rank table")]
    Io(#[from] io::Error),
}

/// The precomputed hand rank table.
///
/// A branching perfect-hash automaton over card ids: the walk starts at
/// `53 + first_card`, each further card transitions through the table,
/// and the final state resolves to a packed [`RankValue`]. The table is
/// immutable once constructed and is shared read-only (typically behind
/// an `Arc`) by every evaluation in the process; concurrent reads need
/// no synchronization.
pub struct RankTable {
    entries: Vec<i32>,
}

impl RankTable {
    /// Load the table from its flat binary resource: exactly
    /// `TABLE_ENTRIES` consecutive little-endian 32-bit integers.
    pub fn load(path: impl AsRef<Path>) -> Result<RankTable, TableError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                TableError::NotFound(path.to_path_buf())
            } else {
                TableError::Io(e)
            }
        })?;

        let bytes = file.metadata()?.len();
        if bytes != (TABLE_ENTRIES as u64) * 4 {
            return Err(TableError::WrongLength {
                got: (bytes / 4) as usize,
            });
        }

        let mut reader = BufReader::with_capacity(1 << 20, file);
        let mut entries = vec![0i32; TABLE_ENTRIES];
        reader.read_i32_into::<LittleEndian>(&mut entries)?;

        event!(
            tracing::Level::INFO,
            path = %path.display(),
            entries = TABLE_ENTRIES,
            "loaded hand rank table"
        );

        Ok(RankTable { entries })
    }

    /// Wrap an already populated table, e.g. one mapped or fetched by
    /// the embedding application. The length must match exactly.
    pub fn from_entries(entries: Vec<i32>) -> Result<RankTable, TableError> {
        if entries.len() != TABLE_ENTRIES {
            return Err(TableError::WrongLength {
                got: entries.len(),
            });
        }
        Ok(RankTable { entries })
    }

    /// Rank a hand of 5, 6, or 7 distinct cards.
    ///
    /// The result is independent of input order; only the card set
    /// matters. Malformed input (wrong length or duplicates) is
    /// rejected rather than walked, since the automaton silently
    /// produces garbage states for it.
    pub fn evaluate(&self, cards: &[Card]) -> Result<RankValue, HandError> {
        if !(5..=7).contains(&cards.len()) {
            return Err(HandError::InvalidLength(cards.len()));
        }
        let mut seen = CardSet::new();
        for &card in cards {
            if seen.contains(card) {
                return Err(HandError::DuplicateCard(card));
            }
            seen.insert(card);
        }
        Ok(self.walk(cards))
    }

    /// The raw automaton walk. Callers must have established that the
    /// cards are distinct and the length is 5, 6, or 7.
    pub(crate) fn walk(&self, cards: &[Card]) -> RankValue {
        let hr = &self.entries;
        let mut state = hr[53 + cards[0].id() as usize];
        for &card in &cards[1..] {
            state = hr[state as usize + card.id() as usize];
        }
        match cards.len() {
            // The seventh transition resolves the rank directly.
            7 => RankValue::from_raw(state),
            // Five and six card walks finish with a self lookup.
            _ => RankValue::from_raw(hr[state as usize]),
        }
    }
}
