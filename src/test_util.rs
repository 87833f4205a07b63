//! Helpers shared by tests across the crate.
//!
//! Exact-rank assertions need the production lookup resource, which is
//! generated rather than checked in. Tests locate it through the
//! `HANDRANKS_DAT` environment variable (falling back to
//! `./HandRanks.dat`) and skip silently when it is absent, so the suite
//! stays green on machines without the file.

use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use crate::core::Card;
use crate::eval::{RankTable, TABLE_ENTRIES};

static REAL_TABLE: OnceLock<Option<Arc<RankTable>>> = OnceLock::new();
static ZERO_TABLE: OnceLock<Arc<RankTable>> = OnceLock::new();

/// The production rank table, loaded once per test binary.
pub(crate) fn real_table() -> Option<Arc<RankTable>> {
    REAL_TABLE
        .get_or_init(|| {
            let path = std::env::var_os("HANDRANKS_DAT")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("HandRanks.dat"));
            RankTable::load(&path).ok().map(Arc::new)
        })
        .clone()
}

/// A correctly sized table of zeros. Every walk resolves to the same
/// rank, which is exactly what structural tests want.
pub(crate) fn zero_table() -> Arc<RankTable> {
    Arc::clone(ZERO_TABLE.get_or_init(|| {
        Arc::new(RankTable::from_entries(vec![0i32; TABLE_ENTRIES]).unwrap())
    }))
}

pub(crate) fn cards2(a: &str, b: &str) -> [Card; 2] {
    [a.parse().unwrap(), b.parse().unwrap()]
}

pub(crate) fn cards5(a: &str, b: &str, c: &str, d: &str, e: &str) -> [Card; 5] {
    [
        a.parse().unwrap(),
        b.parse().unwrap(),
        c.parse().unwrap(),
        d.parse().unwrap(),
        e.parse().unwrap(),
    ]
}

pub(crate) fn deck_of(ids: &[u8]) -> Vec<Card> {
    ids.iter().map(|&id| Card::new(id).unwrap()).collect()
}
