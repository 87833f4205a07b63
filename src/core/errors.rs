use thiserror::Error;

use super::Card;

/// Errors for malformed hands, boards, and decks.
///
/// Out-of-range and duplicate inputs are rejected here rather than fed to
/// the rank table, which would silently walk to a garbage state.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum HandError {
    #[error("hand has {0} cards, expected 5, 6, or 7")]
    InvalidLength(usize),

    #[error("duplicate card {0} in input")]
    DuplicateCard(Card),

    #[error("board has {0} cards, expected at most 5")]
    OversizedBoard(usize),

    #[error("board has {0} cards, expected a complete board of 5")]
    IncompleteBoard(usize),
}
