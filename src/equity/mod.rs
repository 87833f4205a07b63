//! Exact, fully deterministic showdown equity.
//!
//! Everything here enumerates completions of unknown cards with
//! [`CombinationIter`] and scores both sides of each completion with
//! the shared rank table. There is no randomness on this path: the same
//! inputs always produce the same counts.

use std::cmp::Ordering;

use crate::core::{Card, CardSet, CombinationIter, HandError, live_cards};
use crate::eval::{RankTable, RankValue};

/// Accumulated showdown result in half-unit ticks.
///
/// Each compared outcome contributes two units for a strict win, one
/// for a tie, and zero for a loss, so tie semantics need no fractional
/// intermediate arithmetic. The final equity is `units / (2 * outcomes)`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Equity {
    units: u64,
    outcomes: u64,
}

impl Equity {
    fn record(&mut self, ordering: Ordering) {
        self.outcomes += 1;
        self.units += match ordering {
            Ordering::Greater => 2,
            Ordering::Equal => 1,
            Ordering::Less => 0,
        };
    }

    /// Win units over all compared outcomes, two per win and one per tie.
    pub fn units(&self) -> u64 {
        self.units
    }

    /// Number of completions compared.
    pub fn outcomes(&self) -> u64 {
        self.outcomes
    }

    /// Normalized equity in `[0, 1]`. Zero when nothing was comparable.
    pub fn fraction(&self) -> f64 {
        if self.outcomes == 0 {
            return 0.0;
        }
        self.units as f64 / (2 * self.outcomes) as f64
    }
}

fn claim_all(used: &mut CardSet, cards: &[Card]) -> Result<(), HandError> {
    for &card in cards {
        if used.contains(card) {
            return Err(HandError::DuplicateCard(card));
        }
        used.insert(card);
    }
    Ok(())
}

fn rank_with(table: &RankTable, hole: [Card; 2], community: &[Card; 5]) -> RankValue {
    let hand = [
        hole[0],
        hole[1],
        community[0],
        community[1],
        community[2],
        community[3],
        community[4],
    ];
    table.walk(&hand)
}

/// Score one board completion for both players.
///
/// The same completion is used on both sides so each iteration is one
/// bijectively paired showdown.
fn score_completion(
    table: &RankTable,
    hero: [Card; 2],
    villain: [Card; 2],
    board: &[Card],
    completion: CardSet,
    equity: &mut Equity,
) {
    let mut community = [hero[0]; 5];
    let mut n = 0;
    for &card in board {
        community[n] = card;
        n += 1;
    }
    for card in completion {
        community[n] = card;
        n += 1;
    }
    debug_assert_eq!(n, 5);

    let hero_rank = rank_with(table, hero, &community);
    let villain_rank = rank_with(table, villain, &community);
    equity.record(hero_rank.cmp(&villain_rank));
}

/// Exact equity of `hero` against `villain` over every completion of
/// the board.
///
/// With a known villain hand this enumerates all boards; with
/// `villain = None` it additionally enumerates every possible two-card
/// villain holding from the live deck, one showdown per villain hand
/// and board completion pair. `dead` removes cards known to be out of
/// play without assigning them to either player.
pub fn exact_equity(
    table: &RankTable,
    hero: [Card; 2],
    villain: Option<[Card; 2]>,
    board: &[Card],
    dead: CardSet,
) -> Result<Equity, HandError> {
    if board.len() > 5 {
        return Err(HandError::OversizedBoard(board.len()));
    }

    let mut used = CardSet::new();
    claim_all(&mut used, &hero)?;
    if let Some(v) = villain {
        claim_all(&mut used, &v)?;
    }
    claim_all(&mut used, board)?;

    let live = live_cards(used | dead);
    let need = 5 - board.len();
    let mut equity = Equity::default();

    match villain {
        Some(v) => {
            for completion in CombinationIter::new(live, need) {
                score_completion(table, hero, v, board, completion, &mut equity);
            }
        }
        None => {
            for holding in CombinationIter::new(live.clone(), 2) {
                let mut it = holding.iter();
                let (Some(a), Some(b)) = (it.next(), it.next()) else {
                    continue;
                };
                let remaining: Vec<Card> = live
                    .iter()
                    .filter(|c| !holding.contains(**c))
                    .copied()
                    .collect();
                for completion in CombinationIter::new(remaining, need) {
                    score_completion(table, hero, [a, b], board, completion, &mut equity);
                }
            }
        }
    }

    Ok(equity)
}

/// Count the single cards that would give the dealer a hand strictly
/// better than the hero's made seven-card hand.
///
/// The board must be complete. With `known_dealer` set, that card is
/// part of every candidate dealer hand (and is never itself a
/// candidate). `max_outs` short-circuits the scan once that many outs
/// are found; `None` counts exhaustively with the identical result.
pub fn count_outs(
    table: &RankTable,
    hero: [Card; 2],
    board: &[Card],
    known_dealer: Option<Card>,
    max_outs: Option<u32>,
) -> Result<u32, HandError> {
    if board.len() != 5 {
        return Err(HandError::IncompleteBoard(board.len()));
    }

    let mut used = CardSet::new();
    claim_all(&mut used, &hero)?;
    claim_all(&mut used, board)?;
    if let Some(card) = known_dealer {
        claim_all(&mut used, &[card])?;
    }

    let community = [board[0], board[1], board[2], board[3], board[4]];
    let hero_rank = rank_with(table, hero, &community);

    let limit = max_outs.unwrap_or(u32::MAX);
    let mut outs = 0;
    for candidate in live_cards(used) {
        let dealer_rank = match known_dealer {
            Some(known) => table.walk(&[
                community[0],
                community[1],
                community[2],
                community[3],
                community[4],
                known,
                candidate,
            ]),
            // Partial six card walk against the board alone.
            None => table.walk(&[
                community[0],
                community[1],
                community[2],
                community[3],
                community[4],
                candidate,
            ]),
        };
        if dealer_rank > hero_rank {
            outs += 1;
            if outs >= limit {
                break;
            }
        }
    }
    Ok(outs)
}
