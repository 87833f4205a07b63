use std::sync::Arc;

use crate::core::{Card, Value};
use crate::equity;
use crate::eval::{HandCategory, RankTable};

/// Where in the deal a play bet decision is being made.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum DecisionPoint {
    /// Only the hole cards are visible.
    PreFlop,
    /// The first three community cards are visible.
    PostFlop,
    /// The full board is visible.
    River,
}

/// The play bet multiplier a policy returns at a decision point.
///
/// `Fold` before the river defers the decision to the next point; at
/// the river it folds the hand, forfeiting the ante and blind bets.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum BetSize {
    Fold,
    OneX,
    TwoX,
    FourX,
}

impl BetSize {
    /// Bet units behind the play bet.
    pub fn units(self) -> u32 {
        match self {
            BetSize::Fold => 0,
            BetSize::OneX => 1,
            BetSize::TwoX => 2,
            BetSize::FourX => 4,
        }
    }

    pub fn is_fold(self) -> bool {
        self == BetSize::Fold
    }
}

/// The cards visible to a policy at one decision point. The dealer's
/// cards are never part of a view.
#[derive(Debug, Clone, Copy)]
pub struct TableView<'a> {
    pub point: DecisionPoint,
    pub hole: [Card; 2],
    /// Community cards revealed so far: empty, the three card flop, or
    /// all five.
    pub board: &'a [Card],
}

/// A betting policy invoked by the simulation at each decision point.
///
/// Implementations must be pure functions of the view: the harness
/// relies on that for fixed-deck replays to be deterministic.
pub trait DecisionPolicy: Send + Sync {
    fn decide(&self, view: &TableView<'_>) -> BetSize;
}

/// Never plays; loses the ante and blind every hand. Useful as a
/// worst-case baseline with an exactly known edge.
#[derive(Debug, Default, Clone, Copy)]
pub struct FoldingPolicy;

impl DecisionPolicy for FoldingPolicy {
    fn decide(&self, _view: &TableView<'_>) -> BetSize {
        BetSize::Fold
    }
}

/// Puts the maximum behind every hand before the flop.
#[derive(Debug, Default, Clone, Copy)]
pub struct MaxBetPolicy;

impl DecisionPolicy for MaxBetPolicy {
    fn decide(&self, view: &TableView<'_>) -> BetSize {
        match view.point {
            DecisionPoint::PreFlop => BetSize::FourX,
            _ => BetSize::Fold,
        }
    }
}

/// The numeric cutoffs of [`BasicStrategy`], kept as data so game
/// variants can tune them without touching the simulation core.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyThresholds {
    /// Worst offsuit kicker raised with a king before the flop.
    pub king_kicker: Value,
    /// Worst offsuit kicker raised with a queen.
    pub queen_kicker: Value,
    /// Worst suited kicker raised with a queen.
    pub queen_kicker_suited: Value,
    /// Worst offsuit kicker raised with a jack.
    pub jack_kicker: Value,
    /// Worst suited kicker raised with a jack.
    pub jack_kicker_suited: Value,
    /// Smallest pocket pair raised before the flop.
    pub min_pocket_pair: Value,
    /// Lowest hidden card that makes a four flush playable on the flop.
    pub hidden_flush_card: Value,
    /// Fold the river once the dealer has at least this many outs.
    pub dealer_outs_limit: u32,
}

impl Default for StrategyThresholds {
    fn default() -> StrategyThresholds {
        StrategyThresholds {
            king_kicker: Value::Five,
            queen_kicker: Value::Eight,
            queen_kicker_suited: Value::Six,
            jack_kicker: Value::Ten,
            jack_kicker_suited: Value::Eight,
            min_pocket_pair: Value::Three,
            hidden_flush_card: Value::Ten,
            dealer_outs_limit: 21,
        }
    }
}

/// The reference basic strategy for the ante/blind/play game.
///
/// Raises the maximum pre-flop on the chart hands, two units post-flop
/// on made or strongly drawing hands, and one unit on the river unless
/// the dealer has too many ways to overtake.
pub struct BasicStrategy {
    table: Arc<RankTable>,
    thresholds: StrategyThresholds,
}

impl BasicStrategy {
    pub fn new(table: Arc<RankTable>) -> BasicStrategy {
        BasicStrategy {
            table,
            thresholds: StrategyThresholds::default(),
        }
    }

    pub fn with_thresholds(table: Arc<RankTable>, thresholds: StrategyThresholds) -> BasicStrategy {
        BasicStrategy { table, thresholds }
    }

    pub fn thresholds(&self) -> &StrategyThresholds {
        &self.thresholds
    }

    fn preflop(&self, hole: [Card; 2]) -> bool {
        let (hi, lo) = if hole[0].value() >= hole[1].value() {
            (hole[0], hole[1])
        } else {
            (hole[1], hole[0])
        };
        let suited = hi.suited_with(lo);
        let t = &self.thresholds;
        match hi.value() {
            Value::Ace => true,
            _ if hi.value() == lo.value() => lo.value() >= t.min_pocket_pair,
            Value::King => suited || lo.value() >= t.king_kicker,
            Value::Queen => {
                lo.value() >= t.queen_kicker || (suited && lo.value() >= t.queen_kicker_suited)
            }
            Value::Jack => {
                lo.value() >= t.jack_kicker || (suited && lo.value() >= t.jack_kicker_suited)
            }
            _ => false,
        }
    }

    fn postflop(&self, hole: [Card; 2], flop: &[Card]) -> bool {
        let cards = [hole[0], hole[1], flop[0], flop[1], flop[2]];
        let category = self.table.walk(&cards).category();
        let flop_trips =
            flop[0].value() == flop[1].value() && flop[1].value() == flop[2].value();

        // Two pair or better, unless the board itself makes the trips.
        if category >= HandCategory::TwoPair
            && !(category == HandCategory::ThreeOfAKind && flop_trips)
        {
            return true;
        }

        // A pair using a hole card, except pocket deuces.
        let pocket_deuces =
            hole[0].value() == Value::Two && hole[1].value() == Value::Two;
        if category == HandCategory::OnePair && !pocket_deuces && !any_paired(flop) {
            return true;
        }

        // Four to a flush with a high enough hidden card in the suit.
        for hole_card in hole {
            let in_suit = cards
                .iter()
                .filter(|c| c.suit() == hole_card.suit())
                .count();
            if in_suit >= 4 && hole_card.value() >= self.thresholds.hidden_flush_card {
                return true;
            }
        }
        false
    }

    fn river(&self, hole: [Card; 2], board: &[Card]) -> bool {
        let full = [
            hole[0], hole[1], board[0], board[1], board[2], board[3], board[4],
        ];
        let made = self.table.walk(&full).category();
        let board_made = self.table.walk(board).category();

        // Two pair or better, unless the board alone already makes it.
        if made >= HandCategory::TwoPair
            && !(made == HandCategory::TwoPair && board_made == HandCategory::TwoPair)
            && !(made == HandCategory::ThreeOfAKind
                && board_made == HandCategory::ThreeOfAKind)
        {
            return true;
        }

        if made == HandCategory::OnePair && !any_paired(board) {
            return true;
        }

        // Call down anything the dealer cannot overtake often enough.
        let limit = self.thresholds.dealer_outs_limit;
        equity::count_outs(&self.table, hole, board, None, Some(limit))
            .map(|outs| outs < limit)
            .unwrap_or(false)
    }
}

fn any_paired(cards: &[Card]) -> bool {
    let mut seen = 0u16;
    for card in cards {
        let bit = 1 << card.value_index();
        if seen & bit != 0 {
            return true;
        }
        seen |= bit;
    }
    false
}

impl DecisionPolicy for BasicStrategy {
    fn decide(&self, view: &TableView<'_>) -> BetSize {
        match view.point {
            DecisionPoint::PreFlop => {
                if self.preflop(view.hole) {
                    BetSize::FourX
                } else {
                    BetSize::Fold
                }
            }
            DecisionPoint::PostFlop => {
                if self.postflop(view.hole, view.board) {
                    BetSize::TwoX
                } else {
                    BetSize::Fold
                }
            }
            DecisionPoint::River => {
                if self.river(view.hole, view.board) {
                    BetSize::OneX
                } else {
                    BetSize::Fold
                }
            }
        }
    }
}
