use crate::eval::{HandCategory, RankValue};

use super::policy::BetSize;

/// Everything a payout model needs to score one finished trial: both
/// final seven-card ranks and the play bet the policy settled on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Showdown {
    pub player: RankValue,
    pub dealer: RankValue,
    pub play_bet: BetSize,
}

/// Scores a finished trial as signed profit in bet units.
pub trait PayoutModel: Send + Sync {
    fn score(&self, showdown: &Showdown) -> f64;
}

/// Blind bet multiples per winning hand category. Hands below a
/// straight push the blind.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct BlindPayTable {
    pub straight: f64,
    pub flush: f64,
    pub full_house: f64,
    pub four_of_a_kind: f64,
    pub straight_flush: f64,
    pub royal_flush: f64,
}

impl Default for BlindPayTable {
    fn default() -> BlindPayTable {
        BlindPayTable {
            straight: 1.0,
            flush: 1.5,
            full_house: 3.0,
            four_of_a_kind: 10.0,
            straight_flush: 50.0,
            royal_flush: 500.0,
        }
    }
}

impl BlindPayTable {
    pub fn multiple(&self, rank: RankValue) -> f64 {
        match rank.category() {
            HandCategory::Straight => self.straight,
            HandCategory::Flush => self.flush,
            HandCategory::FullHouse => self.full_house,
            HandCategory::FourOfAKind => self.four_of_a_kind,
            HandCategory::StraightFlush => {
                if rank.is_royal_flush() {
                    self.royal_flush
                } else {
                    self.straight_flush
                }
            }
            _ => 0.0,
        }
    }
}

/// The canonical ante/blind/play resolution for the heads-up dealer
/// game.
///
/// One unit rides on the ante and one on the blind every hand; the play
/// bet is whatever the policy chose. On a player win the ante pays even
/// money only when the dealer opens with at least a pair, the play bet
/// always pays, and the blind pays its table multiple. On a loss all
/// three lose, except the ante pushes when the dealer never opened. A
/// fold forfeits ante and blind outright. An exact rank tie while
/// played pushes everything.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnteBlindPayout {
    pub pay_table: BlindPayTable,
}

impl PayoutModel for AnteBlindPayout {
    fn score(&self, showdown: &Showdown) -> f64 {
        let play = f64::from(showdown.play_bet.units());
        let folded = showdown.play_bet.is_fold();
        let dealer_opens = showdown.dealer.category() > HandCategory::HighCard;

        if showdown.player > showdown.dealer && !folded {
            let mut profit = play;
            if dealer_opens {
                profit += 1.0;
            }
            profit + self.pay_table.multiple(showdown.player)
        } else if showdown.player < showdown.dealer || folded {
            let mut loss = play + 1.0;
            if dealer_opens || folded {
                loss += 1.0;
            }
            -loss
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rank(category: u8, salt: u16) -> RankValue {
        RankValue::from_raw((i32::from(category) << 12) | i32::from(salt))
    }

    fn score(player: RankValue, dealer: RankValue, play_bet: BetSize) -> f64 {
        AnteBlindPayout::default().score(&Showdown {
            player,
            dealer,
            play_bet,
        })
    }

    #[test]
    fn test_win_against_open_dealer() {
        // Straight over a pair, max bet: play 4, ante 1, blind 1.
        let profit = score(rank(5, 10), rank(2, 3), BetSize::FourX);
        assert_eq!(profit, 6.0);
    }

    #[test]
    fn test_win_against_unopened_dealer_pushes_ante() {
        let profit = score(rank(2, 10), rank(1, 3), BetSize::FourX);
        assert_eq!(profit, 4.0);
    }

    #[test]
    fn test_blind_pay_table_rows() {
        let dealer = rank(2, 3);
        assert_eq!(score(rank(5, 1), dealer, BetSize::OneX), 3.0);
        assert_eq!(score(rank(6, 1), dealer, BetSize::TwoX), 4.5);
        assert_eq!(score(rank(7, 1), dealer, BetSize::OneX), 5.0);
        assert_eq!(score(rank(8, 1), dealer, BetSize::OneX), 12.0);
        assert_eq!(score(rank(9, 1), dealer, BetSize::OneX), 52.0);
        assert_eq!(
            score(RankValue::ROYAL_FLUSH, dealer, BetSize::FourX),
            505.0
        );
    }

    #[test]
    fn test_no_blind_pay_below_straight() {
        let profit = score(rank(3, 9), rank(2, 3), BetSize::TwoX);
        assert_eq!(profit, 3.0);
    }

    #[test]
    fn test_loss_against_open_dealer() {
        let profit = score(rank(2, 1), rank(3, 1), BetSize::FourX);
        assert_eq!(profit, -6.0);
    }

    #[test]
    fn test_loss_against_unopened_dealer_pushes_ante() {
        let profit = score(rank(1, 1), rank(1, 2), BetSize::FourX);
        assert_eq!(profit, -5.0);
    }

    #[test]
    fn test_fold_forfeits_ante_and_blind() {
        // Folding loses both fixed bets no matter what the dealer has.
        assert_eq!(score(rank(1, 5), rank(1, 2), BetSize::Fold), -2.0);
        assert_eq!(score(rank(3, 5), rank(2, 2), BetSize::Fold), -2.0);
    }

    #[test]
    fn test_exact_tie_pushes() {
        let profit = score(rank(2, 7), rank(2, 7), BetSize::FourX);
        assert_eq!(profit, 0.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_pay_table_serialization() {
        let table = BlindPayTable::default();
        let json = serde_json::to_string(&table).unwrap();
        assert!(json.contains("\"royal_flush\":500.0"));
        let back: BlindPayTable = serde_json::from_str(&json).unwrap();
        assert_eq!(table, back);
    }
}
