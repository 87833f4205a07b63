use super::{Card, CardSet};

/// All cards still live given a set of dead cards, in ascending id order.
pub fn live_cards(dead: CardSet) -> Vec<Card> {
    (!dead).iter().collect()
}

/// Lazily yields every k-card combination of a slice of cards.
///
/// Combinations are produced exactly once each, in lexicographic order
/// of the input slice positions, as a `CardSet`. With the ascending
/// slice from [`live_cards`] that is ascending lexicographic order of
/// card ids. Each iterator is independent; enumeration restarts by
/// constructing a new one.
///
/// Degenerate sizes follow set semantics rather than erroring: asking
/// for more cards than are available yields nothing, and `k = 0` yields
/// the single empty combination.
#[derive(Debug)]
pub struct CombinationIter {
    cards: Vec<Card>,
    idx: Vec<usize>,
    k: usize,
    started: bool,
    done: bool,
}

impl CombinationIter {
    pub fn new(cards: Vec<Card>, k: usize) -> CombinationIter {
        CombinationIter {
            idx: (0..k).collect(),
            k,
            started: false,
            done: false,
            cards,
        }
    }

    fn current(&self) -> CardSet {
        self.idx.iter().map(|&i| self.cards[i]).collect()
    }
}

impl Iterator for CombinationIter {
    type Item = CardSet;

    fn next(&mut self) -> Option<CardSet> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            if self.k > self.cards.len() {
                self.done = true;
                return None;
            }
            return Some(self.current());
        }
        if self.k == 0 {
            self.done = true;
            return None;
        }

        // Advance the rightmost index that still has room, then reset
        // everything after it to the tightest ascending run.
        let n = self.cards.len();
        let mut i = self.k;
        loop {
            if i == 0 {
                self.done = true;
                return None;
            }
            i -= 1;
            if self.idx[i] < n - (self.k - i) {
                self.idx[i] += 1;
                for j in i + 1..self.k {
                    self.idx[j] = self.idx[j - 1] + 1;
                }
                return Some(self.current());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn live_after(dead_ids: &[u8]) -> Vec<Card> {
        let dead: CardSet = dead_ids
            .iter()
            .filter_map(|&id| Card::new(id).ok())
            .collect();
        live_cards(dead)
    }

    #[test]
    fn test_full_deck_counts() {
        assert_eq!(CombinationIter::new(live_after(&[]), 1).count(), 52);
        assert_eq!(CombinationIter::new(live_after(&[]), 2).count(), 1_326);
        assert_eq!(
            CombinationIter::new(live_after(&[]), 5).count(),
            2_598_960
        );
    }

    #[test]
    fn test_exclusion_count() {
        // C(50, 5) once two cards are dead.
        assert_eq!(
            CombinationIter::new(live_after(&[1, 2]), 5).count(),
            2_118_760
        );
    }

    #[test]
    fn test_degenerate_sizes() {
        // k = 0 yields the single empty combination.
        let empties: Vec<CardSet> = CombinationIter::new(live_after(&[]), 0).collect();
        assert_eq!(empties.len(), 1);
        assert!(empties[0].is_empty());

        // Asking for more cards than remain yields nothing.
        let live: Vec<Card> = (1..=3).filter_map(|id| Card::new(id).ok()).collect();
        assert_eq!(CombinationIter::new(live, 4).count(), 0);
    }

    #[test]
    fn test_lexicographic_order_and_uniqueness() {
        let live: Vec<Card> = (1..=5).filter_map(|id| Card::new(id).ok()).collect();
        let combos: Vec<Vec<u8>> = CombinationIter::new(live, 3)
            .map(|set| set.iter().map(|c| c.id()).collect())
            .collect();

        let expected: Vec<Vec<u8>> = vec![
            vec![1, 2, 3],
            vec![1, 2, 4],
            vec![1, 2, 5],
            vec![1, 3, 4],
            vec![1, 3, 5],
            vec![1, 4, 5],
            vec![2, 3, 4],
            vec![2, 3, 5],
            vec![2, 4, 5],
            vec![3, 4, 5],
        ];
        assert_eq!(combos, expected);
    }

    #[test]
    fn test_members_are_distinct() {
        let live = live_after(&[]);
        for combo in CombinationIter::new(live, 2).take(200) {
            assert_eq!(combo.count(), 2);
        }
    }

    #[test]
    fn test_restartable() {
        let first: Vec<CardSet> = CombinationIter::new(live_after(&[]), 2).take(10).collect();
        let second: Vec<CardSet> = CombinationIter::new(live_after(&[]), 2).take(10).collect();
        assert_eq!(first, second);
    }
}
