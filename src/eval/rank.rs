/// Coarse hand classification as encoded in the rank table, ordered by
/// strength. `Incomplete` is the zero category the table yields for a
/// state that does not resolve to a made hand.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
#[repr(u8)]
pub enum HandCategory {
    Incomplete = 0,
    HighCard = 1,
    OnePair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
}

impl HandCategory {
    pub fn from_index(index: u8) -> Option<HandCategory> {
        match index {
            0 => Some(HandCategory::Incomplete),
            1 => Some(HandCategory::HighCard),
            2 => Some(HandCategory::OnePair),
            3 => Some(HandCategory::TwoPair),
            4 => Some(HandCategory::ThreeOfAKind),
            5 => Some(HandCategory::Straight),
            6 => Some(HandCategory::Flush),
            7 => Some(HandCategory::FullHouse),
            8 => Some(HandCategory::FourOfAKind),
            9 => Some(HandCategory::StraightFlush),
            _ => None,
        }
    }
}

/// The packed rank of an evaluated hand.
///
/// The top bits (`raw >> 12`) carry the [`HandCategory`], the low
/// twelve bits the intra-category tiebreak ordinal. Comparing two rank
/// values compares hand strength directly: greater is stronger, equal
/// is an exact chop.
///
/// # Examples
/// ```
/// use uth_sim::eval::{HandCategory, RankValue};
///
/// let flush = RankValue::from_raw((6 << 12) | 100);
/// let straight = RankValue::from_raw((5 << 12) | 800);
/// assert!(flush > straight);
/// assert_eq!(flush.category(), HandCategory::Flush);
/// assert_eq!(flush.salt(), 100);
/// ```
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct RankValue(i32);

impl RankValue {
    /// The one rank value the table assigns to a royal flush.
    pub const ROYAL_FLUSH: RankValue = RankValue(36874);

    pub fn from_raw(raw: i32) -> RankValue {
        RankValue(raw)
    }

    pub fn raw(self) -> i32 {
        self.0
    }

    /// The coarse classification. Values outside the table's encoding
    /// collapse to `Incomplete`.
    pub fn category(self) -> HandCategory {
        u8::try_from(self.0 >> 12)
            .ok()
            .and_then(HandCategory::from_index)
            .unwrap_or(HandCategory::Incomplete)
    }

    /// The intra-category tiebreak ordinal.
    pub fn salt(self) -> u16 {
        (self.0 & 0xFFF) as u16
    }

    pub fn is_royal_flush(self) -> bool {
        self == RankValue::ROYAL_FLUSH
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_unpacking() {
        assert_eq!(
            RankValue::from_raw(5 << 12).category(),
            HandCategory::Straight
        );
        assert_eq!(
            RankValue::from_raw((9 << 12) | 0xFF).category(),
            HandCategory::StraightFlush
        );
        assert_eq!(RankValue::from_raw(0).category(), HandCategory::Incomplete);
    }

    #[test]
    fn test_salt_unpacking() {
        let value = RankValue::from_raw((2 << 12) | 0xABC);
        assert_eq!(value.category(), HandCategory::OnePair);
        assert_eq!(value.salt(), 0xABC);
    }

    #[test]
    fn test_royal_flush_is_top_of_straight_flushes() {
        assert_eq!(
            RankValue::ROYAL_FLUSH.category(),
            HandCategory::StraightFlush
        );
        assert!(RankValue::ROYAL_FLUSH.is_royal_flush());
        assert!(!RankValue::from_raw((9 << 12) | 1).is_royal_flush());
    }

    #[test]
    fn test_ordering_tracks_strength() {
        let high_card = RankValue::from_raw((1 << 12) | 500);
        let pair = RankValue::from_raw((2 << 12) | 1);
        let better_pair = RankValue::from_raw((2 << 12) | 2);
        assert!(pair > high_card);
        assert!(better_pair > pair);
        assert_eq!(pair, RankValue::from_raw(pair.raw()));
    }

    #[test]
    fn test_out_of_range_category_collapses() {
        assert_eq!(RankValue::from_raw(-1).category(), HandCategory::Incomplete);
        assert_eq!(
            RankValue::from_raw(10 << 12).category(),
            HandCategory::Incomplete
        );
    }

    #[test]
    fn test_category_strength_order() {
        assert!(HandCategory::StraightFlush > HandCategory::FourOfAKind);
        assert!(HandCategory::Flush > HandCategory::Straight);
        assert!(HandCategory::OnePair > HandCategory::HighCard);
    }
}
