use std::fmt;

use serde::{Deserialize, Serialize};

/// Whether a drawn card lies upright or reversed.
///
/// Orientation selects which [`AspectSet`] of a card applies to a reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// The card's natural, forward-facing meaning.
    Upright,
    /// The inverted meaning, read as blocked or internalized energy.
    Reversed,
}

impl Orientation {
    /// Build an orientation from the stored `reversed` flag.
    pub fn from_reversed(reversed: bool) -> Self {
        if reversed { Self::Reversed } else { Self::Upright }
    }

    /// True if this orientation is reversed.
    pub fn is_reversed(self) -> bool {
        matches!(self, Self::Reversed)
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Upright => write!(f, "upright"),
            Self::Reversed => write!(f, "reversed"),
        }
    }
}

/// A life topic a question can be matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    /// Love and relationships.
    Love,
    /// Work, business, and career.
    Career,
    /// Health and the body.
    Health,
}

/// The four-aspect meaning set for one orientation of a card.
///
/// Every aspect is a short Korean text blob; an empty string means the deck
/// author supplied no meaning for that aspect.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AspectSet {
    /// The default meaning used when no topic applies.
    pub general: String,
    /// Meaning in the context of love and relationships.
    pub love: String,
    /// Meaning in the context of work and career.
    pub career: String,
    /// Meaning in the context of health.
    pub health: String,
}

impl AspectSet {
    /// The aspect text for a matched question topic.
    pub fn for_topic(&self, topic: Topic) -> &str {
        match topic {
            Topic::Love => &self.love,
            Topic::Career => &self.career,
            Topic::Health => &self.health,
        }
    }
}

/// A single Major Arcana card.
///
/// Cards are immutable once created; the deck is fixed at 22 cards and is
/// never mutated at request time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Stable numeric identity within the Major Arcana (0-21).
    pub arcana_id: u8,
    /// English display name.
    pub name: String,
    /// Korean display name.
    pub name_kr: String,
    /// English keyword tags, in deck order.
    pub keywords: Vec<String>,
    /// Korean keyword tags, in deck order.
    pub keywords_kr: Vec<String>,
    /// Meaning aspects when the card lies upright.
    pub upright: AspectSet,
    /// Meaning aspects when the card lies reversed.
    pub reversed: AspectSet,
    /// English description.
    pub description: String,
    /// Korean description.
    pub description_kr: String,
    /// Classical element associated with the card, if any.
    pub element: Option<String>,
    /// Ruling planet associated with the card, if any.
    pub planet: Option<String>,
    /// Numerological value of the card.
    pub numerology: u8,
    /// Symbolism notes, in deck order.
    pub symbolism: Vec<String>,
}

impl Card {
    /// The meaning aspect set for the given orientation.
    pub fn meanings(&self, orientation: Orientation) -> &AspectSet {
        match orientation {
            Orientation::Upright => &self.upright,
            Orientation::Reversed => &self.reversed,
        }
    }

    /// True if this card matches a search query.
    ///
    /// Names and descriptions match on a case-insensitive substring; keyword
    /// lists match on exact membership (lowercased for the English list).
    pub fn matches(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        self.name.to_lowercase().contains(&q)
            || self.name_kr.contains(query)
            || self.description.to_lowercase().contains(&q)
            || self.description_kr.contains(query)
            || self.keywords.iter().any(|k| k == &q)
            || self.keywords_kr.iter().any(|k| k == query)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.name_kr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_card() -> Card {
        Card {
            arcana_id: 0,
            name: "The Fool".to_string(),
            name_kr: "광대".to_string(),
            keywords: vec!["new beginnings".to_string(), "innocence".to_string()],
            keywords_kr: vec!["새로운 시작".to_string(), "순수함".to_string()],
            upright: AspectSet {
                general: "새로운 여행의 시작입니다.".to_string(),
                love: "새로운 만남을 의미합니다.".to_string(),
                career: "새로운 프로젝트의 시작.".to_string(),
                health: "활력이 넘치는 시기입니다.".to_string(),
            },
            reversed: AspectSet {
                general: "무모함을 조심하세요.".to_string(),
                love: "성급한 결정을 피하세요.".to_string(),
                career: "준비 부족을 돌아보세요.".to_string(),
                health: "무리한 활동은 피하세요.".to_string(),
            },
            description: "The Fool represents new beginnings.".to_string(),
            description_kr: "광대는 새로운 시작을 나타냅니다.".to_string(),
            element: Some("Air".to_string()),
            planet: Some("Uranus".to_string()),
            numerology: 0,
            symbolism: vec!["white rose (purity)".to_string()],
        }
    }

    #[test]
    fn orientation_from_reversed() {
        assert_eq!(Orientation::from_reversed(true), Orientation::Reversed);
        assert_eq!(Orientation::from_reversed(false), Orientation::Upright);
        assert!(Orientation::Reversed.is_reversed());
        assert!(!Orientation::Upright.is_reversed());
    }

    #[test]
    fn meanings_follow_orientation() {
        let card = sample_card();
        assert!(
            card.meanings(Orientation::Upright)
                .general
                .contains("새로운 여행")
        );
        assert!(
            card.meanings(Orientation::Reversed)
                .general
                .contains("무모함")
        );
    }

    #[test]
    fn aspect_for_topic() {
        let card = sample_card();
        assert_eq!(card.upright.for_topic(Topic::Love), card.upright.love);
        assert_eq!(card.upright.for_topic(Topic::Career), card.upright.career);
        assert_eq!(card.upright.for_topic(Topic::Health), card.upright.health);
    }

    #[test]
    fn matches_name_case_insensitive() {
        let card = sample_card();
        assert!(card.matches("fool"));
        assert!(card.matches("FOOL"));
        assert!(card.matches("광대"));
        assert!(!card.matches("dragon"));
    }

    #[test]
    fn matches_keywords_exactly() {
        let card = sample_card();
        assert!(card.matches("innocence"));
        assert!(card.matches("새로운 시작"));
        // Keyword matching is exact membership, not substring
        assert!(!card.matches("innoc"));
    }

    #[test]
    fn matches_description() {
        let card = sample_card();
        assert!(card.matches("beginnings"));
    }

    #[test]
    fn display_shows_both_names() {
        let card = sample_card();
        assert_eq!(card.to_string(), "The Fool (광대)");
    }
}
