use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::card::Card;
use crate::spread::SpreadKind;

/// Unique identifier for a reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReadingId(pub Uuid);

impl ReadingId {
    /// Generate a new random reading ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ReadingId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ReadingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// Optional session and origin metadata attached to a reading.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingOrigin {
    /// Client session identifier, if known.
    pub session_id: Option<String>,
    /// Client IP address, if known.
    pub ip_address: Option<String>,
    /// Client user agent, if known.
    pub user_agent: Option<String>,
}

/// One card drawn into a reading, fixed at its spread position.
///
/// Created once and immutable thereafter. Positions within a reading are
/// contiguous from 0 and no two drawn cards share a card identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawnCard {
    /// The card that was drawn.
    pub card: Card,
    /// Zero-based position within the spread.
    pub position: usize,
    /// Human label for the position, derived from the spread kind.
    pub position_name: String,
    /// True if the card landed reversed.
    pub reversed: bool,
    /// Synthesized interpretation text for this card.
    pub interpretation: String,
    /// Confidence score in [0.85, 0.95).
    pub confidence: f64,
}

/// A full divination reading.
///
/// Created once per request, mutated exactly once to attach the overall
/// narrative, never deleted by this engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Unique identifier.
    pub id: ReadingId,
    /// The spread this reading was drawn for.
    pub spread: SpreadKind,
    /// The question the querent asked, if any.
    pub question: Option<String>,
    /// Owning user reference, if any.
    pub user_id: Option<String>,
    /// Session and origin metadata.
    pub origin: ReadingOrigin,
    /// Drawn cards, ordered by position.
    pub drawn_cards: Vec<DrawnCard>,
    /// Reading-level narrative, attached on completion.
    pub overall_message: Option<String>,
    /// Reading-level advice, attached on completion.
    pub advice: Option<String>,
    /// When the reading was created.
    pub created_at: DateTime<Utc>,
    /// When the overall narrative was attached.
    pub completed_at: Option<DateTime<Utc>>,
}

impl Reading {
    /// Create a new reading with no cards drawn yet.
    pub fn new(
        spread: SpreadKind,
        question: Option<String>,
        user_id: Option<String>,
        origin: ReadingOrigin,
    ) -> Self {
        Self {
            id: ReadingId::new(),
            spread,
            question,
            user_id,
            origin,
            drawn_cards: Vec::new(),
            overall_message: None,
            advice: None,
            created_at: Utc::now(),
            completed_at: None,
        }
    }

    /// True once the overall narrative has been attached.
    pub fn is_complete(&self) -> bool {
        self.completed_at.is_some()
    }

    /// Number of reversed cards among the drawn cards.
    pub fn reversed_count(&self) -> usize {
        self.drawn_cards.iter().filter(|dc| dc.reversed).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_card(arcana_id: u8) -> Card {
        Card {
            arcana_id,
            name: format!("Card {arcana_id}"),
            name_kr: format!("카드 {arcana_id}"),
            keywords: Vec::new(),
            keywords_kr: Vec::new(),
            upright: crate::card::AspectSet {
                general: String::new(),
                love: String::new(),
                career: String::new(),
                health: String::new(),
            },
            reversed: crate::card::AspectSet {
                general: String::new(),
                love: String::new(),
                career: String::new(),
                health: String::new(),
            },
            description: String::new(),
            description_kr: String::new(),
            element: None,
            planet: None,
            numerology: arcana_id,
            symbolism: Vec::new(),
        }
    }

    fn drawn(arcana_id: u8, position: usize, reversed: bool) -> DrawnCard {
        DrawnCard {
            card: minimal_card(arcana_id),
            position,
            position_name: SpreadKind::ThreeCard.position_name(position),
            reversed,
            interpretation: "텍스트".to_string(),
            confidence: 0.9,
        }
    }

    #[test]
    fn new_reading_is_incomplete() {
        let reading = Reading::new(SpreadKind::Single, None, None, ReadingOrigin::default());
        assert!(!reading.is_complete());
        assert!(reading.drawn_cards.is_empty());
        assert!(reading.overall_message.is_none());
    }

    #[test]
    fn completion_flag_follows_timestamp() {
        let mut reading = Reading::new(SpreadKind::Single, None, None, ReadingOrigin::default());
        reading.completed_at = Some(Utc::now());
        assert!(reading.is_complete());
    }

    #[test]
    fn reversed_count() {
        let mut reading = Reading::new(
            SpreadKind::ThreeCard,
            Some("질문".to_string()),
            None,
            ReadingOrigin::default(),
        );
        reading.drawn_cards = vec![drawn(0, 0, false), drawn(1, 1, true), drawn(2, 2, true)];
        assert_eq!(reading.reversed_count(), 2);
    }

    #[test]
    fn reading_id_display_is_short() {
        let id = ReadingId::new();
        assert_eq!(id.to_string().len(), 8);
    }

    #[test]
    fn reading_roundtrips_through_json() {
        let mut reading = Reading::new(
            SpreadKind::ThreeCard,
            Some("연애운이 궁금해요".to_string()),
            Some("user-1".to_string()),
            ReadingOrigin {
                session_id: Some("sess-1".to_string()),
                ..ReadingOrigin::default()
            },
        );
        reading.drawn_cards = vec![drawn(0, 0, false)];
        let json = serde_json::to_string(&reading).unwrap();
        let back: Reading = serde_json::from_str(&json).unwrap();
        assert_eq!(back, reading);
    }
}
