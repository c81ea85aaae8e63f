//! Spread kinds and their position label tables.
//!
//! Each spread carries two distinct label tables: the *position names*
//! stored on drawn cards, and the *context labels* used by interpretation
//! text. For the three-card spread the tables differ on purpose; they serve
//! different callers and must not be unified.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stored position names, indexed by position.
const SINGLE_POSITIONS: [&str; 1] = ["오늘의 메시지"];
const THREE_CARD_POSITIONS: [&str; 3] = ["과거", "현재", "미래"];
const CELTIC_CROSS_POSITIONS: [&str; 10] = [
    "현재 상황",
    "가능한 결과",
    "과거의 영향",
    "잠재의식",
    "가능한 미래",
    "당신의 접근법",
    "외부 영향",
    "희망과 두려움",
    "최종 결과",
    "조언",
];

/// Interpretation-time context labels for the three-card spread. Parallel to
/// `THREE_CARD_POSITIONS` but phrased for narrative use.
const THREE_CARD_CONTEXTS: [&str; 3] = ["과거의 영향", "현재 상황", "미래의 가능성"];

/// A named layout of positions the drawn cards of a reading occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SpreadKind {
    /// One card: today's message.
    Single,
    /// Three cards: past, present, future.
    ThreeCard,
    /// Ten cards laid out in the Celtic Cross pattern.
    CelticCross,
}

impl SpreadKind {
    /// All spread kinds, smallest first.
    pub const ALL: [Self; 3] = [Self::Single, Self::ThreeCard, Self::CelticCross];

    /// Parse a spread kind from a user-supplied string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().replace(['-', '_'], " ").trim() {
            "single" | "one" | "one card" | "single card" => Some(Self::Single),
            "three" | "three card" | "threecard" => Some(Self::ThreeCard),
            "celtic" | "celtic cross" | "celticcross" => Some(Self::CelticCross),
            _ => None,
        }
    }

    /// Number of cards this spread requires.
    pub fn card_count(self) -> usize {
        match self {
            Self::Single => 1,
            Self::ThreeCard => 3,
            Self::CelticCross => 10,
        }
    }

    /// The position name stored on a drawn card.
    ///
    /// Positions past the end of the table fall back to `위치 {n}` with a
    /// 1-based position number.
    pub fn position_name(self, position: usize) -> String {
        self.position_table()
            .get(position)
            .map(|name| (*name).to_string())
            .unwrap_or_else(|| format!("위치 {}", position + 1))
    }

    /// The context label interpretation text prefixes a card with, if the
    /// spread defines one for this position.
    pub fn position_context(self, position: usize) -> Option<&'static str> {
        self.context_table().get(position).copied()
    }

    fn position_table(self) -> &'static [&'static str] {
        match self {
            Self::Single => &SINGLE_POSITIONS,
            Self::ThreeCard => &THREE_CARD_POSITIONS,
            Self::CelticCross => &CELTIC_CROSS_POSITIONS,
        }
    }

    fn context_table(self) -> &'static [&'static str] {
        match self {
            Self::Single => &SINGLE_POSITIONS,
            Self::ThreeCard => &THREE_CARD_CONTEXTS,
            Self::CelticCross => &CELTIC_CROSS_POSITIONS,
        }
    }
}

impl fmt::Display for SpreadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single => write!(f, "single"),
            Self::ThreeCard => write!(f, "three-card"),
            Self::CelticCross => write!(f, "celtic-cross"),
        }
    }
}
