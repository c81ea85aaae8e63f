//! Per-card interpretation synthesis.
//!
//! An interpretation is built up from the card's orientation-specific
//! aspect text, a positional frame for multi-card spreads, a topic-focused
//! sentence when the question hints at love, career, or health, and a
//! closing flavor suffix.

use rand::rngs::StdRng;

use arcana_core::{Card, Orientation, SpreadKind, Topic};

use crate::phrases;

/// Scan the question for topic keywords.
///
/// Matching is case-insensitive on the whole question; the first topic
/// whose keyword list matches wins, in the order love, career, health.
pub fn detect_topic(question: &str) -> Option<Topic> {
    let lowered = question.to_lowercase();
    const LOVE: &[&str] = &["사랑", "연애", "관계"];
    const CAREER: &[&str] = &["직업", "일", "사업", "커리어"];
    const HEALTH: &[&str] = &["건강", "몸"];

    if LOVE.iter().any(|kw| lowered.contains(kw)) {
        Some(Topic::Love)
    } else if CAREER.iter().any(|kw| lowered.contains(kw)) {
        Some(Topic::Career)
    } else if HEALTH.iter().any(|kw| lowered.contains(kw)) {
        Some(Topic::Health)
    } else {
        None
    }
}

fn topic_label(topic: Topic) -> &'static str {
    match topic {
        Topic::Love => "연애/관계 측면에서",
        Topic::Career => "직업/사업 측면에서",
        Topic::Health => "건강 측면에서",
    }
}

/// Synthesize the interpretation text for one drawn card.
///
/// When the card carries no aspect text at all for the drawn orientation,
/// the whole synthesis degrades to a generic fallback referencing the
/// card's localized name.
pub fn interpret_card(
    card: &Card,
    reversed: bool,
    spread: SpreadKind,
    position: usize,
    question: Option<&str>,
    rng: &mut StdRng,
) -> String {
    let orientation = Orientation::from_reversed(reversed);
    let aspects = card.meanings(orientation);

    if aspects.general.is_empty()
        && aspects.love.is_empty()
        && aspects.career.is_empty()
        && aspects.health.is_empty()
    {
        return phrases::fallback_interpretation(&card.name_kr);
    }

    let mut text = String::new();
    if let Some(context) = spread.position_context(position) {
        text.push_str(&format!("[{context}] "));
    }

    if aspects.general.is_empty() {
        text.push_str(phrases::FALLBACK_GENERAL);
    } else {
        text.push_str(&aspects.general);
    }

    if let Some(topic) = question.and_then(detect_topic) {
        let focused = aspects.for_topic(topic);
        if !focused.is_empty() {
            text.push_str(&format!(" {} {}", topic_label(topic), focused));
        }
    }

    if reversed {
        text.push_str(phrases::REVERSED_NOTE);
    } else {
        text.push_str(&phrases::mystical_enhancement(&card.name_kr, rng));
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcana_core::standard_deck;
    use rand::SeedableRng;

    fn fool() -> Card {
        standard_deck().into_iter().next().unwrap()
    }

    #[test]
    fn topic_detection_matches_keywords() {
        assert_eq!(detect_topic("사랑이 궁금해요"), Some(Topic::Love));
        assert_eq!(detect_topic("연애 운세를 알려주세요"), Some(Topic::Love));
        assert_eq!(detect_topic("새로운 사업을 시작해도 될까요"), Some(Topic::Career));
        assert_eq!(detect_topic("요즘 몸이 좋지 않아요"), Some(Topic::Health));
        assert_eq!(detect_topic("오늘 나에게 필요한 메시지는"), None);
    }

    #[test]
    fn love_wins_over_later_topics() {
        assert_eq!(detect_topic("연애와 건강 중 무엇이 중요할까요"), Some(Topic::Love));
    }

    #[test]
    fn upright_single_card_uses_general_meaning_and_enhancement() {
        let card = fool();
        let mut rng = StdRng::seed_from_u64(1);
        let text = interpret_card(&card, false, SpreadKind::Single, 0, None, &mut rng);
        assert!(text.starts_with(&card.upright.general));
        assert!(text.contains(&card.name_kr));
        assert!(!text.contains(phrases::REVERSED_NOTE.trim()));
    }

    #[test]
    fn reversed_card_gets_the_reversed_note() {
        let card = fool();
        let mut rng = StdRng::seed_from_u64(1);
        let text = interpret_card(&card, true, SpreadKind::Single, 0, None, &mut rng);
        assert!(text.starts_with(&card.reversed.general));
        assert!(text.ends_with(phrases::REVERSED_NOTE));
    }

    #[test]
    fn three_card_positions_carry_their_context_frame() {
        let card = fool();
        let mut rng = StdRng::seed_from_u64(1);
        let text = interpret_card(&card, false, SpreadKind::ThreeCard, 0, None, &mut rng);
        assert!(text.starts_with("[과거의 영향] "), "{text}");
        let text = interpret_card(&card, false, SpreadKind::ThreeCard, 2, None, &mut rng);
        assert!(text.starts_with("[미래의 가능성] "), "{text}");
    }

    #[test]
    fn topical_question_appends_the_focused_aspect() {
        let card = fool();
        let mut rng = StdRng::seed_from_u64(1);
        let text = interpret_card(
            &card,
            false,
            SpreadKind::Single,
            0,
            Some("연애가 잘 될까요?"),
            &mut rng,
        );
        assert!(text.contains("연애/관계 측면에서"), "{text}");
        assert!(text.contains(&card.upright.love), "{text}");
    }

    #[test]
    fn empty_aspects_degrade_to_the_name_fallback() {
        let mut card = fool();
        card.upright = arcana_core::AspectSet::default();
        let mut rng = StdRng::seed_from_u64(1);
        let text = interpret_card(&card, false, SpreadKind::Single, 0, None, &mut rng);
        assert_eq!(text, phrases::fallback_interpretation(&card.name_kr));
    }
}
