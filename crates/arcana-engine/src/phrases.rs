//! Fixed phrase pools for narrative flavor.
//!
//! Every random pick here flows through the caller's `StdRng`, so seeded
//! readings reproduce their flavor sentences exactly.

use rand::Rng;
use rand::rngs::StdRng;

/// Base meaning used when a card carries no general aspect text.
pub const FALLBACK_GENERAL: &str = "카드의 에너지가 당신에게 메시지를 전합니다.";

/// Suffix appended to every reversed card's interpretation.
pub const REVERSED_NOTE: &str = " 역방향 에너지는 내면의 성찰과 변화의 필요성을 나타냅니다.";

/// Fallback overall message when aggregation cannot use a spread branch.
pub const FALLBACK_OVERALL_ADVICE: &str = "직감을 믿고 카드들이 주는 지혜를 마음에 새기세요.";

/// Sentences appended to the overall message (5 entries).
pub const COSMIC_WISDOM: &[&str] = &[
    "별들이 당신의 길을 비춰줄 것입니다.",
    "우주의 리듬에 맞춰 흘러가세요.",
    "달빛 아래서 진정한 답을 찾게 될 것입니다.",
    "고대의 지혜가 현재의 당신을 인도합니다.",
    "신비로운 에너지가 당신을 둘러싸고 있습니다.",
];

/// Sentences appended to the overall advice (5 entries).
pub const MYSTICAL_ADVICE: &[&str] = &[
    "직감을 믿고 내면의 목소리에 귀 기울이세요.",
    "명상과 성찰을 통해 더 깊은 통찰을 얻으세요.",
    "우주의 흐름에 자신을 맡기고 받아들이세요.",
    "카드의 상징들을 마음에 새기고 일상에서 실천하세요.",
    "신비로운 동조화의 힘을 믿고 행동하세요.",
];

/// Transient energy descriptions attached to presented readings (5 entries).
pub const COSMIC_ENERGY: &[&str] = &[
    "🌙 Mystical lunar energy flows strong",
    "✨ Stellar alignments favor your reading",
    "🔮 Crystal clear cosmic vibrations",
    "🌟 Powerful celestial forces at work",
    "🌌 Universal energies in perfect harmony",
];

/// Upright flavor suffix referencing the card's localized name, picked
/// uniformly from a four-entry pool.
pub fn mystical_enhancement(name_kr: &str, rng: &mut StdRng) -> String {
    match rng.random_range(0..4) {
        0 => format!(" {name_kr}의 신비로운 에너지가 당신을 인도합니다."),
        1 => format!(" 우주의 리듬에 맞춰 {name_kr}의 지혜를 받아들이세요."),
        2 => format!(" {name_kr}이 전하는 고대의 지혜에 마음을 열어보세요."),
        _ => format!(" 별들의 속삭임이 {name_kr}을 통해 당신에게 닿습니다."),
    }
}

/// Fallback interpretation referencing the card's localized name, used
/// when synthesis degrades.
pub fn fallback_interpretation(name_kr: &str) -> String {
    format!(
        "{name_kr}의 신비로운 에너지가 당신의 질문에 답하고자 합니다. 직감을 믿고 카드의 상징을 깊이 묵상해보세요."
    )
}

/// Pick a cosmic-wisdom sentence.
pub fn cosmic_wisdom(rng: &mut StdRng) -> &'static str {
    COSMIC_WISDOM[rng.random_range(0..COSMIC_WISDOM.len())]
}

/// Pick a mystical-advice sentence.
pub fn mystical_advice(rng: &mut StdRng) -> &'static str {
    MYSTICAL_ADVICE[rng.random_range(0..MYSTICAL_ADVICE.len())]
}

/// Pick a cosmic-energy description.
pub fn cosmic_energy(rng: &mut StdRng) -> &'static str {
    COSMIC_ENERGY[rng.random_range(0..COSMIC_ENERGY.len())]
}
