//! Reading-level narrative aggregation.
//!
//! Once every card has its own interpretation, the spread as a whole gets
//! an overall message and a piece of advice. Each spread kind has its own
//! narrative shape; a generic fallback covers draws that do not fill the
//! positions the shape expects.

use rand::Rng;
use rand::rngs::StdRng;

use arcana_core::{DrawnCard, SpreadKind};

use crate::phrases;

/// The aggregated narrative for a completed reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverallReading {
    /// Overall message across the whole spread.
    pub message: String,
    /// Actionable advice distilled from the spread.
    pub advice: String,
}

/// Build the overall message and advice for a finished draw.
///
/// Always appends one cosmic-wisdom sentence to the message and one
/// mystical-advice sentence to the advice, picked independently.
pub fn interpret_overall(
    drawn: &[DrawnCard],
    spread: SpreadKind,
    question: Option<&str>,
    rng: &mut StdRng,
) -> OverallReading {
    let (mut message, mut advice) = match spread {
        SpreadKind::Single => single(drawn, question, rng),
        SpreadKind::ThreeCard => three_card(drawn),
        SpreadKind::CelticCross => celtic_cross(drawn),
    }
    .unwrap_or_else(|| generic(drawn));

    message.push(' ');
    message.push_str(phrases::cosmic_wisdom(rng));
    advice.push(' ');
    advice.push_str(phrases::mystical_advice(rng));

    OverallReading { message, advice }
}

fn single(
    drawn: &[DrawnCard],
    question: Option<&str>,
    rng: &mut StdRng,
) -> Option<(String, String)> {
    let first = drawn.first()?;
    let name = &first.card.name_kr;

    let mut message = format!("{name}이 오늘 당신에게 전하는 메시지입니다.");
    if let Some(q) = question {
        message.push_str(&format!(" \"{q}\"에 대한 답으로서,"));
    }
    let mode = if first.reversed {
        "내면의 성찰"
    } else {
        "외향적 행동"
    };
    message.push_str(&format!(" 이 카드는 {mode}을 통한 성장을 제시합니다."));

    let advice = if first.card.keywords_kr.is_empty() {
        format!("{name}의 지혜를 따라 직감을 믿고 행동하세요.")
    } else {
        let keyword =
            &first.card.keywords_kr[rng.random_range(0..first.card.keywords_kr.len())];
        format!("{keyword}의 에너지를 마음에 품고 하루를 시작하세요.")
    };

    Some((message, advice))
}

fn three_card(drawn: &[DrawnCard]) -> Option<(String, String)> {
    let [past, present, future] = drawn else {
        return None;
    };

    let message = format!(
        "과거({}), 현재({}), 미래({})의 연결고리가 당신의 운명을 이루고 있습니다. \
         과거의 경험이 현재의 선택에 영향을 주고, 이는 밝은 미래로 이어질 것입니다.",
        past.card.name_kr, present.card.name_kr, future.card.name_kr
    );

    let reversed = drawn.iter().filter(|c| c.reversed).count();
    let advice = match reversed {
        0 => {
            "모든 카드가 정방향으로 나타났습니다. 우주의 에너지가 당신을 강력히 지지하고 \
             있으니 자신감을 가지고 나아가세요."
        }
        3 => {
            "모든 카드가 역방향입니다. 내면의 성찰과 기다림이 필요한 시기입니다. \
             서두르지 말고 때를 기다리세요."
        }
        _ => {
            "정방향과 역방향 카드가 균형을 이루고 있습니다. 외적 행동과 내적 성찰의 \
             조화를 통해 균형잡힌 해답을 찾으세요."
        }
    };

    Some((message, advice.to_string()))
}

fn celtic_cross(drawn: &[DrawnCard]) -> Option<(String, String)> {
    if drawn.len() != SpreadKind::CelticCross.card_count() {
        return None;
    }
    let situation = &drawn[0].card.name_kr;
    let outcome = &drawn[8].card.name_kr;
    let counsel = &drawn[9].card.name_kr;

    let message = format!(
        "현재 상황을 나타내는 {situation}와 최종 결과인 {outcome}이 보여주는 당신의 \
         운명의 길입니다. 열 장의 카드가 그려내는 복잡한 상황 속에서도 우주는 명확한 \
         방향을 제시하고 있습니다."
    );
    let advice = format!(
        "조언의 위치에 있는 {counsel}이 말합니다: 복잡해 보이는 상황도 한 걸음씩 \
         차근차근 풀어나가면 됩니다. 카드들이 보여주는 각각의 측면을 이해하고 \
         전체적인 그림을 그려보세요."
    );

    Some((message, advice))
}

fn generic(drawn: &[DrawnCard]) -> (String, String) {
    let names: Vec<&str> = drawn.iter().map(|c| c.card.name_kr.as_str()).collect();
    (
        format!(
            "뽑힌 카드들({})이 우주의 메시지를 전달하고 있습니다.",
            names.join(", ")
        ),
        phrases::FALLBACK_OVERALL_ADVICE.to_string(),
    )
}
