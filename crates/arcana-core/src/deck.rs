//! The built-in 22-card Major Arcana deck.
//!
//! Cards are defined as a const table and materialized into owned [`Card`]
//! values by [`standard_deck`]. The table is the source of truth for card
//! attributes; nothing in the engine mutates a card after creation.

use crate::card::{AspectSet, Card};

/// Number of cards in the Major Arcana deck.
pub const DECK_SIZE: usize = 22;

struct AspectDef {
    general: &'static str,
    love: &'static str,
    career: &'static str,
    health: &'static str,
}

struct CardDef {
    arcana_id: u8,
    name: &'static str,
    name_kr: &'static str,
    keywords: &'static [&'static str],
    keywords_kr: &'static [&'static str],
    upright: AspectDef,
    reversed: AspectDef,
    description: &'static str,
    description_kr: &'static str,
    element: Option<&'static str>,
    planet: Option<&'static str>,
    numerology: u8,
    symbolism: &'static [&'static str],
}

impl AspectDef {
    fn materialize(&self) -> AspectSet {
        AspectSet {
            general: self.general.to_string(),
            love: self.love.to_string(),
            career: self.career.to_string(),
            health: self.health.to_string(),
        }
    }
}

impl CardDef {
    fn materialize(&self) -> Card {
        Card {
            arcana_id: self.arcana_id,
            name: self.name.to_string(),
            name_kr: self.name_kr.to_string(),
            keywords: self.keywords.iter().map(|k| (*k).to_string()).collect(),
            keywords_kr: self.keywords_kr.iter().map(|k| (*k).to_string()).collect(),
            upright: self.upright.materialize(),
            reversed: self.reversed.materialize(),
            description: self.description.to_string(),
            description_kr: self.description_kr.to_string(),
            element: self.element.map(str::to_string),
            planet: self.planet.map(str::to_string),
            numerology: self.numerology,
            symbolism: self.symbolism.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

/// Build the standard Major Arcana deck, ordered by arcana ID.
pub fn standard_deck() -> Vec<Card> {
    MAJOR_ARCANA.iter().map(CardDef::materialize).collect()
}

const MAJOR_ARCANA: [CardDef; DECK_SIZE] = [
    CardDef {
        arcana_id: 0,
        name: "The Fool",
        name_kr: "광대",
        keywords: &["new beginnings", "innocence", "spontaneity", "free spirit"],
        keywords_kr: &["새로운 시작", "순수함", "자발성", "자유로운 영혼"],
        upright: AspectDef {
            general: "새로운 여행의 시작, 순수한 마음으로 모험을 떠날 때입니다. 두려움 없이 앞으로 나아가세요.",
            love: "새로운 만남이나 관계의 시작을 의미합니다. 열린 마음으로 사랑을 받아들이세요.",
            career: "새로운 직업이나 프로젝트의 시작. 창의적이고 혁신적인 접근이 필요합니다.",
            health: "새로운 건강 관리 방법을 시도해보세요. 활력과 에너지가 넘치는 시기입니다.",
        },
        reversed: AspectDef {
            general: "무모함과 경솔함을 조심하세요. 신중한 계획이 필요한 때입니다.",
            love: "성급한 결정을 피하고, 관계에서 더 신중하게 행동하세요.",
            career: "준비 부족으로 인한 실패 가능성. 더 많은 계획과 준비가 필요합니다.",
            health: "건강을 소홀히 하지 마세요. 무리한 활동은 피하는 것이 좋습니다.",
        },
        description: "The Fool represents new beginnings, having faith in the future, being inexperienced, not knowing what to expect, having beginner's luck, improvisation and believing in the universe.",
        description_kr: "광대는 새로운 시작, 미래에 대한 믿음, 경험 부족, 예상치 못한 상황, 초보자의 행운, 즉흥성, 그리고 우주에 대한 믿음을 나타냅니다.",
        element: Some("Air"),
        planet: Some("Uranus"),
        numerology: 0,
        symbolism: &[
            "white rose (purity)",
            "cliff (leap of faith)",
            "small bag (memories)",
            "mountains (challenges ahead)",
        ],
    },
    CardDef {
        arcana_id: 1,
        name: "The Magician",
        name_kr: "마법사",
        keywords: &["manifestation", "resourcefulness", "power", "inspired action"],
        keywords_kr: &["현실화", "수완", "힘", "영감받은 행동"],
        upright: AspectDef {
            general: "당신은 목표를 달성할 모든 도구와 능력을 가지고 있습니다. 의지력으로 현실을 창조하세요.",
            love: "적극적인 행동으로 원하는 관계를 만들어갈 수 있습니다. 진정성 있는 의사소통이 중요합니다.",
            career: "리더십과 창의성을 발휘할 때입니다. 새로운 프로젝트나 사업에 적극 나서세요.",
            health: "자기 치유력이 강한 시기입니다. 의지력으로 건강을 회복할 수 있습니다.",
        },
        reversed: AspectDef {
            general: "능력을 잘못 사용하거나 조작적인 행동을 조심하세요. 진정성이 필요합니다.",
            love: "관계에서 조작이나 속임수를 사용하지 마세요. 솔직함이 최선입니다.",
            career: "능력 부족이나 자신감 결여로 인한 어려움. 더 많은 준비와 연습이 필요합니다.",
            health: "건강 관리에 더 많은 관심과 노력이 필요합니다. 전문가의 도움을 받으세요.",
        },
        description: "The Magician represents taking action, having the power to manifest your desires, being resourceful, and having the ability to make things happen.",
        description_kr: "마법사는 행동을 취하는 것, 욕망을 현실화할 힘을 가진 것, 수완이 뛰어난 것, 그리고 일을 성사시킬 능력을 나타냅니다.",
        element: Some("Air"),
        planet: Some("Mercury"),
        numerology: 1,
        symbolism: &[
            "infinity symbol (unlimited potential)",
            "four suit symbols (mastery of elements)",
            "white robe (purity)",
            "red cloak (worldly experience)",
        ],
    },
    CardDef {
        arcana_id: 2,
        name: "The High Priestess",
        name_kr: "여교황",
        keywords: &["intuition", "sacred knowledge", "divine feminine", "subconscious mind"],
        keywords_kr: &["직감", "신성한 지식", "신성한 여성성", "잠재의식"],
        upright: AspectDef {
            general: "내면의 목소리에 귀 기울이세요. 직감과 영감이 당신을 올바른 길로 인도할 것입니다.",
            love: "감정의 깊이를 탐구하고, 상대방의 진심을 느껴보세요. 비언어적 소통이 중요합니다.",
            career: "창의성과 직관을 활용한 업무가 성공할 것입니다. 급하게 결정하지 말고 때를 기다리세요.",
            health: "몸의 신호에 주의를 기울이세요. 스트레스 관리와 정신적 균형이 중요합니다.",
        },
        reversed: AspectDef {
            general: "내면의 목소리를 무시하고 있지는 않나요? 직감을 회복하고 내적 지혜에 귀 기울이세요.",
            love: "감정을 억압하거나 진실을 외면하고 있습니다. 솔직한 대화가 필요합니다.",
            career: "정보 부족이나 소통 문제로 인한 어려움. 더 많은 조사와 연구가 필요합니다.",
            health: "몸의 신호를 놓치고 있을 수 있습니다. 정기 검진과 예방 관리가 중요합니다.",
        },
        description: "The High Priestess represents intuition, higher powers, mystery, and the subconscious mind. She sits between the conscious and unconscious realms.",
        description_kr: "여교황은 직관, 고차원적 힘, 신비, 그리고 잠재의식을 나타냅니다. 그녀는 의식과 무의식 영역 사이에 앉아 있습니다.",
        element: Some("Water"),
        planet: Some("Moon"),
        numerology: 2,
        symbolism: &[
            "pomegranates (feminine fertility)",
            "moon at feet (intuition)",
            "cross (balance)",
            "blue robe (knowledge)",
        ],
    },
    CardDef {
        arcana_id: 3,
        name: "The Empress",
        name_kr: "여황제",
        keywords: &["abundance", "nurturing", "fertility", "nature"],
        keywords_kr: &["풍요", "보살핌", "다산", "자연"],
        upright: AspectDef {
            general: "풍요와 성장의 시기입니다. 당신이 가꾸어 온 것들이 결실을 맺기 시작합니다.",
            love: "관계가 깊어지고 애정이 풍성해집니다. 따뜻한 보살핌을 주고받으세요.",
            career: "창조적인 작업이 번성하는 때입니다. 아이디어를 키워 구체적인 성과로 만드세요.",
            health: "몸과 마음에 영양을 충분히 공급하세요. 자연 속에서 회복하는 것이 좋습니다.",
        },
        reversed: AspectDef {
            general: "자신을 돌보는 일을 미루고 있습니다. 타인보다 먼저 스스로를 보살피세요.",
            love: "지나친 간섭이나 의존이 관계를 무겁게 합니다. 적당한 거리를 유지하세요.",
            career: "창조적 정체기에 빠져 있습니다. 잠시 쉬어가며 영감을 재충전하세요.",
            health: "과로와 소진의 신호입니다. 휴식과 회복에 집중하세요.",
        },
        description: "The Empress represents abundance, nurturing, fertility, and the beauty of the natural world. She invites you to create and to care.",
        description_kr: "여황제는 풍요, 보살핌, 다산, 그리고 자연의 아름다움을 나타냅니다. 창조하고 돌보라는 초대의 카드입니다.",
        element: Some("Earth"),
        planet: Some("Venus"),
        numerology: 3,
        symbolism: &[
            "wheat field (abundance)",
            "crown of stars (connection to heavens)",
            "flowing river (emotional nourishment)",
            "venus shield (love)",
        ],
    },
    CardDef {
        arcana_id: 4,
        name: "The Emperor",
        name_kr: "황제",
        keywords: &["authority", "structure", "stability", "leadership"],
        keywords_kr: &["권위", "체계", "안정", "리더십"],
        upright: AspectDef {
            general: "질서와 체계가 힘이 되는 시기입니다. 원칙을 세우고 흔들림 없이 지켜나가세요.",
            love: "안정적이고 책임감 있는 관계를 만들어갈 수 있습니다. 신뢰가 바탕이 됩니다.",
            career: "조직을 이끌고 구조를 세울 기회입니다. 권위를 공정하게 사용하세요.",
            health: "규칙적인 생활 습관이 건강의 기반이 됩니다. 꾸준한 관리가 중요합니다.",
        },
        reversed: AspectDef {
            general: "지나친 통제가 주변을 경직시키고 있습니다. 유연함을 되찾으세요.",
            love: "관계에서 권위적인 태도를 내려놓으세요. 상대방의 목소리를 들어야 합니다.",
            career: "경직된 체계나 독단적 결정이 발목을 잡습니다. 다른 의견을 수용하세요.",
            health: "스트레스가 몸을 경직시키고 있습니다. 긴장을 풀어줄 활동이 필요합니다.",
        },
        description: "The Emperor represents authority, structure, and the stabilizing power of order. He builds foundations that endure.",
        description_kr: "황제는 권위, 체계, 그리고 질서가 주는 안정의 힘을 나타냅니다. 오래 지속될 기반을 세우는 카드입니다.",
        element: Some("Fire"),
        planet: Some("Mars"),
        numerology: 4,
        symbolism: &[
            "stone throne (stability)",
            "ram heads (determination)",
            "orb and scepter (dominion)",
            "barren mountains (discipline)",
        ],
    },
    CardDef {
        arcana_id: 5,
        name: "The Hierophant",
        name_kr: "교황",
        keywords: &["tradition", "spiritual wisdom", "conformity", "guidance"],
        keywords_kr: &["전통", "영적 지혜", "순응", "인도"],
        upright: AspectDef {
            general: "검증된 길과 전통의 지혜가 답을 줍니다. 스승이나 공동체의 가르침에 귀 기울이세요.",
            love: "관계가 공식적인 단계로 나아갈 수 있습니다. 약속과 의례가 의미를 가집니다.",
            career: "기존의 규범과 절차를 따르는 것이 유리합니다. 멘토의 조언을 구하세요.",
            health: "검증된 치료법과 전문가의 지도를 신뢰하세요. 꾸준함이 열쇠입니다.",
        },
        reversed: AspectDef {
            general: "관습이 더 이상 맞지 않는다면 자신만의 길을 찾을 때입니다.",
            love: "형식에 얽매인 관계를 돌아보세요. 진심이 먼저입니다.",
            career: "낡은 방식에 갇혀 있지는 않나요? 새로운 접근을 시도해보세요.",
            health: "몸에 맞지 않는 방법을 고집하지 마세요. 자신에게 맞는 관리법을 찾으세요.",
        },
        description: "The Hierophant represents tradition, spiritual wisdom, and the value of established institutions and teachings.",
        description_kr: "교황은 전통, 영적 지혜, 그리고 확립된 제도와 가르침의 가치를 나타냅니다.",
        element: Some("Earth"),
        planet: Some("Venus"),
        numerology: 5,
        symbolism: &[
            "triple crown (three worlds)",
            "crossed keys (hidden knowledge)",
            "two acolytes (transmission of teaching)",
            "raised hand (blessing)",
        ],
    },
    CardDef {
        arcana_id: 6,
        name: "The Lovers",
        name_kr: "연인",
        keywords: &["love", "harmony", "choices", "alignment"],
        keywords_kr: &["사랑", "조화", "선택", "일치"],
        upright: AspectDef {
            general: "마음이 향하는 곳을 따르는 선택의 순간입니다. 가치관이 일치하는 길을 고르세요.",
            love: "깊은 유대와 진정한 결합의 시기입니다. 서로에게 솔직해지세요.",
            career: "가치관에 맞는 협력과 파트너십이 성과를 냅니다. 신중히 선택하세요.",
            health: "몸과 마음의 조화가 회복의 열쇠입니다. 균형 잡힌 생활을 유지하세요.",
        },
        reversed: AspectDef {
            general: "가치관의 충돌이나 어긋난 선택을 돌아보세요. 진심이 어디에 있는지 물어야 합니다.",
            love: "관계의 불균형이나 소통의 단절이 있습니다. 회피하지 말고 대화하세요.",
            career: "맞지 않는 협력 관계가 부담이 됩니다. 조건을 재검토하세요.",
            health: "생활의 불균형이 몸에 부담을 줍니다. 우선순위를 다시 세우세요.",
        },
        description: "The Lovers represents love, harmony, and the crossroads where a choice of the heart must be made.",
        description_kr: "연인은 사랑, 조화, 그리고 마음의 선택을 해야 하는 갈림길을 나타냅니다.",
        element: Some("Air"),
        planet: Some("Mercury"),
        numerology: 6,
        symbolism: &[
            "angel (divine blessing)",
            "two figures (union)",
            "tree of knowledge (temptation)",
            "mountain (challenges between)",
        ],
    },
    CardDef {
        arcana_id: 7,
        name: "The Chariot",
        name_kr: "전차",
        keywords: &["willpower", "determination", "victory", "control"],
        keywords_kr: &["의지력", "결단력", "승리", "통제"],
        upright: AspectDef {
            general: "강한 의지로 상반된 힘을 하나로 모아 전진할 때입니다. 승리가 가까이 있습니다.",
            love: "주도적으로 관계를 이끌어가세요. 분명한 의사 표현이 길을 엽니다.",
            career: "목표를 향해 흔들림 없이 나아가세요. 경쟁에서 앞설 수 있는 시기입니다.",
            health: "의지력으로 나쁜 습관을 끊어낼 수 있습니다. 목표를 정하고 실천하세요.",
        },
        reversed: AspectDef {
            general: "방향을 잃고 힘이 분산되어 있습니다. 고삐를 다시 잡으세요.",
            love: "관계를 밀어붙이려는 조급함을 내려놓으세요. 속도를 조절해야 합니다.",
            career: "무리한 추진이 역효과를 냅니다. 전략을 재정비하세요.",
            health: "과속하는 생활이 몸을 지치게 합니다. 속도를 늦추고 재정비하세요.",
        },
        description: "The Chariot represents willpower, determination, and victory achieved by holding opposing forces on a single course.",
        description_kr: "전차는 의지력, 결단력, 그리고 상반된 힘을 하나의 길로 이끌어 얻는 승리를 나타냅니다.",
        element: Some("Water"),
        planet: None,
        numerology: 7,
        symbolism: &[
            "two sphinxes (opposing forces)",
            "starry canopy (celestial guidance)",
            "armor (protection)",
            "city walls behind (leaving comfort)",
        ],
    },
    CardDef {
        arcana_id: 8,
        name: "Strength",
        name_kr: "힘",
        keywords: &["courage", "inner strength", "patience", "compassion"],
        keywords_kr: &["용기", "내면의 힘", "인내", "연민"],
        upright: AspectDef {
            general: "부드러움이 진정한 힘입니다. 인내와 연민으로 어려움을 다스리세요.",
            love: "다정함과 이해심이 관계를 단단하게 합니다. 서두르지 않아도 됩니다.",
            career: "조용한 끈기가 성과를 만듭니다. 감정에 휘둘리지 말고 차분히 대응하세요.",
            health: "회복에는 꾸준한 인내가 필요합니다. 몸을 부드럽게 다루세요.",
        },
        reversed: AspectDef {
            general: "자기 의심이 힘을 갉아먹고 있습니다. 내면의 용기를 다시 믿으세요.",
            love: "불안함이 관계를 흔들고 있습니다. 스스로를 먼저 다독이세요.",
            career: "자신감 부족으로 기회를 놓치고 있습니다. 작은 성취부터 쌓아가세요.",
            health: "무리하게 버티고 있지는 않나요? 약함을 인정하는 것도 힘입니다.",
        },
        description: "Strength represents courage, patience, and the quiet power of compassion taming brute force.",
        description_kr: "힘은 용기, 인내, 그리고 거친 힘을 길들이는 연민의 조용한 힘을 나타냅니다.",
        element: Some("Fire"),
        planet: None,
        numerology: 8,
        symbolism: &[
            "woman and lion (gentle mastery)",
            "infinity symbol (limitless inner power)",
            "white robe (purity of intent)",
            "garland (victory through kindness)",
        ],
    },
    CardDef {
        arcana_id: 9,
        name: "The Hermit",
        name_kr: "은둔자",
        keywords: &["introspection", "solitude", "inner guidance", "wisdom"],
        keywords_kr: &["내면 성찰", "고독", "내적 인도", "지혜"],
        upright: AspectDef {
            general: "홀로 있는 시간이 답을 가져다줍니다. 내면의 등불을 따라가세요.",
            love: "잠시 거리를 두고 마음을 정리할 때입니다. 성찰이 관계를 깊게 합니다.",
            career: "혼자 집중하는 작업에서 통찰이 나옵니다. 조용히 실력을 다지세요.",
            health: "휴식과 명상이 회복을 돕습니다. 소음에서 벗어나 재충전하세요.",
        },
        reversed: AspectDef {
            general: "고립이 길어지고 있습니다. 다시 세상과 연결될 때입니다.",
            love: "마음의 문을 닫아걸고 있지는 않나요? 조금씩 열어보세요.",
            career: "혼자 끌어안은 일이 너무 많습니다. 도움을 요청하세요.",
            health: "외로움이 건강을 해치고 있습니다. 가까운 사람들과 시간을 보내세요.",
        },
        description: "The Hermit represents introspection, solitude, and the wisdom found by walking inward with one's own lantern.",
        description_kr: "은둔자는 내면 성찰, 고독, 그리고 자신의 등불을 들고 내면으로 걸어가며 얻는 지혜를 나타냅니다.",
        element: Some("Earth"),
        planet: Some("Mercury"),
        numerology: 9,
        symbolism: &[
            "lantern (inner light)",
            "six-pointed star (wisdom)",
            "staff (support on the path)",
            "snowy peak (spiritual attainment)",
        ],
    },
    CardDef {
        arcana_id: 10,
        name: "Wheel of Fortune",
        name_kr: "운명의 수레바퀴",
        keywords: &["cycles", "destiny", "turning point", "luck"],
        keywords_kr: &["순환", "운명", "전환점", "행운"],
        upright: AspectDef {
            general: "운명의 수레바퀴가 돌기 시작했습니다. 변화의 흐름에 올라타세요.",
            love: "관계에 전환점이 찾아옵니다. 우연한 만남에 의미가 있을 수 있습니다.",
            career: "예상치 못한 기회가 찾아옵니다. 흐름을 읽고 빠르게 움직이세요.",
            health: "컨디션의 흐름이 바뀌는 시기입니다. 좋은 순환을 만들어가세요.",
        },
        reversed: AspectDef {
            general: "흐름이 잠시 역행하는 듯 보입니다. 바퀴는 다시 돌아오니 버텨내세요.",
            love: "관계의 정체기입니다. 억지로 돌리려 하지 말고 때를 기다리세요.",
            career: "계획이 외부 사정으로 지연됩니다. 통제할 수 있는 일에 집중하세요.",
            health: "회복이 더디게 느껴질 수 있습니다. 조급해하지 말고 관리를 이어가세요.",
        },
        description: "The Wheel of Fortune represents cycles, destiny, and the turning points that arrive whether we are ready or not.",
        description_kr: "운명의 수레바퀴는 순환, 운명, 그리고 준비 여부와 상관없이 찾아오는 전환점을 나타냅니다.",
        element: Some("Fire"),
        planet: Some("Jupiter"),
        numerology: 10,
        symbolism: &[
            "turning wheel (cycles of fate)",
            "sphinx on top (riddle of destiny)",
            "four winged creatures (fixed points)",
            "alchemical symbols (transformation)",
        ],
    },
    CardDef {
        arcana_id: 11,
        name: "Justice",
        name_kr: "정의",
        keywords: &["fairness", "truth", "cause and effect", "accountability"],
        keywords_kr: &["공정", "진실", "인과", "책임"],
        upright: AspectDef {
            general: "뿌린 대로 거두는 시기입니다. 진실하게 행동하면 저울은 당신 편입니다.",
            love: "관계에서 공평함과 솔직함이 필요합니다. 균형 잡힌 주고받음을 확인하세요.",
            career: "계약, 협상, 법적 문제가 공정하게 풀립니다. 기록을 명확히 남기세요.",
            health: "생활의 균형이 곧 건강입니다. 치우친 습관을 바로잡으세요.",
        },
        reversed: AspectDef {
            general: "불공정함이나 회피된 책임이 드러납니다. 정직하게 바로잡을 기회입니다.",
            love: "관계의 저울이 한쪽으로 기울어 있습니다. 솔직한 정산이 필요합니다.",
            career: "불리한 조건이나 불투명한 결정을 경계하세요. 세부 사항을 재확인하세요.",
            health: "몸의 불균형 신호를 무시하지 마세요. 원인을 찾아 교정하세요.",
        },
        description: "Justice represents fairness, truth, and the law of cause and effect weighing every action.",
        description_kr: "정의는 공정함, 진실, 그리고 모든 행동을 저울에 다는 인과의 법칙을 나타냅니다.",
        element: Some("Air"),
        planet: Some("Venus"),
        numerology: 11,
        symbolism: &[
            "scales (balance)",
            "upright sword (clarity of judgment)",
            "crown (authority of law)",
            "purple veil (hidden wisdom)",
        ],
    },
    CardDef {
        arcana_id: 12,
        name: "The Hanged Man",
        name_kr: "매달린 남자",
        keywords: &["surrender", "new perspective", "pause", "letting go"],
        keywords_kr: &["내려놓음", "새로운 관점", "멈춤", "놓아줌"],
        upright: AspectDef {
            general: "멈춤이 곧 전진입니다. 거꾸로 매달려야 보이는 풍경이 있습니다.",
            love: "상대방의 입장에서 관계를 바라보세요. 기다림이 답이 될 수 있습니다.",
            career: "서두르지 말고 관점을 바꿔보세요. 보류된 일에 다른 길이 보입니다.",
            health: "억지로 밀어붙이기보다 휴식이 필요합니다. 몸의 리듬에 맡기세요.",
        },
        reversed: AspectDef {
            general: "의미 없는 희생과 제자리걸음에 지쳐 있습니다. 매듭을 풀고 움직일 때입니다.",
            love: "일방적인 희생이 관계를 소모시킵니다. 자신의 자리를 되찾으세요.",
            career: "지연이 길어지고 있습니다. 결단을 내리고 다음으로 넘어가세요.",
            health: "미뤄둔 관리가 부담으로 돌아옵니다. 더 늦기 전에 시작하세요.",
        },
        description: "The Hanged Man represents surrender, suspension, and the new perspective gained by letting go.",
        description_kr: "매달린 남자는 내려놓음, 유예, 그리고 놓아줌으로써 얻는 새로운 관점을 나타냅니다.",
        element: Some("Water"),
        planet: Some("Neptune"),
        numerology: 12,
        symbolism: &[
            "inverted figure (reversed perspective)",
            "halo (enlightenment)",
            "living tree (growth through stillness)",
            "bound foot (willing sacrifice)",
        ],
    },
    CardDef {
        arcana_id: 13,
        name: "Death",
        name_kr: "죽음",
        keywords: &["endings", "transformation", "transition", "renewal"],
        keywords_kr: &["끝맺음", "변환", "이행", "재생"],
        upright: AspectDef {
            general: "하나의 장이 끝나고 새로운 장이 시작됩니다. 끝맺음을 두려워하지 마세요.",
            love: "관계가 근본적으로 변화하는 시기입니다. 낡은 패턴을 떠나보내세요.",
            career: "한 시대의 마무리와 새로운 방향의 시작입니다. 변화를 받아들이세요.",
            health: "오래된 습관을 끊어낼 절호의 기회입니다. 몸을 새롭게 재정비하세요.",
        },
        reversed: AspectDef {
            general: "끝난 것을 붙잡고 있으면 새로운 것이 들어올 자리가 없습니다.",
            love: "정리해야 할 감정을 미루고 있습니다. 놓아주어야 앞으로 갑니다.",
            career: "변화에 대한 저항이 정체를 만듭니다. 전환을 더는 미루지 마세요.",
            health: "해로운 습관이 끈질기게 남아 있습니다. 단호하게 결별하세요.",
        },
        description: "Death represents endings, transformation, and the clearing away that makes renewal possible.",
        description_kr: "죽음은 끝맺음, 변환, 그리고 재생을 가능하게 하는 비워냄을 나타냅니다.",
        element: Some("Water"),
        planet: Some("Pluto"),
        numerology: 13,
        symbolism: &[
            "white rose banner (purity beyond death)",
            "rising sun (rebirth)",
            "river (passage)",
            "fallen crown (endings spare no one)",
        ],
    },
    CardDef {
        arcana_id: 14,
        name: "Temperance",
        name_kr: "절제",
        keywords: &["balance", "moderation", "patience", "blending"],
        keywords_kr: &["균형", "중용", "인내", "조화"],
        upright: AspectDef {
            general: "서로 다른 것을 섞어 더 나은 것을 만드는 연금술의 시기입니다. 중용을 지키세요.",
            love: "서로의 차이를 녹여 조화를 만들어가세요. 인내가 관계를 빚어냅니다.",
            career: "협업과 조율이 성과를 냅니다. 극단을 피하고 합의점을 찾으세요.",
            health: "과하지도 모자라지도 않게, 절제된 생활이 몸을 다스립니다.",
        },
        reversed: AspectDef {
            general: "균형이 무너져 한쪽으로 쏠려 있습니다. 중심을 다시 잡으세요.",
            love: "감정의 온도 차가 큽니다. 서두르지 말고 속도를 맞추세요.",
            career: "무리한 일정이나 과욕이 일을 그르칩니다. 페이스를 조절하세요.",
            health: "과음, 과식, 과로를 경계하세요. 몸은 중용을 원합니다.",
        },
        description: "Temperance represents balance, moderation, and the patient art of blending opposites into harmony.",
        description_kr: "절제는 균형, 중용, 그리고 상반된 것을 조화로 빚어내는 인내의 기술을 나타냅니다.",
        element: Some("Fire"),
        planet: Some("Jupiter"),
        numerology: 14,
        symbolism: &[
            "water between cups (flow of life)",
            "one foot on land, one in water (balance of realms)",
            "iris flowers (message of hope)",
            "radiant crown on path (the way forward)",
        ],
    },
    CardDef {
        arcana_id: 15,
        name: "The Devil",
        name_kr: "악마",
        keywords: &["bondage", "materialism", "temptation", "shadow self"],
        keywords_kr: &["속박", "물질주의", "유혹", "그림자"],
        upright: AspectDef {
            general: "스스로 묶인 사슬을 직시할 때입니다. 족쇄는 생각보다 느슨합니다.",
            love: "집착이나 의존이 사랑으로 위장하고 있지 않은지 살펴보세요.",
            career: "눈앞의 이익에 묶여 더 큰 그림을 놓치고 있습니다. 조건을 냉정히 보세요.",
            health: "중독적인 습관이 몸을 잠식하고 있습니다. 유혹의 고리를 끊으세요.",
        },
        reversed: AspectDef {
            general: "속박에서 벗어나는 해방의 순간입니다. 사슬을 벗고 빛을 향하세요.",
            love: "건강하지 않은 관계의 고리를 끊어낼 힘이 생겼습니다.",
            career: "부담스러운 의무나 계약에서 풀려날 길이 보입니다.",
            health: "나쁜 습관과의 결별이 시작됩니다. 회복의 첫걸음을 내디디세요.",
        },
        description: "The Devil represents bondage, materialism, and the chains we forge for ourselves and can also unfasten.",
        description_kr: "악마는 속박, 물질주의, 그리고 스스로 채웠기에 스스로 풀 수도 있는 사슬을 나타냅니다.",
        element: Some("Earth"),
        planet: Some("Saturn"),
        numerology: 15,
        symbolism: &[
            "loose chains (self-imposed bondage)",
            "inverted pentagram (matter over spirit)",
            "torch (misused fire)",
            "bound figures (willing captivity)",
        ],
    },
    CardDef {
        arcana_id: 16,
        name: "The Tower",
        name_kr: "탑",
        keywords: &["sudden upheaval", "revelation", "awakening", "collapse"],
        keywords_kr: &["급변", "폭로", "각성", "붕괴"],
        upright: AspectDef {
            general: "거짓 위에 세운 것이 무너지는 순간입니다. 무너짐은 다시 세우기 위함입니다.",
            love: "숨겨져 있던 진실이 드러나며 관계가 흔들립니다. 정직하게 마주하세요.",
            career: "갑작스러운 변동이 찾아옵니다. 기초부터 다시 점검할 기회로 삼으세요.",
            health: "몸이 보내는 급한 경고를 무시하지 마세요. 즉시 점검이 필요합니다.",
        },
        reversed: AspectDef {
            general: "무너져야 할 것을 붙들고 버티는 중입니다. 통제된 해체가 더 낫습니다.",
            love: "위기를 외면한다고 사라지지 않습니다. 먼저 변화를 선택하세요.",
            career: "임박한 변화의 신호를 읽으세요. 미리 대비하면 충격이 줄어듭니다.",
            health: "누적된 무리가 임계점에 가깝습니다. 지금 속도를 늦추세요.",
        },
        description: "The Tower represents sudden upheaval, revelation, and the collapse of false structures that clears the ground.",
        description_kr: "탑은 급변, 폭로, 그리고 거짓된 구조의 붕괴가 만들어내는 새 터전을 나타냅니다.",
        element: Some("Fire"),
        planet: Some("Mars"),
        numerology: 16,
        symbolism: &[
            "lightning bolt (sudden truth)",
            "falling crown (toppled pride)",
            "flames (purification)",
            "falling figures (forced release)",
        ],
    },
    CardDef {
        arcana_id: 17,
        name: "The Star",
        name_kr: "별",
        keywords: &["hope", "renewal", "inspiration", "serenity"],
        keywords_kr: &["희망", "회복", "영감", "평온"],
        upright: AspectDef {
            general: "폭풍이 지나간 자리에 별이 뜹니다. 희망을 붓고 상처를 회복하세요.",
            love: "치유와 새로운 희망의 시기입니다. 믿음을 가지고 마음을 여세요.",
            career: "비전이 선명해지고 영감이 샘솟습니다. 장기적인 꿈에 투자하세요.",
            health: "회복의 기운이 완연합니다. 맑은 물처럼 몸과 마음을 정화하세요.",
        },
        reversed: AspectDef {
            general: "희망이 희미해져 보이는 시기입니다. 별은 구름 뒤에도 빛나고 있습니다.",
            love: "실망이 마음을 닫게 했습니다. 천천히 신뢰를 다시 길어 올리세요.",
            career: "방향에 대한 확신이 흔들립니다. 처음의 비전을 떠올려보세요.",
            health: "무기력이 회복을 더디게 합니다. 작은 루틴부터 되살리세요.",
        },
        description: "The Star represents hope, renewal, and the quiet inspiration that returns after the storm.",
        description_kr: "별은 희망, 회복, 그리고 폭풍 뒤에 돌아오는 고요한 영감을 나타냅니다.",
        element: Some("Air"),
        planet: Some("Uranus"),
        numerology: 17,
        symbolism: &[
            "large star (guiding hope)",
            "pouring water (renewal)",
            "ibis bird (sacred thought)",
            "naked figure (vulnerability and truth)",
        ],
    },
    CardDef {
        arcana_id: 18,
        name: "The Moon",
        name_kr: "달",
        keywords: &["illusion", "intuition", "subconscious", "uncertainty"],
        keywords_kr: &["환상", "직관", "무의식", "불확실성"],
        upright: AspectDef {
            general: "달빛 아래에서는 사물이 다르게 보입니다. 불안 속에서도 직관을 신뢰하세요.",
            love: "드러나지 않은 감정과 오해가 흐르고 있습니다. 확인하지 않은 추측을 경계하세요.",
            career: "불확실한 정보 속에서 결정하지 마세요. 안개가 걷힐 때까지 관망하세요.",
            health: "원인이 불분명한 증상은 미루지 말고 확인하세요. 마음의 불안도 돌보세요.",
        },
        reversed: AspectDef {
            general: "안개가 걷히고 혼란이 정리되기 시작합니다. 진실이 모습을 드러냅니다.",
            love: "오해가 풀리고 감정이 명확해집니다. 솔직한 대화의 적기입니다.",
            career: "가려져 있던 사실이 드러나 판단이 쉬워집니다. 재평가를 진행하세요.",
            health: "불안이 잦아들며 몸도 안정됩니다. 규칙적인 수면을 지키세요.",
        },
        description: "The Moon represents illusion, intuition, and the uncertain path that must be walked by inner light.",
        description_kr: "달은 환상, 직관, 그리고 내면의 빛으로 걸어야 하는 불확실한 길을 나타냅니다.",
        element: Some("Water"),
        planet: Some("Moon"),
        numerology: 18,
        symbolism: &[
            "moon with face (the dreaming mind)",
            "dog and wolf (tamed and wild fear)",
            "crayfish (emerging subconscious)",
            "winding path (uncertain journey)",
        ],
    },
    CardDef {
        arcana_id: 19,
        name: "The Sun",
        name_kr: "태양",
        keywords: &["joy", "success", "vitality", "clarity"],
        keywords_kr: &["기쁨", "성공", "활력", "명료함"],
        upright: AspectDef {
            general: "구름 한 점 없는 성공과 기쁨의 시기입니다. 빛 가운데로 당당히 나아가세요.",
            love: "따뜻하고 밝은 에너지가 관계를 감쌉니다. 함께하는 기쁨을 만끽하세요.",
            career: "성과가 빛을 보고 인정이 따라옵니다. 자신 있게 성취를 드러내세요.",
            health: "활력이 넘치는 최상의 컨디션입니다. 햇빛 아래에서 에너지를 충전하세요.",
        },
        reversed: AspectDef {
            general: "구름이 잠시 해를 가렸을 뿐입니다. 작은 기쁨에서 빛을 되찾으세요.",
            love: "사소한 그늘이 드리워져 있습니다. 감사를 표현하며 온기를 회복하세요.",
            career: "성과가 기대보다 늦게 드러납니다. 낙관을 잃지 말고 계속하세요.",
            health: "에너지가 일시적으로 떨어져 있습니다. 가벼운 활동으로 활력을 깨우세요.",
        },
        description: "The Sun represents joy, success, and the vitality of seeing things clearly in full daylight.",
        description_kr: "태양은 기쁨, 성공, 그리고 환한 대낮에 모든 것을 명료하게 보는 활력을 나타냅니다.",
        element: Some("Fire"),
        planet: Some("Sun"),
        numerology: 19,
        symbolism: &[
            "radiant sun (life force)",
            "child on horse (innocent joy)",
            "sunflowers (growth toward light)",
            "red banner (vital energy)",
        ],
    },
    CardDef {
        arcana_id: 20,
        name: "Judgement",
        name_kr: "심판",
        keywords: &["rebirth", "awakening", "reckoning", "calling"],
        keywords_kr: &["부활", "각성", "결산", "소명"],
        upright: AspectDef {
            general: "지난 시간을 결산하고 더 높은 부름에 응답할 때입니다. 과거를 용서하고 일어나세요.",
            love: "관계를 새로운 차원으로 끌어올릴 기회입니다. 지난 일을 정리하고 다시 시작하세요.",
            career: "그동안의 노력이 평가받는 시기입니다. 소명이 느껴지는 길을 선택하세요.",
            health: "생활 전반을 재점검하고 새로 태어날 때입니다. 큰 결심이 몸을 바꿉니다.",
        },
        reversed: AspectDef {
            general: "자기 비판이나 후회에 붙잡혀 부름을 듣지 못하고 있습니다. 스스로를 용서하세요.",
            love: "지난 상처에 대한 판단을 내려놓아야 관계가 나아갑니다.",
            career: "결정을 미루며 기회를 흘려보내고 있습니다. 내면의 소리에 응답하세요.",
            health: "필요한 검진이나 결단을 회피하지 마세요. 직면이 회복의 시작입니다.",
        },
        description: "Judgement represents rebirth, awakening, and the reckoning that calls us to rise renewed.",
        description_kr: "심판은 부활, 각성, 그리고 새로워진 모습으로 일어나라 부르는 결산의 순간을 나타냅니다.",
        element: Some("Fire"),
        planet: Some("Pluto"),
        numerology: 20,
        symbolism: &[
            "trumpet (the calling)",
            "rising figures (awakening)",
            "cross banner (balance of forces)",
            "mountains (immovable truth)",
        ],
    },
    CardDef {
        arcana_id: 21,
        name: "The World",
        name_kr: "세계",
        keywords: &["completion", "integration", "accomplishment", "wholeness"],
        keywords_kr: &["완성", "통합", "성취", "온전함"],
        upright: AspectDef {
            general: "긴 여정이 완성에 이르렀습니다. 성취를 축하하고 다음 순환을 준비하세요.",
            love: "관계가 온전한 결실을 맺습니다. 함께 이룬 것을 충분히 기뻐하세요.",
            career: "프로젝트가 성공적으로 마무리됩니다. 세계가 무대가 될 수 있는 시기입니다.",
            health: "몸과 마음이 조화로운 온전함에 도달합니다. 좋은 상태를 유지하세요.",
        },
        reversed: AspectDef {
            general: "마지막 한 조각이 빠져 완성이 미뤄지고 있습니다. 매듭을 지으세요.",
            love: "관계의 다음 단계로 넘어가지 못하고 있습니다. 남은 과제를 함께 정리하세요.",
            career: "마무리 단계에서 지연이 생깁니다. 끝까지 집중력을 유지하세요.",
            health: "회복의 마지막 고비입니다. 다 왔으니 관리를 늦추지 마세요.",
        },
        description: "The World represents completion, integration, and the wholeness at the end of a long journey.",
        description_kr: "세계는 완성, 통합, 그리고 긴 여정의 끝에서 만나는 온전함을 나타냅니다.",
        element: Some("Earth"),
        planet: Some("Saturn"),
        numerology: 21,
        symbolism: &[
            "laurel wreath (victory)",
            "dancing figure (joyful completion)",
            "four creatures (harmony of elements)",
            "two wands (mastery held lightly)",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn deck_has_22_cards() {
        let deck = standard_deck();
        assert_eq!(deck.len(), DECK_SIZE);
    }

    #[test]
    fn arcana_ids_are_unique_and_ordered() {
        let deck = standard_deck();
        let ids: Vec<u8> = deck.iter().map(|c| c.arcana_id).collect();
        let unique: HashSet<u8> = ids.iter().copied().collect();
        assert_eq!(unique.len(), DECK_SIZE);
        for (position, card) in deck.iter().enumerate() {
            assert_eq!(card.arcana_id as usize, position);
        }
    }

    #[test]
    fn every_card_has_complete_aspects() {
        for card in standard_deck() {
            for aspects in [&card.upright, &card.reversed] {
                assert!(!aspects.general.is_empty(), "{}", card.name);
                assert!(!aspects.love.is_empty(), "{}", card.name);
                assert!(!aspects.career.is_empty(), "{}", card.name);
                assert!(!aspects.health.is_empty(), "{}", card.name);
            }
        }
    }

    #[test]
    fn every_card_has_names_and_keywords() {
        for card in standard_deck() {
            assert!(!card.name.is_empty());
            assert!(!card.name_kr.is_empty());
            assert!(!card.keywords.is_empty(), "{}", card.name);
            assert!(!card.keywords_kr.is_empty(), "{}", card.name);
            assert!(!card.symbolism.is_empty(), "{}", card.name);
        }
    }

    #[test]
    fn numerology_matches_arcana_id() {
        for card in standard_deck() {
            assert_eq!(card.numerology, card.arcana_id);
        }
    }

    #[test]
    fn fool_matches_seed_data() {
        let deck = standard_deck();
        let fool = &deck[0];
        assert_eq!(fool.name, "The Fool");
        assert_eq!(fool.name_kr, "광대");
        assert_eq!(fool.element.as_deref(), Some("Air"));
        assert_eq!(fool.planet.as_deref(), Some("Uranus"));
        assert!(fool.upright.general.contains("새로운 여행의 시작"));
    }

    #[test]
    fn search_finds_cards_by_korean_name() {
        let deck = standard_deck();
        let hits: Vec<_> = deck.iter().filter(|c| c.matches("달")).collect();
        assert!(hits.iter().any(|c| c.name == "The Moon"));
    }
}
