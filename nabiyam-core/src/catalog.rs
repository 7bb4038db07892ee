//! Static menu content.
//!
//! One table maps every [`Category`] to its header sentence and the ordered
//! list of items the bot prints for it. The table is a `match` over the
//! closed enum, so adding a category without content does not compile.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Topic bucket the responder can answer with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Today,
    Healthy,
    Lunchbox,
    Allergy,
}

impl Category {
    /// All categories in declaration order.
    pub const ALL: [Category; 4] = [
        Category::Today,
        Category::Healthy,
        Category::Lunchbox,
        Category::Allergy,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Today => "today",
            Category::Healthy => "healthy",
            Category::Lunchbox => "lunchbox",
            Category::Allergy => "allergy",
        }
    }

    /// Header plus items for this category.
    pub fn content(self) -> &'static CategoryContent {
        match self {
            Category::Today => &TODAY,
            Category::Healthy => &HEALTHY,
            Category::Lunchbox => &LUNCHBOX,
            Category::Allergy => &ALLERGY,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// A single recommendation line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub name: &'static str,
    pub description: &'static str,
    pub emoji: &'static str,
}

/// Everything the bot says for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryContent {
    pub header: &'static str,
    pub items: &'static [MenuItem],
}

// ════════════════════════════════════════════════════════════════════
// Content tables
// ════════════════════════════════════════════════════════════════════

static TODAY: CategoryContent = CategoryContent {
    header: "오늘의 추천 급식 메뉴예요! 영양사 선생님이 특별히 준비하신 메뉴들이에요!",
    items: &[
        MenuItem {
            name: "비빔밥",
            description: "색깔 야채가 가득한 영양 만점 급식!",
            emoji: "🍚",
        },
        MenuItem {
            name: "된장찌개",
            description: "따뜻하고 건강한 한식 메뉴!",
            emoji: "🍲",
        },
        MenuItem {
            name: "잡채",
            description: "쫄깃한 당면과 야채의 조화!",
            emoji: "🍜",
        },
    ],
};

static HEALTHY: CategoryContent = CategoryContent {
    header: "건강한 급식 메뉴를 추천해드릴게요! 성장기 어린이에게 꼭 필요한 영양소가 가득해요!",
    items: &[
        MenuItem {
            name: "현미밥",
            description: "식이섬유가 풍부한 건강한 주식!",
            emoji: "🍚",
        },
        MenuItem {
            name: "생선구이",
            description: "단백질과 오메가3가 풍부!",
            emoji: "🐟",
        },
        MenuItem {
            name: "나물반찬",
            description: "각종 비타민이 가득한 나물들!",
            emoji: "🥬",
        },
    ],
};

static LUNCHBOX: CategoryContent = CategoryContent {
    header: "맛있는 도시락 메뉴를 준비했어요! 한 끼 식사로 완벽한 구성이에요!",
    items: &[
        MenuItem {
            name: "김밥 도시락",
            description: "한 끼 식사로 완벽한 김밥!",
            emoji: "🍙",
        },
        MenuItem {
            name: "치킨 도시락",
            description: "아이들이 좋아하는 치킨!",
            emoji: "🍗",
        },
        MenuItem {
            name: "불고기 도시락",
            description: "달콤한 불고기와 밥!",
            emoji: "🥩",
        },
    ],
};

static ALLERGY: CategoryContent = CategoryContent {
    header: "알레르기 관련 안내해드릴게요! 안전한 급식을 위해 꼭 확인하세요!",
    items: &[
        MenuItem {
            name: "알레르기 표시",
            description: "견과류, 우유, 계란 등 주의 표시를 확인하세요!",
            emoji: "⚠️",
        },
        MenuItem {
            name: "대체 메뉴",
            description: "알레르기가 있다면 영양사 선생님께 문의!",
            emoji: "👨‍⚕️",
        },
        MenuItem {
            name: "안전한 급식",
            description: "모든 아이들이 안전하게 먹을 수 있어요!",
            emoji: "✅",
        },
    ],
};
