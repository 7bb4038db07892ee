//! Opening message for a new chat session.

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

/// The line the overlay has always opened with.
pub const OPENING_LINE: &str = "안녕하세요! 나비에요!\n오늘 메뉴 고민이세요?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GreetingStyle {
    #[default]
    Classic,
    TimeOfDay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimePeriod {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimePeriod {
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=11 => TimePeriod::Morning,
            12..=16 => TimePeriod::Afternoon,
            17..=21 => TimePeriod::Evening,
            _ => TimePeriod::Night,
        }
    }

    pub fn salutation(self) -> &'static str {
        match self {
            TimePeriod::Morning => "🌅 좋은 아침이에요! 오늘도 맛있는 하루 시작해볼까요?",
            TimePeriod::Afternoon => "☀️ 따뜻한 오후네요! 점심은 드셨나요?",
            TimePeriod::Evening => "🌆 하루 마무리 시간이네요! 저녁식사 준비해볼까요?",
            TimePeriod::Night => "🌙 늦은 시간이네요! 간단한 야식은 어떠세요?",
        }
    }
}

/// Holiday line for fixed-date days, if any.
pub fn special_day(month: u32, day: u32) -> Option<&'static str> {
    match (month, day) {
        (1, 1) => Some("🎊 새해 복 많이 받으세요!"),
        (2, 14) => Some("💝 발렌타인데이! 달콤한 하루!"),
        (3, 14) => Some("🤍 화이트데이! 특별한 하루!"),
        (5, 5) => Some("🎈 어린이날! 맛있는 것 많이 드세요!"),
        (12, 25) => Some("🎄 메리 크리스마스!"),
        _ => None,
    }
}

fn weekday_ko(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "월",
        Weekday::Tue => "화",
        Weekday::Wed => "수",
        Weekday::Thu => "목",
        Weekday::Fri => "금",
        Weekday::Sat => "토",
        Weekday::Sun => "일",
    }
}

/// Build the greeting for `style` at local time `now`.
pub fn compose(style: GreetingStyle, now: NaiveDateTime) -> String {
    match style {
        GreetingStyle::Classic => OPENING_LINE.to_string(),
        GreetingStyle::TimeOfDay => {
            let mut parts = vec![format!(
                "📅 {} {}요일, {}",
                now.format("%Y년 %m월 %d일"),
                weekday_ko(now.weekday()),
                now.format("%H시 %M분"),
            )];

            if let Some(line) = special_day(now.month(), now.day()) {
                parts.push(line.to_string());
            }

            parts.push(TimePeriod::from_hour(now.hour()).salutation().to_string());
            parts.push(OPENING_LINE.to_string());
            parts.join("\n")
        }
    }
}
