use chrono::NaiveDate;
use nabiyam_core::catalog::{Category, UnknownCategory};
use nabiyam_core::config::ChatConfig;
use nabiyam_core::greeting::{self, GreetingStyle, TimePeriod, OPENING_LINE};
use nabiyam_core::input::{Builtin, InputKind, InputParser, DEFAULT_HISTORY};
use nabiyam_core::message::{MessageId, Sender, Transcript};
use nabiyam_core::responder::{Responder, FALLBACK, RULES};
use nabiyam_core::{ChatError, ConfigError};

use std::io::Write;
use std::path::Path;

// ============================================================================
// Responder::classify Tests
// ============================================================================

#[test]
fn test_classify_today() {
    assert_eq!(Responder::classify("오늘 뭐 먹지"), Category::Today);
}

#[test]
fn test_classify_recommend_beats_health() {
    // "추천" belongs to the first rule, "건강" to the second
    assert_eq!(Responder::classify("건강한 메뉴 추천해줘"), Category::Today);
}

#[test]
fn test_classify_healthy() {
    assert_eq!(Responder::classify("건강한 메뉴 있어?"), Category::Healthy);
    assert_eq!(Responder::classify("영양소가 궁금해"), Category::Healthy);
}

#[test]
fn test_classify_lunchbox() {
    assert_eq!(Responder::classify("도시락 메뉴 뭐있어"), Category::Lunchbox);
}

#[test]
fn test_classify_allergy() {
    assert_eq!(Responder::classify("알레르기 주의사항 알려줘"), Category::Allergy);
    assert_eq!(Responder::classify("주의할 점은?"), Category::Allergy);
}

#[test]
fn test_classify_fallback() {
    assert_eq!(Responder::classify("아무말"), Category::Today);
    assert_eq!(FALLBACK, Category::Today);
}

#[test]
fn test_classify_today_beats_allergy() {
    assert_eq!(Responder::classify("오늘 알레르기 메뉴"), Category::Today);
}

#[test]
fn test_classify_health_beats_lunchbox() {
    assert_eq!(Responder::classify("건강 도시락"), Category::Healthy);
}

#[test]
fn test_classify_lunchbox_beats_allergy() {
    assert_eq!(Responder::classify("도시락 알레르기"), Category::Lunchbox);
}

#[test]
fn test_classify_keyword_inside_longer_word() {
    assert_eq!(Responder::classify("도시락통"), Category::Lunchbox);
}

#[test]
fn test_classify_ignores_ascii_case() {
    // Latin text has no keywords; case folding must not break the fallback.
    assert_eq!(Responder::classify("LUNCH 도시락 PLEASE"), Category::Lunchbox);
    assert_eq!(Responder::classify("HELLO"), Category::Today);
}

#[test]
fn test_classify_idempotent() {
    let input = "알레르기 있어요";
    assert_eq!(Responder::classify(input), Responder::classify(input));
}

#[test]
fn test_rules_order() {
    let order: Vec<Category> = RULES.iter().map(|r| r.category).collect();
    assert_eq!(
        order,
        vec![
            Category::Today,
            Category::Healthy,
            Category::Lunchbox,
            Category::Allergy
        ]
    );
    assert_eq!(RULES[0].keywords, &["오늘", "추천"]);
    assert_eq!(RULES[3].keywords, &["알레르기", "주의"]);
}

#[test]
fn test_every_rule_keyword_selects_its_category() {
    for rule in RULES.iter() {
        for keyword in rule.keywords {
            assert_eq!(Responder::classify(keyword), rule.category, "{}", keyword);
        }
    }
}

// ============================================================================
// Responder::render Tests
// ============================================================================

#[test]
fn test_render_today_exact() {
    let expected = "오늘의 추천 급식 메뉴예요! 영양사 선생님이 특별히 준비하신 메뉴들이에요!\n\n\
                    🍚 비빔밥\n색깔 야채가 가득한 영양 만점 급식!\n\n\
                    🍲 된장찌개\n따뜻하고 건강한 한식 메뉴!\n\n\
                    🍜 잡채\n쫄깃한 당면과 야채의 조화!";
    assert_eq!(Responder::render(Category::Today), expected);
}

#[test]
fn test_render_starts_with_header() {
    for category in Category::ALL {
        let text = Responder::render(category);
        let header = category.content().header;
        assert!(text.starts_with(header));
        assert!(text[header.len()..].starts_with("\n\n"));
    }
}

#[test]
fn test_render_items_in_order() {
    for category in Category::ALL {
        let text = Responder::render(category);
        let mut cursor = 0;
        for item in category.content().items {
            let entry = format!("{} {}\n{}", item.emoji, item.name, item.description);
            let found = text[cursor..]
                .find(&entry)
                .unwrap_or_else(|| panic!("{} missing from {}", item.name, category));
            cursor += found + entry.len();
        }
        assert_eq!(cursor, text.len(), "nothing after the last item");
    }
}

#[test]
fn test_render_trimmed() {
    for category in Category::ALL {
        let text = Responder::render(category);
        assert_eq!(text, text.trim());
        assert!(!text.ends_with('\n'));
    }
}

#[test]
fn test_render_idempotent() {
    assert_eq!(
        Responder::render(Category::Allergy),
        Responder::render(Category::Allergy)
    );
}

#[test]
fn test_respond_combines_classify_and_render() {
    assert_eq!(
        Responder::respond("도시락 메뉴 뭐있어"),
        Responder::render(Category::Lunchbox)
    );
}

// ============================================================================
// Catalog Tests
// ============================================================================

#[test]
fn test_every_category_has_content() {
    for category in Category::ALL {
        let content = category.content();
        assert!(!content.header.is_empty());
        assert_eq!(content.items.len(), 3);
    }
}

#[test]
fn test_category_names_round_trip() {
    for category in Category::ALL {
        assert_eq!(category.to_string().parse::<Category>(), Ok(category));
    }
    assert_eq!(" Lunchbox ".parse::<Category>(), Ok(Category::Lunchbox));
}

#[test]
fn test_category_parse_unknown() {
    assert_eq!(
        "dessert".parse::<Category>(),
        Err(UnknownCategory("dessert".to_string()))
    );
}

#[test]
fn test_category_serde_name() {
    let json = serde_json::to_string(&Category::Healthy).unwrap();
    assert_eq!(json, "\"healthy\"");
}

// ============================================================================
// Transcript Tests
// ============================================================================

#[test]
fn test_transcript_ids_increase() {
    let mut t = Transcript::new();
    let a = t.push(Sender::Bot, "hi", None);
    let b = t.push(Sender::User, "오늘", None);
    let c = t.push(Sender::Bot, "menu", Some(b.id));
    assert_eq!(a.id, MessageId(1));
    assert!(a.id < b.id && b.id < c.id);
    assert_eq!(c.in_reply_to, Some(b.id));
    assert_eq!(t.len(), 3);
}

#[test]
fn test_transcript_clear_keeps_counting() {
    let mut t = Transcript::new();
    t.push(Sender::User, "one", None);
    t.push(Sender::User, "two", None);
    t.clear();
    assert!(t.is_empty());
    let next = t.push(Sender::User, "three", None);
    assert_eq!(next.id, MessageId(3));
}

#[test]
fn test_transcript_recent() {
    let mut t = Transcript::new();
    for i in 0..5 {
        t.push(Sender::User, format!("m{}", i), None);
    }
    let recent: Vec<&str> = t.recent(2).iter().map(|m| m.text.as_str()).collect();
    assert_eq!(recent, vec!["m3", "m4"]);
    assert_eq!(t.recent(100).len(), 5);
    assert_eq!(t.last().map(|m| m.text.as_str()), Some("m4"));
}

#[test]
fn test_message_serialization_skips_missing_reply() {
    let mut t = Transcript::new();
    let msg = t.push(Sender::User, "hello", None);
    let json = serde_json::to_string(&msg).unwrap();
    assert!(json.contains("\"sender\":\"user\""));
    assert!(!json.contains("in_reply_to"));
}

// ============================================================================
// InputParser Tests
// ============================================================================

#[test]
fn test_parse_empty() {
    assert_eq!(InputParser::parse(""), InputKind::Empty);
    assert_eq!(InputParser::parse("   \t\n"), InputKind::Empty);
}

#[test]
fn test_parse_chat_keeps_original_text() {
    assert_eq!(
        InputParser::parse(" 오늘 뭐 먹지 "),
        InputKind::Chat(" 오늘 뭐 먹지 ".to_string())
    );
}

#[test]
fn test_parse_builtins() {
    assert_eq!(InputParser::parse("!help"), InputKind::Builtin(Builtin::Help));
    assert_eq!(InputParser::parse("!topics"), InputKind::Builtin(Builtin::Topics));
    assert_eq!(InputParser::parse("!clear"), InputKind::Builtin(Builtin::Clear));
    assert_eq!(InputParser::parse("!cls"), InputKind::Builtin(Builtin::Clear));
    assert_eq!(InputParser::parse("!exit"), InputKind::Builtin(Builtin::Exit));
    assert_eq!(InputParser::parse("!QUIT"), InputKind::Builtin(Builtin::Exit));
}

#[test]
fn test_parse_history_limit() {
    assert_eq!(
        InputParser::parse("!history"),
        InputKind::Builtin(Builtin::History(DEFAULT_HISTORY))
    );
    assert_eq!(
        InputParser::parse("!history 3"),
        InputKind::Builtin(Builtin::History(3))
    );
    assert_eq!(
        InputParser::parse("!history lots"),
        InputKind::Builtin(Builtin::History(DEFAULT_HISTORY))
    );
}

#[test]
fn test_parse_unknown_builtin() {
    assert_eq!(
        InputParser::parse("!dance now"),
        InputKind::Builtin(Builtin::Unknown("dance".to_string()))
    );
}

#[test]
fn test_parse_bare_bang_is_chat() {
    assert_eq!(InputParser::parse("!"), InputKind::Chat("!".to_string()));
}

// ============================================================================
// Greeting Tests
// ============================================================================

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

#[test]
fn test_classic_greeting() {
    let text = greeting::compose(GreetingStyle::Classic, at(2026, 10, 16, 9, 0));
    assert_eq!(text, "안녕하세요! 나비에요!\n오늘 메뉴 고민이세요?");
}

#[test]
fn test_time_period_boundaries() {
    assert_eq!(TimePeriod::from_hour(4), TimePeriod::Night);
    assert_eq!(TimePeriod::from_hour(5), TimePeriod::Morning);
    assert_eq!(TimePeriod::from_hour(11), TimePeriod::Morning);
    assert_eq!(TimePeriod::from_hour(12), TimePeriod::Afternoon);
    assert_eq!(TimePeriod::from_hour(16), TimePeriod::Afternoon);
    assert_eq!(TimePeriod::from_hour(17), TimePeriod::Evening);
    assert_eq!(TimePeriod::from_hour(21), TimePeriod::Evening);
    assert_eq!(TimePeriod::from_hour(22), TimePeriod::Night);
    assert_eq!(TimePeriod::from_hour(0), TimePeriod::Night);
}

#[test]
fn test_time_of_day_greeting() {
    // 2026-10-16 is a Friday
    let text = greeting::compose(GreetingStyle::TimeOfDay, at(2026, 10, 16, 12, 5));
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "📅 2026년 10월 16일 금요일, 12시 05분");
    assert_eq!(lines[1], TimePeriod::Afternoon.salutation());
    assert!(text.ends_with(OPENING_LINE));
}

#[test]
fn test_time_of_day_special_day() {
    let text = greeting::compose(GreetingStyle::TimeOfDay, at(2026, 5, 5, 8, 0));
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[1], "🎈 어린이날! 맛있는 것 많이 드세요!");
    assert_eq!(lines[2], TimePeriod::Morning.salutation());
}

#[test]
fn test_special_day_lookup() {
    assert!(greeting::special_day(12, 25).is_some());
    assert!(greeting::special_day(1, 1).is_some());
    assert!(greeting::special_day(7, 4).is_none());
}

// ============================================================================
// Config Tests
// ============================================================================

#[test]
fn test_config_defaults() {
    let config = ChatConfig::default();
    assert_eq!(config.reply_delay_ms, 1000);
    assert_eq!(config.greeting, GreetingStyle::Classic);
    assert_eq!(config.bot_name, "YUM:AI");
    assert_eq!(config.reply_delay().as_millis(), 1000);
}

#[test]
fn test_config_partial_json_uses_defaults() {
    let config =
        ChatConfig::from_json(Path::new("inline"), r#"{"greeting": "time_of_day"}"#).unwrap();
    assert_eq!(config.greeting, GreetingStyle::TimeOfDay);
    assert_eq!(config.reply_delay_ms, 1000);
}

#[test]
fn test_config_invalid_json() {
    let err = ChatConfig::from_json(Path::new("bad.json"), "{ nope").unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("bad.json"));
}

#[test]
fn test_config_load_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"reply_delay_ms": 0, "bot_name": "나비"}}"#).unwrap();

    let config = ChatConfig::load(file.path()).unwrap();
    assert_eq!(config.reply_delay_ms, 0);
    assert_eq!(config.bot_name, "나비");
}

#[test]
fn test_config_missing_explicit_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = ChatConfig::load(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn test_config_resolve_reports_bad_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");
    let err = ChatConfig::resolve(Some(path.as_path())).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn test_chat_error_is_only_about_input() {
    assert_eq!(ChatError::EmptyInput.to_string(), "message is empty");
}

#[test]
fn test_config_delay_override() {
    let mut config = ChatConfig::default();
    config.apply_delay_override(" 250 ");
    assert_eq!(config.reply_delay_ms, 250);
    config.apply_delay_override("soon");
    assert_eq!(config.reply_delay_ms, 250);
}
