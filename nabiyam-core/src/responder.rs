//! Keyword classification and reply rendering.
//!
//! [`Responder::classify`] lowercases the input and walks [`RULES`] in order;
//! the first rule with a keyword contained in the text picks the category,
//! and text matching nothing gets [`FALLBACK`]. [`Responder::render`] turns a
//! category into the bot's reply: the header, a blank line, then each item as
//! an emoji and name line followed by its description.

use crate::catalog::Category;

/// One keyword rule: any keyword found in the lowercased input selects
/// `category`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordRule {
    pub keywords: &'static [&'static str],
    pub category: Category,
}

impl KeywordRule {
    pub fn matches(&self, normalized: &str) -> bool {
        self.keywords.iter().any(|k| normalized.contains(k))
    }
}

/// Rules in priority order. The first rule that matches wins.
pub const RULES: [KeywordRule; 4] = [
    KeywordRule {
        keywords: &["오늘", "추천"],
        category: Category::Today,
    },
    KeywordRule {
        keywords: &["건강", "영양"],
        category: Category::Healthy,
    },
    KeywordRule {
        keywords: &["도시락"],
        category: Category::Lunchbox,
    },
    KeywordRule {
        keywords: &["알레르기", "주의"],
        category: Category::Allergy,
    },
];

/// Category used when no rule matches.
pub const FALLBACK: Category = Category::Today;

/// Stateless keyword responder.
pub struct Responder;

impl Responder {
    /// Pick the category for a message.
    ///
    /// Case-insensitive substring match against [`RULES`] in order; falls
    /// back to [`FALLBACK`]. An input holding keywords from several rules
    /// resolves to the earliest rule (e.g. "오늘" beats "알레르기").
    pub fn classify(input: &str) -> Category {
        let normalized = input.to_lowercase();
        RULES
            .iter()
            .find(|rule| rule.matches(&normalized))
            .map(|rule| rule.category)
            .unwrap_or(FALLBACK)
    }

    /// Header, a blank line, then one `"{emoji} {name}\n{description}"`
    /// block per item separated by blank lines. No trailing whitespace.
    pub fn render(category: Category) -> String {
        let content = category.content();

        let mut response = format!("{}\n\n", content.header);
        for item in content.items {
            response.push_str(&format!(
                "{} {}\n{}\n\n",
                item.emoji, item.name, item.description
            ));
        }

        response.trim_end().to_string()
    }

    /// Bot text for a user message.
    pub fn respond(input: &str) -> String {
        Self::render(Self::classify(input))
    }
}
