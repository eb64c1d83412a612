use std::fmt;

use super::templates;
use crate::message::Conversation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    Trending,
    Suppliers,
    Marketing,
    Profit,
    Onboarding,
    Niches,
    Shipping,
    Legal,
    Fallback,
}

impl Intent {
    pub fn as_str(self) -> &'static str {
        match self {
            Intent::Trending => "trending",
            Intent::Suppliers => "suppliers",
            Intent::Marketing => "marketing",
            Intent::Profit => "profit",
            Intent::Onboarding => "onboarding",
            Intent::Niches => "niches",
            Intent::Shipping => "shipping",
            Intent::Legal => "legal",
            Intent::Fallback => "fallback",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keyword set paired with the builder of the reply it selects.
pub struct IntentRule {
    pub intent: Intent,
    pub keywords: &'static [&'static str],
    pub build: fn() -> String,
}

impl IntentRule {
    /// `normalized` must already be lowercased.
    pub fn matches(&self, normalized: &str) -> bool {
        self.keywords.iter().any(|keyword| normalized.contains(keyword))
    }
}

/// Evaluated top to bottom; the first matching rule wins.
pub const RULES: &[IntentRule] = &[
    IntentRule {
        intent: Intent::Trending,
        keywords: &["trend", "hot", "popular"],
        build: templates::trending,
    },
    IntentRule {
        intent: Intent::Suppliers,
        keywords: &["supplier", "vendor", "source"],
        build: templates::suppliers,
    },
    IntentRule {
        intent: Intent::Marketing,
        keywords: &["market", "strategy", "advertis", "promot"],
        build: templates::marketing,
    },
    IntentRule {
        intent: Intent::Profit,
        keywords: &["profit", "margin", "price", "cost"],
        build: templates::profit,
    },
    IntentRule {
        intent: Intent::Onboarding,
        keywords: &["start", "begin", "first", "beginner"],
        build: templates::onboarding,
    },
    IntentRule {
        intent: Intent::Niches,
        keywords: &["niche", "category", "product type"],
        build: templates::niches,
    },
    IntentRule {
        intent: Intent::Shipping,
        keywords: &["ship", "deliver", "fulfill"],
        build: templates::shipping,
    },
    IntentRule {
        intent: Intent::Legal,
        keywords: &["legal", "tax", "license", "business"],
        build: templates::legal,
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub intent: Intent,
    pub text: String,
}

fn matching_rule(msg: &str) -> Option<&'static IntentRule> {
    let msg_lower = msg.to_lowercase();
    RULES.iter().find(|rule| rule.matches(&msg_lower))
}

pub fn detect_intent(msg: &str) -> Intent {
    matching_rule(msg).map_or(Intent::Fallback, |rule| rule.intent)
}

/// Reply template for a given intent.
pub fn reply_for(intent: Intent) -> String {
    RULES
        .iter()
        .find(|rule| rule.intent == intent)
        .map_or_else(templates::fallback, |rule| (rule.build)())
}

/// Classifies the latest message of the conversation and builds its reply.
/// Earlier messages never influence the result.
pub fn classify_and_respond(conversation: &Conversation) -> Reply {
    match matching_rule(&conversation.latest().content) {
        Some(rule) => Reply {
            intent: rule.intent,
            text: (rule.build)(),
        },
        None => Reply {
            intent: Intent::Fallback,
            text: templates::fallback(),
        },
    }
}

pub fn generate_reply(conversation: &Conversation) -> String {
    classify_and_respond(conversation).text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_intent_but_fallback_has_one_rule() {
        for rule in RULES {
            assert_eq!(RULES.iter().filter(|r| r.intent == rule.intent).count(), 1);
            assert_ne!(rule.intent, Intent::Fallback);
        }
        assert_eq!(RULES.len(), 8);
    }

    #[test]
    fn keywords_are_lowercase() {
        for rule in RULES {
            for keyword in rule.keywords {
                assert_eq!(*keyword, keyword.to_lowercase());
            }
        }
    }
}
