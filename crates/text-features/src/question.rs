//! Rule-based question type classification
//!
//! Questions are labelled by an ordered table of English pattern rules. The
//! first rule that matches decides the label, so the order of [`RULES`] is
//! part of the behavior: "who is there when it rains?" is `WHO`, not `WHEN`.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Expected answer type of a question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestionType {
    #[serde(rename = "YES/NO")]
    YesNo,
    #[serde(rename = "WHAT")]
    What,
    #[serde(rename = "WHEN")]
    When,
    #[serde(rename = "WHO")]
    Who,
    #[serde(rename = "WHY")]
    Why,
    #[serde(rename = "WHERE")]
    Where,
    #[serde(rename = "HOW")]
    How,
    #[serde(rename = "NUMBER")]
    Number,
    #[serde(rename = "OTHER")]
    Other,
}

impl QuestionType {
    pub const ALL: [QuestionType; 9] = [
        QuestionType::YesNo,
        QuestionType::What,
        QuestionType::When,
        QuestionType::Who,
        QuestionType::Why,
        QuestionType::Where,
        QuestionType::How,
        QuestionType::Number,
        QuestionType::Other,
    ];

    /// Label as written in feature tables
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::YesNo => "YES/NO",
            QuestionType::What => "WHAT",
            QuestionType::When => "WHEN",
            QuestionType::Who => "WHO",
            QuestionType::Why => "WHY",
            QuestionType::Where => "WHERE",
            QuestionType::How => "HOW",
            QuestionType::Number => "NUMBER",
            QuestionType::Other => "OTHER",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a rule decides whether it applies
enum Trigger {
    /// Case-insensitive regex search
    Pattern(Regex),
    /// Case-sensitive substring search over any of the phrases
    Phrase(&'static [&'static str]),
}

impl Trigger {
    fn fires(&self, text: &str) -> bool {
        match self {
            Trigger::Pattern(re) => re.is_match(text),
            Trigger::Phrase(phrases) => phrases.iter().any(|p| text.contains(p)),
        }
    }
}

/// Label chosen once a rule fires
enum Outcome {
    Label(QuestionType),
    /// Branch on the word captured by group 1 of `capture`; compared exactly.
    NextWord {
        capture: Regex,
        words: &'static [&'static str],
        hit: QuestionType,
        miss: QuestionType,
    },
}

impl Outcome {
    fn resolve(&self, text: &str) -> QuestionType {
        match self {
            Outcome::Label(label) => *label,
            Outcome::NextWord {
                capture,
                words,
                hit,
                miss,
            } => {
                let next = capture
                    .captures(text)
                    .and_then(|c| c.get(1))
                    .map(|m| m.as_str());
                match next {
                    Some(word) if words.contains(&word) => *hit,
                    _ => *miss,
                }
            }
        }
    }
}

struct Rule {
    trigger: Trigger,
    outcome: Outcome,
}

fn pattern(re: &str) -> Regex {
    Regex::new(re).expect("question rule pattern is valid")
}

fn rule(trigger: Trigger, outcome: Outcome) -> Rule {
    Rule { trigger, outcome }
}

static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    use QuestionType::*;

    vec![
        // Auxiliary or modal verb opening the question
        rule(
            Trigger::Pattern(pattern(
                r"(?i)\A(?:can|could|will|would|have|has|do|does|did|is|are|was|may|might)",
            )),
            Outcome::Label(YesNo),
        ),
        rule(
            Trigger::Pattern(pattern(r"(?i)\A(?:what|which)\s+\w+")),
            Outcome::NextWord {
                capture: pattern(r"(?i)\A(?:what|which)\s+(\w+)"),
                words: &["year", "month", "date", "day"],
                hit: When,
                miss: What,
            },
        ),
        rule(Trigger::Pattern(pattern(r"(?i)\bwho\s")), Outcome::Label(Who)),
        rule(Trigger::Pattern(pattern(r"(?i)\bwhy\s")), Outcome::Label(Why)),
        rule(Trigger::Pattern(pattern(r"(?i)\bwhere\s")), Outcome::Label(Where)),
        rule(
            Trigger::Pattern(pattern(r"(?i)\bhow\s")),
            Outcome::NextWord {
                capture: pattern(r"(?i)\bhow\s(\w+)"),
                words: &["many", "much", "long"],
                hit: Number,
                miss: How,
            },
        ),
        rule(Trigger::Pattern(pattern(r"(?i)\bwhen\s")), Outcome::Label(When)),
        rule(
            Trigger::Phrase(&["in what year", "in which year"]),
            Outcome::Label(When),
        ),
        rule(Trigger::Pattern(pattern(r"(?i)\bto\swhom\s")), Outcome::Label(Who)),
    ]
});

/// Classify a question by its expected answer type.
///
/// Pure and total: every input gets a label, `OTHER` when no rule fires.
pub fn classify_question_type(text: &str) -> QuestionType {
    RULES
        .iter()
        .find(|r| r.trigger.fires(text))
        .map(|r| r.outcome.resolve(text))
        .unwrap_or(QuestionType::Other)
}
