//! Word lists backing the analyzer
//!
//! Contains:
//! - Opinion lexicon (positive / negative words)
//! - English negation termset (triggers and scope terminators)
//! - Person gazetteer (honorifics, common given names)

use crate::config::AnalyzerConfig;
use std::collections::HashSet;

const POSITIVE_WORDS: &[&str] = &[
    "amazing", "awesome", "beautiful", "best", "better", "brilliant", "calm",
    "charming", "clean", "clever", "comfortable", "cool", "delight", "delighted",
    "delightful", "easy", "effective", "elegant", "enjoy", "enjoyed", "enjoyable",
    "excellent", "exciting", "fabulous", "fantastic", "fast", "favorite",
    "fine", "fun", "funny", "gentle", "glad", "good", "gorgeous", "grateful",
    "great", "happy", "helpful", "honest", "impressive", "incredible", "kind",
    "liked", "love", "loved", "lovely", "loves", "lucky", "marvelous",
    "masterpiece", "nice", "outstanding", "perfect", "pleasant", "pleased",
    "positive", "powerful", "proud", "recommend", "reliable",
    "remarkable", "safe", "satisfied", "smart", "smooth", "solid",
    "stunning", "success", "successful", "superb", "support", "terrific",
    "thank", "thanks", "thrilled", "useful", "valuable", "win", "wonderful",
    "worth", "worthy",
];

const NEGATIVE_WORDS: &[&str] = &[
    "abysmal", "angry", "annoyed", "annoying", "anxious", "awful", "bad",
    "boring", "broken", "careless", "cheap", "confused", "confusing", "crap",
    "cruel", "damage", "damaged", "dead", "defective", "depressing",
    "difficult", "dirty", "disappointed", "disappointing", "disaster",
    "disgusting", "dislike", "dreadful", "dull", "fail", "failed", "failure",
    "fake", "fault", "faulty", "fear", "harm", "hate", "hated",
    "hates", "horrible", "hurt", "lame", "lose", "loss", "mediocre",
    "mess", "miserable", "mistake", "negative", "noisy", "pain", "painful",
    "pathetic", "poor", "problem", "rude", "sad", "scary", "slow", "stupid",
    "terrible", "tired", "ugly", "unfair", "unhappy", "upset", "useless",
    "waste", "weak", "worse", "worst", "worthless", "wrong",
];

const NEGATION_TRIGGERS: &[&str] = &[
    "not", "n't", "n’t", "no", "never", "without", "nobody", "nothing", "none",
    "neither", "nor", "nowhere", "cannot", "hardly", "barely", "scarcely",
    "lack", "lacks", "lacking", "absent", "absence", "denies", "denied",
    "declined",
];

const SCOPE_TERMINATORS: &[&str] = &[
    "but", "however", "although", "though", "except", "yet", "nevertheless",
    "whereas", "which", "who", "because", "since",
];

const HONORIFICS: &[&str] = &[
    "mr", "mrs", "ms", "miss", "mx", "dr", "prof", "professor", "sir", "madam",
    "dame", "lady", "lord", "rev", "reverend", "captain", "president",
    "senator", "judge", "uncle", "aunt",
];

const GIVEN_NAMES: &[&str] = &[
    "adam", "alice", "amy", "andrew", "anna", "barack", "ben", "bob", "brian",
    "carol", "charles", "chris", "daniel", "david", "elizabeth", "emily",
    "emma", "eric", "george", "grace", "hannah", "harry", "helen", "jack",
    "james", "jane", "jennifer", "jessica", "john", "joseph", "julia",
    "karen", "kate", "laura", "linda", "lisa", "maria", "mark", "mary",
    "matthew", "michael", "nancy", "oliver", "patricia", "paul", "peter",
    "rachel", "richard", "robert", "sam", "sarah", "steve", "susan", "thomas",
    "tom", "victoria", "william",
];

// Capitalized only because they open a sentence; never the start of an entity.
const SENTENCE_OPENERS: &[&str] = &[
    "a", "an", "the", "i", "it", "he", "she", "we", "they", "you", "this",
    "that", "these", "those", "my", "our", "his", "her", "their", "your",
    "what", "which", "who", "whom", "why", "where", "when", "how", "is", "are",
    "was", "were", "do", "does", "did", "can", "could", "will", "would",
    "should", "may", "might", "have", "has", "had", "in", "on", "at", "to",
    "for", "from", "of", "and", "or", "but", "if", "not", "no", "never",
    "there", "here", "yes",
];

fn word_set(base: &[&str], extra: &[String]) -> HashSet<String> {
    base.iter()
        .map(|w| w.to_string())
        .chain(extra.iter().map(|w| w.to_lowercase()))
        .collect()
}

/// Lookup tables used by the lexicon analyzer
#[derive(Debug, Clone)]
pub struct Lexicon {
    positive: HashSet<String>,
    negative: HashSet<String>,
    negations: HashSet<String>,
    terminators: HashSet<String>,
    honorifics: HashSet<String>,
    given_names: HashSet<String>,
    openers: HashSet<String>,
}

impl Lexicon {
    /// Build the built-in lexicon extended with the configured words
    pub fn new(config: &AnalyzerConfig) -> Self {
        Self {
            positive: word_set(POSITIVE_WORDS, &config.extra_positive_words),
            negative: word_set(NEGATIVE_WORDS, &config.extra_negative_words),
            negations: word_set(NEGATION_TRIGGERS, &[]),
            terminators: word_set(SCOPE_TERMINATORS, &[]),
            honorifics: word_set(HONORIFICS, &[]),
            given_names: word_set(GIVEN_NAMES, &config.extra_given_names),
            openers: word_set(SENTENCE_OPENERS, &[]),
        }
    }

    pub fn is_positive(&self, word: &str) -> bool {
        self.positive.contains(word)
    }

    pub fn is_negative(&self, word: &str) -> bool {
        self.negative.contains(word)
    }

    pub fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(word)
    }

    pub fn is_scope_terminator(&self, word: &str) -> bool {
        self.terminators.contains(word)
    }

    pub fn is_honorific(&self, word: &str) -> bool {
        self.honorifics.contains(word)
    }

    pub fn is_given_name(&self, word: &str) -> bool {
        self.given_names.contains(word)
    }

    pub fn is_sentence_opener(&self, word: &str) -> bool {
        self.openers.contains(word)
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new(&AnalyzerConfig::default())
    }
}
