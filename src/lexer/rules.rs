use super::tokens::TokenType;

/// What to emit for the text a rule consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// One token spanning the whole match.
    Token(TokenType),
    /// One token per capture group, `kinds[i]` for group `i + 1`.
    ByGroups(Vec<TokenType>),
}

/// State change applied after a rule has emitted its tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextState {
    Push(String),
    Pop,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleDef {
    pub pattern: String,
    pub action: Action,
    pub next: Option<NextState>,
}

impl RuleDef {
    pub fn new(pattern: impl Into<String>, action: Action) -> Self {
        RuleDef {
            pattern: pattern.into(),
            action,
            next: None,
        }
    }

    pub fn then(mut self, next: NextState) -> Self {
        self.next = Some(next);
        self
    }
}

/// An entry in a state's rule list. `Include` splices the rules of another
/// state in place when the lexer is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Rule(RuleDef),
    Include(String),
}

pub fn include(state: &str) -> Entry {
    Entry::Include(state.to_string())
}

/// A state name paired with its ordered entries.
pub type StateDef = (String, Vec<Entry>);

/// Builds `prefix(?:w1|w2|...)suffix` out of literal words.
///
/// Alternation is leftmost-first, so a word that is a prefix of another one
/// would shadow it (`polars` would win over `polars group-by`). Words are
/// therefore deduplicated and ordered longest first; words of equal length
/// keep their given order.
pub fn words<S: AsRef<str>>(words: &[S], prefix: &str, suffix: &str) -> String {
    let mut unique: Vec<&str> = vec![];

    for word in words {
        let word = word.as_ref();
        if !word.is_empty() && !unique.contains(&word) {
            unique.push(word);
        }
    }

    unique.sort_by(|a, b| b.len().cmp(&a.len()));

    let alternatives = unique
        .iter()
        .map(|word| regex::escape(word))
        .collect::<Vec<String>>()
        .join("|");

    format!("{}(?:{}){}", prefix, alternatives, suffix)
}
