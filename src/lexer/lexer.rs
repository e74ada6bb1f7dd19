use std::{
    borrow::Cow,
    collections::{HashMap, VecDeque},
};

use regex_automata::{meta::Regex, util::captures::Captures, util::syntax, Anchored, Input};
use tracing::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl, RuleLocation},
    Span, MK_TOKEN,
};

use super::{
    rules::{Action, Entry, NextState, RuleDef, StateDef},
    tokens::{Token, TokenType},
};

/// Preprocessing applied by `Lexer::preprocess`. `Lexer::tokenize` never
/// looks at these, so tokenizing the raw text is always lossless.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexerOptions {
    /// Strip leading and trailing newlines.
    pub strip_nl: bool,
    /// Strip all leading and trailing whitespace. Takes precedence over `strip_nl`.
    pub strip_all: bool,
    /// Make sure the text ends with a newline.
    pub ensure_nl: bool,
    /// Expand tabs to this many columns; 0 leaves them alone.
    pub tab_size: usize,
}

impl Default for LexerOptions {
    fn default() -> Self {
        LexerOptions {
            strip_nl: true,
            strip_all: false,
            ensure_nl: true,
            tab_size: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transition {
    Push(usize),
    Pop,
}

#[derive(Debug, Clone)]
struct Rule {
    regex: Regex,
    pattern: String,
    action: Action,
    next: Option<Transition>,
}

#[derive(Debug, Clone)]
struct State {
    name: String,
    rules: Vec<Rule>,
}

/// A compiled rule table. Immutable once built and safe to share between
/// threads; every call to `tokenize` gets its own cursor.
#[derive(Debug, Clone)]
pub struct Lexer {
    states: Vec<State>,
    initial: usize,
    options: LexerOptions,
}

impl Lexer {
    pub fn new<S: Into<String>>(
        table: Vec<(S, Vec<Entry>)>,
        initial: &str,
    ) -> Result<Lexer, Error> {
        let table: Vec<StateDef> = table
            .into_iter()
            .map(|(name, entries)| (name.into(), entries))
            .collect();

        let mut lookup: HashMap<&str, usize> = HashMap::new();
        for (index, (name, _)) in table.iter().enumerate() {
            if lookup.insert(name.as_str(), index).is_some() {
                return Err(Error::new(
                    ErrorImpl::DuplicateState { state: name.clone() },
                    RuleLocation::state(name),
                ));
            }
        }

        let initial = *lookup.get(initial).ok_or_else(|| {
            Error::new(
                ErrorImpl::MissingInitialState {
                    state: initial.to_string(),
                },
                RuleLocation::null(),
            )
        })?;

        let mut states = Vec::with_capacity(table.len());
        for (name, _) in table.iter() {
            let mut flat = vec![];
            flatten(&table, &lookup, name, &mut vec![], &mut flat)?;

            let rules = flat
                .into_iter()
                .map(|(def, location)| compile_rule(def, &lookup, location))
                .collect::<Result<Vec<Rule>, Error>>()?;

            states.push(State {
                name: name.clone(),
                rules,
            });
        }

        debug!(
            states = states.len(),
            rules = states.iter().map(|state| state.rules.len()).sum::<usize>(),
            initial = %states[initial].name,
            "built lexer"
        );

        Ok(Lexer {
            states,
            initial,
            options: LexerOptions::default(),
        })
    }

    pub fn with_options(mut self, options: LexerOptions) -> Lexer {
        self.options = options;
        self
    }

    pub fn options(&self) -> &LexerOptions {
        &self.options
    }

    pub fn state_names(&self) -> impl Iterator<Item = &str> {
        self.states.iter().map(|state| state.name.as_str())
    }

    pub fn rule_count(&self, state: &str) -> Option<usize> {
        self.states
            .iter()
            .find(|s| s.name == state)
            .map(|s| s.rules.len())
    }

    /// Lazily splits `source` into tokens, starting in the initial state.
    pub fn tokenize<'l, 's>(&'l self, source: &'s str) -> Tokens<'l, 's> {
        Tokens {
            lexer: self,
            source,
            pos: 0,
            stack: vec![self.initial],
            pending: VecDeque::new(),
            captures: self
                .states
                .iter()
                .map(|state| state.rules.iter().map(|_| None).collect())
                .collect(),
        }
    }

    /// Normalizes line endings and applies `LexerOptions` to `source`.
    pub fn preprocess<'s>(&self, source: &'s str) -> Cow<'s, str> {
        let mut text = Cow::Borrowed(source.strip_prefix('\u{feff}').unwrap_or(source));

        if text.contains('\r') {
            text = Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"));
        }

        if self.options.strip_all {
            text = trim_cow(text, |t| t.trim());
        } else if self.options.strip_nl {
            text = trim_cow(text, |t| t.trim_matches('\n'));
        }

        if self.options.tab_size > 0 && text.contains('\t') {
            text = Cow::Owned(expand_tabs(&text, self.options.tab_size));
        }

        if self.options.ensure_nl && !text.ends_with('\n') {
            text.to_mut().push('\n');
        }

        text
    }
}

fn trim_cow<'s>(text: Cow<'s, str>, trim: impl Fn(&str) -> &str) -> Cow<'s, str> {
    match text {
        Cow::Borrowed(borrowed) => Cow::Borrowed(trim(borrowed)),
        Cow::Owned(owned) => Cow::Owned(trim(&owned).to_string()),
    }
}

fn expand_tabs(text: &str, tab_size: usize) -> String {
    let mut result = String::with_capacity(text.len());
    let mut column = 0;

    for ch in text.chars() {
        match ch {
            '\t' => {
                let spaces = tab_size - column % tab_size;
                result.extend(std::iter::repeat(' ').take(spaces));
                column += spaces;
            }
            '\n' => {
                result.push(ch);
                column = 0;
            }
            _ => {
                result.push(ch);
                column += 1;
            }
        }
    }

    result
}

/// Appends the rules of `name` to `out`, splicing included states in place.
/// `visiting` holds the chain of states currently being expanded.
fn flatten<'t>(
    table: &'t [StateDef],
    lookup: &HashMap<&str, usize>,
    name: &'t str,
    visiting: &mut Vec<&'t str>,
    out: &mut Vec<(&'t RuleDef, RuleLocation)>,
) -> Result<(), Error> {
    if visiting.contains(&name) {
        return Err(Error::new(
            ErrorImpl::IncludeCycle {
                state: name.to_string(),
            },
            RuleLocation::state(name),
        ));
    }

    let (_, entries) = &table[lookup[name]];
    visiting.push(name);

    for (index, entry) in entries.iter().enumerate() {
        match entry {
            Entry::Rule(def) => out.push((def, RuleLocation::new(name, index))),
            Entry::Include(target) => {
                let Some(&target_index) = lookup.get(target.as_str()) else {
                    return Err(Error::new(
                        ErrorImpl::UndefinedState {
                            state: target.clone(),
                        },
                        RuleLocation::new(name, index),
                    ));
                };
                flatten(table, lookup, &table[target_index].0, visiting, out)?;
            }
        }
    }

    visiting.pop();
    Ok(())
}

fn compile_rule(
    def: &RuleDef,
    lookup: &HashMap<&str, usize>,
    location: RuleLocation,
) -> Result<Rule, Error> {
    // `$` and `^` work per line, as rule tables are written for it.
    let regex = Regex::builder()
        .syntax(syntax::Config::new().multi_line(true))
        .build(&def.pattern)
        .map_err(|err| {
            Error::new(
                ErrorImpl::InvalidPattern {
                    pattern: def.pattern.clone(),
                    message: err.to_string(),
                },
                location.clone(),
            )
        })?;

    if let Action::ByGroups(kinds) = &def.action {
        let groups = regex.captures_len() - 1;
        if kinds.is_empty() || kinds.len() > groups {
            return Err(Error::new(
                ErrorImpl::GroupCountMismatch {
                    pattern: def.pattern.clone(),
                    expected: kinds.len(),
                    groups,
                },
                location,
            ));
        }
    }

    let next = match &def.next {
        None => None,
        Some(NextState::Pop) => Some(Transition::Pop),
        Some(NextState::Push(state)) => match lookup.get(state.as_str()) {
            Some(&index) => Some(Transition::Push(index)),
            None => {
                return Err(Error::new(
                    ErrorImpl::UndefinedState {
                        state: state.clone(),
                    },
                    location,
                ))
            }
        },
    };

    Ok(Rule {
        regex,
        pattern: def.pattern.clone(),
        action: def.action.clone(),
        next,
    })
}

/// The scan cursor of one tokenization pass.
///
/// Produced by `Lexer::tokenize`. Work happens one match at a time as tokens
/// are pulled, so dropping the iterator early stops the pass.
pub struct Tokens<'l, 's> {
    lexer: &'l Lexer,
    source: &'s str,
    pos: usize,
    stack: Vec<usize>,
    pending: VecDeque<Token<'s>>,
    /// Reusable capture slots for group rules, indexed by state then rule.
    captures: Vec<Vec<Option<Captures>>>,
}

impl<'l, 's> Tokens<'l, 's> {
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn current_state(&self) -> &'l str {
        let lexer = self.lexer;
        &lexer.states[self.current()].name
    }

    fn current(&self) -> usize {
        self.stack.last().copied().unwrap_or(self.lexer.initial)
    }

    fn emit(&mut self, kind: TokenType, start: usize, end: usize) {
        let source = self.source;
        self.pending.push_back(MK_TOKEN!(
            kind,
            &source[start..end],
            Span { start, end }
        ));
    }

    fn transition(&mut self, next: Option<Transition>) {
        match next {
            None => {}
            Some(Transition::Push(index)) => self.stack.push(index),
            Some(Transition::Pop) => {
                if self.stack.len() > 1 {
                    self.stack.pop();
                }
            }
        }
    }

    /// Consumes one rule match, or one character if no rule matches.
    fn step(&mut self) {
        let lexer = self.lexer;
        let current = self.current();
        let state = &lexer.states[current];
        let input = Input::new(self.source)
            .range(self.pos..)
            .anchored(Anchored::Yes);

        for (rule_index, rule) in state.rules.iter().enumerate() {
            match &rule.action {
                Action::Token(kind) => {
                    let Some(found) = rule.regex.search(&input) else {
                        continue;
                    };
                    if found.is_empty() {
                        continue;
                    }

                    self.emit(*kind, found.start(), found.end());
                    self.pos = found.end();
                }
                Action::ByGroups(kinds) => {
                    let mut caps = self.captures[current][rule_index]
                        .take()
                        .unwrap_or_else(|| rule.regex.create_captures());
                    rule.regex.search_captures(&input, &mut caps);
                    let Some(found) = caps.get_match().filter(|found| !found.is_empty()) else {
                        self.captures[current][rule_index] = Some(caps);
                        continue;
                    };

                    // Text outside the groups is still emitted so nothing is lost.
                    let mut cursor = found.start();
                    for (index, kind) in kinds.iter().enumerate() {
                        let Some(group) = caps.get_group(index + 1) else {
                            continue;
                        };
                        if group.is_empty() || group.start < cursor {
                            continue;
                        }
                        if group.start > cursor {
                            self.emit(TokenType::Text, cursor, group.start);
                        }
                        self.emit(*kind, group.start, group.end);
                        cursor = group.end;
                    }
                    if cursor < found.end() {
                        self.emit(TokenType::Text, cursor, found.end());
                    }
                    self.captures[current][rule_index] = Some(caps);

                    self.pos = found.end();
                }
            }

            trace!(pattern = %rule.pattern, state = %state.name, pos = self.pos, "matched");
            self.transition(rule.next);
            return;
        }

        let width = self.source[self.pos..]
            .chars()
            .next()
            .map_or(1, char::len_utf8);
        let start = self.pos;
        self.pos += width;

        if &self.source[start..self.pos] == "\n" {
            self.emit(TokenType::Whitespace, start, self.pos);
            self.stack.clear();
            self.stack.push(lexer.initial);
        } else {
            trace!(pos = start, state = %state.name, "no rule matched, emitting error token");
            self.emit(TokenType::Error, start, self.pos);
        }
    }
}

impl<'l, 's> Iterator for Tokens<'l, 's> {
    type Item = Token<'s>;

    fn next(&mut self) -> Option<Token<'s>> {
        if self.pending.is_empty() && self.pos < self.source.len() {
            self.step();
        }

        self.pending.pop_front()
    }
}

impl std::iter::FusedIterator for Tokens<'_, '_> {}

/// Tokenizes `source` in one go.
pub fn tokenize<'s>(lexer: &Lexer, source: &'s str) -> Vec<Token<'s>> {
    lexer.tokenize(source).collect()
}
