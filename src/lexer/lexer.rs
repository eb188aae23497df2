use std::{collections::BTreeMap, rc::Rc};

use lazy_static::lazy_static;
use log::{debug, trace};
use regex::Regex;

use crate::{Position, Span, MK_PATTERN, MK_TOKEN};

use super::tokens::{is_reserved, Category, Token};

#[derive(Debug, Clone)]
pub struct RegexPattern {
    pub category: Category,
    pub regex: Regex,
}

impl RegexPattern {
    /// Byte length of the match starting exactly at the beginning of
    /// `remaining`, if there is one.
    pub fn match_len(&self, remaining: &str) -> Option<usize> {
        self.regex.find(remaining).map(|m| m.end())
    }
}

lazy_static! {
    /// Recognizers in priority order. The first pattern that matches at
    /// the cursor wins, even if a later one would match more text.
    ///
    /// Unterminated strings and block comments do not match; digits are
    /// ASCII only.
    pub static ref REGISTRY: Vec<RegexPattern> = vec![
        MK_PATTERN!(Category::Comment, r"//[^\r\n]*|(?s:/\*.*?\*/)"),
        MK_PATTERN!(Category::StringLiteral, r#"(?s:"(?:\\.|[^\\"])*"|'(?:\\.|[^\\'])*')"#),
        MK_PATTERN!(Category::CharacterLiteral, r"(?s:'(?:\\.|[^\\'])')"),
        MK_PATTERN!(Category::Number, r"0[xX][0-9a-fA-F]+|[0-9]+(?:\.[0-9]+)?(?:[eE][-+]?[0-9]+)?"),
        MK_PATTERN!(Category::PreprocessorDirective, r"#[^\r\n]*"),
        // Longer operators first; alternation is leftmost-first, not longest.
        MK_PATTERN!(
            Category::Operator,
            r">>>=|>>>|<<=|>>=|\+\+|--|==|!=|<=|>=|&&|\|\||\+=|-=|\*=|/=|%=|<<|>>|&=|\|=|\^=|=>|[-+*/%&|^~<>!=]=?"
        ),
        MK_PATTERN!(Category::Punctuation, r"[{}()\[\],.;:?]"),
        MK_PATTERN!(Category::Identifier, r"[a-zA-Z_$][a-zA-Z0-9_$]*"),
    ];
}

#[derive(Clone)]
pub struct Lexer<'a> {
    patterns: &'static [RegexPattern],
    tokens: Vec<Token>,
    source: &'a str,
    pos: usize,
    file: Rc<String>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, file: Option<String>) -> Lexer<'a> {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            patterns: REGISTRY.as_slice(),
            tokens: vec![],
            source,
            pos: 0,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Character under the cursor. Only valid while `!at_eof()`.
    pub fn at(&self) -> char {
        self.remainder().chars().next().unwrap_or('\0')
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Tries every pattern in registry order against the remaining input
    /// and returns the first category that matches, with its byte length.
    pub fn recognize(&self) -> Option<(Category, usize)> {
        let remaining = self.remainder();

        self.patterns.iter().find_map(|pattern| {
            pattern
                .match_len(remaining)
                .filter(|len| *len > 0)
                .map(|len| (pattern.category, len))
        })
    }

    /// Emits the `len` bytes under the cursor as a token and moves past them.
    fn emit(&mut self, category: Category, len: usize) {
        let source = self.source;
        let value = &source[self.pos..self.pos + len];

        let category = if category == Category::Identifier && is_reserved(value) {
            Category::ReservedWord
        } else {
            category
        };

        trace!("{} at {}: {:?}", category, self.pos, value);

        let span = Span {
            start: Position(offset(self.pos), Rc::clone(&self.file)),
            end: Position(offset(self.pos + len), Rc::clone(&self.file)),
        };
        self.push(MK_TOKEN!(category, String::from(value), span));
        self.advance_n(len);
    }
}

/// Whitespace in the C `isspace` sense: ASCII blanks plus vertical tab.
/// Other Unicode spaces are left for the fallback.
pub fn is_blank(ch: char) -> bool {
    ch.is_ascii_whitespace() || ch == '\x0B'
}

/// Byte offset as stored in a `Position`. Offsets past `u32::MAX`
/// saturate.
pub fn offset(pos: usize) -> u32 {
    u32::try_from(pos).unwrap_or(u32::MAX)
}

pub fn tokenize(source: &str, file: Option<String>) -> Vec<Token> {
    let mut lex = Lexer::new(source, file);

    while !lex.at_eof() {
        let ch = lex.at();

        if is_blank(ch) {
            lex.advance_n(ch.len_utf8());
            continue;
        }

        match lex.recognize() {
            Some((category, len)) => lex.emit(category, len),
            None => lex.emit(Category::Unknown, ch.len_utf8()),
        }
    }

    debug!(
        "tokenized {} bytes of {} into {} tokens",
        source.len(),
        lex.file,
        lex.tokens.len()
    );
    lex.tokens
}

/// Number of tokens per category, in category declaration order.
pub fn count_by_category(tokens: &[Token]) -> BTreeMap<Category, usize> {
    let mut counts = BTreeMap::new();
    for token in tokens {
        *counts.entry(token.category).or_insert(0) += 1;
    }
    counts
}

/// First token that fell through every recognizer.
pub fn first_unknown(tokens: &[Token]) -> Option<&Token> {
    tokens.iter().find(|token| token.category == Category::Unknown)
}
