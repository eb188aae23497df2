use lazy_static::lazy_static;
use std::{collections::HashSet, fmt::Display};

use crate::Span;

lazy_static! {
    /// Keywords that turn an identifier-shaped match into a reserved word.
    /// Every entry must itself be a valid identifier, otherwise the
    /// identifier pattern can never produce it.
    pub static ref RESERVED_WORDS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        for word in [
            "break", "case", "catch", "class", "const", "continue", "debugger", "default",
            "delete", "do", "else", "enum", "export", "extends", "finally", "for",
            "function", "if", "import", "in", "instanceof", "let", "new", "return",
            "super", "switch", "this", "throw", "try", "typeof", "var", "void",
            "while", "with", "yield", "await", "null", "true", "false",
        ] {
            set.insert(word);
        }
        set
    };
}

pub fn is_reserved(word: &str) -> bool {
    RESERVED_WORDS.contains(word)
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
pub enum Category {
    Number,
    StringLiteral,
    CharacterLiteral,
    PreprocessorDirective,
    Comment,
    ReservedWord,
    Operator,
    Punctuation,
    Identifier,
    Unknown,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::Number,
        Category::StringLiteral,
        Category::CharacterLiteral,
        Category::PreprocessorDirective,
        Category::Comment,
        Category::ReservedWord,
        Category::Operator,
        Category::Punctuation,
        Category::Identifier,
        Category::Unknown,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Number => "Number",
            Category::StringLiteral => "String Literal",
            Category::CharacterLiteral => "Character Literal",
            Category::PreprocessorDirective => "Preprocessor Directive",
            Category::Comment => "Comment",
            Category::ReservedWord => "Reserved Word",
            Category::Operator => "Operator",
            Category::Punctuation => "Punctuation",
            Category::Identifier => "Identifier",
            Category::Unknown => "Unknown",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub category: Category,
    /// Exact source text, delimiters included.
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{}, {}>", self.value, self.category)
    }
}

impl Token {
    pub fn is_one_of_many(&self, categories: &[Category]) -> bool {
        categories.contains(&self.category)
    }

    /// Comments and preprocessor lines carry no syntax for a parser.
    pub fn is_trivia(&self) -> bool {
        self.is_one_of_many(&[Category::Comment, Category::PreprocessorDirective])
    }
}
