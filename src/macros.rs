//! Utility macros for the lexer.
//!
//! This module defines helper macros used by the tokenizer:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_PATTERN!` - Creates an anchored registry entry for a category
//!
//! These macros keep the category registry readable.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$category` - The Category
/// * `$value` - The token's exact source text
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(Category::Number, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($category:expr, $value:expr, $span:expr) => {
        Token {
            category: $category,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a registry entry whose regex only matches at the start of the
/// remaining input.
///
/// The pattern is wrapped in `\A(?:...)`, so a match can never begin
/// further ahead than the cursor.
///
/// # Arguments
///
/// * `$category` - The Category the pattern recognizes
/// * `$pattern` - A string literal with the regex source
///
/// # Example
///
/// ```ignore
/// MK_PATTERN!(Category::Punctuation, r"[{}()\[\],.;:?]")
/// ```
#[macro_export]
macro_rules! MK_PATTERN {
    ($category:expr, $pattern:literal) => {
        RegexPattern {
            category: $category,
            regex: Regex::new(concat!(r"\A(?:", $pattern, ")")).unwrap(),
        }
    };
}
