//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts the text of a
//! C-family script into a flat sequence of classified tokens. It handles:
//!
//! - An ordered registry of anchored regex patterns, one per category
//! - First-match-wins arbitration in registry order
//! - Reserved word reclassification of identifier matches
//! - Single-character `Unknown` fallback so scanning always progresses

pub mod lexer;
pub mod tokens;
