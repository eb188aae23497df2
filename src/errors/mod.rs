//! Error types and error handling for the tokenizer front end.
//!
//! This module defines the error types surfaced around tokenization. It
//! includes:
//!
//! - Error structures with source position information
//! - Variants for unreadable input and strict-mode unknown characters
//! - Error names and helpful tips for display

pub mod errors;
