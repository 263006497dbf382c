// src/regulations.rs
//
// Regulation lookup. There is no knowledge base behind this: any non-empty
// question gets the same canned answer.

use crate::config::consts::REGULATION_RESPONSE;

pub const PROMPT: &str = "Ask a question about Zimbabwe mining regulations:";

pub fn lookup(query: &str) -> Option<&'static str> {
    if query.is_empty() {
        None
    } else {
        Some(REGULATION_RESPONSE)
    }
}
