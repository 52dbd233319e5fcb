//! Concept explanation engine.
//!
//! Fast, non-LLM explanation of highlighted text. Rules are evaluated in a
//! fixed order and the first match wins:
//! 1. formula detection (regex)
//! 2. canned academic terms (substring table)
//! 3. default template built from the page context
//!
//! The `explain_api_key` in the configuration is reserved for a future model
//! integration; nothing here calls out to the network.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::PageContext;

// Compiled once at startup, like the other pattern rules in this codebase.
static FORMULA_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-z]\s*[=+\-*/]\s*[a-z0-9]").expect("Invalid regex: formula pattern")
});

/// Canned explanations for well-known academic terms, checked in order
/// against the lowercased input. First match wins.
const ACADEMIC_TERMS: &[(&str, &str)] = &[
    (
        "machine learning",
        "Machine Learning is a subset of artificial intelligence that enables computers to learn and make decisions from data without being explicitly programmed for every task.",
    ),
    (
        "neural network",
        "A neural network is a computing system inspired by biological neural networks. It consists of interconnected nodes (neurons) that process information and can learn patterns from data.",
    ),
    (
        "quantum computing",
        "Quantum computing uses quantum mechanical phenomena like superposition and entanglement to perform calculations that would be impossible or extremely slow for classical computers.",
    ),
    (
        "blockchain",
        "Blockchain is a distributed ledger technology that maintains a continuously growing list of records (blocks) that are linked and secured using cryptography.",
    ),
];

/// Outcome of rule matching, before rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Matched {
    /// The text looks like an equation or formula.
    Formula,
    /// A known academic term; carries the canned explanation.
    Term(&'static str),
    /// No rule matched; fall through to the default template.
    None,
}

/// Rule-based explainer for highlighted text.
pub struct ConceptExplainer {
    terms: &'static [(&'static str, &'static str)],
}

impl Default for ConceptExplainer {
    fn default() -> Self {
        Self::new()
    }
}

impl ConceptExplainer {
    pub fn new() -> Self {
        Self {
            terms: ACADEMIC_TERMS,
        }
    }

    /// Produces an HTML-ish explanation for `text`.
    ///
    /// The caller guarantees `text` is non-empty; empty input would simply
    /// fall through to the default template.
    pub fn explain(&self, text: &str, context: &PageContext) -> String {
        match self.classify(text) {
            Matched::Formula => format!(
                "<strong>{}</strong> appears to be a mathematical formula or equation. \
                 In mathematics, equations like this express relationships between variables \
                 and constants. The '=' sign indicates equality, meaning both sides have the \
                 same value.",
                text
            ),
            Matched::Term(explanation) => explanation.to_string(),
            Matched::None => {
                let page = context.domain.as_deref().unwrap_or("this webpage");
                format!(
                    "<strong>{}</strong> is a concept mentioned on {}. This appears to be an \
                     important term in your current research. For a more detailed explanation, \
                     consider searching academic databases or educational videos about this topic.",
                    text, page
                )
            }
        }
    }

    /// Walks the rules in order; first match wins.
    fn classify(&self, text: &str) -> Matched {
        let lower = text.to_lowercase();

        if FORMULA_PATTERN.is_match(&lower) || text.contains('=') {
            return Matched::Formula;
        }

        for (term, explanation) in self.terms {
            if lower.contains(term) {
                return Matched::Term(explanation);
            }
        }

        Matched::None
    }
}
