use std::collections::{BTreeSet, HashMap};

use crate::tokenizer::tokenize;

/// Cosine similarity above which a question counts as relevant to the
/// stored document.
pub const RELEVANCE_THRESHOLD: f64 = 0.10;

/// Number of leading characters of the document quoted back to the caller
/// when the question clears the threshold.
pub const SNIPPET_CHARS: usize = 200;

/// TF-IDF cosine similarity between a stored document and a question,
/// computed over the two-document corpus {document, question}.
///
/// Term weights use smoothed inverse document frequency,
/// `ln((1 + n) / (1 + df)) + 1` with n = 2, and raw term counts for the
/// term frequency. Both vectors are L2-normalized, so the result lies in
/// [0, 1]. A degenerate (zero) vector on either side yields 0 rather than
/// an error.
pub fn similarity(document: &str, question: &str) -> f64 {
    let document_counts = term_counts(&tokenize(document));
    let question_counts = term_counts(&tokenize(question));

    if document_counts.is_empty() || question_counts.is_empty() {
        return 0.0;
    }

    // Accumulate in sorted term order: float addition is not associative,
    // so a hash-ordered walk would make the score vary in the last ULP
    // between calls.
    let corpus_size = 2.0_f64;
    let vocabulary: BTreeSet<&String> = document_counts
        .keys()
        .chain(question_counts.keys())
        .collect();

    let mut dot = 0.0;
    let mut document_norm = 0.0;
    let mut question_norm = 0.0;

    for term in vocabulary {
        let in_document = document_counts.contains_key(term);
        let in_question = question_counts.contains_key(term);
        let document_frequency = f64::from(u8::from(in_document) + u8::from(in_question));
        let idf = ((1.0 + corpus_size) / (1.0 + document_frequency)).ln() + 1.0;

        let document_weight =
            document_counts.get(term).copied().unwrap_or(0) as f64 * idf;
        let question_weight =
            question_counts.get(term).copied().unwrap_or(0) as f64 * idf;

        dot += document_weight * question_weight;
        document_norm += document_weight * document_weight;
        question_norm += question_weight * question_weight;
    }

    if document_norm == 0.0 || question_norm == 0.0 {
        return 0.0;
    }

    clamp_unit(dot / (document_norm.sqrt() * question_norm.sqrt()))
}

fn term_counts(tokens: &[String]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for token in tokens {
        *counts.entry(token.clone()).or_insert(0) += 1;
    }
    counts
}

fn clamp_unit(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}
