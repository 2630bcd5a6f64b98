pub mod tfidf;
pub mod tokenizer;

pub use tfidf::{similarity, RELEVANCE_THRESHOLD, SNIPPET_CHARS};
pub use tokenizer::tokenize;
