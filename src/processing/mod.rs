//! Text processing and lexical scoring

pub mod tokenizer;
pub mod tfidf;
pub mod similarity;
pub mod lexical;
pub mod skills;
pub mod quick;
