pub mod normalize;
pub mod token;
pub mod tokenizer;

pub use normalize::normalize;
pub use token::{Token, TokenStream};
pub use tokenizer::{tokenize_text, Tokenizer, TokenizerKind, WhitespaceTokenizer, WordTokenizer};
