pub mod autocomplete;
pub mod ident;

pub use autocomplete::{Suggestion, SuggestionPayload};
pub use ident::{IdentResponse, LineList, Peeks, SymbolEntry};
