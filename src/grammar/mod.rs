pub mod derive;
pub mod grammar;
pub mod parse;
pub mod pretty_print;
pub use derive::{Derivation, DerivationSearcher, DerivationStep};
pub use grammar::Grammar;

pub const EPSILON: &str = "ϵ";
