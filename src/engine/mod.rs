// ============================================================================
// Engine Module
// Contains the Thai numeral rules and the conversion pipeline
// ============================================================================

mod converter;
mod formatter;
mod group;
mod grouping;

pub mod factory;
pub mod lexicon;

pub use converter::{convert_amount, to_baht_text, BahtConverter};
pub use factory::{create_from_config, ConverterBuilder};
pub use formatter::convert;
pub use group::{convert_group, write_group};
pub use grouping::{convert_integer, write_integer};
