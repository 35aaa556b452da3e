/**
 * query module
 *
 * - display: term stringification and identifier shortening
 * - runner: SPARQL execution into ordered result rows
 */

pub mod display;
pub mod runner;

pub use display::{shorten, term_text, DisplayMode};
pub use runner::{QueryRunner, ResultRow, ResultSet};
