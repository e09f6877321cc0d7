//! Translation of natural-language questions into collection filters.
//!
//! The model only ever returns text. This crate owns every step between that
//! text and a typed [`Filter`](nlq_core::Filter):
//! - fence stripping and JSON parsing ([`cleaning`])
//! - an opt-in field/operator check ([`guard`])
//! - the end-to-end prompt → model → filter call ([`translator`])

pub mod cleaning;
pub mod guard;
pub mod translator;

pub use cleaning::{parse_reply, strip_code_fences};
pub use guard::FilterGuard;
pub use nlq_core::{Filter, EMPTY_QUERY_MESSAGE};
pub use translator::{validate_question, QueryTranslator, Translation, MISSING_QUERY_MESSAGE};
