// src/specs/mod.rs
//! Page-specific source specs. Each spec knows how to read one kind of
//! page: `wiki` pulls chip rows out of a title's list page, `faq` mines a
//! title's plain-text strategy guide. Specs only extract; key generation
//! and cross-source merging live with the reconciliation engine.

pub mod faq;
pub mod wiki;
