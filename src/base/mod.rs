//! Foundation types for the checker.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets)
//! - [`LineCol`], [`LineIndex`] - Line/column conversion
//! - [`Position`], [`Span`] - 1-based positions reported to users
//! - [`SourceText`] - File text with tab-expanded column conversion
//!
//! This module has NO dependencies on other modules of the crate.

mod position;
mod source;
mod span;

pub use position::{Position, Span};
pub use source::{DEFAULT_TAB_WIDTH, SourceText};
pub use span::{LineCol, LineIndex, TextRange, TextSize};
