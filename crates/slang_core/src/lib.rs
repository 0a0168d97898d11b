//! slang_core: Core types shared by the slang front end.
//!
//! Provides source text ranges and the fatal error type for everything
//! that is not a lexical diagnostic.

pub mod error;
pub mod text;

pub use error::{SlangError, SlangResult};
pub use text::{TextPos, TextRange, MAX_SOURCE_LEN};
