//! Output formatting module

pub mod trace;

pub use trace::format_trace;
