//! Built-in def formatters.

pub mod objc;

pub use objc::ObjcDefFormatter;
