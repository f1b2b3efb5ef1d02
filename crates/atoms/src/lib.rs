//! Interned string type for identifier-like data.
//!
//! `JsWord` is cheap to clone and cheap to compare; every name, string value,
//! and annotation tag in the tree is stored as one.

include!(concat!(env!("OUT_DIR"), "/js_word.rs"));
