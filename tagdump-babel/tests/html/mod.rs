//! HTML format tests
//!
//! HTML → Node → flattened value, for both strategies.

mod explicit;
mod shorthand;
