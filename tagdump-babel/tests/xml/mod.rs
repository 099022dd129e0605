//! XML format tests

mod import;
