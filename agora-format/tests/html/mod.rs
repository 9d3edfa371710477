//! HTML dialect tests

mod sanitize;
mod structure;
