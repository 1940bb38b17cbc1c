//! Errors are passed around as plain strings in this workspace. This
//! module provides the adapter to pull foreign error types into that
//! style while attaching some context.

use std::fmt::Display;

pub trait ErrorStringExt<T> {
    fn err_to_string(self, message: &str) -> Result<T, String>;
}

impl<T, E: Display> ErrorStringExt<T> for Result<T, E> {
    fn err_to_string(self, message: &str) -> Result<T, String> {
        self.map_err(|error| format!("{message}: {error}"))
    }
}
