//! Input validation for the add-track form.
//!
//! Two configuration-driven validators gate what reaches the playlist
//! store: [`FileValidator`] for uploaded files and [`UrlValidator`] for
//! remote URL strings. Both are configured once at construction and are
//! pure per call; every failure comes back as a structured error value for
//! the form layer to render, never as a panic.

mod file;
mod form;
mod url;

pub use file::{FileValidationError, FileValidator};
pub use form::{FileUpload, FormValue};
pub use url::{UrlValidationError, UrlValidator};

#[cfg(test)]
mod tests;
