//! Crate-wide error type for store-level failures.
//!
//! Validation failures have their own error enums in [`crate::validate`];
//! this type covers the playlist store's caller-contract violations.

use thiserror::Error;
use url::Url;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by playlist store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// `remove` was called with an index outside the playlist.
    #[error("track index {index} out of range (playlist has {len} tracks)")]
    IndexOutOfRange { index: usize, len: usize },

    /// A download filename could not be derived because the URL path
    /// ends in an empty segment.
    #[error("could not derive a download name for {0}")]
    EmptyDownloadName(Url),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_out_of_range_display_names_both_numbers() {
        let err = Error::IndexOutOfRange { index: 7, len: 3 };
        assert_eq!(
            err.to_string(),
            "track index 7 out of range (playlist has 3 tracks)"
        );
    }

    #[test]
    fn empty_download_name_display_includes_url() {
        let url = Url::parse("https://x.com/folder/").unwrap();
        let err = Error::EmptyDownloadName(url);
        assert!(err.to_string().contains("https://x.com/folder/"));
    }
}
