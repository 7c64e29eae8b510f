//! Track model: the playlist entry sum type and ID generation.
//!
//! A [`Track`] is either a reference to in-memory bytes behind a transient
//! object URL (`Local`) or a plain network URL (`Remote`). Tracks are
//! immutable once created; the store hands out clones, never references
//! into its own state.

use url::Url;

/// An ordered list of tracks. Insertion order is display order and defines
/// `next()` wrap-around.
pub type Playlist = Vec<Track>;

/// A playlist entry with its generated ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Track {
    /// Backed by in-memory bytes through a transient object URL. The URL
    /// must be revoked exactly once, when the track is removed.
    Local { id: String, url: Url, name: String },
    /// A plain remote URL.
    Remote { id: String, url: Url },
}

/// A track as produced by the input layer, before the store assigns an ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewTrack {
    Local { url: Url, name: String },
    Remote { url: Url },
}

impl NewTrack {
    /// Attach a generated ID, producing a full [`Track`].
    pub fn with_id(self, id: String) -> Track {
        match self {
            NewTrack::Local { url, name } => Track::Local { id, url, name },
            NewTrack::Remote { url } => Track::Remote { id, url },
        }
    }
}

impl Track {
    pub fn id(&self) -> &str {
        match self {
            Track::Local { id, .. } | Track::Remote { id, .. } => id,
        }
    }

    pub fn url(&self) -> &Url {
        match self {
            Track::Local { url, .. } | Track::Remote { url, .. } => url,
        }
    }

    /// Whether this track owns a transient object URL.
    pub fn is_local(&self) -> bool {
        matches!(self, Track::Local { .. })
    }
}

const ID_LEN: usize = 16;

// Digits, then lowercase, then uppercase. Byte values are mapped modulo 62,
// so IDs are effectively unique rather than formally guaranteed unique.
const ID_ALPHABET: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Generate an opaque 16-character track ID from OS-provided random bytes.
pub fn generate_id() -> String {
    let mut bytes = [0u8; ID_LEN];
    getrandom::fill(&mut bytes).expect("failed to read OS random source");
    encode_id(&bytes)
}

fn encode_id(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| ID_ALPHABET[(b % ID_ALPHABET.len() as u8) as usize] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_id_maps_bytes_through_the_alphabet_in_order() {
        assert_eq!(encode_id(&[0, 9, 10, 35, 36, 61]), "09azAZ");
        // 62 wraps back to the start of the alphabet.
        assert_eq!(encode_id(&[62, 63]), "01");
    }

    #[test]
    fn generated_ids_are_sixteen_chars_from_the_alphabet() {
        let id = generate_id();
        assert_eq!(id.len(), 16);
        assert!(id.bytes().all(|b| ID_ALPHABET.contains(&b)));
    }

    #[test]
    fn consecutive_ids_differ() {
        // 62^16 values; a collision here means the random source is broken.
        assert_ne!(generate_id(), generate_id());
    }

    #[test]
    fn with_id_preserves_variant_and_fields() {
        let url = Url::parse("https://x.com/song.mp3").unwrap();
        let track = NewTrack::Remote { url: url.clone() }.with_id("abc".into());
        assert_eq!(track.id(), "abc");
        assert_eq!(track.url(), &url);
        assert!(!track.is_local());

        let blob = Url::parse("blob:playdeck/123").unwrap();
        let track = NewTrack::Local {
            url: blob.clone(),
            name: "song.mp3".into(),
        }
        .with_id("def".into());
        assert!(track.is_local());
        assert_eq!(track.url(), &blob);
    }
}
