//! Rodio-backed [`crate::player::MediaElement`] implementation.
//!
//! Plays `blob:` sources out of the object-URL registry and `file:`
//! sources from disk. Remote schemes are refused; fetching over the
//! network is out of scope for this element.

mod element;
mod sink;

pub use element::{MediaError, RodioElement};
