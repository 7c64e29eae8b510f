//! playdeck: an in-memory playlist session manager.
//!
//! The crate owns the playlist/playback state machine of a small music
//! player session: tracks are added from uploaded bytes or remote URLs,
//! gated by configurable validators, held in an ordered observable
//! playlist, and driven through a pluggable media element with discrete
//! progress reporting. No persistence, no network transport, single
//! logical thread of control.
//!
//! - [`store::PlaylistStore`]: the state machine (add/remove/play/stop/
//!   next/download) with current-value-replay observables.
//! - [`validate`]: file and URL validators for the add-track form.
//! - [`player::PlaybackBridge`]: playing-pointer transitions in, discrete
//!   progress and ended signals out.
//! - [`media::RodioElement`]: a rodio-backed media element for `blob:`
//!   and `file:` sources.
//! - [`session::Session`]: the glue a host event loop drives.

pub mod config;
pub mod download;
pub mod error;
pub mod media;
pub mod observe;
pub mod player;
pub mod resource;
pub mod session;
pub mod store;
pub mod track;
pub mod validate;

pub use error::{Error, Result};
pub use resource::ObjectUrls;
pub use session::Session;
pub use store::PlaylistStore;
pub use track::{NewTrack, Playlist, Track};
