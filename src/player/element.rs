//! The media element seam.

use std::time::Duration;

use url::Url;

/// Discrete signals a media element emits while a source is loaded.
/// Implementations deliver these through a channel the host pumps into
/// [`super::PlaybackBridge::handle_event`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaEvent {
    /// The playback position moved.
    TimeUpdate,
    /// The current source played through to its end.
    Ended,
}

/// Contract of the playback element the bridge drives.
///
/// Mirrors an HTML audio element: a source is set, `load` picks it up,
/// `play`/`pause` control it, and `duration` may stay unknown for a while
/// after `load` — callers must not assume it is available synchronously.
pub trait MediaElement {
    /// Point the element at a new source (or none). Takes effect on the
    /// next [`load`](Self::load).
    fn set_source(&mut self, url: Option<Url>);

    /// (Re)load the current source. Does not start playback.
    fn load(&mut self);

    fn play(&mut self);

    fn pause(&mut self);

    fn paused(&self) -> bool;

    /// Elapsed playback time of the current source.
    fn position(&self) -> Duration;

    /// Move the playback position.
    fn set_position(&mut self, position: Duration);

    /// Total length of the current source, once known.
    fn duration(&self) -> Option<Duration>;
}
