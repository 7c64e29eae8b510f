//! Bridges playing-pointer transitions to the media element and media
//! events back to discrete progress observations.

use tracing::debug;

use crate::track::Track;

use super::element::{MediaElement, MediaEvent};

/// One discrete progress observation, in whole seconds (floored).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub elapsed: u64,
    pub duration: u64,
}

/// Rendered bounds of the timeline widget, in the host's coordinates.
#[derive(Debug, Clone, Copy)]
pub struct TimelineBounds {
    pub left: f64,
    pub right: f64,
}

/// Drives a [`MediaElement`] from the store's playing pointer.
///
/// A progress "session" opens when a track is loaded and closes when the
/// pointer goes back to `None`. Closing is synchronous: events still
/// queued from a torn-down session are dropped, so no stale progress
/// leaks into the next one.
pub struct PlaybackBridge<M: MediaElement> {
    element: M,
    session_open: bool,
    on_progress: Option<Box<dyn FnMut(Progress)>>,
    on_ended: Option<Box<dyn FnMut()>>,
}

impl<M: MediaElement> PlaybackBridge<M> {
    pub fn new(element: M) -> Self {
        Self {
            element,
            session_open: false,
            on_progress: None,
            on_ended: None,
        }
    }

    pub fn element(&self) -> &M {
        &self.element
    }

    pub fn element_mut(&mut self) -> &mut M {
        &mut self.element
    }

    /// Register the progress observer. Observations only arrive while a
    /// session is open and the element knows its duration.
    pub fn on_progress(&mut self, callback: impl FnMut(Progress) + 'static) {
        self.on_progress = Some(Box::new(callback));
    }

    /// Register the track-ended observer (typically wired to `next()`).
    pub fn on_ended(&mut self, callback: impl FnMut() + 'static) {
        self.on_ended = Some(Box::new(callback));
    }

    /// React to a playing-pointer transition.
    ///
    /// Every `Some` reloads and starts the element, even for the same
    /// track ID — the pointer is a fresh snapshot per `play()` call and
    /// replaying a track from the top is the intended effect. `None`
    /// pauses a non-paused element and closes the session.
    pub fn set_playing(&mut self, playing: Option<&Track>) {
        match playing {
            Some(track) => {
                debug!(id = track.id(), "loading track into media element");
                self.element.set_source(Some(track.url().clone()));
                self.element.load();
                self.element.play();
                self.session_open = true;
            }
            None => {
                if !self.element.paused() {
                    self.element.pause();
                }
                self.session_open = false;
            }
        }
    }

    pub fn session_open(&self) -> bool {
        self.session_open
    }

    /// Feed one event from the element's event source.
    ///
    /// Updates without a known duration are filtered out; everything is
    /// dropped while no session is open.
    pub fn handle_event(&mut self, event: MediaEvent) {
        if !self.session_open {
            return;
        }
        match event {
            MediaEvent::TimeUpdate => {
                let Some(duration) = self.element.duration() else {
                    return;
                };
                let progress = Progress {
                    elapsed: self.element.position().as_secs(),
                    duration: duration.as_secs(),
                };
                if let Some(callback) = &mut self.on_progress {
                    callback(progress);
                }
            }
            MediaEvent::Ended => {
                if let Some(callback) = &mut self.on_ended {
                    callback();
                }
            }
        }
    }

    /// Map a click on the timeline into a playback position.
    ///
    /// The fraction is clamped to [0, 1], so clicks landing just outside
    /// the rendered box snap to the ends. No-op while the duration is
    /// still unknown.
    pub fn seek(&mut self, click_x: f64, timeline: TimelineBounds) {
        let Some(duration) = self.element.duration() else {
            return;
        };
        let width = timeline.right - timeline.left;
        if width <= 0.0 {
            return;
        }
        let fraction = ((click_x - timeline.left) / width).clamp(0.0, 1.0);
        self.element.set_position(duration.mul_f64(fraction));
    }

    /// Resume a paused element without reloading.
    pub fn resume(&mut self) {
        self.element.play();
    }

    /// Pause without closing the session.
    pub fn pause(&mut self) {
        self.element.pause();
    }
}
