//! Playback: the media element contract and the progress bridge.
//!
//! [`MediaElement`] is the seam to whatever actually makes sound; the
//! [`PlaybackBridge`] drives it from playing-pointer transitions and turns
//! its continuous time updates into a discrete progress stream.

mod bridge;
mod element;

pub use bridge::{PlaybackBridge, Progress, TimelineBounds};
pub use element::{MediaElement, MediaEvent};
