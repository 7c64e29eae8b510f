//! Playlist store: the session's state machine.
//!
//! Owns the ordered track list and the playing pointer, exposed as two
//! observable values. All mutation goes through the operations in
//! `store::model`; observers are notified synchronously.

mod model;

pub use model::*;

#[cfg(test)]
mod tests;
