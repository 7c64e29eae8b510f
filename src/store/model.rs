//! The `PlaylistStore` state machine.

use tracing::{debug, info, warn};

use crate::download::DownloadTrigger;
use crate::error::{Error, Result};
use crate::observe::{Observed, SubscriberId};
use crate::resource::ObjectUrls;
use crate::track::{NewTrack, Playlist, Track, generate_id};

/// Holds the in-memory playlist and the currently playing snapshot.
///
/// Both pieces of state are observable with current-value replay: a
/// subscriber attached mid-session immediately sees what it missed. The
/// playing pointer is a clone taken at [`play`](Self::play) time, not a
/// reference into the playlist; `remove` and `next` are the only
/// operations that reconcile the two.
pub struct PlaylistStore {
    playlist: Observed<Playlist>,
    playing: Observed<Option<Track>>,
    objects: ObjectUrls,
}

impl PlaylistStore {
    /// Create an empty store. `objects` must be the registry the form
    /// layer mints local-track URLs from; the store revokes through it.
    pub fn new(objects: ObjectUrls) -> Self {
        Self {
            playlist: Observed::new(Vec::new()),
            playing: Observed::new(None),
            objects,
        }
    }

    pub fn playlist(&self) -> &Playlist {
        self.playlist.get()
    }

    pub fn playing(&self) -> Option<&Track> {
        self.playing.get().as_ref()
    }

    /// Observe the playlist. The callback runs immediately with the
    /// current list, then after every change.
    pub fn subscribe_playlist(
        &mut self,
        callback: impl FnMut(&Playlist) + 'static,
    ) -> SubscriberId {
        self.playlist.subscribe(callback)
    }

    pub fn unsubscribe_playlist(&mut self, id: SubscriberId) -> bool {
        self.playlist.unsubscribe(id)
    }

    /// Observe the playing pointer, with the same replay semantics.
    pub fn subscribe_playing(
        &mut self,
        callback: impl FnMut(&Option<Track>) + 'static,
    ) -> SubscriberId {
        self.playing.subscribe(callback)
    }

    pub fn unsubscribe_playing(&mut self, id: SubscriberId) -> bool {
        self.playing.unsubscribe(id)
    }

    /// Append a track, assigning its ID. Validation happened upstream at
    /// the form layer; the store trusts its caller.
    pub fn add(&mut self, new_track: NewTrack) {
        let track = new_track.with_id(generate_id());
        debug!(id = track.id(), url = %track.url(), "adding track");
        self.playlist.update(|list| list.push(track));
    }

    /// Remove the track at `index`.
    ///
    /// If the removed entry is the one currently playing, the playing
    /// pointer is reset to `None` before the playlist change is published,
    /// so observers never see a pointer to a departed track. A local
    /// track's object URL is revoked here, exactly once, even if the track
    /// was mid-playback.
    pub fn remove(&mut self, index: usize) -> Result<()> {
        let len = self.playlist.get().len();
        if index >= len {
            return Err(Error::IndexOutOfRange { index, len });
        }

        let removed = self.playlist.get()[index].clone();
        debug!(id = removed.id(), index, "removing track");

        if self
            .playing
            .get()
            .as_ref()
            .is_some_and(|p| p.id() == removed.id())
        {
            self.playing.set(None);
        }

        if let Track::Local { url, .. } = &removed {
            self.objects.revoke(url);
        }

        self.playlist.update(|list| {
            list.remove(index);
        });
        Ok(())
    }

    /// Load a track into the playing pointer (a clone, deliberately).
    /// Membership in the playlist is not checked; callers hand over an
    /// entry they got from the playlist observable.
    pub fn play(&mut self, track: &Track) {
        info!(id = track.id(), "playing track");
        self.playing.set(Some(track.clone()));
    }

    /// Clear the playing pointer. Idempotent.
    pub fn stop(&mut self) {
        self.playing.set(None);
    }

    /// Advance to the track after the playing one, wrapping at the end.
    ///
    /// No-op while stopped. When the playing ID is no longer in the
    /// playlist, the next track is the first one (the missing entry
    /// behaves as index -1). An empty playlist resets to stopped.
    pub fn next(&mut self) {
        let Some(current) = self.playing.get().clone() else {
            return;
        };

        let next = {
            let list = self.playlist.get();
            if list.is_empty() {
                None
            } else {
                let index = match list.iter().position(|t| t.id() == current.id()) {
                    Some(i) => (i + 1) % list.len(),
                    None => 0,
                };
                Some(list[index].clone())
            }
        };

        match next {
            Some(track) => {
                debug!(from = current.id(), to = track.id(), "advancing to next track");
                self.playing.set(Some(track));
            }
            None => {
                warn!("next() with an empty playlist; stopping");
                self.playing.set(None);
            }
        }
    }

    /// Derive a filename for `track` and fire the download trigger.
    /// Returns the filename, or an error when the URL path ends in an
    /// empty segment and no name can be derived.
    pub fn download(&self, track: &Track, trigger: &dyn DownloadTrigger) -> Result<String> {
        let filename = download_name(track)?;
        info!(id = track.id(), filename = %filename, "triggering download");
        trigger.save(track.url(), &filename);
        Ok(filename)
    }
}

/// Local tracks keep their upload name; remote tracks use the last segment
/// of the URL path, which must not be empty.
fn download_name(track: &Track) -> Result<String> {
    match track {
        Track::Local { name, .. } => Ok(name.clone()),
        Track::Remote { url, .. } => {
            let last = url.path().rsplit('/').next().unwrap_or("");
            if last.is_empty() {
                return Err(Error::EmptyDownloadName(url.clone()));
            }
            Ok(last.to_string())
        }
    }
}
