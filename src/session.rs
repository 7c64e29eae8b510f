//! Session glue: one store, one bridge, one media event pump.
//!
//! Mutations go through the session so the media element is kept in step
//! with the store: every playing-pointer emission is applied to the
//! bridge, and `Ended` events from the element advance the playlist. The
//! host calls [`Session::pump`] from its event loop to drain pending
//! media events.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::mpsc::Receiver;

use crate::download::DownloadTrigger;
use crate::error::{Error, Result};
use crate::player::{MediaElement, MediaEvent, PlaybackBridge, TimelineBounds};
use crate::resource::ObjectUrls;
use crate::store::PlaylistStore;
use crate::track::{NewTrack, Track};

pub struct Session<M: MediaElement> {
    store: PlaylistStore,
    bridge: PlaybackBridge<M>,
    events: Receiver<MediaEvent>,
    trigger: Box<dyn DownloadTrigger>,
    /// Playing-pointer emissions not yet applied to the bridge.
    pending: Rc<RefCell<Vec<Option<Track>>>>,
    ended: Rc<Cell<bool>>,
}

impl<M: MediaElement> Session<M> {
    /// Wire a store, a media element and its event channel together.
    /// `objects` must be the registry local-track URLs were minted from.
    pub fn new(
        objects: ObjectUrls,
        element: M,
        events: Receiver<MediaEvent>,
        trigger: Box<dyn DownloadTrigger>,
    ) -> Self {
        let mut store = PlaylistStore::new(objects);
        let mut bridge = PlaybackBridge::new(element);

        let pending: Rc<RefCell<Vec<Option<Track>>>> = Rc::default();
        let sink = pending.clone();
        store.subscribe_playing(move |playing| sink.borrow_mut().push(playing.clone()));
        // Drop the replayed initial None; the bridge starts idle anyway.
        pending.borrow_mut().clear();

        let ended = Rc::new(Cell::new(false));
        let flag = ended.clone();
        bridge.on_ended(move || flag.set(true));

        Self {
            store,
            bridge,
            events,
            trigger,
            pending,
            ended,
        }
    }

    pub fn store(&self) -> &PlaylistStore {
        &self.store
    }

    /// Mutable store access, e.g. for presentation subscriptions. Playback
    /// stays in sync only for mutations made through the session itself.
    pub fn store_mut(&mut self) -> &mut PlaylistStore {
        &mut self.store
    }

    pub fn bridge_mut(&mut self) -> &mut PlaybackBridge<M> {
        &mut self.bridge
    }

    /// Append a validated track to the playlist.
    pub fn add(&mut self, new_track: NewTrack) {
        self.store.add(new_track);
    }

    /// Start playing the track at `index`.
    pub fn play(&mut self, index: usize) -> Result<()> {
        let track = self.track_at(index)?;
        self.store.play(&track);
        self.apply_pending();
        Ok(())
    }

    pub fn stop(&mut self) {
        self.store.stop();
        self.apply_pending();
    }

    pub fn next(&mut self) {
        self.store.next();
        self.apply_pending();
    }

    /// Remove the track at `index`, tearing down playback when it was the
    /// one playing.
    pub fn remove(&mut self, index: usize) -> Result<()> {
        self.store.remove(index)?;
        self.apply_pending();
        Ok(())
    }

    /// Trigger a download of the track at `index`; returns the filename.
    pub fn download(&self, index: usize) -> Result<String> {
        let track = self.track_at(index)?;
        self.store.download(&track, self.trigger.as_ref())
    }

    /// Map a timeline click into a seek.
    pub fn seek(&mut self, click_x: f64, timeline: TimelineBounds) {
        self.bridge.seek(click_x, timeline);
    }

    /// Drain pending media events into the bridge. A track that played to
    /// its end advances the playlist.
    pub fn pump(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            self.bridge.handle_event(event);
            if self.ended.replace(false) {
                self.store.next();
                self.apply_pending();
            }
        }
    }

    fn track_at(&self, index: usize) -> Result<Track> {
        let len = self.store.playlist().len();
        self.store
            .playlist()
            .get(index)
            .cloned()
            .ok_or(Error::IndexOutOfRange { index, len })
    }

    fn apply_pending(&mut self) {
        let emissions: Vec<Option<Track>> = self.pending.borrow_mut().drain(..).collect();
        for playing in emissions {
            self.bridge.set_playing(playing.as_ref());
        }
    }
}
