use std::cell::RefCell;
use std::rc::Rc;

use url::Url;

use super::*;
use crate::download::DownloadTrigger;
use crate::error::Error;
use crate::resource::ObjectUrls;
use crate::track::{NewTrack, Track};

fn remote(path: &str) -> NewTrack {
    NewTrack::Remote {
        url: Url::parse(&format!("https://x.com{path}")).unwrap(),
    }
}

fn store_with(tracks: &[&str]) -> PlaylistStore {
    let mut store = PlaylistStore::new(ObjectUrls::new());
    for path in tracks {
        store.add(remote(path));
    }
    store
}

#[derive(Default)]
struct RecordingTrigger {
    calls: RefCell<Vec<(Url, String)>>,
}

impl DownloadTrigger for RecordingTrigger {
    fn save(&self, url: &Url, filename: &str) {
        self.calls.borrow_mut().push((url.clone(), filename.into()));
    }
}

#[test]
fn add_appends_in_call_order_with_fresh_ids() {
    let store = store_with(&["/a.mp3", "/b.mp3", "/c.mp3"]);

    let list = store.playlist();
    assert_eq!(list.len(), 3);
    let paths: Vec<&str> = list.iter().map(|t| t.url().path()).collect();
    assert_eq!(paths, vec!["/a.mp3", "/b.mp3", "/c.mp3"]);

    assert_ne!(list[0].id(), list[1].id());
    assert_ne!(list[1].id(), list[2].id());
}

#[test]
fn remove_out_of_range_is_a_deterministic_error() {
    let mut store = store_with(&["/a.mp3"]);
    assert_eq!(
        store.remove(1),
        Err(Error::IndexOutOfRange { index: 1, len: 1 })
    );
    assert_eq!(
        store.remove(usize::MAX),
        Err(Error::IndexOutOfRange {
            index: usize::MAX,
            len: 1
        })
    );
    // The failed calls changed nothing.
    assert_eq!(store.playlist().len(), 1);
}

#[test]
fn remove_splices_without_reordering() {
    let mut store = store_with(&["/a.mp3", "/b.mp3", "/c.mp3"]);
    store.remove(1).unwrap();
    let paths: Vec<&str> = store.playlist().iter().map(|t| t.url().path()).collect();
    assert_eq!(paths, vec!["/a.mp3", "/c.mp3"]);
}

#[test]
fn removing_the_playing_track_resets_the_pointer_and_releases_its_url() {
    let objects = ObjectUrls::new();
    let mut store = PlaylistStore::new(objects.clone());
    let url = objects.mint(vec![1u8, 2, 3]);
    store.add(NewTrack::Local {
        url: url.clone(),
        name: "song.mp3".into(),
    });
    store.add(remote("/b.mp3"));

    let local = store.playlist()[0].clone();
    store.play(&local);

    store.remove(0).unwrap();

    assert!(store.playing().is_none());
    assert_eq!(store.playlist().len(), 1);
    // Released exactly once: the handle is gone now and a second revoke
    // would fail.
    assert_eq!(objects.live(), 0);
    assert!(objects.resolve(&url).is_none());
}

#[test]
fn removing_another_track_leaves_the_pointer_alone() {
    let mut store = store_with(&["/a.mp3", "/b.mp3"]);
    let b = store.playlist()[1].clone();
    store.play(&b);

    store.remove(0).unwrap();

    assert_eq!(store.playing().map(Track::id), Some(b.id()));
}

#[test]
fn play_stores_a_snapshot_not_a_live_reference() {
    let mut store = store_with(&["/a.mp3", "/b.mp3", "/c.mp3"]);
    let b = store.playlist()[1].clone();
    store.play(&b);

    // Later playlist mutation does not touch the snapshot.
    store.remove(0).unwrap();
    assert_eq!(store.playing(), Some(&b));
}

#[test]
fn stop_is_idempotent() {
    let mut store = store_with(&["/a.mp3"]);
    let a = store.playlist()[0].clone();
    store.play(&a);

    store.stop();
    assert!(store.playing().is_none());
    store.stop();
    assert!(store.playing().is_none());
}

#[test]
fn next_advances_and_wraps_around() {
    let mut store = store_with(&["/a.mp3", "/b.mp3", "/c.mp3"]);
    let last = store.playlist()[2].clone();
    store.play(&last);

    store.next();
    assert_eq!(store.playing().map(|t| t.url().path()), Some("/a.mp3"));

    store.next();
    assert_eq!(store.playing().map(|t| t.url().path()), Some("/b.mp3"));
}

#[test]
fn next_while_stopped_is_a_noop() {
    let mut store = store_with(&["/a.mp3"]);
    store.next();
    assert!(store.playing().is_none());
}

#[test]
fn next_with_a_departed_playing_id_falls_back_to_the_first_track() {
    let mut store = store_with(&["/a.mp3", "/b.mp3"]);
    // `play` does not check membership, so the pointer can name a track
    // the playlist never had.
    let foreign = remote("/elsewhere.mp3").with_id("zzzzzzzzzzzzzzzz".into());
    store.play(&foreign);

    store.next();
    assert_eq!(store.playing().map(|t| t.url().path()), Some("/a.mp3"));
}

#[test]
fn next_with_an_empty_playlist_resets_to_stopped() {
    let mut store = store_with(&[]);
    let foreign = remote("/x.mp3").with_id("zzzzzzzzzzzzzzzz".into());
    store.play(&foreign);

    store.next();
    assert!(store.playing().is_none());
}

#[test]
fn download_uses_the_local_name() {
    let objects = ObjectUrls::new();
    let mut store = PlaylistStore::new(objects.clone());
    let url = objects.mint(vec![0u8]);
    store.add(NewTrack::Local {
        url: url.clone(),
        name: "My Song.mp3".into(),
    });

    let trigger = RecordingTrigger::default();
    let name = store
        .download(&store.playlist()[0].clone(), &trigger)
        .unwrap();

    assert_eq!(name, "My Song.mp3");
    assert_eq!(*trigger.calls.borrow(), vec![(url, name)]);
}

#[test]
fn download_uses_the_last_remote_path_segment() {
    let store = store_with(&["/folder/song.mp3"]);
    let trigger = RecordingTrigger::default();
    let name = store
        .download(&store.playlist()[0].clone(), &trigger)
        .unwrap();
    assert_eq!(name, "song.mp3");
}

#[test]
fn download_fails_on_a_trailing_slash_instead_of_a_blank_name() {
    let store = store_with(&["/folder/"]);
    let trigger = RecordingTrigger::default();
    let result = store.download(&store.playlist()[0].clone(), &trigger);

    assert!(matches!(result, Err(Error::EmptyDownloadName(_))));
    assert!(trigger.calls.borrow().is_empty());
}

#[test]
fn playlist_subscribers_replay_then_follow_changes() {
    let mut store = store_with(&["/a.mp3"]);
    let seen: Rc<RefCell<Vec<usize>>> = Rc::default();
    let sink = seen.clone();
    store.subscribe_playlist(move |list| sink.borrow_mut().push(list.len()));

    store.add(remote("/b.mp3"));
    store.remove(0).unwrap();

    assert_eq!(*seen.borrow(), vec![1, 2, 1]);
}

#[test]
fn playing_subscribers_see_every_pointer_transition() {
    let mut store = store_with(&["/a.mp3"]);
    let a = store.playlist()[0].clone();

    let seen: Rc<RefCell<Vec<Option<String>>>> = Rc::default();
    let sink = seen.clone();
    store.subscribe_playing(move |playing| {
        sink.borrow_mut()
            .push(playing.as_ref().map(|t| t.id().to_string()));
    });

    store.play(&a);
    store.stop();

    assert_eq!(
        *seen.borrow(),
        vec![None, Some(a.id().to_string()), None]
    );
}
