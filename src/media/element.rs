//! The rodio media element.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use lofty::file::AudioFile;
use rodio::{OutputStream, OutputStreamBuilder, Sink};
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

use crate::player::{MediaElement, MediaEvent};
use crate::resource::ObjectUrls;

use super::sink::{SourceData, create_sink_at};

/// Failures while bringing up the audio output.
#[derive(Debug, Error)]
pub enum MediaError {
    #[error("no usable audio output device: {0}")]
    Device(String),
}

/// A [`MediaElement`] over a rodio output stream.
///
/// Time updates and the ended signal come from a ticker thread through the
/// channel returned by [`RodioElement::new`]; the host pumps it into the
/// playback bridge. Elapsed time is tracked as accumulated play time plus
/// the time since the last unpause; seeking rebuilds the sink with a skip
/// into a fresh decode.
pub struct RodioElement {
    stream: OutputStream,
    objects: ObjectUrls,
    source: Option<Url>,
    data: Option<SourceData>,
    sink: Arc<Mutex<Option<Sink>>>,
    duration: Option<Duration>,
    accumulated: Duration,
    started_at: Option<Instant>,
    shutdown: Arc<AtomicBool>,
}

impl RodioElement {
    /// Open the default output device and start the time-update ticker.
    /// `tick` is the interval between `TimeUpdate` events while playing.
    pub fn new(
        objects: ObjectUrls,
        tick: Duration,
    ) -> Result<(Self, Receiver<MediaEvent>), MediaError> {
        let mut stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| MediaError::Device(e.to_string()))?;
        // rodio logs to stderr when OutputStream is dropped. Noisy for hosts.
        stream.log_on_drop(false);

        let (tx, rx) = mpsc::channel();
        let sink: Arc<Mutex<Option<Sink>>> = Arc::default();
        let shutdown = Arc::new(AtomicBool::new(false));
        spawn_ticker(tick, tx, sink.clone(), shutdown.clone());

        Ok((
            Self {
                stream,
                objects,
                source: None,
                data: None,
                sink,
                duration: None,
                accumulated: Duration::ZERO,
                started_at: None,
                shutdown,
            },
            rx,
        ))
    }

    fn swap_sink(&mut self, new: Option<Sink>) {
        if let Ok(mut guard) = self.sink.lock() {
            if let Some(old) = guard.take() {
                old.stop();
            }
            *guard = new;
        }
    }
}

impl MediaElement for RodioElement {
    fn set_source(&mut self, url: Option<Url>) {
        self.source = url;
    }

    fn load(&mut self) {
        self.duration = None;
        self.accumulated = Duration::ZERO;
        self.started_at = None;
        self.data = None;
        self.swap_sink(None);

        let Some(url) = self.source.as_ref() else {
            return;
        };
        let Some(data) = resolve_source(&self.objects, url) else {
            return;
        };
        let Some((sink, decoded_total)) = create_sink_at(&self.stream, &data, Duration::ZERO)
        else {
            return;
        };

        self.duration = probe_duration(&data).or(decoded_total);
        debug!(url = %url, duration = ?self.duration, "loaded source");
        self.data = Some(data);
        self.swap_sink(Some(sink));
    }

    fn play(&mut self) {
        if let Ok(guard) = self.sink.lock() {
            if let Some(sink) = guard.as_ref() {
                sink.play();
                if self.started_at.is_none() {
                    self.started_at = Some(Instant::now());
                }
            }
        }
    }

    fn pause(&mut self) {
        if let Ok(guard) = self.sink.lock() {
            if let Some(sink) = guard.as_ref() {
                if !sink.is_paused() {
                    sink.pause();
                }
            }
        }
        if let Some(started) = self.started_at.take() {
            self.accumulated += started.elapsed();
        }
    }

    fn paused(&self) -> bool {
        self.sink
            .lock()
            .map(|guard| guard.as_ref().map_or(true, |sink| sink.is_paused()))
            .unwrap_or(true)
    }

    fn position(&self) -> Duration {
        self.accumulated + self.started_at.map_or(Duration::ZERO, |s| s.elapsed())
    }

    fn set_position(&mut self, position: Duration) {
        let was_playing = !self.paused();

        let rebuilt = match self.data.as_ref() {
            Some(data) => create_sink_at(&self.stream, data, position),
            None => None,
        };
        let Some((sink, _)) = rebuilt else {
            return;
        };

        if was_playing {
            sink.play();
            self.started_at = Some(Instant::now());
        } else {
            self.started_at = None;
        }
        self.accumulated = position;
        self.swap_sink(Some(sink));
    }

    fn duration(&self) -> Option<Duration> {
        self.duration
    }
}

impl Drop for RodioElement {
    fn drop(&mut self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }
}

/// Map a source URL to playable data. Only `blob:` (registry bytes) and
/// `file:` (local path) schemes are supported.
fn resolve_source(objects: &ObjectUrls, url: &Url) -> Option<SourceData> {
    match url.scheme() {
        "blob" => match objects.resolve(url) {
            Some(bytes) => Some(SourceData::Memory(bytes)),
            None => {
                warn!(url = %url, "object URL is not registered (already revoked?)");
                None
            }
        },
        "file" => match url.to_file_path() {
            Ok(path) => Some(SourceData::File(path)),
            Err(()) => {
                warn!(url = %url, "file URL has no local path");
                None
            }
        },
        scheme => {
            warn!(url = %url, scheme, "scheme not supported by the rodio element");
            None
        }
    }
}

/// Total length of the source, when a metadata probe can tell. The decoder
/// fallback in `load` covers formats lofty cannot read from a path.
fn probe_duration(data: &SourceData) -> Option<Duration> {
    match data {
        SourceData::File(path) => lofty::read_from_path(path)
            .ok()
            .map(|tagged| tagged.properties().duration()),
        SourceData::Memory(_) => None,
    }
}

fn spawn_ticker(
    tick: Duration,
    tx: Sender<MediaEvent>,
    sink: Arc<Mutex<Option<Sink>>>,
    shutdown: Arc<AtomicBool>,
) {
    thread::spawn(move || {
        loop {
            thread::sleep(tick);
            if shutdown.load(Ordering::Relaxed) {
                break;
            }

            let mut guard = sink.lock().unwrap();
            let (ended, ticking) = match guard.as_ref() {
                Some(sink) if sink.empty() => (true, false),
                Some(sink) => (false, !sink.is_paused()),
                None => (false, false),
            };
            if ended {
                // Report the drain once; the host reloads or stops from here.
                guard.take();
            }
            drop(guard);

            let sent = if ended {
                tx.send(MediaEvent::Ended)
            } else if ticking {
                tx.send(MediaEvent::TimeUpdate)
            } else {
                Ok(())
            };
            if sent.is_err() {
                // Receiver gone; the element was dropped without shutdown.
                break;
            }
        }
    });
}
