//! Utilities for creating `rodio` sinks from resolved sources.
//!
//! The helpers here encapsulate decoding a source and preparing a paused
//! `Sink` at the requested start position.

use std::fs::File;
use std::io::{BufReader, Cursor};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use rodio::{Decoder, OutputStream, Sink, Source};
use tracing::warn;

/// A playable source after URL resolution.
pub(super) enum SourceData {
    /// Bytes behind a minted object URL.
    Memory(Arc<[u8]>),
    /// A local file path from a `file:` URL.
    File(PathBuf),
}

/// Create a paused `Sink` for `data` that starts playback at `start_at`,
/// along with the decoder's idea of the total duration when it has one.
/// Returns `None` when the source cannot be opened or decoded.
pub(super) fn create_sink_at(
    stream: &OutputStream,
    data: &SourceData,
    start_at: Duration,
) -> Option<(Sink, Option<Duration>)> {
    match data {
        SourceData::Memory(bytes) => {
            let decoder = match Decoder::new(Cursor::new(bytes.clone())) {
                Ok(decoder) => decoder,
                Err(e) => {
                    warn!(error = %e, "could not decode in-memory source");
                    return None;
                }
            };
            let total = decoder.total_duration();
            // `skip_duration` is our seeking primitive; even Duration::ZERO is fine.
            let source = decoder.skip_duration(start_at);
            let sink = Sink::connect_new(stream.mixer());
            sink.append(source);
            sink.pause();
            Some((sink, total))
        }
        SourceData::File(path) => {
            let file = match File::open(path) {
                Ok(file) => file,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "could not open source file");
                    return None;
                }
            };
            let decoder = match Decoder::new(BufReader::new(file)) {
                Ok(decoder) => decoder,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "could not decode source file");
                    return None;
                }
            };
            let total = decoder.total_duration();
            let source = decoder.skip_duration(start_at);
            let sink = Sink::connect_new(stream.mixer());
            sink.append(source);
            sink.pause();
            Some((sink, total))
        }
    }
}
