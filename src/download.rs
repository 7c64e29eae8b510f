//! Save-as download collaborator.
//!
//! The store derives the filename and fires a [`DownloadTrigger`]; there is
//! no confirmation channel back, so trigger implementations log their own
//! failures instead of returning them.

use std::fs;
use std::path::PathBuf;

use tracing::{info, warn};
use url::Url;

use crate::resource::ObjectUrls;

/// Initiates a save-as action for a track URL. Fire-and-forget.
pub trait DownloadTrigger {
    fn save(&self, url: &Url, filename: &str);
}

/// Saves tracks into a downloads directory: object URLs are written out
/// from their in-memory bytes, `file:` URLs are copied. Remote schemes are
/// refused; fetching over the network is out of scope here.
pub struct FsDownloadTrigger {
    dir: PathBuf,
    objects: ObjectUrls,
}

impl FsDownloadTrigger {
    pub fn new(dir: impl Into<PathBuf>, objects: ObjectUrls) -> Self {
        Self {
            dir: dir.into(),
            objects,
        }
    }
}

impl DownloadTrigger for FsDownloadTrigger {
    fn save(&self, url: &Url, filename: &str) {
        if let Err(e) = fs::create_dir_all(&self.dir) {
            warn!(dir = %self.dir.display(), error = %e, "could not create downloads directory");
            return;
        }
        let target = self.dir.join(filename);

        match url.scheme() {
            "blob" => match self.objects.resolve(url) {
                Some(bytes) => match fs::write(&target, bytes.as_ref()) {
                    Ok(()) => info!(file = %target.display(), "saved local track"),
                    Err(e) => warn!(file = %target.display(), error = %e, "download write failed"),
                },
                None => warn!(url = %url, "download of unknown object URL"),
            },
            "file" => match url.to_file_path() {
                Ok(source) => match fs::copy(&source, &target) {
                    Ok(_) => info!(file = %target.display(), "copied file track"),
                    Err(e) => warn!(file = %target.display(), error = %e, "download copy failed"),
                },
                Err(()) => warn!(url = %url, "file URL has no local path"),
            },
            scheme => {
                warn!(url = %url, scheme, "refusing download; remote fetch is not supported");
            }
        }
    }
}
