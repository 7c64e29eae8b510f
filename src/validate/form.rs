//! Raw form values as the input layer hands them over.

use std::sync::Arc;

use crate::resource::ObjectUrls;
use crate::track::NewTrack;

/// A candidate value from the form layer, before validation.
#[derive(Debug, Clone)]
pub enum FormValue {
    Text(String),
    File(FileUpload),
    Number(f64),
    Bool(bool),
    Missing,
}

impl FormValue {
    /// Short type name used in validation errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            FormValue::Text(_) => "string",
            FormValue::File(_) => "file",
            FormValue::Number(_) => "number",
            FormValue::Bool(_) => "boolean",
            FormValue::Missing => "undefined",
        }
    }
}

/// An uploaded file: a declared size and MIME type plus the bytes
/// themselves. `size` is what the upload declares, which is what the
/// validator checks; it normally equals `bytes.len()`.
#[derive(Debug, Clone)]
pub struct FileUpload {
    pub name: String,
    pub mime: String,
    pub size: u64,
    pub bytes: Arc<[u8]>,
}

impl FileUpload {
    /// Build an upload whose declared size is the byte count.
    pub fn from_bytes(name: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        let bytes: Arc<[u8]> = bytes.into();
        Self {
            name: name.into(),
            mime: mime.into(),
            size: bytes.len() as u64,
            bytes,
        }
    }

    /// Turn an accepted upload into a [`NewTrack`], minting its transient
    /// object URL. Call only after validation passed; the URL must later be
    /// revoked by the store when the track is removed.
    pub fn into_new_track(self, objects: &ObjectUrls) -> NewTrack {
        let url = objects.mint(self.bytes);
        NewTrack::Local {
            url,
            name: self.name,
        }
    }
}
