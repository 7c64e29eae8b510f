//! Configuration loader and schema types.
//!
//! Validator policy, the media ticker interval and the downloads
//! directory are all set here, loaded once at startup. Validators are
//! built from [`ValidationSettings`] per instance; there is no global
//! default they fall back to.

mod load;
mod schema;

pub use load::{default_config_path, resolve_config_path};
pub use schema::*;
