//! Application name, version and tagline, generated by `build.rs` from
//! `Cargo.toml`.

include!(concat!(env!("OUT_DIR"), "/app_metadata.rs"));

pub const APP_NAME: &str = APP_METADATA_NAME;
pub const APP_VERSION: &str = APP_METADATA_VERSION;
pub const APP_TAGLINE: &str = APP_METADATA_TAGLINE;
