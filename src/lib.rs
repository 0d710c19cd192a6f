//! Procedural icon assets for the voice recorder app: the multi-resolution
//! app icon set and the monochrome menu-bar glyphs, with their
//! `Contents.json` manifests.

pub mod app_icon;
pub mod canvas;
pub mod catalog;
pub mod config;
pub mod glyph;
pub mod manifest;

/// Log to stderr at `info` unless `RUST_LOG` says otherwise.
pub fn init_logging() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
