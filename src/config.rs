//! Where the asset catalog lives.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Overrides the asset catalog root when set to a non-empty path.
pub const ASSETS_DIR_ENV: &str = "MIC_ICONSET_ASSETS_DIR";

const APP_ICON_SET: &str = "AppIcon.appiconset";
const MENUBAR_SET: &str = "MenuBarIcon.imageset";
const MENUBAR_RECORDING_SET: &str = "MenuBarIconRecording.imageset";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetsConfig {
    pub root: PathBuf,
}

impl AssetsConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Environment override first, then the catalog next to this crate.
    pub fn from_env() -> Self {
        Self::resolve(std::env::var_os(ASSETS_DIR_ENV))
    }

    fn resolve(override_dir: Option<OsString>) -> Self {
        match override_dir.filter(|v| !v.is_empty()) {
            Some(dir) => Self::new(dir),
            None => Self::new(Self::default_root()),
        }
    }

    pub fn default_root() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("Govorilka")
            .join("Resources")
            .join("Assets.xcassets")
    }

    pub fn app_icon_dir(&self) -> PathBuf {
        self.root.join(APP_ICON_SET)
    }

    pub fn menubar_dir(&self, recording: bool) -> PathBuf {
        if recording {
            self.root.join(MENUBAR_RECORDING_SET)
        } else {
            self.root.join(MENUBAR_SET)
        }
    }
}
