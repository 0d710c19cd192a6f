//! `Contents.json` sidecar for asset-catalog directories.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const MANIFEST_FILE: &str = "Contents.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contents {
    pub images: Vec<ImageEntry>,
    pub info: Info,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Properties>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageEntry {
    pub filename: String,
    pub idiom: String,
    pub scale: String,
    /// Logical point size; only app icon sets carry it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Info {
    pub author: String,
    pub version: u32,
}

impl Default for Info {
    fn default() -> Self {
        Self {
            author: "xcode".into(),
            version: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Properties {
    pub template_rendering_intent: String,
}

impl ImageEntry {
    /// App icon slot (`idiom: mac`).
    pub fn mac(filename: impl Into<String>, size: &str, scale: &str) -> Self {
        Self {
            filename: filename.into(),
            idiom: "mac".into(),
            scale: scale.into(),
            size: Some(size.into()),
        }
    }

    /// Imageset slot (`idiom: universal`).
    pub fn universal(filename: impl Into<String>, scale: &str) -> Self {
        Self {
            filename: filename.into(),
            idiom: "universal".into(),
            scale: scale.into(),
            size: None,
        }
    }
}

impl Contents {
    /// Entries keep the order they were generated in.
    pub fn new(images: Vec<ImageEntry>) -> Self {
        Self {
            images,
            info: Info::default(),
            properties: None,
        }
    }

    /// Mark the set as a template image so the OS tints it.
    pub fn template(mut self) -> Self {
        self.properties = Some(Properties {
            template_rendering_intent: "template".into(),
        });
        self
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize Contents.json")
    }

    /// Write `Contents.json` into `dir` and return its path.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(MANIFEST_FILE);
        let mut json = self.to_json()?;
        json.push('\n');
        fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }

    pub fn read_from(dir: &Path) -> Result<Self> {
        let path = dir.join(MANIFEST_FILE);
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("Malformed {}", path.display()))
    }
}
