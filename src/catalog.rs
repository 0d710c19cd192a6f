// ---------------------------------------------------------------------------
// Catalog — fixed output tables and the generation runs that write them
// ---------------------------------------------------------------------------

use crate::manifest::{Contents, ImageEntry};
use crate::{app_icon, glyph};
use anyhow::{ensure, Context, Result};
use image::{ImageFormat, RgbaImage};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// Preview written next to the app icon set.
pub const PREVIEW_FILE: &str = "app-icon-preview.png";
pub const PREVIEW_SIZE: u32 = 512;

/// One app icon image: rendered pixel size, logical size label, display scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSlot {
    pub pixel_size: u32,
    pub size_label: &'static str,
    pub scale: &'static str,
}

impl IconSlot {
    const fn new(pixel_size: u32, size_label: &'static str, scale: &'static str) -> Self {
        Self {
            pixel_size,
            size_label,
            scale,
        }
    }

    /// `icon_16_16.png`, `icon_16_16@2x.png`, …
    pub fn filename(&self) -> String {
        let base = self.size_label.replace('x', "_");
        if self.scale == "1x" {
            format!("icon_{base}.png")
        } else {
            format!("icon_{base}@{}.png", self.scale)
        }
    }
}

/// macOS app icon set, in manifest order.
pub const APP_ICON_SLOTS: [IconSlot; 10] = [
    IconSlot::new(16, "16x16", "1x"),
    IconSlot::new(32, "16x16", "2x"),
    IconSlot::new(32, "32x32", "1x"),
    IconSlot::new(64, "32x32", "2x"),
    IconSlot::new(128, "128x128", "1x"),
    IconSlot::new(256, "128x128", "2x"),
    IconSlot::new(256, "256x256", "1x"),
    IconSlot::new(512, "256x256", "2x"),
    IconSlot::new(512, "512x512", "1x"),
    IconSlot::new(1024, "512x512", "2x"),
];

/// One menu-bar glyph resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphSlot {
    pub pixel_size: u32,
    pub suffix: &'static str,
    pub scale: &'static str,
}

impl GlyphSlot {
    const fn new(pixel_size: u32, suffix: &'static str, scale: &'static str) -> Self {
        Self {
            pixel_size,
            suffix,
            scale,
        }
    }

    /// `menubar@2x.png` or `menubar-recording@2x.png`.
    pub fn filename(&self, recording: bool) -> String {
        let stem = if recording { "menubar-recording" } else { "menubar" };
        format!("{stem}{}.png", self.suffix)
    }
}

pub const GLYPH_SLOTS: [GlyphSlot; 3] = [
    GlyphSlot::new(16, "", "1x"),
    GlyphSlot::new(32, "@2x", "2x"),
    GlyphSlot::new(48, "@3x", "3x"),
];

/// Everything a run wrote, in the order it was written.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub images: Vec<PathBuf>,
    pub manifests: Vec<PathBuf>,
    pub preview: Option<PathBuf>,
}

impl GenerationReport {
    fn absorb(&mut self, other: GenerationReport) {
        self.images.extend(other.images);
        self.manifests.extend(other.manifests);
        if other.preview.is_some() {
            self.preview = other.preview;
        }
    }
}

// ---------------------------------------------------------------------------
// App icon set
// ---------------------------------------------------------------------------

pub fn generate_app_icons(dir: &Path) -> Result<GenerationReport> {
    generate_app_icons_with(dir, &APP_ICON_SLOTS)
}

/// Render `slots` into `dir`, write `Contents.json`, then the preview in the
/// parent directory.
pub fn generate_app_icons_with(dir: &Path, slots: &[IconSlot]) -> Result<GenerationReport> {
    create_dir(dir)?;

    let mut report = GenerationReport::default();
    let mut entries = Vec::with_capacity(slots.len());

    for slot in slots {
        ensure!(
            slot.pixel_size > 0,
            "Icon size must be positive ({} @ {})",
            slot.size_label,
            slot.scale
        );
        let icon = app_icon::render(slot.pixel_size);
        let path = dir.join(slot.filename());
        save_png(&icon, &path)?;
        info!(
            "Created: {} ({}x{})",
            path.display(),
            slot.pixel_size,
            slot.pixel_size
        );

        entries.push(ImageEntry::mac(slot.filename(), slot.size_label, slot.scale));
        report.images.push(path);
    }

    let manifest = Contents::new(entries).write_to(dir)?;
    info!("Created: {}", manifest.display());
    report.manifests.push(manifest);

    let preview_path = dir.join("..").join(PREVIEW_FILE);
    save_png(&app_icon::render(PREVIEW_SIZE), &preview_path)?;
    info!("Preview saved: {}", preview_path.display());
    report.preview = Some(preview_path);

    Ok(report)
}

// ---------------------------------------------------------------------------
// Menu-bar glyphs
// ---------------------------------------------------------------------------

/// Idle set into `idle_dir`, recording set into `recording_dir`, each with
/// its own template manifest.
pub fn generate_menubar_icons(
    idle_dir: &Path,
    recording_dir: &Path,
) -> Result<GenerationReport> {
    let mut report = generate_glyph_set(idle_dir, &GLYPH_SLOTS, false)?;
    report.absorb(generate_glyph_set(recording_dir, &GLYPH_SLOTS, true)?);
    Ok(report)
}

pub fn generate_glyph_set(
    dir: &Path,
    slots: &[GlyphSlot],
    recording: bool,
) -> Result<GenerationReport> {
    create_dir(dir)?;

    let mut report = GenerationReport::default();
    let mut entries = Vec::with_capacity(slots.len());

    for slot in slots {
        ensure!(slot.pixel_size > 0, "Glyph size must be positive ({})", slot.scale);
        let img = glyph::render(slot.pixel_size, glyph::TEMPLATE_COLOR, recording);
        let filename = slot.filename(recording);
        let path = dir.join(&filename);
        save_png(&img, &path)?;
        info!("Created: {}", path.display());

        entries.push(ImageEntry::universal(filename, slot.scale));
        report.images.push(path);
    }

    let manifest = Contents::new(entries).template().write_to(dir)?;
    info!("Created: {}", manifest.display());
    report.manifests.push(manifest);

    Ok(report)
}

// ---------------------------------------------------------------------------
// IO helpers
// ---------------------------------------------------------------------------

fn create_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))
}

fn save_png(img: &RgbaImage, path: &Path) -> Result<()> {
    img.save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("Failed to save {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_filenames() {
        let names: Vec<_> = APP_ICON_SLOTS.iter().map(IconSlot::filename).collect();
        assert_eq!(names[0], "icon_16_16.png");
        assert_eq!(names[1], "icon_16_16@2x.png");
        assert_eq!(names[9], "icon_512_512@2x.png");

        let mut unique = names.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), names.len());
    }

    #[test]
    fn test_retina_slots_double_logical_size() {
        for slot in APP_ICON_SLOTS {
            let logical: u32 = slot.size_label.split('x').next().unwrap().parse().unwrap();
            let factor = if slot.scale == "2x" { 2 } else { 1 };
            assert_eq!(slot.pixel_size, logical * factor);
        }
    }

    #[test]
    fn test_glyph_filenames() {
        assert_eq!(GLYPH_SLOTS[0].filename(false), "menubar.png");
        assert_eq!(GLYPH_SLOTS[1].filename(false), "menubar@2x.png");
        assert_eq!(GLYPH_SLOTS[2].filename(true), "menubar-recording@3x.png");
    }

    #[test]
    fn test_zero_size_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let bad = [IconSlot::new(0, "0x0", "1x")];
        let err = generate_app_icons_with(dir.path(), &bad).unwrap_err();
        assert!(err.to_string().contains("positive"));
    }
}
