use mic_iconset::catalog::{self, APP_ICON_SLOTS, GLYPH_SLOTS, PREVIEW_FILE, PREVIEW_SIZE};
use mic_iconset::config::AssetsConfig;
use mic_iconset::glyph;
use mic_iconset::manifest::Contents;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

fn png_names(dir: &Path) -> BTreeSet<String> {
    fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".png"))
        .collect()
}

#[test]
fn app_icon_set_matches_manifest() {
    let tmp = tempfile::tempdir().unwrap();
    let config = AssetsConfig::new(tmp.path().join("Assets.xcassets"));
    let dir = config.app_icon_dir();

    let report = catalog::generate_app_icons(&dir).unwrap();
    assert_eq!(report.images.len(), APP_ICON_SLOTS.len());

    let contents = Contents::read_from(&dir).unwrap();
    assert_eq!(contents.images.len(), APP_ICON_SLOTS.len());
    assert_eq!(contents.info.author, "xcode");
    assert!(contents.properties.is_none());

    // Same order as generation, one entry per file on disk.
    for ((entry, slot), path) in contents.images.iter().zip(APP_ICON_SLOTS).zip(&report.images) {
        assert_eq!(entry.filename, slot.filename());
        assert_eq!(entry.size.as_deref(), Some(slot.size_label));
        assert_eq!(entry.scale, slot.scale);
        assert_eq!(path.file_name().unwrap().to_string_lossy(), entry.filename);

        let img = image::open(path).unwrap().to_rgba8();
        assert_eq!(img.dimensions(), (slot.pixel_size, slot.pixel_size));
    }
    let listed: BTreeSet<String> = contents.images.iter().map(|e| e.filename.clone()).collect();
    assert_eq!(listed, png_names(&dir));

    let preview = report.preview.unwrap();
    assert!(preview.ends_with(Path::new("..").join(PREVIEW_FILE)));
    let preview_img = image::open(config.root.join(PREVIEW_FILE)).unwrap();
    assert_eq!(preview_img.width(), PREVIEW_SIZE);
}

#[test]
fn app_icon_png_round_trips_rendered_pixels() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("AppIcon.appiconset");
    catalog::generate_app_icons(&dir).unwrap();

    let on_disk = image::open(dir.join("icon_32_32.png")).unwrap().to_rgba8();
    assert_eq!(on_disk.as_raw(), mic_iconset::app_icon::render(32).as_raw());
}

#[test]
fn menubar_sets_are_written_with_template_manifests() {
    let tmp = tempfile::tempdir().unwrap();
    let config = AssetsConfig::new(tmp.path());
    let idle_dir = config.menubar_dir(false);
    let rec_dir = config.menubar_dir(true);

    let report = catalog::generate_menubar_icons(&idle_dir, &rec_dir).unwrap();
    assert_eq!(report.images.len(), GLYPH_SLOTS.len() * 2);
    assert_eq!(report.manifests.len(), 2);
    assert!(report.preview.is_none());

    for (dir, recording) in [(&idle_dir, false), (&rec_dir, true)] {
        let contents = Contents::read_from(dir).unwrap();
        let expected: Vec<String> = GLYPH_SLOTS.iter().map(|s| s.filename(recording)).collect();
        let listed: Vec<String> = contents.images.iter().map(|e| e.filename.clone()).collect();
        assert_eq!(listed, expected);
        assert_eq!(
            listed.iter().cloned().collect::<BTreeSet<_>>(),
            png_names(dir)
        );
        assert_eq!(
            contents.properties.unwrap().template_rendering_intent,
            "template"
        );

        for slot in GLYPH_SLOTS {
            let img = image::open(dir.join(slot.filename(recording)))
                .unwrap()
                .to_rgba8();
            assert_eq!(img.dimensions(), (slot.pixel_size, slot.pixel_size));
            assert_eq!(
                img.as_raw(),
                glyph::render(slot.pixel_size, glyph::TEMPLATE_COLOR, recording).as_raw()
            );
        }
    }
}

#[test]
fn unwritable_target_reports_path() {
    let tmp = tempfile::tempdir().unwrap();
    let blocker = tmp.path().join("blocker");
    fs::write(&blocker, b"not a directory").unwrap();

    let err = catalog::generate_app_icons(&blocker.join("AppIcon.appiconset")).unwrap_err();
    assert!(format!("{err:#}").contains("blocker"));
}
