use mic_iconset::{catalog, config::AssetsConfig};

fn main() -> anyhow::Result<()> {
    mic_iconset::init_logging();

    let config = AssetsConfig::from_env();
    let report =
        catalog::generate_menubar_icons(&config.menubar_dir(false), &config.menubar_dir(true))?;

    log::info!(
        "Done! {} menu bar glyphs written across {} imagesets.",
        report.images.len(),
        report.manifests.len()
    );
    Ok(())
}
