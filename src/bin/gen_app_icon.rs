use mic_iconset::{catalog, config::AssetsConfig};

fn main() -> anyhow::Result<()> {
    mic_iconset::init_logging();

    let config = AssetsConfig::from_env();
    let report = catalog::generate_app_icons(&config.app_icon_dir())?;

    log::info!("Done! App icon generated ({} images).", report.images.len());
    Ok(())
}
