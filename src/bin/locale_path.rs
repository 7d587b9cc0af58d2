//! locale-path - inspect and rewrite language-prefixed site paths
//!
//! Usage:
//!   cargo run --bin locale-path -- resolve /en/hizmetler
//!   cargo run --bin locale-path -- strip /en/hizmetler
//!   cargo run --bin locale-path -- translate /tr/galeri en
//!   cargo run --bin locale-path -- alternates /tr/galeri
//!   cargo run --bin locale-path -- switch en /tr/galeri   # persists the preference
//!   cargo run --bin locale-path -- current                # stored preference or default
//!
//! Optional:
//! - PREFERENCES_FILE (defaults to data/preferences.json)

use anyhow::{bail, Context, Result};
use clinic_site::config::Config;
use clinic_site::i18n::Language;
use clinic_site::preferences::FileLocaleStore;
use clinic_site::routing::{
    alternates, resolve, strip, switch_language, translate, LocaleStore, MemoryPathProvider,
};
use tracing::info;

const USAGE: &str = "usage: locale-path <resolve|strip|alternates> <path>\n       \
locale-path translate <path> <code>\n       \
locale-path switch <code> <current-path>\n       \
locale-path current";

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("clinic_site=warn".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    match args.as_slice() {
        ["resolve", path] => println!("{}", resolve(path)),
        ["strip", path] => println!("{}", strip(path)),
        ["translate", path, code] => {
            let language = parse_language(code)?;
            println!("{}", translate(path, language));
        }
        ["alternates", path] => {
            for (language, translated) in alternates(path) {
                println!("{}\t{}", language, translated);
            }
        }
        ["switch", code, current] => {
            let language = parse_language(code)?;
            let config = Config::from_env()?;
            let mut store = FileLocaleStore::open_at(&config.preferences_file, current)
                .context("Failed to open preferences")?;
            let mut paths = MemoryPathProvider::new(*current);

            match switch_language(language, &mut paths, &mut store) {
                Some(target) => println!("{}", target),
                None => println!("{}", current),
            }
            info!("Preference saved to {}", store.path().display());
        }
        ["current"] => {
            let config = Config::from_env()?;
            let store = FileLocaleStore::open(&config.preferences_file)
                .context("Failed to open preferences")?;
            println!("{}", store.get());
        }
        _ => bail!(USAGE),
    }

    Ok(())
}

fn parse_language(code: &str) -> Result<Language> {
    code.parse::<Language>()
        .with_context(|| format!("Cannot switch to '{}'", code))
}
