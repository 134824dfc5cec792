use std::fs;

use censor_core::config::CONFIG_FILE_NAME;
use censor_core::{CensorConfig, CensorSensor, LocaleRegistry, Tier};

#[test]
fn missing_config_file_uses_defaults() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let cfg = CensorConfig::load(dir.path())?;
    assert_eq!(cfg.engine.locale, "en");
    assert!(cfg.engine.disabled_tiers.is_empty());
    assert!(cfg.masking.mask.is_none());
    assert!(cfg.words.add.is_empty());
    assert!(cfg.locales.is_empty());
    Ok(())
}

#[test]
fn config_registers_locale_and_applies_edits() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    fs::create_dir_all(dir.path().join("locales"))?;
    fs::write(
        dir.path().join("locales/fr.toml"),
        "[words]\nzut = 2\nmerde = 2\nmince = 4\n",
    )?;
    fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        r#"
[engine]
locale = "fr"
disabled_tiers = [4]

[masking]
mask = "[x]"

[words]
add = { frak = 5 }
remove = ["zut"]

[locales]
fr = "locales/fr.toml"
"#,
    )?;

    let cfg = CensorConfig::load(dir.path())?;
    assert_eq!(cfg.locales["fr"], dir.path().join("locales/fr.toml"));
    assert_eq!(cfg.engine.disabled_tiers, vec![Tier::PossiblyOffensive]);

    let registry = LocaleRegistry::with_builtins();
    let engine = CensorSensor::from_config(&cfg, registry.clone())?;
    assert_eq!(engine.locale(), "fr");
    assert!(registry.contains("fr"));

    assert!(engine.is_profane("merde"));
    assert!(engine.is_profane("frak"));
    assert!(!engine.is_profane("zut"));
    assert!(!engine.is_profane("mince"));
    assert!(!engine.is_tier_enabled(Tier::PossiblyOffensive));
    assert_eq!(engine.clean_profanity("oh merde"), "oh [x]");
    Ok(())
}

#[test]
fn invalid_tier_in_config_is_rejected() {
    let err = CensorConfig::from_toml_str("[engine]\ndisabled_tiers = [9]\n").unwrap_err();
    assert!(format!("{err:#}").contains("invalid tier id 9"), "{err:#}");
}

#[test]
fn unknown_locale_in_config_fails_engine_build() {
    let cfg = CensorConfig::from_toml_str("[engine]\nlocale = \"xx\"\n").unwrap();
    let err = CensorSensor::from_config(&cfg, LocaleRegistry::with_builtins()).unwrap_err();
    assert!(format!("{err:#}").contains("unknown locale `xx`"), "{err:#}");
}

#[test]
fn missing_locale_file_is_reported() {
    let cfg = CensorConfig::from_toml_str("[locales]\nde = \"/nonexistent/de.toml\"\n").unwrap();
    let err = CensorSensor::from_config(&cfg, LocaleRegistry::new()).unwrap_err();
    assert!(format!("{err:#}").contains("de.toml"), "{err:#}");
}

#[test]
fn explicit_file_resolves_paths_against_its_directory() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("custom.toml");
    fs::write(&path, "[locales]\nes = \"es.toml\"\n")?;
    let cfg = CensorConfig::from_file(&path)?;
    assert_eq!(cfg.locales["es"], dir.path().join("es.toml"));
    Ok(())
}
