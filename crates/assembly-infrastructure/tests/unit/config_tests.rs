//! Configuration loader tests
//!
//! Every load runs inside a `figment::Jail` so environment variables and the
//! working directory never leak between tests.

use assembly_application::AssemblerOptions;
use assembly_domain::NO_DEPENDENCIES;
use assembly_infrastructure::config::{AppConfig, ConfigBuilder, ConfigLoader, LoggingConfig};
use assembly_infrastructure::constants::DEFAULT_LOG_LEVEL;
use figment::Jail;
use tempfile::TempDir;

fn load(loader: &ConfigLoader) -> figment::Result<AppConfig> {
    loader.load().map_err(|e| e.to_string().into())
}

#[test]
fn test_config_loader_default() {
    Jail::expect_with(|_jail| {
        let config = load(&ConfigLoader::new())?;
        assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
        assert_eq!(config.resolution, AssemblerOptions::default());
        assert!(config.resolution.max_depth.is_none());
        Ok(())
    });
}

#[test]
fn test_config_from_toml_file() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "custom.toml",
            r#"
                [logging]
                level = "debug"

                [resolution]
                max_depth = 32
                strict_registration = true
            "#,
        )?;

        let config = load(&ConfigLoader::new().with_config_path("custom.toml"))?;
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.resolution.max_depth, Some(32));
        assert!(config.resolution.strict_registration);
        Ok(())
    });
}

#[test]
fn test_default_config_file_is_discovered() {
    Jail::expect_with(|jail| {
        jail.create_file("assembly.toml", "[resolution]\nmax_depth = 8\n")?;

        let config = load(&ConfigLoader::new())?;
        assert_eq!(config.resolution.max_depth, Some(8));
        Ok(())
    });
}

#[test]
fn test_env_overrides_file() {
    Jail::expect_with(|jail| {
        jail.create_file("assembly.toml", "[resolution]\nmax_depth = 8\n")?;
        jail.set_env("ASSEMBLY_RESOLUTION__MAX_DEPTH", "12");
        jail.set_env("ASSEMBLY_LOGGING__LEVEL", "warn");

        let config = load(&ConfigLoader::new())?;
        assert_eq!(config.resolution.max_depth, Some(12));
        assert_eq!(config.logging.level, "warn");
        Ok(())
    });
}

#[test]
fn test_custom_env_prefix() {
    Jail::expect_with(|jail| {
        jail.set_env("MYAPP_RESOLUTION__STRICT_REGISTRATION", "true");

        let config = load(&ConfigLoader::new().with_env_prefix("MYAPP"))?;
        assert!(config.resolution.strict_registration);
        Ok(())
    });
}

#[test]
fn test_missing_config_file_falls_back_to_defaults() {
    Jail::expect_with(|_jail| {
        let loader = ConfigLoader::new().with_config_path("does-not-exist.toml");
        assert!(loader.config_path().is_some());

        let config = load(&loader)?;
        assert_eq!(config, AppConfig::default());
        Ok(())
    });
}

#[test]
fn test_invalid_values_are_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("ASSEMBLY_RESOLUTION__MAX_DEPTH", "0");
        assert!(ConfigLoader::new().load().is_err());

        jail.set_env("ASSEMBLY_RESOLUTION__MAX_DEPTH", "4");
        jail.set_env("ASSEMBLY_LOGGING__LEVEL", "loud");
        assert!(ConfigLoader::new().load().is_err());
        Ok(())
    });
}

#[test]
fn test_config_save_load() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("saved.toml");

    let original = ConfigBuilder::new()
        .with_resolution(AssemblerOptions::default().with_max_depth(99))
        .with_logging(LoggingConfig {
            level: "trace".to_string(),
            ..LoggingConfig::default()
        })
        .build();
    ConfigLoader::new()
        .save_to_file(&original, &config_path)
        .unwrap();

    Jail::expect_with(|_jail| {
        let loaded = load(&ConfigLoader::new().with_config_path(&config_path))?;
        assert_eq!(loaded, original);
        Ok(())
    });
}

#[test]
fn test_builder_validation() {
    let invalid = ConfigBuilder::new()
        .with_resolution(AssemblerOptions::default().with_max_depth(0))
        .try_build();
    assert!(invalid.is_err());

    let valid = ConfigBuilder::new().try_build().unwrap();
    assert_eq!(valid, AppConfig::default());
}

#[test]
fn test_configured_assembler_uses_options() {
    let config = ConfigBuilder::new()
        .with_resolution(AssemblerOptions::default().with_strict_registration(true))
        .build();

    let mut assembler = config.assembler();
    assert!(assembler.options().strict_registration);
    assembler
        .register("a", NO_DEPENDENCIES, || 1)
        .unwrap()
        .assemble()
        .unwrap();
    assert!(assembler.register("a", NO_DEPENDENCIES, || 2).is_err());

    let comprehension = config.comprehension();
    assert!(comprehension.as_assembler().options().strict_registration);
}
