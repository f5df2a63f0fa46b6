// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layered carousel configuration: defaults, then a TOML file, then the environment.

use anyhow::{Context, Result};
use config::{Config, Environment, File, Source};
use understory_carousel::CarouselConfig;

/// File name looked up in the working directory when no path is given.
pub(crate) const DEFAULT_FILE: &str = "carousel.toml";

/// Prefix of overriding environment variables, as in `CAROUSEL_INTERVAL_MS`.
const ENV_PREFIX: &str = "CAROUSEL";

/// Loads the configuration.
///
/// `path` defaults to [`DEFAULT_FILE`]; a missing file is not an error. Variables
/// such as `CAROUSEL_INTERVAL_MS=500` override file values.
pub(crate) fn load(path: Option<&str>) -> Result<CarouselConfig> {
    let path = path.unwrap_or(DEFAULT_FILE);
    layered(
        File::with_name(path).required(false),
        Environment::with_prefix(ENV_PREFIX),
    )
    .with_context(|| format!("failed to load carousel settings from {path}"))
}

/// Stacks `file` over the built-in defaults and `env` over `file`.
fn layered<F>(file: F, env: Environment) -> Result<CarouselConfig>
where
    F: Source + Send + Sync + 'static,
{
    let settings = Config::builder()
        .add_source(file)
        .add_source(env.try_parsing(true))
        .build()
        .context("failed to read carousel settings")?;

    settings
        .try_deserialize()
        .context("invalid carousel settings")
}

#[cfg(test)]
mod tests {
    use config::{FileFormat, Map};
    use understory_carousel::HoverPolicy;

    use super::*;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let mut map = Map::new();
        for &(key, value) in vars {
            map.insert(key.to_owned(), value.to_owned());
        }
        Environment::with_prefix(ENV_PREFIX).source(Some(map))
    }

    fn toml(text: &'static str) -> impl Source + Send + Sync + 'static {
        File::from_str(text, FileFormat::Toml)
    }

    #[test]
    fn missing_file_yields_defaults() {
        let file = File::with_name("no-such-dir/carousel").required(false);
        let config = layered(file, env(&[])).unwrap();
        assert_eq!(config, CarouselConfig::default());
    }

    #[test]
    fn file_overrides_defaults() {
        let file = toml(
            r#"
            interval_ms = 500
            pause_on_hover = true
            hover_policy = "respect_user_pause"
            "#,
        );
        let config = layered(file, env(&[])).unwrap();

        assert_eq!(config.interval_ms, 500);
        assert!(config.pause_on_hover);
        assert_eq!(config.hover_policy, HoverPolicy::RespectUserPause);
        assert_eq!(config.slide_selector, CarouselConfig::DEFAULT_SLIDE_SELECTOR);
    }

    #[test]
    fn environment_overrides_file() {
        let file = toml("interval_ms = 500\nautoplay = true");
        let vars = env(&[("CAROUSEL_INTERVAL_MS", "750"), ("CAROUSEL_AUTOPLAY", "false")]);
        let config = layered(file, vars).unwrap();

        assert_eq!(config.interval_ms, 750);
        assert!(!config.autoplay);
    }

    #[test]
    fn invalid_value_is_reported_with_context() {
        let err = layered(toml(r#"interval_ms = "soon""#), env(&[])).unwrap_err();
        assert_eq!(err.to_string(), "invalid carousel settings");
    }
}
