//! Configuration for the slider and the catalog.
//!
//! Values come from, in increasing precedence: built-in defaults, a TOML
//! file, a `.env` file, and process environment variables.

use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use showcase_model::Slide;

use crate::error::{ConfigError, Result};

pub const ENV_SLIDER_INTERVAL: &str = "SHOWCASE_SLIDER_INTERVAL";
pub const ENV_SLIDER_AUTOPLAY: &str = "SHOWCASE_SLIDER_AUTOPLAY";
pub const ENV_SLIDER_INFINITE: &str = "SHOWCASE_SLIDER_INFINITE";
pub const ENV_PERSIST_IN_URL: &str = "SHOWCASE_PERSIST_IN_URL";

/// Behaviour knobs for the hero carousel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SliderConfig {
    pub autoplay: bool,
    #[serde(with = "duration_text")]
    pub interval: Duration,
    pub pause_on_hover: bool,
    pub pause_on_interaction: bool,
    pub infinite: bool,
    /// Slide transition length. Only forwarded to the presentation layer.
    #[serde(with = "duration_text")]
    pub animation_duration: Duration,
    /// Minimum horizontal travel, in pixels, for a touch to count as a swipe.
    pub touch_threshold: f32,
    pub keyboard_navigation: bool,
    pub show_progress_bar: bool,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            autoplay: true,
            interval: Duration::from_secs(3),
            pause_on_hover: true,
            pause_on_interaction: true,
            infinite: true,
            animation_duration: Duration::from_millis(600),
            touch_threshold: 50.0,
            keyboard_navigation: true,
            show_progress_bar: true,
        }
    }
}

impl SliderConfig {
    /// How long autoplay stays paused after a click on an arrow or indicator.
    pub fn interaction_resume_delay(&self) -> Duration {
        self.interval.saturating_mul(2)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    /// Mirror filter state into the page URL and read it back on load.
    pub persist_in_url: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            persist_in_url: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShowcaseConfig {
    pub slider: SliderConfig,
    pub catalog: CatalogConfig,
    pub slides: Vec<Slide>,
}

impl ShowcaseConfig {
    pub fn from_toml_str(raw: &str, origin: &str) -> Result<Self> {
        toml::from_str(raw).map_err(|source| ConfigError::Parse {
            origin: origin.to_string(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| {
            ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }
        })?;
        let config = Self::from_toml_str(&raw, &path.display().to_string())?;
        tracing::debug!(path = %path.display(), "loaded showcase config");
        Ok(config)
    }

    /// Full load: optional TOML file, then `.env`, then process environment,
    /// then validation.
    pub fn load_with_env(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        match dotenvy::dotenv() {
            Ok(env_path) => {
                tracing::debug!(path = %env_path.display(), "loaded .env")
            }
            Err(err) if err.not_found() => {}
            Err(err) => return Err(err.into()),
        }

        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply environment-style overrides through `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_SLIDER_INTERVAL) {
            self.slider.interval =
                humantime::parse_duration(raw.trim()).map_err(|source| {
                    ConfigError::InvalidDuration {
                        key: ENV_SLIDER_INTERVAL.to_string(),
                        value: raw.clone(),
                        source,
                    }
                })?;
        }
        if let Some(raw) = lookup(ENV_SLIDER_AUTOPLAY) {
            self.slider.autoplay = parse_bool(ENV_SLIDER_AUTOPLAY, &raw)?;
        }
        if let Some(raw) = lookup(ENV_SLIDER_INFINITE) {
            self.slider.infinite = parse_bool(ENV_SLIDER_INFINITE, &raw)?;
        }
        if let Some(raw) = lookup(ENV_PERSIST_IN_URL) {
            self.catalog.persist_in_url = parse_bool(ENV_PERSIST_IN_URL, &raw)?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.slider.interval.is_zero() {
            return Err(ConfigError::ZeroInterval);
        }
        let threshold = self.slider.touch_threshold;
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(ConfigError::InvalidTouchThreshold);
        }
        let mut seen = HashSet::new();
        for slide in &self.slides {
            if !seen.insert(slide.id) {
                return Err(ConfigError::DuplicateSlideId { id: slide.id });
            }
        }
        Ok(())
    }

    /// Configured slides, or the built-in deck when none are configured.
    pub fn slides_or_default(&self) -> Vec<Slide> {
        if self.slides.is_empty() {
            default_slides()
        } else {
            self.slides.clone()
        }
    }
}

fn parse_bool(key: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            key: key.to_string(),
            value: raw.to_string(),
        }),
    }
}

/// The deck shipped with the site template.
pub fn default_slides() -> Vec<Slide> {
    vec![
        Slide::new(
            1,
            "Welcome",
            "Industrial solutions backed by two decades of experience, \
             quality and innovation in every project.",
            "Get started",
            "index.html",
            "img/heroes/hero-bg-welcome.jpg",
        ),
        Slide::new(
            2,
            "About us",
            "A team of professionals committed to industrial excellence \
             and to the growth of our customers.",
            "Meet us",
            "about.html",
            "img/heroes/hero-bg-about.jpg",
        ),
        Slide::new(
            3,
            "Products",
            "A wide range of industrial products, from basic components \
             to tailored solutions.",
            "Browse products",
            "catalog.html",
            "img/heroes/hero-bg-catalog.jpg",
        ),
        Slide::new(
            4,
            "Services",
            "Consulting, maintenance and rollout of industrial solutions.",
            "Our services",
            "#services",
            "img/heroes/hero-bg-services.jpg",
        ),
        Slide::new(
            5,
            "Brands",
            "We work with the most trusted brands in the sector, with full \
             technical support.",
            "See brands",
            "#brands",
            "img/heroes/hero-bg-brands.jpg",
        ),
    ]
}

/// Durations as humantime strings (`"3s"`, `"600ms"`) or bare milliseconds.
mod duration_text {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Millis(u64),
    }

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer
            .serialize_str(&humantime::format_duration(*value).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        match Raw::deserialize(deserializer)? {
            Raw::Text(text) => humantime::parse_duration(text.trim())
                .map_err(|err| D::Error::custom(format!("{text}: {err}"))),
            Raw::Millis(ms) => Ok(Duration::from_millis(ms)),
        }
    }
}
