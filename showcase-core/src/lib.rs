//! # Showcase Core
//!
//! Headless interaction engine for a storefront page: the hero carousel
//! and the product catalog filter. Both components are plain state
//! machines driven by the host (a DOM binding, a test, or the
//! `showcasectl` CLI); neither touches a DOM directly.
//!
//! ## Architecture
//!
//! - [`carousel`]: autoplay state machine, touch/keyboard/pointer input,
//!   per-slide visibility flags and the injected slider markup
//! - [`catalog`]: search, category filter, per-category sort and the URL
//!   query codec that mirrors filter state into the address bar
//! - [`scheduler`]: the deterministic timer wheel the carousel owns
//! - [`config`]: TOML + environment configuration
//!
//! ## Examples
//!
//! ```
//! use std::time::Duration;
//! use showcase_core::{
//!     carousel::CarouselController,
//!     config::{SliderConfig, default_slides},
//! };
//!
//! let mut mount = String::new();
//! let mut carousel =
//!     CarouselController::mount(Some(&mut mount), SliderConfig::default(), default_slides())
//!         .expect("slides configured");
//! carousel.advance(Duration::from_secs(3));
//! assert_eq!(carousel.current_slide(), 1);
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

pub mod carousel;
pub mod catalog;
pub mod config;
pub mod error;
pub mod scheduler;

pub use showcase_model as model;

pub use carousel::{CarouselController, Playback};
pub use catalog::{Catalog, RenderSummary};
pub use config::{CatalogConfig, ShowcaseConfig, SliderConfig};
pub use error::{CatalogLoadError, ConfigError};
