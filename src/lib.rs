//! folio: content loader for a personal portfolio site
//!
//! Loads blog posts (markdown files with a front-matter header, or a
//! JSON array) and certifications, sorts and renders them into HTML
//! fragments, and models the page's scroll/menu/filter behaviour as
//! explicit handlers.

pub mod commands;
pub mod config;
pub mod contact;
pub mod content;
pub mod helpers;
pub mod pipeline;
pub mod render;
pub mod ui;

use anyhow::Result;
use std::path::{Path, PathBuf};

use content::{ContentSource, FileSource, HttpSource};

/// Name of the site configuration file
pub const CONFIG_FILE: &str = "_config.yml";

/// A portfolio site rooted at a directory
#[derive(Debug, Clone)]
pub struct Folio {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Local content directory
    pub source_dir: PathBuf,
    /// Output directory for rendered fragments
    pub public_dir: PathBuf,
}

impl Folio {
    /// Create a new instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join(CONFIG_FILE);

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            tracing::debug!("No {} in {:?}, using defaults", CONFIG_FILE, base_dir);
            config::SiteConfig::default()
        };

        let source_dir = base_dir.join(&config.source_dir);
        let public_dir = base_dir.join(&config.public_dir);

        Ok(Self {
            config,
            base_dir,
            source_dir,
            public_dir,
        })
    }

    /// Where content is read from: HTTP when `base_url` is set, otherwise the source dir
    pub fn content_source(&self) -> Result<Box<dyn ContentSource>> {
        if self.config.is_remote() {
            tracing::debug!("Fetching content from {}", self.config.base_url);
            Ok(Box::new(HttpSource::new(
                &self.config.base_url,
                self.config.timeout(),
            )?))
        } else {
            tracing::debug!("Reading content from {:?}", self.source_dir);
            Ok(Box::new(FileSource::new(&self.source_dir)))
        }
    }

    /// Render the site fragments
    pub async fn render(&self) -> Result<()> {
        commands::render::run(self).await
    }

    /// Clean the output directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
