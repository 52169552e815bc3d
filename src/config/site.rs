//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub author: String,

    // Sources
    /// HTTP base for every resource. Empty means read from `source_dir`.
    pub base_url: String,
    pub source_dir: String,
    pub public_dir: String,
    pub timeout_secs: u64,

    #[serde(default)]
    pub blog: BlogConfig,
    #[serde(default)]
    pub certifications: CertificationsConfig,
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            author: "John Doe".to_string(),

            base_url: String::new(),
            source_dir: "source".to_string(),
            public_dir: "public".to_string(),
            timeout_secs: 15,

            blog: BlogConfig::default(),
            certifications: CertificationsConfig::default(),
            contact: ContactConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Whether resources come over HTTP rather than from disk
    pub fn is_remote(&self) -> bool {
        !self.base_url.trim().is_empty()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// How blog posts are stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlogFormat {
    /// One markdown file per post with a front-matter header
    Markdown,
    /// A single JSON array of post objects
    Json,
}

/// Blog loader configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogConfig {
    pub format: BlogFormat,
    pub dir: String,
    pub files: Vec<String>,
    pub endpoint: String,
    pub preview_length: usize,
    pub parallel: bool,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            format: BlogFormat::Markdown,
            dir: "blog".to_string(),
            files: vec![
                "sample.md".to_string(),
                "web-dev-tools.md".to_string(),
                "ai-vs-coding.md".to_string(),
            ],
            endpoint: "blog/posts.json".to_string(),
            preview_length: 100,
            parallel: false,
        }
    }
}

impl BlogConfig {
    /// Resource paths for the markdown variant, in configured order
    pub fn file_paths(&self) -> Vec<String> {
        let dir = self.dir.trim_matches('/');
        self.files
            .iter()
            .map(|f| {
                if dir.is_empty() {
                    f.clone()
                } else {
                    format!("{}/{}", dir, f)
                }
            })
            .collect()
    }
}

/// Certifications loader configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CertificationsConfig {
    pub endpoint: String,
}

impl Default for CertificationsConfig {
    fn default() -> Self {
        Self {
            endpoint: "certifications.json".to_string(),
        }
    }
}

/// Contact form configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub endpoint: String,
}

/// Scroll and header behaviour
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub back_to_top_threshold: f64,
    pub sticky_offset: f64,
    pub hide_offset: f64,
    pub hide_delay_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            back_to_top_threshold: 200.0,
            sticky_offset: 0.0,
            hide_offset: 100.0,
            hide_delay_ms: 2000,
        }
    }
}
