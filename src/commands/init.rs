//! Initialize a new portfolio content directory

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::config::SiteConfig;
use crate::CONFIG_FILE;

const CONFIG_TEMPLATE: &str = r#"# Portfolio configuration

# Site
title: Portfolio
author: John Doe

# Sources
# Set base_url to fetch content over HTTP instead of reading source_dir
base_url: ''
source_dir: source
public_dir: public
timeout_secs: 15

# Blog
blog:
  format: markdown
  dir: blog
  files:
    - sample.md
    - web-dev-tools.md
    - ai-vs-coding.md
  endpoint: blog/posts.json
  preview_length: 100
  parallel: false

# Certifications
certifications:
  endpoint: certifications.json

# Contact form
contact:
  endpoint: ''

# Page behaviour
ui:
  back_to_top_threshold: 200
  sticky_offset: 0
  hide_offset: 100
  hide_delay_ms: 2000
"#;

const SAMPLE_CERTIFICATIONS: &str = r#"[
  {
    "title": "Responsive Web Design",
    "issuer": "freeCodeCamp",
    "issuedDate": "2023-06-12",
    "credentialId": "fcc-rwd-0001",
    "verificationUrl": "https://www.freecodecamp.org/certification",
    "skills": ["HTML", "CSS", "Accessibility"]
  },
  {
    "title": "Python for Everybody",
    "issuer": "University of Michigan",
    "issuedDate": "2022-11-03"
  }
]
"#;

/// Initialize a new site in the given directory. Existing files are left alone.
pub fn init_site(target_dir: &Path) -> Result<()> {
    let config = SiteConfig::default();
    let source_dir = target_dir.join(&config.source_dir);
    let blog_dir = source_dir.join(&config.blog.dir);

    fs::create_dir_all(&blog_dir)?;

    write_new(&target_dir.join(CONFIG_FILE), CONFIG_TEMPLATE)?;
    write_new(
        &source_dir.join(&config.certifications.endpoint),
        SAMPLE_CERTIFICATIONS,
    )?;

    let samples = [
        (
            "sample.md",
            "Hello World",
            "2023-05-01",
            "General",
            "Welcome to the blog! This first post is here so the list is never empty.",
        ),
        (
            "web-dev-tools.md",
            "Web Dev Tools I Use",
            "2024-02-10",
            "Web",
            "A short tour of my editor setup, `cargo watch`, and the browser devtools panels I keep open.",
        ),
        (
            "ai-vs-coding.md",
            "AI vs Coding",
            "2024-07-20",
            "AI",
            "Does an assistant make you a better programmer, or just a faster one? Some notes from a year of pairing with one.",
        ),
    ];

    for (file, title, date, category, body) in samples {
        let content = format!(
            "---\ntitle: {}\ndate: {}\ncategory: {}\n---\n{}\n",
            title, date, category, body
        );
        write_new(&blog_dir.join(file), &content)?;
    }

    Ok(())
}

fn write_new(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        tracing::info!("Keeping existing {:?}", path);
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    tracing::debug!("Created {:?}", path);
    Ok(())
}
