//! Create a new blog post

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::content::FrontMatter;
use crate::Folio;

/// Write a new post with a front-matter header into the blog directory.
///
/// Returns the path of the new file. The file name is not added to the
/// configured post list; that stays an explicit edit of `_config.yml`.
pub fn create_post(folio: &Folio, title: &str, category: Option<&str>) -> Result<PathBuf> {
    let slug = slug::slugify(title);
    if slug.is_empty() {
        anyhow::bail!("Title {:?} does not produce a usable file name", title);
    }

    let target_dir = folio.source_dir.join(&folio.config.blog.dir);
    fs::create_dir_all(&target_dir)?;

    let file_path = target_dir.join(format!("{}.md", slug));
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let mut fm = FrontMatter::default();
    fm.insert("title", title.trim());
    fm.insert("date", chrono::Local::now().format("%Y-%m-%d").to_string());
    if let Some(category) = category {
        fm.insert("category", category.trim());
    }

    fs::write(&file_path, fm.to_header())?;
    tracing::info!("Created {:?}", file_path);

    Ok(file_path)
}
