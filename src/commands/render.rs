//! Render the blog and certification fragments

use anyhow::Result;
use std::fs;
use std::time::Instant;

use crate::content::MarkdownRenderer;
use crate::pipeline::{load_all, BlogPipeline, CertificationPipeline};
use crate::Folio;

/// Fragment files written to the output directory
pub const BLOG_FRAGMENT: &str = "blog.html";
pub const FILTERS_FRAGMENT: &str = "filters.html";
pub const CERTIFICATIONS_FRAGMENT: &str = "certifications.html";
pub const POSTS_JSON: &str = "posts.json";

/// Run both pipelines and write their fragments.
///
/// Failed resources are logged and left out; they never fail the command.
pub async fn run(folio: &Folio) -> Result<()> {
    let start = Instant::now();

    let source = folio.content_source()?;
    let markdown = MarkdownRenderer::new();
    let blog = BlogPipeline::new(&folio.config.blog, &markdown);
    let certifications = CertificationPipeline::new(&folio.config.certifications);

    let (blog, certifications) = load_all(&blog, &certifications, source.as_ref()).await;

    fs::create_dir_all(&folio.public_dir)?;
    fs::write(folio.public_dir.join(BLOG_FRAGMENT), &blog.html)?;
    fs::write(folio.public_dir.join(FILTERS_FRAGMENT), blog.filters_html())?;
    fs::write(
        folio.public_dir.join(CERTIFICATIONS_FRAGMENT),
        &certifications.html,
    )?;
    fs::write(
        folio.public_dir.join(POSTS_JSON),
        serde_json::to_string_pretty(&blog.posts)?,
    )?;

    let failed = blog.failures.len() + certifications.failures.len();
    if failed > 0 {
        tracing::warn!("{} resource(s) could not be loaded", failed);
    }

    tracing::info!(
        "Rendered {} posts and {} certifications in {:.2}s",
        blog.posts.len(),
        certifications.records.len(),
        start.elapsed().as_secs_f64()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::init::init_site;
    use crate::content::PostRecord;

    #[tokio::test]
    async fn test_render_initialized_site() {
        let dir = tempfile::tempdir().unwrap();
        init_site(dir.path()).unwrap();
        let folio = Folio::new(dir.path()).unwrap();

        run(&folio).await.unwrap();

        let blog = fs::read_to_string(folio.public_dir.join(BLOG_FRAGMENT)).unwrap();
        assert_eq!(blog.matches("<article").count(), 3);
        assert!(blog.find("AI vs Coding").unwrap() < blog.find("Hello World").unwrap());

        let filters = fs::read_to_string(folio.public_dir.join(FILTERS_FRAGMENT)).unwrap();
        assert!(filters.contains(r#"data-filter="web""#));

        let certs = fs::read_to_string(folio.public_dir.join(CERTIFICATIONS_FRAGMENT)).unwrap();
        assert_eq!(certs.matches("cert-card").count(), 2);
        assert_eq!(certs.matches("Skills:").count(), 1);

        let posts: Vec<PostRecord> =
            serde_json::from_str(&fs::read_to_string(folio.public_dir.join(POSTS_JSON)).unwrap())
                .unwrap();
        assert_eq!(posts[0].title(), "AI vs Coding");
    }

    #[tokio::test]
    async fn test_render_with_missing_post() {
        let dir = tempfile::tempdir().unwrap();
        init_site(dir.path()).unwrap();
        let folio = Folio::new(dir.path()).unwrap();
        fs::remove_file(folio.source_dir.join("blog/sample.md")).unwrap();

        run(&folio).await.unwrap();

        let blog = fs::read_to_string(folio.public_dir.join(BLOG_FRAGMENT)).unwrap();
        assert_eq!(blog.matches("<article").count(), 2);
    }
}
