//! Ingestion pipelines: fetch -> parse -> normalize/sort -> render
//!
//! Each run starts from scratch and owns everything it produces. A
//! failed resource is reported in the output and excluded from the
//! rendered list; nothing here returns an error.

use serde_json::Value;

use crate::config::{BlogConfig, BlogFormat, CertificationsConfig};
use crate::content::fetcher::fetch_all;
use crate::content::{
    sort_posts, CertificationRecord, ContentSource, FetchError, FetchFailure, MarkdownRenderer,
    PostRecord, RawDocument,
};
use crate::render::{load_state, render_certifications, CategoryFilter, PostRenderer};

/// Result of a blog pipeline run
#[derive(Debug)]
pub struct BlogOutput {
    /// Posts, newest first
    pub posts: Vec<PostRecord>,
    /// Preview list for the posts container
    pub html: String,
    /// Category filter built from the loaded posts
    pub filter: CategoryFilter,
    pub failures: Vec<FetchFailure>,
}

impl BlogOutput {
    pub fn filters_html(&self) -> String {
        self.filter.render_controls()
    }
}

/// Result of a certifications pipeline run
#[derive(Debug)]
pub struct CertificationOutput {
    /// Records in fetch order
    pub records: Vec<CertificationRecord>,
    pub html: String,
    pub failures: Vec<FetchFailure>,
}

/// Loads, sorts and renders blog posts
pub struct BlogPipeline<'a> {
    config: &'a BlogConfig,
    markdown: &'a MarkdownRenderer,
}

impl<'a> BlogPipeline<'a> {
    pub fn new(config: &'a BlogConfig, markdown: &'a MarkdownRenderer) -> Self {
        Self { config, markdown }
    }

    /// Load posts without rendering them
    pub async fn load<S>(&self, source: &S) -> (Vec<PostRecord>, Vec<FetchFailure>)
    where
        S: ContentSource + ?Sized,
    {
        let (mut posts, failures) = match self.config.format {
            BlogFormat::Markdown => {
                let paths = self.config.file_paths();
                let report = fetch_all(source, &paths, self.config.parallel).await;
                let posts: Vec<PostRecord> = report
                    .documents
                    .iter()
                    .map(|doc| PostRecord::from_document(&doc.text))
                    .collect();
                (posts, report.failures)
            }
            BlogFormat::Json => {
                let endpoint = vec![self.config.endpoint.clone()];
                let report = fetch_all(source, &endpoint, false).await;
                let mut failures = report.failures;
                let mut posts = Vec::new();
                for doc in &report.documents {
                    match json_objects(doc) {
                        Ok(objects) => posts.extend(objects.iter().map(PostRecord::from_json)),
                        Err(failure) => failures.push(failure),
                    }
                }
                (posts, failures)
            }
        };

        sort_posts(&mut posts);
        tracing::info!("Loaded {} posts ({} failed)", posts.len(), failures.len());
        (posts, failures)
    }

    pub async fn run<S>(&self, source: &S) -> BlogOutput
    where
        S: ContentSource + ?Sized,
    {
        let (posts, failures) = self.load(source).await;

        let html = if posts.is_empty() {
            load_state("posts", failures.len())
        } else {
            PostRenderer::new(self.markdown, self.config.preview_length).render_list(&posts)
        };
        let filter = CategoryFilter::from_posts(&posts);

        BlogOutput {
            posts,
            html,
            filter,
            failures,
        }
    }
}

/// Loads and renders certifications
pub struct CertificationPipeline<'a> {
    config: &'a CertificationsConfig,
}

impl<'a> CertificationPipeline<'a> {
    pub fn new(config: &'a CertificationsConfig) -> Self {
        Self { config }
    }

    /// Load records without rendering them. An object missing a required
    /// field is skipped and reported as a decode failure.
    pub async fn load<S>(&self, source: &S) -> (Vec<CertificationRecord>, Vec<FetchFailure>)
    where
        S: ContentSource + ?Sized,
    {
        let endpoint = vec![self.config.endpoint.clone()];
        let report = fetch_all(source, &endpoint, false).await;
        let mut failures = report.failures;
        let mut records = Vec::new();

        for doc in &report.documents {
            let objects = match json_objects(doc) {
                Ok(objects) => objects,
                Err(failure) => {
                    failures.push(failure);
                    continue;
                }
            };
            for (i, object) in objects.into_iter().enumerate() {
                match serde_json::from_value::<CertificationRecord>(Value::Object(object)) {
                    Ok(record) => records.push(record),
                    Err(source) => {
                        tracing::warn!("Skipping certification #{} in {}: {}", i, doc.name, source);
                        let name = format!("{}#{}", doc.name, i);
                        failures.push(FetchFailure {
                            error: FetchError::Decode {
                                path: name.clone(),
                                source,
                            },
                            name,
                        });
                    }
                }
            }
        }

        tracing::info!(
            "Loaded {} certifications ({} failed)",
            records.len(),
            failures.len()
        );
        (records, failures)
    }

    pub async fn run<S>(&self, source: &S) -> CertificationOutput
    where
        S: ContentSource + ?Sized,
    {
        let (records, failures) = self.load(source).await;
        let html = if records.is_empty() {
            load_state("certifications", failures.len())
        } else {
            render_certifications(&records)
        };

        CertificationOutput {
            records,
            html,
            failures,
        }
    }
}

/// Run both pipelines at once; neither waits on the other
pub async fn load_all<S>(
    blog: &BlogPipeline<'_>,
    certifications: &CertificationPipeline<'_>,
    source: &S,
) -> (BlogOutput, CertificationOutput)
where
    S: ContentSource + ?Sized,
{
    tokio::join!(blog.run(source), certifications.run(source))
}

/// Objects of a top-level JSON array. Non-object entries are skipped.
fn json_objects(doc: &RawDocument) -> Result<Vec<serde_json::Map<String, Value>>, FetchFailure> {
    let decode = |source: serde_json::Error| FetchFailure {
        name: doc.name.clone(),
        error: FetchError::Decode {
            path: doc.name.clone(),
            source,
        },
    };

    let items: Vec<Value> = serde_json::from_str(&doc.text).map_err(|e| {
        tracing::warn!("Failed to parse {}: {}", doc.name, e);
        decode(e)
    })?;

    Ok(items
        .into_iter()
        .filter_map(|item| match item {
            Value::Object(map) => Some(map),
            other => {
                tracing::warn!("Skipping non-object entry in {}: {}", doc.name, other);
                None
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::fetcher::tests::MockSource;
    use crate::content::FileSource;

    fn blog_config(files: &[&str]) -> BlogConfig {
        BlogConfig {
            dir: "blog".to_string(),
            files: files.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    fn blog_source() -> MockSource {
        MockSource::default()
            .with(
                "blog/sample.md",
                "---\ntitle: Sample\ndate: 2023-05-01\ncategory: General\n---\nHello there.",
            )
            .with(
                "blog/web-dev-tools.md",
                "---\ntitle: Web Dev Tools\ndate: 2024-02-10\ncategory: Web\n---\nTools I use.",
            )
            .with(
                "blog/ai-vs-coding.md",
                "---\ntitle: AI vs Coding\ndate: 2024-07-20\ncategory: AI\n---\nThoughts.",
            )
    }

    #[tokio::test]
    async fn test_blog_pipeline_sorts_and_renders() {
        let config = blog_config(&["sample.md", "web-dev-tools.md", "ai-vs-coding.md"]);
        let markdown = MarkdownRenderer::new();
        let output = BlogPipeline::new(&config, &markdown).run(&blog_source()).await;

        let titles: Vec<_> = output.posts.iter().map(|p| p.title()).collect();
        assert_eq!(titles, vec!["AI vs Coding", "Web Dev Tools", "Sample"]);
        assert!(output.failures.is_empty());
        assert_eq!(output.html.matches("<article").count(), 3);
        assert!(output.html.find("AI vs Coding").unwrap() < output.html.find("Sample").unwrap());
        assert!(output.filters_html().contains(r#"data-filter="ai""#));
    }

    #[tokio::test]
    async fn test_one_failed_resource_is_excluded() {
        let config = blog_config(&["sample.md", "broken.md", "web-dev-tools.md", "ai-vs-coding.md"]);
        let markdown = MarkdownRenderer::new();
        let source = blog_source().failing("blog/broken.md", 503);

        let output = BlogPipeline::new(&config, &markdown).run(&source).await;

        assert_eq!(output.posts.len(), 3);
        assert_eq!(output.html.matches("<article").count(), 3);
        assert_eq!(output.failures.len(), 1);
        assert_eq!(output.failures[0].name, "blog/broken.md");
    }

    #[tokio::test]
    async fn test_all_failed_shows_load_error() {
        let config = blog_config(&["a.md", "b.md"]);
        let markdown = MarkdownRenderer::new();
        let output = BlogPipeline::new(&config, &markdown)
            .run(&MockSource::default())
            .await;

        assert!(output.posts.is_empty());
        assert!(output.html.contains("load-error"));
        assert_eq!(output.filter.controls().len(), 1);
    }

    #[tokio::test]
    async fn test_json_blog_variant() {
        let config = BlogConfig {
            format: BlogFormat::Json,
            endpoint: "api/posts.json".to_string(),
            ..Default::default()
        };
        let markdown = MarkdownRenderer::new();
        let source = MockSource::default().with(
            "api/posts.json",
            r#"[
                {"title": "Older", "date": "2022-01-01", "category": "Misc", "content": "old"},
                "not an object",
                {"title": "Newer", "date": "2024-01-01", "content": "new"}
            ]"#,
        );

        let output = BlogPipeline::new(&config, &markdown).run(&source).await;
        let titles: Vec<_> = output.posts.iter().map(|p| p.title()).collect();
        assert_eq!(titles, vec!["Newer", "Older"]);
        assert!(output.failures.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_json_is_a_failure() {
        let config = BlogConfig {
            format: BlogFormat::Json,
            endpoint: "posts.json".to_string(),
            ..Default::default()
        };
        let markdown = MarkdownRenderer::new();
        let source = MockSource::default().with("posts.json", "{ not json");

        let output = BlogPipeline::new(&config, &markdown).run(&source).await;
        assert!(output.posts.is_empty());
        assert!(matches!(output.failures[0].error, FetchError::Decode { .. }));
        assert!(output.html.contains("load-error"));
    }

    #[tokio::test]
    async fn test_certification_pipeline() {
        let config = CertificationsConfig::default();
        let source = MockSource::default().with(
            "certifications.json",
            r#"[
                {"title": "First Listed", "issuer": "B", "issuedDate": "2020-01-01", "skills": []},
                {"title": "Missing issuer", "issuedDate": "2021-01-01"},
                {"title": "Second Listed", "issuer": "C", "issuedDate": "2023-01-01",
                 "credentialId": "XYZ", "skills": ["Rust", "Tokio"]}
            ]"#,
        );

        let output = CertificationPipeline::new(&config).run(&source).await;
        assert_eq!(output.records.len(), 2);
        assert_eq!(output.records[0].title, "First Listed");
        assert_eq!(output.records[1].credential_id.as_deref(), Some("XYZ"));
        assert_eq!(output.html.matches("Skills:").count(), 1);
        assert!(output.html.contains("Rust, Tokio"));
        assert_eq!(output.failures.len(), 1);
        assert_eq!(output.failures[0].name, "certifications.json#1");
    }

    #[tokio::test]
    async fn test_null_skills_keeps_certification() {
        let config = CertificationsConfig::default();
        let source = MockSource::default().with(
            "certifications.json",
            r#"[{"title": "A", "issuer": "B", "issuedDate": "2024",
                 "credentialId": null, "skills": null}]"#,
        );

        let output = CertificationPipeline::new(&config).run(&source).await;
        assert_eq!(output.records.len(), 1);
        assert!(output.failures.is_empty());
        assert!(output.html.contains("<h3>A</h3>"));
        assert!(!output.html.contains("Skills:"));
    }

    #[tokio::test]
    async fn test_all_invalid_certifications_show_load_error() {
        let config = CertificationsConfig::default();
        let source = MockSource::default().with(
            "certifications.json",
            r#"[{"title": "No issuer", "issuedDate": "2024"}]"#,
        );

        let output = CertificationPipeline::new(&config).run(&source).await;
        assert!(output.records.is_empty());
        assert!(matches!(output.failures[0].error, FetchError::Decode { .. }));
        assert!(output.html.contains("load-error"));
    }

    #[tokio::test]
    async fn test_load_all_runs_both() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("blog")).unwrap();
        std::fs::write(
            dir.path().join("blog/sample.md"),
            "---\ntitle: Local\ndate: 2024-01-01\n---\nFrom disk.",
        )
        .unwrap();
        std::fs::write(
            dir.path().join("certifications.json"),
            r#"[{"title": "Cert", "issuer": "Org", "issuedDate": "2024"}]"#,
        )
        .unwrap();

        let blog_config = blog_config(&["sample.md"]);
        let cert_config = CertificationsConfig::default();
        let markdown = MarkdownRenderer::new();
        let source = FileSource::new(dir.path());

        let (blog, certs) = load_all(
            &BlogPipeline::new(&blog_config, &markdown),
            &CertificationPipeline::new(&cert_config),
            &source,
        )
        .await;

        assert_eq!(blog.posts.len(), 1);
        assert_eq!(certs.records.len(), 1);
        assert!(certs.html.contains("<h3>Cert</h3>"));
    }
}
