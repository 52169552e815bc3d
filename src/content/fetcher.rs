//! Content fetcher - retrieves named resources over HTTP or from disk
//!
//! A failed resource never aborts the batch: it is logged, recorded in
//! the report and the remaining resources are still fetched.

use async_trait::async_trait;
use futures::future::join_all;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Why a single resource could not be retrieved
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{path}: server returned status {status}")]
    Status { path: String, status: u16 },

    #[error("{path}: request failed: {source}")]
    Network {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}: malformed JSON: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    /// The resource identifier that failed
    pub fn path(&self) -> &str {
        match self {
            FetchError::Status { path, .. }
            | FetchError::Network { path, .. }
            | FetchError::Io { path, .. }
            | FetchError::Decode { path, .. } => path,
        }
    }
}

/// Where resources are read from
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Retrieve one resource as text
    async fn fetch(&self, path: &str) -> Result<String, FetchError>;
}

/// Plain HTTP GET against a base URL
pub struct HttpSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl ContentSource for HttpSource {
    async fn fetch(&self, path: &str) -> Result<String, FetchError> {
        let url = self.url_for(path);
        tracing::debug!("GET {}", url);

        let network = |source| FetchError::Network {
            path: path.to_string(),
            source,
        };

        let resp = self.client.get(&url).send().await.map_err(network)?;
        if !resp.status().is_success() {
            return Err(FetchError::Status {
                path: path.to_string(),
                status: resp.status().as_u16(),
            });
        }

        resp.text().await.map_err(network)
    }
}

/// Reads resources from a local directory
pub struct FileSource {
    root: PathBuf,
}

impl FileSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl ContentSource for FileSource {
    async fn fetch(&self, path: &str) -> Result<String, FetchError> {
        let full = self.root.join(path.trim_start_matches('/'));
        tracing::debug!("Reading {:?}", full);
        tokio::fs::read_to_string(&full)
            .await
            .map_err(|source| FetchError::Io {
                path: path.to_string(),
                source,
            })
    }
}

/// A retrieved resource, not yet parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDocument {
    pub name: String,
    pub text: String,
}

/// A resource that could not be retrieved
#[derive(Debug)]
pub struct FetchFailure {
    pub name: String,
    pub error: FetchError,
}

/// Outcome of fetching a batch of resources
#[derive(Debug, Default)]
pub struct FetchReport {
    /// Successful documents, in requested order
    pub documents: Vec<RawDocument>,
    /// Failed resources, in requested order
    pub failures: Vec<FetchFailure>,
}

impl FetchReport {
    pub(crate) fn record(&mut self, name: &str, result: Result<String, FetchError>) {
        match result {
            Ok(text) => self.documents.push(RawDocument {
                name: name.to_string(),
                text,
            }),
            Err(error) => {
                tracing::warn!("Failed to load {}: {}", name, error);
                self.failures.push(FetchFailure {
                    name: name.to_string(),
                    error,
                });
            }
        }
    }
}

/// Fetch every resource, one after another
pub async fn fetch_sequential<S>(source: &S, paths: &[String]) -> FetchReport
where
    S: ContentSource + ?Sized,
{
    let mut report = FetchReport::default();
    for path in paths {
        let result = source.fetch(path).await;
        report.record(path, result);
    }
    report
}

/// Fetch every resource at once; the report keeps the requested order
pub async fn fetch_parallel<S>(source: &S, paths: &[String]) -> FetchReport
where
    S: ContentSource + ?Sized,
{
    let results = join_all(paths.iter().map(|p| source.fetch(p))).await;

    let mut report = FetchReport::default();
    for (path, result) in paths.iter().zip(results) {
        report.record(path, result);
    }
    report
}

/// Fetch with the configured strategy
pub async fn fetch_all<S>(source: &S, paths: &[String], parallel: bool) -> FetchReport
where
    S: ContentSource + ?Sized,
{
    if parallel {
        fetch_parallel(source, paths).await
    } else {
        fetch_sequential(source, paths).await
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// In-memory source; paths mapped to `Err(status)` fail with that status
    #[derive(Default)]
    pub(crate) struct MockSource {
        pub responses: HashMap<String, Result<String, u16>>,
        pub requested: Mutex<Vec<String>>,
    }

    impl MockSource {
        pub fn with(mut self, path: &str, text: &str) -> Self {
            self.responses.insert(path.to_string(), Ok(text.to_string()));
            self
        }

        pub fn failing(mut self, path: &str, status: u16) -> Self {
            self.responses.insert(path.to_string(), Err(status));
            self
        }
    }

    #[async_trait]
    impl ContentSource for MockSource {
        async fn fetch(&self, path: &str) -> Result<String, FetchError> {
            self.requested.lock().unwrap().push(path.to_string());
            match self.responses.get(path) {
                Some(Ok(text)) => Ok(text.clone()),
                Some(Err(status)) => Err(FetchError::Status {
                    path: path.to_string(),
                    status: *status,
                }),
                None => Err(FetchError::Status {
                    path: path.to_string(),
                    status: 404,
                }),
            }
        }
    }

    /// Answer a single HTTP request with a canned response. Returns the base
    /// URL and a handle yielding the raw request that was received.
    pub(crate) async fn serve_once(
        status: &'static str,
        body: &'static str,
    ) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut chunk = [0u8; 1024];
            loop {
                let n = stream.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&chunk[..n]);
                if let Some(end) = request.windows(4).position(|w| w == b"\r\n\r\n") {
                    let head = String::from_utf8_lossy(&request[..end]).to_lowercase();
                    let length = head
                        .lines()
                        .find_map(|l| l.strip_prefix("content-length:"))
                        .and_then(|v| v.trim().parse::<usize>().ok())
                        .unwrap_or(0);
                    if request.len() >= end + 4 + length {
                        break;
                    }
                }
            }

            let response = format!(
                "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).await.unwrap();
            stream.shutdown().await.unwrap();
            String::from_utf8_lossy(&request).into_owned()
        });

        (base_url, handle)
    }

    fn paths(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_sequential_isolates_failures() {
        let source = MockSource::default()
            .with("a.md", "A")
            .failing("b.md", 500)
            .with("c.md", "C");

        let report = fetch_sequential(&source, &paths(&["a.md", "b.md", "c.md"])).await;

        assert_eq!(report.documents.len(), 2);
        assert_eq!(report.documents[0].name, "a.md");
        assert_eq!(report.documents[1].text, "C");
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].name, "b.md");
        assert!(matches!(
            report.failures[0].error,
            FetchError::Status { status: 500, .. }
        ));
        assert_eq!(
            *source.requested.lock().unwrap(),
            paths(&["a.md", "b.md", "c.md"])
        );
    }

    #[tokio::test]
    async fn test_parallel_keeps_order() {
        let source = MockSource::default()
            .with("one", "1")
            .with("two", "2")
            .with("three", "3");

        let report = fetch_all(&source, &paths(&["three", "one", "two"]), true).await;
        let names: Vec<_> = report.documents.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["three", "one", "two"]);
        assert!(report.failures.is_empty());
    }

    #[tokio::test]
    async fn test_file_source() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("blog")).unwrap();
        std::fs::write(dir.path().join("blog/post.md"), "hello").unwrap();

        let source = FileSource::new(dir.path());
        let report = fetch_all(&source, &paths(&["blog/post.md", "blog/missing.md"]), false).await;

        assert_eq!(report.documents[0].text, "hello");
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].error.path(), "blog/missing.md");
        assert!(matches!(report.failures[0].error, FetchError::Io { .. }));
    }

    #[tokio::test]
    async fn test_http_source_reads_body() {
        let (base_url, server) = serve_once("200 OK", "---\ntitle: Remote\n---\nbody").await;
        let source = HttpSource::new(&base_url, Duration::from_secs(5)).unwrap();

        let text = source.fetch("blog/remote.md").await.unwrap();
        assert_eq!(text, "---\ntitle: Remote\n---\nbody");

        let request = server.await.unwrap();
        assert!(request.starts_with("GET /blog/remote.md HTTP/1.1"));
    }

    #[tokio::test]
    async fn test_http_source_non_2xx_is_status_error() {
        let (base_url, _server) = serve_once("404 Not Found", "missing").await;
        let source = HttpSource::new(&base_url, Duration::from_secs(5)).unwrap();

        let report = fetch_all(&source, &paths(&["blog/gone.md"]), false).await;
        assert!(report.documents.is_empty());
        assert_eq!(report.failures[0].error.path(), "blog/gone.md");
        assert!(matches!(
            report.failures[0].error,
            FetchError::Status { status: 404, .. }
        ));
    }

    #[test]
    fn test_http_url_join() {
        let source = HttpSource::new("https://example.com/", Duration::from_secs(5)).unwrap();
        assert_eq!(source.url_for("/blog/a.md"), "https://example.com/blog/a.md");
        assert_eq!(source.url_for("certs.json"), "https://example.com/certs.json");
    }
}
