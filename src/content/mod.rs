//! Content module - fetching, front-matter parsing and record normalization

pub mod fetcher;
mod frontmatter;
mod markdown;
mod post;

pub use fetcher::{
    ContentSource, FetchError, FetchFailure, FetchReport, FileSource, HttpSource, RawDocument,
};
pub use frontmatter::FrontMatter;
pub use markdown::MarkdownRenderer;
pub use post::{parse_date_string, sort_posts, CertificationRecord, PostRecord};
