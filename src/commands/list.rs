//! List site content

use anyhow::Result;

use crate::content::MarkdownRenderer;
use crate::pipeline::{BlogPipeline, CertificationPipeline};
use crate::render::category_tag;
use crate::Folio;

/// List site content by type
pub async fn run(folio: &Folio, content_type: &str) -> Result<()> {
    let source = folio.content_source()?;

    match content_type {
        "post" | "posts" => {
            let markdown = MarkdownRenderer::new();
            let (posts, failures) = BlogPipeline::new(&folio.config.blog, &markdown)
                .load(source.as_ref())
                .await;
            println!("Posts ({}):", posts.len());
            for post in &posts {
                println!("  {} - {} [{}]", post.date(), post.title(), category_tag(post));
            }
            print_failures(failures.iter().map(|f| f.error.to_string()));
        }
        "slug" | "slugs" => {
            let markdown = MarkdownRenderer::new();
            let (posts, _) = BlogPipeline::new(&folio.config.blog, &markdown)
                .load(source.as_ref())
                .await;
            for post in &posts {
                println!("{}", post.slug());
            }
        }
        "category" | "categories" => {
            let markdown = MarkdownRenderer::new();
            let (posts, _) = BlogPipeline::new(&folio.config.blog, &markdown)
                .load(source.as_ref())
                .await;
            let mut categories: indexmap::IndexMap<String, usize> = indexmap::IndexMap::new();
            for post in &posts {
                *categories.entry(category_tag(post)).or_insert(0) += 1;
            }
            println!("Categories ({}):", categories.len());
            categories.sort_by(|_, a, _, b| b.cmp(a));
            for (cat, count) in categories {
                println!("  {} ({})", cat, count);
            }
        }
        "certification" | "certifications" => {
            let (records, failures) = CertificationPipeline::new(&folio.config.certifications)
                .load(source.as_ref())
                .await;
            println!("Certifications ({}):", records.len());
            for cert in &records {
                println!("  {} - {} ({})", cert.issued_date, cert.title, cert.issuer);
            }
            print_failures(failures.iter().map(|f| f.error.to_string()));
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, slug, category, certification",
                content_type
            );
        }
    }

    Ok(())
}

fn print_failures(errors: impl Iterator<Item = String>) {
    let errors: Vec<String> = errors.collect();
    if errors.is_empty() {
        return;
    }
    println!("Failed ({}):", errors.len());
    for e in errors {
        println!("  {}", e);
    }
}
