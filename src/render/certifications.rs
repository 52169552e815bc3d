//! Certification cards

use crate::content::CertificationRecord;
use crate::helpers::{external_link, html_escape, is_http_url};

/// Render one certification card. Optional lines are left out entirely when empty.
pub fn render_certification(cert: &CertificationRecord) -> String {
    let mut lines = vec![
        r#"<div class="cert-card">"#.to_string(),
        format!("  <h3>{}</h3>", html_escape(&cert.title)),
        format!(
            "  <p><strong>Issuer:</strong> {}</p>",
            html_escape(&cert.issuer)
        ),
        format!(
            "  <p><strong>Issued:</strong> {}</p>",
            html_escape(&cert.issued_date)
        ),
    ];

    if let Some(id) = non_blank(cert.credential_id.as_deref()) {
        lines.push(format!(
            "  <p><strong>Credential ID:</strong> {}</p>",
            html_escape(id)
        ));
    }

    match non_blank(cert.verification_url.as_deref()) {
        Some(url) if is_http_url(url) => {
            lines.push(format!("  <p>{}</p>", external_link(url, "Verify Credential")));
        }
        Some(url) => tracing::debug!("Skipping non-http verification url {:?}", url),
        None => {}
    }

    let skills: Vec<String> = cert
        .skills
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(html_escape)
        .collect();
    if !skills.is_empty() {
        lines.push(format!(
            "  <p><strong>Skills:</strong> {}</p>",
            skills.join(", ")
        ));
    }

    lines.push("</div>".to_string());
    lines.join("\n")
}

/// Render all cards in the order they were fetched
pub fn render_certifications(certs: &[CertificationRecord]) -> String {
    certs
        .iter()
        .map(render_certification)
        .collect::<Vec<_>>()
        .join("\n")
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
