use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use std::fmt::Write;
use std::sync::Arc;

use super::routes::PAGE_ROUTES;
use crate::state::AppState;

const CHANGE_FREQ: &str = "weekly";
const PRIORITY: &str = "0.8";

/// `GET /sitemap.xml`
pub async fn sitemap(State(state): State<Arc<AppState>>) -> Response {
    let config = &state.config().sitemap;
    if !config.enabled {
        return StatusCode::NOT_FOUND.into_response();
    }

    let xml = render(&config.base_url, &PAGE_ROUTES, Utc::now());
    (
        [(header::CONTENT_TYPE, "text/xml; charset=utf-8")],
        xml,
    )
        .into_response()
}

/// Renders a sitemap with every path stamped with the same `lastmod`.
pub fn render(base_url: &str, paths: &[&str], now: DateTime<Utc>) -> String {
    let base_url = base_url.trim_end_matches('/');
    let lastmod = now.format("%Y-%m-%dT%H:%M:%S+00:00");

    let mut xml = String::from("<?xml version='1.0' encoding='UTF-8'?>\n");
    xml.push_str("<urlset xmlns='http://www.sitemaps.org/schemas/sitemap/0.9'>\n");
    for path in paths {
        // writing into a String cannot fail
        let _ = write!(
            xml,
            "  <url>\n    <loc>{}{}</loc>\n    <lastmod>{}</lastmod>\n    <changefreq>{}</changefreq>\n    <priority>{}</priority>\n  </url>\n",
            escape(base_url),
            escape(path),
            lastmod,
            CHANGE_FREQ,
            PRIORITY,
        );
    }
    xml.push_str("</urlset>");
    xml
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('\'', "&apos;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_render() {
        let now = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 0).unwrap();
        let xml = render("http://localhost:3000/", &["/", "/compress"], now);

        assert!(xml.starts_with("<?xml version='1.0' encoding='UTF-8'?>"));
        assert!(xml.contains("<loc>http://localhost:3000/</loc>"));
        assert!(xml.contains("<loc>http://localhost:3000/compress</loc>"));
        assert_eq!(xml.matches("<lastmod>2024-03-09T14:05:00+00:00</lastmod>").count(), 2);
        assert_eq!(xml.matches("<changefreq>weekly</changefreq>").count(), 2);
        assert_eq!(xml.matches("<priority>0.8</priority>").count(), 2);
        assert!(xml.ends_with("</urlset>"));
    }

    #[test]
    fn test_render_escapes_base_url() {
        let now = Utc::now();
        let xml = render("https://example.com/?a=1&b=2", &["/"], now);
        assert!(xml.contains("https://example.com/?a=1&amp;b=2/"));
    }
}
