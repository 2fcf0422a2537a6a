//! HTML rendering for the findings page

use insider_threat_core::{constants::APP_NAME, Finding};

const CSS_STYLES: &str = r#"
body { font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", sans-serif; margin: 2rem auto; max-width: 960px; color: #1f2937; }
h1 { border-bottom: 2px solid #ef4444; padding-bottom: .5rem; }
ul.threats { list-style: none; padding: 0; }
ul.threats li { background: #fef2f2; border-left: 4px solid #ef4444; margin: .5rem 0; padding: .75rem 1rem; }
footer { color: #6b7280; font-size: .85rem; margin-top: 2rem; }
"#;

/// Full HTML page listing findings in order
pub fn threats_page(findings: &[Finding]) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"UTF-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    html.push_str(&format!("<title>{}</title>\n", escape_html(APP_NAME)));
    html.push_str("<style>\n");
    html.push_str(CSS_STYLES);
    html.push_str("</style>\n</head>\n<body>\n");

    html.push_str(&format!("<h1>{}</h1>\n", escape_html(APP_NAME)));
    html.push_str("<h2>Detected Threats</h2>\n");

    html.push_str("<ul class=\"threats\">\n");
    for finding in findings {
        html.push_str(&format!("<li>{}</li>\n", escape_html(finding.as_str())));
    }
    html.push_str("</ul>\n");

    html.push_str("<footer><p>Data is reloaded on every request.</p></footer>\n");
    html.push_str("</body>\n</html>\n");

    html
}

/// Escape HTML special characters.
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
