use crate::errors::*;
use crate::grype::Descriptor;
use chrono::NaiveDateTime;
use serde_json::Value;

const TEMPLATE: &str = include_str!("report.html");

/// The embedded scan result starts right after this marker
pub const PAYLOAD_START: &str = "const grypeData = ";
/// ... and ends right before this one
pub const PAYLOAD_END: &str = ";\n";

pub fn output_stem(now: NaiveDateTime) -> String {
    format!("grype_{}", now.format("%Y%m%dT%H%M%S"))
}

pub fn output_filename(now: NaiveDateTime) -> String {
    format!("{}.html", output_stem(now))
}

pub fn render(doc: &Value, now: NaiveDateTime) -> Result<String> {
    let descriptor = Descriptor::from_scan(doc)?;
    debug!(
        "Rendering report for scanner {:?} version {:?}",
        descriptor.name, descriptor.version
    );

    let timestamp = now.format("%Y-%m-%d %H:%M:%S").to_string();
    let version = html_escape(&descriptor.version);
    let json = serde_json::to_string(doc).context("Failed to serialize scan result")?;
    let json = escape_json_for_script(&json);

    substitute(TEMPLATE, |key| match key {
        "timestamp" => Some(&timestamp),
        "grype_version" => Some(&version),
        "json_data" => Some(&json),
        _ => None,
    })
}

/// Replace `{{key}}` placeholders in a single pass, substituted text is never scanned again
fn substitute<'a, F>(template: &str, lookup: F) -> Result<String>
where
    F: Fn(&str) -> Option<&'a String>,
{
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let end = after
            .find("}}")
            .context("Unterminated placeholder in report template")?;
        let key = &after[..end];
        let value = lookup(key)
            .with_context(|| anyhow!("Unknown placeholder in report template: {:?}", key))?;
        out.push_str(value);
        rest = &after[end + 2..];
    }
    out.push_str(rest);

    Ok(out)
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

// `</` and `<!--` can only show up inside json strings, so escaping them keeps the json valid
fn escape_json_for_script(json: &str) -> String {
    json.replace("</", "<\\/")
        .replace("<!--", "\\u003c!--")
        .replace('\u{2028}', "\\u2028")
        .replace('\u{2029}', "\\u2029")
}
