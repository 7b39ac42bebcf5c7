use crate::errors::*;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, PartialEq, Eq, Deserialize)]
pub struct Descriptor {
    pub name: Option<String>,
    pub version: String,
}

impl Descriptor {
    pub fn from_scan(doc: &Value) -> Result<Self> {
        let descriptor = doc
            .get("descriptor")
            .ok_or_else(|| anyhow!("Missing field: descriptor"))
            .and_then(|v| Descriptor::deserialize(v).map_err(Error::from))
            .context("Scan result is missing descriptor.version")?;
        Ok(descriptor)
    }
}

/// Best-effort overview of a scan result, only used for log output
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub target: Option<String>,
    pub matches: Option<usize>,
    pub severities: BTreeMap<String, usize>,
}

impl Summary {
    pub fn from_scan(doc: &Value) -> Self {
        // image scans nest the target, directory scans use a plain string
        let target = match doc.pointer("/source/target") {
            Some(Value::String(s)) => Some(s.clone()),
            Some(target) => target
                .get("userInput")
                .and_then(Value::as_str)
                .map(String::from),
            None => None,
        };

        let mut summary = Summary {
            target,
            ..Default::default()
        };

        if let Some(matches) = doc.get("matches").and_then(Value::as_array) {
            summary.matches = Some(matches.len());
            for m in matches {
                if let Some(severity) = m.pointer("/vulnerability/severity").and_then(Value::as_str) {
                    *summary.severities.entry(severity.to_string()).or_default() += 1;
                }
            }
        }

        summary
    }
}
