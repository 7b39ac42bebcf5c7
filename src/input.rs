use crate::errors::*;
use serde_json::Value;
use std::io::Read;

pub fn read_scan<R: Read>(mut reader: R) -> Result<Value> {
    let mut buf = Vec::new();
    reader
        .read_to_end(&mut buf)
        .context("Failed to read scan result from stdin")?;
    debug!("Read {} bytes of input", buf.len());

    let doc = serde_json::from_slice(&buf).context("Error parsing JSON input")?;
    Ok(doc)
}
