use crate::errors::*;
use crate::report;
use chrono::NaiveDateTime;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use strum::{Display, EnumString, EnumVariantNames};

const MAX_SUFFIX: usize = 1000;

/// Policy for a report file that already exists
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumVariantNames)]
#[strum(serialize_all = "kebab-case")]
pub enum Collision {
    #[default]
    Error,
    Overwrite,
    Suffix,
}

fn open(path: &Path, collision: Collision) -> io::Result<File> {
    let mut opts = OpenOptions::new();
    opts.write(true);
    match collision {
        Collision::Overwrite => opts.create(true).truncate(true),
        Collision::Error | Collision::Suffix => opts.create_new(true),
    };
    opts.open(path)
}

fn create_file(dir: &Path, now: NaiveDateTime, collision: Collision) -> Result<(PathBuf, File)> {
    let path = dir.join(report::output_filename(now));

    match open(&path, collision) {
        Ok(file) => Ok((path, file)),
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
            if collision != Collision::Suffix {
                bail!("Refusing to overwrite existing report: {:?}", path);
            }

            let stem = report::output_stem(now);
            for i in 1..=MAX_SUFFIX {
                let path = dir.join(format!("{}-{}.html", stem, i));
                debug!("Report file already exists, trying {:?}", path);
                match open(&path, collision) {
                    Ok(file) => return Ok((path, file)),
                    Err(err) if err.kind() == io::ErrorKind::AlreadyExists => continue,
                    Err(err) => {
                        return Err(err).with_context(|| anyhow!("Error writing report: {:?}", path))
                    }
                }
            }

            bail!("Failed to find unused filename for report after {} attempts", MAX_SUFFIX)
        }
        Err(err) => Err(err).with_context(|| anyhow!("Error writing report: {:?}", path)),
    }
}

pub fn write_report(
    dir: &Path,
    now: NaiveDateTime,
    collision: Collision,
    content: &str,
) -> Result<PathBuf> {
    let (path, file) = create_file(dir, now, collision)?;
    debug!("Writing {} bytes to {:?}", content.len(), path);
    write_or_remove(file, &path, content)?;
    Ok(path)
}

/// Write the report into an already created file, the file is deleted again if this fails
fn write_or_remove<W: Write>(mut writer: W, path: &Path, content: &str) -> Result<()> {
    if let Err(err) = writer
        .write_all(content.as_bytes())
        .and_then(|_| writer.flush())
    {
        drop(writer);
        if let Err(err) = fs::remove_file(path) {
            warn!("Failed to remove incomplete report {:?}: {:#}", path, err);
        }
        return Err(err).with_context(|| anyhow!("Error writing report: {:?}", path));
    }
    Ok(())
}
