use crate::updater::tools::runner::ToolCommand;
use crate::updater::utils::config::ToolPaths;
use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;
use zip::ZipArchive;

/// Extracts into the working directory, next to the archive.
pub fn unzip_command(tools: &ToolPaths, zip_path: &str) -> ToolCommand {
    ToolCommand::new(&tools.unzip).arg(zip_path)
}

pub fn strip_command(tools: &ToolPaths, path: &str) -> ToolCommand {
    ToolCommand::new(&tools.strip).arg(path)
}

/// Names of every entry in the archive, in archive order.
pub fn archive_entries(zip_path: &Path) -> Result<Vec<String>> {
    let file = File::open(zip_path)
        .with_context(|| format!("Failed to open archive {}", zip_path.display()))?;
    let mut archive = ZipArchive::new(file)
        .with_context(|| format!("Failed to read archive {}", zip_path.display()))?;

    let mut names = Vec::with_capacity(archive.len());
    for i in 0..archive.len() {
        let entry = archive.by_index_raw(i)?;
        names.push(entry.name().to_string());
    }

    Ok(names)
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::io::Write;
    use zip::ZipWriter;
    use zip::write::SimpleFileOptions;

    pub fn write_zip(path: &Path, entries: &[(&str, &str)]) {
        let mut zip = ZipWriter::new(File::create(path).unwrap());
        for (name, contents) in entries {
            zip.start_file(*name, SimpleFileOptions::default()).unwrap();
            zip.write_all(contents.as_bytes()).unwrap();
        }
        zip.finish().unwrap();
    }

    /// Does what `unzip <archive>` would do in `cwd`.
    pub fn extract_in_place(zip_path: &Path, cwd: &Path) -> Result<()> {
        let mut archive = ZipArchive::new(File::open(zip_path)?)?;
        archive.extract(cwd)?;
        Ok(())
    }
}
