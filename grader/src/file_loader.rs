use crate::error::GraderError;
use std::fs;
use std::path::Path;

fn check_file(path: &Path) -> Result<(), GraderError> {
    if !path.exists() {
        return Err(GraderError::FileRead(format!(
            "file not found: {}",
            path.display()
        )));
    }
    if !path.is_file() {
        return Err(GraderError::FileRead(format!(
            "not a file: {}",
            path.display()
        )));
    }
    Ok(())
}

/// Read a text file into its lines, in order.
pub fn read_lines(path: &Path) -> Result<Vec<String>, GraderError> {
    check_file(path)?;
    let content = fs::read_to_string(path)
        .map_err(|e| GraderError::FileRead(format!("{}: {}", path.display(), e)))?;
    Ok(content.lines().map(str::to_owned).collect())
}

/// Drop lines that are empty or whitespace-only. Blank lines never count
/// toward the comparison on either side.
pub fn filter_blank(lines: Vec<String>) -> Vec<String> {
    lines
        .into_iter()
        .filter(|line| !line.trim().is_empty())
        .collect()
}
