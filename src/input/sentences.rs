use super::LoadError;
use std::path::Path;

/// Load classification inputs from a text file, one per non-blank line.
///
/// Lines are kept as written (only the line terminator is dropped) so reports
/// echo the original text.
pub fn load(path: &str) -> Result<Vec<String>, LoadError> {
    let path = Path::new(path);

    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    Ok(split_lines(&content))
}

pub fn split_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}
