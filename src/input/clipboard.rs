use super::LoadError;

/// Read clipboard text as classification inputs, one per non-blank line.
pub fn load() -> Result<Vec<String>, LoadError> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| LoadError::Clipboard(e.to_string()))?;
    let text = clipboard
        .get_text()
        .map_err(|e| LoadError::Clipboard(e.to_string()))?;

    let lines = super::sentences::split_lines(&text);
    if lines.is_empty() {
        return Err(LoadError::Clipboard("Clipboard has no text".to_string()));
    }
    Ok(lines)
}
