use crate::input::{self, LoadError};

pub const DEMO_SENTENCES: &[&str] = &[
    "Esse filme foi incrível! Amei cada parte.",
    "O filme foi péssimo, perdi meu tempo.",
    "Achei o filme ok, nada demais.",
    "Muito divertido, ri bastante!",
    "Filme ruim",
];

/// Where the binary takes its inputs from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// No input arguments at all: read commands from stdin.
    Interactive,
    /// Classify these inputs in order and exit, even when the list is empty.
    Batch(Vec<String>),
}

/// Resolves the input arguments into an [`InputSource`].
///
/// The mode depends only on which arguments were given, never on how many
/// lines a file turned out to contain. Batch order is file lines, then
/// positional texts, then the demo sentences.
pub fn gather_inputs(
    file: Option<&str>,
    texts: &[String],
    demo: bool,
) -> Result<InputSource, LoadError> {
    if file.is_none() && texts.is_empty() && !demo {
        return Ok(InputSource::Interactive);
    }

    let mut inputs = Vec::new();
    if let Some(path) = file {
        inputs.extend(input::sentences::load(path)?);
    }
    inputs.extend(texts.iter().cloned());
    if demo {
        inputs.extend(DEMO_SENTENCES.iter().map(|s| s.to_string()));
    }
    Ok(InputSource::Batch(inputs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_no_arguments_is_interactive() {
        assert_eq!(gather_inputs(None, &[], false).unwrap(), InputSource::Interactive);
    }

    #[test]
    fn test_blank_input_file_stays_in_batch_mode() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "\n   \n").unwrap();

        let source = gather_inputs(file.path().to_str(), &[], false).unwrap();
        assert_eq!(source, InputSource::Batch(vec![]));
    }

    #[test]
    fn test_batch_order_file_then_texts_then_demo() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Amei").unwrap();

        let texts = vec!["Filme ruim".to_string()];
        match gather_inputs(file.path().to_str(), &texts, true).unwrap() {
            InputSource::Batch(inputs) => {
                assert_eq!(inputs.len(), 2 + DEMO_SENTENCES.len());
                assert_eq!(inputs[0], "Amei");
                assert_eq!(inputs[1], "Filme ruim");
                assert_eq!(inputs[2], DEMO_SENTENCES[0]);
            }
            other => panic!("Expected batch, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_input_file_is_error() {
        let result = gather_inputs(Some("nonexistent_inputs_12345.txt"), &[], false);
        assert!(matches!(result, Err(LoadError::FileNotFound(_))));
    }
}
