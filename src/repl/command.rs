use crate::app::AppEvent;

/// Commands that can be parsed from REPL input
///
/// These commands map to AppEvent for handling in App core.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplCommand {
    /// Quit the REPL
    Quit,

    /// Show help information
    Help,

    /// Classify every line of a text file
    LoadFile(String),

    /// Classify clipboard text
    LoadClipboard,

    /// Classify the line itself
    Classify(String),

    /// Blank line
    Empty,

    /// Unknown `:` command
    Unknown(String),
}

/// Convert a parsed REPL command into an AppEvent
pub fn command_to_app_event(command: ReplCommand) -> AppEvent {
    match command {
        ReplCommand::Quit => AppEvent::Quit,
        ReplCommand::Help => AppEvent::Help,
        ReplCommand::LoadFile(path) => AppEvent::LoadFile(path),
        ReplCommand::LoadClipboard => AppEvent::LoadClipboard,
        ReplCommand::Classify(text) => AppEvent::Classify(text),
        ReplCommand::Empty => AppEvent::None,
        ReplCommand::Unknown(input) => AppEvent::InvalidCommand(input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_to_app_event_quit() {
        let event = command_to_app_event(ReplCommand::Quit);
        assert_eq!(event, AppEvent::Quit);
    }

    #[test]
    fn test_command_to_app_event_help() {
        let event = command_to_app_event(ReplCommand::Help);
        assert_eq!(event, AppEvent::Help);
    }

    #[test]
    fn test_command_to_app_event_load_file() {
        let event = command_to_app_event(ReplCommand::LoadFile("frases.txt".to_string()));
        assert_eq!(event, AppEvent::LoadFile("frases.txt".to_string()));
    }

    #[test]
    fn test_command_to_app_event_load_clipboard() {
        let event = command_to_app_event(ReplCommand::LoadClipboard);
        assert_eq!(event, AppEvent::LoadClipboard);
    }

    #[test]
    fn test_command_to_app_event_classify() {
        let event = command_to_app_event(ReplCommand::Classify("Filme ruim".to_string()));
        assert_eq!(event, AppEvent::Classify("Filme ruim".to_string()));
    }

    #[test]
    fn test_command_to_app_event_empty() {
        assert_eq!(command_to_app_event(ReplCommand::Empty), AppEvent::None);
    }

    #[test]
    fn test_command_to_app_event_unknown() {
        let event = command_to_app_event(ReplCommand::Unknown(":x".to_string()));
        assert!(matches!(event, AppEvent::InvalidCommand(_)));
    }
}
