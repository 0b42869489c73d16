use std::io::{self, BufRead, Write};

use crate::app::{App, AppEvent, AppMode, AppOutput};

const PROMPT: &str = "lexmood> ";

/// Line-oriented REPL over any reader/writer pair.
///
/// Reports go to `out`; warnings go to `out` too so an interactive user
/// sees them next to the prompt.
pub fn run<R: BufRead, W: Write>(app: &mut App, input: R, mut out: W) -> io::Result<()> {
    write!(out, "{PROMPT}")?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        let output = app.handle_event(to_app_event(&line));
        write_output(app, &output, &mut out)?;

        if app.mode == AppMode::Quit {
            return Ok(());
        }
        write!(out, "{PROMPT}")?;
        out.flush()?;
    }

    writeln!(out)?;
    Ok(())
}

/// Parses an input line and converts it to an AppEvent
pub fn to_app_event(line: &str) -> AppEvent {
    use super::command::command_to_app_event;
    use super::parser::parse_repl_input;

    command_to_app_event(parse_repl_input(line))
}

fn write_output<W: Write>(app: &App, output: &AppOutput, out: &mut W) -> io::Result<()> {
    match output {
        AppOutput::Reports(reports) => {
            for report in reports {
                let line = app
                    .format
                    .render(report)
                    .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
                writeln!(out, "{line}")?;
            }
        }
        AppOutput::Message(message) => writeln!(out, "{message}")?,
        AppOutput::Warning(warning) => writeln!(out, "warning: {warning}")?,
        AppOutput::Nothing => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{EngineConfig, Lexicon};
    use crate::pipeline::Pipeline;

    fn run_script(script: &str) -> (App, String) {
        let pipeline =
            Pipeline::from_lexicon(&Lexicon::portuguese(), &EngineConfig::default()).unwrap();
        let mut app = App::new(pipeline);
        let mut out = Vec::new();
        run(&mut app, script.as_bytes(), &mut out).unwrap();
        (app, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_repl_classifies_lines_until_quit() {
        let (app, out) = run_script("Filme ruim\nAmei!\n:q\nbom\n");
        assert_eq!(app.mode, AppMode::Quit);
        assert!(out.contains("Filme ruim : NEGATIVE"));
        assert!(out.contains("Amei! : POSITIVE"));
        assert!(!out.contains("bom : POSITIVE"));
    }

    #[test]
    fn test_repl_ends_at_eof() {
        let (app, out) = run_script("Achei ok\n");
        assert_eq!(app.mode, AppMode::Repl);
        assert!(out.contains("Achei ok : NEUTRAL"));
    }

    #[test]
    fn test_repl_reports_unknown_command() {
        let (_, out) = run_script(":wat\n:q\n");
        assert!(out.contains("warning: Unknown command: :wat"));
    }

    #[test]
    fn test_repl_help() {
        let (_, out) = run_script(":h\n:q\n");
        assert!(out.contains("@<file>"));
    }
}
