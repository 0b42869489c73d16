use clap::{Parser, ValueEnum};

use lexmood::app::{gather_inputs, App, InputSource, OutputFormat};
use lexmood::engine::{EngineConfig, Lexicon, Registration};
use lexmood::input;
use lexmood::pipeline::Pipeline;
use lexmood::reading::TokenizerKind;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TokenizerArg {
    Word,
    Whitespace,
}

impl From<TokenizerArg> for TokenizerKind {
    fn from(arg: TokenizerArg) -> Self {
        match arg {
            TokenizerArg::Word => TokenizerKind::Word,
            TokenizerArg::Whitespace => TokenizerKind::Whitespace,
        }
    }
}

/// Rule-based sentiment classifier
#[derive(Parser, Debug)]
#[command(name = "lexmood")]
#[command(about = "Classify short texts as POSITIVE, NEGATIVE or NEUTRAL from a lexicon")]
struct Args {
    /// Texts to classify, in order
    text: Vec<String>,

    /// Text file with one input per line (classified before TEXT)
    #[arg(long, short = 'i')]
    input: Option<String>,

    /// JSON lexicon {"positive": [...], "negative": [...]} replacing the built-in one
    #[arg(long, short = 'l')]
    lexicon: Option<String>,

    /// Register one-word terms in both matchers (each occurrence counts twice)
    #[arg(long)]
    dual: bool,

    /// Tokenizer for inputs and lexicon terms
    #[arg(long, value_enum, default_value = "word")]
    tokenizer: TokenizerArg,

    /// Emit one JSON report per line
    #[arg(long)]
    json: bool,

    /// Classify the built-in sample sentences
    #[arg(long)]
    demo: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let lexicon = match &args.lexicon {
        Some(path) => input::lexicon::load(path).unwrap_or_else(|err| fail(&err)),
        None => Lexicon::portuguese(),
    };
    let registration = if args.dual {
        Registration::Dual
    } else {
        Registration::Exclusive
    };
    let config = EngineConfig::default()
        .with_registration(registration)
        .with_tokenizer(args.tokenizer.into());

    // Lexicon problems stop here, before any input is read
    let pipeline = Pipeline::from_lexicon(&lexicon, &config).unwrap_or_else(|err| fail(&err));
    let format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Plain
    };

    let source = gather_inputs(args.input.as_deref(), &args.text, args.demo)
        .unwrap_or_else(|err| fail(&err));

    let inputs = match source {
        InputSource::Interactive => {
            let mut app = App::new(pipeline).with_format(format);
            let stdin = std::io::stdin();
            lexmood::repl::input::run(&mut app, stdin.lock(), std::io::stdout())?;
            return Ok(());
        }
        InputSource::Batch(inputs) => inputs,
    };

    if args.demo && !args.json {
        println!("Rule-based analysis (with preprocessing):\n");
    }

    for report in pipeline.classify_batch(&inputs) {
        println!("{}", format.render(&report)?);
    }

    Ok(())
}

/// Prints the error's message (not its Debug form) and exits non-zero.
fn fail(err: &dyn std::error::Error) -> ! {
    eprintln!("Error: {err}");
    std::process::exit(1);
}
