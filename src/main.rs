//! Emolex CLI
//!
//! Usage:
//!   emolex --text "your text here"           # Single analysis
//!   emolex --interactive                     # Read lines from stdin
//!   emolex --serve                           # HTTP API server
//!   emolex --list                            # Supported emotions
//!   emolex --self-test                       # Run example sentences
//!   emolex --text "text" --json              # JSON output

use clap::Parser;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

use emolex::core::{run_server, Analyzer, AnalyzerConfig, Lexicon, MatchMode};
use emolex::types::AnalysisResult;
use emolex::{MAX_MATCHES, VERSION};

#[derive(Parser, Debug)]
#[command(
    name = "emolex",
    version = VERSION,
    about = "Emolex - Lexicon-based emotion classifier for Indonesian/English text",
    long_about = "Emolex classifies short texts into one of nine emotions using a fixed\n\
                  lexicon of weighted keywords and phrase patterns.\n\n\
                  Emotions:\n  \
                  marah, sedih, cemas, agresif, defensif,\n  \
                  penyesalan, kesal, senang, netral\n\n\
                  Modes:\n  \
                  --interactive  Analyze lines from stdin\n  \
                  --serve        HTTP API server mode\n  \
                  --list         Show the lexicon summary\n  \
                  --self-test    Analyze the built-in example sentences"
)]
struct Args {
    /// Text to analyze (single mode)
    #[arg(short, long)]
    text: Option<String>,

    /// Interactive mode - read lines from stdin
    #[arg(short, long)]
    interactive: bool,

    /// Run as HTTP API server
    #[arg(short, long)]
    serve: bool,

    /// Server address
    #[arg(long, env = "EMOLEX_ADDR", default_value = "127.0.0.1:5001")]
    addr: String,

    /// List supported emotions
    #[arg(long)]
    list: bool,

    /// Run the example sentences
    #[arg(long)]
    self_test: bool,

    /// Only count keywords on word boundaries
    #[arg(long)]
    word_boundary: bool,

    /// Matches kept per result
    #[arg(long, default_value_t = MAX_MATCHES)]
    max_matches: usize,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Show score breakdown
    #[arg(long)]
    verbose: bool,
}

impl Args {
    fn analyzer_config(&self) -> AnalyzerConfig {
        AnalyzerConfig {
            match_mode: if self.word_boundary {
                MatchMode::WordBoundary
            } else {
                MatchMode::Substring
            },
            max_matches: self.max_matches,
        }
    }
}

#[tokio::main]
async fn main() {
    init_logging();
    let args = Args::parse();

    if args.no_color {
        colored::control::set_override(false);
    }

    let lexicon = match Lexicon::builtin() {
        Ok(lexicon) => lexicon,
        Err(e) => {
            eprintln!("Lexicon error: {}", e);
            std::process::exit(1);
        }
    };
    let analyzer = Analyzer::new(lexicon, args.analyzer_config());

    let outcome = if args.serve {
        run_server(&args.addr, analyzer).await
    } else if args.list {
        run_list(&analyzer, &args)
    } else if args.self_test {
        run_self_test(&analyzer, &args)
    } else if let Some(ref text) = args.text {
        run_single(&analyzer, text, &args)
    } else {
        run_interactive(&analyzer, &args)
    };

    if let Err(e) = outcome {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so --json output stays parseable
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("emolex=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Analyze a single text
fn run_single(analyzer: &Analyzer, text: &str, args: &Args) -> CliResult {
    let result = analyzer.analyze(text);
    print_result(&result, args)
}

/// Analyze lines from stdin
fn run_interactive(analyzer: &Analyzer, args: &Args) -> CliResult {
    print_header("Interactive", args.no_color);
    println!("Type text and press Enter to analyze. Type 'quit' to exit.");
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut analyzed = 0usize;

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            println!("\nSession ended. Analyzed: {}", analyzed);
            break;
        }
        if line.is_empty() {
            continue;
        }

        print_result(&analyzer.analyze(line), args)?;
        analyzed += 1;
    }
    Ok(())
}

/// Print the lexicon summary
fn run_list(analyzer: &Analyzer, args: &Args) -> CliResult {
    let catalog = analyzer.list_supported_emotions();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
        return Ok(());
    }

    print_header("Emotions", args.no_color);
    for emotion in &catalog.supported_emotions {
        let Some(details) = catalog.emotion_details.get(emotion) else {
            continue;
        };
        println!(
            "{} {:<11} w={:.1} keywords={:<3} patterns={}  [{}]",
            emotion.emoticon(),
            emotion.id().bold(),
            details.weight,
            details.keyword_count,
            details.pattern_count,
            details.sample_keywords.join(", ").dimmed()
        );
    }
    println!();
    println!("Total keywords: {}", catalog.total_keywords);
    Ok(())
}

/// Run the example sentences
fn run_self_test(analyzer: &Analyzer, args: &Args) -> CliResult {
    let report = analyzer.self_test();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_header("Self-test", args.no_color);
    for entry in &report.test_results {
        println!(
            "{} {:<11} {:.2}  {}",
            entry.emoticon,
            entry.emotion.id().bold(),
            entry.confidence,
            entry.text.dimmed()
        );
    }
    Ok(())
}

fn print_result(result: &AnalysisResult, args: &Args) -> CliResult {
    if args.json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else if args.verbose {
        print_verbose(result);
    } else if args.no_color {
        println!("{}", result.to_parseable_string());
    } else {
        println!("{}", result.to_terminal_string());
    }
    Ok(())
}

fn print_header(mode: &str, no_color: bool) {
    let title = format!("Emolex v{} - {}", VERSION, mode);
    if no_color {
        println!("========================================");
        println!("  {}", title);
        println!("========================================");
    } else {
        println!("{}", "════════════════════════════════════════".bold());
        println!("  {}", title.bold());
        println!("{}", "════════════════════════════════════════".bold());
    }
    println!();
}

fn print_verbose(result: &AnalysisResult) {
    println!("{}", result.to_terminal_string());
    if let Some(processed) = &result.processed_text {
        println!("  processed: {}", processed.dimmed());
    }
    if let Some(error) = &result.error {
        println!("  {}", error.red());
    }
    for m in &result.matches {
        println!("  match: {}", m);
    }
    if let Some(scores) = &result.all_scores {
        println!("  scores:");
        for (emotion, score) in &scores.0 {
            let marker = if *emotion == result.emotion { "*" } else { " " };
            println!("   {} {:<11} {:.3}", marker, emotion.id(), score);
        }
    }
}
