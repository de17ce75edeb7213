//! mdhtml - recursive Markdown to HTML converter.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;

use mdhtml::{GithubMarkdown, Walker, ensure_directory};

const DEFAULT_INPUT_DIR: &str = "./docs";
const DEFAULT_OUTPUT_DIR: &str = "./bin/public";

#[derive(Parser)]
#[command(name = "mdhtml")]
#[command(version, about = "Recursively converts .md files to .html files", long_about = None)]
#[command(after_help = "EXAMPLES:
    mdhtml                    Use default directories
    mdhtml ./docs ./bin       Convert docs/*.md to bin/*.html
    mdhtml ./markdown ./web   Convert markdown/*.md to web/*.html")]
struct Cli {
    /// Directory containing .md files
    #[arg(value_name = "INPUT_DIR", default_value = DEFAULT_INPUT_DIR)]
    input: PathBuf,

    /// Directory to save .html files
    #[arg(value_name = "OUTPUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
    output: PathBuf,

    /// Suppress progress output
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // try_parse so bad arguments exit 1 while --help/--version exit 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
            let _ = e.print();
            return code;
        }
    };

    if let Err(e) = ensure_directory(&cli.output) {
        eprintln!("error: {e}");
        return ExitCode::FAILURE;
    }

    let walker = Walker::new(GithubMarkdown::new()).quiet(cli.quiet);
    match walker.walk(&cli.input, &cli.output) {
        Ok(stats) => {
            if !cli.quiet {
                println!(
                    "Converted {} file(s), {} error(s)",
                    stats.files_converted, stats.errors
                );
            }
            if stats.errors == 0 {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
