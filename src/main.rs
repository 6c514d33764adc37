use std::io::Read;
use std::path::PathBuf;

use clap::Parser;

use tomtat::app::App;
use tomtat::config::Config;
use tomtat::error::Result;
use tomtat::models::{Language, LengthTier, SummaryStyle};

/// Summarize news articles from their URLs.
#[derive(Parser, Debug)]
#[command(name = "tomtat", version, about)]
struct Cli {
    /// Article URLs; read newline-separated from stdin when omitted
    urls: Vec<String>,

    /// Summary tone/format
    #[arg(long, value_enum, default_value_t = SummaryStyle::Brief)]
    style: SummaryStyle,

    /// Summary language
    #[arg(long, value_enum, default_value_t = Language::Vietnamese)]
    language: Language,

    /// How much detail to ask for
    #[arg(long, value_enum, default_value_t = LengthTier::Moderate)]
    length: LengthTier,

    /// Also write each summary as a .txt file
    #[arg(long)]
    txt: bool,

    /// Also write each summary as a .pdf file
    #[arg(long)]
    pdf: bool,

    /// Directory for exported files
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging (only show warnings and errors by default)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let urls = if cli.urls.is_empty() {
        read_urls_from_stdin()?
    } else {
        cli.urls.clone()
    };

    if urls.is_empty() {
        eprintln!("You haven't entered any link.");
        return Ok(());
    }

    if cli.txt || cli.pdf {
        std::fs::create_dir_all(&cli.output_dir)?;
    }

    let config = Config::load()?;
    let app = App::new(config)?;

    let outcomes = app
        .process_batch(&urls, cli.style, cli.language, cli.length)
        .await;

    let mut failures = 0;
    for (index, outcome) in outcomes.iter().enumerate() {
        match &outcome.result {
            Ok(result) => {
                println!("==> {}", outcome.url);
                println!("{}\n", result.summary_text);

                if cli.txt {
                    match app.export_text(result, index, &cli.output_dir) {
                        Ok(path) => println!("Saved {}", path.display()),
                        Err(e) => eprintln!("{}", e),
                    }
                }
                if cli.pdf {
                    match app.export_pdf(result, index, &cli.output_dir) {
                        Ok(path) => println!("Saved {}", path.display()),
                        Err(e) => eprintln!("{}", e),
                    }
                }
            }
            Err(e) => {
                failures += 1;
                eprintln!("==> {}\n{}\n", outcome.url, e);
            }
        }
    }

    if failures > 0 {
        eprintln!("{} of {} URLs failed", failures, outcomes.len());
    }

    Ok(())
}

fn read_urls_from_stdin() -> Result<Vec<String>> {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    Ok(input
        .lines()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect())
}
