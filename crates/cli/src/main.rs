use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use owo_colors::OwoColorize;
use scribo_core::{
    ArticleGenerator, FetchConfig, GeneratedArticle, GeneratorConfig, JsonConfig, MarkdownConfig, analyze_readability,
    convert_to_json, extract_seo, fetch_file, fetch_stdin, generate_caption, generate_hashtags,
};
use tracing_subscriber::EnvFilter;

mod echo;
mod report;

use echo::{
    format_size, print_article_details, print_banner, print_error, print_field, print_info, print_step,
    print_success, print_timing_summary, print_warning,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Output format for generated articles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ArticleFormat {
    Markdown,
    Text,
    Json,
}

impl FromStr for ArticleFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Ok(Self::Markdown),
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid format: {}. Valid options: markdown, text, json", s)),
        }
    }
}

/// Output format for analysis reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReportFormat {
    Text,
    Json,
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid format: {}. Valid options: text, json", s)),
        }
    }
}

/// Turn encyclopedia extracts into word-budgeted articles with readability and SEO reports
#[derive(Parser, Debug)]
#[command(name = "scribo")]
#[command(author = "Scribo Contributors")]
#[command(version)]
#[command(about = "Generate word-budgeted articles with readability and SEO reports", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a sectioned article for a topic
    Generate(GenerateArgs),
    /// Report readability and word, sentence and syllable counts
    Analyze(AnalyzeArgs),
    /// Report meta description, keywords and keyword density
    Seo(SeoArgs),
    /// Suggest hashtags and a caption
    Social(SocialArgs),
    /// Print a shell completion script
    Completions {
        #[arg(value_enum, value_name = "SHELL")]
        shell: Shell,
    },
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Topic to write about
    #[arg(value_name = "TOPIC")]
    topic: String,

    /// Source text file, or "-" for stdin (default: fetch from the encyclopedia)
    #[arg(short, long, value_name = "FILE")]
    input: Option<String>,

    /// Minimum body word count
    #[arg(long, default_value = "1000", value_name = "NUM")]
    min_words: usize,

    /// Maximum body word count
    #[arg(long, default_value = "1200", value_name = "NUM")]
    max_words: usize,

    /// Output format (markdown, text, json)
    #[arg(short, long, default_value = "markdown", value_name = "FORMAT")]
    format: ArticleFormat,

    /// Include TOML frontmatter (Markdown only)
    #[arg(long)]
    frontmatter: bool,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// HTTP timeout in seconds
    #[arg(long, default_value = "30", value_name = "SECS")]
    timeout: u64,

    /// Custom User-Agent for HTTP requests
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,
}

#[derive(Args, Debug)]
struct AnalyzeArgs {
    /// Text file to analyze, or "-" for stdin
    #[arg(value_name = "INPUT")]
    input: String,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text", value_name = "FORMAT")]
    format: ReportFormat,
}

#[derive(Args, Debug)]
struct SeoArgs {
    /// Text file to analyze, or "-" for stdin
    #[arg(value_name = "INPUT")]
    input: String,

    /// Title to report alongside the keywords
    #[arg(long, default_value = "", value_name = "TITLE")]
    title: String,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text", value_name = "FORMAT")]
    format: ReportFormat,
}

#[derive(Args, Debug)]
struct SocialArgs {
    /// Text file to caption, or "-" for stdin
    #[arg(value_name = "INPUT")]
    input: String,

    /// Topic used for the leading hashtag
    #[arg(long, value_name = "TOPIC")]
    topic: String,

    /// Maximum number of hashtags
    #[arg(long, default_value = "8", value_name = "NUM")]
    hashtags: usize,

    /// Maximum caption length in characters
    #[arg(long, default_value = "280", value_name = "NUM")]
    max_chars: usize,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text", value_name = "FORMAT")]
    format: ReportFormat,
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "scribo=debug,scribo_core=debug" } else { "warn" }));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Reads a file path or "-" for stdin.
fn read_input(input: &str, verbose: bool) -> anyhow::Result<String> {
    let text = if input == "-" {
        fetch_stdin().context("Failed to read from stdin")?
    } else {
        fetch_file(input).with_context(|| format!("Failed to read file: {}", input))?
    };

    if verbose {
        print_field("Input", if input == "-" { "stdin" } else { input });
        print_field("Size", format_size(text.len()));
    }

    Ok(text)
}

fn write_output(output: Option<&Path>, content: &str) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            fs::write(path, content).with_context(|| format!("Failed to write to file: {}", path.display()))?;
            print_success(&format!("Output written to {}", path.display().bright_white()));
        }
        None => print!("{}", content),
    }
    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T) -> anyhow::Result<String> {
    let mut json = convert_to_json(value, &JsonConfig { pretty: true }).context("Failed to serialize JSON")?;
    json.push('\n');
    Ok(json)
}

fn render_article(article: &GeneratedArticle, args: &GenerateArgs) -> anyhow::Result<String> {
    match args.format {
        ArticleFormat::Markdown => {
            let config = MarkdownConfig { include_frontmatter: args.frontmatter, ..Default::default() };
            article.to_markdown_with_config(&config).context("Failed to convert to Markdown")
        }
        ArticleFormat::Text => Ok(article.to_text() + "\n"),
        ArticleFormat::Json => to_json(article),
    }
}

async fn run_generate(args: GenerateArgs, verbose: bool) -> anyhow::Result<()> {
    let total_start = Instant::now();
    let mut timings: Vec<(String, Duration)> = Vec::new();

    let mut fetch = FetchConfig { timeout: args.timeout, ..Default::default() };
    if let Some(ua) = &args.user_agent {
        fetch.user_agent = ua.clone();
    }
    let config = GeneratorConfig::builder()
        .min_words(args.min_words)
        .max_words(args.max_words)
        .fetch(fetch)
        .build();
    config.validate().context("Invalid word budget")?;
    tracing::debug!(topic = %args.topic, min_words = args.min_words, max_words = args.max_words, "starting generation");
    let generator = ArticleGenerator::with_config(config);

    let step_start = Instant::now();
    let source = match &args.input {
        Some(input) => {
            if verbose {
                print_step(1, 3, "Reading source text");
            }
            read_input(input, verbose)?
        }
        None => {
            if verbose {
                print_step(1, 3, &format!("Fetching sources for {}", args.topic.bright_white().underline()));
            }
            scribo_core::fetch_sources(&args.topic, &generator.config().fetch)
                .await
                .with_context(|| format!("Failed to fetch sources for topic: {}", args.topic))?
        }
    };
    timings.push(("Source".to_string(), step_start.elapsed()));

    if verbose {
        print_step(2, 3, "Reflowing and analyzing");
    }
    let step_start = Instant::now();
    let article = generator.generate(&args.topic, &source).context("Failed to generate article")?;
    timings.push(("Generate".to_string(), step_start.elapsed()));

    if article.document.body_word_count() < args.min_words {
        print_warning(&format!(
            "Source has only {} words; the article is shorter than {} words",
            article.document.body_word_count(),
            args.min_words
        ));
    }

    if verbose {
        print_step(3, 3, "Writing output");
        print_field("Format", format!("{:?}", args.format));
    }
    let output = render_article(&article, &args)?;
    write_output(args.output.as_deref(), &output)?;

    if verbose {
        print_article_details(&article);
        print_timing_summary(total_start.elapsed(), &timings);
    }

    Ok(())
}

fn run_analyze(args: AnalyzeArgs, verbose: bool) -> anyhow::Result<()> {
    let text = read_input(&args.input, verbose)?;
    let report = analyze_readability(&text);

    let output = match args.format {
        ReportFormat::Text => report::render_readability(&report),
        ReportFormat::Json => to_json(&report)?,
    };
    write_output(None, &output)
}

fn run_seo(args: SeoArgs, verbose: bool) -> anyhow::Result<()> {
    let text = read_input(&args.input, verbose)?;
    let report = extract_seo("", &text, &args.title);

    let output = match args.format {
        ReportFormat::Text => report::render_seo(&report),
        ReportFormat::Json => to_json(&report)?,
    };
    write_output(None, &output)
}

fn run_social(args: SocialArgs, verbose: bool) -> anyhow::Result<()> {
    let text = read_input(&args.input, verbose)?;
    let keywords = extract_seo("", &text, &args.topic).keywords;
    let hashtags = generate_hashtags(&args.topic, &keywords, args.hashtags);
    let caption = generate_caption(&text, &hashtags, args.max_chars);

    let output = match args.format {
        ReportFormat::Text => report::render_social(&hashtags, &caption),
        ReportFormat::Json => to_json(&serde_json::json!({ "hashtags": hashtags, "caption": caption }))?,
    };
    write_output(None, &output)
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.verbose {
        print_banner();
        print_info("Debug logging enabled");
        eprintln!();
    }

    let result = match cli.command {
        Command::Generate(args) => run_generate(args, cli.verbose).await,
        Command::Analyze(args) => run_analyze(args, cli.verbose),
        Command::Seo(args) => run_seo(args, cli.verbose),
        Command::Social(args) => run_social(args, cli.verbose),
        Command::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "scribo", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(err) = result {
        print_error(&format!("{:#}", err));
        std::process::exit(1);
    }
}
