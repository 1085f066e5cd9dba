use std::{env, fs, path::PathBuf};

fn input_arg() -> clap::Arg {
    clap::arg!(<INPUT> "Text file to read, or '-' for stdin")
}

fn report_format_arg() -> clap::Arg {
    clap::arg!(-f --format <FORMAT> "Output format (text, json)")
        .value_name("FORMAT")
        .default_value("text")
        .value_parser(["text", "json"])
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let generate = clap::Command::new("generate")
        .about("Generate a sectioned article for a topic")
        .arg(clap::arg!(<TOPIC> "Topic to write about"))
        .arg(clap::arg!(-i --input <FILE> "Source text file, or '-' for stdin").value_name("FILE"))
        .arg(clap::arg!(--"min-words" <NUM> "Minimum body word count").default_value("1000"))
        .arg(clap::arg!(--"max-words" <NUM> "Maximum body word count").default_value("1200"))
        .arg(
            clap::arg!(-f --format <FORMAT> "Output format (markdown, text, json)")
                .value_name("FORMAT")
                .default_value("markdown")
                .value_parser(["markdown", "text", "json"]),
        )
        .arg(clap::arg!(--frontmatter "Include TOML frontmatter (Markdown only)"))
        .arg(
            clap::arg!(-o --output <FILE> "Output file (default: stdout)")
                .value_name("FILE")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(clap::arg!(--timeout <SECS> "HTTP timeout in seconds").default_value("30"))
        .arg(clap::arg!(--"user-agent" <UA> "Custom User-Agent for HTTP requests").value_name("UA"));

    let analyze = clap::Command::new("analyze")
        .about("Report readability and word, sentence and syllable counts")
        .arg(input_arg())
        .arg(report_format_arg());

    let seo = clap::Command::new("seo")
        .about("Report meta description, keywords and keyword density")
        .arg(input_arg())
        .arg(clap::arg!(--title <TITLE> "Title to report alongside the keywords"))
        .arg(report_format_arg());

    let social = clap::Command::new("social")
        .about("Suggest hashtags and a caption")
        .arg(input_arg())
        .arg(clap::arg!(--topic <TOPIC> "Topic used for the leading hashtag").required(true))
        .arg(clap::arg!(--hashtags <NUM> "Maximum number of hashtags").default_value("8"))
        .arg(clap::arg!(--"max-chars" <NUM> "Maximum caption length in characters").default_value("280"))
        .arg(report_format_arg());

    let mut cmd = clap::Command::new("scribo")
        .version("1.0.0")
        .author("Scribo Contributors")
        .about("Generate word-budgeted articles with readability and SEO reports")
        .arg(clap::arg!(-v --verbose "Enable debug logging").global(true))
        .subcommand(generate)
        .subcommand(analyze)
        .subcommand(seo)
        .subcommand(social)
        .subcommand(
            clap::Command::new("completions")
                .about("Print a shell completion script")
                .arg(clap::arg!(<SHELL> "Target shell").value_parser(["bash", "zsh", "fish", "powershell", "elvish"])),
        );

    clap_complete::generate_to(clap_complete::shells::Bash, &mut cmd, "scribo", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Zsh, &mut cmd, "scribo", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Fish, &mut cmd, "scribo", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::PowerShell, &mut cmd, "scribo", &completions_dir).unwrap();

    println!(
        "cargo:warning=Shell completions generated in: {}",
        completions_dir.display()
    );
}
