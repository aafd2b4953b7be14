use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;
use yambook_core::{
    ConvertConfig, Converter, count_folders, count_links, from_yaml, read_stdin, read_text, to_yaml, write_text,
};

mod echo;

use echo::{format_size, print_banner, print_detail, print_error, print_step, print_success};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Convert browser bookmark files to editable YAML and back
#[derive(Parser, Debug)]
#[command(name = "yambook")]
#[command(version)]
#[command(about = "Convert browser bookmark files to editable YAML and back", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Spaces of indentation per level in generated bookmark files
    #[arg(long, global = true, default_value = "4", value_name = "N")]
    indent: usize,

    /// Name of the folder wrapping ordinary menu bookmarks
    #[arg(long, global = true, default_value = "Bookmarks", value_name = "NAME")]
    menu_name: String,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a bookmark file to YAML
    #[command(name = "bookmark2yaml")]
    BookmarkToYaml {
        /// Bookmark file, or "-" for stdin
        #[arg(value_name = "INPUT")]
        input: String,

        /// Output YAML file, or "-" for stdout
        #[arg(short, long = "output-yaml", visible_alias = "output", default_value = "bookmarks.yaml")]
        output: String,
    },

    /// Convert YAML to a bookmark file
    #[command(name = "yaml2bookmark")]
    YamlToBookmark {
        /// YAML file, or "-" for stdin
        #[arg(value_name = "INPUT")]
        input: String,

        /// Output bookmark file, or "-" for stdout
        #[arg(short, long = "output-bookmark", visible_alias = "output", default_value = "bookmarks.html")]
        output: String,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn read_input(input: &str, verbose: bool) -> anyhow::Result<String> {
    let text = if input == "-" {
        if verbose {
            print_step(1, 3, "Reading from stdin");
        }
        read_stdin().context("Failed to read from stdin")?
    } else {
        if verbose {
            print_step(1, 3, &format!("Reading from file {}", input.bright_white()));
        }
        read_text(input).with_context(|| format!("Failed to read file: {}", input))?
    };

    if verbose {
        print_detail("Size", &format_size(text.len()));
        eprintln!();
    }

    Ok(text)
}

fn write_output(output: &str, text: &str, verbose: bool) -> anyhow::Result<()> {
    if output == "-" {
        print!("{}", text);
        return Ok(());
    }

    write_text(output, text).with_context(|| format!("Failed to write to file: {}", output))?;

    if verbose {
        print_success(&format!("Output written to {}", output.bright_white()));
    }

    Ok(())
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = ConvertConfig::builder()
        .indent_width(cli.indent)
        .menu_folder_name(&cli.menu_name)
        .build();
    let converter = Converter::with_config(config);

    if cli.verbose {
        print_banner();
    }

    match &cli.command {
        Command::BookmarkToYaml { input, output } => {
            let html = read_input(input, cli.verbose)?;

            if cli.verbose {
                print_step(2, 3, "Parsing bookmark tree");
            }
            let forest = converter.html_to_forest(&html);

            if cli.verbose {
                print_detail("Links", &count_links(&forest).to_string());
                print_detail("Folders", &count_folders(&forest).to_string());
                eprintln!();
                print_step(3, 3, "Writing YAML documents");
            }
            let yaml = to_yaml(&forest).context("Failed to serialize bookmarks as YAML")?;

            write_output(output, &yaml, cli.verbose)
        }
        Command::YamlToBookmark { input, output } => {
            let yaml = read_input(input, cli.verbose)?;

            if cli.verbose {
                print_step(2, 3, "Parsing YAML documents");
            }
            let forest = from_yaml(&yaml).with_context(|| format!("Failed to parse YAML from {}", input))?;

            if cli.verbose {
                print_detail("Links", &count_links(&forest).to_string());
                print_detail("Folders", &count_folders(&forest).to_string());
                eprintln!();
                print_step(3, 3, "Writing bookmark file");
            }
            let html = converter.forest_to_html(&forest);

            write_output(output, &html, cli.verbose)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            print_error(&format!("{:#}", err));
            ExitCode::FAILURE
        }
    }
}
