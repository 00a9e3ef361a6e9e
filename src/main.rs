//! rec-lang-config CLI
//!
//! Entry point for the `rec-lang-config` command-line tool.

use clap::{ArgAction, Parser};
use rec_lang_config::{
    GenerateRequest, Generator, GeneratorSettings, OutputNaming, SettingsOverrides, Shortcuts,
};
use std::env;
use std::path::PathBuf;
use std::process;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rec-lang-config")]
#[command(about = "Generate a per-language recognition training config", version)]
struct Cli {
    /// Language to generate a config for (e.g. it, ru, hi, ta)
    #[arg(long, short = 'l', required_unless_present = "list_languages")]
    language: Option<String>,

    /// Configuration overrides as key=value; dotted keys address nested fields
    #[arg(long = "opt", short = 'o', num_args = 1..)]
    opt: Vec<String>,

    /// Training label list, relative to the project root
    #[arg(long)]
    train: Option<String>,

    /// Evaluation label list, relative to the project root
    #[arg(long)]
    val: Option<String>,

    /// Character dictionary, relative to the project root
    #[arg(long)]
    dict: Option<String>,

    /// Dataset root directory, relative to the project root
    #[arg(long = "data-dir", alias = "data_dir")]
    data_dir: Option<String>,

    /// Name the output after the requested token instead of its family
    #[arg(long)]
    name_from_token: bool,

    /// Base template (default: ./rec_multi_language_lite_train.yml)
    #[arg(long)]
    template: Option<PathBuf>,

    /// Project root (default: three levels above the working directory)
    #[arg(long)]
    project_root: Option<PathBuf>,

    /// Output directory (default: the working directory)
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Settings file (TOML) with template, project_root and output_dir
    #[arg(long, short = 's')]
    settings: Option<PathBuf>,

    /// Print the run summary as JSON on stdout
    #[arg(long)]
    json: bool,

    /// List supported languages and exit
    #[arg(long)]
    list_languages: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(long, short = 'v', action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.list_languages {
        run_list_languages();
        return;
    }

    let work_dir = match env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            error!("cannot determine working directory: {}", e);
            process::exit(1);
        }
    };

    let overrides = SettingsOverrides {
        template: cli.template.clone(),
        project_root: cli.project_root.clone(),
        output_dir: cli.output_dir.clone(),
    };
    let settings = match GeneratorSettings::build(&work_dir, cli.settings.as_deref(), &overrides) {
        Ok(s) => s,
        Err(e) => {
            error!("{}", e);
            process::exit(2);
        }
    };

    let request = GenerateRequest {
        language: cli.language.unwrap_or_default(),
        overrides: cli.opt,
        shortcuts: Shortcuts {
            train: cli.train,
            val: cli.val,
            dict: cli.dict,
            data_dir: cli.data_dir,
        },
        naming: if cli.name_from_token {
            OutputNaming::Token
        } else {
            OutputNaming::Family
        },
    };

    let generated = match Generator::new(settings).generate(&request) {
        Ok(g) => g,
        Err(e) => {
            error!("{}", e);
            process::exit(e.exit_code());
        }
    };

    if cli.json {
        match generated.summary.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!("error serializing summary: {}", e);
                process::exit(1);
            }
        }
    } else {
        for line in generated.summary.to_human().lines() {
            info!("{}", line);
        }
    }
}

fn run_list_languages() {
    for token in rec_lang::supported_tokens() {
        let resolved = match rec_lang::classify(token) {
            Ok(c) => c.resolved.name().to_string(),
            Err(_) => continue,
        };
        let name = rec_lang::display_name(token).unwrap_or("-");
        println!("{:<12} {:<20} {}", token, name, resolved);
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
