// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{info, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;

use crate::app_config::Config;
use crate::translator::Terminex;

mod app_config;
mod errors;
mod glossary;
mod glossary_loader;
mod translator;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate texts using glossary term substitution (default command)
    Translate(TranslateArgs),

    /// List the languages available in the glossary directory
    Languages,

    /// List the domains available in the glossary directory
    Domains {
        /// Restrict the listing to one language
        #[arg(short, long)]
        language: Option<String>,
    },

    /// Print the resolved glossary for a language (and optional domain)
    Terms {
        /// Target language code
        #[arg(short, long)]
        language: String,

        /// Domain to restrict to; all domains combined when omitted
        #[arg(short, long)]
        domain: Option<String>,
    },

    /// Generate shell completions for terminex
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct TranslateArgs {
    /// Text(s) to translate; several texts run as one batch
    #[arg(value_name = "TEXT", required = true)]
    texts: Vec<String>,

    /// Target language code (e.g. 'twi')
    #[arg(short = 'l', long)]
    target_language: Option<String>,

    /// Glossary domain (e.g. 'agric'); all domains combined when omitted
    #[arg(short, long)]
    domain: Option<String>,

    /// Show matched terms alongside the translated text
    #[arg(short = 't', long)]
    show_terms: bool,
}

/// Terminex - glossary-controlled term translation
///
/// Locates domain-specific technical terms in free-form text and substitutes
/// each occurrence with a curated translation drawn from CSV glossaries.
#[derive(Parser, Debug)]
#[command(name = "terminex")]
#[command(version = "0.1.0")]
#[command(about = "Glossary-controlled term translation tool")]
#[command(long_about = "Terminex substitutes glossary-controlled terminology in free-form text.

Glossary files are CSV tables named <domain>_terms_<language>.csv with
id, term and translation columns.

EXAMPLES:
    terminex -l twi 'The abattoir uses acaricide'     # Union of all domains
    terminex -l twi -d agric 'The abattoir is new'    # One domain only
    terminex languages                                # List loaded languages
    terminex domains -l twi                           # List domains for twi
    terminex terms -l twi -d agric                    # Dump one glossary
    terminex completions bash > terminex.bash         # Shell completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a
    different config file with --config. If the config file doesn't exist,
    a default one will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Text(s) to translate when no subcommand is given
    #[arg(value_name = "TEXT")]
    texts: Vec<String>,

    /// Target language code (e.g. 'twi')
    #[arg(short = 'l', long)]
    target_language: Option<String>,

    /// Glossary domain; all domains combined when omitted
    #[arg(short, long)]
    domain: Option<String>,

    /// Show matched terms alongside the translated text
    #[arg(short = 't', long)]
    show_terms: bool,

    /// Glossary directory (overrides the configured one)
    #[arg(short, long)]
    glossary_dir: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {:5} {}\x1B[0m",
                color,
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    if let Some(cmd_log_level) = &cli.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(config_log_level.to_level_filter());
    }

    let config = Config::from_file(&cli.config_path)?;
    if cli.log_level.is_none() {
        log::set_max_level(config.log_level.to_level_filter());
    }

    let glossary_dir = cli
        .glossary_dir
        .clone()
        .unwrap_or_else(|| config.glossary_dir.clone());

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "terminex", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Languages) => {
            let translator = Terminex::new(&glossary_dir)?;
            for language in translator.store().available_languages() {
                println!("{}", language);
            }
            Ok(())
        }
        Some(Commands::Domains { language }) => {
            let translator = Terminex::new(&glossary_dir)?;
            for domain in translator.store().available_domains(language.as_deref())? {
                println!("{}", domain);
            }
            Ok(())
        }
        Some(Commands::Terms { language, domain }) => {
            let translator = Terminex::new(&glossary_dir)?;
            for record in translator.store().get_glossary(&language, domain.as_deref())? {
                println!("{}\t{}\t{}", record.id, record.term, record.translation);
            }
            Ok(())
        }
        Some(Commands::Translate(args)) => run_translate(args, &config, &glossary_dir),
        None => {
            // Default behavior - use top-level args for backwards compatibility
            if cli.texts.is_empty() {
                return Err(anyhow!("TEXT is required when no subcommand is specified"));
            }

            let translate_args = TranslateArgs {
                texts: cli.texts,
                target_language: cli.target_language,
                domain: cli.domain,
                show_terms: cli.show_terms,
            };
            run_translate(translate_args, &config, &glossary_dir)
        }
    }
}

fn run_translate(options: TranslateArgs, config: &Config, glossary_dir: &str) -> Result<()> {
    let target_language = options
        .target_language
        .or_else(|| config.target_language.clone())
        .ok_or_else(|| {
            anyhow!("No target language given; pass --target-language or set it in the config")
        })?;

    let translator = Terminex::new(glossary_dir)?;
    info!(
        "Translating {} text(s) to '{}'",
        options.texts.len(),
        target_language
    );

    let results =
        translator.translate_batch(&options.texts, &target_language, options.domain.as_deref())?;

    for result in results {
        println!("{}", result.translated_text);
        if options.show_terms {
            for (term, translation) in &result.terms_used {
                println!("  {} -> {}", term, translation);
            }
        }
    }

    Ok(())
}
