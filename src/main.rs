//! # ccc CLI Entry Point
//!
//! `ccc init` sets up a project; anything else builds it. Build mode is the
//! default, so `ccc -l m` and `ccc build -l m` are the same.

use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use colored::*;
use inquire::Select;

use ccc::build::{self, BuildOptions, feedback::FeedbackAnalyzer};
use ccc::config::{self, Language};
use ccc::init;

#[derive(Parser)]
#[command(name = "ccc")]
#[command(about = "Incremental builds for single-directory C/C++ projects", version = env!("CARGO_PKG_VERSION"))]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    build: BuildArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Create src/, include/, bin/obj/, starter files and .ccc_config
    Init {
        /// Language (c or cpp); asks interactively when omitted
        #[arg(long, value_enum)]
        lang: Option<LangArg>,
    },
    /// Compile stale sources and link bin/main (the default)
    Build(BuildArgs),
    /// Remove object files and the linked executable
    Clean,
    /// Generate shell completion scripts
    Completion { shell: Shell },
}

#[derive(Args, Default)]
struct BuildArgs {
    /// Libraries to link, comma or space separated (e.g. -l "m,pthread")
    #[arg(short = 'l', long = "libs", value_name = "LIBS")]
    libs: Vec<String>,
    /// Show pipeline stages and every toolchain command
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum LangArg {
    C,
    #[value(alias = "c++")]
    Cpp,
}

impl From<LangArg> for Language {
    fn from(lang: LangArg) -> Self {
        match lang {
            LangArg::C => Language::C,
            LangArg::Cpp => Language::Cpp,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Init { lang }) => run_init(lang),
        Some(Commands::Build(args)) => run_build(args),
        Some(Commands::Clean) => run_clean(),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
        None => run_build(cli.build),
    };

    if let Err(e) = result {
        report_failure(&e);
        std::process::exit(1);
    }
}

fn run_init(lang: Option<LangArg>) -> Result<()> {
    let language = match lang {
        Some(lang) => lang.into(),
        None if console::user_attended() => {
            let choice = Select::new("Create a C or C++ project?", vec!["c", "cpp"]).prompt()?;
            Language::from_config_value(choice)
        }
        None => {
            println!("{} No --lang given, defaulting to C.", "!".yellow());
            Language::C
        }
    };
    init::init_project(&std::env::current_dir()?, language)
}

fn run_build(args: BuildArgs) -> Result<()> {
    let options = BuildOptions {
        libraries: args
            .libs
            .iter()
            .flat_map(|arg| config::parse_library_list(arg))
            .collect(),
        verbose: args.verbose,
    };
    let root = std::env::current_dir()?;
    build::build_project(&root, &options)?;
    Ok(())
}

fn run_clean() -> Result<()> {
    build::clean(&std::env::current_dir()?)?;
    Ok(())
}

fn report_failure(e: &anyhow::Error) {
    let build_err = e.downcast_ref::<ccc::error::BuildError>();
    let output = build_err.and_then(|b| b.toolchain_output());
    if let Some(output) = output
        && !output.trim().is_empty()
    {
        eprintln!("{}", output.trim_end());
    }

    match build_err {
        Some(b) => eprintln!("{} Error ({} stage): {}", "x".red(), b.stage(), e),
        None => eprintln!("{} Error: {}", "x".red(), e),
    }
    for cause in e.chain().skip(1) {
        eprintln!("  caused by: {}", cause);
    }

    if let Some(hint) = output.and_then(FeedbackAnalyzer::analyze) {
        eprintln!("\n{} {}", "💡".yellow(), hint);
    }
}
