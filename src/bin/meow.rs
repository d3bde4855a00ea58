use std::{path::{Path, PathBuf}, process::ExitCode};
use clap::{Parser, Subcommand};
use meowlang::{frontend, runtime, Language, VMConfig};
use meowlang::runtime::Hooks;
use meowlang::shared::report::format_report;

/*
 * Meowlang command line runner
 *
 * Usage e.g. meow run hello.meow
 * Set RUST_LOG=meowlang=trace to log every executed instruction.
 */

#[derive(Parser)]
#[command(name = "meow", version, about = "Runs and converts Meowlang programs")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Runs a program.
    Run {
        /// Source file, numeric or symbolic form.
        file: PathBuf,
        /// Prints every runtime event to standard error.
        #[arg(long)]
        trace: bool,
        /// Aborts the program after this many instructions.
        #[arg(long, value_name = "STEPS")]
        step_limit: Option<u64>,
    },
    /// Prints a program as symbolic source.
    Convert {
        /// Source file, numeric or symbolic form.
        file: PathBuf,
        /// Language of the meow tokens (en, zh, ja, ko, fr, de, ru).
        #[arg(long, short, default_value_t = Language::English)]
        lang: Language,
    },
    /// Prints a disassembly listing of a program.
    Disasm {
        /// Source file, numeric or symbolic form.
        file: PathBuf,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Run { file, trace, step_limit } => run(&file, trace, step_limit),
        Command::Convert { file, lang } => compile(&file).map(|cells| print!("{}", frontend::to_symbolic(&cells, lang))),
        Command::Disasm { file } => compile(&file).map(|cells| print!("{}", runtime::format_program(&cells))),
    };
    result.map_or(ExitCode::FAILURE, |_| ExitCode::SUCCESS)
}

fn run(file: &Path, trace: bool, step_limit: Option<u64>) -> Result<(), ()> {
    let code = read(file)?;
    let mut hooks = Hooks::new();
    if trace {
        hooks = hooks.on_step(|event| eprintln!("{}", event));
    }
    let config = VMConfig { step_limit };
    meowlang::run_with_config(&code, hooks, config).map_err(|_| ())
}

fn compile(file: &Path) -> Result<Vec<meowlang::Cell>, ()> {
    let code = read(file)?;
    frontend::parse(&code).map_err(|err| {
        let (line, column) = err.loc(&code);
        let message = format!("{} in line {}, column {} in file {}", err.kind(), line, column, file.display());
        eprintln!("{}", format_report(meowlang::Stage::Parser, &message));
    })
}

fn read(file: &Path) -> Result<String, ()> {
    std::fs::read_to_string(file).map_err(|err| {
        eprintln!("{}", format_report("File", &format!("{}: {}", file.display(), err)));
    })
}
