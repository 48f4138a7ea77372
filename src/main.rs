//! drafts CLI - create, read and query Drafts from the shell

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use drafts::cli::Args;
use drafts::interactive::{ExternalEditor, Fzf};
use drafts::{execute_command, format_output, AppInfo, Config, ExecutionContext, OsaScript, OutputFormat};

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let mut builder = pretty_env_logger::formatted_builder();
    builder.filter_level(if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    });
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.init();
}

fn run(args: Args) -> Result<()> {
    let config = Config::load(args.config.as_deref())?;
    let program = args
        .interpreter
        .clone()
        .unwrap_or_else(|| config.interpreter.program.clone());
    log::debug!("using interpreter {}", program);

    let ctx = ExecutionContext {
        interpreter: Box::new(OsaScript::new(program)),
        chooser: Box::new(Fzf::new(
            config.chooser.program.clone(),
            config.chooser.args.clone(),
        )),
        editor: Box::new(ExternalEditor::resolve(config.editor.command.as_deref())),
        app: AppInfo::new(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
    };
    let format = OutputFormat::from_json_flag(args.json);

    let result = execute_command(&args.command, &ctx, &mut std::io::stdin().lock())?;
    println!("{}", format_output(&result, &format));
    Ok(())
}
