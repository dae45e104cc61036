use clap::Parser as _;

mod args;
mod debug;
mod error;
mod render;

fn main() {
    human_panic::setup_panic!();
    let result = run();
    proc_exit::exit(result);
}

fn run() -> proc_exit::ExitResult {
    let cli = Cli::parse();

    cli.color.write_global();
    let colored_stderr = !matches!(
        anstream::AutoStream::choice(&std::io::stderr()),
        anstream::ColorChoice::Never
    );
    args::init_logging(cli.verbose.log_level_filter(), colored_stderr);

    cli.command
        .run()
        .map_err(|e| proc_exit::Code::FAILURE.with_message(format!("{e:#}")))?;

    Ok(())
}

/// Homepage generator for documentation sites
#[derive(Debug, clap::Parser)]
#[command(name = "splash", version, propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    color: colorchoice_clap::Color,

    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity<clap_verbosity_flag::InfoLevel>,
}

#[derive(Clone, Debug, PartialEq, Eq, clap::Subcommand)]
enum Command {
    Render(render::RenderArgs),

    /// Print site debug information
    #[command(subcommand)]
    Debug(debug::DebugCommands),
}

impl Command {
    fn run(&self) -> error::Result<()> {
        match self {
            Self::Render(cmd) => cmd.run(),
            Self::Debug(cmd) => cmd.run(),
        }
    }
}

#[test]
fn verify_app() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
