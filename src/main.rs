use clap::{ArgAction, Parser, Subcommand};
use lineup_algos::{BenchArgs, DemoArgs};

#[derive(Parser)]
#[command(author, version, about, long_about = None, styles=get_styles())] // Read from `Cargo.toml`
struct Cli {
    /// Increase logging verbosity (-v, -vv, -vvv). `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    commands: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sort a small list with every algorithm and binary search a word list
    Demo(DemoArgs),

    /// Benchmark the sorting algorithms on random input
    Bench(BenchArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose)?;

    match cli.commands {
        Commands::Demo(demo_args) => demo_args.run(),
        Commands::Bench(bench_args) => bench_args.run(),
    }

    Ok(())
}

fn setup_logging(verbosity: u8) -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;

    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;

    tracing::debug!(verbosity, "logging initialised");
    Ok(())
}

fn get_styles() -> clap::builder::Styles {
    clap::builder::Styles::styled()
        .usage(
            anstyle::Style::new()
                .bold()
                .underline()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Blue))),
        )
        .header(
            anstyle::Style::new()
                .bold()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Blue))),
        )
        .literal(
            anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))),
        )
        .invalid(
            anstyle::Style::new()
                .bold()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
        )
        .error(
            anstyle::Style::new()
                .bold()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
        )
        .valid(
            anstyle::Style::new()
                .bold()
                .underline()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Cyan))),
        )
        .placeholder(
            anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
        )
}

#[test]
fn verify_cli() {
    use clap::CommandFactory;
    Cli::command().debug_assert()
}

#[test]
fn parses_demo_target_and_verbosity() {
    let cli = Cli::try_parse_from(["lineup", "-vv", "demo", "--target", "zzz"]).unwrap();
    assert_eq!(cli.verbose, 2);
    assert!(matches!(cli.commands, Commands::Demo(_)));
}

#[test]
fn bench_verbosity_after_subcommand() {
    let cli = Cli::try_parse_from(["lineup", "bench", "--max-size", "100", "-v"]).unwrap();
    assert_eq!(cli.verbose, 1);
    assert!(matches!(cli.commands, Commands::Bench(_)));
}
