use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use thiserror::Error;

use skillgrid::config::{GridConfig, UserContext};
use skillgrid::error::{LoadError, UpdateError};
use skillgrid::host::JsonLineNotifier;
use skillgrid::input::LoadPayloads;
use skillgrid::logging;
use skillgrid::model::{Channel, KindSet};
use skillgrid::pipeline::stage4_report::{ReportFormat, SCORES_JSON, write_reports, write_scores};
use skillgrid::session::{ScoreUpdate, Session};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

#[derive(Debug, Error)]
enum CliError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot write reports: {0}")]
    Write(#[from] std::io::Error),
    #[error("{}", .0.user_message())]
    Load(#[from] LoadError),
    #[error(transparent)]
    Update(#[from] UpdateError),
}

#[derive(Debug, Parser)]
#[command(name = "skillgrid")]
#[command(about = "Resolve skills assessment scores into a grid")]
#[command(version)]
struct Cli {
    /// Debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Build the grid and write grid.json / report.txt
    Run(RunArgs),
    /// Apply one score entry, print the host envelope and write the new records
    Update(UpdateArgs),
}

#[derive(Debug, Args)]
struct InputArgs {
    /// Assessment item definitions (JSON list)
    #[arg(long)]
    items: PathBuf,
    /// People shown as columns (JSON list)
    #[arg(long)]
    people: PathBuf,
    /// Stored score records (JSON list)
    #[arg(long)]
    scores: PathBuf,
    /// Item types to show, comma separated wire labels
    #[arg(long)]
    types: Option<KindSet>,
}

#[derive(Debug, Args)]
struct RunArgs {
    #[command(flatten)]
    input: InputArgs,
    #[arg(long)]
    out: PathBuf,
    #[arg(long, default_value = "all")]
    format: ReportFormat,
}

#[derive(Debug, Args)]
struct UpdateArgs {
    #[command(flatten)]
    input: InputArgs,
    #[arg(long)]
    item: String,
    #[arg(long)]
    person: String,
    #[arg(long)]
    value: String,
    #[arg(long)]
    author: String,
    /// YYYY-MM-DD or MM/DD/YYYY
    #[arg(long)]
    date: String,
    /// Staff or Self
    #[arg(long)]
    channel: Option<Channel>,
    #[arg(long)]
    out: Option<PathBuf>,
    #[arg(long, default_value = "all")]
    format: ReportFormat,
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Run(args) => {
            run_grid(&args)?;
        }
        Command::Update(args) => {
            let stdout = std::io::stdout();
            run_update(&args, stdout.lock())?;
        }
    }
    Ok(())
}

fn run_grid(args: &RunArgs) -> Result<Vec<PathBuf>, CliError> {
    let session = load_session(&args.input, UserContext::default())?;
    Ok(write_reports(session.table(), &args.out, args.format)?)
}

fn run_update<W: Write>(args: &UpdateArgs, out: W) -> Result<Session, CliError> {
    let channel = args.channel.unwrap_or(Channel::Staff);
    let user = UserContext {
        user: args.author.clone(),
        date: args.date.clone(),
        user_type: channel,
    };
    let mut session = load_session(&args.input, user)?;

    let update = ScoreUpdate::new(
        args.item.as_str(),
        args.person.as_str(),
        args.value.as_str(),
        args.author.as_str(),
        args.date.as_str(),
    )
    .with_channel(channel);
    let mut notifier = JsonLineNotifier::new(out);
    session.apply_score_update(update, &mut notifier)?;

    if let Some(out_dir) = &args.out {
        write_reports(session.table(), out_dir, args.format)?;
        write_scores(session.records(), &out_dir.join(SCORES_JSON))?;
    }
    Ok(session)
}

fn load_session(input: &InputArgs, user: UserContext) -> Result<Session, CliError> {
    let items = read_payload(&input.items)?;
    let people = read_payload(&input.people)?;
    let scores = read_payload(&input.scores)?;
    let payloads = LoadPayloads {
        items: Some(&items),
        people: Some(&people),
        scores: Some(&scores),
    };
    let mut config = GridConfig::default().with_user(user);
    if let Some(kinds) = &input.types {
        config = config.with_kinds(kinds.clone());
    }
    Ok(Session::load(&payloads, config)?)
}

fn read_payload(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
