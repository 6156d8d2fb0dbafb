//! Line-oriented host for a project board.
//!
//! # Responsibility
//! - Feed `title|description|people` lines from stdin into the board input.
//! - Print rejection messages and the final state of both list views.

use clap::Parser;
use projectboard_core::{init_logging, BoardConfig, ListView, ProjectBoard};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(author, version, about = "Collect projects from stdin and render the board")]
struct Cli {
    /// JSON config file; built-in rules apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Absolute directory for rolling log files. Logging is off when omitted.
    #[arg(long)]
    log_dir: Option<String>,

    /// Overrides the config's log level. Only meaningful with `--log-dir`.
    #[arg(long, requires = "log_dir")]
    log_level: Option<String>,

    /// Print views as JSON instead of text.
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("projectboard: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let config = match &cli.config {
        Some(path) => BoardConfig::load(path).map_err(|err| err.to_string())?,
        None => BoardConfig::default(),
    };

    if let Some(log_dir) = &cli.log_dir {
        let level = cli.log_level.as_deref().unwrap_or(&config.log_level);
        init_logging(level, log_dir)?;
    }

    let mut board = ProjectBoard::new(&config);
    feed_lines(&mut board, io::stdin().lock(), &mut io::stderr())?;

    log::info!(
        "event=board_done module=cli status=ok projects={}",
        board.store().len()
    );

    write_views(&board, cli.json, &mut io::stdout().lock())
}

/// Splits one `title|description|people` line. Missing fields are empty;
/// anything after the second `|` belongs to `people`.
fn parse_line(line: &str) -> (&str, &str, &str) {
    let mut fields = line.splitn(3, '|');
    let title = fields.next().unwrap_or_default();
    let description = fields.next().unwrap_or_default();
    let people = fields.next().unwrap_or_default();
    (title, description, people)
}

/// Submits every non-blank line; rejections go to `errors` as
/// `line <n>: <message>` with 1-based line numbers.
///
/// Returns the number of rejected lines.
fn feed_lines(
    board: &mut ProjectBoard,
    input: impl BufRead,
    errors: &mut impl Write,
) -> Result<usize, String> {
    let mut rejected = 0;
    for (index, line) in input.lines().enumerate() {
        let line = line.map_err(|err| format!("failed to read input: {err}"))?;
        if line.trim().is_empty() {
            continue;
        }

        let (title, description, people) = parse_line(&line);
        if let Err(err) = board.submit_fields(title, description, people) {
            rejected += 1;
            writeln!(errors, "line {}: {err}", index + 1)
                .map_err(|err| format!("failed to write rejection: {err}"))?;
            board.input_mut().clear_inputs();
        }
    }
    Ok(rejected)
}

fn write_views(board: &ProjectBoard, json: bool, out: &mut impl Write) -> Result<(), String> {
    let written = if json {
        let text = serde_json::to_string_pretty(&board_json(board))
            .map_err(|err| format!("failed to encode output: {err}"))?;
        writeln!(out, "{text}")
    } else {
        board
            .views()
            .into_iter()
            .try_for_each(|view| write!(out, "{}", view.render_text()))
    };
    written.map_err(|err| format!("failed to write output: {err}"))
}

fn board_json(board: &ProjectBoard) -> serde_json::Value {
    let views: Vec<serde_json::Value> = board.views().into_iter().map(view_json).collect();
    serde_json::json!({
        "projects": board.store().records(),
        "views": views,
    })
}

fn view_json(view: &ListView) -> serde_json::Value {
    serde_json::json!({
        "id": view.element_id(),
        "heading": view.heading(),
        "rows": view.rows(),
    })
}
