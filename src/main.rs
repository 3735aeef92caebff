// lexcolor: lexical analyzer and colorizer for a C#-flavoured C-family subset

use std::fs;
use std::io::{self, Write};
use std::process::ExitCode;

use chrono::Utc;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{info, warn};

use lexcolor::config::{Cli, Config};
use lexcolor::lexer::{self, LexResult};
use lexcolor::logging::init_tracing;
use lexcolor::report::{self, text};
use lexcolor::ui::{console, App};

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::from_cli(cli, Config::no_color_env());
    if let Err(e) = config.validate_input() {
        eprintln!("Error: {}", e);
        return Ok(ExitCode::FAILURE);
    }

    let source = fs::read_to_string(&config.input)?;
    info!(path = %config.input.display(), bytes = source.len(), "source loaded");

    let result = lexer::tokenize(&source);

    if config.interactive {
        run_viewer(config.source_name(), result.clone())?;
    } else {
        let mut stdout = io::stdout().lock();
        console::write_legend(&mut stdout, config.color)?;
        console::write_listing(&mut stdout, &result.tokens, config.color)?;
        writeln!(stdout)?;
        console::write_verdict(&mut stdout, &result, config.color)?;
    }

    if let Some(err) = &result.error {
        warn!(%err, "scan halted");
        return Ok(ExitCode::FAILURE);
    }

    if !config.interactive {
        println!();
        print!("{}", text::table(&result.summary));
    }

    if config.write_reports {
        write_reports(&config, &result)?;
    }

    Ok(ExitCode::SUCCESS)
}

fn write_reports(config: &Config, result: &LexResult) -> Result<(), report::ReportError> {
    let written = report::write_reports(
        result,
        &config.source_name(),
        &config.formats,
        &config.out_dir,
        Utc::now(),
    )?;

    println!();
    println!("Reports written:");
    for (path, format) in written.iter().zip(&config.formats) {
        println!("  {} ({})", path.display(), format.description());
    }
    Ok(())
}

fn run_viewer(source_name: String, result: LexResult) -> io::Result<()> {
    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(source_name, result);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}
