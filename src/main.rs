use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use slidetoe::constants::INPUT_POLL_MS;
use slidetoe::input::{handle_key, InputResult};
use slidetoe::{build_info, logging, ui, GameSession};
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::Duration;

struct CliOptions {
    log_path: Option<PathBuf>,
}

enum Command {
    Play(CliOptions),
    Version,
    Help,
}

fn parse_args(args: &[String]) -> Result<Command, String> {
    let mut options = CliOptions { log_path: None };
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--version" | "-v" => return Ok(Command::Version),
            "--help" | "-h" => return Ok(Command::Help),
            "--log" => {
                let path = iter
                    .next()
                    .ok_or_else(|| "--log requires a file path".to_string())?;
                options.log_path = Some(PathBuf::from(path));
            }
            other => return Err(format!("Unknown argument: {}", other)),
        }
    }

    Ok(Command::Play(options))
}

fn print_help() {
    println!("SlideToe - tic-tac-toe with a sliding endgame\n");
    println!("Usage: slidetoe [options]\n");
    println!("Options:");
    println!("  --log FILE   Write debug logs to FILE (filter with RUST_LOG)");
    println!("  --version    Show version information");
    println!("  --help       Show this help message\n");
    println!("Keys:");
    println!("  Arrows/hjkl  Move the cursor     Enter/Space  Click the cell");
    println!("  1-9          Click a cell         [ ]          Step through history");
    println!("  Home/End     First/latest move    n            New game");
    println!("  q/Esc        Quit");
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let options = match parse_args(&args) {
        Ok(Command::Play(options)) => options,
        Ok(Command::Version) => {
            println!("{}", build_info::version_line());
            return Ok(());
        }
        Ok(Command::Help) => {
            print_help();
            return Ok(());
        }
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Run 'slidetoe --help' for usage.");
            std::process::exit(1);
        }
    };

    if let Some(path) = &options.log_path {
        logging::init_file(path, "debug")?;
    }
    tracing::info!(version = %build_info::version_line(), "starting");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal);

    // Restore the terminal even if the loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!(error = %e, "terminal loop failed");
    }
    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    let mut session = GameSession::new();

    loop {
        terminal.draw(|frame| ui::draw_ui(frame, &session))?;

        if event::poll(Duration::from_millis(INPUT_POLL_MS))? {
            if let Event::Key(key_event) = event::read()? {
                if handle_key(key_event, &mut session) == InputResult::Quit {
                    break;
                }
            }
        }
    }

    tracing::info!(moves = session.history().len() - 1, "quit");
    Ok(())
}
