mod input;
mod view;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use input::KeyAction;
use ratatui::{
    crossterm::{
        event::{self, Event},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
    prelude::*,
    widgets::*,
};
use sleuth_core::{
    Command, GameMap, InteractionEvent, InteractionMode, ScenarioData, Session, compose_scene,
};
use std::{
    io::{self, Stdout},
    path::{Path, PathBuf},
};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use view::Glyph;

/// Number of interaction messages kept on screen.
const MESSAGE_HISTORY: usize = 8;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Scenario file to load
    #[arg(short, long, value_name = "SCENARIO_FILE", default_value = "scenarios/kitchen.json")]
    scenario: PathBuf,

    /// Which neighbouring cells the interact key examines
    #[arg(short = 'm', long, value_enum, default_value_t = ModeArg::Facing)]
    interaction_mode: ModeArg,

    /// Directory the log file is written to
    #[arg(long, value_name = "DIR", default_value = "logs")]
    log_dir: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    Facing,
    Omnidirectional,
}

impl From<ModeArg> for InteractionMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Facing => InteractionMode::Facing,
            ModeArg::Omnidirectional => InteractionMode::Omnidirectional,
        }
    }
}

struct App {
    /// The core game session.
    session: Session,
    scenario_name: String,
    /// Most recent interaction messages, newest last.
    messages: Vec<String>,
    /// Flag to control the main loop.
    should_quit: bool,
}

impl App {
    fn new(scenario_name: String, map: GameMap, mode: InteractionMode) -> Self {
        App {
            session: Session::new(map, mode),
            scenario_name,
            messages: Vec::new(),
            should_quit: false,
        }
    }

    /// Feeds one command to the session and records any interaction.
    fn apply(&mut self, command: Command) {
        if let Some(event) = self.session.handle(command) {
            let message = self.describe(&event);
            self.messages.push(message);
            if self.messages.len() > MESSAGE_HISTORY {
                self.messages.remove(0);
            }
        }
    }

    fn describe(&self, event: &InteractionEvent) -> String {
        let InteractionEvent { object_id, at } = *event;
        match self.session.map().object(object_id) {
            Some(object) => format!(
                "Inspected object {} at ({}, {}) [{}]",
                object_id, at.x, at.y, object.image_url
            ),
            None => format!("Inspected object {} at ({}, {})", object_id, at.x, at.y),
        }
    }

    /// Sets the quit flag.
    fn quit(&mut self) {
        self.should_quit = true;
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Ensure the scenario file exists before touching the terminal
    if !args.scenario.exists() {
        return Err(anyhow::anyhow!(
            "Scenario file does not exist: {}",
            args.scenario.display()
        ));
    }

    let _log_guard = init_logging(&args.log_dir)?;

    let scenario = load_scenario(&args.scenario)?;
    let scenario_name = scenario.scenario_name.clone();
    let map = scenario
        .into_game_map()
        .with_context(|| format!("Malformed map in {}", args.scenario.display()))?;
    tracing::info!(
        scenario = %scenario_name,
        mode = ?args.interaction_mode,
        "scenario loaded"
    );

    let mut app = App::new(scenario_name, map, args.interaction_mode.into());

    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, &mut app);
    restore_terminal(&mut terminal)?;

    result
}

/// Reads and parses a scenario JSON file.
fn load_scenario(path: &Path) -> Result<ScenarioData> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read scenario file {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse scenario file {}", path.display()))
}

/// Sends tracing output to `<log_dir>/client.log`. Nothing is written to the
/// terminal, which belongs to the UI.
fn init_logging(log_dir: &Path) -> Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(log_dir, "client.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking_file)
                .with_ansi(false),
        )
        .init();

    tracing::info!("Log file: {}/client.log", log_dir.display());
    Ok(guard)
}

/// Configures the terminal for TUI interaction.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).map_err(Into::into)
}

/// Restores the terminal to its original state.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Runs the main loop: one key press, one transition, one redraw.
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match input::handle_key(key) {
                KeyAction::Quit => app.quit(),
                KeyAction::Command(command) => app.apply(command),
                KeyAction::None => {}
            }
        }
    }
    Ok(())
}

/// Renders the user interface.
fn ui(frame: &mut Frame, app: &App) {
    let main_layout = Layout::default()
        .direction(ratatui::layout::Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Area for the map
            Constraint::Length(MESSAGE_HISTORY as u16 + 2),
            Constraint::Length(2), // Area for help
        ])
        .split(frame.area());

    render_map(frame, main_layout[0], app);
    render_messages(frame, main_layout[1], &app.messages);

    let help_text = Paragraph::new("Arrows/WASD: move   Space/E: interact   Q/Esc: quit")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP));
    frame.render_widget(help_text, main_layout[2]);
}

/// Renders the interaction log.
fn render_messages(frame: &mut Frame, area: Rect, messages: &[String]) {
    let items: Vec<ListItem> = messages
        .iter()
        .map(|message| ListItem::new(message.as_str()))
        .collect();
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Notes"));
    frame.render_widget(list, area);
}

/// Renders the layered map and player onto the frame.
fn render_map(frame: &mut Frame, area: Rect, app: &App) {
    let map = app.session.map();
    let state = app.session.state();
    let glyphs = view::glyph_grid(map, &compose_scene(map, &state));

    let lines: Vec<Line> = (0..glyphs.height())
        .map(|y| {
            let spans: Vec<Span> = (0..glyphs.width())
                .map(|x| {
                    let glyph = glyphs[(x, y)];
                    Span::styled(glyph.symbol(), glyph_style(glyph))
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let title = format!(
        "{} ({}, {})",
        app.scenario_name, state.position.x, state.position.y
    );
    let map_paragraph = Paragraph::new(lines)
        .block(Block::default().title(title).borders(Borders::ALL))
        .alignment(Alignment::Center);

    frame.render_widget(map_paragraph, area);
}

fn glyph_style(glyph: Glyph) -> Style {
    match glyph {
        Glyph::Floor => Style::default().fg(Color::DarkGray),
        Glyph::Decor(_) => Style::default().fg(Color::Gray),
        Glyph::Wall => Style::default().fg(Color::White),
        Glyph::Object(_) => Style::default().fg(Color::Yellow).bold(),
        Glyph::Player(_) => Style::default().fg(Color::Red).bold(),
    }
}
