use std::fs::File;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use nalssi_background::{BackgroundState, to_terminal_color};
use nalssi_config::{Config, project_dirs};
use nalssi_core::{SAMPLE_CODES, ThemeMode, WeatherCode};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
    style::{Style, Stylize},
    text::{Line, Span},
};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    init_logging();
    let config = Config::load().unwrap_or_else(|err| {
        log::warn!("{err}; using default settings");
        Config::default()
    });
    let terminal = ratatui::init();
    let result = App::new(config).run(terminal);
    ratatui::restore();
    result
}

/// Send log output to `<cache dir>/nalssi.log` so it never reaches the screen.
fn init_logging() {
    let Some(dirs) = project_dirs() else {
        return;
    };
    let dir = dirs.cache_dir();
    if std::fs::create_dir_all(dir).is_err() {
        return;
    }
    let Ok(file) = File::create(dir.join("nalssi.log")) else {
        return;
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Weather code being shown.
    code: WeatherCode,
    /// Position in the sample code list, when cycling.
    sample_index: usize,
    /// Current colour theme.
    theme: ThemeMode,
    /// Animated backdrop.
    background: BackgroundState,
    /// Settings loaded at startup, written back on save.
    config: Config,
    /// Transient message shown in the status line.
    notice: Option<String>,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: Config) -> Self {
        let code = config.weather_code();
        let sample_index = SAMPLE_CODES
            .iter()
            .position(|&c| c == code.0)
            .unwrap_or(0);
        Self {
            running: false,
            code,
            sample_index,
            theme: config.theme,
            background: BackgroundState::new().with_pixel_scale(config.pixel_scale),
            config,
            notice: None,
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        self.background.attach();
        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        self.background.detach();
        Ok(())
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let palette = self.theme.palette();
        self.background.render(frame, self.code, &palette);

        let chunks = Layout::vertical([
            Constraint::Length(1), // Status
            Constraint::Fill(1),
            Constraint::Length(1), // Help text
        ])
        .split(frame.area());

        let accent = to_terminal_color(palette.on_background);
        let muted = to_terminal_color(palette.on_background.lerp(palette.background, 0.45));
        let backing = to_terminal_color(palette.surface);

        let mut status = vec![
            Span::styled(format!(" {} ", self.code.style()), Style::new().fg(accent).bold()),
            Span::styled(format!("code {}  {}", self.code, self.theme.name()), Style::new().fg(muted)),
        ];
        if !self.background.is_attached() {
            status.push(Span::styled("  paused", Style::new().fg(muted).italic()));
        }
        if let Some(notice) = &self.notice {
            status.push(Span::styled(format!("  {notice}"), Style::new().fg(accent)));
        }
        frame.render_widget(Line::from(status).style(Style::new().bg(backing)), chunks[0]);

        let key = |k: &'static str| Span::styled(k, Style::new().fg(accent).bold());
        let label = |l: &'static str| Span::styled(l, Style::new().fg(muted));
        let help = Line::from(vec![
            key("q"),
            label(" quit  "),
            key("n/p"),
            label(" weather  "),
            key("t"),
            label(" theme  "),
            key("space"),
            label(" pause  "),
            key("s"),
            label(" save"),
        ])
        .style(Style::new().bg(backing))
        .centered();
        frame.render_widget(help, chunks[2]);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Polls with the frame interval as timeout so the backdrop keeps moving.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(Duration::from_millis(self.config.frame_interval_ms))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(_) => {}
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('n') | KeyCode::Right) => self.step_weather(1),
            (_, KeyCode::Char('p') | KeyCode::Left) => self.step_weather(SAMPLE_CODES.len() - 1),
            (_, KeyCode::Char('t')) => self.toggle_theme(),
            (_, KeyCode::Char(' ')) => self.toggle_pause(),
            (_, KeyCode::Char('s')) => self.save(),
            _ => {}
        }
    }

    /// Move through the sample weather codes.
    fn step_weather(&mut self, step: usize) {
        self.sample_index = (self.sample_index + step) % SAMPLE_CODES.len();
        self.code = WeatherCode(SAMPLE_CODES[self.sample_index]);
        self.notice = None;
    }

    fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
        self.notice = None;
    }

    /// Detach or re-attach the backdrop. Re-attaching restarts its clock.
    fn toggle_pause(&mut self) {
        if self.background.is_attached() {
            self.background.detach();
        } else {
            self.background.attach();
        }
    }

    /// Write the current theme and weather code to the config file.
    fn save(&mut self) {
        self.config.theme = self.theme;
        self.config.weather_code = self.code.0;
        self.notice = Some(match self.config.save() {
            Ok(path) => {
                log::info!("settings saved to {}", path.display());
                "saved".to_string()
            }
            Err(err) => {
                log::warn!("failed to save settings: {err}");
                format!("save failed: {err}")
            }
        });
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
