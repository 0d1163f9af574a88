//! Full-screen key display
//!
//! Shows the last key pressed in the middle of the screen and asks the
//! registry for a sound whenever nothing is playing.

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    DefaultTerminal, Frame,
};
use rand::rngs::ThreadRng;
use rtrb::Consumer;
use std::{sync::Arc, time::Duration};

use babybang::SoundRegistry;

use crate::player::Player;

/// Shown for keys without a printable character
const FALLBACK_LABEL: &str = "BABY!";
const EXIT_HINT: &str = "Alt+Shift+Q to close";

pub struct UiApp {
    registry: Arc<SoundRegistry>,
    player: Option<Player>,
    status_rx: Consumer<String>,
    rng: ThreadRng,
    label: String,
    status: String,
    should_quit: bool,
}

impl UiApp {
    pub fn new(
        registry: Arc<SoundRegistry>,
        player: Option<Player>,
        status_rx: Consumer<String>,
        status: String,
    ) -> Self {
        Self {
            registry,
            player,
            status_rx,
            rng: rand::rng(),
            label: FALLBACK_LABEL.to_string(),
            status,
            should_quit: false,
        }
    }

    /// Run the UI event loop
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            // Keep only the latest reload summary
            while let Ok(status) = self.status_rx.pop() {
                self.status = status;
            }

            terminal.draw(|frame| self.render(frame))?;

            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }
        }

        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if is_exit(&key) {
            self.should_quit = true;
            return;
        }

        self.label = label_for(key.code);
        self.play_random();
    }

    fn play_random(&mut self) {
        let Some(player) = self.player.as_mut() else {
            return;
        };
        if player.is_playing() {
            return;
        }
        // No sounds loaded is fine, the key still shows
        if let Some(clip) = self.registry.pick_random(&mut self.rng) {
            log::debug!("playing {}", clip.source());
            player.play(clip);
        }
    }

    fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(1), // Key label
                Constraint::Fill(1),
                Constraint::Length(1), // Status bar
            ])
            .split(frame.area());

        let label = Paragraph::new(self.label.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::LightBlue).add_modifier(Modifier::BOLD));
        frame.render_widget(label, chunks[1]);

        let status = Paragraph::new(format!(" {EXIT_HINT}  |  {}", self.status))
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(status, chunks[3]);
    }
}

fn is_exit(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::ALT | KeyModifiers::SHIFT)
        && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
}

fn label_for(code: KeyCode) -> String {
    match code {
        KeyCode::Char(c) if !c.is_whitespace() && !c.is_control() => c.to_string(),
        _ => FALLBACK_LABEL.to_string(),
    }
}
