use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use ordo_core::RuleCatalog;
use ordo_ritual::{Ritual, RitualConfig, RitualState};
use ordo_speech::SpeechEngine;

pub struct App {
    pub ritual: Ritual,
    pub show_help: bool,
    pub show_log: bool,
    pub should_quit: bool,
    // Frame counter driving the thinking spinner.
    pub frame: usize,
}

impl App {
    pub fn new(catalog: RuleCatalog, speech: Box<dyn SpeechEngine>, config: RitualConfig) -> Self {
        Self {
            ritual: Ritual::new(catalog, speech, config),
            show_help: false,
            show_log: false,
            should_quit: false,
            frame: 0,
        }
    }

    pub fn tick(&mut self, now: Instant) {
        self.frame = self.frame.wrapping_add(1);
        self.ritual.tick(now);
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Ctrl+C always quits
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = !self.show_help,
            KeyCode::Char('l') => self.show_log = !self.show_log,
            KeyCode::Enter | KeyCode::Char(' ') => {
                // Thinking ignores input: the auto-transition is not
                // user-cancellable.
                if self.ritual.state() == RitualState::Idle {
                    self.ritual.start(Instant::now());
                }
            }
            KeyCode::Char('r') => self.ritual.replay(Instant::now()),
            KeyCode::Char('n') => {
                if self.ritual.state() == RitualState::Decree {
                    self.ritual.restart();
                }
            }
            _ => {}
        }
    }

    pub fn status_hint(&self) -> &str {
        match self.ritual.state() {
            RitualState::Idle => "Enter/Space:consult  l:log  ?:help  q:quit",
            RitualState::Thinking => "the oracle is reading the signs...  q:quit",
            RitualState::Decree => "r:replay  n:new ritual  l:log  ?:help  q:quit",
        }
    }
}
