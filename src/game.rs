use std::{process::exit, thread::sleep, time::Duration};

use crate::render::{self, SoundPlayer};
use crate::snake::Direction::*;
use crate::state::{GameState, SoundEffect, TickResult};
use crate::term::TermCanvas;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::info;

const TICK_INTERVAL_MS: u64 = 100;

pub struct SnakeGame<S: SoundPlayer> {
    paused: bool,
    term: TermCanvas,
    sounds: S,
    state: GameState,
}

impl<S: SoundPlayer> SnakeGame<S> {
    pub fn new(sounds: S) -> Self {
        SnakeGame {
            paused: false,
            term: TermCanvas::new(),
            sounds,
            state: GameState::new(),
        }
    }

    pub fn initialize(&mut self) {
        self.term.setup();
    }

    pub fn show_intro(&mut self) {
        let lines = &[
            "Arrow keys or WASD to move",
            "Esc to pause",
            "CTRL+C to quit",
            "",
            "Press any key to begin",
        ];

        self.term.show_message(lines);

        if is_ctrl_c(&self.term.read_key_blocking()) {
            self.clean_exit()
        }

        self.term.hide_message();
    }

    /// Runs one round from reset to game over.
    pub fn play(&mut self) {
        self.term.clear();
        self.term.draw_board_frame();
        self.term.hide_message();
        self.paused = false;

        self.state.reset();
        self.term.set_score_title(self.state.score());
        self.sounds.play(SoundEffect::Start);
        info!("round started");
        render::draw_frame(&mut self.term, &self.state);

        loop {
            sleep(Duration::from_millis(TICK_INTERVAL_MS));

            for key_ev in self.term.read_key_events_queue() {
                match &key_ev {
                    ev if is_ctrl_c(ev) => self.clean_exit(),
                    KeyEvent { code, modifiers: _ } => match code {
                        KeyCode::Char('w') | KeyCode::Up => self.state.set_direction(Up),
                        KeyCode::Char('a') | KeyCode::Left => self.state.set_direction(Left),
                        KeyCode::Char('s') | KeyCode::Down => self.state.set_direction(Down),
                        KeyCode::Char('d') | KeyCode::Right => self.state.set_direction(Right),
                        KeyCode::Esc => self.toggle_pause(),
                        _ => {}
                    },
                }
            }

            if self.paused {
                continue;
            }

            match self.state.tick() {
                TickResult::Moved => render::draw_frame(&mut self.term, &self.state),
                TickResult::Ate(fx) => {
                    self.sounds.play(fx);
                    self.term.set_score_title(self.state.score());
                    render::draw_frame(&mut self.term, &self.state);
                }
                TickResult::Crashed => {
                    self.sounds.play(SoundEffect::random_crash());
                    self.game_over_screen();
                    break;
                }
                TickResult::Frozen => {}
            } // match
        } // Game loop

        // Quit if the user CTRL+C's after the game
        if is_ctrl_c(&self.term.read_key_blocking()) {
            self.clean_exit()
        }
    }

    ///////////////////////////////////////////////////////////////////////////

    fn clean_exit(&mut self) {
        self.term.restore();
        exit(0);
    }

    fn game_over_screen(&mut self) {
        let score = self.state.score();
        info!("game over, final score {}", score);

        self.term.show_message(&[
            "Game over!",
            &*format!("Score: {}", score),
            "",
            "Press any key to play again,",
            "or CTRL+C to quit.",
        ]);
    }

    fn toggle_pause(&mut self) {
        if !self.paused {
            self.term.show_message(&["Paused", "Press Esc to resume", "or Ctrl+C to quit"]);
        } else {
            self.term.hide_message();
        }

        self.paused = !self.paused;
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}
