use crate::render::{Canvas, Sprite, SEGMENT_SPRITES};
use crate::state::{GRID_HEIGHT, GRID_WIDTH};
use crate::{Cell, Coords, TermInt};
use std::{
    io::{stdout, Stdout, Write},
    time::Duration,
};

use crossterm::event::{poll, read, Event, KeyEvent};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen, SetTitle};
use crossterm::{cursor, execute, queue, style, terminal};

// One glyph per cosmetic body sprite, indexed by Sprite::Segment.
const SEGMENT_CHARS: [char; SEGMENT_SPRITES] = ['█', '▓', '▒', '░', '▚', '▞'];
const FOOD_CHAR: char = 'O';
const ENEMY_CHAR: char = 'X';

/// Terminal backend: draws the framed board centered on screen and owns
/// the raw-mode/alternate-screen session.
pub struct TermCanvas {
    width: TermInt,
    height: TermInt,
    origin: Coords,
    stdout: Stdout,
    screen: Vec<char>,
    current_msg: Option<Message>,
}

struct Message {
    top_left: Coords,
    width: TermInt,
    height: TermInt,
}

impl TermCanvas {
    pub fn new() -> Self {
        let (width, height) = terminal::size().expect("Error reading size.");
        let frame_w = GRID_WIDTH as TermInt + 2;
        let frame_h = GRID_HEIGHT as TermInt + 2;

        assert!(
            width >= frame_w && height >= frame_h,
            "terminal too small for the {}x{} board",
            GRID_WIDTH,
            GRID_HEIGHT
        );

        let origin = ((width - frame_w) / 2, (height - frame_h) / 2);
        let stdout = stdout();
        let screen = vec![' '; width as usize * height as usize];
        TermCanvas { width, height, origin, stdout, screen, current_msg: None }
    }

    pub fn setup(&mut self) {
        execute!(self.stdout, EnterAlternateScreen).expect("Error entering alt screen");
        self.set_raw_mode(true);
        self.set_cursor_visibility(false);
        self.set_cursor_blink(false);
    }

    pub fn restore(&mut self) {
        self.set_raw_mode(false);
        self.set_cursor_visibility(true);
        self.set_cursor_blink(true);
        execute!(self.stdout, LeaveAlternateScreen).expect("Error leaving alt screen");
    }

    pub fn read_key_blocking(&self) -> KeyEvent {
        loop {
            if let Event::Key(ev) = read().unwrap() {
                return ev;
            }
        }
    }

    pub fn read_key_events_queue(&self) -> Vec<KeyEvent> {
        let mut events = vec![];

        while poll(Duration::from_millis(1)).unwrap() {
            if let Event::Key(ev) = read().unwrap() {
                events.push(ev);
            }
        }

        events
    }

    /// Mirrors the score in the terminal window title.
    pub fn set_score_title(&mut self, score: u32) {
        execute!(self.stdout, SetTitle(&format!("Snake - Points: {}", score)))
            .expect("Error setting title.");
    }

    pub fn draw_board_frame(&mut self) {
        let frame_w = GRID_WIDTH as TermInt + 2;
        let frame_h = GRID_HEIGHT as TermInt + 2;
        let (ox, oy) = self.origin;

        for x in 0..frame_w {
            let ch = if x == 0 || x == frame_w - 1 { '+' } else { '-' };
            self.print_at((ox + x, oy), ch);
            self.print_at((ox + x, oy + frame_h - 1), ch);
        }

        for y in 1..frame_h - 1 {
            self.print_at((ox, oy + y), '|');
            self.print_at((ox + frame_w - 1, oy + y), '|');
        }

        self.flush();
    }

    pub fn show_message(&mut self, lines: &[&str]) {
        if self.has_message() {
            self.hide_message();
        }

        let msg_height = (lines.len() + 2) as TermInt;
        let msg_width = (lines.iter().map(|x| x.len()).max().unwrap() + 2) as TermInt;
        let center = (self.width / 2, self.height / 2);
        let top_left = (center.0 - msg_width / 2, center.1 - msg_height / 2);

        // Print the top and bottom empty lines
        for y in [top_left.1, top_left.1 + msg_height - 1].iter() {
            for x_diff in 0..msg_width {
                self.print_at_no_save((top_left.0 + x_diff, *y), ' ');
            }
        }

        // Print the message lines
        for (i, line) in lines.iter().enumerate() {
            let padded_line = format!("{line: ^width$}", line = line, width = msg_width as usize);
            let y = top_left.1 + i as TermInt + 1;
            for (x_diff, ch) in padded_line.char_indices() {
                self.print_at_no_save((top_left.0 + x_diff as TermInt, y), ch);
            }
        }

        self.current_msg = Some(Message { top_left, width: msg_width, height: msg_height });
        self.flush();
    }

    pub fn hide_message(&mut self) {
        if !self.has_message() {
            return;
        }

        let msg = self.current_msg.take().unwrap(); // take() sets current_msg to None
        let top_left = msg.top_left;

        // Restore the content from the screen buffer
        for y_diff in 0..msg.height {
            for x_diff in 0..msg.width {
                let (x, y) = (top_left.0 + x_diff, top_left.1 + y_diff);
                let ch = self.screen[self.width as usize * y as usize + x as usize];
                self.print_at_no_save((x, y), ch);
            }
        }

        self.flush();
    }

    pub fn clear(&mut self) {
        execute!(self.stdout, terminal::Clear(ClearType::All)).expect("Error clearing.");
        self.screen = vec![' '; self.width as usize * self.height as usize]
    }

    pub fn flush(&mut self) {
        self.stdout.flush().expect("Error flushing.");
    }

    pub fn has_message(&self) -> bool {
        self.current_msg.is_some()
    }

    ///////////////////////////////////////////////////////////////////////////

    fn print_at(&mut self, pos: Coords, ch: char) {
        queue!(self.stdout, cursor::MoveTo(pos.0, pos.1), style::Print(ch)).unwrap();
        self.screen[self.width as usize * pos.1 as usize + pos.0 as usize] = ch;
    }

    fn print_at_no_save(&mut self, pos: Coords, ch: char) {
        // To be used for printing messages, where we don't wanna overwrite our
        // local buffer to restore it when the message is hidden
        queue!(self.stdout, cursor::MoveTo(pos.0, pos.1), style::Print(ch)).unwrap();
    }

    fn cell_pos(&self, cell: Cell) -> Coords {
        // Interior of the frame; only valid for on-board cells.
        (
            self.origin.0 + 1 + cell.0 as TermInt,
            self.origin.1 + 1 + cell.1 as TermInt,
        )
    }

    fn set_raw_mode(&self, option: bool) {
        let res = if option {
            terminal::enable_raw_mode()
        } else {
            terminal::disable_raw_mode()
        };

        res.expect("Error setting raw mode.");
    }

    fn set_cursor_blink(&mut self, option: bool) {
        let res = if option {
            execute!(self.stdout, cursor::EnableBlinking)
        } else {
            execute!(self.stdout, cursor::DisableBlinking)
        };

        res.expect("Error setting cursor blink.");
    }

    fn set_cursor_visibility(&mut self, option: bool) {
        let res = if option {
            execute!(self.stdout, cursor::Show)
        } else {
            execute!(self.stdout, cursor::Hide)
        };

        res.expect("Error setting cursor visibility.");
    }
}

impl Canvas for TermCanvas {
    fn clear_board(&mut self) {
        for y in 0..GRID_HEIGHT {
            for x in 0..GRID_WIDTH {
                let pos = self.cell_pos((x, y));
                self.print_at(pos, ' ');
            }
        }
    }

    fn draw_tile(&mut self, cell: Cell, sprite: Sprite) {
        // The head sits off-board on the fatal tick; there is nowhere to draw it.
        if cell.0 < 0 || cell.1 < 0 || cell.0 >= GRID_WIDTH || cell.1 >= GRID_HEIGHT {
            return;
        }

        let ch = match sprite {
            Sprite::Segment(i) => SEGMENT_CHARS[i % SEGMENT_CHARS.len()],
            Sprite::Food => FOOD_CHAR,
            Sprite::Enemy => ENEMY_CHAR,
        };

        let pos = self.cell_pos(cell);
        self.print_at(pos, ch);
    }

    fn present(&mut self) {
        self.flush();
    }
}
