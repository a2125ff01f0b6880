use crate::state::{GameState, SoundEffect};
use crate::Cell;

use log::debug;

/// Number of cosmetic body sprite variants the palette cycles through.
pub const SEGMENT_SPRITES: usize = 6;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Sprite {
    Segment(usize),
    Food,
    Enemy,
}

/// Drawing surface for one board. Cells outside the board may be passed
/// (the head ends up off-board on the fatal tick) and must be ignored.
pub trait Canvas {
    fn clear_board(&mut self);
    fn draw_tile(&mut self, cell: Cell, sprite: Sprite);
    fn present(&mut self);
}

pub trait SoundPlayer {
    fn play(&mut self, fx: SoundEffect);
}

/// Sound sink that just logs the cue. Actual playback is up to whoever
/// hosts the game; the state machine only names the effect.
pub struct LogSounds;

impl SoundPlayer for LogSounds {
    fn play(&mut self, fx: SoundEffect) {
        debug!("sound cue: {:?}", fx);
    }
}

pub fn segment_sprite(index: usize) -> Sprite {
    Sprite::Segment(index % SEGMENT_SPRITES)
}

/// Redraws the whole board from a state snapshot.
pub fn draw_frame(canvas: &mut impl Canvas, state: &GameState) {
    canvas.clear_board();

    for (i, &segment) in state.snake().body().iter().enumerate() {
        canvas.draw_tile(segment, segment_sprite(i));
    }

    canvas.draw_tile(state.food(), Sprite::Food);

    if let Some(enemy) = state.enemy() {
        canvas.draw_tile(enemy, Sprite::Enemy);
    }

    canvas.present();
}
