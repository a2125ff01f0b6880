mod game;
mod render;
mod snake;
mod state;
mod term;

pub type TermInt = u16;
pub type Coords = (u16, u16);

/// A board cell as (column, row). Signed so an off-board head is representable.
pub type Cell = (i16, i16);

fn main() {
    env_logger::init();

    let mut game = game::SnakeGame::new(render::LogSounds);
    game.initialize();
    game.show_intro();

    loop {
        // The main game loop takes care of exiting cleanly on CTRL+C
        game.play();
    }
}
