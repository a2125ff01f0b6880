use crate::snake::{Direction, Snake};
use crate::Cell;

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

pub const GRID_WIDTH: i16 = 16;
pub const GRID_HEIGHT: i16 = 20;

/// Sound cues the game emits at state transitions. The three crash
/// variants are picked uniformly at random on game over.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SoundEffect {
    Start,
    Eat,
    Point,
    SuperPoint,
    Crash1,
    Crash2,
    Crash3,
}

impl SoundEffect {
    pub fn random_crash() -> SoundEffect {
        use SoundEffect::*;
        *[Crash1, Crash2, Crash3].choose(&mut rand::thread_rng()).unwrap()
    }
}

/// What a single simulation step did.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TickResult {
    Moved,
    Ate(SoundEffect),
    Crashed,
    /// Tick called while game over: no effect until reset.
    Frozen,
}

/// The whole game: snake, food, optional enemy, score and phase.
/// One `tick()` advances everything by a single step.
pub struct GameState {
    snake: Snake,
    direction: Option<Direction>,
    pending: Option<Direction>,
    food: Cell,
    enemy: Option<Cell>,
    score: u32,
    game_over: bool,
}

impl GameState {
    pub fn new() -> Self {
        let snake = Snake::new((GRID_WIDTH / 2, GRID_HEIGHT / 2));
        let food = random_free_cell(&snake);

        GameState {
            snake,
            direction: None,
            pending: None,
            food,
            enemy: None,
            score: 0,
            game_over: false,
        }
    }

    pub fn reset(&mut self) {
        *self = GameState::new();
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Cell {
        self.food
    }

    pub fn enemy(&self) -> Option<Cell> {
        self.enemy
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Requests a direction change, applied on the next tick. Reversing the
    /// currently applied direction is ignored; between two ticks the last
    /// accepted request wins.
    pub fn set_direction(&mut self, dir: Direction) {
        if self.game_over {
            return;
        }

        if let Some(current) = self.direction {
            if current.is_opposite(dir) {
                return;
            }
        }

        self.pending = Some(dir);
    }

    /// Advances the simulation by one step. Until a direction has been set
    /// the delta is (0, 0), so the snake stays in place.
    pub fn tick(&mut self) -> TickResult {
        if self.game_over {
            return TickResult::Frozen;
        }

        if let Some(dir) = self.pending.take() {
            self.direction = Some(dir);
        }

        let delta = self.direction.map_or((0, 0), Direction::delta);
        let head = self.snake.head();
        let new_head = (head.0 + delta.0, head.1 + delta.1);

        let ate = new_head == self.food;
        self.snake.advance(delta, ate);

        let mut result = TickResult::Moved;
        if ate {
            self.score += 1;
            self.enemy = None;
            self.food = random_free_cell(&self.snake);
            debug!("ate food at {:?}, score {}", new_head, self.score);
            result = TickResult::Ate(score_sound(self.score));
        }

        if self.head_collided() {
            self.game_over = true;
            return TickResult::Crashed;
        }

        result
    }

    /// Puts an enemy on a random cell off the snake. Note that the food
    /// cell is not avoided, matching the food sampler's collision rule.
    pub fn spawn_enemy(&mut self) {
        self.enemy = Some(random_free_cell(&self.snake));
    }

    fn head_collided(&self) -> bool {
        let (x, y) = self.snake.head();

        if x < 0 || y < 0 || x >= GRID_WIDTH || y >= GRID_HEIGHT {
            return true;
        }

        self.snake.hits_inner_body()
    }
}

fn score_sound(score: u32) -> SoundEffect {
    if score % 20 == 0 {
        SoundEffect::SuperPoint
    } else if score % 10 == 0 {
        SoundEffect::Point
    } else {
        SoundEffect::Eat
    }
}

/// Rejection-samples a cell not occupied by the snake. The snake is always
/// far shorter than the board, which the assert makes explicit.
fn random_free_cell(snake: &Snake) -> Cell {
    assert!(
        snake.len() < (GRID_WIDTH as usize) * (GRID_HEIGHT as usize),
        "no free cells left on the board"
    );

    let mut rng = rand::thread_rng();
    loop {
        let candidate = (rng.gen_range(0..GRID_WIDTH), rng.gen_range(0..GRID_HEIGHT));
        if !snake.contains(candidate) {
            return candidate;
        }
    }
}
