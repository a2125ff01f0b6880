use crate::Cell;
use Direction::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn delta(self) -> (i16, i16) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }

    pub fn is_opposite(self, other: Direction) -> bool {
        matches!(
            (self, other),
            (Up, Down) | (Down, Up) | (Left, Right) | (Right, Left)
        )
    }
}

/// The snake body, head first. Length is always at least 1.
#[derive(Debug, Clone)]
pub struct Snake {
    body: Vec<Cell>,
}

impl Snake {
    pub fn new(head: Cell) -> Self {
        Snake { body: vec![head] }
    }

    #[cfg(test)]
    pub(crate) fn from_body(body: Vec<Cell>) -> Self {
        assert!(!body.is_empty());
        Snake { body }
    }

    pub fn body(&self) -> &[Cell] {
        &self.body
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Prepends the new head and pops the tail unless growing.
    /// Returns the vacated tail cell, if any.
    pub fn advance(&mut self, delta: (i16, i16), grow: bool) -> Option<Cell> {
        let head = self.head();
        self.body.insert(0, (head.0 + delta.0, head.1 + delta.1));

        if grow {
            None
        } else {
            self.body.pop()
        }
    }

    /// Whether the head shares a cell with the body at index 1..len-1.
    /// The last segment never counts, so the head may sit on it for a tick.
    pub fn hits_inner_body(&self) -> bool {
        if self.body.len() < 2 {
            return false;
        }

        let head = self.head();
        self.body[1..self.body.len() - 1].contains(&head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deltas_match_screen_axes() {
        assert_eq!(Up.delta(), (0, -1));
        assert_eq!(Down.delta(), (0, 1));
        assert_eq!(Left.delta(), (-1, 0));
        assert_eq!(Right.delta(), (1, 0));
    }

    #[test]
    fn opposite_directions() {
        assert!(Up.is_opposite(Down));
        assert!(Left.is_opposite(Right));
        assert!(!Up.is_opposite(Left));
        assert!(!Down.is_opposite(Down));
    }

    #[test]
    fn advance_without_growing_keeps_length() {
        let mut snake = Snake::new((5, 5));
        let tail = snake.advance((1, 0), false);

        assert_eq!(snake.head(), (6, 5));
        assert_eq!(snake.len(), 1);
        assert_eq!(tail, Some((5, 5)));
    }

    #[test]
    fn advance_with_growing_keeps_tail() {
        let mut snake = Snake::new((5, 5));
        let tail = snake.advance((0, 1), true);

        assert_eq!(snake.head(), (5, 6));
        assert_eq!(snake.body(), &[(5, 6), (5, 5)]);
        assert_eq!(tail, None);
    }

    #[test]
    fn inner_body_check_skips_head_and_tail() {
        // Head has just stepped onto the previous tail cell: survivable.
        let snake = Snake {
            body: vec![(4, 5), (5, 5), (5, 6), (4, 6)],
        };
        assert!(!snake.hits_inner_body());

        // Head on an inner segment: fatal.
        let snake = Snake {
            body: vec![(4, 5), (5, 5), (5, 6), (4, 6), (4, 5), (3, 5)],
        };
        assert!(snake.hits_inner_body());
    }

    #[test]
    fn single_segment_never_self_collides() {
        let snake = Snake::new((8, 10));
        assert!(!snake.hits_inner_body());
    }
}
