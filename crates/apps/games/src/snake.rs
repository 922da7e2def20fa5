//! Grid snake rules, advanced one tick at a time by the view's interval.

use std::time::Duration;

pub const GRID_SIZE: i32 = 15;
pub const TICK_INTERVAL: Duration = Duration::from_millis(150);
pub const FOOD_POINTS: u32 = 10;
const START: Cell = Cell { x: 7, y: 7 };

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    fn in_bounds(self) -> bool {
        (0..GRID_SIZE).contains(&self.x) && (0..GRID_SIZE).contains(&self.y)
    }

    fn step(self, heading: Heading) -> Self {
        let (dx, dy) = heading.delta();
        Self::new(self.x + dx, self.y + dy)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    Up,
    Down,
    Left,
    Right,
}

impl Heading {
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    /// Arrow keys and WASD.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" | "w" | "W" => Some(Self::Up),
            "ArrowDown" | "s" | "S" => Some(Self::Down),
            "ArrowLeft" | "a" | "A" => Some(Self::Left),
            "ArrowRight" | "d" | "D" => Some(Self::Right),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Paused or over; nothing moved.
    Idle,
    Moved,
    Ate,
    Crashed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnakeGame {
    /// Head first.
    body: Vec<Cell>,
    food: Cell,
    /// Direction of the last completed move.
    heading: Heading,
    queued: Heading,
    paused: bool,
    game_over: bool,
    score: u32,
    high_score: u32,
}

impl SnakeGame {
    /// One-cell snake at the centre heading right, paused.
    pub fn new(random: &mut dyn FnMut() -> f64) -> Self {
        let body = vec![START];
        let food = spawn_food(&body, random).unwrap_or(Cell::new(5, 5));
        Self {
            body,
            food,
            heading: Heading::Right,
            queued: Heading::Right,
            paused: true,
            game_over: false,
            score: 0,
            high_score: 0,
        }
    }

    pub fn body(&self) -> &[Cell] {
        &self.body
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn food(&self) -> Cell {
        self.food
    }

    pub fn heading(&self) -> Heading {
        self.queued
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Queues a turn. A 180 degree reversal of the last move is refused.
    pub fn steer(&mut self, heading: Heading) -> bool {
        if self.game_over || heading == self.heading.opposite() {
            return false;
        }
        self.queued = heading;
        true
    }

    /// On-screen arrow: steers and, when accepted, unpauses.
    pub fn press_direction(&mut self, heading: Heading) {
        if self.steer(heading) {
            self.paused = false;
        }
    }

    pub fn toggle_pause(&mut self) {
        if !self.game_over {
            self.paused = !self.paused;
        }
    }

    pub fn resume(&mut self) {
        if !self.game_over {
            self.paused = false;
        }
    }

    pub fn step(&mut self, random: &mut dyn FnMut() -> f64) -> StepOutcome {
        if self.paused || self.game_over {
            return StepOutcome::Idle;
        }
        self.heading = self.queued;
        let next = self.head().step(self.heading);
        if !next.in_bounds() || self.body.contains(&next) {
            self.end();
            return StepOutcome::Crashed;
        }

        self.body.insert(0, next);
        if next != self.food {
            self.body.pop();
            return StepOutcome::Moved;
        }

        self.score += FOOD_POINTS;
        match spawn_food(&self.body, random) {
            Some(food) => self.food = food,
            // Board full.
            None => self.end(),
        }
        StepOutcome::Ate
    }

    /// New round; the high score survives.
    pub fn reset(&mut self, random: &mut dyn FnMut() -> f64) {
        let high_score = self.high_score;
        *self = Self::new(random);
        self.high_score = high_score;
    }

    fn end(&mut self) {
        self.game_over = true;
        self.high_score = self.high_score.max(self.score);
    }
}

/// Uniform pick among cells the snake does not occupy.
fn spawn_food(body: &[Cell], random: &mut dyn FnMut() -> f64) -> Option<Cell> {
    let free: Vec<Cell> = (0..GRID_SIZE)
        .flat_map(|y| (0..GRID_SIZE).map(move |x| Cell::new(x, y)))
        .filter(|cell| !body.contains(cell))
        .collect();
    if free.is_empty() {
        return None;
    }
    let index = ((random().clamp(0.0, 1.0) * free.len() as f64) as usize).min(free.len() - 1);
    Some(free[index])
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn game_with_food(food: Cell) -> SnakeGame {
        let mut game = SnakeGame::new(&mut || 0.0);
        game.food = food;
        game
    }

    #[test]
    fn starts_paused_at_the_centre_heading_right() {
        let game = SnakeGame::new(&mut || 0.0);
        assert_eq!(game.body(), &[Cell::new(7, 7)]);
        assert_eq!(game.heading(), Heading::Right);
        assert!(game.is_paused());
        assert_eq!(game.food(), Cell::new(0, 0));
    }

    #[test]
    fn paused_game_does_not_move() {
        let mut game = game_with_food(Cell::new(0, 0));
        assert_eq!(game.step(&mut || 0.0), StepOutcome::Idle);
        assert_eq!(game.head(), Cell::new(7, 7));
    }

    #[test]
    fn eating_grows_and_scores() {
        let mut game = game_with_food(Cell::new(8, 7));
        game.resume();
        assert_eq!(game.step(&mut || 0.0), StepOutcome::Ate);
        assert_eq!(game.score(), 10);
        assert_eq!(game.body(), &[Cell::new(8, 7), Cell::new(7, 7)]);
        assert!(!game.body().contains(&game.food()));

        game.food = Cell::new(0, 0);
        assert_eq!(game.step(&mut || 0.0), StepOutcome::Moved);
        assert_eq!(game.body(), &[Cell::new(9, 7), Cell::new(8, 7)]);
    }

    #[test]
    fn reversal_is_refused() {
        let mut game = game_with_food(Cell::new(0, 0));
        assert!(!game.steer(Heading::Left));
        assert!(game.steer(Heading::Up));
        // Last completed move is still Right, so Left stays refused before the next tick.
        assert!(!game.steer(Heading::Left));
        game.resume();
        game.step(&mut || 0.0);
        assert_eq!(game.head(), Cell::new(7, 6));
        assert!(!game.steer(Heading::Down));
    }

    #[test]
    fn wall_collision_ends_and_records_high_score() {
        let mut game = game_with_food(Cell::new(8, 7));
        game.resume();
        game.step(&mut || 0.0);
        game.food = Cell::new(0, 0);
        let mut outcome = StepOutcome::Moved;
        while outcome == StepOutcome::Moved {
            outcome = game.step(&mut || 0.0);
        }
        assert_eq!(outcome, StepOutcome::Crashed);
        assert!(game.is_game_over());
        assert_eq!(game.head(), Cell::new(14, 7));
        assert_eq!(game.high_score(), 10);

        game.toggle_pause();
        assert_eq!(game.step(&mut || 0.0), StepOutcome::Idle);

        game.reset(&mut || 0.0);
        assert_eq!(game.score(), 0);
        assert_eq!(game.high_score(), 10);
        assert!(game.is_paused() && !game.is_game_over());
    }

    #[test]
    fn self_collision_ends_the_game() {
        let mut game = game_with_food(Cell::new(0, 0));
        game.body = vec![
            Cell::new(5, 5),
            Cell::new(4, 5),
            Cell::new(4, 6),
            Cell::new(5, 6),
            Cell::new(6, 6),
        ];
        game.heading = Heading::Right;
        game.queued = Heading::Down;
        game.resume();
        assert_eq!(game.step(&mut || 0.0), StepOutcome::Crashed);
    }

    #[test]
    fn direction_buttons_unpause_only_when_accepted() {
        let mut game = game_with_food(Cell::new(0, 0));
        game.press_direction(Heading::Left);
        assert!(game.is_paused());
        game.press_direction(Heading::Down);
        assert!(!game.is_paused());
        assert_eq!(game.heading(), Heading::Down);
    }

    #[test]
    fn keys_map_to_headings() {
        assert_eq!(Heading::from_key("ArrowUp"), Some(Heading::Up));
        assert_eq!(Heading::from_key("a"), Some(Heading::Left));
        assert_eq!(Heading::from_key(" "), None);
    }

    #[test]
    fn food_never_spawns_on_the_snake() {
        let body: Vec<Cell> = (0..GRID_SIZE).map(|x| Cell::new(x, 0)).collect();
        assert_eq!(spawn_food(&body, &mut || 0.0), Some(Cell::new(0, 1)));
        let full: Vec<Cell> = (0..GRID_SIZE)
            .flat_map(|y| (0..GRID_SIZE).map(move |x| Cell::new(x, y)))
            .collect();
        assert_eq!(spawn_food(&full, &mut || 0.5), None);
    }
}
