//! # Snake
//!
//! Grid snake on a `STEP`-pixel lattice inside the shell window. One
//! `step` per host loop iteration; the body buffer is bounded and the
//! length is capped at its capacity.

use crate::app::App;
use crate::devices::framebuffer::Surface;
use crate::devices::input::Action;
use crate::rng::Lcg;
use crate::ui::draw;
use crate::ui::widgets::Rect;
use crate::ui::Theme;
use core::fmt::Write;
use heapless::{String, Vec};

/// Cell edge and distance moved per step.
pub const STEP: i32 = 10;
pub const BODY_CAPACITY: usize = 100;
pub const INITIAL_LENGTH: usize = 3;
/// Half-width of the box around the food that counts as eating it.
pub const FOOD_TOLERANCE: i32 = 5;
pub const PLAYFIELD_MARGIN: u32 = 10;
const STATUS_HEIGHT: u32 = 16;
const FOOD_PLACEMENT_ATTEMPTS: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit vector, y grows downwards.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

pub struct Snake {
    area: Rect,
    field: Rect,
    body: Vec<Point, BODY_CAPACITY>,
    length: usize,
    direction: Direction,
    /// Direction of the last completed step; steering is checked against
    /// this so two quick turns can't fold the head back onto the neck.
    heading: Direction,
    food: Point,
    score: u32,
    game_over: bool,
    restart: bool,
}

impl Snake {
    /// Fresh game inside `area`, the window content rect.
    pub fn new(area: Rect, rng: &mut Lcg) -> Self {
        let field = playfield(area);
        let cols = (field.w as i32 / STEP).max(1);
        let rows = (field.h as i32 / STEP).max(1);
        let head = Point::new(field.x + (cols / 2) * STEP, field.y + (rows / 2) * STEP);

        let mut body = Vec::new();
        for i in 0..INITIAL_LENGTH as i32 {
            let _ = body.push(Point::new(head.x - i * STEP, head.y));
        }

        let mut snake = Self {
            area,
            field,
            body,
            length: INITIAL_LENGTH,
            direction: Direction::Right,
            heading: Direction::Right,
            food: head,
            score: 0,
            game_over: false,
            restart: false,
        };
        snake.place_food(rng);
        snake
    }

    pub fn playfield(&self) -> Rect {
        self.field
    }

    pub fn head(&self) -> Point {
        self.body.first().copied().unwrap_or(Point::new(self.field.x, self.field.y))
    }

    pub fn body(&self) -> &[Point] {
        &self.body
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn food(&self) -> Point {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Change direction unless it reverses the current heading.
    pub fn steer(&mut self, dir: Direction) -> bool {
        if dir == self.heading.opposite() {
            return false;
        }
        self.direction = dir;
        true
    }

    /// Advance one cell.
    pub fn step(&mut self, rng: &mut Lcg) {
        if self.game_over {
            return;
        }
        let (dx, dy) = self.direction.delta();
        let head = self.head();
        let next = Point::new(head.x + dx * STEP, head.y + dy * STEP);
        self.heading = self.direction;

        if !self.field.contains(next.x, next.y) {
            self.game_over = true;
            log::info!("snake: hit wall at ({}, {}), score {}", next.x, next.y, self.score);
            return;
        }

        if self.body.is_full() {
            self.body.pop();
        }
        // Can't fail: a slot was freed above if needed
        let _ = self.body.insert(0, next);
        self.body.truncate(self.length);

        if (next.x - self.food.x).abs() <= FOOD_TOLERANCE && (next.y - self.food.y).abs() <= FOOD_TOLERANCE {
            self.length = (self.length + 1).min(BODY_CAPACITY);
            self.score += 1;
            self.place_food(rng);
        }
    }

    /// Pick a cell strictly inside the playfield, avoiding the body when
    /// a few tries allow it.
    fn place_food(&mut self, rng: &mut Lcg) {
        let cols = (self.field.w as i32 / STEP) as u32;
        let rows = (self.field.h as i32 / STEP) as u32;
        for _ in 0..FOOD_PLACEMENT_ATTEMPTS {
            let cx = 1 + rng.below(cols.saturating_sub(2)) as i32;
            let cy = 1 + rng.below(rows.saturating_sub(2)) as i32;
            self.food = Point::new(self.field.x + cx * STEP, self.field.y + cy * STEP);
            if !self.body.contains(&self.food) {
                break;
            }
        }
    }
}

/// Content area minus the margin and the score line, snapped to whole
/// cells.
fn playfield(area: Rect) -> Rect {
    let inner = area.inset(PLAYFIELD_MARGIN);
    let h = inner.h.saturating_sub(STATUS_HEIGHT);
    let step = STEP as u32;
    Rect::new(inner.x, inner.y + STATUS_HEIGHT as i32, inner.w / step * step, h / step * step)
}

impl App for Snake {
    fn title(&self) -> &'static str {
        "Snake"
    }

    fn on_action(&mut self, action: Action) {
        let dir = match action {
            Action::Up | Action::Char('w') => Direction::Up,
            Action::Down | Action::Char('s') => Direction::Down,
            Action::Left | Action::Char('a') => Direction::Left,
            Action::Right | Action::Char('d') => Direction::Right,
            Action::Confirm if self.game_over => {
                self.restart = true;
                return;
            }
            _ => return,
        };
        self.steer(dir);
    }

    fn tick(&mut self, rng: &mut Lcg) {
        if self.restart {
            *self = Snake::new(self.area, rng);
            return;
        }
        self.step(rng);
    }

    fn render(&self, fb: &mut Surface<'_>, _area: Rect, theme: &Theme) {
        let mut status: String<32> = String::new();
        let _ = write!(status, "Score: {}  Length: {}", self.score, self.length);
        draw::draw_text(fb, &status, self.field.x, self.field.y - STATUS_HEIGHT as i32 + 2, theme.text, 1);

        draw::fill(fb, self.field, theme.text);
        draw::draw_outline(fb, self.field, theme.border);

        let cell = STEP as u32;
        draw::fill_rounded_rect(fb, Rect::new(self.food.x, self.food.y, cell, cell), 3, theme.error);
        for (i, seg) in self.body.iter().enumerate() {
            let color = if i == 0 { theme.success.brighten(0x30) } else { theme.success };
            draw::fill(fb, Rect::new(seg.x + 1, seg.y + 1, cell - 2, cell - 2), color);
        }

        if self.game_over {
            let y = self.field.y + self.field.h as i32 / 2 - 12;
            draw::draw_text_centered(fb, "GAME OVER", self.field, y, theme.error, 2);
            draw::draw_text_centered(fb, "Enter: play again  Esc: menu", self.field, y + 24, theme.window_body, 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AREA: Rect = Rect::new(0, 0, 220, 236);

    fn game() -> (Snake, Lcg) {
        let mut rng = Lcg::new(42);
        let snake = Snake::new(AREA, &mut rng);
        (snake, rng)
    }

    fn strictly_inside(field: Rect, p: Point) -> bool {
        p.x > field.x && p.x < field.right() - STEP && p.y > field.y && p.y < field.bottom() - STEP
    }

    #[test]
    fn starts_centered_heading_right() {
        let (s, _) = game();
        // 200 x 200 field at (10, 26)
        assert_eq!(s.playfield(), Rect::new(10, 26, 200, 200));
        assert_eq!(s.head(), Point::new(110, 126));
        assert_eq!(s.body(), &[Point::new(110, 126), Point::new(100, 126), Point::new(90, 126)]);
        assert_eq!(s.length(), INITIAL_LENGTH);
        assert_eq!(s.direction().delta(), (1, 0));
        assert!(strictly_inside(s.playfield(), s.food()));
    }

    #[test]
    fn reversal_is_rejected() {
        let (mut s, _) = game();
        assert!(!s.steer(Direction::Left));
        assert_eq!(s.direction(), Direction::Right);
        assert!(s.steer(Direction::Up));
        // Still heading right until a step happens
        assert!(!s.steer(Direction::Left));
        assert!(s.steer(Direction::Down));
    }

    #[test]
    fn steer_checks_the_last_step_not_the_request() {
        let (mut s, mut rng) = game();
        s.food = Point::new(20, 36);
        s.steer(Direction::Up);
        s.step(&mut rng);
        assert!(s.steer(Direction::Left));
        assert!(!s.steer(Direction::Down));
    }

    #[test]
    fn body_follows_head() {
        let (mut s, mut rng) = game();
        s.food = Point::new(20, 36);
        s.step(&mut rng);
        assert_eq!(s.body(), &[Point::new(120, 126), Point::new(110, 126), Point::new(100, 126)]);
        s.steer(Direction::Down);
        s.step(&mut rng);
        assert_eq!(s.body(), &[Point::new(120, 136), Point::new(120, 126), Point::new(110, 126)]);
    }

    #[test]
    fn eating_grows_by_one_and_moves_food_inside() {
        let (mut s, mut rng) = game();
        // Within the tolerance box, not on the exact cell
        s.food = Point::new(124, 122);
        s.step(&mut rng);
        assert_eq!(s.length(), INITIAL_LENGTH + 1);
        assert_eq!(s.score(), 1);
        assert_ne!(s.food(), Point::new(124, 122));
        assert!(strictly_inside(s.playfield(), s.food()));

        s.food = Point::new(20, 36);
        s.step(&mut rng);
        assert_eq!(s.body().len(), INITIAL_LENGTH + 1);
    }

    #[test]
    fn food_is_always_strictly_inside() {
        let (mut s, mut rng) = game();
        for _ in 0..500 {
            s.place_food(&mut rng);
            assert!(strictly_inside(s.playfield(), s.food()));
        }
    }

    #[test]
    fn wall_ends_the_game_without_moving() {
        let (mut s, mut rng) = game();
        s.food = Point::new(20, 36);
        for _ in 0..9 {
            s.step(&mut rng);
        }
        assert_eq!(s.head(), Point::new(200, 126));
        assert!(!s.is_game_over());
        s.step(&mut rng);
        assert!(s.is_game_over());
        assert_eq!(s.head(), Point::new(200, 126));
        // Further steps are ignored
        s.step(&mut rng);
        assert_eq!(s.head(), Point::new(200, 126));
    }

    #[test]
    fn wall_check_runs_before_the_body_shift() {
        let (mut s, mut rng) = game();
        s.food = Point::new(20, 36);
        for _ in 0..9 {
            s.step(&mut rng);
        }
        let before: Vec<Point, BODY_CAPACITY> = s.body().iter().copied().collect();
        s.step(&mut rng);
        assert!(s.is_game_over());
        assert_eq!(s.body(), &before[..]);
        assert_eq!(s.length(), INITIAL_LENGTH);
    }

    #[test]
    fn crossing_the_body_keeps_playing() {
        let (mut s, mut rng) = game();
        s.food = Point::new(20, 36);
        s.length = 5;
        for _ in 0..2 {
            s.step(&mut rng);
        }
        for dir in [Direction::Down, Direction::Left, Direction::Up] {
            s.steer(dir);
            s.step(&mut rng);
        }
        // The head is back on a body cell inside the field
        assert_eq!(s.head(), Point::new(120, 126));
        assert!(s.body()[1..].contains(&s.head()));
        assert!(!s.is_game_over());
        s.step(&mut rng);
        assert!(!s.is_game_over());
    }

    #[test]
    fn length_is_capped_at_capacity() {
        let (mut s, mut rng) = game();
        s.length = BODY_CAPACITY;
        s.food = s.head();
        s.food.x += STEP;
        s.step(&mut rng);
        assert_eq!(s.length(), BODY_CAPACITY);
        assert_eq!(s.score(), 1);
    }

    #[test]
    fn full_body_keeps_shifting() {
        let mut rng = Lcg::new(1);
        let mut s = Snake::new(Rect::new(0, 0, 1020, 1036), &mut rng);
        s.food = Point::new(20, 36);
        s.length = BODY_CAPACITY;
        s.body.clear();
        for i in 0..BODY_CAPACITY as i32 {
            let _ = s.body.push(Point::new(s.field.x + 990 - i * STEP, s.field.y + 500));
        }
        let before = s.head();
        s.steer(Direction::Up);
        s.step(&mut rng);
        assert!(!s.is_game_over());
        assert_eq!(s.body().len(), BODY_CAPACITY);
        assert_eq!(s.head(), Point::new(before.x, before.y - STEP));
        assert_eq!(s.body()[1], before);
    }

    #[test]
    fn keys_steer_and_confirm_restarts() {
        let (mut s, mut rng) = game();
        s.on_action(Action::Char('w'));
        assert_eq!(s.direction(), Direction::Up);
        s.on_action(Action::Char('d'));
        assert_eq!(s.direction(), Direction::Right);

        s.on_action(Action::Confirm);
        s.tick(&mut rng);
        assert_eq!(s.head(), Point::new(120, 126));

        s.game_over = true;
        s.on_action(Action::Confirm);
        s.tick(&mut rng);
        assert!(!s.is_game_over());
        assert_eq!(s.head(), Point::new(110, 126));
        assert_eq!(s.score(), 0);
    }
}
