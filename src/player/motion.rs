//! Directional motion intent.
//!
//! Each axis is a small state machine over the two opposing keys. Pressing a
//! key makes it the active direction; releasing the active key while the
//! opposite one is still held resumes motion in the held direction instead of
//! stopping.

use bevy::prelude::*;

/// A movement key direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    fn sign(self) -> Sign {
        match self {
            Direction::Up | Direction::Right => Sign::Positive,
            Direction::Down | Direction::Left => Sign::Negative,
        }
    }

    fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sign {
    Negative,
    Positive,
}

impl Sign {
    fn opposite(self) -> Self {
        match self {
            Sign::Negative => Sign::Positive,
            Sign::Positive => Sign::Negative,
        }
    }

    fn value(self) -> f32 {
        match self {
            Sign::Negative => -1.0,
            Sign::Positive => 1.0,
        }
    }
}

/// Held keys on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum AxisState {
    #[default]
    Idle,
    /// One key held, moving that way
    Single(Sign),
    /// Both keys held, moving towards `active`
    Both { active: Sign },
}

impl AxisState {
    fn press(self, key: Sign) -> Self {
        match self {
            AxisState::Idle => AxisState::Single(key),
            AxisState::Single(held) if held == key => self,
            AxisState::Single(_) | AxisState::Both { .. } => AxisState::Both { active: key },
        }
    }

    fn release(self, key: Sign) -> Self {
        match self {
            AxisState::Idle => AxisState::Idle,
            AxisState::Single(held) if held == key => AxisState::Idle,
            AxisState::Single(_) => self,
            AxisState::Both { .. } => AxisState::Single(key.opposite()),
        }
    }

    fn active(self) -> Option<Sign> {
        match self {
            AxisState::Idle => None,
            AxisState::Single(sign) | AxisState::Both { active: sign } => Some(sign),
        }
    }

    fn is_held(self, key: Sign) -> bool {
        match self {
            AxisState::Idle => false,
            AxisState::Single(held) => held == key,
            AxisState::Both { .. } => true,
        }
    }

    fn component(self) -> f32 {
        self.active().map_or(0.0, Sign::value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Vertical {
    #[default]
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Horizontal {
    Left,
    #[default]
    Right,
}

/// Which way the player faces on each axis. Kept when motion stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Facing {
    pub vertical: Vertical,
    pub horizontal: Horizontal,
}

impl Facing {
    /// Unit offsets towards the facing direction.
    pub fn offset(&self) -> Vec2 {
        let x = match self.horizontal {
            Horizontal::Left => -1.0,
            Horizontal::Right => 1.0,
        };
        let y = match self.vertical {
            Vertical::Up => 1.0,
            Vertical::Down => -1.0,
        };
        Vec2::new(x, y)
    }
}

/// Movement keys held by the player and the resulting facing.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct Motion {
    horizontal: AxisState,
    vertical: AxisState,
    facing: Facing,
}

impl Motion {
    pub fn press(&mut self, direction: Direction) {
        let axis = self.axis_mut(direction);
        *axis = axis.press(direction.sign());
        self.update_facing();
    }

    pub fn release(&mut self, direction: Direction) {
        let axis = self.axis_mut(direction);
        *axis = axis.release(direction.sign());
        self.update_facing();
    }

    /// Forget all held keys.
    pub fn halt(&mut self) {
        self.horizontal = AxisState::Idle;
        self.vertical = AxisState::Idle;
    }

    pub fn is_held(&self, direction: Direction) -> bool {
        let axis = if direction.is_vertical() { self.vertical } else { self.horizontal };
        axis.is_held(direction.sign())
    }

    pub fn is_moving(&self) -> bool {
        self.horizontal.active().is_some() || self.vertical.active().is_some()
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    /// Velocity for the held keys. Diagonals are normalized so the speed is
    /// the same whether one or two axes are active.
    pub fn velocity(&self, speed: f32) -> Vec2 {
        Vec2::new(self.horizontal.component(), self.vertical.component()).normalize_or_zero() * speed
    }

    fn axis_mut(&mut self, direction: Direction) -> &mut AxisState {
        if direction.is_vertical() {
            &mut self.vertical
        } else {
            &mut self.horizontal
        }
    }

    fn update_facing(&mut self) {
        match self.vertical.active() {
            Some(Sign::Positive) => self.facing.vertical = Vertical::Up,
            Some(Sign::Negative) => self.facing.vertical = Vertical::Down,
            None => {}
        }
        match self.horizontal.active() {
            Some(Sign::Positive) => self.facing.horizontal = Horizontal::Right,
            Some(Sign::Negative) => self.facing.horizontal = Horizontal::Left,
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const SPEED: f32 = 5.0;

    #[test]
    fn single_key_moves_at_full_speed() {
        let mut motion = Motion::default();
        motion.press(Direction::Down);
        assert_eq!(motion.velocity(SPEED), Vec2::new(0.0, -SPEED));
        assert_eq!(motion.facing().vertical, Vertical::Down);
        assert!(motion.is_held(Direction::Down));
        assert!(!motion.is_held(Direction::Up));
    }

    #[test]
    fn diagonal_components_are_scaled() {
        let mut motion = Motion::default();
        motion.press(Direction::Up);
        motion.press(Direction::Left);
        let velocity = motion.velocity(SPEED);
        let component = SPEED / 2f32.sqrt();
        assert!((velocity.x + component).abs() < 1e-5);
        assert!((velocity.y - component).abs() < 1e-5);
        assert!((velocity.length() - SPEED).abs() < 1e-5);
    }

    #[test]
    fn last_pressed_opposite_key_wins() {
        let mut motion = Motion::default();
        motion.press(Direction::Up);
        motion.press(Direction::Down);
        assert_eq!(motion.velocity(SPEED).y, -SPEED);
        assert!(motion.is_held(Direction::Up));
        assert!(motion.is_held(Direction::Down));
    }

    #[test]
    fn releasing_one_of_two_opposite_keys_resumes_the_other() {
        let mut motion = Motion::default();
        motion.press(Direction::Up);
        motion.press(Direction::Down);
        motion.release(Direction::Down);
        assert_eq!(motion.velocity(SPEED), Vec2::new(0.0, SPEED));
        assert_eq!(motion.facing().vertical, Vertical::Up);

        motion.press(Direction::Down);
        motion.release(Direction::Up);
        assert_eq!(motion.velocity(SPEED), Vec2::new(0.0, -SPEED));
        assert_eq!(motion.facing().vertical, Vertical::Down);
    }

    #[test]
    fn horizontal_axis_follows_the_same_rule() {
        let mut motion = Motion::default();
        motion.press(Direction::Right);
        motion.press(Direction::Left);
        motion.release(Direction::Left);
        assert_eq!(motion.velocity(SPEED), Vec2::new(SPEED, 0.0));
        assert_eq!(motion.facing().horizontal, Horizontal::Right);
    }

    #[test]
    fn releasing_the_only_key_stops_but_keeps_facing() {
        let mut motion = Motion::default();
        motion.press(Direction::Left);
        motion.release(Direction::Left);
        assert_eq!(motion.velocity(SPEED), Vec2::ZERO);
        assert!(!motion.is_moving());
        assert_eq!(motion.facing().horizontal, Horizontal::Left);
    }

    #[test]
    fn releasing_an_unheld_key_changes_nothing() {
        let mut motion = Motion::default();
        motion.press(Direction::Up);
        motion.release(Direction::Down);
        assert_eq!(motion.velocity(SPEED), Vec2::new(0.0, SPEED));
    }

    #[test]
    fn halt_clears_every_flag() {
        let mut motion = Motion::default();
        for direction in Direction::ALL {
            motion.press(direction);
        }
        motion.halt();
        for direction in Direction::ALL {
            assert!(!motion.is_held(direction));
        }
        assert_eq!(motion.velocity(SPEED), Vec2::ZERO);
    }

    fn arb_event() -> impl Strategy<Value = (Direction, bool)> {
        (
            prop_oneof![
                Just(Direction::Up),
                Just(Direction::Down),
                Just(Direction::Left),
                Just(Direction::Right),
            ],
            any::<bool>(),
        )
    }

    proptest! {
        #[test]
        fn prop_speed_is_zero_or_full(events in prop::collection::vec(arb_event(), 0..40)) {
            let mut motion = Motion::default();
            for (direction, pressed) in events {
                if pressed {
                    motion.press(direction);
                } else {
                    motion.release(direction);
                }
                let speed = motion.velocity(SPEED).length();
                prop_assert!(speed.abs() < 1e-4 || (speed - SPEED).abs() < 1e-4, "speed was {}", speed);
                prop_assert_eq!(motion.is_moving(), speed > 0.0);
            }
        }

        #[test]
        fn prop_moving_direction_is_held(events in prop::collection::vec(arb_event(), 0..40)) {
            let mut motion = Motion::default();
            for (direction, pressed) in events {
                if pressed {
                    motion.press(direction);
                } else {
                    motion.release(direction);
                }
            }
            let velocity = motion.velocity(SPEED);
            if velocity.x > 0.0 { prop_assert!(motion.is_held(Direction::Right)); }
            if velocity.x < 0.0 { prop_assert!(motion.is_held(Direction::Left)); }
            if velocity.y > 0.0 { prop_assert!(motion.is_held(Direction::Up)); }
            if velocity.y < 0.0 { prop_assert!(motion.is_held(Direction::Down)); }
        }
    }
}
