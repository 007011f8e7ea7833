//! Match configuration and the defaults used by the front-ends.

pub const DEFAULT_WIDTH: i32 = 10;
pub const DEFAULT_HEIGHT: i32 = 10;
pub const DEFAULT_SHIP_COUNT: i32 = 5;

/// Smallest playable side length.
pub const MIN_SIDE: usize = 2;
/// Largest side length the interactive front-end accepts.
pub const MAX_SIDE: usize = 20;

/// Points awarded to a player for finishing a match.
pub const WIN_BONUS: u32 = 10;

/// Number of entries shown on the score screen by default.
pub const DEFAULT_SCORE_LIMIT: usize = 10;

/// Board dimensions and ship count for a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchConfig {
    pub width: i32,
    pub height: i32,
    pub ship_count: i32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            ship_count: DEFAULT_SHIP_COUNT,
        }
    }
}

impl MatchConfig {
    pub const fn new(width: i32, height: i32, ship_count: i32) -> Self {
        Self {
            width,
            height,
            ship_count,
        }
    }

    /// Replace out-of-range values the way the interactive setup does.
    ///
    /// Sides outside `MIN_SIDE..=MAX_SIDE` fall back to the defaults; a ship
    /// count outside `1..=width*height` becomes `min(5, cells / 2)`.
    pub fn sanitized(self) -> Self {
        let side = |v: i32, default: i32| {
            if (MIN_SIDE as i32..=MAX_SIDE as i32).contains(&v) {
                v
            } else {
                default
            }
        };
        let width = side(self.width, DEFAULT_WIDTH);
        let height = side(self.height, DEFAULT_HEIGHT);
        let cells = width * height;
        let ship_count = if (1..=cells).contains(&self.ship_count) {
            self.ship_count
        } else {
            DEFAULT_SHIP_COUNT.min(cells / 2)
        };
        Self {
            width,
            height,
            ship_count,
        }
    }
}
