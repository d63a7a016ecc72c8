//! Dice-style random values used by static data

use serde::{Deserialize, Serialize};

use crate::rng::GameRng;

/// How a random value is evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aspect {
    Minimise,
    Average,
    Maximise,
    Randomise,
}

/// `base + dice d sides + m_bonus(m_bonus, level)`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomValue {
    pub base: i32,
    pub dice: i32,
    pub sides: i32,
    pub m_bonus: i32,
}

impl RandomValue {
    pub const ZERO: Self = Self::fixed(0);

    /// A constant value
    pub const fn fixed(base: i32) -> Self {
        Self {
            base,
            dice: 0,
            sides: 0,
            m_bonus: 0,
        }
    }

    pub const fn new(base: i32, dice: i32, sides: i32, m_bonus: i32) -> Self {
        Self {
            base,
            dice,
            sides,
            m_bonus,
        }
    }

    pub const fn is_zero(&self) -> bool {
        self.base == 0 && (self.dice == 0 || self.sides == 0) && self.m_bonus == 0
    }

    /// Evaluate at `level`; `max_depth` bounds the level scaling of `m_bonus`.
    pub fn calc(&self, rng: &mut GameRng, level: i32, max_depth: i32, aspect: Aspect) -> i32 {
        match aspect {
            Aspect::Minimise => self.min(),
            Aspect::Maximise => self.max(),
            Aspect::Average => {
                let dice = if self.sides > 0 {
                    self.dice * (self.sides + 1) / 2
                } else {
                    0
                };
                let level = level.clamp(0, (max_depth - 1).max(0));
                let bonus = if max_depth > 0 {
                    self.m_bonus * level / max_depth
                } else {
                    0
                };
                self.base + dice + bonus
            }
            Aspect::Randomise => {
                self.base
                    + rng.damroll(self.dice, self.sides)
                    + rng.m_bonus(self.m_bonus, level, max_depth)
            }
        }
    }

    /// Smallest possible value
    pub const fn min(&self) -> i32 {
        if self.sides > 0 {
            self.base + self.dice
        } else {
            self.base
        }
    }

    /// Largest possible value
    pub const fn max(&self) -> i32 {
        let dice = if self.sides > 0 {
            self.dice * self.sides
        } else {
            0
        };
        self.base + dice + self.m_bonus
    }
}
