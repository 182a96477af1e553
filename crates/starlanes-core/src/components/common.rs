//! Common spatial components.

use serde::{Deserialize, Serialize};

/// 2D position/direction vector
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance_squared(&self, other: &Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    pub fn distance(&self, other: &Self) -> f32 {
        self.distance_squared(other).sqrt()
    }

    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len > 0.0 {
            Self {
                x: self.x / len,
                y: self.y / len,
            }
        } else {
            Self::ZERO
        }
    }

    /// Unit vector at `angle` radians.
    pub fn from_angle(angle: f32) -> Self {
        Self {
            x: angle.cos(),
            y: angle.sin(),
        }
    }
}

impl std::ops::Add for Vec2 {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl std::ops::Mul<f32> for Vec2 {
    type Output = Self;
    fn mul(self, scalar: f32) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

/// Where an entity sits in world space.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Position {
    pub at: Vec2,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { at: Vec2::new(x, y) }
    }
}

/// Continuous rotation state. Every body spins; the angle is only ever read
/// by the presentation layer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Spin {
    pub angle: f32,
    pub rate: f32,
}

impl Default for Spin {
    fn default() -> Self {
        Self {
            angle: 0.0,
            rate: 0.2,
        }
    }
}

impl Spin {
    pub fn new(angle: f32, rate: f32) -> Self {
        Self { angle, rate }
    }
}

/// Travel target - present only while an entity is drifting toward a point.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Drift {
    pub target: Vec2,
    /// World units per second.
    pub speed: f32,
}
