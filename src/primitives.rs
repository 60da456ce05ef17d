//! Shared geometry and animation primitives for the storefront screens
//!
//! Provides the data structures the gallery engine hands to a rendering
//! layer. No drawing happens here; a backend consumes these values.

/// A 2D vector in logical pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Color in RGBA format (0.0 - 1.0)
pub type Color = [f32; 4];

/// Linear interpolation
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Spring timing parameters, renderer-agnostic.
///
/// `response` is the settle duration in seconds; `damping` is the fraction
/// of critical damping (1.0 = no oscillation). Any rendering layer can map
/// these onto its own animation system, or play them out with
/// [`SpringValue`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub response: f64,
    pub damping: f64,
}

/// A value animated toward a target along a [`Spring`] curve.
///
/// Step with `update(dt)` once per frame. The spring constants are derived
/// from the response/damping parameterization: stiffness = (2pi/response)^2,
/// damping coefficient = damping * 2 * sqrt(stiffness) (unit mass).
#[derive(Debug, Clone)]
pub struct SpringValue {
    current: f64,
    target: f64,
    velocity: f64,
    spring: Spring,
}

impl SpringValue {
    pub fn new(value: f64, spring: Spring) -> Self {
        Self {
            current: value,
            target: value,
            velocity: 0.0,
            spring,
        }
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    pub fn set_immediate(&mut self, value: f64) {
        self.current = value;
        self.target = value;
        self.velocity = 0.0;
    }

    pub fn update(&mut self, dt: f64) {
        let stiffness = (std::f64::consts::TAU / self.spring.response).powi(2);
        let damping = self.spring.damping * 2.0 * stiffness.sqrt();

        let delta = self.target - self.current;
        let accel = stiffness * delta - damping * self.velocity;

        self.velocity += accel * dt;
        self.current += self.velocity * dt;

        // Snap if close enough
        if (self.current - self.target).abs() < 0.001 && self.velocity.abs() < 0.001 {
            self.current = self.target;
            self.velocity = 0.0;
        }
    }

    pub fn get(&self) -> f64 {
        self.current
    }

    pub fn is_animating(&self) -> bool {
        (self.current - self.target).abs() > 0.001 || self.velocity.abs() > 0.001
    }
}
