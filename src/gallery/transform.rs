//! Per-card transform computation
//!
//! Pure projection from (depth, live drag offset, layout parameters) to the
//! visual placement of one card. Called fresh for every depth on every
//! frame; nothing here is stored or mutated.

use crate::gallery::params::LayoutParams;
use crate::primitives::{Color, Spring, Vec2};

/// A card can never shrink past this, no matter the depth
const SCALE_FLOOR: f64 = 0.1;

/// Baseline shrink per depth before `scale_decay` recovers part of it
const SCALE_STEP: f64 = 0.05;

/// Spring settle time added per depth; deeper cards animate more softly
const RESPONSE_PER_DEPTH: f64 = 0.04;

/// Springs never settle faster than this
const MIN_RESPONSE: f64 = 0.2;

/// Oscillation decay, fixed for all depths
const DAMPING_FRACTION: f64 = 0.68;

/// Drop shadow for one card
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    pub color: Color,
    pub blur: f64,
    pub offset: Vec2,
}

/// The front card casts a slightly larger shadow than the rest of the stack
pub const FRONT_SHADOW: Shadow = Shadow {
    color: [0.0, 0.0, 0.0, 0.33],
    blur: 4.0,
    offset: Vec2 { x: 2.0, y: 2.0 },
};

/// Fixed small shadow shared by every non-front depth
pub const BACK_SHADOW: Shadow = Shadow {
    color: [0.0, 0.0, 0.0, 0.25],
    blur: 2.0,
    offset: Vec2 { x: 2.0, y: 2.0 },
};

/// Visual placement of one card, consumed by the rendering layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTransform {
    /// Displacement from the stack's anchor position
    pub offset: Vec2,
    /// Uniform scale factor; always exactly 1.0 at depth 0
    pub scale: f64,
    /// Flat rotation about the card's face normal, in degrees. This is a 2D
    /// visual rotation, never a perspective tilt.
    pub rotation: f64,
    pub shadow: Shadow,
    /// Timing to use when this depth's placement changes
    pub spring: Spring,
}

/// Compute the transform for the card at `depth` (0 = front).
///
/// `drag` is the live pointer delta of the active drag gesture; only the
/// front card tracks it, every other depth ignores it entirely.
pub fn card_transform(depth: usize, drag: Vec2, params: &LayoutParams) -> CardTransform {
    let d = depth as f64;
    let tracked = if depth == 0 { drag } else { Vec2::ZERO };

    CardTransform {
        offset: Vec2::new(tracked.x, tracked.y - d * params.spacing()),
        scale: (1.0 - d * (SCALE_STEP - params.scale_decay())).max(SCALE_FLOOR),
        rotation: d * params.rotation_step(),
        shadow: if depth == 0 { FRONT_SHADOW } else { BACK_SHADOW },
        spring: Spring {
            response: (d * RESPONSE_PER_DEPTH).max(MIN_RESPONSE),
            damping: DAMPING_FRACTION,
        },
    }
}
