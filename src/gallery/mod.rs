//! Card-stack image gallery
//!
//! The gallery owns the deck, the layout knobs, and the gesture recognizer,
//! and exposes a render boundary: for every depth in the current order it
//! produces the image reference and its computed transform. It draws
//! nothing itself - a rendering layer applies the transforms and animates
//! changes using each depth's own spring timing.
//!
//! All gallery state is ephemeral: built fresh when the screen appears from
//! the catalog's image list, discarded when the screen is torn down.

pub mod params;
pub mod stack;
pub mod transform;

use tracing::{debug, info};

use crate::input::gestures::{GestureConfig, GestureEvent, GestureRecognizer};
use crate::primitives::Vec2;

pub use params::LayoutParams;
pub use stack::CardStack;
pub use transform::{card_transform, CardTransform};

/// Something the surrounding screen may want to act on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryAction {
    /// The front card was tapped
    FrontCardTapped,
}

/// One card at the render boundary, front first
#[derive(Debug, Clone, Copy)]
pub struct CardRender<'a> {
    pub image: &'a str,
    pub depth: usize,
    pub transform: CardTransform,
}

pub struct Gallery {
    stack: CardStack,
    params: LayoutParams,
    recognizer: GestureRecognizer,
}

impl Gallery {
    /// Seed the gallery from the catalog's image list, front first. The
    /// list must not be empty.
    pub fn new(images: Vec<String>, params: LayoutParams, gestures: GestureConfig) -> Self {
        Self {
            stack: CardStack::new(images),
            params,
            recognizer: GestureRecognizer::new(gestures),
        }
    }

    pub fn stack(&self) -> &CardStack {
        &self.stack
    }

    pub fn params(&self) -> &LayoutParams {
        &self.params
    }

    /// Slider surface: each setter clamps to the knob's fixed range and the
    /// change shows up in the next computed transform at every depth.
    pub fn set_spacing(&mut self, spacing: f64) {
        self.params.set_spacing(spacing);
    }

    pub fn set_scale_decay(&mut self, scale_decay: f64) {
        self.params.set_scale_decay(scale_decay);
    }

    pub fn set_rotation_step(&mut self, rotation_step: f64) {
        self.params.set_rotation_step(rotation_step);
    }

    /// Pointer down on the front card. Cards behind the front are visible
    /// but never interactive, so the screen only routes front-card input
    /// here.
    pub fn touch_down(&mut self, pos: Vec2) {
        self.recognizer.touch_down(pos);
    }

    pub fn touch_motion(&mut self, pos: Vec2) -> Option<GalleryAction> {
        let event = self.recognizer.touch_motion(pos)?;
        self.apply(event)
    }

    pub fn touch_up(&mut self) -> Option<GalleryAction> {
        let event = self.recognizer.touch_up()?;
        self.apply(event)
    }

    pub fn cancel_touch(&mut self) {
        self.recognizer.cancel();
        self.stack.clear_drag();
    }

    fn apply(&mut self, event: GestureEvent) -> Option<GalleryAction> {
        match event {
            GestureEvent::Drag { offset } => {
                self.stack.set_drag(offset);
                None
            }
            GestureEvent::DragEnd => {
                // Release never reorders; the front card springs back
                self.stack.clear_drag();
                debug!("drag released, front card settling back");
                None
            }
            GestureEvent::LongPress { .. } => {
                self.stack.clear_drag();
                self.stack.rotate_front_to_back();
                info!(front = %self.stack.front(), "long press, front card sent to back");
                None
            }
            GestureEvent::Tap { .. } => Some(GalleryAction::FrontCardTapped),
        }
    }

    /// Transform for one depth in the current order
    pub fn transform_at(&self, depth: usize) -> CardTransform {
        card_transform(depth, self.stack.drag(), &self.params)
    }

    /// The render boundary: every card in the current order with its
    /// freshly computed transform, front (depth 0) first. A renderer that
    /// paints back-to-front iterates this in reverse.
    pub fn render_cards(&self) -> Vec<CardRender<'_>> {
        self.stack
            .order()
            .iter()
            .enumerate()
            .map(|(depth, image)| CardRender {
                image,
                depth,
                transform: self.transform_at(depth),
            })
            .collect()
    }
}
