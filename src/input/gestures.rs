//! Gesture recognition for the card gallery
//!
//! A single-pointer state machine over the front card. Only one gesture may
//! be active at a time; a second pointer going down while one is tracked is
//! ignored until the first lifts.
//!
//! Recognizes:
//! - Drag (pointer moves past the touch slop; reports the full delta from
//!   touch-down every motion event)
//! - Long press (held past the duration threshold, then released)
//! - Tap (quick press and release without movement)

use std::time::{Duration, Instant};

use tracing::trace;

use crate::primitives::Vec2;

/// Configuration for gesture recognition
#[derive(Debug, Clone)]
pub struct GestureConfig {
    /// Movement below this distance never starts a drag
    pub touch_slop: f64,

    /// Maximum press time for a tap
    pub tap_duration: Duration,

    /// Hold time after which a release counts as a long press
    pub long_press_duration: Duration,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            touch_slop: 10.0,
            tap_duration: Duration::from_millis(200),
            long_press_duration: Duration::from_millis(500),
        }
    }
}

/// Recognized gesture
#[derive(Debug, Clone, PartialEq)]
pub enum GestureEvent {
    /// Quick press and release on the front card
    Tap { position: Vec2 },

    /// Press held past the long-press threshold, then released
    LongPress { position: Vec2 },

    /// Drag in progress; `offset` is the pointer delta from touch-down
    Drag { offset: Vec2 },

    /// Drag released. No distance or velocity is reported: release never
    /// triggers a reorder, it only lets the front card settle back.
    DragEnd,
}

/// The tracked pointer
#[derive(Debug, Clone)]
struct TouchPoint {
    start_pos: Vec2,
    current_pos: Vec2,
    start_time: Instant,
}

impl TouchPoint {
    fn new(pos: Vec2) -> Self {
        Self {
            start_pos: pos,
            current_pos: pos,
            start_time: Instant::now(),
        }
    }

    fn delta(&self) -> Vec2 {
        self.current_pos - self.start_pos
    }

    fn distance(&self) -> f64 {
        self.delta().length()
    }
}

/// What the tracked pointer has committed to so far
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ActiveGesture {
    /// Just touched, hasn't moved past the slop; may become a tap, a long
    /// press, or a drag
    PotentialPress,
    /// Drag in progress
    Dragging,
}

/// Single-pointer gesture recognizer
#[derive(Debug, Default)]
pub struct GestureRecognizer {
    pub config: GestureConfig,
    point: Option<TouchPoint>,
    gesture: Option<ActiveGesture>,
}

impl GestureRecognizer {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            point: None,
            gesture: None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture == Some(ActiveGesture::Dragging)
    }

    pub fn has_active_touch(&self) -> bool {
        self.point.is_some()
    }

    /// Handle pointer down. Ignored while another pointer is tracked.
    pub fn touch_down(&mut self, pos: Vec2) {
        if self.point.is_some() {
            trace!("ignoring touch down, gesture already active");
            return;
        }
        self.point = Some(TouchPoint::new(pos));
        self.gesture = Some(ActiveGesture::PotentialPress);
    }

    /// Handle pointer motion - returns a gesture event once a drag is active
    pub fn touch_motion(&mut self, pos: Vec2) -> Option<GestureEvent> {
        let point = self.point.as_mut()?;
        point.current_pos = pos;

        match self.gesture {
            Some(ActiveGesture::PotentialPress) => {
                if point.distance() >= self.config.touch_slop {
                    self.gesture = Some(ActiveGesture::Dragging);
                    trace!("drag started");
                    Some(GestureEvent::Drag {
                        offset: point.delta(),
                    })
                } else {
                    None
                }
            }
            Some(ActiveGesture::Dragging) => Some(GestureEvent::Drag {
                offset: point.delta(),
            }),
            None => None,
        }
    }

    /// Handle pointer up - classifies the finished gesture
    pub fn touch_up(&mut self) -> Option<GestureEvent> {
        let point = self.point.take()?;
        let gesture = self.gesture.take();

        match gesture {
            Some(ActiveGesture::Dragging) => Some(GestureEvent::DragEnd),
            Some(ActiveGesture::PotentialPress) => {
                let held = point.start_time.elapsed();
                if held >= self.config.long_press_duration {
                    Some(GestureEvent::LongPress {
                        position: point.start_pos,
                    })
                } else if held < self.config.tap_duration {
                    Some(GestureEvent::Tap {
                        position: point.start_pos,
                    })
                } else {
                    // Held too long for a tap, released too early for a
                    // long press
                    None
                }
            }
            None => None,
        }
    }

    /// Handle pointer cancel - clear all state, no event
    pub fn cancel(&mut self) {
        self.point = None;
        self.gesture = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recognizer() -> GestureRecognizer {
        GestureRecognizer::new(GestureConfig::default())
    }

    /// Config with a long-press threshold short enough to test without
    /// stalling the suite
    fn quick_press_recognizer() -> GestureRecognizer {
        GestureRecognizer::new(GestureConfig {
            long_press_duration: Duration::from_millis(20),
            ..GestureConfig::default()
        })
    }

    #[test]
    fn test_drag_reports_delta_from_touch_down() {
        let mut rec = recognizer();
        rec.touch_down(Vec2::new(100.0, 100.0));

        // Below the slop: no event yet
        assert_eq!(rec.touch_motion(Vec2::new(104.0, 100.0)), None);
        assert!(!rec.is_dragging());

        let event = rec.touch_motion(Vec2::new(130.0, 90.0));
        assert_eq!(
            event,
            Some(GestureEvent::Drag {
                offset: Vec2::new(30.0, -10.0)
            })
        );
        assert!(rec.is_dragging());

        let event = rec.touch_motion(Vec2::new(60.0, 140.0));
        assert_eq!(
            event,
            Some(GestureEvent::Drag {
                offset: Vec2::new(-40.0, 40.0)
            })
        );
    }

    #[test]
    fn test_drag_release_ends_without_reorder_signal() {
        let mut rec = recognizer();
        rec.touch_down(Vec2::new(0.0, 0.0));
        rec.touch_motion(Vec2::new(200.0, 0.0));
        // A huge fast swipe still only ends the drag
        assert_eq!(rec.touch_up(), Some(GestureEvent::DragEnd));
        assert!(!rec.has_active_touch());
    }

    #[test]
    fn test_tap() {
        let mut rec = recognizer();
        rec.touch_down(Vec2::new(50.0, 60.0));
        assert_eq!(
            rec.touch_up(),
            Some(GestureEvent::Tap {
                position: Vec2::new(50.0, 60.0)
            })
        );
    }

    #[test]
    fn test_long_press_fires_on_release() {
        let mut rec = quick_press_recognizer();
        rec.touch_down(Vec2::new(10.0, 10.0));
        std::thread::sleep(Duration::from_millis(30));
        assert_eq!(
            rec.touch_up(),
            Some(GestureEvent::LongPress {
                position: Vec2::new(10.0, 10.0)
            })
        );
    }

    #[test]
    fn test_drag_wins_over_long_press() {
        let mut rec = quick_press_recognizer();
        rec.touch_down(Vec2::new(10.0, 10.0));
        std::thread::sleep(Duration::from_millis(30));
        // Movement past the slop commits to a drag even after the hold
        // threshold elapsed
        assert!(matches!(
            rec.touch_motion(Vec2::new(40.0, 10.0)),
            Some(GestureEvent::Drag { .. })
        ));
        assert_eq!(rec.touch_up(), Some(GestureEvent::DragEnd));
    }

    #[test]
    fn test_second_pointer_is_ignored() {
        let mut rec = recognizer();
        rec.touch_down(Vec2::new(0.0, 0.0));
        rec.touch_motion(Vec2::new(30.0, 0.0));
        // Second down must not reset the tracked gesture
        rec.touch_down(Vec2::new(500.0, 500.0));
        let event = rec.touch_motion(Vec2::new(40.0, 0.0));
        assert_eq!(
            event,
            Some(GestureEvent::Drag {
                offset: Vec2::new(40.0, 0.0)
            })
        );
    }

    #[test]
    fn test_cancel_clears_state() {
        let mut rec = recognizer();
        rec.touch_down(Vec2::new(0.0, 0.0));
        rec.touch_motion(Vec2::new(30.0, 0.0));
        rec.cancel();
        assert!(!rec.has_active_touch());
        assert_eq!(rec.touch_up(), None);
    }
}
