//! Touch input handling

pub mod gestures;
