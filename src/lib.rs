//! Orchard - a mobile storefront screen set
//!
//! Two screens over a shared product catalog: a product detail page with
//! quantity selection and order placement, and a gesture-driven card-stack
//! image gallery. The gallery engine is the interesting part - it keeps an
//! ordered deck of product images, computes a per-card transform (offset,
//! scale, rotation, spring timing) from stack depth and live drag input,
//! and rotates the deck on long press. Rendering is left to a backend that
//! consumes the computed transforms.

pub mod catalog;
pub mod config;
pub mod gallery;
pub mod input;
pub mod order;
pub mod primitives;
