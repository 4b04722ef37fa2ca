// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Pixel geometry in viewport coordinates. The origin is the top-left corner of the
//! viewport, `x` grows to the right and `y` grows downward. This matches how pointer and
//! touch events report their position.
//!
//! The overlay anchor ([`crate::OverlayPosition`]) is the one exception: it is measured
//! from the viewport's bottom-left corner. [`PixelRect::from_bottom_left_anchor`] does the
//! conversion.

use serde::{Deserialize, Serialize};

use crate::ContainsResult;

/// Size of the visible area the overlay is positioned in.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self { Self { width, height } }
}

impl Default for Viewport {
    fn default() -> Self { Self::new(1024.0, 768.0) }
}

#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self { Self { x, y } }
}

#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct PixelSize {
    pub width: f64,
    pub height: f64,
}

impl PixelSize {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self { Self { width, height } }
}

/// Axis aligned rectangle. The left and top edges are inside the rectangle, the right and
/// bottom edges are not.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct PixelRect {
    pub origin: PixelPoint,
    pub size: PixelSize,
}

impl PixelRect {
    #[must_use]
    pub const fn new(origin: PixelPoint, size: PixelSize) -> Self { Self { origin, size } }

    /// Rectangle of something pinned `bottom` pixels above the viewport's bottom edge and
    /// `left` pixels right of its left edge.
    #[must_use]
    pub fn from_bottom_left_anchor(
        bottom: f64,
        left: f64,
        size: PixelSize,
        viewport: Viewport,
    ) -> Self {
        let top = viewport.height - bottom - size.height;
        Self::new(PixelPoint::new(left, top), size)
    }

    #[must_use]
    pub fn contains(&self, point: PixelPoint) -> ContainsResult {
        let PixelRect { origin, size } = self;
        let inside_x = point.x >= origin.x && point.x < origin.x + size.width;
        let inside_y = point.y >= origin.y && point.y < origin.y + size.height;
        (inside_x && inside_y).into()
    }
}
