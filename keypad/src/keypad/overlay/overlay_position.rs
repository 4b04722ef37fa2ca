// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::{Context, IntoDiagnostic};
use serde::{Deserialize, Serialize};

use crate::{PixelRect, PixelSize, Px, Viewport, px};

/// Anchor of the overlay, measured from the viewport's bottom-left corner. Persisted as
/// `{"bottom":"14px","left":"14px"}`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OverlayPosition {
    pub bottom: Px,
    pub left: Px,
}

impl Default for OverlayPosition {
    fn default() -> Self { Self::new(px(14.0), px(14.0)) }
}

impl OverlayPosition {
    #[must_use]
    pub const fn new(bottom: Px, left: Px) -> Self { Self { bottom, left } }

    /// Parses the persisted JSON record.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not JSON, a field is missing, or a length is not
    /// `<finite number>px`.
    pub fn try_from_json(json: &str) -> miette::Result<Self> {
        serde_json::from_str(json)
            .into_diagnostic()
            .wrap_err(PositionErrorCouldNot::ParseJsonRecord)
    }

    /// # Errors
    ///
    /// Returns an error if serialization fails. It doesn't for the lengths [`Px`] can
    /// hold, but the error is passed up rather than swallowed.
    pub fn try_to_json(&self) -> miette::Result<String> {
        serde_json::to_string(self)
            .into_diagnostic()
            .wrap_err(PositionErrorCouldNot::SerializeJsonRecord)
    }

    /// Where the overlay is drawn, in viewport coordinates.
    #[must_use]
    pub fn to_rect(&self, overlay_size: PixelSize, viewport: Viewport) -> PixelRect {
        PixelRect::from_bottom_left_anchor(
            self.bottom.as_f64(),
            self.left.as_f64(),
            overlay_size,
            viewport,
        )
    }
}

/// Limits a persisted anchor must respect to be used. They keep a grabbable part of the
/// overlay on screen. They are only checked when an anchor is loaded, never while
/// dragging.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayBounds {
    pub min_bottom: f64,
    pub min_left: f64,
    /// `bottom` may be at most `viewport height - top_margin`.
    pub top_margin: f64,
    /// `left` may be at most `viewport width - right_margin`.
    pub right_margin: f64,
}

impl Default for OverlayBounds {
    fn default() -> Self {
        Self {
            min_bottom: -222.0,
            min_left: -280.0,
            top_margin: 40.0,
            right_margin: 20.0,
        }
    }
}

impl OverlayBounds {
    /// The edges are inclusive: an anchor sitting exactly on a limit is fine.
    ///
    /// # Errors
    ///
    /// Returns the first limit that `position` breaks.
    pub fn check(
        &self,
        position: &OverlayPosition,
        viewport: Viewport,
    ) -> Result<(), PositionErrorCouldNot> {
        let bottom = position.bottom.as_f64();
        let left = position.left.as_f64();
        let max_bottom = viewport.height - self.top_margin;
        let max_left = viewport.width - self.right_margin;

        if bottom < self.min_bottom || bottom > max_bottom {
            return Err(PositionErrorCouldNot::FitBottomInBounds {
                bottom,
                min: self.min_bottom,
                max: max_bottom,
            });
        }
        if left < self.min_left || left > max_left {
            return Err(PositionErrorCouldNot::FitLeftInBounds {
                left,
                min: self.min_left,
                max: max_left,
            });
        }
        Ok(())
    }
}

#[derive(thiserror::Error, Debug, miette::Diagnostic, PartialEq)]
pub enum PositionErrorCouldNot {
    #[error("📌 Could not parse the persisted overlay position")]
    ParseJsonRecord,

    #[error("📌 Could not serialize the overlay position")]
    SerializeJsonRecord,

    #[error("📌 Could not fit bottom {bottom} in {min}..={max}")]
    FitBottomInBounds { bottom: f64, min: f64, max: f64 },

    #[error("📌 Could not fit left {left} in {min}..={max}")]
    FitLeftInBounds { left: f64, min: f64, max: f64 },
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test]
    fn test_json_shape() {
        let json = OverlayPosition::default().try_to_json().unwrap();
        assert_eq!(json, r#"{"bottom":"14px","left":"14px"}"#);

        let it = OverlayPosition::try_from_json(r#"{"left":"-3.5px","bottom":"200px"}"#)
            .unwrap();
        assert_eq!(it, OverlayPosition::new(px(200.0), px(-3.5)));
    }

    #[test_case(""; "empty")]
    #[test_case("not json"; "garbage")]
    #[test_case(r#"{"bottom":"1px"}"#; "missing left")]
    #[test_case(r#"{"bottom":1,"left":2}"#; "numbers instead of strings")]
    #[test_case(r#"{"bottom":"1em","left":"2px"}"#; "wrong unit")]
    #[test_case(r#"{"bottom":"infpx","left":"2px"}"#; "infinite")]
    #[test_case("null"; "null")]
    fn test_malformed_json_is_an_error(json: &str) {
        assert!(OverlayPosition::try_from_json(json).is_err());
    }

    #[test_case(-222.0, 0.0, true; "bottom at min")]
    #[test_case(-222.5, 0.0, false; "bottom below min")]
    #[test_case(360.0, 0.0, true; "bottom at max")]
    #[test_case(360.5, 0.0, false; "bottom above max")]
    #[test_case(0.0, -280.0, true; "left at min")]
    #[test_case(0.0, -281.0, false; "left below min")]
    #[test_case(0.0, 780.0, true; "left at max")]
    #[test_case(0.0, 781.0, false; "left above max")]
    fn test_bounds_check(bottom: f64, left: f64, is_ok: bool) {
        let viewport = Viewport::new(800.0, 400.0);
        let position = OverlayPosition::new(px(bottom), px(left));
        assert_eq!(
            OverlayBounds::default().check(&position, viewport).is_ok(),
            is_ok
        );
    }

    #[test]
    fn test_bounds_error_names_the_limit() {
        let viewport = Viewport::new(800.0, 400.0);
        let position = OverlayPosition::new(px(-300.0), px(10.0));
        assert_eq!(
            OverlayBounds::default().check(&position, viewport),
            Err(PositionErrorCouldNot::FitBottomInBounds {
                bottom: -300.0,
                min: -222.0,
                max: 360.0,
            })
        );
    }

    #[test]
    fn test_to_rect() {
        let rect = OverlayPosition::default()
            .to_rect(PixelSize::new(360.0, 280.0), Viewport::new(800.0, 400.0));
        assert_eq!(rect.origin.x, 14.0);
        assert_eq!(rect.origin.y, 106.0);
    }
}
