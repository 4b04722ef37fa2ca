// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ContainsResult, DEBUG_KEYPAD_MOD, OverlayVisibility, PixelPoint, PixelRect,
            VisibilityEvent};

/// Hides the overlay when the user taps somewhere that is neither the field nor the
/// overlay. Every pointer-down is judged on its own, there is no debounce.
///
/// The host reports the field's rectangle with [`Self::set_field_bounds`]. Until it
/// does, only the overlay counts as inside.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OutsideInteractionWatcher {
    maybe_field_bounds: Option<PixelRect>,
}

impl OutsideInteractionWatcher {
    pub fn set_field_bounds(&mut self, field_bounds: PixelRect) {
        self.maybe_field_bounds = Some(field_bounds);
    }

    /// Whether `target` lands on the field, or on the overlay when one is on screen.
    #[must_use]
    pub fn hit_test(
        &self,
        target: PixelPoint,
        maybe_overlay_bounds: Option<PixelRect>,
    ) -> ContainsResult {
        let is_inside = [self.maybe_field_bounds, maybe_overlay_bounds]
            .into_iter()
            .flatten()
            .any(|rect| rect.contains(target) == ContainsResult::DoesContain);
        is_inside.into()
    }

    /// Returns the visibility after the pointer-down at `target`.
    #[must_use]
    pub fn on_pointer_down(
        &self,
        target: PixelPoint,
        maybe_overlay_bounds: Option<PixelRect>,
        visibility: OverlayVisibility,
    ) -> OverlayVisibility {
        match self.hit_test(target, maybe_overlay_bounds) {
            ContainsResult::DoesContain => visibility,
            ContainsResult::DoesNotContain => {
                DEBUG_KEYPAD_MOD.then(|| {
                    // % is Display, ? is Debug.
                    tracing::debug!(
                        message = "👆 Pointer down outside field and overlay",
                        target = ?target,
                        visibility = %visibility
                    );
                });
                visibility.next(VisibilityEvent::OutsideInteraction)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;
    use crate::PixelSize;

    fn watcher() -> OutsideInteractionWatcher {
        let mut it = OutsideInteractionWatcher::default();
        it.set_field_bounds(PixelRect::new(
            PixelPoint::new(10.0, 10.0),
            PixelSize::new(200.0, 30.0),
        ));
        it
    }

    fn overlay() -> PixelRect {
        PixelRect::new(PixelPoint::new(14.0, 306.0), PixelSize::new(360.0, 280.0))
    }

    #[test_case(PixelPoint::new(50.0, 20.0), OverlayVisibility::Visible; "on the field")]
    #[test_case(PixelPoint::new(100.0, 400.0), OverlayVisibility::Visible; "on the overlay")]
    #[test_case(PixelPoint::new(700.0, 20.0), OverlayVisibility::Hidden; "outside both")]
    fn test_pointer_down_while_visible(target: PixelPoint, expected: OverlayVisibility) {
        let it = watcher().on_pointer_down(target, Some(overlay()), OverlayVisibility::Visible);
        assert_eq!(it, expected);
    }

    #[test]
    fn test_without_field_bounds_only_overlay_is_inside() {
        let watcher = OutsideInteractionWatcher::default();
        assert_eq!(
            watcher.hit_test(PixelPoint::new(50.0, 20.0), Some(overlay())),
            ContainsResult::DoesNotContain
        );
        assert_eq!(
            watcher.hit_test(PixelPoint::new(100.0, 400.0), Some(overlay())),
            ContainsResult::DoesContain
        );
    }

    #[test]
    fn test_hidden_stays_hidden() {
        let it = watcher().on_pointer_down(
            PixelPoint::new(50.0, 20.0),
            None,
            OverlayVisibility::Hidden,
        );
        assert_eq!(it, OverlayVisibility::Hidden);
    }
}
