// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{DEBUG_KEYPAD_DRAG, OverlayPosition, OverlayPositionStore, PixelPoint, PixelSize,
            PositionStorage, Viewport, px};

/// Moves the overlay so it stays centered under the user's finger.
///
/// Only the first contact of a sample counts, so a second finger can't pull the overlay
/// around. The anchor is not clamped: the overlay may be dragged partly or fully off
/// screen. [`OverlayPositionStore::load`] brings it back next time.
#[derive(Clone, Copy, Debug, Default)]
pub struct DragPositioner;

impl DragPositioner {
    /// Anchor that centers an overlay of `overlay_size` on `contact`.
    #[must_use]
    pub fn anchor_for(
        contact: PixelPoint,
        overlay_size: PixelSize,
        viewport: Viewport,
    ) -> OverlayPosition {
        let bottom = viewport.height - (contact.y + overlay_size.height / 2.0);
        let left = contact.x - overlay_size.width / 2.0;
        OverlayPosition::new(px(bottom), px(left))
    }

    /// Handles one drag sample. Every sample is saved, not only the last one, so an
    /// interrupted drag still leaves its latest anchor in storage. A failed save is
    /// logged and the new anchor is still returned.
    ///
    /// Returns `None` when the sample carries no contacts.
    pub fn on_sample<S: PositionStorage>(
        contacts: &[PixelPoint],
        overlay_size: PixelSize,
        viewport: Viewport,
        store: &mut OverlayPositionStore<S>,
    ) -> Option<OverlayPosition> {
        let contact = *contacts.first()?;
        let anchor = Self::anchor_for(contact, overlay_size, viewport);

        DEBUG_KEYPAD_DRAG.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "🖐️ Drag sample",
                contact = ?contact,
                bottom = %anchor.bottom,
                left = %anchor.left
            );
        });

        if let Err(report) = store.save(&anchor) {
            // % is Display, ? is Debug.
            tracing::error!(
                message = "🖐️ Could not save dragged overlay position",
                error = ?report
            );
        }

        Some(anchor)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{InMemoryPositionStorage, OverlayBounds};

    fn store() -> OverlayPositionStore<InMemoryPositionStorage> {
        OverlayPositionStore::new(
            InMemoryPositionStorage::default(),
            "keyboardPosition",
            OverlayPosition::default(),
            OverlayBounds::default(),
        )
    }

    #[test]
    fn test_anchor_centers_overlay_on_contact() {
        let anchor = DragPositioner::anchor_for(
            PixelPoint::new(400.0, 300.0),
            PixelSize::new(360.0, 280.0),
            Viewport::new(800.0, 600.0),
        );
        assert_eq!(anchor, OverlayPosition::new(px(160.0), px(220.0)));
    }

    #[test]
    fn test_anchor_is_not_clamped() {
        let anchor = DragPositioner::anchor_for(
            PixelPoint::new(-100.0, 900.0),
            PixelSize::new(360.0, 280.0),
            Viewport::new(800.0, 600.0),
        );
        assert_eq!(anchor, OverlayPosition::new(px(-440.0), px(-280.0)));
    }

    #[test]
    fn test_each_sample_is_saved_using_first_contact() {
        let mut store = store();
        let size = PixelSize::new(100.0, 50.0);
        let viewport = Viewport::new(800.0, 600.0);

        let first = DragPositioner::on_sample(
            &[PixelPoint::new(100.0, 100.0), PixelPoint::new(700.0, 10.0)],
            size,
            viewport,
            &mut store,
        );
        assert_eq!(first, Some(OverlayPosition::new(px(475.0), px(50.0))));
        assert_eq!(
            store.storage().items.get("keyboardPosition").map(String::as_str),
            Some(r#"{"bottom":"475px","left":"50px"}"#)
        );

        DragPositioner::on_sample(&[PixelPoint::new(60.0, 575.0)], size, viewport, &mut store);
        assert_eq!(
            store.storage().items.get("keyboardPosition").map(String::as_str),
            Some(r#"{"bottom":"0px","left":"10px"}"#)
        );
    }

    #[test]
    fn test_empty_sample_is_ignored() {
        let mut store = store();
        let it = DragPositioner::on_sample(
            &[],
            PixelSize::new(100.0, 50.0),
            Viewport::default(),
            &mut store,
        );
        assert_eq!(it, None);
        assert!(store.storage().items.is_empty());
    }
}
