// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! [`KeypadController`] owns the keypad's state and applies input events to it. It never
//! returns an error: a rejected edit is a no-op, and storage problems are logged and
//! fall back to the default anchor.

use crate::{ChangeEvent, DEBUG_KEYPAD_MOD, DeferredTask, DeferredTasks, DisabledKeySet,
            DragPositioner, EditGate, EditOrigin, EditableField, EventPropagation,
            EventSubscriptions, KeyGrid, KeypadConfig, KeypadInputEvent, KeypadKey,
            ListenerKind, OutsideInteractionWatcher, OverlayPosition,
            OverlayPositionStore, OverlayVisibility, PixelPoint, PixelRect, PixelSize,
            PositionStorage, SelectionTracker, SubscriptionId, ValidationGrammar,
            Viewport, VisibilityEvent};

#[derive(Debug)]
pub struct KeypadController<F: EditableField, S: PositionStorage> {
    field: F,
    position_store: OverlayPositionStore<S>,
    grammar: ValidationGrammar,
    disabled_keys: DisabledKeySet,
    /// Committed value. What the field shows once the host has rendered.
    value: String,
    /// Caret after the last committed edit.
    caret: usize,
    visibility: OverlayVisibility,
    /// Loaded from storage each time the overlay is shown, then moved by drags.
    maybe_anchor: Option<OverlayPosition>,
    viewport: Viewport,
    overlay_size: PixelSize,
    outside_watcher: OutsideInteractionWatcher,
    subscriptions: EventSubscriptions,
    maybe_pointer_move_id: Option<SubscriptionId>,
    maybe_outside_click_id: Option<SubscriptionId>,
    deferred_tasks: DeferredTasks,
}

impl<F: EditableField, S: PositionStorage> KeypadController<F, S> {
    /// `initial_value` is used as is. It is not run through the grammar.
    pub fn new(
        field: F,
        storage: S,
        config: KeypadConfig,
        initial_value: impl Into<String>,
    ) -> Self {
        let value: String = initial_value.into();
        let caret = value.chars().count();
        let disabled_keys = config.disabled_keys();
        let KeypadConfig {
            storage_key,
            default_position,
            bounds,
            overlay_size,
            viewport,
            ..
        } = config;

        Self {
            field,
            position_store: OverlayPositionStore::new(
                storage,
                storage_key,
                default_position,
                bounds,
            ),
            grammar: ValidationGrammar::default(),
            disabled_keys,
            value,
            caret,
            visibility: OverlayVisibility::default(),
            maybe_anchor: None,
            viewport,
            overlay_size,
            outside_watcher: OutsideInteractionWatcher::default(),
            subscriptions: EventSubscriptions::default(),
            maybe_pointer_move_id: None,
            maybe_outside_click_id: None,
            deferred_tasks: DeferredTasks::default(),
        }
    }

    /// Starts watching for outside interactions. Calling it again is a no-op.
    pub fn mount(&mut self) {
        if self.maybe_outside_click_id.is_none() {
            self.maybe_outside_click_id =
                Some(self.subscriptions.subscribe(ListenerKind::OutsideClick));
        }
    }

    /// Hides the overlay and drops every listener the controller holds. The value and
    /// the last anchor are kept, and the next focus after [`Self::mount`] shows the
    /// overlay again.
    pub fn unmount(&mut self) {
        self.set_visibility(OverlayVisibility::Hidden);
        if let Some(id) = self.maybe_outside_click_id.take() {
            self.subscriptions.unsubscribe(id);
        }
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool { self.maybe_outside_click_id.is_some() }

    /// Routes one input event. See [`EventPropagation`] for what the host does next.
    pub fn handle_event(&mut self, event: KeypadInputEvent) -> EventPropagation {
        match event {
            KeypadInputEvent::FieldFocus => self.on_field_focus(),
            KeypadInputEvent::FieldInput { origin, value } => self.on_field_input(origin, value),
            KeypadInputEvent::KeyPress { key } => self.on_key_press(key),
            KeypadInputEvent::TouchMove { contacts } => self.on_touch_move(&contacts),
            KeypadInputEvent::PointerDown { target } => self.on_pointer_down(target),
        }
    }

    /// Second phase of an edit. Call it once the host has rendered. It shows the
    /// committed value in the field and only then runs the queued caret restore, so the
    /// caret never targets the old text.
    pub fn commit_render(&mut self) {
        self.field.render_value(&self.value);
        for task in self.deferred_tasks.drain() {
            match task {
                DeferredTask::RestoreCaret { caret } => {
                    self.field.set_selection_range(caret, caret);
                    self.field.focus();
                }
            }
        }
    }

    pub fn on_field_focus(&mut self) -> EventPropagation {
        if self.visibility.is_visible() {
            return EventPropagation::Consumed;
        }
        self.set_visibility(self.visibility.next(VisibilityEvent::FieldFocus));
        EventPropagation::ConsumedRender
    }

    /// Applies an edit made inside the field. Paste is ignored and cut empties the
    /// field, everything else has to pass the grammar.
    pub fn on_field_input(&mut self, origin: EditOrigin, candidate: String) -> EventPropagation {
        match origin.gate() {
            EditGate::Ignore => {
                DEBUG_KEYPAD_MOD.then(|| {
                    // % is Display, ? is Debug.
                    tracing::debug!(
                        message = "⌨️ Ignoring field input",
                        origin = %origin,
                        candidate = %candidate
                    );
                });
                EventPropagation::Consumed
            }
            EditGate::ForceEmpty => {
                self.value.clear();
                self.caret = 0;
                self.field.on_change(&ChangeEvent::new(""));
                EventPropagation::ConsumedRender
            }
            EditGate::Validate => {
                if !self.grammar.accepts(&candidate) {
                    return self.reject(origin, &candidate);
                }
                let selection = self.field.selection_range();
                self.caret = selection.end.min(candidate.chars().count());
                self.commit_value(candidate);
                EventPropagation::ConsumedRender
            }
        }
    }

    /// Keys are only pressable while the overlay is on screen. Disabled keys do nothing.
    pub fn on_key_press(&mut self, key: KeypadKey) -> EventPropagation {
        if !self.visibility.is_visible() {
            return EventPropagation::Propagate;
        }
        if self.disabled_keys.contains(key) {
            return EventPropagation::Consumed;
        }

        let selection = self.field.selection_range();
        let edit = SelectionTracker::apply_key(&self.value, selection, key);

        if !self.grammar.accepts(&edit.new_value) {
            return self.reject(EditOrigin::Keypad, &edit.new_value);
        }

        DEBUG_KEYPAD_MOD.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "🔢 Key press",
                key = %key,
                selection = ?selection,
                new_value = %edit.new_value,
                new_caret = %edit.new_caret
            );
        });

        self.caret = edit.new_caret;
        self.commit_value(edit.new_value);
        self.deferred_tasks.push(DeferredTask::RestoreCaret {
            caret: edit.new_caret,
        });
        EventPropagation::ConsumedRender
    }

    /// Drag samples only count while the pointer move listener is held, ie: while the
    /// overlay is visible and the controller is mounted.
    pub fn on_touch_move(&mut self, contacts: &[PixelPoint]) -> EventPropagation {
        if self.maybe_pointer_move_id.is_none() {
            return EventPropagation::Propagate;
        }
        match DragPositioner::on_sample(
            contacts,
            self.overlay_size,
            self.viewport,
            &mut self.position_store,
        ) {
            Some(anchor) => {
                self.maybe_anchor = Some(anchor);
                EventPropagation::ConsumedRender
            }
            None => EventPropagation::Consumed,
        }
    }

    /// Hides the overlay when `target` is outside the field and the overlay. The event
    /// always goes on to the host's own target, so this only returns
    /// [`EventPropagation::ConsumedRender`] when the overlay was hidden.
    pub fn on_pointer_down(&mut self, target: PixelPoint) -> EventPropagation {
        if self.maybe_outside_click_id.is_none() {
            return EventPropagation::Propagate;
        }
        let next = self.outside_watcher.on_pointer_down(
            target,
            self.overlay_bounds(),
            self.visibility,
        );
        if next == self.visibility {
            return EventPropagation::Propagate;
        }
        self.set_visibility(next);
        EventPropagation::ConsumedRender
    }

    /// Forgets the stored anchor. A visible overlay jumps back to the default anchor, a
    /// hidden one picks it up on the next show.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored record can't be removed.
    pub fn reset_position(&mut self) -> miette::Result<()> {
        let default_position = self.position_store.reset()?;
        if self.visibility.is_visible() {
            self.maybe_anchor = Some(default_position);
        }
        Ok(())
    }

    pub fn set_viewport(&mut self, viewport: Viewport) { self.viewport = viewport; }

    pub fn set_overlay_size(&mut self, overlay_size: PixelSize) {
        self.overlay_size = overlay_size;
    }

    pub fn set_field_bounds(&mut self, field_bounds: PixelRect) {
        self.outside_watcher.set_field_bounds(field_bounds);
    }

    #[must_use]
    pub fn value(&self) -> &str { &self.value }

    #[must_use]
    pub fn caret(&self) -> usize { self.caret }

    #[must_use]
    pub fn visibility(&self) -> OverlayVisibility { self.visibility }

    /// Where the overlay is anchored. `None` until it has been shown once.
    #[must_use]
    pub fn overlay_anchor(&self) -> Option<OverlayPosition> { self.maybe_anchor }

    /// On screen rectangle of the overlay, while it is visible.
    #[must_use]
    pub fn overlay_bounds(&self) -> Option<PixelRect> {
        if !self.visibility.is_visible() {
            return None;
        }
        self.maybe_anchor
            .map(|anchor| anchor.to_rect(self.overlay_size, self.viewport))
    }

    /// What to draw. `None` while the overlay is hidden.
    #[must_use]
    pub fn key_grid(&self) -> Option<KeyGrid> {
        self.visibility
            .is_visible()
            .then(|| KeyGrid::new(&self.disabled_keys))
    }

    #[must_use]
    pub fn subscriptions(&self) -> &EventSubscriptions { &self.subscriptions }

    #[must_use]
    pub fn has_pending_tasks(&self) -> bool { !self.deferred_tasks.is_empty() }

    #[must_use]
    pub fn field(&self) -> &F { &self.field }

    pub fn field_mut(&mut self) -> &mut F { &mut self.field }

    #[must_use]
    pub fn position_storage(&self) -> &S { self.position_store.storage() }
}

impl<F: EditableField, S: PositionStorage> KeypadController<F, S> {
    fn commit_value(&mut self, new_value: String) {
        self.value = new_value;
        self.field.on_change(&ChangeEvent::new(self.value.as_str()));
    }

    fn reject(&self, origin: EditOrigin, candidate: &str) -> EventPropagation {
        DEBUG_KEYPAD_MOD.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "🚫 Rejected edit",
                origin = %origin,
                candidate = %candidate,
                value = %self.value
            );
        });
        EventPropagation::Consumed
    }

    /// Entering Visible loads the anchor and takes the pointer move listener. Leaving it
    /// gives the listener back.
    fn set_visibility(&mut self, next: OverlayVisibility) {
        if next == self.visibility {
            return;
        }

        DEBUG_KEYPAD_MOD.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "👀 Overlay visibility",
                from = %self.visibility,
                to = %next
            );
        });

        self.visibility = next;
        match next {
            OverlayVisibility::Visible => {
                self.maybe_anchor = Some(self.position_store.load(self.viewport));
                if self.maybe_pointer_move_id.is_none() {
                    self.maybe_pointer_move_id =
                        Some(self.subscriptions.subscribe(ListenerKind::PointerMove));
                }
            }
            OverlayVisibility::Hidden => {
                if let Some(id) = self.maybe_pointer_move_id.take() {
                    self.subscriptions.unsubscribe(id);
                }
            }
        }
    }
}
