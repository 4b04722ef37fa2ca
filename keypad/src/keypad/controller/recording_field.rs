// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ChangeEvent, EditableField, SelectionRange};

/// In memory [`EditableField`] that records every call. Rendering moves the caret to the
/// end of the text, as a real text input does when its value is replaced.
///
/// The replay runner drives one of these, and hosts can use it to check their event
/// wiring without a widget.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecordingField {
    pub rendered_value: String,
    pub selection: SelectionRange,
    pub change_events: Vec<ChangeEvent>,
    pub render_count: usize,
    /// Carets passed to [`EditableField::set_selection_range`], in order.
    pub caret_restores: Vec<usize>,
    /// Restores that pointed past the end of the rendered text. These happen when the
    /// caret is restored before the new value has been rendered.
    pub stale_caret_restores: Vec<usize>,
    pub focus_count: usize,
}

impl RecordingField {
    /// Field showing `value` with the caret at the end.
    #[must_use]
    pub fn with_value(value: &str) -> Self {
        Self {
            rendered_value: value.to_string(),
            selection: SelectionRange::caret(value.chars().count()),
            ..Default::default()
        }
    }

    /// Moves the caret, as a tap inside the field would.
    pub fn place_caret(&mut self, caret: usize) { self.selection = SelectionRange::caret(caret); }

    pub fn select(&mut self, start: usize, end: usize) {
        self.selection = SelectionRange::new(start, end);
    }

    /// Value of the last change event.
    #[must_use]
    pub fn last_change(&self) -> Option<&str> {
        self.change_events
            .last()
            .map(|it| it.target.value.as_str())
    }

    /// Values of every change event, oldest first.
    #[must_use]
    pub fn change_values(&self) -> Vec<String> {
        self.change_events
            .iter()
            .map(|it| it.target.value.clone())
            .collect()
    }
}

impl EditableField for RecordingField {
    fn selection_range(&self) -> SelectionRange { self.selection }

    fn on_change(&mut self, event: &ChangeEvent) { self.change_events.push(event.clone()); }

    fn render_value(&mut self, value: &str) {
        value.clone_into(&mut self.rendered_value);
        self.selection = SelectionRange::caret(value.chars().count());
        self.render_count += 1;
    }

    fn set_selection_range(&mut self, start: usize, end: usize) {
        if end > self.rendered_value.chars().count() {
            self.stale_caret_restores.push(end);
        }
        self.caret_restores.push(start);
        self.selection = SelectionRange::new(start, end);
    }

    fn focus(&mut self) { self.focus_count += 1; }
}
