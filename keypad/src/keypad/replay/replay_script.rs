// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Runs a recorded sequence of input events against a [`KeypadController`] and reports
//! where it ended up. This backs the `keypad_replay` binary, and makes bug reports
//! reproducible without a UI.
//!
//! A script is JSON:
//!
//! ```json
//! {
//!   "initialValue": "12",
//!   "viewport": {"width": 800.0, "height": 400.0},
//!   "config": {"disableKeyBoardValue": ["-"]},
//!   "steps": [
//!     {"type": "fieldFocus"},
//!     {"select": {"start": 1, "end": 1}},
//!     {"type": "keyPress", "key": "backSpace"}
//!   ]
//! }
//! ```
//!
//! A step is either a [`KeypadInputEvent`] or a `select`, which moves the field's caret
//! the way a tap inside it would. Whenever the controller asks for a render, the field
//! is rendered and [`KeypadController::commit_render`] runs before the next step.

use std::path::Path;

use miette::{Context, IntoDiagnostic};
use serde::{Deserialize, Serialize};

use crate::{DEBUG_KEYPAD_MOD, EventPropagation, KeypadConfig, KeypadController,
            KeypadInputEvent, OverlayPosition, OverlayVisibility, PixelRect,
            PositionStorage, RecordingField, SelectionRange, Viewport};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReplayScript {
    pub initial_value: String,
    pub config: KeypadConfig,
    #[serde(rename = "viewport")]
    pub maybe_viewport: Option<Viewport>,
    #[serde(rename = "fieldBounds")]
    pub maybe_field_bounds: Option<PixelRect>,
    pub steps: Vec<ReplayStep>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReplayStep {
    Select { select: SelectionRange },
    Event(KeypadInputEvent),
}

/// Final state after a script has run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplayReport {
    pub value: String,
    pub caret: usize,
    pub visibility: OverlayVisibility,
    #[serde(rename = "overlayAnchor")]
    pub maybe_overlay_anchor: Option<OverlayPosition>,
    /// Values passed to the field's change notification, in order.
    pub change_values: Vec<String>,
    pub rendered_value: String,
}

impl ReplayScript {
    /// # Errors
    ///
    /// Returns an error if the file can't be read or is not a valid script.
    pub fn try_read(path: &Path) -> miette::Result<Self> {
        let path_str = path.display().to_string();
        let json = std::fs::read_to_string(path)
            .into_diagnostic()
            .wrap_err(ReplayErrorCouldNot::ReadScriptFile {
                path: path_str.clone(),
            })?;
        serde_json::from_str(&json)
            .into_diagnostic()
            .wrap_err(ReplayErrorCouldNot::ParseScript { path: path_str })
    }

    /// # Errors
    ///
    /// Returns an error if `json` is not a valid script.
    pub fn try_parse(json: &str) -> miette::Result<Self> {
        serde_json::from_str(json)
            .into_diagnostic()
            .wrap_err(ReplayErrorCouldNot::ParseScript {
                path: "<inline>".to_string(),
            })
    }

    /// Runs every step against a fresh controller that keeps its anchor in `storage`.
    /// The report is taken before the controller is unmounted.
    pub fn run<S: PositionStorage>(self, storage: S) -> ReplayReport {
        let ReplayScript {
            initial_value,
            config,
            maybe_viewport,
            maybe_field_bounds,
            steps,
        } = self;

        let field = RecordingField::with_value(&initial_value);
        let mut controller = KeypadController::new(field, storage, config, initial_value);
        if let Some(viewport) = maybe_viewport {
            controller.set_viewport(viewport);
        }
        if let Some(field_bounds) = maybe_field_bounds {
            controller.set_field_bounds(field_bounds);
        }
        controller.mount();

        for (index, step) in steps.into_iter().enumerate() {
            let propagation = match step {
                ReplayStep::Select { select } => {
                    controller.field_mut().select(select.start, select.end);
                    continue;
                }
                ReplayStep::Event(event) => controller.handle_event(event),
            };

            DEBUG_KEYPAD_MOD.then(|| {
                // % is Display, ? is Debug.
                tracing::debug!(
                    message = "▶️ Replay step",
                    index = %index,
                    propagation = ?propagation,
                    value = %controller.value()
                );
            });

            if propagation == EventPropagation::ConsumedRender {
                controller.commit_render();
            }
        }

        let report = ReplayReport {
            value: controller.value().to_string(),
            caret: controller.caret(),
            visibility: controller.visibility(),
            maybe_overlay_anchor: controller.overlay_anchor(),
            change_values: controller.field().change_values(),
            rendered_value: controller.field().rendered_value.clone(),
        };
        controller.unmount();
        report
    }
}

impl ReplayReport {
    /// # Errors
    ///
    /// Returns an error if the report can't be serialized.
    pub fn try_to_json(&self) -> miette::Result<String> {
        serde_json::to_string_pretty(self)
            .into_diagnostic()
            .wrap_err(ReplayErrorCouldNot::SerializeReport)
    }
}

#[derive(thiserror::Error, Debug, miette::Diagnostic)]
pub enum ReplayErrorCouldNot {
    #[error("🎬 Could not read replay script from '{path}'")]
    ReadScriptFile { path: String },

    #[error("🎬 Could not parse replay script '{path}'")]
    ParseScript { path: String },

    #[error("🎬 Could not serialize replay report")]
    SerializeReport,

    #[error("🎬 Could not open position store")]
    OpenPositionStore,

    #[error("🎬 Could not reset the stored position")]
    ResetPosition,
}
