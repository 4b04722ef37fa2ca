// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::collections::VecDeque;

/// Work that has to wait until the field has rendered the committed value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeferredTask {
    /// Put the caret at this character offset, then focus the field.
    RestoreCaret { caret: usize },
}

/// Queue filled while an edit is committed and drained by
/// [`crate::KeypadController::commit_render`] after the field has rendered.
///
/// Only the newest caret restore is kept. Two edits can land before one render, and an
/// older caret could point past the end of the newer, shorter value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeferredTasks {
    queue: VecDeque<DeferredTask>,
}

impl DeferredTasks {
    pub fn push(&mut self, task: DeferredTask) {
        match task {
            DeferredTask::RestoreCaret { .. } => self
                .queue
                .retain(|it| !matches!(it, DeferredTask::RestoreCaret { .. })),
        }
        self.queue.push_back(task);
    }

    /// Removes and yields all the queued tasks, oldest first.
    pub fn drain(&mut self) -> impl Iterator<Item = DeferredTask> + '_ { self.queue.drain(..) }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.queue.is_empty() }

    #[must_use]
    pub fn len(&self) -> usize { self.queue.len() }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_newest_caret_restore_wins() {
        let mut tasks = DeferredTasks::default();
        tasks.push(DeferredTask::RestoreCaret { caret: 3 });
        tasks.push(DeferredTask::RestoreCaret { caret: 0 });
        assert_eq!(tasks.len(), 1);

        let drained: Vec<DeferredTask> = tasks.drain().collect();
        assert_eq!(drained, vec![DeferredTask::RestoreCaret { caret: 0 }]);
        assert!(tasks.is_empty());
    }
}
