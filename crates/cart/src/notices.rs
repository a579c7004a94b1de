//! Blocking notices for the guest (empty cart, checkout placeholder).

use std::collections::VecDeque;

use bevy::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartNotice {
    pub text: String,
}

/// Notices waiting to be acknowledged. The UI shows the front one modally.
#[derive(Resource, Debug, Default)]
pub struct PendingNotices {
    queue: VecDeque<CartNotice>,
}

impl PendingNotices {
    pub fn push(&mut self, text: impl Into<String>) {
        self.queue.push_back(CartNotice { text: text.into() });
    }

    pub fn front(&self) -> Option<&CartNotice> {
        self.queue.front()
    }

    /// Acknowledges the notice currently shown.
    pub fn dismiss(&mut self) -> Option<CartNotice> {
        self.queue.pop_front()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
