use bitflags::bitflags;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

bitflags! {
    /// What the host has to redo before the next frame is presented.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Update: u8 {
        /// Repaint the scene.
        const DRAW = 0b001;
        /// Measurements are stale; re-run layout (and paint).
        const LAYOUT = 0b010;
        /// Re-run everything, regardless of what changed.
        const FORCE = 0b100;
    }
}

/// Collects [Update] requests between frames.
///
/// Requests are fire-and-forget: inserting only sets flags, the host decides when
/// to act on them. Several requests before the next frame collapse into a single
/// layout and/or paint pass.
#[derive(Clone, Debug, Default)]
pub struct UpdateManager {
    update: Arc<AtomicU8>,
}

impl UpdateManager {
    /// Create a new manager with no pending updates.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request the given update(s).
    pub fn insert(&self, update: Update) {
        if !update.is_empty() {
            log::debug!("Update requested: {:?}", update);
        }
        self.update.fetch_or(update.bits(), Ordering::Relaxed);
    }

    /// The currently pending updates.
    pub fn get(&self) -> Update {
        Update::from_bits_truncate(self.update.load(Ordering::Relaxed))
    }

    /// Return and clear the pending updates.
    pub fn take(&self) -> Update {
        Update::from_bits_truncate(self.update.swap(0, Ordering::Relaxed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requests_coalesce() {
        let manager = UpdateManager::new();
        manager.insert(Update::LAYOUT | Update::DRAW);
        manager.insert(Update::DRAW);
        manager.insert(Update::LAYOUT);

        assert_eq!(manager.take(), Update::LAYOUT | Update::DRAW);
        assert!(manager.get().is_empty());
    }

    #[test]
    fn test_clones_share_state() {
        let manager = UpdateManager::new();
        let clone = manager.clone();
        clone.insert(Update::DRAW);
        assert!(manager.get().contains(Update::DRAW));

        assert_eq!(manager.take(), Update::DRAW);
        assert!(clone.get().is_empty());
    }
}
