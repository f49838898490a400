//! Input plumbing
//!
//! Raw events arrive whenever the host fires them and are fanned out
//! through [`Signal`]s. Controllers subscribe at construction, keep only
//! the latest value, and are polled once per frame by their owning
//! object. Intermediate samples between two frames are dropped.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use glam::Vec2;

use super::object::Bounds;

/// Keys the game distinguishes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    Other(String),
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_dom(key: &str) -> Self {
        match key {
            "ArrowUp" => Key::ArrowUp,
            "ArrowDown" => Key::ArrowDown,
            other => Key::Other(other.to_string()),
        }
    }
}

/// Ordered list of listeners for one event stream
pub struct Signal<T> {
    listeners: Vec<Box<dyn FnMut(&T)>>,
}

impl<T> Default for Signal<T> {
    fn default() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }
}

impl<T> Signal<T> {
    pub fn subscribe(&mut self, listener: impl FnMut(&T) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn emit(&mut self, value: T) {
        for listener in &mut self.listeners {
            listener(&value);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl<T> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// The two event streams the game consumes
#[derive(Debug, Default)]
pub struct InputEvents {
    /// Pointer position in canvas-local pixels
    pub pointer_move: Signal<Vec2>,
    pub key_down: Signal<Key>,
}

impl InputEvents {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Capability an object polls each frame to mutate its own bounds
pub trait InputController {
    /// Last pointer coordinate this controller observed
    fn pointer(&self) -> Vec2;

    /// Apply stored input to the owning object. No-op unless overridden.
    fn update(&mut self, _target: &mut Bounds) {}
}

/// Passive controller: remembers where the pointer last was, moves nothing
#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    last: Rc<Cell<Vec2>>,
}

impl PointerTracker {
    pub fn new(events: &mut InputEvents) -> Self {
        let tracker = Self::default();
        let last = tracker.last.clone();
        events.pointer_move.subscribe(move |pos| last.set(*pos));
        tracker
    }
}

impl InputController for PointerTracker {
    fn pointer(&self) -> Vec2 {
        self.last.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_fans_out_in_subscription_order() {
        let seen = Rc::new(std::cell::RefCell::new(Vec::new()));
        let mut signal = Signal::<u32>::default();
        for tag in 0..3 {
            let seen = seen.clone();
            signal.subscribe(move |v| seen.borrow_mut().push((tag, *v)));
        }
        signal.emit(7);
        assert_eq!(signal.listener_count(), 3);
        assert_eq!(*seen.borrow(), vec![(0, 7), (1, 7), (2, 7)]);
    }

    #[test]
    fn test_tracker_keeps_last_value_only() {
        let mut events = InputEvents::new();
        let mut tracker = PointerTracker::new(&mut events);
        events.pointer_move.emit(Vec2::new(1.0, 2.0));
        events.pointer_move.emit(Vec2::new(30.0, 40.0));
        assert_eq!(tracker.pointer(), Vec2::new(30.0, 40.0));

        // The base controller never touches its target
        let mut target = Bounds::new(5.0, 5.0, 1.0, 1.0);
        tracker.update(&mut target);
        assert_eq!(target, Bounds::new(5.0, 5.0, 1.0, 1.0));
    }

    #[test]
    fn test_key_from_dom() {
        assert_eq!(Key::from_dom("ArrowUp"), Key::ArrowUp);
        assert_eq!(Key::from_dom("ArrowDown"), Key::ArrowDown);
        assert_eq!(Key::from_dom("a"), Key::Other("a".into()));
    }
}
