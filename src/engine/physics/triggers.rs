use rapier2d::prelude::*;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

/// A sensor overlap transition reported by the physics step
#[derive(Debug, Clone, Copy)]
pub enum SensorEvent {
    /// Two colliders started overlapping
    Started(ColliderHandle, ColliderHandle),

    /// Two colliders stopped overlapping
    Stopped(ColliderHandle, ColliderHandle),
}

/// Trigger events delivered to the movement controller between frames.
/// No payload beyond the occurrence itself is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerEvent {
    LadderEntered,
    LadderExited,
}

/// Registry of trigger volumes and their meaning.
///
/// The physics step only reports raw collider pairs; this translates pairs
/// involving the player and a registered ladder sensor into game events.
#[derive(Debug, Default)]
pub struct TriggerVolumes {
    ladders: HashSet<ColliderHandle>,
}

impl TriggerVolumes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a sensor collider as a ladder volume
    pub fn register_ladder(&mut self, handle: ColliderHandle) {
        self.ladders.insert(handle);
    }

    /// Check whether a collider is a registered ladder volume
    pub fn is_ladder(&self, handle: ColliderHandle) -> bool {
        self.ladders.contains(&handle)
    }

    /// Translate raw sensor events into trigger events for the player
    pub fn interpret(
        &self,
        events: &[SensorEvent],
        player: ColliderHandle,
    ) -> Vec<TriggerEvent> {
        let mut out = Vec::new();
        for event in events {
            match *event {
                SensorEvent::Started(a, b) => {
                    if self.pair_hits_ladder(a, b, player) {
                        out.push(TriggerEvent::LadderEntered);
                    }
                }
                SensorEvent::Stopped(a, b) => {
                    if self.pair_hits_ladder(a, b, player) {
                        out.push(TriggerEvent::LadderExited);
                    }
                }
            }
        }
        out
    }

    fn pair_hits_ladder(&self, a: ColliderHandle, b: ColliderHandle, player: ColliderHandle) -> bool {
        (a == player && self.is_ladder(b)) || (b == player && self.is_ladder(a))
    }
}

/// Queue collecting sensor events during the physics step.
///
/// rapier's `EventHandler` takes `&self`, so the buffer sits behind a mutex
/// even though the whole game is single-threaded.
pub struct SensorEventQueue {
    events: Arc<Mutex<Vec<SensorEvent>>>,
}

impl SensorEventQueue {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::with_capacity(8))),
        }
    }

    /// Clear all events (call at the start of each physics step)
    pub fn clear(&self) {
        if let Ok(mut events) = self.events.lock() {
            events.clear();
        }
    }

    /// Get this frame's sensor events
    pub fn events(&self) -> Vec<SensorEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    fn push(&self, event: SensorEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

impl Default for SensorEventQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler for SensorEventQueue {
    fn handle_collision_event(
        &self,
        _bodies: &RigidBodySet,
        _colliders: &ColliderSet,
        event: CollisionEvent,
        _contact_pair: Option<&ContactPair>,
    ) {
        match event {
            CollisionEvent::Started(h1, h2, _flags) => {
                self.push(SensorEvent::Started(h1, h2));
            }
            CollisionEvent::Stopped(h1, h2, _flags) => {
                self.push(SensorEvent::Stopped(h1, h2));
            }
        }
    }

    fn handle_contact_force_event(
        &self,
        _dt: Real,
        _bodies: &RigidBodySet,
        _colliders: &ColliderSet,
        _contact_pair: &ContactPair,
        _total_force_magnitude: Real,
    ) {
        // Trigger volumes only care about overlap transitions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handle(i: u32) -> ColliderHandle {
        ColliderHandle::from_raw_parts(i, 0)
    }

    #[test]
    fn test_ladder_registration() {
        let mut volumes = TriggerVolumes::new();
        volumes.register_ladder(handle(1));
        assert!(volumes.is_ladder(handle(1)));
        assert!(!volumes.is_ladder(handle(2)));
    }

    #[test]
    fn test_interpret_enter_and_exit() {
        let mut volumes = TriggerVolumes::new();
        let ladder = handle(1);
        let player = handle(2);
        volumes.register_ladder(ladder);

        let events = [
            SensorEvent::Started(ladder, player),
            SensorEvent::Stopped(player, ladder),
        ];
        let out = volumes.interpret(&events, player);
        assert_eq!(
            out,
            vec![TriggerEvent::LadderEntered, TriggerEvent::LadderExited]
        );
    }

    #[test]
    fn test_interpret_ignores_unrelated_pairs() {
        let mut volumes = TriggerVolumes::new();
        let ladder = handle(1);
        let player = handle(2);
        let other = handle(3);
        volumes.register_ladder(ladder);

        // Neither a non-ladder pair nor a non-player pair produces events
        let events = [
            SensorEvent::Started(other, player),
            SensorEvent::Started(ladder, other),
        ];
        assert!(volumes.interpret(&events, player).is_empty());
    }

    #[test]
    fn test_queue_collects_and_clears() {
        let queue = SensorEventQueue::new();
        queue.push(SensorEvent::Started(handle(1), handle(2)));
        assert_eq!(queue.events().len(), 1);
        queue.clear();
        assert!(queue.events().is_empty());
    }
}
