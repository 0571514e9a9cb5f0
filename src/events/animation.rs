//! Animation events.

use bevy_ecs::prelude::*;

/// Triggered when a `Once` animation reaches its last frame.
///
/// Emitted by [`animated_sprite_system`](crate::systems::animation::animated_sprite_system)
/// a single time per playback.
#[derive(Event, Debug, Clone)]
pub struct AnimationFinishedEvent {
    pub entity: Entity,
    pub animation: String,
}
