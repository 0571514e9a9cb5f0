//! Animation system.
//!
//! [`animated_sprite_system`] advances every [`AnimatedSprite`] by the
//! scaled frame delta and mirrors the visible frame into the entity's
//! [`Sprite`], if it has one.
//!
//! # Related
//!
//! - [`crate::components::animatedsprite::AnimatedSprite`] – playback state
//! - [`crate::resources::animationstore::AnimationStore`] – animation definitions
//! - [`crate::events::animation::AnimationFinishedEvent`] – one-shot completion

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::animatedsprite::{AnimatedSprite, UpdateOutcome};
use crate::components::sprite::Sprite;
use crate::events::animation::AnimationFinishedEvent;
use crate::resources::worldtime::WorldTime;

/// Advance animation playback and update the sprite frame.
///
/// Contract
/// - Reads [`WorldTime::delta`] (seconds) and feeds it in milliseconds.
/// - Copies the current source rectangle into [`Sprite`] when a frame changes
///   or the sprite still shows a different region.
/// - Triggers [`AnimationFinishedEvent`] when a `Once` animation lands on its
///   last frame.
pub fn animated_sprite_system(
    mut query: Query<(Entity, &mut AnimatedSprite, Option<&mut Sprite>)>,
    time: Res<WorldTime>,
    mut commands: Commands,
) {
    let elapsed_ms = time.delta_millis();
    for (entity, mut animated, maybe_sprite) in query.iter_mut() {
        let outcome = animated.update(elapsed_ms);

        // Without a selected animation there is no frame to show yet
        if let (Some(mut sprite), Some(_)) = (maybe_sprite, animated.current_name()) {
            let rect = animated.source_rect();
            if sprite.source_rect() != rect {
                sprite.set_source_rect(rect);
            }
        }

        if outcome == UpdateOutcome::Finished {
            let animation = animated.current_name().unwrap_or_default().to_string();
            debug!("Entity {:?} finished animation '{}'", entity, animation);
            commands.trigger(AnimationFinishedEvent { entity, animation });
        }
    }
}
