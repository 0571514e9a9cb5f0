//! Systems that drive the [`StateStack`].
//!
//! Both are exclusive: the stack is removed from the world for the duration
//! of the call so that states can receive `&mut World`, then put back.
use bevy_ecs::message::Messages;
use bevy_ecs::prelude::*;
use log::trace;

use crate::events::input::InputEvent;
use crate::resources::worldtime::WorldTime;
use crate::states::stack::StateStack;

/// Offer every pending [`InputEvent`] to the top state, oldest first.
pub fn dispatch_input(world: &mut World) {
    let events: Vec<InputEvent> = match world.get_resource_mut::<Messages<InputEvent>>() {
        Some(mut messages) => messages.drain().collect(),
        None => return,
    };
    if events.is_empty() {
        return;
    }
    let Some(mut stack) = world.remove_non_send_resource::<StateStack>() else {
        return;
    };
    for event in &events {
        if !stack.handle_input(world, event) {
            trace!("dispatch_input: {:?} not handled", event);
        }
    }
    world.insert_non_send_resource(stack);
}

/// Update the top state with the scaled frame delta and apply its transition.
pub fn update_states(world: &mut World) {
    let dt = world
        .get_resource::<WorldTime>()
        .map(|t| t.delta)
        .unwrap_or(0.0);
    let Some(mut stack) = world.remove_non_send_resource::<StateStack>() else {
        return;
    };
    stack.update(world, dt);
    world.insert_non_send_resource(stack);
}

/// True when no state is left to run or a state asked to quit.
pub fn should_quit(world: &World) -> bool {
    world
        .get_non_send_resource::<StateStack>()
        .is_none_or(|stack| stack.should_quit() || stack.is_empty())
}
