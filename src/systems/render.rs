//! Rendering.
//!
//! [`render_system`] opens a raylib drawing scope and runs two passes:
//! world sprites sorted by [`ZIndex`], then the GUI canvas of the top game
//! state. The raylib handle and thread are taken out of the world for the
//! duration of the frame and put back afterwards.
use bevy_ecs::prelude::*;
use log::warn;
use raylib::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::gui::draw::{draw_canvas, resolve_font};
use crate::gui::skin::SKIN_TEXTURE_KEY;
use crate::resources::fontstore::FontStore;
use crate::resources::texturestore::TextureStore;
use crate::states::stack::StateStack;

const CLEAR_COLOR: Color = Color::DARKGRAY;

pub fn render_system(world: &mut World) {
    let Some(mut rl) = world.remove_non_send_resource::<RaylibHandle>() else {
        warn!("render_system: no RaylibHandle in world");
        return;
    };
    let Some(thread) = world.remove_non_send_resource::<RaylibThread>() else {
        warn!("render_system: no RaylibThread in world");
        world.insert_non_send_resource(rl);
        return;
    };

    {
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(CLEAR_COLOR);
        render_pass(world, &mut d);
        render_gui(world, &mut d);
    }

    world.insert_non_send_resource(thread);
    world.insert_non_send_resource(rl);
}

/// Draw every sprite with a position, lowest z first.
///
/// `MapPosition` is the pivot; `Sprite::origin` is the pivot inside the frame.
pub fn render_pass<D: RaylibDraw>(world: &mut World, d: &mut D) {
    let mut to_draw: Vec<(Sprite, MapPosition, ZIndex)> = {
        let mut q = world.query::<(&Sprite, &MapPosition, Option<&ZIndex>)>();
        q.iter(world)
            .map(|(s, p, z)| (s.clone(), *p, z.copied().unwrap_or_default()))
            .collect()
    };
    to_draw.sort_by_key(|(_, _, z)| *z);

    let Some(textures) = world.get_resource::<TextureStore>() else {
        return;
    };

    for (sprite, pos, _z) in to_draw.iter() {
        let Some(tex) = textures.get(&sprite.tex_key) else {
            continue;
        };
        let mut src = sprite.source_rect();
        // Negative source extents make raylib mirror the frame
        if sprite.flip_h {
            src.width = -src.width;
        }
        if sprite.flip_v {
            src.height = -src.height;
        }
        let dest = Rectangle {
            x: pos.pos.x,
            y: pos.pos.y,
            width: sprite.width,
            height: sprite.height,
        };
        d.draw_texture_pro(tex, src, dest, sprite.origin, 0.0, Color::WHITE);
    }
}

/// Draw the canvas of the top state, if it has one.
pub fn render_gui<D: RaylibDraw>(world: &World, d: &mut D) {
    let Some(stack) = world.get_non_send_resource::<StateStack>() else {
        return;
    };
    let Some(canvas) = stack.top().and_then(|state| state.canvas()) else {
        return;
    };
    let skin_texture = world
        .get_resource::<TextureStore>()
        .and_then(|textures| textures.get(SKIN_TEXTURE_KEY));
    let font = resolve_font(canvas.skin(), world.get_non_send_resource::<FontStore>());
    draw_canvas(d, canvas, skin_texture, font);
}
