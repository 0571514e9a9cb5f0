//! Animation system integration tests: AnimatedSprite + Sprite driven by WorldTime.

use bevy_ecs::prelude::*;

use lanternengine::components::animatedsprite::AnimatedSprite;
use lanternengine::components::animation::AnimKind;
use lanternengine::components::sprite::Sprite;
use lanternengine::events::animation::AnimationFinishedEvent;
use lanternengine::resources::animationstore::AnimationStore;
use lanternengine::resources::worldtime::WorldTime;
use lanternengine::systems::animation::animated_sprite_system;
use lanternengine::systems::time::update_world_time;

const EPSILON: f32 = 1e-3;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

#[derive(Resource, Default)]
struct FinishedLog(Vec<(Entity, String)>);

fn make_world() -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.init_resource::<FinishedLog>();
    world.add_observer(
        |trigger: On<AnimationFinishedEvent>, mut log: ResMut<FinishedLog>| {
            let event = trigger.event();
            log.0.push((event.entity, event.animation.clone()));
        },
    );
    world.flush();
    world
}

fn tick(world: &mut World, dt: f32) {
    update_world_time(world, dt);
    let mut schedule = Schedule::default();
    schedule.add_systems(animated_sprite_system);
    schedule.run(world);
}

fn walk_sprite() -> AnimatedSprite {
    let mut animated = AnimatedSprite::new();
    animated
        .add("walk", AnimKind::Loop)
        .set_frame_duration(100.0)
        .add_strip(0.0, 0.0, 32.0, 32.0, 4);
    animated
}

#[test]
fn test_walk_scenario_updates_sprite_frame() {
    let mut world = make_world();
    let mut animated = walk_sprite();
    animated.play("walk");
    let entity = world
        .spawn((animated, Sprite::new("hero", 32.0, 32.0)))
        .id();

    tick(&mut world, 0.04);
    tick(&mut world, 0.04);
    {
        let sprite = world.get::<Sprite>(entity).unwrap();
        assert!(approx_eq(sprite.offset.x, 0.0));
    }
    tick(&mut world, 0.04);

    let animated = world.get::<AnimatedSprite>(entity).unwrap();
    assert_eq!(animated.frame_index(), Some(1));
    assert!(approx_eq(animated.elapsed_ms(), 0.0));
    let sprite = world.get::<Sprite>(entity).unwrap();
    assert!(approx_eq(sprite.offset.x, 32.0));
    assert!(approx_eq(sprite.offset.y, 0.0));
}

#[test]
fn test_time_scale_slows_animation() {
    let mut world = make_world();
    world.resource_mut::<WorldTime>().time_scale = 0.5;
    let mut animated = walk_sprite();
    animated.play("walk");
    let entity = world.spawn(animated).id();

    tick(&mut world, 0.1);
    assert_eq!(world.get::<AnimatedSprite>(entity).unwrap().frame_index(), Some(0));
    tick(&mut world, 0.1);
    assert_eq!(world.get::<AnimatedSprite>(entity).unwrap().frame_index(), Some(1));
}

#[test]
fn test_stopped_sprite_keeps_its_frame() {
    let mut world = make_world();
    let mut sprite = Sprite::new("hero", 32.0, 32.0);
    sprite.offset.x = 64.0;
    let entity = world.spawn((walk_sprite(), sprite)).id();

    tick(&mut world, 0.5);
    let sprite = world.get::<Sprite>(entity).unwrap();
    assert!(approx_eq(sprite.offset.x, 64.0));
}

#[test]
fn test_once_animation_triggers_finished_event_once() {
    let mut world = make_world();
    let store = AnimationStore::from_json_str(
        r#"{ "hurt": { "kind": "once", "frame_duration_ms": 10,
                       "strip": { "x": 0, "y": 32, "width": 16, "height": 16, "count": 3 } } }"#,
    )
    .unwrap();
    let mut animated = store.build_sprite(&["hurt"]);
    animated.play("hurt");
    let entity = world.spawn((animated, Sprite::new("hero", 16.0, 16.0))).id();

    for _ in 0..10 {
        tick(&mut world, 0.01);
    }

    let log = world.resource::<FinishedLog>();
    assert_eq!(log.0, vec![(entity, "hurt".to_string())]);
    let sprite = world.get::<Sprite>(entity).unwrap();
    assert!(approx_eq(sprite.offset.x, 32.0));
    assert!(approx_eq(sprite.offset.y, 32.0));
}

#[test]
fn test_paused_sprite_does_not_advance() {
    let mut world = make_world();
    let mut animated = walk_sprite();
    animated.play("walk");
    animated.pause();
    let entity = world.spawn(animated).id();

    tick(&mut world, 1.0);
    let animated = world.get::<AnimatedSprite>(entity).unwrap();
    assert_eq!(animated.frame_index(), Some(0));
    assert!(animated.is_paused());
}

#[test]
fn test_sprite_with_wrong_frame_size_is_resized() {
    let mut world = make_world();
    let mut animated = walk_sprite();
    animated.play("walk");
    // Same offset as frame 0, different size
    let entity = world
        .spawn((animated, Sprite::new("hero", 16.0, 48.0)))
        .id();

    tick(&mut world, 0.01);
    let sprite = world.get::<Sprite>(entity).unwrap();
    assert!(approx_eq(sprite.offset.x, 0.0));
    assert!(approx_eq(sprite.width, 32.0));
    assert!(approx_eq(sprite.height, 32.0));
}
