//! State stack integration tests: raw input messages flow through
//! `dispatch_input` into GUI states, and `update_states` applies transitions.

use bevy_ecs::prelude::*;
use raylib::prelude::{KeyboardKey, MouseButton, Rectangle};

use lanternengine::components::animatedsprite::AnimatedSprite;
use lanternengine::events::input::InputEvent;
use lanternengine::game::{self, Hero, TitleLayout};
use lanternengine::gui::canvas::GuiCanvas;
use lanternengine::gui::skin::GuiSkin;
use lanternengine::resources::screensize::ScreenSize;
use lanternengine::resources::worldtime::WorldTime;
use lanternengine::states::guistate::{GuiLayout, GuiState};
use lanternengine::states::stack::{StateStack, StateTransition};
use lanternengine::systems::statestack::{dispatch_input, should_quit, update_states};

fn make_world() -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(ScreenSize { w: 800, h: 600 });
    world.insert_resource(game::default_animation_store());
    world.init_resource::<Messages<InputEvent>>();
    world
}

fn send(world: &mut World, events: &[InputEvent]) {
    let mut messages = world.resource_mut::<Messages<InputEvent>>();
    for event in events {
        messages.write(*event);
    }
}

fn tick(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems((dispatch_input, update_states).chain());
    schedule.run(world);
}

fn names(world: &World) -> Vec<String> {
    world
        .non_send_resource::<StateStack>()
        .names()
        .into_iter()
        .map(String::from)
        .collect()
}

fn top_control_center(world: &World, name: &str) -> (f32, f32) {
    let stack = world.non_send_resource::<StateStack>();
    let canvas = stack.top().and_then(|s| s.canvas()).unwrap();
    let b = canvas.find(name).unwrap().bounds;
    (b.x + b.width * 0.5, b.y + b.height * 0.5)
}

fn click_at(x: f32, y: f32) -> [InputEvent; 2] {
    let button = MouseButton::MOUSE_BUTTON_LEFT;
    [
        InputEvent::MouseButtonPressed { button, x, y },
        InputEvent::MouseButtonReleased { button, x, y },
    ]
}

/// Counts whatever the GUI lets through.
#[derive(Default)]
struct Counter {
    go_clicks: usize,
}

impl GuiLayout for Counter {
    fn name(&self) -> &str {
        "counter"
    }
    fn load_gui(&mut self, canvas: &mut GuiCanvas) {
        canvas.add_button(
            "go",
            "Go",
            Rectangle {
                x: 100.0,
                y: 100.0,
                width: 100.0,
                height: 40.0,
            },
        );
    }
    fn update(&mut self, _world: &mut World, canvas: &mut GuiCanvas, _dt: f32) -> StateTransition {
        for name in canvas.take_clicked_names() {
            if name == "go" {
                self.go_clicks += 1;
                return StateTransition::Pop;
            }
        }
        StateTransition::None
    }
}

#[test]
fn test_click_reaches_layout_and_pops_last_state() {
    let mut world = make_world();
    let mut stack = StateStack::new();
    stack.push(
        Box::new(GuiState::new(Counter::default(), 800, 600, GuiSkin::default())),
        &mut world,
    );
    world.insert_non_send_resource(stack);

    send(&mut world, &click_at(150.0, 120.0));
    tick(&mut world);

    assert!(world.non_send_resource::<StateStack>().is_empty());
    assert!(should_quit(&world));
}

#[test]
fn test_messages_are_drained_each_frame() {
    let mut world = make_world();
    let mut stack = StateStack::new();
    stack.push(
        Box::new(GuiState::new(Counter::default(), 800, 600, GuiSkin::default())),
        &mut world,
    );
    world.insert_non_send_resource(stack);

    send(&mut world, &[InputEvent::MouseMoved { x: 1.0, y: 1.0 }]);
    tick(&mut world);
    assert!(world.resource::<Messages<InputEvent>>().is_empty());
    assert_eq!(names(&world), vec!["counter"]);
}

#[test]
fn test_title_to_play_and_back() {
    let mut world = make_world();
    let mut stack = StateStack::new();
    stack.push(
        Box::new(GuiState::new(TitleLayout::new(), 800, 600, GuiSkin::default())),
        &mut world,
    );
    world.insert_non_send_resource(stack);

    // Type a name into the text box
    let (x, y) = top_control_center(&world, "player_name");
    send(&mut world, &click_at(x, y));
    send(
        &mut world,
        &[
            InputEvent::TextEntered('A'),
            InputEvent::TextEntered('n'),
            InputEvent::TextEntered('a'),
        ],
    );
    tick(&mut world);
    {
        let stack = world.non_send_resource::<StateStack>();
        let canvas = stack.top().and_then(|s| s.canvas()).unwrap();
        assert_eq!(canvas.text("player_name"), Some("Ana"));
    }

    let (x, y) = top_control_center(&world, "play");
    send(&mut world, &click_at(x, y));
    tick(&mut world);
    assert_eq!(names(&world), vec!["title", "play"]);

    let hero_count = world.query::<(&Hero, &AnimatedSprite)>().iter(&world).count();
    assert_eq!(hero_count, 1);

    // P is handled by the play state; the title below does not see it
    send(&mut world, &[InputEvent::KeyPressed(KeyboardKey::KEY_P)]);
    tick(&mut world);
    let paused = world
        .query::<(&Hero, &AnimatedSprite)>()
        .iter(&world)
        .all(|(_, a)| a.is_paused());
    assert!(paused);

    send(&mut world, &[InputEvent::KeyPressed(KeyboardKey::KEY_ESCAPE)]);
    tick(&mut world);
    assert_eq!(names(&world), vec!["title"]);
    assert_eq!(world.query::<&Hero>().iter(&world).count(), 0);
    assert!(!should_quit(&world));
}

#[test]
fn test_title_escape_drops_focus_then_quits() {
    let mut world = make_world();
    let mut stack = StateStack::new();
    stack.push(
        Box::new(GuiState::new(TitleLayout::new(), 800, 600, GuiSkin::default())),
        &mut world,
    );
    world.insert_non_send_resource(stack);

    let (x, y) = top_control_center(&world, "player_name");
    send(&mut world, &click_at(x, y));
    tick(&mut world);

    // First Escape only unfocuses the text box
    send(&mut world, &[InputEvent::KeyPressed(KeyboardKey::KEY_ESCAPE)]);
    tick(&mut world);
    assert!(!should_quit(&world));

    send(&mut world, &[InputEvent::KeyPressed(KeyboardKey::KEY_ESCAPE)]);
    tick(&mut world);
    assert!(should_quit(&world));
}

#[test]
fn test_quit_button_clears_stack() {
    let mut world = make_world();
    let mut stack = StateStack::new();
    stack.push(
        Box::new(GuiState::new(TitleLayout::new(), 800, 600, GuiSkin::default())),
        &mut world,
    );
    world.insert_non_send_resource(stack);

    let (x, y) = top_control_center(&world, "quit");
    send(&mut world, &click_at(x, y));
    tick(&mut world);

    assert!(world.non_send_resource::<StateStack>().is_empty());
    assert!(should_quit(&world));
}
