//! Lantern Engine main entry point.
//!
//! A 2D game engine written in Rust using:
//! - **raylib** for windowing and graphics
//! - **bevy_ecs** for entity-component-system architecture
//!
//! This executable runs a small demo: a title screen built with the GUI
//! canvas and a play state with an animated hero.
//!
//! # Main Loop
//!
//! 1. Load `config.ini` and the animation definitions
//! 2. Initialize the raylib window, ECS world and resources
//! 3. Push the title state on the state stack
//! 4. Each frame: poll input, dispatch it to the top state, update states,
//!    advance animations, render
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --config ./config.ini
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use bevy_ecs::message::Messages;
use bevy_ecs::prelude::*;
use clap::Parser;
use std::path::PathBuf;

use lanternengine::events::input::InputEvent;
use lanternengine::game::{self, TitleLayout};
use lanternengine::gui::skin::GuiSkin;
use lanternengine::resources::animationstore::AnimationStore;
use lanternengine::resources::gameconfig::GameConfig;
use lanternengine::resources::input::InputState;
use lanternengine::resources::screensize::ScreenSize;
use lanternengine::resources::worldtime::WorldTime;
use lanternengine::states::guistate::GuiState;
use lanternengine::states::stack::StateStack;
use lanternengine::systems::animation::animated_sprite_system;
use lanternengine::systems::input::poll_input;
use lanternengine::systems::render::render_system;
use lanternengine::systems::statestack::{dispatch_input, should_quit, update_states};
use lanternengine::systems::time::update_world_time;

/// Lantern Engine 2D
#[derive(Parser)]
#[command(version, about = "Lantern Engine 2D: sprite animations and GUI game states")]
struct Cli {
    /// Configuration file to read (default: ./config.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Animation definitions to load instead of the configured file.
    #[arg(long, value_name = "PATH")]
    animations: Option<PathBuf>,

    /// Write the effective configuration back to the config file and exit.
    #[arg(long)]
    write_config: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(path) => GameConfig::with_path(path),
        None => GameConfig::new(),
    };
    if let Err(e) = config.load_from_file() {
        log::warn!("{}. Using defaults.", e);
    }
    if let Some(path) = cli.animations {
        config.animations_path = path;
    }

    // Early-exit: dump the configuration and quit (no window needed)
    if cli.write_config {
        match config.save_to_file() {
            Ok(()) => println!("Configuration written to {}", config.config_path.display()),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    log::info!("Hello, world! This is the Lantern Engine!");

    let animations_path = config.animations_path.to_string_lossy().to_string();
    let animation_store = match AnimationStore::load_from_file(&animations_path) {
        Ok(store) => store,
        Err(e) => {
            log::warn!(
                "Failed to load animations from {}: {}. Using built-in hero animations.",
                animations_path,
                e
            );
            game::default_animation_store()
        }
    };

    // --------------- Raylib window & assets ---------------
    let (window_width, window_height) = config.window_size();
    let (mut rl, thread) = raylib::init()
        .size(window_width as i32, window_height as i32)
        .title("Lantern Engine")
        .build();
    rl.set_target_fps(config.target_fps);
    // Escape belongs to the game states
    rl.set_exit_key(None);

    let textures = game::load_textures(&mut rl, &thread, &config);
    let fonts = game::load_fonts(&mut rl, &thread, &config);
    let screen = ScreenSize {
        w: rl.get_screen_width(),
        h: rl.get_screen_height(),
    };

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(screen);
    world.insert_resource(InputState::default());
    world.insert_resource(animation_store);
    world.insert_resource(textures);
    world.init_resource::<Messages<InputEvent>>();

    let skin = GuiSkin::from_config(&config);
    world.insert_resource(config);
    world.insert_non_send_resource(fonts);
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    let mut stack = StateStack::new();
    stack.push(
        Box::new(GuiState::new(TitleLayout::new(), screen.w, screen.h, skin)),
        &mut world,
    );
    world.insert_non_send_resource(stack);
    world.flush();

    let mut update = Schedule::default();
    update.add_systems(
        (
            poll_input,
            dispatch_input,
            update_states,
            animated_sprite_system,
            render_system,
        )
            .chain(),
    );

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
        && !should_quit(&world)
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);

        world.clear_trackers();
    }

    // Leave every remaining state so their entities and GUIs are released
    if let Some(mut stack) = world.remove_non_send_resource::<StateStack>() {
        stack.clear(&mut world);
    }
    log::info!("Bye!");
}
