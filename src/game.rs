//! Demo game built on the engine.
//!
//! Two states: a title screen ([`TitleLayout`] inside a
//! [`GuiState`]) with a name box and Play/Quit buttons, and a [`PlayState`]
//! showing an animated hero.
//!
//! Keys in the play state: W walk, I idle, Space jump, P pause, R resume,
//! S stop, Escape back to the title.

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use log::{info, warn};
use raylib::prelude::*;

use crate::components::animatedsprite::{AnimatedSprite, Playback};
use crate::components::animation::AnimKind;
use crate::components::mapposition::MapPosition;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::events::animation::AnimationFinishedEvent;
use crate::events::input::InputEvent;
use crate::gui::canvas::GuiCanvas;
use crate::gui::control::ControlId;
use crate::gui::skin::{GuiSkin, SKIN_TEXTURE_KEY};
use crate::resources::animationstore::{AnimationDef, AnimationStore, StripDef};
use crate::resources::fontstore::FontStore;
use crate::resources::gameconfig::GameConfig;
use crate::resources::screensize::ScreenSize;
use crate::resources::texturestore::TextureStore;
use crate::states::guistate::GuiLayout;
use crate::states::stack::{GameState, StateTransition};

pub const HERO_TEXTURE_KEY: &str = "hero";
const HERO_TEXTURE_PATH: &str = "./assets/textures/hero.png";
const HERO_FRAME_SIZE: f32 = 32.0;
const HERO_ANIMATIONS: [&str; 3] = ["walk", "idle", "jump"];
const DEFAULT_PLAYER_NAME: &str = "Hero";
const PLAYER_NAME_MAX_LEN: usize = 16;

/// Marks the entity controlled by [`PlayState`].
#[derive(Component, Debug, Clone, Copy)]
pub struct Hero;

/// Load every texture the demo needs.
///
/// Missing files are replaced by a generated checker sheet with the same
/// frame layout, so the demo runs without assets.
pub fn load_textures(rl: &mut RaylibHandle, thread: &RaylibThread, config: &GameConfig) -> TextureStore {
    let mut textures = TextureStore::new();

    match rl.load_texture(thread, HERO_TEXTURE_PATH) {
        Ok(tex) => textures.insert(HERO_TEXTURE_KEY, tex),
        Err(e) => {
            warn!("Could not load '{}': {}. Using a checker sheet.", HERO_TEXTURE_PATH, e);
            let frame = HERO_FRAME_SIZE as i32;
            let image = Image::gen_image_checked(frame * 4, frame * 3, 4, 3, Color::ORANGE, Color::MAROON);
            match rl.load_texture_from_image(thread, &image) {
                Ok(tex) => textures.insert(HERO_TEXTURE_KEY, tex),
                Err(e) => warn!("Could not build fallback hero texture: {}", e),
            }
        }
    }

    let skin_path = config.gui_skin_image.to_string_lossy().to_string();
    match rl.load_texture(thread, &skin_path) {
        Ok(tex) => textures.insert(SKIN_TEXTURE_KEY, tex),
        Err(e) => info!("No GUI skin image '{}' ({}). Buttons use flat colors.", skin_path, e),
    }

    textures
}

/// Load the GUI font named in the config.
///
/// The font is stored under `gui_font_name`. A missing file leaves the store
/// empty and the GUI falls back to raylib's built-in font.
pub fn load_fonts(rl: &mut RaylibHandle, thread: &RaylibThread, config: &GameConfig) -> FontStore {
    let mut fonts = FontStore::new();
    let skin = GuiSkin::from_config(config);
    let Some(key) = skin.font_key() else {
        return fonts;
    };

    let font_path = config.gui_font_path.to_string_lossy().to_string();
    match rl.load_font(thread, &font_path) {
        Ok(font) => {
            info!("Loaded GUI font '{}' from '{}'", key, font_path);
            fonts.add(key, font);
        }
        Err(e) => warn!("Could not load GUI font '{}': {}. Using the built-in font.", font_path, e),
    }
    fonts
}

/// Animations matching the generated hero sheet: one row per animation.
pub fn default_animation_store() -> AnimationStore {
    let row = |y: f32, count: usize, kind: AnimKind, frame_duration_ms: f32| AnimationDef {
        kind,
        frame_duration_ms,
        frames: Vec::new(),
        strip: Some(StripDef {
            x: 0.0,
            y,
            width: HERO_FRAME_SIZE,
            height: HERO_FRAME_SIZE,
            count,
        }),
    };
    let mut store = AnimationStore::new();
    store.insert("walk", row(0.0, 4, AnimKind::Loop, 120.0));
    store.insert("idle", row(HERO_FRAME_SIZE, 2, AnimKind::PingPong, 400.0));
    store.insert("jump", row(HERO_FRAME_SIZE * 2.0, 4, AnimKind::Once, 90.0));
    store
}

fn rect(x: f32, y: f32, width: f32, height: f32) -> Rectangle {
    Rectangle {
        x,
        y,
        width,
        height,
    }
}

/// Title screen: name box, Play and Quit.
#[derive(Debug, Default)]
pub struct TitleLayout {
    quit_requested: bool,
}

impl TitleLayout {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GuiLayout for TitleLayout {
    fn name(&self) -> &str {
        "title"
    }

    fn load_gui(&mut self, canvas: &mut GuiCanvas) {
        let (w, _h) = canvas.size();
        let x = (w as f32 - 300.0) * 0.5;
        canvas.add_label("title", "Lantern Engine", rect(x, 80.0, 300.0, 40.0));
        canvas.add_label("name_caption", "Your name:", rect(x, 160.0, 300.0, 30.0));
        canvas.add_text_box("player_name", rect(x, 195.0, 300.0, 36.0), PLAYER_NAME_MAX_LEN);
        canvas.add_button("play", "Play", rect(x, 260.0, 300.0, 40.0));
        canvas.add_button("quit", "Quit", rect(x, 315.0, 300.0, 40.0));
    }

    fn on_enter(&mut self, _world: &mut World, _canvas: &mut GuiCanvas) {
        self.quit_requested = false;
    }

    fn update(&mut self, _world: &mut World, canvas: &mut GuiCanvas, _dt: f32) -> StateTransition {
        if self.quit_requested {
            return StateTransition::Quit;
        }
        for name in canvas.take_clicked_names() {
            match name.as_str() {
                // Enter inside the name box starts the game too
                "play" | "player_name" => {
                    let player = match canvas.text("player_name") {
                        Some(text) if !text.trim().is_empty() => text.trim().to_string(),
                        _ => DEFAULT_PLAYER_NAME.to_string(),
                    };
                    let (w, h) = canvas.size();
                    let play = PlayState::new(player, canvas.skin().clone(), w, h);
                    return StateTransition::Push(Box::new(play));
                }
                "quit" => return StateTransition::Quit,
                _ => {}
            }
        }
        StateTransition::None
    }

    fn on_unhandled_input(&mut self, _world: &mut World, event: &InputEvent) -> bool {
        if *event == InputEvent::KeyPressed(KeyboardKey::KEY_ESCAPE) {
            self.quit_requested = true;
            return true;
        }
        false
    }
}

/// Gameplay: one animated hero in the middle of the screen and a status HUD.
pub struct PlayState {
    player_name: String,
    hud: GuiCanvas,
    status_label: ControlId,
    hero: Option<Entity>,
    observer: Option<Entity>,
    pending: Option<StateTransition>,
}

impl PlayState {
    pub fn new(player_name: impl Into<String>, skin: GuiSkin, width: i32, height: i32) -> Self {
        let mut hud = GuiCanvas::new(skin, width, height);
        hud.draw_background = false;
        hud.add_label(
            "help",
            "W walk  I idle  SPACE jump  P pause  R resume  S stop  ESC title",
            rect(10.0, 10.0, width as f32 - 20.0, 24.0),
        );
        let status_label = hud.add_label("status", "", rect(10.0, 40.0, width as f32 - 20.0, 24.0));
        Self {
            player_name: player_name.into(),
            hud,
            status_label,
            hero: None,
            observer: None,
            pending: None,
        }
    }

    pub fn hero(&self) -> Option<Entity> {
        self.hero
    }

    fn with_hero(&self, world: &mut World, f: impl FnOnce(&mut AnimatedSprite)) {
        let Some(hero) = self.hero else {
            return;
        };
        if let Some(mut animated) = world.get_mut::<AnimatedSprite>(hero) {
            f(&mut *animated);
        }
    }

    fn status_text(&self, world: &World) -> String {
        let Some(animated) = self.hero.and_then(|hero| world.get::<AnimatedSprite>(hero)) else {
            return format!("{}: no hero", self.player_name);
        };
        let playback = match animated.playback() {
            Playback::Stopped => "stopped".to_string(),
            Playback::Playing(name) => format!("playing '{}'", name),
            Playback::Paused(name) => format!("paused '{}'", name),
        };
        match animated.frame_index() {
            Some(frame) => format!("{}: {} frame {}", self.player_name, playback, frame),
            None => format!("{}: {}", self.player_name, playback),
        }
    }
}

impl GameState for PlayState {
    fn name(&self) -> &str {
        "play"
    }

    fn enter(&mut self, world: &mut World) {
        let mut animated = match world.get_resource::<AnimationStore>() {
            Some(store) => store.build_sprite(&HERO_ANIMATIONS),
            None => default_animation_store().build_sprite(&HERO_ANIMATIONS),
        };
        animated.play("walk");

        let center = world
            .get_resource::<ScreenSize>()
            .map(|s| (s.w as f32 * 0.5, s.h as f32 * 0.5))
            .unwrap_or((0.0, 0.0));
        let mut sprite = Sprite::new(HERO_TEXTURE_KEY, HERO_FRAME_SIZE, HERO_FRAME_SIZE);
        sprite.set_source_rect(animated.source_rect());
        let hero = world
            .spawn((
                Hero,
                MapPosition::new(center.0, center.1),
                sprite.centered(),
                animated,
                ZIndex(1),
            ))
            .id();
        self.hero = Some(hero);
        self.observer = Some(world.spawn(Observer::new(on_hero_animation_finished)).id());
        world.flush();
        info!("PlayState: '{}' spawned as {:?}", self.player_name, hero);
    }

    fn leave(&mut self, world: &mut World) {
        for entity in [self.hero.take(), self.observer.take()].into_iter().flatten() {
            world.despawn(entity);
        }
        self.pending = None;
    }

    fn update(&mut self, world: &mut World, _dt: f32) -> StateTransition {
        let status = self.status_text(world);
        self.hud.set_text(self.status_label, &status);
        self.pending.take().unwrap_or(StateTransition::None)
    }

    fn handle_input(&mut self, world: &mut World, event: &InputEvent) -> bool {
        let InputEvent::KeyPressed(key) = *event else {
            return false;
        };
        match key {
            KeyboardKey::KEY_W => self.with_hero(world, |a| a.play("walk")),
            KeyboardKey::KEY_I => self.with_hero(world, |a| a.play("idle")),
            KeyboardKey::KEY_SPACE => self.with_hero(world, |a| a.play("jump")),
            KeyboardKey::KEY_P => self.with_hero(world, AnimatedSprite::pause),
            KeyboardKey::KEY_R => self.with_hero(world, AnimatedSprite::resume),
            KeyboardKey::KEY_S => self.with_hero(world, AnimatedSprite::stop),
            KeyboardKey::KEY_ESCAPE => self.pending = Some(StateTransition::Pop),
            _ => return false,
        }
        true
    }

    fn canvas(&self) -> Option<&GuiCanvas> {
        Some(&self.hud)
    }
}

/// Back to walking once a jump lands.
fn on_hero_animation_finished(
    trigger: On<AnimationFinishedEvent>,
    mut heroes: Query<&mut AnimatedSprite, With<Hero>>,
) {
    let event = trigger.event();
    if event.animation != "jump" {
        return;
    }
    if let Ok(mut animated) = heroes.get_mut(event.entity) {
        animated.play("walk");
    }
}
