//! Canvas rendering with raylib.

use raylib::prelude::*;

use crate::gui::canvas::GuiCanvas;
use crate::gui::control::{Control, ControlKind};
use crate::gui::skin::GuiSkin;
use crate::resources::fontstore::FontStore;

const TEXT_PADDING: i32 = 6;
const TEXT_SPACING: f32 = 1.0;

/// Font the skin asks for, if it has been loaded.
///
/// `None` means text is drawn with raylib's built-in font.
pub fn resolve_font<'a>(skin: &GuiSkin, fonts: Option<&'a FontStore>) -> Option<&'a Font> {
    let key = skin.font_key()?;
    fonts?.get(key)
}

/// Draw every visible control of `canvas` in insertion order.
///
/// `skin_texture` is stretched over button faces when present. Text uses
/// `font` when given.
pub fn draw_canvas<D: RaylibDraw>(
    d: &mut D,
    canvas: &GuiCanvas,
    skin_texture: Option<&Texture2D>,
    font: Option<&Font>,
) {
    let skin = canvas.skin();
    let (w, h) = canvas.size();

    if canvas.draw_background {
        d.draw_rectangle(0, 0, w, h, skin.background);
    }

    for control in canvas.controls().iter().filter(|c| c.visible) {
        let hovered = canvas.hovered() == Some(control.id);
        let pressed = canvas.pressed() == Some(control.id);
        let focused = canvas.focused() == Some(control.id);

        match &control.kind {
            ControlKind::Label { text } => {
                draw_control_text(d, font, control, text, skin.font_size, skin.text_color);
            }
            ControlKind::Button { text } => {
                let face = if !control.enabled {
                    skin.face_disabled
                } else if pressed {
                    skin.face_pressed
                } else if hovered {
                    skin.face_hovered
                } else {
                    skin.face
                };
                match skin_texture {
                    Some(tex) => {
                        let src = Rectangle {
                            x: 0.0,
                            y: 0.0,
                            width: tex.width as f32,
                            height: tex.height as f32,
                        };
                        d.draw_texture_pro(tex, src, control.bounds, Vector2 { x: 0.0, y: 0.0 }, 0.0, face);
                    }
                    None => d.draw_rectangle_rec(control.bounds, face),
                }
                d.draw_rectangle_lines_ex(control.bounds, 1.0, skin.text_color);
                draw_control_text(d, font, control, text, skin.font_size, skin.text_color);
            }
            ControlKind::TextBox { text, .. } => {
                d.draw_rectangle_rec(control.bounds, Color::WHITE);
                let caret = if focused { "_" } else { "" };
                let shown = format!("{}{}", text, caret);
                draw_control_text(d, font, control, &shown, skin.font_size, skin.text_color);
            }
        }

        if focused {
            d.draw_rectangle_lines_ex(control.bounds, 2.0, skin.focus_outline);
        }
    }
}

fn draw_control_text<D: RaylibDraw>(
    d: &mut D,
    font: Option<&Font>,
    control: &Control,
    text: &str,
    size: i32,
    color: Color,
) {
    let x = control.bounds.x as i32 + TEXT_PADDING;
    let y = control.bounds.y as i32 + ((control.bounds.height as i32 - size) / 2).max(0);
    match font {
        Some(font) => {
            let position = Vector2 {
                x: x as f32,
                y: y as f32,
            };
            d.draw_text_ex(font, text, position, size as f32, TEXT_SPACING, color);
        }
        None => d.draw_text(text, x, y, size, color),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_font_needs_no_store() {
        let skin = GuiSkin::default();
        assert!(resolve_font(&skin, None).is_none());
        assert!(resolve_font(&skin, Some(&FontStore::new())).is_none());
    }

    #[test]
    fn test_missing_named_font_falls_back_to_builtin() {
        let mut skin = GuiSkin::default();
        skin.set_default_font("mono", 18);
        assert!(resolve_font(&skin, None).is_none());
        assert!(resolve_font(&skin, Some(&FontStore::new())).is_none());
    }
}
