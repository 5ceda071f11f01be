//! Keyboard and mouse input handling

use game_core::InputState;

#[cfg(target_arch = "wasm32")]
use web_sys::{KeyboardEvent, MouseEvent};

/// Convert a page pointer position to play-area coordinates
pub fn canvas_point(client_x: i32, client_y: i32, offset_left: i32, offset_top: i32) -> (f32, f32) {
    ((client_x - offset_left) as f32, (client_y - offset_top) as f32)
}

/// Handle key down event. Bound keys don't scroll the page.
#[cfg(target_arch = "wasm32")]
pub fn handle_key_down(input: &mut InputState, event: &KeyboardEvent) {
    if input.key_down(&event.key()) {
        event.prevent_default();
    }
}

/// Handle key up event
#[cfg(target_arch = "wasm32")]
pub fn handle_key_up(input: &mut InputState, event: &KeyboardEvent) {
    if input.key_up(&event.key()) {
        event.prevent_default();
    }
}

/// Handle mouse move event, relative to the canvas origin
#[cfg(target_arch = "wasm32")]
pub fn handle_mouse_move(
    input: &mut InputState,
    event: &MouseEvent,
    canvas: &web_sys::HtmlCanvasElement,
) {
    apply_pointer(
        input,
        (event.client_x(), event.client_y()),
        (canvas.offset_left(), canvas.offset_top()),
    );
}

/// Apply a pointer position already in page coordinates
pub fn apply_pointer(input: &mut InputState, client: (i32, i32), offset: (i32, i32)) {
    let (x, y) = canvas_point(client.0, client.1, offset.0, offset.1);
    input.pointer_moved(x, y);
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::GameMap;

    #[test]
    fn test_canvas_point_subtracts_offset() {
        assert_eq!(canvas_point(150, 90, 50, 40), (100.0, 50.0));
    }

    #[test]
    fn test_pointer_left_of_canvas_is_out_of_bounds() {
        let map = GameMap::new(480.0, 320.0);
        let mut input = InputState::new();

        apply_pointer(&mut input, (30, 100), (50, 40));
        assert_eq!(input.pointer, glam::Vec2::new(-20.0, 60.0));
        assert!(!input.pointer_in_bounds(&map));

        apply_pointer(&mut input, (250, 100), (50, 40));
        assert!(input.pointer_in_bounds(&map));
    }
}
