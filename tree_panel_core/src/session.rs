//! Per-session pointer state shared with a host viewport.
//!
//! The panel itself never reads this; it exists so a 3D view living in the
//! same window can ask "was the left button pressed this frame" or "which
//! point is under the cursor" without re-implementing edge tracking.

use glam::{Vec2, Vec3};

/// Platform-agnostic window input, in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    CursorMoved { x: f32, y: f32 },
    MouseButton { button: MouseButton, pressed: bool },
    Resized { width: f32, height: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

#[derive(Debug, Clone)]
pub struct Session {
    frame: u64,
    left_active: bool,
    last_left_press: Option<u64>,
    /// Recorded for viewport consumers; the panel does not read it.
    last_right_press: Option<u64>,
    cursor: Vec2,
    window_size: Vec2,
}

impl Session {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            frame: 0,
            left_active: false,
            last_left_press: None,
            last_right_press: None,
            cursor: Vec2::splat(-1.0),
            window_size: Vec2::new(width, height),
        }
    }

    /// Start a new frame. Call once per frame, before feeding that frame's
    /// events, or "just pressed" queries will refer to the wrong frame.
    pub fn advance_frame(&mut self) {
        self.frame += 1;
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Feed one window event.
    ///
    /// Presses are dropped while the GUI wants the pointer so clicks on the
    /// panel never reach the viewport. Releases always go through, otherwise
    /// a drag that ends over the panel would leave the button stuck down.
    pub fn handle_input(&mut self, event: InputEvent, gui_wants_pointer: bool) {
        match event {
            InputEvent::CursorMoved { x, y } => self.cursor = Vec2::new(x, y),
            InputEvent::Resized { width, height } => self.window_size = Vec2::new(width, height),
            InputEvent::MouseButton { pressed: true, .. } if gui_wants_pointer => {}
            InputEvent::MouseButton { button, pressed } => match (button, pressed) {
                (MouseButton::Left, true) => {
                    self.left_active = true;
                    self.last_left_press = Some(self.frame);
                }
                (MouseButton::Left, false) => self.left_active = false,
                (MouseButton::Right, true) => self.last_right_press = Some(self.frame),
                _ => {}
            },
        }
    }

    pub fn left_just_pressed(&self) -> bool {
        self.last_left_press == Some(self.frame)
    }

    pub fn left_active(&self) -> bool {
        self.left_active
    }

    pub fn right_just_pressed(&self) -> bool {
        self.last_right_press == Some(self.frame)
    }

    pub fn cursor_screen(&self) -> Vec2 {
        self.cursor
    }

    pub fn window_size(&self) -> Vec2 {
        self.window_size
    }

    /// Cursor position in normalized device coordinates, sampled at the
    /// centre of the pixel under it.
    pub fn cursor_ndc(&self) -> Vec2 {
        screen_to_ndc(self.cursor + Vec2::splat(0.5), self.window_size)
    }

    /// Index of the first point (given in NDC) whose screen-space distance to
    /// the cursor is below `threshold`. First match wins, not the closest.
    pub fn index_of_point_at_cursor(&self, points: &[Vec3], threshold: f32) -> Option<usize> {
        let cursor = self.cursor + Vec2::splat(0.5);
        points.iter().position(|p| {
            let screen = ndc_to_screen(p.truncate(), self.window_size);
            screen.distance(cursor) < threshold
        })
    }
}

/// Screen space (origin top-left, Y down) to NDC (origin centre, Y up, [-1, 1]).
pub fn screen_to_ndc(screen: Vec2, size: Vec2) -> Vec2 {
    let unit = screen / size;
    let flipped = Vec2::new(unit.x, 1.0 - unit.y);
    2.0 * flipped - Vec2::ONE
}

/// Inverse of [`screen_to_ndc`].
pub fn ndc_to_screen(ndc: Vec2, size: Vec2) -> Vec2 {
    let unit = 0.5 * (ndc + Vec2::ONE);
    let flipped = Vec2::new(unit.x, 1.0 - unit.y);
    flipped * size
}
