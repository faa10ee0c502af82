//! Text overlay painted on top of the presented (scaled) frame.
//!
//! Requests are queued during the frame through [`Overlay`] and painted
//! after the blit, so text stays crisp regardless of the internal
//! resolution. Glyphs are 5x7 bitmaps; unknown characters render blank.

use std::time::{Duration, Instant};

use crate::color::{GREEN, Rgb};
use crate::renderer::Overlay;

const GLYPH_W: i32 = 5;
const GLYPH_H: i32 = 7;

#[derive(Clone, Debug, PartialEq)]
struct TextCommand {
    text: String,
    x: i32,
    y: i32,
    scale: i32,
    color: Rgb,
}

/// Frames per second over a rolling one-second window.
#[derive(Clone, Debug)]
pub struct FpsCounter {
    frames: u32,
    window_start: Instant,
    fps: f32,
}

impl FpsCounter {
    pub fn new(now: Instant) -> Self {
        Self {
            frames: 0,
            window_start: now,
            fps: 0.0,
        }
    }

    /// Count one frame. Returns the new rate when a window closes.
    pub fn tick(&mut self, now: Instant) -> Option<f32> {
        self.frames += 1;
        let elapsed = now.duration_since(self.window_start);
        if elapsed < Duration::from_secs(1) {
            return None;
        }
        self.fps = self.frames as f32 / elapsed.as_secs_f32();
        self.frames = 0;
        self.window_start = now;
        Some(self.fps)
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }
}

pub struct Hud {
    queue: Vec<TextCommand>,
    pub fps: FpsCounter,
}

impl Hud {
    pub fn new(now: Instant) -> Self {
        Self {
            queue: Vec::new(),
            fps: FpsCounter::new(now),
        }
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Forget queued text of a frame that will not be presented.
    pub fn discard(&mut self) {
        self.queue.clear();
    }

    /// Paint and drain queued text onto a `dw` x `dh` buffer.
    pub fn paint(&mut self, dst: &mut [Rgb], dw: usize, dh: usize) {
        for cmd in self.queue.drain(..) {
            let mut pen_x = cmd.x;
            for ch in cmd.text.chars() {
                if let Some(rows) = glyph(ch) {
                    blit_glyph(dst, dw, dh, &rows, pen_x, cmd.y, cmd.scale, cmd.color);
                }
                pen_x += (GLYPH_W + 1) * cmd.scale;
            }
        }
    }
}

impl Overlay for Hud {
    fn draw_text(&mut self, text: &str, x: i32, y: i32, size: i32, color: Rgb) {
        self.queue.push(TextCommand {
            text: text.to_ascii_uppercase(),
            x,
            y,
            scale: (size / 8).max(1),
            color,
        });
    }

    fn draw_fps(&mut self, x: i32, y: i32) {
        let text = format!("{:.0} FPS", self.fps.fps());
        self.draw_text(&text, x, y, 20, GREEN);
    }
}

#[allow(clippy::too_many_arguments)]
fn blit_glyph(
    dst: &mut [Rgb],
    dw: usize,
    dh: usize,
    rows: &[u8; 7],
    x: i32,
    y: i32,
    scale: i32,
    color: Rgb,
) {
    for (r, &bits) in rows.iter().enumerate() {
        for c in 0..GLYPH_W {
            if (bits >> (GLYPH_W - 1 - c)) & 1 == 0 {
                continue;
            }
            let x0 = x + c * scale;
            let y0 = y + r as i32 * scale;
            for py in y0..y0 + scale {
                if py < 0 || py as usize >= dh {
                    continue;
                }
                for px in x0..x0 + scale {
                    if px >= 0 && (px as usize) < dw {
                        dst[py as usize * dw + px as usize] = color;
                    }
                }
            }
        }
    }
}

/// Five bits per row, bit 4 is the leftmost column.
fn glyph(ch: char) -> Option<[u8; GLYPH_H as usize]> {
    let rows = match ch {
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11110, 0b00001, 0b00001, 0b01110, 0b00001, 0b00001, 0b11110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => [0b11100, 0b10010, 0b10001, 0b10001, 0b10001, 0b10010, 0b11100],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111],
        'H' => [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        'J' => [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
        'K' => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'N' => [0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010],
        'X' => [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => [0b10001, 0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100],
        'Z' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        '.' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b01100],
        ':' => [0b00000, 0b01100, 0b01100, 0b00000, 0b01100, 0b01100, 0b00000],
        '-' => [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000],
        '|' => [0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        _ => return None,
    };
    Some(rows)
}
