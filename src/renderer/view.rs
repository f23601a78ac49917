//! TermView: draws the game onto a `FrameBuffer`.
//!
//! Pure (no I/O), so layouts can be unit-tested. Each grid cell is two
//! terminal columns wide to roughly square up glyph aspect ratio.

use super::fb::{CellStyle, FrameBuffer, Glyph, Rgb};
use super::{OverlayLine, RenderTarget, TextSize, Tone};
use crate::sim::{Cell, Snake, in_bounds};

const COLOR_BG: Rgb = Rgb::new(15, 20, 15);
const COLOR_GRID: Rgb = Rgb::new(22, 30, 22);
const COLOR_SNAKE_HEAD: Rgb = Rgb::new(60, 220, 60);
const COLOR_SNAKE_BODY: Rgb = Rgb::new(34, 160, 34);
const COLOR_FOOD: Rgb = Rgb::new(220, 50, 50);
const COLOR_HUD_BG: Rgb = Rgb::new(10, 14, 10);
const COLOR_HUD_TEXT: Rgb = Rgb::new(200, 240, 200);
const COLOR_ACCENT: Rgb = Rgb::new(80, 220, 80);
const COLOR_DIM: Rgb = Rgb::new(100, 100, 100);
const COLOR_WHITE: Rgb = Rgb::new(240, 240, 240);
const COLOR_ALERT: Rgb = Rgb::new(220, 50, 50);
const COLOR_BORDER: Rgb = Rgb::new(80, 110, 80);
const COLOR_BLACK_BG: Rgb = Rgb::new(10, 10, 10);

/// Terminal columns per grid cell
const CELL_W: i32 = 2;

/// Where the board sits in the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BoardLayout {
    cols: i32,
    rows: i32,
    /// Top-left terminal position of cell (0, 0)
    origin_x: i32,
    origin_y: i32,
}

impl BoardLayout {
    fn centered(cols: i32, rows: i32, width: u16, height: u16) -> Self {
        // Frame adds one glyph on each side, HUD adds a row on top
        let outer_w = cols * CELL_W + 2;
        let outer_h = rows + 3;
        let left = ((width as i32 - outer_w) / 2).max(0);
        let top = ((height as i32 - outer_h) / 2).max(0);
        Self {
            cols,
            rows,
            origin_x: left + 1,
            origin_y: top + 2,
        }
    }

    fn cell_pos(&self, cell: Cell) -> (i32, i32) {
        (self.origin_x + cell.x * CELL_W, self.origin_y + cell.y)
    }

    fn hud_y(&self) -> i32 {
        self.origin_y - 2
    }

    fn width(&self) -> i32 {
        self.cols * CELL_W
    }
}

/// Framebuffer-backed `RenderTarget`
#[derive(Debug, Clone)]
pub struct TermView {
    fb: FrameBuffer,
    layout: Option<BoardLayout>,
}

impl TermView {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            fb: FrameBuffer::new(width, height),
            layout: None,
        }
    }

    /// Start a new frame at the given viewport size
    pub fn begin_frame(&mut self, width: u16, height: u16) {
        self.fb.resize(width, height);
        self.fb.fill(Glyph {
            ch: ' ',
            style: CellStyle::new(COLOR_WHITE, COLOR_BLACK_BG),
        });
        self.layout = None;
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.fb
    }

    fn draw_cell(&mut self, cell: Cell, ch: char, fg: Rgb) {
        let Some(layout) = self.layout else {
            return;
        };
        if !in_bounds(cell, layout.cols, layout.rows) {
            return;
        }
        let (x, y) = layout.cell_pos(cell);
        let style = CellStyle::new(fg, grid_bg(cell));
        for dx in 0..CELL_W {
            self.fb.put(x + dx, y, ch, style);
        }
    }
}

fn grid_bg(cell: Cell) -> Rgb {
    if (cell.x + cell.y) % 2 == 0 {
        COLOR_BG
    } else {
        COLOR_GRID
    }
}

fn tone_color(tone: Tone) -> Rgb {
    match tone {
        Tone::Accent => COLOR_ACCENT,
        Tone::Text => COLOR_HUD_TEXT,
        Tone::Dim => COLOR_DIM,
        Tone::Bright => COLOR_WHITE,
        Tone::Alert => COLOR_ALERT,
    }
}

/// Huge text is letter-spaced to stand out
fn styled_text(line: &OverlayLine) -> String {
    match line.size {
        TextSize::Huge => {
            let spaced: Vec<String> = line.text.chars().map(String::from).collect();
            spaced.join(" ")
        }
        _ => line.text.clone(),
    }
}

impl RenderTarget for TermView {
    fn draw_background(&mut self, cols: i32, rows: i32) {
        let layout = BoardLayout::centered(cols, rows, self.fb.width(), self.fb.height());
        self.layout = Some(layout);

        let border = CellStyle::new(COLOR_BORDER, COLOR_BLACK_BG);
        let (x0, y0) = (layout.origin_x - 1, layout.origin_y - 1);
        let (x1, y1) = (layout.origin_x + layout.width(), layout.origin_y + rows);
        for x in x0 + 1..x1 {
            self.fb.put(x, y0, '─', border);
            self.fb.put(x, y1, '─', border);
        }
        for y in y0 + 1..y1 {
            self.fb.put(x0, y, '│', border);
            self.fb.put(x1, y, '│', border);
        }
        self.fb.put(x0, y0, '┌', border);
        self.fb.put(x1, y0, '┐', border);
        self.fb.put(x0, y1, '└', border);
        self.fb.put(x1, y1, '┘', border);

        for row in 0..rows {
            for col in 0..cols {
                let cell = Cell::new(col, row);
                let (x, y) = layout.cell_pos(cell);
                let style = CellStyle::new(COLOR_DIM, grid_bg(cell));
                self.fb.fill_rect(x, y, CELL_W, 1, ' ', style);
            }
        }
    }

    fn draw_snake(&mut self, snake: &Snake) {
        // Tail first so the head wins if the snake overlaps itself
        for (i, &cell) in snake.body().iter().enumerate().rev() {
            let color = if i == 0 {
                COLOR_SNAKE_HEAD
            } else {
                COLOR_SNAKE_BODY
            };
            self.draw_cell(cell, '█', color);
        }
    }

    fn draw_target(&mut self, cell: Cell) {
        self.draw_cell(cell, '●', COLOR_FOOD);
    }

    fn draw_hud(&mut self, score: u32, speed: f32) {
        let Some(layout) = self.layout else {
            return;
        };
        let style = CellStyle::new(COLOR_HUD_TEXT, COLOR_HUD_BG);
        let y = layout.hud_y();
        let x = layout.origin_x - 1;
        let w = layout.width() + 2;
        self.fb.fill_rect(x, y, w, 1, ' ', style);
        self.fb.put_str(x + 1, y, &format!("SCORE  {score}"), style.bold());
        let speed_text = format!("SPEED  {speed:.1}");
        let sx = x + w - 1 - speed_text.chars().count() as i32;
        self.fb.put_str(sx, y, &speed_text, style);
    }

    fn draw_overlay(&mut self, lines: &[OverlayLine]) {
        let texts: Vec<String> = lines.iter().map(styled_text).collect();
        let inner_w = texts.iter().map(|t| t.chars().count()).max().unwrap_or(0) as i32;
        let box_w = inner_w + 6;
        let box_h = lines.len() as i32 + 2;

        let (cx, cy) = match self.layout {
            Some(l) => (l.origin_x + l.width() / 2, l.origin_y + l.rows / 2),
            None => (self.fb.width() as i32 / 2, self.fb.height() as i32 / 2),
        };
        let left = cx - box_w / 2;
        let top = cy - box_h / 2;

        let panel = CellStyle::new(COLOR_HUD_TEXT, COLOR_HUD_BG);
        self.fb.fill_rect(left, top, box_w, box_h, ' ', panel);

        for (i, (line, text)) in lines.iter().zip(&texts).enumerate() {
            let mut style = CellStyle::new(tone_color(line.tone), COLOR_HUD_BG);
            if matches!(line.size, TextSize::Huge | TextSize::Large) {
                style = style.bold();
            }
            let len = text.chars().count() as i32;
            self.fb.put_str(cx - len / 2, top + 1 + i as i32, text, style);
        }
    }
}
