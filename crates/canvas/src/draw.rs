use crate::common::DEFAULT_FONT_FAMILY;
use std::fmt;

pub type Point = (f64, f64);

/// RGBA color with every channel in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);

    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: 1.0,
        }
    }

    pub fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        let to_byte = |channel: f64| (channel.clamp(0.0, 1.0) * 255.0).round() as u8;
        write!(
            formatter,
            "#{:02X}{:02X}{:02X}",
            to_byte(self.red),
            to_byte(self.green),
            to_byte(self.blue)
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    SetColor(Color),
    SetLineWidth(f64),
    SetFontSize(f64),
    /// Move to `from`, line to `to`, and stroke with the current pen
    Line { from: Point, to: Point },
    /// Stroked (unfilled) rectangle
    Rect {
        origin: Point,
        width: f64,
        height: f64,
    },
    /// Text whose baseline starts at `pos`
    Text { pos: Point, text: String },
}

/// Drawing state carried between instructions
#[derive(Debug, Clone, PartialEq)]
pub struct Pen {
    pub color: Color,
    pub line_width: f64,
    pub font_size: f64,
}

impl Default for Pen {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            line_width: 2.0,
            font_size: 10.0,
        }
    }
}

impl Pen {
    /// Applies a state instruction; returns false for instructions that paint
    pub fn apply(&mut self, op: &DrawOp) -> bool {
        match op {
            DrawOp::SetColor(color) => self.color = *color,
            DrawOp::SetLineWidth(width) => self.line_width = *width,
            DrawOp::SetFontSize(size) => self.font_size = *size,
            DrawOp::Line { .. } | DrawOp::Rect { .. } | DrawOp::Text { .. } => return false,
        }
        true
    }
}

/// A line segment resolved against the pen state at the time it was drawn
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub from: Point,
    pub to: Point,
    pub width: f64,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Drawing {
    pub width: u32,
    pub height: u32,
    pub font_family: String,
    pub ops: Vec<DrawOp>,
}

impl Drawing {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            ops: Vec::new(),
        }
    }

    pub fn push(&mut self, op: DrawOp) {
        self.ops.push(op);
    }

    pub fn set_font_family(&mut self, font_family: &str) {
        self.font_family = font_family.to_string();
    }

    pub fn strokes(&self) -> Vec<Stroke> {
        let mut pen = Pen::default();
        let mut strokes = Vec::new();
        for op in &self.ops {
            if pen.apply(op) {
                continue;
            }
            if let DrawOp::Line { from, to } = op {
                strokes.push(Stroke {
                    from: *from,
                    to: *to,
                    width: pen.line_width,
                    color: pen.color,
                });
            }
        }
        strokes
    }

    pub fn texts(&self) -> Vec<(Point, &str)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { pos, text } => Some((*pos, text.as_str())),
                _ => None,
            })
            .collect()
    }
}
