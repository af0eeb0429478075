use super::color::{MARK_ALPHA, PALETTE_SIZE};
use super::diagram::{row_y, FONT_SIZE, X0};
use crate::motif::Motif;
use canvas::{Color, DrawOp, Drawing, Point};

/// Horizontal space reserved for each legend entry
pub const SLOT_WIDTH: f64 = 150.0;
const SWATCH_LEN: f64 = 30.0;
const LABEL_OFFSET: f64 = 35.0;
const MOTIF_SWATCH_WIDTH: f64 = 30.0;
const INTRON_SWATCH_WIDTH: f64 = 10.0;
const EXON_SWATCH_WIDTH: f64 = 50.0;
const STRUCTURE_ROW_OFFSET: f64 = 70.0;
const TITLE_FONT_SIZE: f64 = 20.0;
const TITLE_RISE: f64 = 40.0;
const BOX_PAD: f64 = 10.0;
const BOX_RISE: f64 = 60.0;
const BOX_HEIGHT: f64 = 200.0;

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: Color,
    pub swatch_width: f64,
    /// Left end of the swatch
    pub pos: Point,
}

impl LegendEntry {
    pub fn slot(&self) -> (f64, f64) {
        (self.pos.0, self.pos.0 + SLOT_WIDTH)
    }

    fn draw(&self, drawing: &mut Drawing) {
        let (x, y) = self.pos;
        drawing.push(DrawOp::SetColor(self.color));
        drawing.push(DrawOp::SetLineWidth(self.swatch_width));
        drawing.push(DrawOp::Line {
            from: (x, y),
            to: (x + SWATCH_LEN, y),
        });
        drawing.push(DrawOp::SetColor(Color::BLACK));
        drawing.push(DrawOp::SetFontSize(FONT_SIZE));
        drawing.push(DrawOp::Text {
            pos: (x + LABEL_OFFSET, y),
            text: self.label.clone(),
        });
    }
}

/// Motif entries run left to right along the top of the block;
/// the intron and exon entries sit on a second row below them
#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    pub ypos: f64,
    pub entries: Vec<LegendEntry>,
}

pub fn get_legend(motifs: &[Motif], sequence_count: usize) -> Legend {
    let ypos = row_y(sequence_count);
    let mut entries = Vec::new();

    for (index, motif) in motifs.iter().enumerate() {
        entries.push(LegendEntry {
            label: motif.pattern.clone(),
            color: motif.color.with_alpha(MARK_ALPHA),
            swatch_width: MOTIF_SWATCH_WIDTH,
            pos: (X0 + SLOT_WIDTH * index as f64, ypos),
        });
    }

    let structure_y = ypos + STRUCTURE_ROW_OFFSET;
    entries.push(LegendEntry {
        label: "Intron".to_string(),
        color: Color::BLACK,
        swatch_width: INTRON_SWATCH_WIDTH,
        pos: (X0, structure_y),
    });
    entries.push(LegendEntry {
        label: "Exon".to_string(),
        color: Color::BLACK,
        swatch_width: EXON_SWATCH_WIDTH,
        pos: (X0 + SLOT_WIDTH, structure_y),
    });

    Legend { ypos, entries }
}

impl Legend {
    pub fn draw(&self, drawing: &mut Drawing) {
        for entry in &self.entries {
            entry.draw(drawing);
        }

        drawing.push(DrawOp::SetColor(Color::BLACK));
        drawing.push(DrawOp::SetLineWidth(1.0));
        drawing.push(DrawOp::Rect {
            origin: (X0 - BOX_PAD, self.ypos - BOX_RISE),
            width: SLOT_WIDTH * PALETTE_SIZE as f64 + BOX_PAD,
            height: BOX_HEIGHT,
        });
        drawing.push(DrawOp::SetFontSize(TITLE_FONT_SIZE));
        drawing.push(DrawOp::Text {
            pos: (X0, self.ypos - TITLE_RISE),
            text: "Legend".to_string(),
        });
    }
}
