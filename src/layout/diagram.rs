use super::color::MARK_ALPHA;
use super::legend::get_legend;
use crate::motif::Motif;
use crate::seq::Sequence;
use crate::utils::{Error, Result};
use canvas::{Color, DrawOp, Drawing};
use std::ops::Range;

/// One pixel per base, starting at the left margin
pub const X0: f64 = 50.0;
pub const Y0: f64 = 100.0;
pub const ROW_HEIGHT: f64 = 100.0;
pub const CANVAS_WIDTH: u32 = 1100;
const LEGEND_HEIGHT: u32 = 300;

pub(super) const FONT_SIZE: f64 = 15.0;
const LABEL_RISE: f64 = 40.0;
const INTRON_WIDTH: f64 = 10.0;
const EXON_WIDTH: f64 = 40.0;
const MARK_WIDTH: f64 = 50.0;

pub fn canvas_height(sequence_count: usize) -> Result<u32> {
    u32::try_from(sequence_count)
        .ok()
        .and_then(|count| count.checked_mul(ROW_HEIGHT as u32))
        .and_then(|rows| rows.checked_add(LEGEND_HEIGHT))
        .ok_or_else(|| {
            Error::MalformedInput(format!(
                "Too many sequences to fit in one image: {}",
                sequence_count
            ))
        })
}

/// Baseline of the row for the sequence at 0-based position `index`
pub fn row_y(index: usize) -> f64 {
    Y0 + ROW_HEIGHT * index as f64
}

/// Lays out every sequence row, every motif occurrence, and the legend.
/// All sequences are checked before anything is drawn.
pub fn plot_motifs(sequences: &[Sequence], motifs: &[Motif]) -> Result<Drawing> {
    let exon_spans = sequences
        .iter()
        .map(|seq| {
            seq.exon_span()
                .ok_or_else(|| Error::NoExonFound(seq.header().to_string()))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut drawing = Drawing::new(CANVAS_WIDTH, canvas_height(sequences.len())?);

    for (index, (seq, exon_span)) in sequences.iter().zip(exon_spans).enumerate() {
        plot_structure(&mut drawing, index, seq, exon_span);
    }

    drawing.push(DrawOp::SetLineWidth(MARK_WIDTH));
    for motif in motifs {
        drawing.push(DrawOp::SetColor(motif.color.with_alpha(MARK_ALPHA)));
        for (index, seq) in sequences.iter().enumerate() {
            plot_occurrences(&mut drawing, index, seq, motif);
        }
    }

    get_legend(motifs, sequences.len()).draw(&mut drawing);
    Ok(drawing)
}

fn plot_structure(drawing: &mut Drawing, index: usize, seq: &Sequence, exon_span: Range<usize>) {
    let y = row_y(index);
    let end = X0 + seq.len() as f64;
    if end > CANVAS_WIDTH as f64 {
        log::warn!(
            "Sequence {} ({} bp) extends past the right edge of the image",
            seq.header(),
            seq.len()
        );
    }

    drawing.push(DrawOp::SetColor(Color::BLACK));
    drawing.push(DrawOp::SetFontSize(FONT_SIZE));
    drawing.push(DrawOp::Text {
        pos: (X0, y - LABEL_RISE),
        text: seq.header().to_string(),
    });

    drawing.push(DrawOp::SetLineWidth(INTRON_WIDTH));
    drawing.push(DrawOp::Line {
        from: (X0, y),
        to: (end, y),
    });

    drawing.push(DrawOp::SetLineWidth(EXON_WIDTH));
    drawing.push(DrawOp::Line {
        from: (X0 + exon_span.start as f64, y),
        to: (X0 + exon_span.end as f64, y),
    });
}

// Occurrences of every motif share the row baseline and may overlap
fn plot_occurrences(drawing: &mut Drawing, index: usize, seq: &Sequence, motif: &Motif) {
    let y = row_y(index);
    let offsets = motif.find_all(seq.bases());
    log::debug!(
        "{}: {} occurrences of {}",
        seq.header(),
        offsets.len(),
        motif.pattern
    );

    for offset in offsets {
        let start = X0 + offset as f64;
        drawing.push(DrawOp::Line {
            from: (start, y),
            to: (start + motif.len() as f64, y),
        });
    }
}
