use crate::utils::{Error, Result};
use canvas::Color;

pub const PALETTE_SIZE: usize = 5;

/// Opacity of motif marks and their legend swatches
pub const MARK_ALPHA: f64 = 0.5;

static PALETTE: [Color; PALETTE_SIZE] = [
    Color::rgb(0.9, 0.1, 1.0),
    Color::rgb(0.0, 0.6, 1.0),
    Color::rgb(0.0, 0.9, 0.0),
    Color::rgb(0.9, 0.0, 0.0),
    Color::rgb(0.9, 0.2, 1.0),
];

/// Color of the motif at 1-based position `k` in the motif list
pub fn palette(k: usize) -> Result<Color> {
    match k.checked_sub(1).and_then(|index| PALETTE.get(index)) {
        Some(color) => Ok(*color),
        None if k == 0 => Err(Error::InvalidMotif(
            "motif positions start at 1".to_string(),
        )),
        None => Err(Error::TooManyMotifs {
            count: k,
            max: PALETTE_SIZE,
        }),
    }
}
