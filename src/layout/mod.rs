mod color;
mod diagram;
mod legend;

pub use color::{palette, MARK_ALPHA, PALETTE_SIZE};
pub use diagram::{canvas_height, plot_motifs, row_y, CANVAS_WIDTH, ROW_HEIGHT, X0, Y0};
pub use legend::{get_legend, Legend, LegendEntry};
