/*!
This crate renders flat 2D drawings described as an ordered list of drawing
instructions: pen state changes (color, line width, font size), stroked line
segments, stroked rectangles, and text anchored at a baseline point. Drawings
are rendered as SVG, PNG, or PDF images.

Instructions are consumed in emission order, so later strokes paint over
earlier ones.
*/

mod common;
mod draw;
mod image;
mod pdf;
mod png;
mod svg;

pub use draw::{Color, DrawOp, Drawing, Pen, Point, Stroke};
pub use image::generate as generate_image;
