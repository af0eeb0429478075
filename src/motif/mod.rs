pub mod iupac;
mod matcher;

pub use matcher::{find_occurrences, MotifMatcher};

use crate::layout::palette;
use crate::utils::Result;
use canvas::Color;

/// A motif from the motif list, colored by its position in the list
#[derive(Debug, Clone)]
pub struct Motif {
    pub pattern: String,
    pub color: Color,
    matcher: MotifMatcher,
}

impl Motif {
    /// `index` is the 0-based position of the motif in the input list
    pub fn new(pattern: &str, index: usize) -> Result<Self> {
        let color = palette(index + 1)?;
        let matcher = MotifMatcher::new(pattern)?;
        Ok(Self {
            pattern: pattern.to_string(),
            color,
            matcher,
        })
    }

    pub fn len(&self) -> usize {
        self.matcher.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matcher.is_empty()
    }

    pub fn find_all(&self, bases: &str) -> Vec<usize> {
        self.matcher.find_all(bases)
    }
}
