mod readers;
mod util;

pub use readers::{open_reader, read_fasta, read_motifs};
pub use util::{handle_error_and_exit, Error, Result};
