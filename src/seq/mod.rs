mod fasta;
mod sequence;

pub use fasta::parse_fasta;
pub use sequence::Sequence;
