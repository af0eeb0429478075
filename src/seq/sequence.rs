use std::ops::Range;

/// A FASTA record whose letter case marks its structure:
/// uppercase bases form the exon, lowercase bases the flanking introns
#[derive(Debug, Clone, PartialEq)]
pub struct Sequence {
    header: String,
    bases: String,
}

impl Sequence {
    pub fn new(header: impl Into<String>, bases: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            bases: bases.into(),
        }
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn bases(&self) -> &str {
        &self.bases
    }

    pub fn len(&self) -> usize {
        self.bases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    /// Half-open interval of the first maximal run of uppercase A/C/G/T
    pub fn exon_span(&self) -> Option<Range<usize>> {
        let is_exon = |base: &u8| matches!(base, b'A' | b'C' | b'G' | b'T');
        let bases = self.bases.as_bytes();
        let start = bases.iter().position(is_exon)?;
        let len = bases[start..].iter().take_while(|b| is_exon(*b)).count();
        Some(start..start + len)
    }
}
