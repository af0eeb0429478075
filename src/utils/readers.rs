use super::{Error, Result};
use crate::motif::Motif;
use crate::seq::{parse_fasta, Sequence};
use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{BufRead, BufReader, Read as ioRead};
use std::path::Path;

pub fn open_reader(path: &Path) -> Result<BufReader<Box<dyn ioRead>>> {
    fn is_gzipped(path: &Path) -> bool {
        let path_str = path.to_string_lossy().to_lowercase();
        path_str.ends_with(".gz") || path_str.ends_with(".gzip")
    }
    let file = File::open(path)
        .map_err(|e| Error::Io(format!("Failed to open {}: {}", path.display(), e)))?;
    if is_gzipped(path) {
        let gz_decoder = MultiGzDecoder::new(file);
        if gz_decoder.header().is_some() {
            Ok(BufReader::new(Box::new(gz_decoder)))
        } else {
            Err(Error::MalformedInput(format!(
                "Invalid gzip header: {}",
                path.to_string_lossy()
            )))
        }
    } else {
        Ok(BufReader::new(Box::new(file)))
    }
}

pub fn read_fasta(path: &Path) -> Result<Vec<Sequence>> {
    parse_fasta(open_reader(path)?)
}

pub fn read_motifs(path: &Path) -> Result<Vec<Motif>> {
    parse_motifs(open_reader(path)?)
}

/// One motif per line; blank lines are skipped. Colors follow line order.
fn parse_motifs<R: BufRead>(reader: R) -> Result<Vec<Motif>> {
    let mut motifs = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let pattern = line.trim();
        if pattern.is_empty() {
            continue;
        }
        motifs.push(Motif::new(pattern, motifs.len())?);
    }
    Ok(motifs)
}
