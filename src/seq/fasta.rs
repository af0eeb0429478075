use super::Sequence;
use crate::utils::{Error, Result};
use itertools::Itertools;
use std::io::BufRead;

/// Reads every FASTA record, keeping the letter case of the bases intact
pub fn parse_fasta<R: BufRead>(reader: R) -> Result<Vec<Sequence>> {
    let mut records = Vec::new();
    let mut current: Option<(String, String)> = None;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(header) = line.strip_prefix('>') {
            if let Some((header, bases)) = current.take() {
                records.push(finish_record(header, bases)?);
            }
            current = Some((header.trim().to_string(), String::new()));
        } else {
            let (_, bases) = current.as_mut().ok_or_else(|| {
                Error::MalformedInput(format!(
                    "Sequence data before the first header at line {}",
                    index + 1
                ))
            })?;
            if !line.is_ascii() {
                return Err(Error::MalformedInput(format!(
                    "Non-ASCII sequence data at line {}",
                    index + 1
                )));
            }
            bases.push_str(line);
        }
    }

    if let Some((header, bases)) = current {
        records.push(finish_record(header, bases)?);
    }
    if records.is_empty() {
        return Err(Error::MalformedInput("FASTA file is empty".to_string()));
    }
    if let Some(header) = records.iter().map(|r| r.header()).duplicates().next() {
        return Err(Error::MalformedInput(format!(
            "Duplicate FASTA header: {}",
            header
        )));
    }

    Ok(records)
}

fn finish_record(header: String, bases: String) -> Result<Sequence> {
    if bases.is_empty() {
        return Err(Error::MalformedInput(format!(
            "Record has no sequence: {}",
            header
        )));
    }
    Ok(Sequence::new(header, bases))
}
