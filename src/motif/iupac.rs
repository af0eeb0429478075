//! IUPAC nucleotide ambiguity codes. T and U are interchangeable.

use crate::utils::{Error, Result};

/// Literal bases represented by a lowercase IUPAC symbol
pub fn lookup(symbol: char) -> Result<&'static [char]> {
    let bases: &'static [char] = match symbol {
        'a' => &['a'],
        'c' => &['c'],
        'g' => &['g'],
        't' => &['t', 'u'],
        'u' => &['u', 't'],
        'w' => &['a', 't', 'u'],
        's' => &['c', 'g'],
        'm' => &['a', 'c'],
        'k' => &['g', 't', 'u'],
        'r' => &['a', 'g'],
        'y' => &['c', 't', 'u'],
        'b' => &['c', 'g', 't', 'u'],
        'd' => &['a', 'g', 't', 'u'],
        'h' => &['a', 'c', 't', 'u'],
        'v' => &['a', 'c', 'g'],
        'n' => &['a', 'c', 'g', 't', 'u'],
        _ => return Err(Error::UnknownSymbol(symbol)),
    };
    Ok(bases)
}
