use crate::cli::MarkArgs;
use crate::layout::plot_motifs;
use crate::utils::{read_fasta, read_motifs, Error, Result};
use canvas::generate_image;
use std::path::{Path, PathBuf};

pub fn motif_mark(args: MarkArgs) -> Result<PathBuf> {
    let sequences = read_fasta(&args.fasta_path)?;
    log::info!(
        "Loaded {} sequences from {}",
        sequences.len(),
        args.fasta_path.display()
    );

    let motifs = match &args.motif_path {
        Some(path) => read_motifs(path)?,
        None => {
            log::warn!("No motif file given; only exons and introns will be drawn");
            Vec::new()
        }
    };
    log::info!("Loaded {} motifs", motifs.len());

    let mut drawing = plot_motifs(&sequences, &motifs)?;
    if let Some(font_family) = &args.font_family {
        drawing.set_font_family(font_family);
    }

    let output_path = args
        .output_path
        .unwrap_or_else(|| default_image_path(&args.fasta_path));
    generate_image(&drawing, &output_path).map_err(Error::Render)?;
    log::info!("Wrote {}", output_path.display());
    Ok(output_path)
}

/// `dir/seqs.fasta.gz` becomes `dir/seqs.png`
pub fn default_image_path(fasta_path: &Path) -> PathBuf {
    let mut prefix = fasta_path.to_path_buf();
    if matches!(
        prefix
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())
            .as_deref(),
        Some("gz") | Some("gzip")
    ) {
        prefix.set_extension("");
    }
    prefix.set_extension("png");
    prefix
}
