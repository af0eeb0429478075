use motif_mark::cli::MarkArgs;
use motif_mark::commands::mark::motif_mark;
use motif_mark::utils::Error;
use std::fs;
use std::path::{Path, PathBuf};

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

fn args(fasta_path: PathBuf, motif_path: Option<PathBuf>, output_path: Option<PathBuf>) -> MarkArgs {
    MarkArgs {
        fasta_path,
        motif_path,
        output_path,
        font_family: None,
    }
}

fn png_dimensions(path: &Path) -> (u32, u32) {
    let bytes = fs::read(path).unwrap();
    assert_eq!(&bytes[1..4], b"PNG");
    let width = u32::from_be_bytes([bytes[16], bytes[17], bytes[18], bytes[19]]);
    let height = u32::from_be_bytes([bytes[20], bytes[21], bytes[22], bytes[23]]);
    (width, height)
}

#[test]
fn png_is_named_after_fasta() {
    let dir = tempfile::tempdir().unwrap();
    let fasta = write(
        dir.path(),
        "Figure_1.fasta",
        ">seq1\nacgtACGTacgt\n>seq2 second\nttttGGGGGGcc\naaaa\n",
    );
    let motifs = write(dir.path(), "motifs.txt", "ac\nYGCY\n");

    let output = motif_mark(args(fasta, Some(motifs), None)).unwrap();
    assert_eq!(output, dir.path().join("Figure_1.png"));
    assert_eq!(png_dimensions(&output), (1100, 500));
}

#[test]
fn png_labels_are_rendered() {
    let dir = tempfile::tempdir().unwrap();
    let fasta = write(dir.path(), "seqs.fa", ">seq1\nacgtACGTacgt\n");
    let motifs = write(dir.path(), "motifs.txt", "ac\n");

    let output = motif_mark(args(fasta, Some(motifs), None)).unwrap();
    let pixmap = resvg::tiny_skia::Pixmap::decode_png(&fs::read(&output).unwrap()).unwrap();

    // the header label sits above the row; nothing else is drawn there
    let label_pixels = (40..66)
        .flat_map(|y| (50..120).map(move |x| (x, y)))
        .filter(|&(x, y)| pixmap.pixel(x, y).unwrap().red() < 128)
        .count();
    assert!(label_pixels > 0);
}

#[test]
fn svg_shows_every_occurrence() {
    let dir = tempfile::tempdir().unwrap();
    let fasta = write(dir.path(), "seqs.fa", ">seq1\nacgtACGTacgt\n");
    let motifs = write(dir.path(), "motifs.txt", "ac\n");
    let image = dir.path().join("marks.svg");

    motif_mark(args(fasta, Some(motifs), Some(image.clone()))).unwrap();
    let svg = fs::read_to_string(&image).unwrap();

    assert!(svg.contains(r#"width="1100" height="400""#));
    for (x1, x2) in [(50, 52), (54, 56), (58, 60)] {
        let mark = format!(r#"x1="{}" y1="100" x2="{}" y2="100""#, x1, x2);
        assert!(svg.contains(&mark), "missing mark {}", mark);
    }
    assert!(svg.contains(r#"x1="54" y1="100" x2="58" y2="100""#));
    for label in [">seq1<", ">ac<", ">Intron<", ">Exon<", ">Legend<"] {
        assert!(svg.contains(label), "missing label {}", label);
    }
}

#[test]
fn motif_file_is_optional() {
    let dir = tempfile::tempdir().unwrap();
    let fasta = write(dir.path(), "seqs.fa", ">seq1\nacgtACGTacgt\n");
    let image = dir.path().join("plain.svg");

    motif_mark(args(fasta, None, Some(image.clone()))).unwrap();
    let svg = fs::read_to_string(&image).unwrap();
    assert!(svg.contains(">Intron<"));
    // only the exon legend swatch is this wide when there are no motif marks
    assert_eq!(svg.matches(r#"stroke-width="50""#).count(), 1);
}

#[test]
fn too_many_motifs_leaves_no_image() {
    let dir = tempfile::tempdir().unwrap();
    let fasta = write(dir.path(), "seqs.fa", ">seq1\nacgtACGTacgt\n");
    let motifs = write(dir.path(), "motifs.txt", "a\nc\ng\nt\nn\nr\n");
    let image = dir.path().join("seqs.png");

    let result = motif_mark(args(fasta, Some(motifs), Some(image.clone())));
    assert_eq!(result, Err(Error::TooManyMotifs { count: 6, max: 5 }));
    assert!(!image.exists());
}

#[test]
fn sequence_without_exon_leaves_no_image() {
    let dir = tempfile::tempdir().unwrap();
    let fasta = write(dir.path(), "seqs.fa", ">seq1\nacgtACGTacgt\n>intronic\nacgtacgt\n");
    let image = dir.path().join("seqs.png");

    let result = motif_mark(args(fasta, None, Some(image.clone())));
    assert_eq!(result, Err(Error::NoExonFound("intronic".to_string())));
    assert!(!image.exists());
}

#[test]
fn unknown_symbol_leaves_no_image() {
    let dir = tempfile::tempdir().unwrap();
    let fasta = write(dir.path(), "seqs.fa", ">seq1\nacgtACGTacgt\n");
    let motifs = write(dir.path(), "motifs.txt", "ac\nzz\n");
    let image = dir.path().join("seqs.png");

    let result = motif_mark(args(fasta, Some(motifs), Some(image.clone())));
    assert_eq!(result, Err(Error::UnknownSymbol('z')));
    assert!(!image.exists());
}
