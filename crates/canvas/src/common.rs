use usvg::Tree;

/// Bundled face backing both the default family and the generic `sans-serif`
pub const DEFAULT_FONT_FAMILY: &str = "DejaVu Sans";

pub fn prepare_svg_tree(svg_data: &[u8]) -> Result<Tree, String> {
    let mut options = usvg::Options::default();
    let db = options.fontdb_mut();
    db.load_font_data(include_bytes!("../assets/fonts/DejaVuSans.ttf").to_vec());
    db.load_system_fonts();
    db.set_sans_serif_family(DEFAULT_FONT_FAMILY);
    let tree = usvg::Tree::from_data(svg_data, &options).map_err(|e| e.to_string())?;
    Ok(tree)
}
