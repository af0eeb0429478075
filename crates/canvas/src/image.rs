use crate::{pdf, png, svg, Drawing};
use std::io::Write;
use std::path::Path;

/// Renders the drawing in the format implied by the extension of `path`.
/// The image is rendered in memory and moved into place only once complete.
pub fn generate(drawing: &Drawing, path: &Path) -> Result<(), String> {
    if let Some(extension) = path.extension().and_then(|ext| ext.to_str()) {
        let svg_content = svg::generate_string(drawing);
        let bytes = match FileType::from_extension(extension) {
            Some(FileType::Svg) => svg_content.into_bytes(),
            Some(FileType::Png) => png::render_from_string(&svg_content)?,
            Some(FileType::Pdf) => pdf::render_from_string(&svg_content)?,
            None => return Err(format!("Unsupported file extension: {extension:?}")),
        };
        persist(&bytes, path)
    } else {
        Err(format!("Failed to get extension from path: {path:?}"))
    }
}

fn persist(bytes: &[u8], path: &Path) -> Result<(), String> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = tempfile::NamedTempFile::new_in(dir).map_err(|e| e.to_string())?;
    file.write_all(bytes).map_err(|e| e.to_string())?;
    file.persist(path).map_err(|e| e.to_string())?;
    Ok(())
}

#[derive(Debug, PartialEq)]
enum FileType {
    Svg,
    Png,
    Pdf,
}

impl FileType {
    fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_lowercase().as_str() {
            "svg" => Some(FileType::Svg),
            "png" => Some(FileType::Png),
            "pdf" => Some(FileType::Pdf),
            _ => None,
        }
    }
}
