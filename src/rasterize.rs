use anyhow::Context;
use resvg::{
    tiny_skia::Pixmap,
    usvg::{fontdb::Database, Options, Transform, Tree},
};
use std::sync::Arc;

/// Probe rendered once at startup to confirm the rasterizer works before any
/// file is touched.
const PROBE_SVG: &[u8] = br#"<svg xmlns="http://www.w3.org/2000/svg" width="1" height="1"/>"#;

/// Renders SVG bytes into a square PNG with the given edge length.
pub trait Rasterizer {
    fn rasterize(&self, svg: &[u8], size: u32) -> anyhow::Result<Vec<u8>>;
}

pub struct ResvgRasterizer {
    fontdb: Arc<Database>,
}

impl ResvgRasterizer {
    /// Fails if the rendering pipeline cannot produce a PNG at all, which is
    /// the only fatal condition this tool has.
    pub fn new() -> anyhow::Result<Self> {
        let mut db = Database::new();
        db.load_system_fonts();

        let rasterizer = Self {
            fontdb: Arc::new(db),
        };

        rasterizer
            .rasterize(PROBE_SVG, 1)
            .context("Rasterizer failed its startup probe")?;

        Ok(rasterizer)
    }
}

impl Rasterizer for ResvgRasterizer {
    fn rasterize(&self, svg: &[u8], size: u32) -> anyhow::Result<Vec<u8>> {
        let opt = Options {
            fontdb: self.fontdb.clone(),
            ..Default::default()
        };

        let tree = Tree::from_data(svg, &opt).context("Failed to parse SVG file")?;
        let tree_size = tree.size();

        // Both axes scale to the target edge, so a non-square source is
        // stretched rather than letterboxed.
        let transform = Transform::from_scale(
            size as f32 / tree_size.width(),
            size as f32 / tree_size.height(),
        );

        let mut pixmap = Pixmap::new(size, size).context("Failed to create pixmap")?;
        resvg::render(&tree, transform, &mut pixmap.as_mut());

        pixmap.encode_png().context("Failed to encode PNG")
    }
}
