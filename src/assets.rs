//! Drawable surfaces for the presentation layer
//!
//! The simulation never touches pixels; it only promises that exactly four
//! fixed-size rasters exist. A frontend supplies real images through an
//! [`AssetProvider`]; anything it can't produce (or produces at the wrong
//! size) degrades to a flat-color placeholder with the declared dimensions,
//! so gameplay is identical with or without art.

use crate::consts::*;

/// 8-bit RGBA
pub type Rgba = [u8; 4];

/// A fixed-size 2D raster, row-major, one [`Rgba`] per pixel
#[derive(Debug, Clone)]
pub struct Sprite {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Rgba>,
}

impl Sprite {
    /// A single-color sprite of the given size
    pub fn solid(width: u32, height: u32, color: Rgba) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; (width * height) as usize],
        }
    }
}

/// The four surfaces a frontend draws
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Background,
    Flyer,
    GateTop,
    GateBottom,
}

impl AssetKind {
    pub const ALL: [AssetKind; 4] = [
        AssetKind::Background,
        AssetKind::Flyer,
        AssetKind::GateTop,
        AssetKind::GateBottom,
    ];

    /// Contractual size; providers must match it
    pub fn dimensions(self) -> (u32, u32) {
        match self {
            AssetKind::Background => (BOARD_WIDTH as u32, BOARD_HEIGHT as u32),
            AssetKind::Flyer => (FLYER_WIDTH as u32, FLYER_HEIGHT as u32),
            AssetKind::GateTop | AssetKind::GateBottom => {
                (GATE_WIDTH as u32, GATE_HEIGHT as u32)
            }
        }
    }

    /// Placeholder tint: sky, gold, green
    fn placeholder_color(self) -> Rgba {
        match self {
            AssetKind::Background => [135, 206, 235, 255],
            AssetKind::Flyer => [255, 215, 0, 255],
            AssetKind::GateTop | AssetKind::GateBottom => [0, 160, 60, 255],
        }
    }

    fn placeholder(self) -> Sprite {
        let (w, h) = self.dimensions();
        Sprite::solid(w, h, self.placeholder_color())
    }
}

/// Source of real art. `None` means "use the placeholder".
pub trait AssetProvider {
    fn load(&mut self, kind: AssetKind) -> Option<Sprite>;
}

impl<F> AssetProvider for F
where
    F: FnMut(AssetKind) -> Option<Sprite>,
{
    fn load(&mut self, kind: AssetKind) -> Option<Sprite> {
        self(kind)
    }
}

/// The resolved set of surfaces, one per [`AssetKind`]
#[derive(Debug, Clone)]
pub struct AssetCatalog {
    pub background: Sprite,
    pub flyer: Sprite,
    pub gate_top: Sprite,
    pub gate_bottom: Sprite,
}

impl AssetCatalog {
    /// All placeholders; the game is fully playable like this
    pub fn placeholder() -> Self {
        Self::from_provider(&mut |_: AssetKind| None::<Sprite>)
    }

    /// Resolve every surface through `provider`, falling back per asset
    pub fn from_provider(provider: &mut impl AssetProvider) -> Self {
        Self {
            background: resolve(AssetKind::Background, provider),
            flyer: resolve(AssetKind::Flyer, provider),
            gate_top: resolve(AssetKind::GateTop, provider),
            gate_bottom: resolve(AssetKind::GateBottom, provider),
        }
    }

    pub fn get(&self, kind: AssetKind) -> &Sprite {
        match kind {
            AssetKind::Background => &self.background,
            AssetKind::Flyer => &self.flyer,
            AssetKind::GateTop => &self.gate_top,
            AssetKind::GateBottom => &self.gate_bottom,
        }
    }
}

fn resolve(kind: AssetKind, provider: &mut impl AssetProvider) -> Sprite {
    let (want_w, want_h) = kind.dimensions();
    match provider.load(kind) {
        Some(sprite) if (sprite.width, sprite.height) == (want_w, want_h) => sprite,
        Some(sprite) => {
            log::warn!(
                "asset {kind:?} is {}x{}, expected {want_w}x{want_h}; using placeholder",
                sprite.width,
                sprite.height
            );
            kind.placeholder()
        }
        None => {
            log::warn!("asset {kind:?} unavailable, using placeholder");
            kind.placeholder()
        }
    }
}
