//! Colors for each dark/glass combination
//!
//! Colors are packed `0xRRGGBBAA` so the shell can hand them straight to
//! its renderer.

/// Resolved colors for one visual mode
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Window background behind every surface
    pub background: u32,
    /// Cards, sidebar and header fill
    pub surface: u32,
    pub border: u32,
    pub foreground: u32,
    pub muted_foreground: u32,
    /// Brand accent (active nav item, primary buttons)
    pub accent: u32,
    /// Backdrop blur radius in pixels; zero when glass mode is off
    pub blur: f32,
}

const ACCENT: u32 = 0x5b6ce2ff;
const GLASS_BLUR: f32 = 20.0;

impl Palette {
    /// The palette for a (dark, glass) combination
    pub fn resolve(dark: bool, glass: bool) -> Self {
        match (dark, glass) {
            (false, false) => Self {
                background: 0xf5f7faff,
                surface: 0xffffffff,
                border: 0x0000000d,
                foreground: 0x1e1e2fff,
                muted_foreground: 0x6b6b80ff,
                accent: ACCENT,
                blur: 0.0,
            },
            (false, true) => Self {
                background: 0xc3cfe2ff,
                surface: 0xffffff8c,
                border: 0xffffff66,
                foreground: 0x1e1e2fff,
                muted_foreground: 0x5a5a70ff,
                accent: ACCENT,
                blur: GLASS_BLUR,
            },
            (true, false) => Self {
                background: 0x121214ff,
                surface: 0x1c1c1fff,
                border: 0xffffff14,
                foreground: 0xf5f5f7ff,
                muted_foreground: 0x9a9aa8ff,
                accent: ACCENT,
                blur: 0.0,
            },
            (true, true) => Self {
                background: 0x1a1a2eff,
                surface: 0x2d2d3799,
                border: 0xffffff33,
                foreground: 0xf5f5f7ff,
                muted_foreground: 0xa8a8ccff,
                accent: ACCENT,
                blur: GLASS_BLUR,
            },
        }
    }

    /// Alpha channel of the surface color (0.0 - 1.0)
    pub fn surface_opacity(&self) -> f32 {
        (self.surface & 0xff) as f32 / 255.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_combinations_distinct() {
        let palettes = [
            Palette::resolve(false, false),
            Palette::resolve(false, true),
            Palette::resolve(true, false),
            Palette::resolve(true, true),
        ];
        for (i, a) in palettes.iter().enumerate() {
            for b in palettes.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_resolve_is_deterministic() {
        assert_eq!(Palette::resolve(true, true), Palette::resolve(true, true));
    }

    #[test]
    fn test_glass_is_translucent_and_blurred() {
        let glass = Palette::resolve(false, true);
        assert!(glass.blur > 0.0);
        assert!(glass.surface_opacity() < 1.0);

        let flat = Palette::resolve(false, false);
        assert_eq!(flat.blur, 0.0);
        assert_eq!(flat.surface_opacity(), 1.0);
    }
}
