//! Star palette.

use crate::core::rng::Rng;

/// The four star tints. Matches the CSS palette of the landing pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum StarColor {
    White = 0,
    Cyan,
    Violet,
    Silver,
}

impl StarColor {
    pub const ALL: [StarColor; 4] = [Self::White, Self::Cyan, Self::Violet, Self::Silver];

    pub fn random(rng: &mut Rng) -> Self {
        Self::ALL[rng.next_int(Self::ALL.len() as u32) as usize]
    }

    /// CSS colour string for Canvas 2D `fillStyle` / `strokeStyle`.
    pub fn css(&self) -> &'static str {
        match self {
            Self::White => "#ffffff",
            Self::Cyan => "#00f3ff",
            Self::Violet => "#bc13fe",
            Self::Silver => "#aaaaaa",
        }
    }

    pub fn rgb(&self) -> [u8; 3] {
        match self {
            Self::White => [0xff, 0xff, 0xff],
            Self::Cyan => [0x00, 0xf3, 0xff],
            Self::Violet => [0xbc, 0x13, 0xfe],
            Self::Silver => [0xaa, 0xaa, 0xaa],
        }
    }

    /// Linear 0..1 channels for GPU-side consumers of the instance buffer.
    pub fn rgb_f32(&self) -> [f32; 3] {
        let [r, g, b] = self.rgb();
        [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_is_from_palette() {
        let mut rng = Rng::new(42);
        for _ in 0..100 {
            assert!(StarColor::ALL.contains(&StarColor::random(&mut rng)));
        }
    }

    #[test]
    fn random_reaches_every_colour() {
        let mut rng = Rng::new(3);
        let mut seen = [false; 4];
        for _ in 0..200 {
            seen[StarColor::random(&mut rng) as usize] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn css_matches_rgb() {
        for color in StarColor::ALL {
            let [r, g, b] = color.rgb();
            assert_eq!(color.css(), format!("#{:02x}{:02x}{:02x}", r, g, b));
        }
    }
}
