//! Tests for built-in palettes and palette source fallbacks

#[cfg(test)]
mod tests {
    use mandala::canvas::color::Color;
    use mandala::palette::ordered::Palette;
    use mandala::palette::presets::{DEFAULT_MANUAL, PASTEL, PaletteSource, VIBRANT};

    // Tests the built-in tables have the documented sizes and are opaque
    #[test]
    fn test_builtin_tables() {
        assert_eq!(VIBRANT.len(), 12);
        assert_eq!(PASTEL.len(), 8);
        assert_eq!(DEFAULT_MANUAL.len(), 3);
        assert!(VIBRANT.iter().chain(&PASTEL).all(|c| c.alpha >= 1.0));
    }

    // Tests built-in sources resolve to their tables
    #[test]
    fn test_resolve_builtin() {
        assert_eq!(PaletteSource::Vibrant.resolve().colors(), &VIBRANT[..]);
        assert_eq!(PaletteSource::Pastel.resolve().colors(), &PASTEL[..]);
    }

    // Tests empty custom palettes fall back to their defaults
    // Verified by swapping the two fallbacks
    #[test]
    fn test_resolve_empty_custom_fallbacks() {
        assert_eq!(
            PaletteSource::CustomImage(Palette::default())
                .resolve()
                .colors(),
            &VIBRANT[..]
        );
        assert_eq!(
            PaletteSource::CustomManual(Palette::default())
                .resolve()
                .colors(),
            &DEFAULT_MANUAL[..]
        );
    }

    // Tests non-empty custom palettes are used as given
    #[test]
    fn test_resolve_custom() {
        let palette = Palette::from(vec![Color::BLACK]);
        assert_eq!(
            PaletteSource::CustomManual(palette.clone()).resolve(),
            palette
        );
        assert_eq!(PaletteSource::CustomImage(palette.clone()).resolve(), palette);
    }

    // Tests built-in names parse case-insensitively
    #[test]
    fn test_from_str() {
        assert_eq!(
            "Pastel".parse::<PaletteSource>().ok(),
            Some(PaletteSource::Pastel)
        );
        assert_eq!(
            "vibrant".parse::<PaletteSource>().ok(),
            Some(PaletteSource::Vibrant)
        );
        assert!("neon".parse::<PaletteSource>().is_err());
    }
}
