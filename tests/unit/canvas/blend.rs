//! Tests for blend mode formulas and straight-alpha compositing

#[cfg(test)]
mod tests {
    use mandala::canvas::blend::{BlendMode, composite};

    const EPSILON: f64 = 1e-9;

    // Tests the separable blend functions at known points
    // Verified by swapping the overlay operands
    #[test]
    fn test_blend_channel_formulas() {
        assert!((BlendMode::Normal.blend_channel(0.2, 0.7) - 0.7).abs() < EPSILON);
        assert!((BlendMode::Multiply.blend_channel(0.5, 0.5) - 0.25).abs() < EPSILON);
        assert!((BlendMode::Screen.blend_channel(0.5, 0.5) - 0.75).abs() < EPSILON);
        // Overlay keys off the backdrop: dark backdrops multiply
        assert!((BlendMode::Overlay.blend_channel(0.25, 0.8) - 0.4).abs() < EPSILON);
        assert!((BlendMode::Overlay.blend_channel(0.75, 0.2) - 0.6).abs() < EPSILON);
    }

    // Tests a neutral soft-light source leaves the backdrop unchanged
    // Verified by using the simplified soft-light approximation
    #[test]
    fn test_soft_light_neutral_source() {
        for backdrop in [0.0, 0.1, 0.2, 0.5, 0.9, 1.0] {
            let blended = BlendMode::SoftLight.blend_channel(backdrop, 0.5);
            assert!((blended - backdrop).abs() < EPSILON);
        }
    }

    // Tests soft-light lightens with bright sources and darkens with dark ones
    #[test]
    fn test_soft_light_direction() {
        assert!(BlendMode::SoftLight.blend_channel(0.4, 0.9) > 0.4);
        assert!(BlendMode::SoftLight.blend_channel(0.4, 0.1) < 0.4);
        assert!((BlendMode::SoftLight.blend_channel(1.0, 0.9) - 1.0).abs() < EPSILON);
    }

    // Tests an opaque normal source replaces the backdrop
    #[test]
    fn test_composite_opaque_normal() {
        let result = composite(
            [1.0, 1.0, 1.0, 1.0],
            [0.2, 0.4, 0.6, 1.0],
            BlendMode::Normal,
        );
        for (actual, expected) in result.iter().zip([0.2, 0.4, 0.6, 1.0]) {
            assert!((actual - expected).abs() < EPSILON);
        }
    }

    // Tests a transparent source is a no-op
    #[test]
    fn test_composite_transparent_source() {
        let backdrop = [0.3, 0.3, 0.3, 0.8];
        assert_eq!(
            composite(backdrop, [1.0, 0.0, 0.0, 0.0], BlendMode::Multiply),
            backdrop
        );
    }

    // Tests source-over alpha and color on an empty backdrop
    // Verified by blending against the transparent backdrop color
    #[test]
    fn test_composite_over_transparent_backdrop() {
        let result = composite([0.0; 4], [1.0, 0.0, 0.0, 0.5], BlendMode::Multiply);
        assert!((result[0] - 1.0).abs() < EPSILON);
        assert!((result[3] - 0.5).abs() < EPSILON);
    }

    // Tests partial opacity mixes source and backdrop
    #[test]
    fn test_composite_half_opacity() {
        let result = composite(
            [1.0, 1.0, 1.0, 1.0],
            [0.0, 0.0, 0.0, 0.5],
            BlendMode::Normal,
        );
        assert!((result[0] - 0.5).abs() < EPSILON);
        assert!((result[3] - 1.0).abs() < EPSILON);
    }

    // Tests blend mode names parse with flexible separators
    #[test]
    fn test_blend_mode_from_str() {
        assert_eq!("soft-light".parse::<BlendMode>().ok(), Some(BlendMode::SoftLight));
        assert_eq!("SoftLight".parse::<BlendMode>().ok(), Some(BlendMode::SoftLight));
        assert_eq!("multiply".parse::<BlendMode>().ok(), Some(BlendMode::Multiply));
        assert!("dodge".parse::<BlendMode>().is_err());
        assert_eq!(BlendMode::default(), BlendMode::Normal);
    }
}
