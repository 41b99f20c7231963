//! Straight-alpha "over" compositing.

use crate::settings::color::ColorRgba;

/// Composites `over` onto `under` with straight (non-premultiplied) alpha.
///
/// A fully opaque `over` is returned unchanged, skipping the blend entirely.
/// Channel arithmetic runs in floating point and is truncated, not rounded,
/// back to integer channels; golden outputs depend on that truncation.
pub fn composite(over: ColorRgba, under: ColorRgba) -> ColorRgba {
    if over.alpha() == 255 {
        return over;
    }

    let over_alpha = f64::from(over.alpha()) / 255.0;
    let under_alpha = f64::from(under.alpha()) / 255.0;
    let combined_alpha = over_alpha + under_alpha * (1.0 - over_alpha);

    ColorRgba::new(
        composite_channel(over.red(), over_alpha, under.red(), under_alpha),
        composite_channel(over.green(), over_alpha, under.green(), under_alpha),
        composite_channel(over.blue(), over_alpha, under.blue(), under_alpha),
        (combined_alpha * 255.0) as u8,
    )
}

fn composite_channel(over: u8, over_alpha: f64, under: u8, under_alpha: f64) -> u8 {
    let numerator = f64::from(over) * over_alpha + f64::from(under) * under_alpha * (1.0 - over_alpha);
    let denominator = over_alpha + under_alpha * (1.0 - over_alpha);

    if denominator == 0.0 || numerator == 0.0 {
        return 0;
    }

    (numerator / denominator) as u8
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn opaque_over_passes_through_for_any_under() {
        let over = ColorRgba::new(12, 34, 56, 255);
        for under in [
            ColorRgba::new(0, 0, 0, 0),
            ColorRgba::new(255, 255, 255, 255),
            ColorRgba::new(200, 100, 50, 25),
        ] {
            assert_eq!(composite(over, under), over);
        }
    }

    #[test]
    fn fully_transparent_over_fully_transparent_is_zeroed() {
        let result = composite(ColorRgba::new(10, 20, 30, 0), ColorRgba::new(40, 50, 60, 0));
        assert_eq!(result, ColorRgba::new(0, 0, 0, 0));
    }

    #[test]
    fn transparent_over_keeps_the_opaque_under_color() {
        let under = ColorRgba::new(40, 50, 60, 255);
        let result = composite(ColorRgba::new(10, 20, 30, 0), under);
        assert_eq!(result, ColorRgba::new(40, 50, 60, 255));
    }

    #[test]
    fn half_alpha_over_opaque_black_truncates_channels() {
        // alpha 128 -> aa = 128/255; white over black halves each channel.
        // 255 * aa / 1.0 = 128.0 exactly, alpha recovers to 255.
        let result =
            composite(ColorRgba::new(255, 255, 255, 128), ColorRgba::new(0, 0, 0, 255));
        assert_eq!(result, ColorRgba::new(128, 128, 128, 255));
    }

    #[test]
    fn uneven_blend_truncates_instead_of_rounding() {
        // aa = 100/255, ab = 1. numerator = 200*aa + 50*(1-aa), denominator = 1.
        // = (200*100 + 50*155) / 255 = 27750 / 255 = 108.82.. -> 108.
        let result =
            composite(ColorRgba::new(200, 0, 0, 100), ColorRgba::new(50, 0, 0, 255));
        assert_eq!(result.red(), 108);
        assert_eq!(result.alpha(), 255);
    }

    proptest! {
        #[test]
        fn composited_alpha_never_drops_below_either_input_layer(
            over_alpha in 0u8..=254,
            under_alpha in 0u8..=255,
        ) {
            let over = ColorRgba::new(1, 2, 3, over_alpha);
            let under = ColorRgba::new(4, 5, 6, under_alpha);
            let result = composite(over, under);
            // Straight-alpha over can only add coverage; truncation costs at
            // most one step.
            prop_assert!(u32::from(result.alpha()) + 1 >= u32::from(over_alpha.max(under_alpha)));
        }

        #[test]
        fn opaque_over_is_always_identity(
            red in 0u8..=255,
            green in 0u8..=255,
            blue in 0u8..=255,
            under_alpha in 0u8..=255,
        ) {
            let over = ColorRgba::new(red, green, blue, 255);
            let under = ColorRgba::new(blue, red, green, under_alpha);
            prop_assert_eq!(composite(over, under), over);
        }
    }
}
