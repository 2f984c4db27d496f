use image::Rgb;

use crate::math::Vec3;

const REC709_WEIGHTS: Vec3 = Vec3::new(0.2126, 0.7152, 0.0722);
const WHITE_POINT_SQUARED: f32 = 4.0;

pub fn luminance(color: Vec3) -> f32 {
    color.dot(REC709_WEIGHTS)
}

/// Input and output are in 0-255 units. Black is returned unchanged.
pub fn extended_reinhard(color: Vec3) -> Vec3 {
    let normalized = color / 255.0;
    let l_in = luminance(normalized);
    if l_in == 0.0 {
        return color;
    }

    let l_out = (((l_in / WHITE_POINT_SQUARED) + 1.0) * l_in) / (1.0 + l_in);
    normalized * (l_out / l_in) * 255.0
}

pub fn to_rgb(color: Vec3) -> Rgb<u8> {
    let channel = |value: f32| value.clamp(0.0, 255.0) as u8;
    Rgb([channel(color.x), channel(color.y), channel(color.z)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn luminance_weights_sum_to_one() {
        assert_abs_diff_eq!(luminance(Vec3::splat(1.0)), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(luminance(Vec3::new(0.0, 1.0, 0.0)), 0.7152, epsilon = 1e-6);
    }

    #[test]
    fn white_maps_to_curve_value() {
        // L = 1 -> (1/4 + 1) / 2
        let mapped = extended_reinhard(Vec3::splat(255.0));
        assert_abs_diff_eq!(mapped.x, 0.625 * 255.0, epsilon = 1e-3);
        assert_abs_diff_eq!(mapped.y, mapped.x, epsilon = 1e-6);
    }

    #[test]
    fn bright_input_reaches_display_white_at_white_point() {
        let mapped = extended_reinhard(Vec3::splat(2.0 * 255.0));
        assert_abs_diff_eq!(mapped.x, 255.0, epsilon = 1e-2);
    }

    #[test]
    fn preserves_channel_ratios() {
        let color = Vec3::new(177.0, 103.0, 57.0);
        let mapped = extended_reinhard(color);
        assert_abs_diff_eq!(mapped.x / mapped.y, color.x / color.y, epsilon = 1e-4);
        assert_abs_diff_eq!(mapped.y / mapped.z, color.y / color.z, epsilon = 1e-4);
    }

    #[test]
    fn black_stays_black() {
        assert_eq!(extended_reinhard(Vec3::ZERO), Vec3::ZERO);
    }

    #[test]
    fn to_rgb_clamps_and_truncates() {
        assert_eq!(to_rgb(Vec3::new(-3.0, 128.9, 400.0)), Rgb([0, 128, 255]));
    }
}
