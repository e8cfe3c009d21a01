/// Linear RGB triple in [0, 1]
pub type Rgb = [f32; 3];

/// Unpack a `0xRRGGBB` literal
pub const fn rgb_from_hex(hex: u32) -> Rgb {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}

pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> Rgb {
    let c = v * s;
    let h_prime = (h.rem_euclid(1.0) * 6.0) % 6.0;
    let x = c * (1.0 - ((h_prime % 2.0) - 1.0).abs());
    let m = v - c;

    let (r, g, b) = match h_prime as i32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    [r + m, g + m, b + m]
}

/// HSL in [0, 1] on every channel, via the HSV form
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> Rgb {
    let v = l + s * l.min(1.0 - l);
    let sv = if v <= 0.0 { 0.0 } else { 2.0 * (1.0 - l / v) };
    hsv_to_rgb(h, sv, v)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Rgb, b: Rgb) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < 0.01)
    }

    #[test]
    fn test_hex_unpacks_channels() {
        assert!(close(rgb_from_hex(0xff0000), [1.0, 0.0, 0.0]));
        assert!(close(rgb_from_hex(0x404040), [0.251, 0.251, 0.251]));
        assert!(close(rgb_from_hex(0x6366f1), [0.388, 0.4, 0.945]));
    }

    #[test]
    fn test_hsv_to_rgb_red() {
        assert!(close(hsv_to_rgb(0.0, 1.0, 1.0), [1.0, 0.0, 0.0]));
    }

    #[test]
    fn test_hsl_primary_and_grey() {
        assert!(close(hsl_to_rgb(0.0, 1.0, 0.5), [1.0, 0.0, 0.0]));
        assert!(close(hsl_to_rgb(1.0 / 3.0, 1.0, 0.5), [0.0, 1.0, 0.0]));
        assert!(close(hsl_to_rgb(0.7, 0.0, 0.5), [0.5, 0.5, 0.5]));
        assert!(close(hsl_to_rgb(0.2, 0.7, 0.0), [0.0, 0.0, 0.0]));
    }

    #[test]
    fn test_hsl_particle_palette_stays_in_range() {
        for i in 0..100 {
            let rgb = hsl_to_rgb(i as f32 / 100.0, 0.7, 0.5);
            assert!(rgb.iter().all(|c| (0.0..=1.0).contains(c)));
            // s = 0.7, l = 0.5 => max 0.85, min 0.15
            let max = rgb.iter().cloned().fold(f32::MIN, f32::max);
            let min = rgb.iter().cloned().fold(f32::MAX, f32::min);
            assert!((max - 0.85).abs() < 0.01);
            assert!((min - 0.15).abs() < 0.01);
        }
    }
}
