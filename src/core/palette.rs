// src/core/palette.rs

/// Viridis, sampled at five stops.
const STOPS: [[u8; 3]; 5] = [
    [68, 1, 84],
    [59, 82, 139],
    [33, 145, 140],
    [94, 201, 98],
    [253, 231, 37],
];

/// Colour for `t` in `0.0..=1.0` (clamped).
pub fn viridis(t: f32) -> [u8; 3] {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let pos = t * (STOPS.len() - 1) as f32;
    let lo = (pos.floor() as usize).min(STOPS.len() - 2);
    let frac = pos - lo as f32;
    let (a, b) = (STOPS[lo], STOPS[lo + 1]);

    let mix = |i: usize| (a[i] as f32 + (b[i] as f32 - a[i] as f32) * frac).round() as u8;
    [mix(0), mix(1), mix(2)]
}

/// `count / max` mapped onto the ramp; all zeros map to the low end.
pub fn heat(count: u64, max: u64) -> [u8; 3] {
    if max == 0 {
        return STOPS[0];
    }
    viridis(count as f32 / max as f32)
}

/// Black or white, whichever reads better on `bg`.
pub fn text_on(bg: [u8; 3]) -> [u8; 3] {
    let luma = 0.299 * bg[0] as f32 + 0.587 * bg[1] as f32 + 0.114 * bg[2] as f32;
    if luma < 140.0 { [255, 255, 255] } else { [0, 0, 0] }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ends_of_ramp() {
        assert_eq!(viridis(0.0), [68, 1, 84]);
        assert_eq!(viridis(1.0), [253, 231, 37]);
        assert_eq!(viridis(7.0), [253, 231, 37]);
        assert_eq!(heat(0, 0), [68, 1, 84]);
    }

    #[test]
    fn contrast() {
        assert_eq!(text_on([68, 1, 84]), [255, 255, 255]);
        assert_eq!(text_on([253, 231, 37]), [0, 0, 0]);
    }
}
