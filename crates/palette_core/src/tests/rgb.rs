use crate::rgb::{Rgb, blend, blend_channels, clamp8};

#[test]
fn test_clamp8_restricts_range() {
    assert_eq!(clamp8(-5), 0);
    assert_eq!(clamp8(0), 0);
    assert_eq!(clamp8(42), 42);
    assert_eq!(clamp8(255), 255);
    assert_eq!(clamp8(300), 255);
    assert_eq!(clamp8(i64::MIN), 0);
    assert_eq!(clamp8(i64::MAX), 255);
}

#[test]
fn test_clamp8_idempotent() {
    for x in -1000..1000 {
        let once = clamp8(x);
        assert_eq!(clamp8(once as i64), once, "x = {x}");
    }
}

#[test]
fn test_blend_with_self_is_noop() {
    let colors = [Rgb(0, 0, 0), Rgb(255, 255, 255), Rgb(61, 174, 233), Rgb(150, 150, 150)];
    for c in colors {
        for step in 0..=20 {
            let amount = step as f64 / 20.0;
            assert_eq!(blend(c, c, amount), c, "color {c} amount {amount}");
        }
    }
}

#[test]
fn test_blend_boundaries() {
    let source = Rgb(239, 240, 241);
    let effect = Rgb(56, 56, 56);
    assert_eq!(blend(source, effect, 0.0), source);
    assert_eq!(blend(source, effect, 1.0), effect);
}

#[test]
fn test_blend_midpoint() {
    assert_eq!(
        blend(Rgb(200, 200, 200), Rgb(100, 100, 100), 0.5),
        Rgb(150, 150, 150)
    );
}

#[test]
fn test_blend_truncates() {
    // 127.5 truncates, it does not round
    assert_eq!(blend(Rgb(0, 0, 0), Rgb(255, 255, 255), 0.5), Rgb(127, 127, 127));
    // 239 - 183 * 0.65 = 120.05, 240 - 184 * 0.65 = 120.4, 241 - 185 * 0.65 = 120.75
    assert_eq!(
        blend(Rgb(239, 240, 241), Rgb(56, 56, 56), 0.65),
        Rgb(120, 120, 120)
    );
}

#[test]
fn test_blend_channels_clamps_raw_values() {
    assert_eq!(blend_channels([300, -5, 128], [0, 0, 0], 0.0), Rgb(255, 0, 128));
    assert_eq!(blend_channels([0, 0, 0], [400, 400, 400], 1.0), Rgb(255, 255, 255));
}

#[test]
fn test_from_channels_saturates() {
    assert_eq!(Rgb::from_channels([-1, 256, 7]), Rgb(0, 255, 7));
}

#[test]
fn test_average_rounds_down() {
    assert_eq!(Rgb(255, 255, 255).average(Rgb(0, 0, 1)), Rgb(127, 127, 128));
    assert_eq!(Rgb(10, 20, 30).average(Rgb(10, 20, 30)), Rgb(10, 20, 30));
}

#[test]
fn test_to_hsv() {
    let (h, s, v) = Rgb(0, 255, 0).to_hsv();
    assert!((h - 120.0).abs() < 1e-9);
    assert!((s - 1.0).abs() < 1e-9);
    assert!((v - 1.0).abs() < 1e-9);

    let (h, s, v) = Rgb(128, 128, 128).to_hsv();
    assert_eq!(h, 0.0);
    assert_eq!(s, 0.0);
    assert!((v - 128.0 / 255.0).abs() < 1e-9);
}

#[test]
fn test_hsv_round_trip() {
    for c in [Rgb(61, 174, 233), Rgb(218, 68, 83), Rgb(39, 174, 96), Rgb(1, 2, 3)] {
        let (h, s, v) = c.to_hsv();
        assert_eq!(Rgb::from_hsv(h, s, v), c);
    }
}

#[test]
fn test_lighter_scales_value() {
    assert_eq!(Rgb(100, 100, 100).lighter(150), Rgb(150, 150, 150));
}

#[test]
fn test_lighter_overflow_desaturates() {
    assert_eq!(Rgb(200, 200, 200).lighter(150), Rgb(255, 255, 255));
    assert_eq!(Rgb(255, 0, 0).lighter(150), Rgb(255, 128, 128));
}

#[test]
fn test_darker_scales_value() {
    assert_eq!(Rgb(150, 150, 150).darker(150), Rgb(100, 100, 100));
    assert_eq!(Rgb(0, 0, 0).darker(150), Rgb(0, 0, 0));
}

#[test]
fn test_shade_factor_edge_cases() {
    let c = Rgb(61, 174, 233);
    assert_eq!(c.lighter(100), c);
    assert_eq!(c.darker(100), c);
    assert_eq!(c.lighter(0), c);
    assert_eq!(c.darker(-10), c);
    assert_eq!(c.lighter(50), c.darker(200));
    assert_eq!(c.darker(50), c.lighter(200));
}

#[test]
fn test_hex_display() {
    assert_eq!(Rgb(61, 174, 233).to_hex(), "#3daee9");
    assert_eq!(Rgb(0, 0, 0).to_string(), "#000000");
}

#[test]
fn test_serializes_as_hex() {
    let json = serde_json::to_string(&Rgb(255, 0, 16)).unwrap();
    assert_eq!(json, "\"#ff0010\"");
}
