use agrigeo_shield::indices::{fertility_proxy, mineral_indices, ReflectancePixel};
use approx::assert_relative_eq;

fn px(b2: f64, b4: f64, b5: f64, b6: f64, b7: f64) -> ReflectancePixel {
    ReflectancePixel {
        b2: Some(b2),
        b4: Some(b4),
        b5: Some(b5),
        b6: Some(b6),
        b7: Some(b7),
    }
}

#[test]
fn test_fertility_proxy() {
    assert_relative_eq!(fertility_proxy(0.5, 0.2), 0.6, epsilon = 1e-12);
    assert_relative_eq!(fertility_proxy(0.55, 0.15), 0.6325, epsilon = 1e-12);
}

#[test]
fn test_fertility_proxy_negative_vegetation() {
    assert!(fertility_proxy(-0.1, 0.3) < 0.0);
}

#[test]
fn test_mineral_ratios_mean() {
    let m = mineral_indices(&[px(0.1, 0.2, 0.2, 0.3, 0.15), px(0.2, 0.2, 0.1, 0.1, 0.1)]);
    assert_relative_eq!(m.iron.unwrap(), 1.5, epsilon = 1e-12);
    assert_relative_eq!(m.ferrous.unwrap(), 1.25, epsilon = 1e-12);
    assert_relative_eq!(m.clay.unwrap(), 1.5, epsilon = 1e-12);
}

#[test]
fn test_zero_denominators_excluded_from_mean() {
    let m = mineral_indices(&[px(0.1, 0.2, 0.2, 0.3, 0.15), px(0.0, 0.5, 0.0, 0.2, 0.1)]);
    // Second pixel contributes only to clay.
    assert_relative_eq!(m.iron.unwrap(), 2.0, epsilon = 1e-12);
    assert_relative_eq!(m.ferrous.unwrap(), 1.5, epsilon = 1e-12);
    assert_relative_eq!(m.clay.unwrap(), 2.0, epsilon = 1e-12);
    assert!(m.iron.unwrap().is_finite());
}

#[test]
fn test_no_usable_pixels() {
    let m = mineral_indices(&[px(0.0, 0.3, 0.0, 0.3, 0.0)]);
    assert_eq!(m.iron, None);
    assert_eq!(m.ferrous, None);
    assert_eq!(m.clay, None);

    let empty = mineral_indices(&[]);
    assert_eq!(empty.iron, None);
}

#[test]
fn test_non_finite_bands_skipped() {
    let m = mineral_indices(&[px(f64::NAN, 0.2, 0.2, 0.3, 0.1), px(0.1, 0.3, 0.2, 0.3, 0.1)]);
    assert_relative_eq!(m.iron.unwrap(), 3.0, epsilon = 1e-12);
}

#[test]
fn test_absent_band_skips_only_its_ratios() {
    let masked = ReflectancePixel {
        b2: None,
        ..px(0.0, 0.4, 0.1, 0.3, 0.1)
    };
    let m = mineral_indices(&[px(0.1, 0.2, 0.2, 0.3, 0.15), masked]);
    assert_relative_eq!(m.iron.unwrap(), 2.0, epsilon = 1e-12);
    // ferrous: (1.5 + 3.0) / 2
    assert_relative_eq!(m.ferrous.unwrap(), 2.25, epsilon = 1e-12);
}

#[test]
fn test_absent_band_from_json() {
    let pixels: Vec<ReflectancePixel> = serde_json::from_str(
        r#"[{"b2": 0.1, "b4": 0.2, "b5": 0.2, "b6": 0.3, "b7": 0.15},
            {"b2": null, "b4": 0.5, "b5": 0.2, "b6": 0.3, "b7": 0.15},
            {"b4": 0.5}]"#,
    )
    .unwrap();
    assert_eq!(pixels[1].b2, None);
    assert_eq!(pixels[2].b7, None);
    let m = mineral_indices(&pixels);
    assert_relative_eq!(m.iron.unwrap(), 2.0, epsilon = 1e-12);
    assert_relative_eq!(m.clay.unwrap(), 2.0, epsilon = 1e-12);
}

#[test]
fn test_overflowing_ratio_excluded() {
    let m = mineral_indices(&[px(0.1, 0.2, 0.2, 0.3, 0.15), px(1e-309, 0.2, 0.2, 0.3, 0.15)]);
    let iron = m.iron.unwrap();
    assert!(iron.is_finite());
    assert_relative_eq!(iron, 2.0, epsilon = 1e-12);
}
