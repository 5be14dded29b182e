#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn catalog_has_ten_entries() {
    assert_eq!(ROD_SPECS.len(), 10);
}

#[test]
fn catalog_values_are_one_through_ten_in_order() {
    for (i, spec) in ROD_SPECS.iter().enumerate() {
        assert_eq!(spec.value as usize, i + 1);
    }
}

#[test]
fn catalog_values_are_unique() {
    for (i, a) in ROD_SPECS.iter().enumerate() {
        for b in &ROD_SPECS[i + 1..] {
            assert_ne!(a.value, b.value);
        }
    }
}

#[test]
fn catalog_colors_are_css_hex() {
    for spec in &ROD_SPECS {
        assert!(spec.color.starts_with('#'), "{}", spec.color);
        assert_eq!(spec.color.len(), 7);
        assert!(spec.text_color.starts_with('#'));
        assert!(!spec.name.is_empty());
    }
}

#[test]
fn spec_width_scales_with_value() {
    let one = spec_for_value(1).unwrap();
    let ten = spec_for_value(10).unwrap();
    assert_eq!(one.width(), BASE_UNIT);
    assert_eq!(ten.width(), 10.0 * BASE_UNIT);
    assert_eq!(one.height(), ROD_HEIGHT);
}

#[test]
fn spec_for_value_finds_each_entry() {
    for v in 1..=10 {
        let spec = spec_for_value(v).unwrap();
        assert_eq!(spec.value, v);
    }
}

#[test]
fn spec_for_value_rejects_out_of_catalog() {
    assert!(spec_for_value(0).is_none());
    assert!(spec_for_value(11).is_none());
    assert!(spec_for_value(u32::MAX).is_none());
}
