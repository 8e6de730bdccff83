use super::*;

/// Direct floating-point transcription of the batch curves
fn reference(q: u64) -> u64 {
    let qf = q as f64;
    if q > 1 && q <= 64 {
        ((((128.0 - (qf - 64.0).powi(2) / 32.0) / 16.0).floor() + 1.0) * 16.0).ceil() as u64
    } else if q > 64 && q <= 576 {
        (640.0 - (qf - 576.0).powi(2) / 520.0).ceil() as u64
    } else if q > 576 {
        (q / 576 + 1) * 576
    } else {
        q
    }
}

#[test]
fn test_unchanged_below_two() {
    assert_eq!(normalize_quantity(0), Some(0));
    assert_eq!(normalize_quantity(1), Some(1));
}

#[test]
fn test_small_band_values() {
    assert_eq!(normalize_quantity(2), Some(16));
    assert_eq!(normalize_quantity(10), Some(48));
    assert_eq!(normalize_quantity(32), Some(112));
    assert_eq!(normalize_quantity(48), Some(128));
    assert_eq!(normalize_quantity(63), Some(128));
    // 64 is the last value of the small band
    assert_eq!(normalize_quantity(64), Some(144));
}

#[test]
fn test_box_band_values() {
    assert_eq!(normalize_quantity(65), Some(138));
    assert_eq!(normalize_quantity(100), Some(205));
    assert_eq!(normalize_quantity(316), Some(510));
    assert_eq!(normalize_quantity(500), Some(629));
    // 576 still belongs to the box band
    assert_eq!(normalize_quantity(576), Some(640));
}

#[test]
fn test_full_batch_band_values() {
    assert_eq!(normalize_quantity(577), Some(1152));
    assert_eq!(normalize_quantity(1000), Some(1152));
    assert_eq!(normalize_quantity(1151), Some(1152));
    assert_eq!(normalize_quantity(1152), Some(1728));
}

#[test]
fn test_last_representable_batch() {
    // u64::MAX - 447 is the largest multiple of 576 a u64 can hold
    assert_eq!(normalize_quantity(u64::MAX - 448), Some(u64::MAX - 447));
    assert_eq!(normalize_quantity(u64::MAX - 447), None);
    assert_eq!(normalize_quantity(u64::MAX), None);
}

#[test]
fn test_small_band_outputs_are_multiples_of_16() {
    for q in 2..=64 {
        assert_eq!(normalize_quantity(q).unwrap() % 16, 0, "q = {}", q);
    }
}

#[test]
fn test_matches_floating_point_curves() {
    for q in 0..=5000 {
        assert_eq!(normalize_quantity(q), Some(reference(q)), "q = {}", q);
    }
}

#[test]
fn test_never_decreases() {
    for q in 0..=5000 {
        assert!(normalize_quantity(q).unwrap() >= q, "q = {}", q);
    }
}

#[test]
fn test_normalize_records_preserves_order() {
    let records = vec![
        ItemRecord::new("stone", 100),
        ItemRecord::new("torch", 1),
        ItemRecord::new("stone", 10),
    ];

    let normalized = normalize_records(&records).unwrap();

    assert_eq!(
        normalized,
        vec![
            ItemRecord::new("stone", 205),
            ItemRecord::new("torch", 1),
            ItemRecord::new("stone", 48),
        ]
    );
}

#[test]
fn test_normalize_records_empty() {
    assert!(normalize_records(&[]).unwrap().is_empty());
}

#[test]
fn test_normalize_records_reports_overflow() {
    let records = vec![
        ItemRecord::new("stone", 100),
        ItemRecord::new("bedrock", u64::MAX),
    ];

    assert_eq!(
        normalize_records(&records).unwrap_err(),
        NormalizeError::QuantityOverflow {
            kind: "bedrock".to_string(),
            item_index: 1,
            quantity: u64::MAX,
        }
    );
}
