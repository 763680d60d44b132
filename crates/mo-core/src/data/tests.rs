//! Tests for data module

use super::*;

fn reference_dataset() -> MarshallDataset {
    MarshallDataset::builder(vec![4.5, 5.0, 5.5, 6.0])
        .with_property(Property::UnitWeight, vec![2.459, 2.476, 2.496, 2.520])
        .unwrap()
        .with_property(Property::AirVoids, vec![7.1, 5.8, 4.1, 2.3])
        .unwrap()
        .with_property(Property::Flow, vec![2.85, 3.12, 3.35, 3.42])
        .unwrap()
        .build()
        .unwrap()
}

#[test]
fn test_series_creation() {
    let series = SampleSeries::from_slices(&[4.5, 5.0, 5.5, 6.0], &[7.1, 5.8, 4.1, 2.3]).unwrap();
    assert_eq!(series.len(), 4);
    assert!(!series.is_empty());
    assert_eq!(series.x_range(), (4.5, 6.0));
    assert_eq!(series.y_range(), (2.3, 7.1));

    let points: Vec<_> = series.points().collect();
    assert_eq!(points[0], (4.5, 7.1));
    assert_eq!(points[3], (6.0, 2.3));
}

#[test]
fn test_series_length_mismatch() {
    let err = SampleSeries::from_slices(&[1.0, 2.0, 3.0, 4.0], &[1.0, 2.0, 3.0]).unwrap_err();
    assert_eq!(err, DataError::LengthMismatch { x_len: 4, y_len: 3 });
}

#[test]
fn test_series_too_short() {
    let err = SampleSeries::from_slices(&[1.0, 2.0], &[1.0, 2.0]).unwrap_err();
    assert_eq!(
        err,
        DataError::TooFewSamples {
            n_samples: 2,
            required: 3
        }
    );

    // Three points is the smallest solvable series
    assert!(SampleSeries::from_slices(&[1.0, 2.0, 3.0], &[1.0, 4.0, 9.0]).is_ok());
}

#[test]
fn test_series_rejects_non_finite() {
    let err = SampleSeries::from_slices(&[1.0, 2.0, 3.0], &[1.0, f64::NAN, 9.0]).unwrap_err();
    assert_eq!(err, DataError::NonFinite { axis: "y", index: 1 });

    let err =
        SampleSeries::from_slices(&[1.0, f64::INFINITY, 3.0], &[1.0, 2.0, 9.0]).unwrap_err();
    assert_eq!(err, DataError::NonFinite { axis: "x", index: 1 });
}

#[test]
fn test_series_covers_closed_range() {
    let series = SampleSeries::from_slices(&[6.0, 4.5, 5.0, 5.5], &[1.0, 2.0, 3.0, 4.0]).unwrap();
    assert!(series.covers(4.5));
    assert!(series.covers(6.0));
    assert!(series.covers(5.25));
    assert!(!series.covers(4.49));
    assert!(!series.covers(6.01));
}

#[test]
fn test_property_identifiers() {
    let ids: Vec<_> = Property::ALL.iter().map(|p| p.id()).collect();
    assert_eq!(
        ids,
        vec![
            "peso_unitario",
            "porcentaje_vacios",
            "vam",
            "vfa",
            "estabilidad",
            "flujo"
        ]
    );

    for property in Property::ALL {
        assert_eq!(property.id().parse::<Property>().unwrap(), property);
        assert_eq!(property.to_string(), property.id());
    }

    assert_eq!(
        "voids".parse::<Property>().unwrap_err(),
        DataError::UnknownProperty("voids".to_string())
    );
}

#[test]
fn test_property_serde_uses_identifier() {
    let json = serde_json::to_string(&Property::AirVoids).unwrap();
    assert_eq!(json, "\"porcentaje_vacios\"");

    let parsed: Property = serde_json::from_str("\"estabilidad\"").unwrap();
    assert_eq!(parsed, Property::Stability);
}

#[test]
fn test_dataset_creation() {
    let ds = reference_dataset();
    assert_eq!(ds.n_samples(), 4);
    assert_eq!(ds.asphalt_range(), (4.5, 6.0));
    assert_eq!(
        ds.properties().collect::<Vec<_>>(),
        vec![Property::UnitWeight, Property::AirVoids, Property::Flow]
    );
    assert!(ds.contains(Property::Flow));
    assert!(!ds.contains(Property::Vma));

    let voids = ds.series(Property::AirVoids).unwrap();
    assert_eq!(voids.x(), ds.asphalt_content());
    assert_eq!(voids.y()[2], 4.1);
}

#[test]
fn test_dataset_missing_property() {
    let ds = reference_dataset();
    assert_eq!(
        ds.series(Property::Stability).unwrap_err(),
        DataError::MissingProperty(Property::Stability)
    );
}

#[test]
fn test_dataset_iter_series_keeps_order() {
    let ds = reference_dataset();
    let order: Vec<_> = ds.iter_series().map(|r| r.unwrap().0).collect();
    assert_eq!(
        order,
        vec![Property::UnitWeight, Property::AirVoids, Property::Flow]
    );
}

#[test]
fn test_builder_rejects_bad_columns() {
    let err = MarshallDataset::builder(vec![4.5, 5.0, 5.5, 6.0])
        .with_property(Property::Vma, vec![16.61, 16.47, 16.26])
        .unwrap_err();
    assert_eq!(err, DataError::LengthMismatch { x_len: 4, y_len: 3 });

    let err = MarshallDataset::builder(vec![4.5, 5.0, 5.5, 6.0])
        .with_property(Property::Vma, vec![16.61, 16.47, 16.26, 15.90])
        .unwrap()
        .with_property(Property::Vma, vec![16.61, 16.47, 16.26, 15.90])
        .unwrap_err();
    assert_eq!(err, DataError::DuplicateProperty(Property::Vma));

    let err = MarshallDataset::builder(vec![4.5, 5.0, 5.5, 6.0])
        .with_property(Property::Vfa, vec![57.17, f64::NAN, 75.55, 85.46])
        .unwrap_err();
    assert_eq!(err, DataError::NonFinite { axis: "vfa", index: 1 });
}

#[test]
fn test_builder_requires_samples_and_properties() {
    let err = MarshallDataset::builder(vec![4.5, 5.0])
        .with_property(Property::Flow, vec![2.85, 3.12])
        .unwrap()
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        DataError::TooFewSamples {
            n_samples: 2,
            required: 3
        }
    );

    let err = MarshallDataset::builder(vec![4.5, 5.0, 5.5])
        .build()
        .unwrap_err();
    assert!(matches!(err, DataError::InvalidParameter(_)));
}

#[cfg(feature = "proptest")]
mod proptest_tests {
    use super::*;
    use proptest::collection::vec;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn x_range_brackets_every_point(xs in vec(-1.0e3..1.0e3f64, 3..20)) {
            let ys: Vec<f64> = xs.iter().map(|x| x * 2.0).collect();
            let series = SampleSeries::from_slices(&xs, &ys).unwrap();
            let (lo, hi) = series.x_range();
            for &x in &xs {
                prop_assert!(lo <= x && x <= hi);
                prop_assert!(series.covers(x));
            }
        }
    }
}
