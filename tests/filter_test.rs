use assert_approx_eq::assert_approx_eq;
use filter_rs::prelude::*;

#[test]
fn moving_average_5() {
    let mut filter: Filter<f32, 5> = Filter::new();
    filter.set_coefficients(
        &[0.2, 0.2, 0.2, 0.2, 0.2],
        &[1.0, 0.0, 0.0, 0.0, 0.0],
    );

    let output: Vec<f32> = [1.0, 2.0, 3.0, 4.0, 5.0]
        .iter()
        .map(|&x| filter.update(x))
        .collect();
    let truth = [0.2, 0.6, 1.2, 2.0, 3.0];
    for (y, t) in output.iter().zip(truth.iter()) {
        assert_approx_eq!(*y, *t);
    }
}

#[test]
fn butterworth_5th_order() {
    let num = [0.0013, 0.0064, 0.0128, 0.0128, 0.0064, 0.0013];
    let den = [1.0000, -2.9754, 3.8060, -2.5453, 0.8811, -0.1254];
    let mut filter: Filter<f64, 6> = Filter::new();
    filter.set_coefficients_from_z_transform(&num, &den).unwrap();

    let input = [
        9.8196, -5.2901, -5.0688, 10.4616, 1.0000, -8.5595, 6.6869, 6.4656,
        -9.2015, 0.0000,
    ];
    let truth = [
        0.0126, 0.0937, 0.3163, 0.6556, 0.9728, 1.1665, 1.2315, 1.1774,
        1.0356, 0.8850,
    ];
    let output = filter.batch_update(&input);
    for (y, t) in output.iter().zip(truth.iter()) {
        assert_approx_eq!(*y, *t, 0.003);
    }
}

#[test]
fn butterworth_5th_order_f32() {
    let num = [0.0013_f32, 0.0064, 0.0128, 0.0128, 0.0064, 0.0013];
    let den = [1.0000_f32, -2.9754, 3.8060, -2.5453, 0.8811, -0.1254];
    let mut filter = Filter::from_z_transform(&num, &den).unwrap();

    let mut samples = [
        9.8196_f32, -5.2901, -5.0688, 10.4616, 1.0000, -8.5595, 6.6869,
        6.4656, -9.2015, 0.0000,
    ];
    let truth = [
        0.0126, 0.0937, 0.3163, 0.6556, 0.9728, 1.1665, 1.2315, 1.1774,
        1.0356, 0.8850,
    ];
    filter.process_block(&mut samples);
    for (y, t) in samples.iter().zip(truth.iter()) {
        assert_approx_eq!(*y, *t, 0.003);
    }
}

#[test]
fn degenerate_z_transform() {
    let mut filter: Filter<f64, 3> = Filter::new();
    let err = filter
        .set_coefficients_from_z_transform(&[1.0, 1.0, 1.0], &[0.0, 1.0, 1.0])
        .unwrap_err();
    assert_eq!(err, FilterError::DegenerateDenominator);
    assert_eq!(
        err.to_string(),
        "Filter error: z-transform denominator[0] must not be zero"
    );
    assert_eq!(filter.numerator(), &[0.0; 3]);
    assert_eq!(filter.denominator(), &[0.0; 3]);
}

#[cfg(feature = "snapshot")]
#[test]
fn snapshot_survives_cbor() {
    let num = [0.0013, 0.0064, 0.0128, 0.0128, 0.0064, 0.0013];
    let den = [1.0000, -2.9754, 3.8060, -2.5453, 0.8811, -0.1254];
    let input = [
        9.8196, -5.2901, -5.0688, 10.4616, 1.0000, -8.5595, 6.6869, 6.4656,
        -9.2015, 0.0000,
    ];

    let mut reference: Filter<f64, 6> =
        Filter::from_z_transform(&num, &den).unwrap();
    let truth = reference.batch_update(&input);

    let mut first: Filter<f64, 6> =
        Filter::from_z_transform(&num, &den).unwrap();
    first.batch_update(&input[..5]);
    let bytes = first.snapshot().to_cbor().unwrap();

    let mut resumed: Filter<f64, 6> =
        Filter::from_z_transform(&num, &den).unwrap();
    resumed
        .restore(&FilterSnapshot::from_cbor(&bytes).unwrap())
        .unwrap();
    let tail = resumed.batch_update(&input[5..]);
    assert_eq!(tail.as_slice(), &truth[5..]);
}
