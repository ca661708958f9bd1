//! End-to-end checks on the embedded CIE datasets

use tristimulus_core::data::{
    cie_1931_2_degree, d50, illuminant, illuminant_a, observer, CIE_1931_2_DEGREE_NAME, D50_NAME,
};
use tristimulus_core::{
    spectral_to_xyz, wavelength_to_xyz, InterpolationMethod, SpectralPowerDistribution,
};

#[test]
fn registries_resolve_embedded_datasets() {
    assert!(observer(CIE_1931_2_DEGREE_NAME).is_some());
    assert!(observer("CIE 2006 10 Degree").is_none());
    assert!(illuminant(D50_NAME).is_some());
    assert!(illuminant("F11").is_none());

    let cmfs = cie_1931_2_degree();
    assert_eq!(cmfs.len(), 95);
    assert_eq!(cmfs.shape().interval(), 5.0);
    assert_eq!(d50().len(), 95);
}

#[test]
fn equal_energy_white_chromaticity() {
    let cmfs = cie_1931_2_degree();
    let reflector = SpectralPowerDistribution::ones(cmfs.shape());
    let xyz = spectral_to_xyz(&reflector, cmfs, None);
    assert!((xyz.luminance() - 100.0).abs() < 1e-9);
    let (x, y) = xyz.chromaticity();
    assert!((x - 1.0 / 3.0).abs() < 2e-3, "x = {x}");
    assert!((y - 1.0 / 3.0).abs() < 2e-3, "y = {y}");
}

#[test]
fn d50_white_point() {
    let cmfs = cie_1931_2_degree();
    let reflector = SpectralPowerDistribution::ones(cmfs.shape());
    let xyz = spectral_to_xyz(&reflector, cmfs, Some(d50()));
    // CIE D50 2-deg white point
    assert!((xyz.luminance() - 100.0).abs() < 1e-9);
    assert!((xyz.x - 96.42).abs() < 0.3, "X = {}", xyz.x);
    assert!((xyz.z - 82.51).abs() < 0.3, "Z = {}", xyz.z);
}

#[test]
fn illuminant_a_chromaticity() {
    let cmfs = cie_1931_2_degree();
    let a = illuminant_a(cmfs.shape());
    let reflector = SpectralPowerDistribution::ones(cmfs.shape());
    let xyz = spectral_to_xyz(&reflector, cmfs, Some(&a));
    let (x, y) = xyz.chromaticity();
    // CIE Standard Illuminant A 2-deg chromaticity
    assert!((x - 0.44758).abs() < 1e-3, "x = {x}");
    assert!((y - 0.40745).abs() < 1e-3, "y = {y}");
}

#[test]
fn interpolation_methods_agree_off_grid() {
    let cmfs = cie_1931_2_degree();
    let methods = [
        InterpolationMethod::Sprague,
        InterpolationMethod::CubicSpline,
        InterpolationMethod::Pchip,
        InterpolationMethod::Linear,
    ];
    let reference = wavelength_to_xyz(555.5, cmfs, None).unwrap();
    for method in methods {
        // every strategy reproduces stored nodes exactly
        let node = wavelength_to_xyz(555.0, cmfs, Some(method)).unwrap();
        assert_eq!(node.to_array(), cmfs.get(555.0).unwrap());

        let off = wavelength_to_xyz(555.5, cmfs, Some(method)).unwrap();
        assert!(
            off.approx_eq_rel(&reference, 2e-2),
            "{method:?}: {off:?} vs {reference:?}"
        );
    }
}

#[test]
fn method_names_parse() {
    assert_eq!(
        "sprague".parse::<InterpolationMethod>().unwrap(),
        InterpolationMethod::Sprague
    );
    assert_eq!(
        "Cubic Spline".parse::<InterpolationMethod>().unwrap(),
        InterpolationMethod::CubicSpline
    );
    assert!("quintic".parse::<InterpolationMethod>().is_err());
}
