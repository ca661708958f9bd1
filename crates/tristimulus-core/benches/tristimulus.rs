//! Tristimulus computation benchmarks
//!
//! Compares weighting-table evaluation against full 1 nm integration and
//! measures interpolator fitting cost.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tristimulus_core::data::{cie_1931_2_degree, illuminant_a};
use tristimulus_core::{
    spectral_to_xyz, wavelengths_to_xyz, InterpolationMethod, SpectralPowerDistribution,
    SpectralShape, TristimulusContext,
};

/// Smooth reflectance-like test spectrum on `shape`
fn generate_spd(shape: SpectralShape) -> SpectralPowerDistribution {
    let values: Vec<f64> = shape
        .wavelengths()
        .iter()
        .map(|&wl| {
            let d = (wl - 560.0) / 90.0;
            0.1 + 0.7 * (-d * d).exp()
        })
        .collect();
    SpectralPowerDistribution::new("Bench Sample", shape.wavelengths(), values).unwrap()
}

fn bench_spectral_to_xyz(c: &mut Criterion) {
    let mut group = c.benchmark_group("spectral_to_xyz");

    let shape_1nm = SpectralShape::new(360.0, 830.0, 1.0).unwrap();
    let shape_10nm = SpectralShape::new(360.0, 830.0, 10.0).unwrap();
    let cmfs_1nm = cie_1931_2_degree().interpolated(&shape_1nm, None).unwrap();
    let illuminant = illuminant_a(shape_1nm);
    let spd_1nm = generate_spd(shape_1nm);
    let spd_10nm = generate_spd(shape_10nm);

    group.bench_function("direct_1nm", |b| {
        b.iter(|| spectral_to_xyz(black_box(&spd_1nm), &cmfs_1nm, Some(&illuminant)))
    });

    let ctx = TristimulusContext::new();
    let table = ctx
        .tristimulus_weighting_factors(&cmfs_1nm, &illuminant, &shape_10nm)
        .unwrap();
    group.bench_function("weighting_table_10nm", |b| {
        b.iter(|| {
            let values = black_box(spd_10nm.values());
            let mut sums = [0.0; 3];
            for (row, &v) in table.iter().zip(values) {
                sums[0] += row[0] * v;
                sums[1] += row[1] * v;
                sums[2] += row[2] * v;
            }
            sums
        })
    });

    group.finish();
}

fn bench_weighting_table_build(c: &mut Criterion) {
    let shape_1nm = SpectralShape::new(360.0, 830.0, 1.0).unwrap();
    let shape_10nm = SpectralShape::new(360.0, 830.0, 10.0).unwrap();
    let cmfs_1nm = cie_1931_2_degree().interpolated(&shape_1nm, None).unwrap();
    let illuminant = illuminant_a(shape_1nm);

    c.bench_function("weighting_table_build_cold", |b| {
        b.iter(|| {
            let ctx = TristimulusContext::new();
            ctx.tristimulus_weighting_factors(&cmfs_1nm, &illuminant, black_box(&shape_10nm))
        })
    });
}

fn bench_interpolation(c: &mut Criterion) {
    let mut group = c.benchmark_group("wavelengths_to_xyz");
    let cmfs = cie_1931_2_degree();
    let queries: Vec<f64> = (0..256).map(|i| 400.0 + i as f64 * 1.3).collect();

    for method in [
        InterpolationMethod::Linear,
        InterpolationMethod::CubicSpline,
        InterpolationMethod::Pchip,
        InterpolationMethod::Sprague,
    ] {
        group.bench_with_input(
            BenchmarkId::new("batch_256", format!("{method:?}")),
            &method,
            |b, &method| {
                b.iter(|| wavelengths_to_xyz(black_box(&queries), cmfs, Some(method)))
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_spectral_to_xyz,
    bench_weighting_table_build,
    bench_interpolation
);
criterion_main!(benches);
