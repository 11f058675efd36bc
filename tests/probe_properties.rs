use approx::assert_abs_diff_eq;
use impulse_probe::{
    dsp::{
        kernel::{rect, sinc, tri},
        product::inner_product,
        KernelShape, ReferenceSignal, TimeGrid,
    },
    probe::{render, ProbeConfig, ProbeParams, Regime},
    ProbeError, GRID_END, GRID_SAMPLE_RATE, GRID_START,
};

fn demo_grid() -> TimeGrid {
    TimeGrid::generate(GRID_START, GRID_END, GRID_SAMPLE_RATE).unwrap()
}

fn frame(a: f64, shift: f64) -> impulse_probe::ProbeFrame {
    render(ProbeParams::new(a, shift).unwrap(), &ProbeConfig::default()).unwrap()
}

/// Composite Simpson's rule on `[lo, hi]` with `n` (even) intervals.
fn simpson<F: Fn(f64) -> f64>(f: F, lo: f64, hi: f64, n: usize) -> f64 {
    let h = (hi - lo) / n as f64;
    let interior: f64 = (1..n)
        .map(|i| {
            let weight = if i % 2 == 1 { 4.0 } else { 2.0 };
            weight * f(lo + i as f64 * h)
        })
        .sum();
    (f(lo) + interior + f(hi)) * h / 3.0
}

#[test]
fn kernels_carry_unit_mass_when_support_fits_the_grid() {
    let grid = demo_grid();
    let ones = vec![1.0; grid.len()];

    for &a in &[1.0, 2.5, 7.0, 13.3, 20.0] {
        for &shift in &[-1.5, 0.0, 0.75, 2.0] {
            for shape in [KernelShape::Rectangle, KernelShape::Triangle] {
                let kernel = shape.evaluate(&grid, a, shift);
                let mass = inner_product(&kernel, &ones, grid.sample_rate()).unwrap();
                assert_abs_diff_eq!(mass, 1.0, epsilon = 0.01);
            }
        }
    }
}

#[test]
fn sinc_mass_approaches_one_once_its_tails_are_short() {
    // The sinc never has compact support; on [-3, 3) its truncated tails
    // cost about 1/(π²·a·d) at distance d from each edge.
    let grid = demo_grid();
    let ones = vec![1.0; grid.len()];

    for &a in &[10.0, 15.0, 20.0] {
        for &shift in &[-1.0, 0.0, 1.0] {
            let kernel = KernelShape::Sinc.evaluate(&grid, a, shift);
            let mass = inner_product(&kernel, &ones, grid.sample_rate()).unwrap();
            assert_abs_diff_eq!(mass, 1.0, epsilon = 0.02);
        }
    }
}

#[test]
fn inner_products_converge_to_reference_value_at_max_sharpness() {
    let f = ReferenceSignal::default();
    for &shift in &[-2.0, -0.5, 0.0, 0.5, 1.7] {
        let grid = demo_grid();
        let reference = f.evaluate(&grid);
        for shape in KernelShape::ALL {
            let kernel = shape.evaluate(&grid, 20.0, shift);
            let value = inner_product(&kernel, &reference, grid.sample_rate()).unwrap();
            assert_abs_diff_eq!(value, f.value(shift), epsilon = 0.05);
        }
    }
}

#[test]
fn discrete_path_agrees_with_impulse_just_below_threshold() {
    for &shift in &[-2.0, -0.5, 0.0, 0.5, 1.7] {
        let below = frame(19.49, shift);
        let exact = (3.0 * shift).cos();
        for panel in &below.panels {
            assert_abs_diff_eq!(panel.inner_product, exact, epsilon = 0.005);
        }
    }
}

#[test]
fn sinc_at_its_centre_is_exactly_the_amplification() {
    let grid = demo_grid();
    let centre = grid.samples().iter().position(|&t| t == 0.0).unwrap();
    for &a in &[1.0, 4.2, 19.5, 20.0] {
        let kernel = KernelShape::Sinc.evaluate(&grid, a, 0.0);
        assert_eq!(kernel[centre], a);
        assert!(kernel.iter().all(|v| v.is_finite()));
    }
    assert_eq!(KernelShape::Sinc.value(1.25, 3.0, 1.25), 3.0);
}

#[test]
fn rect_and_triangle_are_even_about_the_shift() {
    // Dyadic offsets keep t - Δ exact so the comparison can be bitwise.
    for &shift in &[-1.25, 0.0, 0.5, 2.75] {
        for &a in &[1.0, 2.0, 8.0, 16.0] {
            for k in 0..64 {
                let x = k as f64 / 64.0;
                for shape in [KernelShape::Rectangle, KernelShape::Triangle] {
                    assert_eq!(
                        shape.value(shift + x, a, shift),
                        shape.value(shift - x, a, shift),
                        "{shape} a={a} shift={shift} x={x}"
                    );
                }
            }
        }
    }
    for k in 0..1000 {
        let x = k as f64 * 0.0037;
        assert_eq!(rect(x), rect(-x));
        assert_eq!(tri(x), tri(-x));
        assert_eq!(sinc(x), sinc(-x));
    }
}

#[test]
fn scenario_wide_kernels_centred_at_zero() {
    let frame = frame(1.0, 0.0);
    assert_eq!(frame.regime(), Regime::Discrete);

    // ∫_{-1/2}^{1/2} cos(3t) dt
    let rect = frame.panel(KernelShape::Rectangle).unwrap();
    assert_abs_diff_eq!(rect.inner_product, 2.0 * 1.5f64.sin() / 3.0, epsilon = 1e-3);

    // ∫ tri(t) cos(3t) dt = (sin(1.5) / 1.5)²
    let tri = frame.panel(KernelShape::Triangle).unwrap();
    assert_abs_diff_eq!(tri.inner_product, (1.5f64.sin() / 1.5).powi(2), epsilon = 1e-3);

    // The sinc is truncated by the window, so compare against the same
    // truncated integral evaluated by fine quadrature.
    let sinc_panel = frame.panel(KernelShape::Sinc).unwrap();
    let expected = simpson(|t| sinc(t) * (3.0 * t).cos(), GRID_START, GRID_END, 120_000);
    assert_abs_diff_eq!(sinc_panel.inner_product, expected, epsilon = 1e-3);

    assert_eq!(rect.rounded, 0.67);
    assert_eq!(tri.rounded, 0.44);
    assert_eq!(sinc_panel.rounded, 0.62);
}

#[test]
fn scenario_impulse_limit_is_exact() {
    let frame = frame(19.51, 0.5);
    assert_eq!(frame.regime(), Regime::ImpulseLimit);

    let limit = frame.impulse.unwrap();
    assert_eq!(limit.inner_product, 1.5f64.cos());
    assert_eq!(limit.product_arrow.height, 1.5f64.cos());
    assert_eq!(limit.product_arrow.at, 0.5);
    assert_eq!(limit.kernel_arrow.height, 1.0);
    assert_eq!(limit.rounded, 0.07);
}

#[test]
fn threshold_branch_is_strictly_greater() {
    assert_eq!(frame(19.49, 0.0).regime(), Regime::Discrete);
    assert_eq!(frame(19.5, 0.0).regime(), Regime::Discrete);
    assert_eq!(frame(19.51, 0.0).regime(), Regime::ImpulseLimit);
    assert_eq!(frame(20.0, -3.0).regime(), Regime::ImpulseLimit);
}

#[test]
fn invalid_inputs_are_rejected_not_clamped() {
    assert!(matches!(
        ProbeParams::new(0.99, 0.0),
        Err(ProbeError::InvalidRange { what: "amplification", .. })
    ));
    assert!(matches!(
        ProbeParams::new(5.0, -3.01),
        Err(ProbeError::InvalidRange { what: "shift", .. })
    ));
    assert!(matches!(
        TimeGrid::generate(3.0, -3.0, 10_000.0),
        Err(ProbeError::InvalidRange { .. })
    ));
    assert!(matches!(
        inner_product(&[1.0; 4], &[1.0; 5], 10.0),
        Err(ProbeError::DimensionMismatch { left: 4, right: 5 })
    ));
}
