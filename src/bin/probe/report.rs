//! Headless output: one pipeline pass printed as a table

use impulse_probe::{
    dsp::product::round_to,
    probe::{ProbeFrame, Regime},
    sine::{SineClip, SineParams},
};

/// Format a probe frame the way the plots annotate it
pub fn probe_report(frame: &ProbeFrame) -> String {
    let mut out = String::new();
    let sample_rate = frame.grid.sample_rate();

    out.push_str(&format!(
        "a = {:.2}   Δ = {:+.2}   grid: {} samples @ {} Hz\n",
        frame.params.amplification(),
        frame.params.shift(),
        frame.grid.len(),
        sample_rate,
    ));
    out.push_str(&format!("{:<8}{:>14}{:>10}{:>10}\n", "kernel", "<f,in>", "rounded", "mass"));
    for panel in &frame.panels {
        out.push_str(&format!(
            "{:<8}{:>14.6}{:>10.2}{:>10.4}\n",
            panel.shape.name(),
            panel.inner_product,
            panel.rounded,
            panel.mass(sample_rate),
        ));
    }

    match (frame.regime(), frame.impulse) {
        (Regime::ImpulseLimit, Some(limit)) => out.push_str(&format!(
            "{:<8}{:>14.6}{:>10.2}{:>10.4}\n",
            "delta", limit.inner_product, limit.rounded, limit.kernel_arrow.height,
        )),
        _ => out.push_str("delta   (a not above the impulse threshold)\n"),
    }

    out
}

/// Period, wavelength and level summary of a sine setting
pub fn sine_report(params: &SineParams) -> String {
    let clip = SineClip::demo(params);
    let peak = clip.normalized().iter().fold(0.0f32, |acc, &s| acc.max(s.abs()));
    let period = params
        .period()
        .map_or_else(|| "inf".to_string(), |t| format!("{t:.4} s"));
    let wavelength = params
        .wavelength()
        .map_or_else(|| "inf".to_string(), |l| format!("{l:.2} m"));

    format!(
        "y(t) = {:.2} sin(2π·{:.0}·t {:+.2})\nT = {period}   λ = {wavelength}   playback peak = {:.2}\n",
        params.amplitude(),
        params.frequency(),
        params.phase(),
        round_to(peak as f64, 2),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use impulse_probe::probe::{render, ProbeConfig, ProbeParams};

    #[test]
    fn test_probe_report_lists_every_kernel() {
        let config = ProbeConfig::new().sample_rate(1_000.0);
        let frame = render(ProbeParams::new(2.0, 0.0).unwrap(), &config).unwrap();
        let report = probe_report(&frame);
        for name in ["rect", "tri", "sinc"] {
            assert!(report.contains(name));
        }
        assert!(report.contains("not above the impulse threshold"));
    }

    #[test]
    fn test_probe_report_includes_delta_row() {
        let config = ProbeConfig::new().sample_rate(1_000.0);
        let frame = render(ProbeParams::new(20.0, 0.5).unwrap(), &config).unwrap();
        let report = probe_report(&frame);
        assert!(report.lines().any(|l| l.starts_with("delta") && l.contains("0.07")));
    }

    #[test]
    fn test_sine_report_handles_dc() {
        let params = SineParams::new(1.0, 0.0, 0.0).unwrap();
        assert!(sine_report(&params).contains("T = inf"));
    }
}
