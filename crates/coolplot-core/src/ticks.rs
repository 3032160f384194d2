// File: crates/coolplot-core/src/ticks.rs
// Summary: Tick placement and label formatting for linear and log10 axes.

/// Evenly spaced values from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 {
        return vec![start, end];
    }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Major ticks for a linear range: a 1/2/5 "nice" step sized to produce about
/// `target` ticks.
pub fn linear_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    let span = max - min;
    if !span.is_finite() || span <= 0.0 {
        return vec![min];
    }
    let raw = span / target.max(1) as f64;
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    let step = nice * mag;
    let mut t = (min / step).ceil() * step;
    let mut out = Vec::new();
    while t <= max + step * 1e-9 {
        out.push(t);
        t += step;
    }
    out
}

/// Minor ticks for a linear range: each major interval split in five.
pub fn linear_minor(majors: &[f64], min: f64, max: f64) -> Vec<f64> {
    if majors.len() < 2 {
        return Vec::new();
    }
    let step = majors[1] - majors[0];
    let sub = step / 5.0;
    let mut out = Vec::new();
    let mut t = majors[0] - step;
    while t < max {
        for k in 1..5 {
            let v = t + sub * k as f64;
            if v > min && v < max {
                out.push(v);
            }
        }
        t += step;
    }
    out
}

/// Major ticks for a log10 range: every decade boundary inside [min, max].
pub fn log_decades(min: f64, max: f64) -> Vec<f64> {
    let lo = (min.max(1e-300).log10() - 1e-9).ceil() as i32;
    let hi = (max.max(1e-300).log10() + 1e-9).floor() as i32;
    (lo..=hi).map(|k| 10f64.powi(k)).collect()
}

/// Minor ticks for a log10 range: mantissas 2..9 in every covering decade.
pub fn log_minor(min: f64, max: f64) -> Vec<f64> {
    let lo = min.max(1e-300).log10().floor() as i32 - 1;
    let hi = max.max(1e-300).log10().ceil() as i32;
    let mut out = Vec::new();
    for k in lo..=hi {
        let base = 10f64.powi(k);
        for m in 2..=9u32 {
            let v = base * m as f64;
            if v >= min && v <= max {
                out.push(v);
            }
        }
    }
    out
}

/// Decade label rendered as 10 with a unicode superscript exponent.
pub fn pow10_label(exp: i32) -> String {
    const SUP: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];
    let mut s = String::from("10");
    if exp < 0 {
        s.push('⁻');
    }
    for d in exp.unsigned_abs().to_string().bytes() {
        s.push(SUP[(d - b'0') as usize]);
    }
    s
}

/// Compact label for a linear tick value.
pub fn tick_label(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    let a = v.abs();
    if !(1e-3..1e4).contains(&a) {
        return format!("{v:.1e}");
    }
    let mut s = format!("{v:.3}");
    while s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    s
}
