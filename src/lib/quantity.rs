//! Normalization of Kubernetes resource quantity strings.
//!
//! Parsing is best-effort and never fails: a malformed magnitude becomes
//! `0.0` and unknown memory suffixes fall back to a fixed estimate, so one
//! badly declared container cannot stop the analysis of a whole cluster.

/// CPU assumed for a container that declares no CPU request.
pub const DEFAULT_CPU_CORES: f64 = 0.1;

/// Memory assumed for a container that declares no memory request.
pub const DEFAULT_MEMORY_GB: f64 = 0.128;

/// Memory assumed when the quantity uses a suffix other than `Gi` or `Mi`.
pub const FALLBACK_MEMORY_GB: f64 = 0.256;

/// CPU and memory of a container (or a whole pod) in plain units.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NormalizedResources {
    pub cpu_cores: f64,
    pub memory_gb: f64,
}

impl NormalizedResources {
    pub fn new(cpu_cores: f64, memory_gb: f64) -> Self {
        Self {
            cpu_cores,
            memory_gb,
        }
    }

    /// Normalize the raw CPU and memory request strings of one container.
    pub fn from_requests(cpu: &str, memory: &str) -> Self {
        Self {
            cpu_cores: parse_cpu(cpu),
            memory_gb: parse_memory(memory),
        }
    }

    /// Per-pod totals across all containers.
    pub fn sum<'a, I>(resources: I) -> Self
    where
        I: IntoIterator<Item = &'a NormalizedResources>,
    {
        resources
            .into_iter()
            .fold(Self::default(), |acc, r| Self {
                cpu_cores: acc.cpu_cores + r.cpu_cores,
                memory_gb: acc.memory_gb + r.memory_gb,
            })
    }
}

/// Parse a CPU request such as `"100m"`, `"0.5"` or `"2"` into cores.
pub fn parse_cpu(quantity: &str) -> f64 {
    if quantity.is_empty() {
        return DEFAULT_CPU_CORES;
    }

    // A lone "m" has no magnitude and is treated as whole cores (i.e. 0)
    match quantity.strip_suffix('m') {
        Some(millis) if !millis.is_empty() => leading_magnitude(millis) / 1000.0,
        _ => leading_magnitude(quantity),
    }
}

/// Parse a memory request such as `"128Mi"` or `"2Gi"` into gigabytes.
///
/// `Mi` values are divided by 1024, so `"512Mi"` is exactly `0.5`.
pub fn parse_memory(quantity: &str) -> f64 {
    if quantity.is_empty() {
        return DEFAULT_MEMORY_GB;
    }

    if quantity.len() > 2 {
        if let Some(gib) = quantity.strip_suffix("Gi") {
            return leading_magnitude(gib);
        }
        if let Some(mib) = quantity.strip_suffix("Mi") {
            return leading_magnitude(mib) / 1024.0;
        }
    }

    FALLBACK_MEMORY_GB
}

/// Read the longest leading decimal number of `s`, or `0.0` if there is none.
fn leading_magnitude(s: &str) -> f64 {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }

    if !seen_digit {
        return 0.0;
    }

    // Optional decimal exponent, e.g. "1e3" or "5E-1"
    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > digits_start {
            end = exp_end;
        }
    }

    let value = s[..end].parse::<f64>().unwrap_or(0.0);
    // Negative requests count as malformed
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_quantities_use_defaults() {
        assert_eq!(parse_cpu(""), 0.1);
        assert_eq!(parse_memory(""), 0.128);
    }

    #[test]
    fn cpu_millicores_and_cores() {
        assert_eq!(parse_cpu("500m"), 0.5);
        assert_eq!(parse_cpu("100m"), 0.1);
        assert_eq!(parse_cpu("1"), 1.0);
        assert_eq!(parse_cpu("2.5"), 2.5);
    }

    #[test]
    fn decimal_exponents() {
        assert_eq!(parse_cpu("1e3"), 1000.0);
        assert_eq!(parse_cpu("5e2m"), 0.5);
        assert_eq!(parse_cpu("2E+1"), 20.0);
        assert_eq!(parse_cpu("5e-1"), 0.5);
        assert!((parse_memory("1e3Mi") - 1000.0 / 1024.0).abs() < 1e-12);
        assert_eq!(parse_memory("2e0Gi"), 2.0);
        // A dangling exponent marker is ignored, like any other trailing text
        assert_eq!(parse_cpu("3e"), 3.0);
        assert_eq!(parse_cpu("3e+"), 3.0);
    }

    #[test]
    fn malformed_cpu_degrades_to_zero() {
        assert_eq!(parse_cpu("abc"), 0.0);
        assert_eq!(parse_cpu("m"), 0.0);
        assert_eq!(parse_cpu("xm"), 0.0);
        assert_eq!(parse_cpu("-1"), 0.0);
    }

    #[test]
    fn memory_binary_suffixes() {
        assert_eq!(parse_memory("1Gi"), 1.0);
        assert_eq!(parse_memory("512Mi"), 0.5);
        assert_eq!(parse_memory("256Mi"), 0.25);
        assert_eq!(parse_memory("1.5Gi"), 1.5);
    }

    #[test]
    fn unsupported_memory_suffix_falls_back() {
        assert_eq!(parse_memory("1Ti"), FALLBACK_MEMORY_GB);
        assert_eq!(parse_memory("524288Ki"), FALLBACK_MEMORY_GB);
        assert_eq!(parse_memory("134217728"), FALLBACK_MEMORY_GB);
        // Suffix with no magnitude is not a recognised Gi/Mi value
        assert_eq!(parse_memory("Gi"), FALLBACK_MEMORY_GB);
    }

    #[test]
    fn malformed_memory_magnitude_is_zero() {
        assert_eq!(parse_memory("lotsGi"), 0.0);
    }

    #[test]
    fn sum_aggregates_containers() {
        let containers = [
            NormalizedResources::from_requests("250m", "256Mi"),
            NormalizedResources::from_requests("", ""),
        ];
        let total = NormalizedResources::sum(&containers);
        assert!((total.cpu_cores - 0.35).abs() < 1e-9);
        assert!((total.memory_gb - 0.378).abs() < 1e-9);
    }

    #[test]
    fn sum_of_nothing_is_zero() {
        let none: [NormalizedResources; 0] = [];
        assert_eq!(NormalizedResources::sum(&none), NormalizedResources::default());
    }
}
