use crate::models::ProcessParameters;

/// Highest energy (temperature x duration) among the dishes, if any.
pub fn max_energy(params: &[ProcessParameters]) -> Option<f64> {
    params.iter().map(ProcessParameters::energy).reduce(f64::max)
}

/// Flag the dishes with maximum energy, one flag per input in input order.
///
/// Every dish whose energy equals the maximum is flagged, so ties all get
/// `true` rather than only the first occurrence.
pub fn flag_most_energy(params: &[ProcessParameters]) -> Vec<bool> {
    let Some(max) = max_energy(params) else {
        return Vec::new();
    };

    params.iter().map(|p| p.energy() == max).collect()
}
