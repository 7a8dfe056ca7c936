use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;
use strsim::jaro_winkler;

use crate::error::{RecipeError, Result};
use crate::models::{normalize_key, Dish, ProcessParameters};
use crate::process::builtin::{DURATION_MINS, SUGGESTION_THRESHOLD, TEMPERATURE_DEG_C};

/// Which of the two process lookups failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKind {
    Temperature,
    Duration,
}

impl fmt::Display for LookupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupKind::Temperature => write!(f, "temperature"),
            LookupKind::Duration => write!(f, "duration"),
        }
    }
}

/// Source of process temperature and duration, keyed by normalized dish key.
pub trait ProcessLookup {
    fn temperature(&self, key: &str) -> Option<f64>;

    fn duration(&self, key: &str) -> Option<f64>;

    /// Keys this lookup knows, used only to suggest a spelling in errors.
    fn known_keys(&self, _kind: LookupKind) -> Vec<String> {
        Vec::new()
    }
}

/// Lookup backed by two plain functions.
pub struct FnLookup<T, D> {
    temperature: T,
    duration: D,
}

impl<T, D> FnLookup<T, D>
where
    T: Fn(&str) -> Option<f64>,
    D: Fn(&str) -> Option<f64>,
{
    pub fn new(temperature: T, duration: D) -> Self {
        Self {
            temperature,
            duration,
        }
    }
}

impl<T, D> ProcessLookup for FnLookup<T, D>
where
    T: Fn(&str) -> Option<f64>,
    D: Fn(&str) -> Option<f64>,
{
    fn temperature(&self, key: &str) -> Option<f64> {
        (self.temperature)(key)
    }

    fn duration(&self, key: &str) -> Option<f64> {
        (self.duration)(key)
    }
}

/// Temperature and duration tables, e.g. loaded from a JSON lookup file:
///
/// ```json
/// { "temperature": { "roast": 200 }, "duration": { "roast": 75 } }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "RawLookupTables")]
pub struct LookupTables {
    temperature: HashMap<String, f64>,
    duration: HashMap<String, f64>,
}

#[derive(Deserialize)]
struct RawLookupTables {
    #[serde(default)]
    temperature: HashMap<String, f64>,
    #[serde(default)]
    duration: HashMap<String, f64>,
}

impl From<RawLookupTables> for LookupTables {
    fn from(raw: RawLookupTables) -> Self {
        Self::new(raw.temperature, raw.duration)
    }
}

impl LookupTables {
    /// Build tables from raw maps; keys are normalized.
    pub fn new(temperature: HashMap<String, f64>, duration: HashMap<String, f64>) -> Self {
        Self {
            temperature: normalize_keys(temperature),
            duration: normalize_keys(duration),
        }
    }

    /// Tables shipped with the tool.
    pub fn builtin() -> Self {
        let collect = |pairs: &[(&str, f64)]| {
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), *v))
                .collect::<HashMap<_, _>>()
        };
        Self::new(collect(TEMPERATURE_DEG_C), collect(DURATION_MINS))
    }

    pub fn is_empty(&self) -> bool {
        self.temperature.is_empty() && self.duration.is_empty()
    }
}

fn normalize_keys(map: HashMap<String, f64>) -> HashMap<String, f64> {
    map.into_iter().map(|(k, v)| (normalize_key(&k), v)).collect()
}

impl ProcessLookup for LookupTables {
    fn temperature(&self, key: &str) -> Option<f64> {
        self.temperature.get(&normalize_key(key)).copied()
    }

    fn duration(&self, key: &str) -> Option<f64> {
        self.duration.get(&normalize_key(key)).copied()
    }

    fn known_keys(&self, kind: LookupKind) -> Vec<String> {
        let table = match kind {
            LookupKind::Temperature => &self.temperature,
            LookupKind::Duration => &self.duration,
        };
        table.keys().cloned().collect()
    }
}

/// Resolve temperature and duration for a dish.
///
/// A missing entry is an error; there is no default value and no fuzzy
/// fallback (the closest known key is only offered as a suggestion).
pub fn resolve_parameters(dish: &Dish, lookup: &dyn ProcessLookup) -> Result<ProcessParameters> {
    let temperature = resolve_one(dish, lookup, LookupKind::Temperature)?;
    let duration = resolve_one(dish, lookup, LookupKind::Duration)?;
    Ok(ProcessParameters::new(&dish.name, temperature, duration))
}

fn resolve_one(dish: &Dish, lookup: &dyn ProcessLookup, kind: LookupKind) -> Result<f64> {
    let key = match kind {
        LookupKind::Temperature => dish.temperature_key(),
        LookupKind::Duration => dish.duration_key(),
    };

    let value = match kind {
        LookupKind::Temperature => lookup.temperature(&key),
        LookupKind::Duration => lookup.duration(&key),
    };

    match value {
        Some(v) if v.is_finite() => Ok(v),
        Some(v) => Err(RecipeError::InvalidInput(format!(
            "{} for dish '{}' is not a finite number: {}",
            kind, dish.name, v
        ))),
        None => {
            let suggestion = closest_key(&key, &lookup.known_keys(kind));
            Err(RecipeError::Lookup {
                dish: dish.name.clone(),
                key,
                kind,
                suggestion,
            })
        }
    }
}

/// Best-scoring candidate; equal scores go to the alphabetically first key.
fn closest_key(key: &str, candidates: &[String]) -> Option<String> {
    candidates
        .iter()
        .map(|c| (c, jaro_winkler(c, key)))
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .max_by(|a, b| {
            a.1.partial_cmp(&b.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| b.0.cmp(a.0))
        })
        .map(|(c, _)| c.clone())
}
