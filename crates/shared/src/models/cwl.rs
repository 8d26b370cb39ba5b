use serde_yaml::{Mapping, Value};

const RESOURCE_REQUIREMENT: &str = "ResourceRequirement";
const MIB_PER_GIB: f64 = 1024.0;

/// Resource hints extracted from a CWL workflow description.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CwlDocument {
    pub cpu: Option<i32>,
    pub memory_gb: Option<f64>,
    pub disk_gb: Option<f64>,
    pub preemptible: Option<bool>,
}

impl CwlDocument {
    /// Returns `None` when the content is not a YAML/JSON mapping.
    ///
    /// `ResourceRequirement` entries are read from `requirements` first and
    /// `hints` second, so a requirement wins over a hint for the same field.
    /// On a single entry the TES-style keys (`cpu`, `memory`, `disk`,
    /// `preemptible`) take precedence over the CWL ones (`coresMin`, `ramMin`,
    /// `outdirMin` + `tmpdirMin`).
    pub fn try_parse(content: &str) -> Option<Self> {
        let root: Value = serde_yaml::from_str(content).ok()?;
        let root = root.as_mapping()?;

        let mut document = CwlDocument::default();
        for section in ["requirements", "hints"] {
            if let Some(value) = root.get(section) {
                for entry in resource_requirements(value) {
                    document.fill_from(entry);
                }
            }
        }
        Some(document)
    }

    fn fill_from(&mut self, entry: &Mapping) {
        let cpu = entry
            .get("cpu")
            .and_then(as_f64)
            .or_else(|| entry.get("coresMin").and_then(as_f64))
            .filter(|cores| *cores > 0.0)
            .map(|cores| cores.ceil() as i32);

        let memory_gb = entry.get("memory").and_then(as_size_gb).or_else(|| {
            entry
                .get("ramMin")
                .and_then(as_f64)
                .map(|mib| mib / MIB_PER_GIB)
        });

        let disk_gb = entry.get("disk").and_then(as_size_gb).or_else(|| {
            let outdir = entry.get("outdirMin").and_then(as_f64);
            let tmpdir = entry.get("tmpdirMin").and_then(as_f64);
            match (outdir, tmpdir) {
                (None, None) => None,
                (outdir, tmpdir) => {
                    Some((outdir.unwrap_or(0.0) + tmpdir.unwrap_or(0.0)) / MIB_PER_GIB)
                }
            }
        });

        let preemptible = entry.get("preemptible").and_then(as_bool);

        self.cpu = self.cpu.or(cpu);
        self.memory_gb = self.memory_gb.or(memory_gb);
        self.disk_gb = self.disk_gb.or(disk_gb);
        self.preemptible = self.preemptible.or(preemptible);
    }
}

// Accepts both the list form (`- class: ResourceRequirement`) and the map
// form (`ResourceRequirement: {...}`).
fn resource_requirements(section: &Value) -> Vec<&Mapping> {
    match section {
        Value::Sequence(entries) => entries
            .iter()
            .filter_map(Value::as_mapping)
            .filter(|entry| {
                entry.get("class").and_then(Value::as_str) == Some(RESOURCE_REQUIREMENT)
            })
            .collect(),
        Value::Mapping(classes) => classes
            .get(RESOURCE_REQUIREMENT)
            .and_then(Value::as_mapping)
            .into_iter()
            .collect(),
        _ => Vec::new(),
    }
}

fn as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn as_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) => s.trim().to_ascii_lowercase().parse().ok(),
        _ => None,
    }
}

/// Plain numbers are GB; strings may carry a unit, e.g. "8 GB" or "512MiB".
fn as_size_gb(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_size_gb(s),
        _ => None,
    }
}

fn parse_size_gb(s: &str) -> Option<f64> {
    let s = s.trim();
    let split = s
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(s.len());
    let (number, unit) = s.split_at(split);
    let number: f64 = number.parse().ok()?;
    let factor = match unit.trim().to_ascii_uppercase().as_str() {
        "" | "G" | "GB" | "GIB" => 1.0,
        "K" | "KB" | "KIB" => 1.0 / (1024.0 * 1024.0),
        "M" | "MB" | "MIB" => 1.0 / 1024.0,
        "T" | "TB" | "TIB" => 1024.0,
        _ => return None,
    };
    Some(number * factor)
}
