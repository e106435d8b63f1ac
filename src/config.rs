use crate::error::PatchError;
use std::str::FromStr;

/// How `compute_delta` encodes a patch whose source buffer is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptySourceMode {
    /// Byte-for-byte compatible with existing patches: the target length is
    /// left at zero, so applying the patch yields an empty buffer.
    #[default]
    Compatible,
    /// Records the real target length so the patch reconstructs the target.
    Reconstruct,
}

#[derive(Debug, Clone)]
pub struct DeltaConfig {
    pub empty_source: EmptySourceMode,
    /// Worker threads used by the `batch` helpers.
    pub threads: usize,
}

impl Default for DeltaConfig {
    fn default() -> Self {
        Self {
            empty_source: EmptySourceMode::Compatible,
            threads: num_cpus::get(),
        }
    }
}

impl DeltaConfig {
    pub fn with_empty_source(mut self, mode: EmptySourceMode) -> Self {
        self.empty_source = mode;
        self
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads.max(1);
        self
    }
}

impl FromStr for EmptySourceMode {
    type Err = PatchError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "compatible" => Ok(EmptySourceMode::Compatible),
            "reconstruct" => Ok(EmptySourceMode::Reconstruct),
            _ => Err(PatchError::ConfigError(format!("Invalid empty-source mode: {}", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mode() {
        assert_eq!("compatible".parse::<EmptySourceMode>().unwrap(), EmptySourceMode::Compatible);
        assert_eq!("Reconstruct".parse::<EmptySourceMode>().unwrap(), EmptySourceMode::Reconstruct);
        assert!(matches!("fix".parse::<EmptySourceMode>(), Err(PatchError::ConfigError(_))));
    }

    #[test]
    fn test_default_config() {
        let config = DeltaConfig::default();
        assert_eq!(config.empty_source, EmptySourceMode::Compatible);
        assert!(config.threads >= 1);
        assert_eq!(config.with_threads(0).threads, 1);
    }
}
