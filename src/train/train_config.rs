use serde::{Deserialize, Serialize};

/// Hyperparameters for a training run.
///
/// Every field has a default, so a JSON file only needs the keys it wants to
/// change:
///
/// ```json
/// { "hidden_size": 20, "epochs": 50 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    /// Bitmap side length; the input layer has `image_side²` neurons.
    pub image_side: usize,
    /// Number of classes, i.e. output neurons.
    pub classes: usize,
    pub hidden_size: usize,
    pub learning_rate: f64,
    pub epochs: usize,
    /// Trailing samples held out from training and used for evaluation.
    pub holdout: usize,
    /// Seed for weight initialisation; `None` draws from the thread RNG.
    pub seed: Option<u64>,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            image_side: 32,
            classes: 10,
            hidden_size: 15,
            learning_rate: 0.7,
            epochs: 30,
            holdout: 10,
            seed: None,
        }
    }
}

impl TrainConfig {
    pub fn input_size(&self) -> usize {
        self.image_side * self.image_side
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a `TrainConfig` from a JSON file; missing keys keep their
    /// defaults.
    pub fn load_json(path: &str) -> std::io::Result<TrainConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg: TrainConfig = serde_json::from_str(r#"{ "hidden_size": 20, "seed": 9 }"#).unwrap();
        assert_eq!(cfg.hidden_size, 20);
        assert_eq!(cfg.seed, Some(9));
        assert_eq!(cfg.epochs, 30);
        assert_eq!(cfg.input_size(), 1024);
    }

    #[test]
    fn json_file_round_trip() {
        let path = std::env::temp_dir().join(format!("ferrite-mlp-config-{}.json", std::process::id()));
        let path = path.to_str().unwrap();
        let cfg = TrainConfig { learning_rate: 0.25, holdout: 3, ..TrainConfig::default() };

        cfg.save_json(path).unwrap();
        let loaded = TrainConfig::load_json(path).unwrap();
        std::fs::remove_file(path).unwrap();

        assert_eq!(loaded, cfg);
    }

    #[test]
    fn malformed_json_is_invalid_data() {
        let path = std::env::temp_dir().join(format!("ferrite-mlp-bad-{}.json", std::process::id()));
        std::fs::write(&path, "{ not json").unwrap();
        let err = TrainConfig::load_json(path.to_str().unwrap()).unwrap_err();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    }
}
