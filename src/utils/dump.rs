use serde::{Deserialize, Serialize};

/// On-disk form of one rendered waveform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaveformDump {
    pub title: String,
    pub sample_rate: f64,
    pub num_samples: usize,
    /// seconds
    pub duration: f64,
    pub samples: Vec<f64>,
}

impl WaveformDump {
    pub fn new(title: &str, sample_rate: f64, samples: &[f64]) -> Self {
        Self {
            title: title.to_string(),
            sample_rate,
            num_samples: samples.len(),
            duration: samples.len() as f64 / sample_rate,
            samples: samples.to_vec(),
        }
    }
}

/// File stem for a title: "Sine Wave" -> "sine_wave".
pub fn slug(title: &str) -> String {
    let slug: String = title
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    if slug.is_empty() {
        "waveform".to_string()
    } else {
        slug
    }
}
