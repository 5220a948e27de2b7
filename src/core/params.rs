use serde::{Deserialize, Serialize};

/// Fixed analysis parameters attached to every sample row.
/// Suitable for JSON presets; missing fields fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchParams {
    /// Center of the quantification window relative to the 3' end of the guide
    pub quantification_window_center: i64,
    /// Size in bp of the quantification window
    pub quantification_window_size: i64,
    /// Minimum average phred33 read quality
    pub min_average_read_quality: i64,
    /// Minimum percent of reads for an allele to be plotted
    pub min_frequency_alleles_around_cut_to_plot: f64,
    /// Window around the quantification center to plot
    pub plot_window_size: i64,
}

impl Default for BatchParams {
    fn default() -> Self {
        Self {
            quantification_window_center: -3,
            quantification_window_size: 1,
            min_average_read_quality: 10,
            min_frequency_alleles_around_cut_to_plot: 0.2,
            plot_window_size: 20,
        }
    }
}

impl BatchParams {
    /// Load a preset from a JSON file.
    pub fn from_json_file(path: &std::path::Path) -> std::io::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        serde_json::from_str(&text).map_err(std::io::Error::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_preset_keeps_defaults() {
        let params: BatchParams =
            serde_json::from_str(r#"{ "plot_window_size": 40 }"#).unwrap();
        assert_eq!(params.plot_window_size, 40);
        assert_eq!(params.quantification_window_center, -3);
        assert_eq!(params.min_frequency_alleles_around_cut_to_plot, 0.2);
    }
}
