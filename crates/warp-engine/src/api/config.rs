use serde::Deserialize;
use crate::systems::starfield::DEFAULT_STAR_COUNT;

/// Page-level configuration for the warp field.
/// Every field has a default, so `{}` is a valid config.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WarpConfig {
    /// Number of stars in the pool (default: 1500).
    pub star_count: usize,
    /// RNG seed. `None` lets the host pick one (e.g. from `Math.random`).
    pub seed: Option<u64>,
    /// Element id of the canvas to draw on.
    pub canvas_id: String,
    /// Element id of the hold-to-warp trigger.
    pub trigger_id: String,
    /// Element id of the custom cursor.
    pub cursor_id: String,
    /// Selector for elements that enlarge the cursor on hover.
    pub hover_selector: String,
    /// Selector for elements revealed when scrolled into view.
    pub reveal_selector: String,
    /// Visible fraction at which a reveal element activates.
    pub reveal_threshold: f64,
}

impl Default for WarpConfig {
    fn default() -> Self {
        Self {
            star_count: DEFAULT_STAR_COUNT,
            seed: None,
            canvas_id: "warp-canvas".into(),
            trigger_id: "warp-btn".into(),
            cursor_id: "cursor".into(),
            hover_selector: ".hover-trigger".into(),
            reveal_selector: ".reveal".into(),
            reveal_threshold: 0.1,
        }
    }
}

impl WarpConfig {
    /// Parse a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_default() {
        let config = WarpConfig::from_json("{}").unwrap();
        assert_eq!(config, WarpConfig::default());
        assert_eq!(config.star_count, 1500);
        assert_eq!(config.canvas_id, "warp-canvas");
    }

    #[test]
    fn partial_override() {
        let config = WarpConfig::from_json(r#"{ "star_count": 300, "seed": 9, "trigger_id": "go" }"#).unwrap();
        assert_eq!(config.star_count, 300);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.trigger_id, "go");
        assert_eq!(config.reveal_selector, ".reveal");
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(WarpConfig::from_json("{ star_count: ").is_err());
        assert!(WarpConfig::from_json(r#"{ "star_count": "many" }"#).is_err());
    }
}
