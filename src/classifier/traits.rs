// Classifier trait — the swap-ready abstraction.
//
// This trait defines the interface for the YES/NO pothole judgment. The
// production implementation calls the Gemini API; tests substitute a mock.

use anyhow::Result;
use async_trait::async_trait;

/// Sentinel location used when a report is confirmed but no specific
/// place is named in the post.
pub const LOCATION_UNCLEAR: &str = "Location Unclear";

/// The model's judgment on a single post.
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    /// The post primarily reports a pothole or road damage.
    Pothole {
        /// Most specific location mentioned, or [`LOCATION_UNCLEAR`].
        location: String,
    },
    /// Not a pothole report.
    Negative,
}

/// Trait for classifying post text. Implementations must be async because
/// the real provider requires an HTTP API call.
#[async_trait]
pub trait PotholeClassifier: Send + Sync {
    /// Judge whether `text` reports a pothole and extract the location.
    ///
    /// Errors mean the remote call could not be completed or parsed.
    /// Callers are expected to treat an error the same as [`Verdict::Negative`]
    /// — the run never aborts over a single post.
    async fn classify(&self, text: &str) -> Result<Verdict>;
}
