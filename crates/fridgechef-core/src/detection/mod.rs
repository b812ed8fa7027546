//! Ingredient detection.
//!
//! There is no image recognition here. [`SimulatedDetector`] hands back a
//! fixed list, and [`DetectionScheduler`] delays its delivery the way a real
//! service round-trip would. The [`Detector`] trait is the seam a real
//! service would plug into.

mod clock;
mod scheduler;

pub use clock::{Clock, ManualClock, SystemClock};
pub use scheduler::{DetectionHandle, DetectionScheduler};

use crate::error::DetectionError;

/// Delay between starting a scan and the result landing.
pub const DETECTION_DELAY_MS: u64 = 2_000;

/// What the simulator "sees" in every fridge.
pub const CANNED_INGREDIENTS: [&str; 10] = [
    "Ovos",
    "Leite",
    "Tomate",
    "Queijo Mussarela",
    "Cebola",
    "Alho",
    "Frango",
    "Arroz",
    "Feijão",
    "Batata",
];

/// A captured fridge photo.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImagePayload {
    pub bytes: Vec<u8>,
    pub media_type: Option<String>,
}

impl ImagePayload {
    pub fn new(bytes: Vec<u8>, media_type: impl Into<String>) -> Self {
        Self {
            bytes,
            media_type: Some(media_type.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Turns a photo into ingredient names.
pub trait Detector {
    /// # Errors
    ///
    /// Implementations report capture problems, empty results and service
    /// outages through [`DetectionError`].
    fn detect(&self, image: &ImagePayload) -> Result<Vec<String>, DetectionError>;
}

/// Always "detects" the same list, whatever the image.
#[derive(Debug, Clone)]
pub struct SimulatedDetector {
    canned: Vec<String>,
}

impl SimulatedDetector {
    pub fn new() -> Self {
        Self::with_items(CANNED_INGREDIENTS)
    }

    pub fn with_items<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            canned: items.into_iter().map(Into::into).collect(),
        }
    }

    pub fn items(&self) -> &[String] {
        &self.canned
    }
}

impl Default for SimulatedDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl Detector for SimulatedDetector {
    fn detect(&self, _image: &ImagePayload) -> Result<Vec<String>, DetectionError> {
        Ok(self.canned.clone())
    }
}
