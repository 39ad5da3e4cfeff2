//! Upload image analysis
//!
//! A simple redness heuristic over the uploaded photo: reddish pixels
//! (red channel dominant and above a floor) contribute their dominance to a
//! score, and a score above the threshold produces an irritation warning.
//! The pipeline only ever sees the formatted summary string, never pixels.

use image::RgbImage;

use vca_domain::error::{Error, Result};

/// Score above which redness is reported as potential irritation
const REDNESS_THRESHOLD: i64 = 1000;

/// Summary when the redness score crosses the threshold
const REDNESS_DETECTED: &str = "Redness detected in the image, which might indicate irritation.";

/// Summary when the image shows no significant redness
const NO_REDNESS: &str = "No significant redness detected.";

/// Analyze an uploaded image, producing the summary string
///
/// # Returns
/// The analysis summary, or `Error::Validation` when the bytes do not
/// decode as an image.
pub fn analyze_image(bytes: &[u8]) -> Result<String> {
    let image = image::load_from_memory(bytes)
        .map_err(|e| Error::validation(format!("could not decode image: {e}")))?;
    let rgb = image.to_rgb8();

    let summary = if redness_score(&rgb) > REDNESS_THRESHOLD {
        REDNESS_DETECTED
    } else {
        NO_REDNESS
    };
    Ok(summary.to_string())
}

/// Sum of red-channel dominance over reddish pixels
///
/// A pixel counts as reddish when its red channel exceeds 100 and both
/// other channels; it contributes `r - max(g, b)`.
fn redness_score(image: &RgbImage) -> i64 {
    image
        .pixels()
        .map(|pixel| {
            let [r, g, b] = pixel.0;
            let (r, g, b) = (i64::from(r), i64::from(g), i64::from(b));
            if r > 100 && r > g && r > b {
                r - g.max(b)
            } else {
                0
            }
        })
        .sum()
}
