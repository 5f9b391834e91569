//! Handwritten-digit input preparation and prediction decoding.
//!
//! Models trained on MNIST expect a single 28×28 grayscale channel scaled
//! to [0, 1], shaped `[1, 28, 28, 1]`. The model itself lives behind the
//! `onnx` feature; this module only needs the `image` crate.

use image::DynamicImage;
use image::imageops::FilterType;
use thiserror::Error;

/// Side length of the square model input.
pub const DIGIT_SIZE: u32 = 28;

/// Number of output classes (digits 0-9).
pub const DIGIT_CLASSES: usize = 10;

/// Model input shape: batch, height, width, channels.
pub const INPUT_SHAPE: [i64; 4] = [1, DIGIT_SIZE as i64, DIGIT_SIZE as i64, 1];

#[derive(Debug, Error, PartialEq)]
pub enum DigitError {
    #[error("expected {expected} class scores, got {actual}")]
    ScoreCount { expected: usize, actual: usize },

    #[error("class scores contain NaN or infinity")]
    NonFinite,
}

/// Convert an image of any size and color type into normalized model input.
///
/// Returns `DIGIT_SIZE * DIGIT_SIZE` row-major values in [0, 1].
pub fn preprocess(image: &DynamicImage) -> Vec<f32> {
    let gray = image.to_luma8();
    let resized = image::imageops::resize(&gray, DIGIT_SIZE, DIGIT_SIZE, FilterType::CatmullRom);
    resized
        .into_raw()
        .into_iter()
        .map(|p| p as f32 / 255.0)
        .collect()
}

/// The predicted digit and the model's score for it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DigitPrediction {
    pub digit: u8,
    pub confidence: f32,
}

impl DigitPrediction {
    /// Pick the highest-scoring class. The first class wins on ties.
    pub fn from_scores(scores: &[f32]) -> Result<Self, DigitError> {
        if scores.len() != DIGIT_CLASSES {
            return Err(DigitError::ScoreCount {
                expected: DIGIT_CLASSES,
                actual: scores.len(),
            });
        }
        if scores.iter().any(|s| !s.is_finite()) {
            return Err(DigitError::NonFinite);
        }

        let (digit, &confidence) = scores
            .iter()
            .enumerate()
            .fold((0, &scores[0]), |best, (i, s)| if *s > *best.1 { (i, s) } else { best });

        Ok(Self {
            digit: digit as u8,
            confidence,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgb, RgbImage};

    #[test]
    fn preprocess_output_shape_and_range() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_fn(64, 40, |x, y| {
            Rgb([(x * 4) as u8, (y * 6) as u8, 128])
        }));
        let input = preprocess(&img);
        assert_eq!(input.len(), (DIGIT_SIZE * DIGIT_SIZE) as usize);
        assert!(input.iter().all(|v| (0.0..=1.0).contains(v)));
    }

    #[test]
    fn preprocess_scales_white_and_black() {
        let white = DynamicImage::ImageLuma8(GrayImage::from_pixel(56, 56, Luma([255])));
        assert!(preprocess(&white).iter().all(|v| (v - 1.0).abs() < 1e-3));

        let black = DynamicImage::ImageLuma8(GrayImage::from_pixel(14, 14, Luma([0])));
        assert!(preprocess(&black).iter().all(|v| v.abs() < 1e-3));
    }

    #[test]
    fn preprocess_keeps_28x28_pixels() {
        let img = DynamicImage::ImageLuma8(GrayImage::from_fn(28, 28, |x, _| {
            Luma([if x < 14 { 0 } else { 255 }])
        }));
        let input = preprocess(&img);
        // Row-major: first pixel of row 0 is dark, last is bright.
        assert!(input[0] < 0.01);
        assert!(input[27] > 0.99);
    }

    #[test]
    fn picks_argmax() {
        let scores = [0.01, 0.02, 0.03, 0.05, 0.04, 0.0, 0.0, 0.8, 0.05, 0.0];
        let p = DigitPrediction::from_scores(&scores).unwrap();
        assert_eq!(p.digit, 7);
        assert!((p.confidence - 0.8).abs() < 1e-6);
    }

    #[test]
    fn first_class_wins_tie() {
        let scores = [0.0, 0.5, 0.0, 0.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0];
        assert_eq!(DigitPrediction::from_scores(&scores).unwrap().digit, 1);
    }

    #[test]
    fn handles_negative_logits() {
        let scores = [-3.0, -1.0, -2.0, -9.0, -4.0, -5.0, -6.0, -7.0, -8.0, -0.5];
        assert_eq!(DigitPrediction::from_scores(&scores).unwrap().digit, 9);
    }

    #[test]
    fn rejects_wrong_count() {
        assert_eq!(
            DigitPrediction::from_scores(&[0.1, 0.9]).unwrap_err(),
            DigitError::ScoreCount {
                expected: 10,
                actual: 2
            }
        );
    }

    #[test]
    fn rejects_nan() {
        let mut scores = [0.1f32; 10];
        scores[4] = f32::NAN;
        assert_eq!(
            DigitPrediction::from_scores(&scores).unwrap_err(),
            DigitError::NonFinite
        );
    }
}
