//! ONNX Runtime digit classifier for MNIST-style models.
//!
//! Loads a single-input model taking `[1, 28, 28, 1]` float pixels and
//! producing 10 class scores.

use std::path::Path;

use image::DynamicImage;
use ort::session::Session;
use ort::value::Tensor;
use tracing::{debug, info};

use crate::digit::{DIGIT_SIZE, DigitPrediction, INPUT_SHAPE, preprocess};

/// Handwritten-digit classifier. Owns its session; load once and reuse.
pub struct DigitClassifier {
    session: Session,
    input_name: String,
    input_shape: [i64; 4],
}

impl DigitClassifier {
    /// Load a model from an `.onnx` file.
    pub fn load(model_path: &Path) -> anyhow::Result<Self> {
        anyhow::ensure!(model_path.exists(), "model not found: {model_path:?}");

        let session = Session::builder()?.commit_from_file(model_path)?;
        let input_name = session
            .inputs()
            .first()
            .map(|input| input.name().to_string())
            .ok_or_else(|| anyhow::anyhow!("model has no inputs: {model_path:?}"))?;

        // NHWC and NCHW are the same memory layout for one channel, so
        // either declared shape can be fed directly.
        let input_shape = infer_input_shape(session.inputs()[0].dtype()).unwrap_or(INPUT_SHAPE);

        info!(
            model = %model_path.display(),
            input = %input_name,
            shape = ?input_shape,
            "loaded digit model"
        );
        Ok(Self {
            session,
            input_name,
            input_shape,
        })
    }

    /// Classify one image.
    pub fn predict(&mut self, image: &DynamicImage) -> anyhow::Result<DigitPrediction> {
        let pixels = preprocess(image);
        let tensor = Tensor::from_array((self.input_shape, pixels.into_boxed_slice()))?;

        let outputs = self
            .session
            .run(ort::inputs![self.input_name.as_str() => tensor])?;

        let (shape, scores) = outputs[0].try_extract_tensor::<f32>()?;
        let dims: &[i64] = shape;
        debug!(?dims, "digit model output");

        let prediction = DigitPrediction::from_scores(scores)?;
        Ok(prediction)
    }
}

/// Use the model's declared 4-d input shape when it describes one 28×28 image.
fn infer_input_shape(input_type: &ort::value::ValueType) -> Option<[i64; 4]> {
    match input_type {
        ort::value::ValueType::Tensor { shape, .. } if shape.len() == 4 => {
            let mut dims = [0i64; 4];
            for (d, &s) in dims.iter_mut().zip(shape.iter()) {
                // Dynamic (batch) dimensions are reported as -1.
                *d = if s > 0 { s } else { 1 };
            }
            let pixels: i64 = dims.iter().product();
            (pixels == (DIGIT_SIZE * DIGIT_SIZE) as i64).then_some(dims)
        }
        _ => None,
    }
}
