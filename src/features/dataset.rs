use crate::error::{FemoError, Result};
use crate::types::{Label, SessionKey};
use ndarray::{Array1, Array2, Array3, ArrayView2, Axis};

/// Feature array and label handed to the training pipeline.
#[derive(Debug, Clone)]
pub struct LabeledSample {
    /// Shape `(channels, window_length)`
    pub features: Array2<f64>,
    pub label: Label,
    pub session: SessionKey,
    pub start: usize,
}

/// Ordered samples of one invocation.
#[derive(Debug, Clone, Default)]
pub struct SampleSet {
    samples: Vec<LabeledSample>,
}

impl SampleSet {
    pub fn from_samples(samples: Vec<LabeledSample>) -> Self {
        Self { samples }
    }

    pub fn samples(&self) -> &[LabeledSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn positives(&self) -> usize {
        self.samples.iter().filter(|s| s.label == Label::Positive).count()
    }

    pub fn negatives(&self) -> usize {
        self.samples.len() - self.positives()
    }

    /// Stack into `(n, channels, window_length)` features and `(n,)` labels.
    pub fn to_arrays(&self) -> Result<(Array3<f64>, Array1<u8>)> {
        let views: Vec<ArrayView2<f64>> = self.samples.iter().map(|s| s.features.view()).collect();
        let features = stack_features(&views)?;
        let labels = self.samples.iter().map(|s| s.label.as_u8()).collect();
        Ok((features, labels))
    }
}

fn stack_features(views: &[ArrayView2<f64>]) -> Result<Array3<f64>> {
    if views.is_empty() {
        return Ok(Array3::zeros((0, 0, 0)));
    }
    ndarray::stack(Axis(0), views).map_err(|e| {
        FemoError::Computation(format!("Feature arrays differ in shape: {}", e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(label: Label, value: f64) -> LabeledSample {
        LabeledSample {
            features: Array2::from_elem((2, 4), value),
            label,
            session: SessionKey::new("s"),
            start: 0,
        }
    }

    #[test]
    fn test_to_arrays() {
        let set = SampleSet::from_samples(vec![
            sample(Label::Positive, 1.0),
            sample(Label::Negative, 0.0),
        ]);
        let (x, y) = set.to_arrays().unwrap();
        assert_eq!(x.dim(), (2, 2, 4));
        assert_eq!(y.to_vec(), vec![1, 0]);
        assert_eq!(set.positives(), 1);
        assert_eq!(set.negatives(), 1);
    }

    #[test]
    fn test_non_uniform_shapes_rejected() {
        let mut odd = sample(Label::Negative, 0.0);
        odd.features = Array2::zeros((2, 5));
        let set = SampleSet::from_samples(vec![sample(Label::Positive, 1.0), odd]);
        assert!(matches!(set.to_arrays(), Err(FemoError::Computation(_))));
    }
}
