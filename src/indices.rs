use serde::{Deserialize, Serialize};

/// NPK proxy: vegetation weighted by surface moisture. Negative when vegetation is.
pub fn fertility_proxy(vegetation_index: f64, moisture_index: f64) -> f64 {
    vegetation_index * (moisture_index + 1.0)
}

/// Landsat 8 top-of-atmosphere reflectance for one pixel. A band is `None`
/// where the scene was masked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReflectancePixel {
    pub b2: Option<f64>,
    pub b4: Option<f64>,
    pub b5: Option<f64>,
    pub b6: Option<f64>,
    pub b7: Option<f64>,
}

/// Spatial means of the SWIR band ratios. `None` when no pixel was usable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MineralIndices {
    /// Iron oxides, B4/B2.
    pub iron: Option<f64>,
    /// Ferrous minerals, B6/B5.
    pub ferrous: Option<f64>,
    /// Clay / hydrothermal alteration, B6/B7.
    pub clay: Option<f64>,
}

#[derive(Default)]
struct RatioMean {
    sum: f64,
    count: usize,
}

impl RatioMean {
    fn push(&mut self, numerator: Option<f64>, denominator: Option<f64>) {
        let (Some(num), Some(den)) = (numerator, denominator) else {
            return;
        };
        if den == 0.0 {
            return;
        }
        // Also catches overflow from tiny denominators.
        let ratio = num / den;
        if ratio.is_finite() {
            self.sum += ratio;
            self.count += 1;
        }
    }

    fn mean(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / self.count as f64)
    }
}

/// A pixel is left out of a ratio's mean when either band is absent, the
/// denominator is zero, or the ratio is not finite.
pub fn mineral_indices(pixels: &[ReflectancePixel]) -> MineralIndices {
    let mut iron = RatioMean::default();
    let mut ferrous = RatioMean::default();
    let mut clay = RatioMean::default();

    for px in pixels {
        iron.push(px.b4, px.b2);
        ferrous.push(px.b6, px.b5);
        clay.push(px.b6, px.b7);
    }

    MineralIndices {
        iron: iron.mean(),
        ferrous: ferrous.mean(),
        clay: clay.mean(),
    }
}
