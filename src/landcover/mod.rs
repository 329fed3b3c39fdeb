pub mod rules;

use std::fmt;
use std::sync::OnceLock;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// ESA WorldCover codes the reclassifier reads.
pub mod esa {
    pub const TREE_COVER: u8 = 10;
    pub const SHRUBLAND: u8 = 20;
    pub const CROPLAND: u8 = 40;
    pub const BUILT_UP: u8 = 50;
    pub const PERMANENT_WATER: u8 = 80;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum LandCoverClass {
    DenseForest = 1,
    OpenForest = 2,
    Plantation = 3,
    Scrub = 4,
    Agroforestry = 5,
    Cropland = 6,
    Urban = 7,
    Water = 8,
    Barren = 9,
}

impl LandCoverClass {
    pub const ALL: [LandCoverClass; 9] = [
        LandCoverClass::DenseForest,
        LandCoverClass::OpenForest,
        LandCoverClass::Plantation,
        LandCoverClass::Scrub,
        LandCoverClass::Agroforestry,
        LandCoverClass::Cropland,
        LandCoverClass::Urban,
        LandCoverClass::Water,
        LandCoverClass::Barren,
    ];

    pub fn code(&self) -> u8 {
        *self as u8
    }

    pub fn label(&self) -> &'static str {
        match self {
            LandCoverClass::DenseForest => "Dense Forest",
            LandCoverClass::OpenForest => "Open Forest",
            LandCoverClass::Plantation => "Plantation",
            LandCoverClass::Scrub => "Scrub",
            LandCoverClass::Agroforestry => "Agroforestry",
            LandCoverClass::Cropland => "Cropland",
            LandCoverClass::Urban => "Urban",
            LandCoverClass::Water => "Water",
            LandCoverClass::Barren => "Barren",
        }
    }

    /// Map palette entry.
    pub fn color(&self) -> &'static str {
        match self {
            LandCoverClass::DenseForest => "#004400",
            LandCoverClass::OpenForest => "#228B22",
            LandCoverClass::Plantation => "#00FF7F",
            LandCoverClass::Scrub => "#BDB76B",
            LandCoverClass::Agroforestry => "#9ACD32",
            LandCoverClass::Cropland => "#FFD700",
            LandCoverClass::Urban => "#FF0000",
            LandCoverClass::Water => "#0000FF",
            LandCoverClass::Barren => "#D3D3D3",
        }
    }
}

impl fmt::Display for LandCoverClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One pixel of the base land-cover raster with its co-located indices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoverPixel {
    pub base_class: u8,
    pub vegetation_index: f64,
    pub moisture_index: f64,
}

pub trait ReclassRule: Send + Sync {
    fn id(&self) -> &'static str;
    fn class(&self) -> LandCoverClass;
    /// `current` is what earlier rules assigned, `None` while unassigned.
    fn matches(&self, pixel: &CoverPixel, current: Option<LandCoverClass>) -> bool;
}

pub struct ReclassRegistry {
    rules: Vec<Box<dyn ReclassRule>>,
}

impl Default for ReclassRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ReclassRegistry {
    /// Order matters: later rules overwrite earlier assignments.
    pub fn new() -> Self {
        let rules: Vec<Box<dyn ReclassRule>> = vec![
            Box::new(rules::DenseForest),
            Box::new(rules::OpenForest),
            Box::new(rules::Plantation),
            Box::new(rules::Scrub),
            Box::new(rules::Agroforestry),
            Box::new(rules::Cropland),
            Box::new(rules::Urban),
            Box::new(rules::Water),
            Box::new(rules::Barren),
        ];

        ReclassRegistry { rules }
    }

    pub fn rules(&self) -> &[Box<dyn ReclassRule>] {
        &self.rules
    }

    pub fn classify(&self, pixel: &CoverPixel) -> LandCoverClass {
        let mut current = None;
        for rule in &self.rules {
            if rule.matches(pixel, current) {
                current = Some(rule.class());
            }
        }
        current.unwrap_or(LandCoverClass::Barren)
    }
}

fn registry() -> &'static ReclassRegistry {
    static REGISTRY: OnceLock<ReclassRegistry> = OnceLock::new();
    REGISTRY.get_or_init(ReclassRegistry::new)
}

pub fn reclassify(base_class: u8, vegetation_index: f64, moisture_index: f64) -> LandCoverClass {
    registry().classify(&CoverPixel {
        base_class,
        vegetation_index,
        moisture_index,
    })
}

pub fn reclassify_raster(pixels: &[CoverPixel]) -> Vec<LandCoverClass> {
    let registry = registry();
    pixels.par_iter().map(|px| registry.classify(px)).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassShare {
    pub class: LandCoverClass,
    pub code: u8,
    pub label: &'static str,
    pub pixels: usize,
    pub share: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LandCoverSummary {
    pub total_pixels: usize,
    pub classes: Vec<ClassShare>,
}

impl LandCoverSummary {
    pub fn dominant(&self) -> Option<&ClassShare> {
        self.classes
            .iter()
            .filter(|c| c.pixels > 0)
            .max_by_key(|c| c.pixels)
    }
}

/// Per-class pixel counts, listed in class-code order.
pub fn summarize(classes: &[LandCoverClass]) -> LandCoverSummary {
    let mut counts = [0usize; 9];
    for class in classes {
        counts[(class.code() - 1) as usize] += 1;
    }
    let total = classes.len();
    let shares = LandCoverClass::ALL
        .iter()
        .zip(counts)
        .map(|(class, pixels)| ClassShare {
            class: *class,
            code: class.code(),
            label: class.label(),
            pixels,
            share: if total == 0 {
                0.0
            } else {
                pixels as f64 / total as f64
            },
        })
        .collect();

    LandCoverSummary {
        total_pixels: total,
        classes: shares,
    }
}
