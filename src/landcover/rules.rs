use crate::landcover::esa;
use crate::landcover::{CoverPixel, LandCoverClass, ReclassRule};

pub struct DenseForest;
impl ReclassRule for DenseForest {
    fn id(&self) -> &'static str {
        "forest/dense"
    }
    fn class(&self) -> LandCoverClass {
        LandCoverClass::DenseForest
    }
    fn matches(&self, px: &CoverPixel, _current: Option<LandCoverClass>) -> bool {
        px.base_class == esa::TREE_COVER && px.vegetation_index > 0.65
    }
}

pub struct OpenForest;
impl ReclassRule for OpenForest {
    fn id(&self) -> &'static str {
        "forest/open"
    }
    fn class(&self) -> LandCoverClass {
        LandCoverClass::OpenForest
    }
    fn matches(&self, px: &CoverPixel, _current: Option<LandCoverClass>) -> bool {
        px.base_class == esa::TREE_COVER
            && px.vegetation_index > 0.4
            && px.vegetation_index <= 0.65
    }
}

/// Wet, vigorous tree or crop cover. Overwrites the forest classes.
pub struct Plantation;
impl ReclassRule for Plantation {
    fn id(&self) -> &'static str {
        "tree-crop/plantation"
    }
    fn class(&self) -> LandCoverClass {
        LandCoverClass::Plantation
    }
    fn matches(&self, px: &CoverPixel, _current: Option<LandCoverClass>) -> bool {
        (px.base_class == esa::TREE_COVER || px.base_class == esa::CROPLAND)
            && px.moisture_index > 0.15
            && px.vegetation_index > 0.5
    }
}

pub struct Scrub;
impl ReclassRule for Scrub {
    fn id(&self) -> &'static str {
        "scrub/degraded"
    }
    fn class(&self) -> LandCoverClass {
        LandCoverClass::Scrub
    }
    fn matches(&self, px: &CoverPixel, _current: Option<LandCoverClass>) -> bool {
        px.base_class == esa::SHRUBLAND
            || (px.base_class == esa::TREE_COVER && px.vegetation_index <= 0.4)
    }
}

pub struct Agroforestry;
impl ReclassRule for Agroforestry {
    fn id(&self) -> &'static str {
        "cropland/agroforestry"
    }
    fn class(&self) -> LandCoverClass {
        LandCoverClass::Agroforestry
    }
    fn matches(&self, px: &CoverPixel, current: Option<LandCoverClass>) -> bool {
        px.base_class == esa::CROPLAND && px.vegetation_index > 0.55 && current.is_none()
    }
}

pub struct Cropland;
impl ReclassRule for Cropland {
    fn id(&self) -> &'static str {
        "cropland/annual"
    }
    fn class(&self) -> LandCoverClass {
        LandCoverClass::Cropland
    }
    fn matches(&self, px: &CoverPixel, current: Option<LandCoverClass>) -> bool {
        px.base_class == esa::CROPLAND && current.is_none()
    }
}

pub struct Urban;
impl ReclassRule for Urban {
    fn id(&self) -> &'static str {
        "built-up"
    }
    fn class(&self) -> LandCoverClass {
        LandCoverClass::Urban
    }
    fn matches(&self, px: &CoverPixel, _current: Option<LandCoverClass>) -> bool {
        px.base_class == esa::BUILT_UP
    }
}

pub struct Water;
impl ReclassRule for Water {
    fn id(&self) -> &'static str {
        "water"
    }
    fn class(&self) -> LandCoverClass {
        LandCoverClass::Water
    }
    fn matches(&self, px: &CoverPixel, _current: Option<LandCoverClass>) -> bool {
        px.base_class == esa::PERMANENT_WATER
    }
}

pub struct Barren;
impl ReclassRule for Barren {
    fn id(&self) -> &'static str {
        "barren/unassigned"
    }
    fn class(&self) -> LandCoverClass {
        LandCoverClass::Barren
    }
    fn matches(&self, _px: &CoverPixel, current: Option<LandCoverClass>) -> bool {
        current.is_none()
    }
}
