use serde::Serialize;

use crate::policy::AnalysisLayer;

pub const EXPORT_FOLDER: &str = "AgriGeo_Shield_Exports";

/// Raster export job handed to the earth-observation service. Fire-and-forget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportTask {
    pub description: String,
    pub file_prefix: String,
    pub folder: &'static str,
    pub scale_m: u32,
}

pub fn export_task(layer: AnalysisLayer, district: &str, target_year: u16) -> ExportTask {
    let description = format!(
        "{}_{}_{target_year}",
        layer.plain_title().replace(' ', "_"),
        district.replace(' ', "_")
    );

    ExportTask {
        file_prefix: description.clone(),
        description,
        folder: EXPORT_FOLDER,
        scale_m: layer.export_scale_m(),
    }
}
