use std::fmt;

use serde::{Deserialize, Serialize};

use crate::stats::{RegionStats, Statistic};

/// The precision-intelligence layer the user is looking at.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum AnalysisLayer {
    LandCover,
    SoilFertility,
    TransportRisk,
    CropHealth,
    DroughtRisk,
    Groundwater,
    Rainfall,
    Mineral,
}

impl AnalysisLayer {
    pub const ALL: [AnalysisLayer; 8] = [
        AnalysisLayer::LandCover,
        AnalysisLayer::SoilFertility,
        AnalysisLayer::TransportRisk,
        AnalysisLayer::CropHealth,
        AnalysisLayer::DroughtRisk,
        AnalysisLayer::Groundwater,
        AnalysisLayer::Rainfall,
        AnalysisLayer::Mineral,
    ];

    /// Key used in `agrigeo.toml` and on the command line.
    pub fn tag(&self) -> &'static str {
        match self {
            AnalysisLayer::LandCover => "land-cover",
            AnalysisLayer::SoilFertility => "soil-fertility",
            AnalysisLayer::TransportRisk => "transport-risk",
            AnalysisLayer::CropHealth => "crop-health",
            AnalysisLayer::DroughtRisk => "drought-risk",
            AnalysisLayer::Groundwater => "groundwater",
            AnalysisLayer::Rainfall => "rainfall",
            AnalysisLayer::Mineral => "mineral",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            AnalysisLayer::LandCover => "Advanced Pro-LULC & Agroforestry",
            AnalysisLayer::SoilFertility => "Soil Fertility Proxy (NPK)",
            AnalysisLayer::TransportRisk => "Transport Risk (Slope)",
            AnalysisLayer::CropHealth => "Crop Health & Biomass (NDVI)",
            AnalysisLayer::DroughtRisk => "Drought Risk (LST)",
            AnalysisLayer::Groundwater => "Groundwater Potential (NDWI)",
            AnalysisLayer::Rainfall => "Annual Rainfall (CHIRPS)",
            AnalysisLayer::Mineral => "Mineral Mapping (Landsat 8)",
        }
    }

    /// `title()` without parentheses, as printed in reports and file names.
    pub fn plain_title(&self) -> String {
        self.title().chars().filter(|c| !matches!(c, '(' | ')')).collect()
    }

    pub fn map_header(&self) -> &'static str {
        match self {
            AnalysisLayer::LandCover => "Advanced Agroforestry & Land Use Classification",
            AnalysisLayer::SoilFertility => "Soil Fertility & NPK Nutrient Proxy",
            AnalysisLayer::TransportRisk => "Topographic Slope & Logistics Vulnerability",
            AnalysisLayer::CropHealth => "Crop Health & Biomass Density (NDVI)",
            AnalysisLayer::DroughtRisk => "Thermal Risk & Land Surface Temperature",
            AnalysisLayer::Groundwater => "Surface Moisture & Groundwater Potential Index",
            AnalysisLayer::Rainfall => "Annual Precipitation & Hydrological Accumulation",
            AnalysisLayer::Mineral => "Multiband SWIR Mineralogy & Soil Composition",
        }
    }

    /// Raster export resolution in metres.
    pub fn export_scale_m(&self) -> u32 {
        match self {
            AnalysisLayer::LandCover | AnalysisLayer::SoilFertility => 10,
            AnalysisLayer::TransportRisk => 30,
            _ => 1000,
        }
    }

    /// Statistic plotted in the monthly comparison chart.
    pub fn chart_statistic(&self) -> Statistic {
        match self {
            AnalysisLayer::DroughtRisk => Statistic::TemperatureC,
            AnalysisLayer::Groundwater => Statistic::MoistureIndex,
            AnalysisLayer::CropHealth | AnalysisLayer::SoilFertility => Statistic::VegetationIndex,
            _ => Statistic::AnnualRainfallMm,
        }
    }
}

impl fmt::Display for AnalysisLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// Coarse agro-climatic zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Biome {
    HighlandMonsoon,
    CoastalPlains,
    AridPlains,
    ModerateTropicalPlains,
}

impl Biome {
    pub fn classify(annual_rainfall_mm: f64, terrain_slope_deg: f64) -> Self {
        if annual_rainfall_mm >= 1500.0 && terrain_slope_deg > 10.0 {
            Biome::HighlandMonsoon
        } else if annual_rainfall_mm >= 1500.0 {
            Biome::CoastalPlains
        } else if annual_rainfall_mm < 800.0 {
            Biome::AridPlains
        } else {
            Biome::ModerateTropicalPlains
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Biome::HighlandMonsoon => "Highland Monsoon Zone",
            Biome::CoastalPlains => "Coastal / Heavy Rainfall Plains",
            Biome::AridPlains => "Arid / Rain-Shadow Plains",
            Biome::ModerateTropicalPlains => "Moderate Tropical Plains",
        }
    }

    pub fn crops(&self) -> &'static [&'static str] {
        match self {
            Biome::HighlandMonsoon => &["Tea", "Coffee", "Rubber", "Cardamom", "Pepper"],
            Biome::CoastalPlains => &["Coconut", "Arecanut", "Paddy (Rice)", "Jute", "Cashew"],
            Biome::AridPlains => &[
                "Pearl Millet (Bajra)",
                "Sorghum (Jowar)",
                "Aloe Vera",
                "Pulses",
            ],
            Biome::ModerateTropicalPlains => {
                &["Cotton", "Maize", "Groundnut", "Sugarcane", "Bananas"]
            }
        }
    }

    pub fn crop_list(&self) -> String {
        self.crops().join(", ")
    }
}

impl fmt::Display for Biome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PolicyRecommendation {
    pub layer: AnalysisLayer,
    pub jobs: [&'static str; 3],
    pub startup: &'static str,
    pub skills: [&'static str; 3],
    pub crop_adaptation: String,
    pub action: String,
}

struct Playbook {
    jobs: [&'static str; 3],
    startup: &'static str,
    skills: [&'static str; 3],
}

fn playbook(layer: AnalysisLayer) -> Playbook {
    match layer {
        AnalysisLayer::LandCover => Playbook {
            jobs: [
                "Agroforestry Field Mapper",
                "Reclamation Site Auditor",
                "Eco-Zone Manager",
            ],
            startup: "Women-led Intercropping & Timber Nursery Cooperative",
            skills: ["GPS Mapping", "Forestry Management", "Nursery Setup"],
        },
        AnalysisLayer::DroughtRisk => Playbook {
            jobs: [
                "Thermal Risk Assessor",
                "Poly-house Climate Controller",
                "Heat-Resistant Seed Cultivator",
            ],
            startup: "Shaded Nursery & Heat-Resistant Seed Bank",
            skills: [
                "Poly-house Construction",
                "Seed Preservation",
                "Heat-stroke First Aid",
            ],
        },
        AnalysisLayer::Groundwater => Playbook {
            jobs: [
                "Precision Irrigation Auditor",
                "Water-Table Analyst",
                "Solar-Pump Technician",
            ],
            startup: "Solar-Powered Micro-Irrigation Custom Hiring Center",
            skills: [
                "Drip-System Repair",
                "Solar Panel Maintenance",
                "Water Auditing",
            ],
        },
        AnalysisLayer::CropHealth => Playbook {
            jobs: [
                "Biomass Yield Estimator",
                "Post-Harvest Grader",
                "Pest-Anomaly Forecaster",
            ],
            startup: "Post-Harvest Processing & Premium Grading Center",
            skills: [
                "Visual Quality Grading",
                "Optical Sensor Operation",
                "Packaging Standards",
            ],
        },
        AnalysisLayer::SoilFertility => Playbook {
            jobs: [
                "Soil NPK Analyst",
                "Bio-Fertilizer Chemist",
                "Vermicompost Plant Operator",
            ],
            startup: "Hyper-Local Vermicompost & Organic Bio-Fertilizer Unit",
            skills: [
                "Soil Sampling",
                "Composting Science",
                "Supply Chain Logistics",
            ],
        },
        AnalysisLayer::TransportRisk => Playbook {
            jobs: [
                "Rural Fleet Coordinator",
                "Mountain Supply Chain Manager",
                "Cold-Storage Tech",
            ],
            startup: "SHG-Operated Rural Agri-Logistics & Cold-Chain Transport",
            skills: [
                "Route Optimization",
                "Fleet Management",
                "Cold-Chain Maintenance",
            ],
        },
        AnalysisLayer::Rainfall => Playbook {
            jobs: [
                "Watershed Engineer",
                "Check-Dam Supervisor",
                "Rainwater Harvesting Tech",
            ],
            startup: "Climate-Smart Watershed Infrastructure Cooperative",
            skills: [
                "Hydrological Mapping",
                "Basic Civil Masonry",
                "Catchment Planning",
            ],
        },
        AnalysisLayer::Mineral => Playbook {
            jobs: [
                "Geospatial Soil Analyst",
                "Agri-Lime Blender",
                "pH Amendment Tech",
            ],
            startup: "Custom Soil Amendment & Gypsum/Lime Blending Unit",
            skills: [
                "SWIR Satellite Interpretation",
                "Chemical Mixing Safety",
                "pH Balancing",
            ],
        },
    }
}

fn crop_adaptation(layer: AnalysisLayer, biome: Biome) -> String {
    let crops = biome.crop_list();
    match layer {
        AnalysisLayer::LandCover => format!(
            "Agroforestry integrations: Fast-growing timber intercropped with {}.",
            biome.crops()[0]
        ),
        AnalysisLayer::DroughtRisk => {
            format!("Thermal-resilient and shade-grown variants of {crops}.")
        }
        AnalysisLayer::Groundwater => {
            format!("Ultra-efficient, precision drip-irrigated {crops}.")
        }
        AnalysisLayer::CropHealth => {
            format!("Premium graded {crops} optimized for high-tier urban export.")
        }
        AnalysisLayer::SoilFertility => format!("Nitrogen-fixing legumes rotated with {crops}."),
        AnalysisLayer::TransportRisk => {
            format!("High-value, low-weight processed forms of {crops}.")
        }
        AnalysisLayer::Rainfall => {
            format!("Rain-fed and hydro-optimized integrations of {crops}.")
        }
        AnalysisLayer::Mineral => format!(
            "pH-balanced variants of {crops} tailored to local soil iron/clay ratios."
        ),
    }
}

fn action_plan(
    layer: AnalysisLayer,
    stats: &RegionStats,
    district: &str,
    adaptation: &str,
) -> String {
    let plan = match layer {
        AnalysisLayer::LandCover => format!(
            "Target ESA Class 4 (Scrub) lands immediately. Mobilize landless women to establish \
             subsidized agroforestry plots, securing land-tenure rights while planting \
             {adaptation}"
        ),
        AnalysisLayer::DroughtRisk => format!(
            "Regional LST is strictly measured at {:.2}°C. Mandate SHG working hours to \
             6:00 AM - 10:00 AM to prevent occupational heatstroke. Allocate micro-loans for \
             indoor automated misting nurseries cultivating {adaptation}",
            stats.temperature_c
        ),
        AnalysisLayer::Groundwater => format!(
            "Surface moisture index is exactly {:.2}. Transition women from physical \
             water-carriers to technical water-managers by training SHGs to operate and lease \
             out precision solar-drip networks tailored for {adaptation}",
            stats.moisture_index
        ),
        AnalysisLayer::CropHealth => format!(
            "Biomass density averages {:.2}. Maximize harvest value by employing women to grade \
             and process crop yields immediately post-harvest, preventing panic-selling and \
             market spoilage.",
            stats.vegetation_index
        ),
        AnalysisLayer::SoilFertility => format!(
            "Active NPK proxy is {:.2}. Capitalize on local nutrient data by establishing \
             SHG-run organic fertilizer units. This stops local capital flight to chemical \
             corporations and aggressively regenerates {district}'s soil health.",
            stats.fertility_proxy
        ),
        AnalysisLayer::TransportRisk => format!(
            "Terrain slope of {:.2}° dictates strict logistics limits. Overcome isolation by \
             funding women-owned transport fleets (drones/ropeways for steep inclines, LCVs for \
             flat plains), bypassing middlemen entirely.",
            stats.terrain_slope_deg
        ),
        AnalysisLayer::Rainfall => format!(
            "Annual rainfall of {:.2}mm dictates water security. Utilize off-season rural labor \
             to construct women-led rainwater harvesting ponds, turning exact precipitation data \
             into long-term agrarian water reserves.",
            stats.annual_rainfall_mm
        ),
        AnalysisLayer::Mineral => format!(
            "Use advanced Landsat-8 mineral signatures (Iron/Ferrous/Clay) to empower women's \
             groups. They will manufacture and sell exact pH-balancing soil amendments tailored \
             explicitly to {district}'s geology."
        ),
    };
    format!("PRECISION PLAN: {plan}")
}

pub fn select(
    layer: AnalysisLayer,
    stats: &RegionStats,
    biome: Biome,
    district: &str,
) -> PolicyRecommendation {
    let book = playbook(layer);
    let crop_adaptation = crop_adaptation(layer, biome);
    let action = action_plan(layer, stats, district, &crop_adaptation);

    PolicyRecommendation {
        layer,
        jobs: book.jobs,
        startup: book.startup,
        skills: book.skills,
        crop_adaptation,
        action,
    }
}
