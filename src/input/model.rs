use serde::{Deserialize, Serialize};

use crate::{error::Result, input::use_case::UseCase};

/// Leaf description reported by the simulated crop camera.
pub const CROP_IMAGE_DESCRIPTION: &str = "Yellowing leaves, spots observed.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RainForecast {
    None,
    Light,
    Moderate,
    Heavy,
}

impl RainForecast {
    pub const ALL: [RainForecast; 4] = [
        RainForecast::None,
        RainForecast::Light,
        RainForecast::Moderate,
        RainForecast::Heavy,
    ];
}

/// Soil macronutrient reading (N, P or K).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NutrientLevel {
    Low,
    Medium,
    High,
}

impl NutrientLevel {
    pub const ALL: [NutrientLevel; 3] =
        [NutrientLevel::Low, NutrientLevel::Medium, NutrientLevel::High];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CropStage {
    Vegetative,
    Flowering,
    Maturity,
}

impl CropStage {
    pub const ALL: [CropStage; 3] =
        [CropStage::Vegetative, CropStage::Flowering, CropStage::Maturity];
}

/// Cereal growth stage as observed from NDVI surveys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GrowthStage {
    Tillering,
    Booting,
    Flowering,
}

impl GrowthStage {
    pub const ALL: [GrowthStage; 3] =
        [GrowthStage::Tillering, GrowthStage::Booting, GrowthStage::Flowering];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldWorkload {
    High,
    Medium,
    Low,
}

impl FieldWorkload {
    pub const ALL: [FieldWorkload; 3] =
        [FieldWorkload::High, FieldWorkload::Medium, FieldWorkload::Low];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EquipmentStatus {
    #[serde(rename = "All Available")]
    AllAvailable,
    #[serde(rename = "Tractor Fault")]
    TractorFault,
    #[serde(rename = "Low Fuel")]
    LowFuel,
}

impl EquipmentStatus {
    pub const ALL: [EquipmentStatus; 3] = [
        EquipmentStatus::AllAvailable,
        EquipmentStatus::TractorFault,
        EquipmentStatus::LowFuel,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarketTrend {
    Rising,
    Stable,
    Falling,
}

impl MarketTrend {
    pub const ALL: [MarketTrend; 3] =
        [MarketTrend::Rising, MarketTrend::Stable, MarketTrend::Falling];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IrrigationInputs {
    /// Volumetric soil moisture, percent.
    pub soil_moisture: f64,
    pub rain_forecast: RainForecast,
    /// Reference evapotranspiration, mm/day.
    pub evapotranspiration: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FertilizerInputs {
    pub soil_n: NutrientLevel,
    pub soil_p: NutrientLevel,
    pub soil_k: NutrientLevel,
    pub crop_stage: CropStage,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PestInputs {
    pub crop_image_desc: String,
    /// Relative humidity, percent.
    pub humidity: u32,
    /// Air temperature, °C.
    pub temperature: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthStageInputs {
    pub ndvi_value: f64,
    pub current_stage: GrowthStage,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoilHealthInputs {
    pub soil_ph: f64,
    /// Electrical conductivity, dS/m.
    pub salinity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherInputs {
    pub next_3_days_rain_mm: [u32; 3],
    pub temperature_forecast: [i32; 3],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HarvestInputs {
    pub ripeness_index: f64,
    /// Cold-store temperature, °C.
    pub storage_temperature: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaborInputs {
    pub field_workload: FieldWorkload,
    pub available_labor: u32,
    pub equipment_status: EquipmentStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceInputs {
    /// Nitrate concentration in runoff, mg/L.
    pub nitrate_level: f64,
    pub water_ph: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostInputs {
    /// Current nitrogen fertilizer price per tonne.
    pub fertilizer_price_n: u32,
    pub last_year_avg_price_n: u32,
    pub market_trend: MarketTrend,
}

/// One synthetic sensor snapshot. Serializes to the bare field mapping of the
/// wrapped record, which is the shape sent to the model.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum InputSample {
    PrecisionIrrigation(IrrigationInputs),
    FertilizerApplication(FertilizerInputs),
    PestAndDisease(PestInputs),
    CropGrowthStage(GrowthStageInputs),
    SoilHealthRemediation(SoilHealthInputs),
    WeatherPlanning(WeatherInputs),
    HarvestTiming(HarvestInputs),
    LaborAndMachinery(LaborInputs),
    EnvironmentalCompliance(ComplianceInputs),
    InputCostOptimization(CostInputs),
}

impl InputSample {
    /// The use case whose schema this sample follows.
    pub fn use_case(&self) -> UseCase {
        match self {
            InputSample::PrecisionIrrigation(_) => UseCase::PrecisionIrrigation,
            InputSample::FertilizerApplication(_) => UseCase::FertilizerApplication,
            InputSample::PestAndDisease(_) => UseCase::PestAndDisease,
            InputSample::CropGrowthStage(_) => UseCase::CropGrowthStage,
            InputSample::SoilHealthRemediation(_) => UseCase::SoilHealthRemediation,
            InputSample::WeatherPlanning(_) => UseCase::WeatherPlanning,
            InputSample::HarvestTiming(_) => UseCase::HarvestTiming,
            InputSample::LaborAndMachinery(_) => UseCase::LaborAndMachinery,
            InputSample::EnvironmentalCompliance(_) => UseCase::EnvironmentalCompliance,
            InputSample::InputCostOptimization(_) => UseCase::InputCostOptimization,
        }
    }

    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}
