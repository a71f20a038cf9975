use std::{collections::HashMap, fmt, str::FromStr};

use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Error;

/// The fixed catalogue of agronomic scenarios the assistant can simulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UseCase {
    PrecisionIrrigation,
    FertilizerApplication,
    PestAndDisease,
    CropGrowthStage,
    SoilHealthRemediation,
    WeatherPlanning,
    HarvestTiming,
    LaborAndMachinery,
    EnvironmentalCompliance,
    InputCostOptimization,
}

static USE_CASE_INDEX: Lazy<HashMap<&'static str, UseCase>> =
    Lazy::new(|| UseCase::ALL.iter().map(|uc| (uc.name(), *uc)).collect());

impl UseCase {
    /// Selector order.
    pub const ALL: [UseCase; 10] = [
        UseCase::PrecisionIrrigation,
        UseCase::FertilizerApplication,
        UseCase::PestAndDisease,
        UseCase::CropGrowthStage,
        UseCase::SoilHealthRemediation,
        UseCase::WeatherPlanning,
        UseCase::HarvestTiming,
        UseCase::LaborAndMachinery,
        UseCase::EnvironmentalCompliance,
        UseCase::InputCostOptimization,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            UseCase::PrecisionIrrigation => "Precision Irrigation Control",
            UseCase::FertilizerApplication => "Autonomous Fertilizer Application",
            UseCase::PestAndDisease => "Pest & Disease Intervention",
            UseCase::CropGrowthStage => "Crop Growth Stage Monitoring & Action",
            UseCase::SoilHealthRemediation => "Soil Health Remediation Actions",
            UseCase::WeatherPlanning => "Weather-Responsive Farm Planning",
            UseCase::HarvestTiming => "Harvest Timing & Post-Harvest Handling",
            UseCase::LaborAndMachinery => "Labor & Machinery Task Assignment",
            UseCase::EnvironmentalCompliance => "Environmental Compliance Monitoring",
            UseCase::InputCostOptimization => "Input Cost Optimization",
        }
    }

    /// Field names of the samples generated for this use case, in serialization order.
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            UseCase::PrecisionIrrigation => {
                &["soil_moisture", "rain_forecast", "evapotranspiration"]
            }
            UseCase::FertilizerApplication => &["soil_n", "soil_p", "soil_k", "crop_stage"],
            UseCase::PestAndDisease => &["crop_image_desc", "humidity", "temperature"],
            UseCase::CropGrowthStage => &["ndvi_value", "current_stage"],
            UseCase::SoilHealthRemediation => &["soil_ph", "salinity"],
            UseCase::WeatherPlanning => &["next_3_days_rain_mm", "temperature_forecast"],
            UseCase::HarvestTiming => &["ripeness_index", "storage_temperature"],
            UseCase::LaborAndMachinery => {
                &["field_workload", "available_labor", "equipment_status"]
            }
            UseCase::EnvironmentalCompliance => &["nitrate_level", "water_ph"],
            UseCase::InputCostOptimization => {
                &["fertilizer_price_n", "last_year_avg_price_n", "market_trend"]
            }
        }
    }

    /// 1-based position in [`UseCase::ALL`], as shown in menus.
    pub fn from_index(index: usize) -> Option<UseCase> {
        index.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}

impl fmt::Display for UseCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for UseCase {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        USE_CASE_INDEX
            .get(s)
            .copied()
            .ok_or_else(|| Error::UnknownUseCase(s.to_string()))
    }
}

impl Serialize for UseCase {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for UseCase {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_display_name() {
        for uc in UseCase::ALL {
            assert_eq!(uc.name().parse::<UseCase>().unwrap(), uc);
        }
    }

    #[test]
    fn rejects_near_miss_names() {
        let near_misses = [
            "precision irrigation control",
            "Precision Irrigation",
            "",
            " Input Cost Optimization",
        ];
        for name in near_misses {
            match name.parse::<UseCase>() {
                Err(Error::UnknownUseCase(got)) => assert_eq!(got, name),
                other => panic!("expected UnknownUseCase, got {:?}", other),
            }
        }
    }

    #[test]
    fn index_is_one_based() {
        assert_eq!(UseCase::from_index(1), Some(UseCase::PrecisionIrrigation));
        assert_eq!(UseCase::from_index(10), Some(UseCase::InputCostOptimization));
        assert_eq!(UseCase::from_index(0), None);
        assert_eq!(UseCase::from_index(11), None);
    }

    #[test]
    fn serializes_as_display_name() {
        let json = serde_json::to_string(&UseCase::PestAndDisease).unwrap();
        assert_eq!(json, "\"Pest & Disease Intervention\"");
        let back: UseCase = serde_json::from_str(&json).unwrap();
        assert_eq!(back, UseCase::PestAndDisease);
    }
}
