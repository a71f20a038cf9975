use crate::{
    error::Result,
    input::{InputSample, UseCase},
};

pub const SYSTEM_PROMPT: &str = "You are an expert agronomic agent.";

pub fn build_decision_prompt(use_case: UseCase, sample: &InputSample) -> Result<String> {
    let inputs = serde_json::to_string_pretty(sample)?;

    Ok(format!(
        r#"
You are a smart agricultural assistant helping farmers automate decisions.
Use case: {}
Inputs: {}
Generate:
1. Summary of decision
2. Action to take
3. Command to send to IoT system (standardized)
4. Reasoning for the action
"#,
        use_case.name(),
        inputs
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::model::{IrrigationInputs, RainForecast};

    #[test]
    fn prompt_carries_use_case_and_every_input() {
        let sample = InputSample::PrecisionIrrigation(IrrigationInputs {
            soil_moisture: 22.5,
            rain_forecast: RainForecast::Light,
            evapotranspiration: 5.10,
        });
        let prompt = build_decision_prompt(UseCase::PrecisionIrrigation, &sample).unwrap();

        assert!(prompt.contains("Use case: Precision Irrigation Control"));
        assert!(prompt.contains("\"soil_moisture\": 22.5"));
        assert!(prompt.contains("\"rain_forecast\": \"Light\""));
        assert!(prompt.contains("\"evapotranspiration\": 5.1"));
        for item in ["1. Summary", "2. Action", "3. Command to send to IoT", "4. Reasoning"] {
            assert!(prompt.contains(item), "missing {item}");
        }
    }

    #[test]
    fn sample_is_serialized_even_if_it_belongs_elsewhere() {
        let sample = InputSample::PrecisionIrrigation(IrrigationInputs {
            soil_moisture: 11.0,
            rain_forecast: RainForecast::Heavy,
            evapotranspiration: 3.0,
        });
        let prompt = build_decision_prompt(UseCase::InputCostOptimization, &sample).unwrap();
        assert!(prompt.contains("Use case: Input Cost Optimization"));
        assert!(prompt.contains("Heavy"));
    }
}
