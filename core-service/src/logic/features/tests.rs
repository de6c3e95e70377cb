//! Integration Tests for Feature Assembly + Pipeline
//!
//! Presets go through the builder, a real fitted scaler and a stub
//! regressor, end to end.

#[cfg(test)]
mod integration_tests {
    use std::sync::Arc;

    use crate::logic::features::{
        layout::*,
        presets::{self, PRESETS},
        FeatureVector, IncidentInput, MajorIncident,
    };
    use crate::logic::model::{FeatureScaler, FittedScaler, InferenceError, Regressor, ScalerParams};
    use crate::logic::pipeline::PredictionPipeline;
    use crate::logic::severity::SeverityTier;

    /// Stand-in for the trained model: acres grow with personnel and shrink
    /// with containment. Reads raw (unscaled) columns, so it must be paired
    /// with an identity-parameter scaler.
    struct ResourceDrivenRegressor;

    impl Regressor for ResourceDrivenRegressor {
        fn predict(&self, f: &[f32; FEATURE_COUNT]) -> Result<f64, InferenceError> {
            let personnel = f64::from(f[IDX_PERSONNEL]);
            let uncontained = 1.0 - f64::from(f[IDX_PERCENT_CONTAINED]) / 100.0;
            Ok(personnel * 400.0 * uncontained)
        }
    }

    fn identity_scaler() -> FittedScaler {
        FittedScaler::from_params(ScalerParams::Standard {
            mean: vec![0.0; FEATURE_COUNT],
            scale: vec![1.0; FEATURE_COUNT],
        })
        .unwrap()
    }

    fn scenario_pipeline() -> PredictionPipeline {
        PredictionPipeline::new(Arc::new(identity_scaler()), Arc::new(ResourceDrivenRegressor))
    }

    /// Builder output is exactly the ten fields in layout order
    #[test]
    fn test_builder_field_order() {
        let input = presets::SEVERE_FIRE.input;
        let vector = input.to_feature_vector();

        assert_eq!(
            vector.values,
            [35.0, 39.0, -122.0, 10.0, 500.0, 75.0, 15.0, 10.0, 20.0, 1.0]
        );
        assert!(vector.is_compatible());
    }

    #[test]
    fn test_major_flag_is_binary_for_all_presets() {
        for preset in PRESETS {
            let flag = preset.input.to_feature_vector().values[IDX_MAJOR_INCIDENT];
            assert!(flag == 0.0 || flag == 1.0, "{}", preset.name);
            assert_eq!(flag, f32::from(preset.input.major_incident.as_flag()));
        }
    }

    #[test]
    fn test_minor_fire_scenario() {
        let result = scenario_pipeline()
            .predict_input(&presets::MINOR_FIRE.input)
            .unwrap();

        assert_eq!(result.tier, SeverityTier::Minor);
    }

    #[test]
    fn test_severe_fire_scenario() {
        let input = IncidentInput {
            county: 35,
            latitude: 39.0,
            longitude: -122.0,
            percent_contained: 10.0,
            personnel: 500,
            engines: 75,
            helicopters: 15,
            dozers: 10,
            water_tenders: 20,
            major_incident: MajorIncident::Yes,
        };
        let result = scenario_pipeline().predict_input(&input).unwrap();

        assert_eq!(result.tier, SeverityTier::Severe);
        assert_eq!(result.bundle.actions[1], "Initiate evacuation procedures");
    }

    /// With a model that reproduces the documented mapping, every preset
    /// lands on its expected tier
    #[test]
    fn test_all_preset_expectations() {
        let pipeline = scenario_pipeline();

        for preset in PRESETS {
            let Some(expected) = preset.expected else { continue };
            let result = pipeline.predict_input(&preset.input).unwrap();
            assert_eq!(result.tier, expected, "{}", preset.name);
        }
    }

    /// A real scaler output is what reaches the regressor
    #[test]
    fn test_scaled_values_reach_regressor() {
        struct EchoCounty;

        impl Regressor for EchoCounty {
            fn predict(&self, f: &[f32; FEATURE_COUNT]) -> Result<f64, InferenceError> {
                Ok(f64::from(f[IDX_COUNTY]))
            }
        }

        let mut mean = vec![0.0; FEATURE_COUNT];
        let mut scale = vec![1.0; FEATURE_COUNT];
        mean[IDX_COUNTY] = 10.0;
        scale[IDX_COUNTY] = 2.5;
        let scaler = FittedScaler::from_params(ScalerParams::Standard { mean, scale }).unwrap();

        let vector = FeatureVector::from(&presets::MINOR_FIRE.input);
        assert_eq!(scaler.transform(vector.as_array()).unwrap()[IDX_COUNTY], 2.0);

        let pipeline = PredictionPipeline::new(Arc::new(scaler), Arc::new(EchoCounty));
        let result = pipeline.predict(&vector).unwrap();
        assert_eq!(result.predicted_acres, 2.0);
    }

    #[test]
    fn test_repeated_scenarios_are_stable() {
        let pipeline = scenario_pipeline();
        let first: Vec<_> = PRESETS
            .iter()
            .map(|p| pipeline.predict_input(&p.input).unwrap())
            .map(|r| (r.predicted_acres, r.tier))
            .collect();
        let second: Vec<_> = PRESETS
            .iter()
            .map(|p| pipeline.predict_input(&p.input).unwrap())
            .map(|r| (r.predicted_acres, r.tier))
            .collect();

        assert_eq!(first, second);
        assert_eq!(pipeline.status().inference_count, 2 * PRESETS.len() as u64);
    }
}
