//! Choice between the live and the frozen path-generating process.

use pricer_models::models::ProcessEnum;
use tracing::debug;

use super::error::FreezeError;
use super::extractor::{ExtractionContext, ParameterExtractor};
use super::factory::ConstantProcessFactory;
use crate::mc::{PathGenerator, SimulationConfiguration, TimeGrid};
use crate::rng::GaussianSequenceGenerator;

/// Builds the path generator for one pricing call.
///
/// With `frozen_parameters` off the source process is used as is; with it
/// on a fresh [`ConstantProcess`](pricer_models::models::ConstantProcess)
/// is extracted and built for the call. Grid, sequence generator and
/// bridge flag are passed through untouched in both branches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PathGeneratorSelector {
    extractor: ParameterExtractor,
    factory: ConstantProcessFactory,
}

impl PathGeneratorSelector {
    /// Selector with default extraction and factory policies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selector with custom extraction and factory policies.
    pub fn with_policies(extractor: ParameterExtractor, factory: ConstantProcessFactory) -> Self {
        Self { extractor, factory }
    }

    /// Parameter extractor in use.
    pub fn extractor(&self) -> &ParameterExtractor {
        &self.extractor
    }

    /// Process factory in use.
    pub fn factory(&self) -> &ConstantProcessFactory {
        &self.factory
    }

    /// Builds the path generator.
    ///
    /// # Errors
    ///
    /// Extraction and factory failures in the frozen branch.
    pub fn select(
        &self,
        config: &SimulationConfiguration,
        source: &ProcessEnum,
        grid: TimeGrid,
        generator: GaussianSequenceGenerator,
        context: &ExtractionContext,
    ) -> Result<PathGenerator, FreezeError> {
        if !config.frozen_parameters() {
            debug!(
                process = source.process_name(),
                "Using source process for path generation"
            );
            return Ok(PathGenerator::new(
                source.clone(),
                grid,
                generator,
                config.brownian_bridge(),
            ));
        }

        let params = self.extractor.extract(source, context)?;
        let frozen = self.factory.build(&params)?;
        debug!(?params, "Using frozen process for path generation");
        Ok(PathGenerator::new(
            ProcessEnum::Constant(frozen),
            grid,
            generator,
            config.brownian_bridge(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricer_core::market_data::curves::CurveEnum;
    use pricer_core::market_data::surfaces::VolatilityEnum;
    use pricer_core::types::{Date, DayCountConvention};
    use pricer_models::models::{GeneralizedBlackScholesProcess, StochasticProcess1D};
    use std::sync::Arc;

    fn source() -> ProcessEnum {
        ProcessEnum::from(Arc::new(GeneralizedBlackScholesProcess::new(
            36.0,
            Arc::new(CurveEnum::flat(0.01)),
            Arc::new(CurveEnum::flat(0.0)),
            Arc::new(VolatilityEnum::flat(0.2)),
            DayCountConvention::ActualActual365,
        )))
    }

    fn context() -> ExtractionContext {
        ExtractionContext::new(
            Date::from_ymd(2022, 2, 24).unwrap(),
            Date::from_ymd(2022, 5, 24).unwrap(),
            Some(40.0),
        )
    }

    fn config(frozen: bool, bridge: bool) -> SimulationConfiguration {
        SimulationConfiguration::builder()
            .time_steps(10)
            .samples(1)
            .frozen_parameters(frozen)
            .brownian_bridge(bridge)
            .build()
            .unwrap()
    }

    #[test]
    fn test_live_branch_reproduces_direct_generator() {
        for bridge in [false, true] {
            let grid = TimeGrid::uniform(0.25, 10).unwrap();
            let mut direct = PathGenerator::new(
                source(),
                grid.clone(),
                GaussianSequenceGenerator::new(10, 42),
                bridge,
            );
            let mut selected = PathGeneratorSelector::new()
                .select(
                    &config(false, bridge),
                    &source(),
                    grid,
                    GaussianSequenceGenerator::new(10, 42),
                    &context(),
                )
                .unwrap();

            for _ in 0..5 {
                let expected = direct.next().unwrap().clone();
                assert_eq!(selected.next().unwrap(), &expected);
            }
            assert_eq!(selected.draws(), direct.draws());
            assert_eq!(selected.uses_brownian_bridge(), bridge);
            assert_eq!(
            selected.process().process_name(),
            "GeneralizedBlackScholesProcess"
        );
        }
    }

    #[test]
    fn test_frozen_branch_builds_constant_process() {
        let grid = TimeGrid::uniform(0.25, 10).unwrap();
        let mut selected = PathGeneratorSelector::new()
            .select(
                &config(true, false),
                &source(),
                grid,
                GaussianSequenceGenerator::new(10, 42),
                &context(),
            )
            .unwrap();
        assert_eq!(selected.process().process_name(), "ConstantProcess");
        assert_eq!(selected.process().x0(), 36.0);

        selected.next().unwrap();
        assert_eq!(selected.draws(), 10);
    }

    #[test]
    fn test_frozen_branch_propagates_extraction_errors() {
        let constant =
            ProcessEnum::from(pricer_models::models::ConstantProcess::new(36.0, 0.01, 0.0, 0.2));
        let result = PathGeneratorSelector::new().select(
            &config(true, false),
            &constant,
            TimeGrid::uniform(0.25, 10).unwrap(),
            GaussianSequenceGenerator::new(10, 42),
            &context(),
        );
        assert!(matches!(result, Err(FreezeError::UnsupportedProcessKind { .. })));
    }
}
