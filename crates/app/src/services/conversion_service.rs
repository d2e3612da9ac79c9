//! Conversion service: load a project and turn it into a Home Assistant
//! configuration.

use std::path::Path;

use knxha_domain::ha_config::HaConfig;
use knxha_domain::registry::Registry;

use crate::claimed::ClaimedSet;
use crate::classify::{
    ClassifyContext, classify_binary_sensors, classify_climates, classify_covers,
    classify_lights, classify_sensors, classify_switches,
};
use crate::coverage::CoverageReport;
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::ports::ProjectSource;
use crate::range_index::RangeIndex;
use crate::settings::Settings;

/// Outcome of one conversion run.
#[derive(Debug)]
pub struct Conversion<'r> {
    pub config: HaConfig,
    pub diagnostics: Diagnostics,
    pub claimed: ClaimedSet,
    /// Range lookups of the run, reused for annotations and coverage.
    pub index: RangeIndex<'r>,
}

impl Conversion<'_> {
    /// Addresses no pass claimed.
    #[must_use]
    pub fn coverage(&self) -> CoverageReport {
        CoverageReport::new(&self.index, &self.claimed)
    }
}

/// Application service running the classifier passes over a project.
pub struct ConversionService<S> {
    source: S,
    settings: Settings,
}

impl<S: ProjectSource> ConversionService<S> {
    /// Create a new service reading projects through `source`.
    pub fn new(source: S, settings: Settings) -> Self {
        Self { source, settings }
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Load the project at `path`.
    ///
    /// # Errors
    ///
    /// Returns the source's error when the project cannot be read or is
    /// inconsistent.
    pub fn load(&self, path: &Path, language: &str) -> Result<Registry, S::Error> {
        self.source.load(path, language)
    }

    /// Run every classifier pass over `registry`.
    ///
    /// Passes run in priority order: cover, light, climate, switch, binary
    /// sensor, then sensor/number. An address claimed by one pass is never
    /// offered to a later one.
    #[tracing::instrument(skip_all, fields(addresses = registry.len()))]
    pub fn convert<'r>(&self, registry: &'r Registry) -> Conversion<'r> {
        let mut ctx = ClassifyContext::new(registry, &self.settings);
        let mut claimed = ClaimedSet::new();

        let cover = classify_covers(&mut ctx, &mut claimed);
        let light = classify_lights(&mut ctx, &mut claimed);
        let climate = classify_climates(&mut ctx, &mut claimed);
        let switch = classify_switches(&mut ctx, &mut claimed);
        let binary_sensor = classify_binary_sensors(&mut ctx, &mut claimed);
        let (sensor, number) = classify_sensors(&mut ctx, &mut claimed);
        for address in ctx.index.unplaced() {
            ctx.diagnostics.push(Diagnostic::NotInAnyRange {
                address: address.clone(),
            });
        }

        let config = HaConfig {
            light,
            switch,
            binary_sensor,
            sensor,
            number,
            climate,
            cover,
        };
        tracing::info!(
            entities = config.len(),
            claimed = claimed.len(),
            diagnostics = ctx.diagnostics.len(),
            "conversion finished"
        );

        Conversion {
            config,
            diagnostics: ctx.diagnostics,
            claimed,
            index: ctx.index,
        }
    }
}
