//! Customizations and the mutate-then-recompile customizer.
//!
//! Every mutator updates one field, then triggers a full recompilation.
//! There is no partial recompile path; at this scale (tens of rows, at
//! most nine parts) correctness wins over recompute cost. Mutators for a
//! given pattern must be serialized by the caller; each call produces a
//! fresh Pattern value and never mutates one already handed out.

use crate::compiler::{Pattern, compile};
use crate::difficulty::Difficulty;
use crate::error::CompileError;
use crate::palette::ColorAssignment;
use houndstitch_template::{BodyPart, BreedPreset, DogAnalysis};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Multiplier bounds enforced at the mutation boundary, not at read time.
pub const MULTIPLIER_MIN: f32 = 0.5;
pub const MULTIPLIER_MAX: f32 = 2.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customizations {
    /// The pattern palette; empty means "seed from the analysis".
    #[serde(default)]
    pub color_assignments: Vec<ColorAssignment>,
    /// Parts absent from the map are enabled.
    #[serde(default)]
    pub toggled_features: HashMap<BodyPart, bool>,
    #[serde(default)]
    pub proportion_adjustments: HashMap<BodyPart, f32>,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default = "default_multiplier")]
    pub size_multiplier: f32,
}

fn default_multiplier() -> f32 {
    1.0
}

impl Default for Customizations {
    fn default() -> Self {
        Self {
            color_assignments: Vec::new(),
            toggled_features: HashMap::new(),
            proportion_adjustments: HashMap::new(),
            difficulty: Difficulty::Standard,
            size_multiplier: 1.0,
        }
    }
}

impl Customizations {
    pub fn is_enabled(&self, part: BodyPart) -> bool {
        self.toggled_features.get(&part).copied().unwrap_or(true)
    }

    pub fn set_size_multiplier(&mut self, multiplier: f32) {
        self.size_multiplier = multiplier.clamp(MULTIPLIER_MIN, MULTIPLIER_MAX);
    }

    pub fn set_proportion(&mut self, part: BodyPart, modifier: f32) {
        self.proportion_adjustments
            .insert(part, modifier.clamp(MULTIPLIER_MIN, MULTIPLIER_MAX));
    }

    pub fn proportion(&self, part: BodyPart) -> f32 {
        self.proportion_adjustments.get(&part).copied().unwrap_or(1.0)
    }

    /// Combined per-part multiplier: global size times the part adjustment.
    pub fn combined_multiplier(&self, part: BodyPart) -> f32 {
        self.size_multiplier * self.proportion(part)
    }

    /// Re-clamp every multiplier; used when a whole record arrives from
    /// outside instead of through the narrow mutators.
    pub fn normalized(mut self) -> Self {
        self.size_multiplier = self.size_multiplier.clamp(MULTIPLIER_MIN, MULTIPLIER_MAX);
        for modifier in self.proportion_adjustments.values_mut() {
            *modifier = modifier.clamp(MULTIPLIER_MIN, MULTIPLIER_MAX);
        }
        self
    }
}

/// Applies customization deltas and recompiles. Owns its own copies of
/// the analysis and preset; the compiled pattern is replaced wholesale on
/// every edit.
pub struct Customizer {
    analysis: DogAnalysis,
    preset: BreedPreset,
    customizations: Customizations,
    current: Option<Pattern>,
}

impl Customizer {
    pub fn new(analysis: DogAnalysis, preset: BreedPreset, customizations: Customizations) -> Self {
        Self {
            analysis,
            preset,
            customizations: customizations.normalized(),
            current: None,
        }
    }

    /// The initial compile; must run before any mutator.
    pub fn compile(&mut self) -> Result<&Pattern, CompileError> {
        let pattern = compile(&self.analysis, &self.preset, &self.customizations)?;
        self.current = Some(pattern);
        Ok(self.current.as_ref().expect("just set"))
    }

    pub fn current(&self) -> Result<&Pattern, CompileError> {
        self.current.as_ref().ok_or(CompileError::NoCurrentPattern)
    }

    pub fn update_colors(
        &mut self,
        assignments: Vec<ColorAssignment>,
    ) -> Result<&Pattern, CompileError> {
        self.require_current()?;
        self.customizations.color_assignments = assignments;
        self.recompile()
    }

    pub fn toggle_feature(
        &mut self,
        part: BodyPart,
        enabled: bool,
    ) -> Result<&Pattern, CompileError> {
        self.require_current()?;
        self.customizations.toggled_features.insert(part, enabled);
        self.recompile()
    }

    pub fn adjust_proportions(
        &mut self,
        part: BodyPart,
        modifier: f32,
    ) -> Result<&Pattern, CompileError> {
        self.require_current()?;
        self.customizations.set_proportion(part, modifier);
        self.recompile()
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> Result<&Pattern, CompileError> {
        self.require_current()?;
        self.customizations.difficulty = difficulty;
        self.recompile()
    }

    /// Replace the whole customization record at once (clamped), then
    /// recompile.
    pub fn apply_customizations(
        &mut self,
        customizations: Customizations,
    ) -> Result<&Pattern, CompileError> {
        self.require_current()?;
        self.customizations = customizations.normalized();
        self.recompile()
    }

    fn require_current(&self) -> Result<(), CompileError> {
        if self.current.is_none() {
            return Err(CompileError::NoCurrentPattern);
        }
        Ok(())
    }

    fn recompile(&mut self) -> Result<&Pattern, CompileError> {
        log::debug!(
            "recompiling pattern for breed '{}'",
            self.preset.breed_id
        );
        let pattern = compile(&self.analysis, &self.preset, &self.customizations)?;
        self.current = Some(pattern);
        Ok(self.current.as_ref().expect("just set"))
    }
}
