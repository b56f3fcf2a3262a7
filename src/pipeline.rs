//! The end-to-end pattern pipeline: preset registry, compilation, and
//! the two output renderings.

use houndstitch_compile::{CompileError, Customizations, Customizer, Pattern, compile};
use houndstitch_layout::{LayoutError, Page, PageGeometry, paginate_with_preview};
use houndstitch_render_core::{CommandRecorder, PageCommands, PageRenderer, RenderError};
use houndstitch_template::{BreedPreset, DogAnalysis, TemplateError};
use thiserror::Error;

/// The main error enum for all high-level operations within the engine.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("compile error: {0}")]
    Compile(#[from] CompileError),
    #[error("layout error: {0}")]
    Layout(#[from] LayoutError),
    #[error("rendering error: {0}")]
    Render(#[from] RenderError),
    #[error("preset error: {0}")]
    Template(#[from] TemplateError),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Holds the loaded breed presets and drives compile, paginate, render.
///
/// The pipeline itself is stateless across calls apart from the
/// read-only preset registry; concurrent generates for different
/// patterns need no coordination.
pub struct PatternPipeline {
    presets: Vec<BreedPreset>,
    geometry: PageGeometry,
}

impl PatternPipeline {
    pub fn new() -> Self {
        Self {
            presets: Vec::new(),
            geometry: PageGeometry::default(),
        }
    }

    pub fn with_geometry(mut self, geometry: PageGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    /// Register a breed preset, validating its invariants up front.
    pub fn register_preset(&mut self, preset: BreedPreset) -> Result<(), PipelineError> {
        preset.validate()?;
        log::debug!("registered preset '{}'", preset.breed_id);
        self.presets.push(preset);
        Ok(())
    }

    pub fn preset(&self, breed_id: &str) -> Result<&BreedPreset, PipelineError> {
        self.presets
            .iter()
            .find(|p| p.breed_id == breed_id)
            .ok_or_else(|| CompileError::MissingPreset(breed_id.to_string()).into())
    }

    /// Compile a pattern for the analysis's breed. A missing preset is a
    /// hard error ("breed not supported"), never a silent default.
    pub fn compile(
        &self,
        analysis: &DogAnalysis,
        customizations: &Customizations,
    ) -> Result<Pattern, PipelineError> {
        let preset = self.preset(&analysis.breed_id)?;
        Ok(compile(analysis, preset, customizations)?)
    }

    /// A customizer seeded with this pipeline's preset for the breed,
    /// ready for mutate-then-recompile editing.
    pub fn customizer(
        &self,
        analysis: &DogAnalysis,
        customizations: Customizations,
    ) -> Result<Customizer, PipelineError> {
        let preset = self.preset(&analysis.breed_id)?.clone();
        Ok(Customizer::new(analysis.clone(), preset, customizations))
    }

    /// Paginate a compiled pattern into fixed-size pages.
    pub fn paginate(
        &self,
        pattern: &Pattern,
        preview_src: Option<&str>,
    ) -> Result<Vec<Page>, PipelineError> {
        Ok(paginate_with_preview(pattern, self.geometry, preview_src)?)
    }

    /// The full path: compile, paginate, and record the draw-command
    /// stream for the page-description consumer.
    pub fn generate(
        &self,
        analysis: &DogAnalysis,
        customizations: &Customizations,
        preview_src: Option<&str>,
    ) -> Result<(Pattern, Vec<PageCommands>), PipelineError> {
        let pattern = self.compile(analysis, customizations)?;
        let pages = self.paginate(&pattern, preview_src)?;
        let commands = CommandRecorder::new().render_document(&pages)?;
        Ok((pattern, commands))
    }

    /// Flattened markdown rendering of the same compiled pattern.
    pub fn to_markdown(&self, pattern: &Pattern) -> String {
        houndstitch_render_text::to_markdown(pattern)
    }
}

impl Default for PatternPipeline {
    fn default() -> Self {
        Self::new()
    }
}
