use std::sync::Arc;

use pricegrid_core::{
    DenormalizeConfig, DenormalizedPrice, EmptyWindows, PriceSource, PricegridConfig,
    PricegridError, RenderConfig, Strategy, denormalize, render_table,
};

/// Runs the range denormalization over the prices of one source.
pub struct Denormalizer {
    pub(crate) source: Arc<dyn PriceSource>,
    pub(crate) cfg: PricegridConfig,
}

/// Builder for constructing a `Denormalizer` with custom configuration.
pub struct DenormalizerBuilder {
    source: Option<Arc<dyn PriceSource>>,
    cfg: PricegridConfig,
}

impl Default for DenormalizerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DenormalizerBuilder {
    /// Create a new builder with default configuration: nested scan, every
    /// window kept, 22-wide table cells.
    #[must_use]
    pub fn new() -> Self {
        Self {
            source: None,
            cfg: PricegridConfig::default(),
        }
    }

    /// Set the price source. A later call replaces an earlier one.
    #[must_use]
    pub fn with_source(mut self, source: Arc<dyn PriceSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, cfg: PricegridConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Select how candidate order dates are collected.
    #[must_use]
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.cfg.denormalize.strategy = strategy;
        self
    }

    /// Select what happens to windows that cover no date.
    #[must_use]
    pub fn empty_windows(mut self, policy: EmptyWindows) -> Self {
        self.cfg.denormalize.empty_windows = policy;
        self
    }

    /// Set the table layout.
    #[must_use]
    pub fn render(mut self, render: RenderConfig) -> Self {
        self.cfg.render = render;
        self
    }

    /// Build the `Denormalizer`.
    ///
    /// # Errors
    /// Returns `Err(PricegridError::InvalidConfig)` if no source was set or
    /// the table width is zero.
    pub fn build(self) -> Result<Denormalizer, PricegridError> {
        let Some(source) = self.source else {
            return Err(PricegridError::invalid_config(
                "no price source set; add one via with_source(...)",
            ));
        };
        if self.cfg.render.width == 0 {
            return Err(PricegridError::invalid_config(
                "render width must be at least 1",
            ));
        }
        Ok(Denormalizer {
            source,
            cfg: self.cfg,
        })
    }
}

/// Attribute a source error to the source that produced it.
///
/// Parse and source errors pass through unchanged; anything else is wrapped as
/// a `Source` error naming `source`.
pub fn tag_err(source: &str, e: PricegridError) -> PricegridError {
    match e {
        e @ (PricegridError::Parse { .. } | PricegridError::Source { .. }) => e,
        other => PricegridError::source_failed(source, other.to_string()),
    }
}

impl Denormalizer {
    /// Start building a new `Denormalizer`.
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    /// use pricegrid::{Denormalizer, InMemorySource, Strategy};
    ///
    /// let source = InMemorySource::from_json(&std::fs::read_to_string("prices.json")?)?;
    /// let rows = Denormalizer::builder()
    ///     .with_source(Arc::new(source))
    ///     .strategy(Strategy::Sweep)
    ///     .build()?
    ///     .run()?;
    /// ```
    #[must_use]
    pub fn builder() -> DenormalizerBuilder {
        DenormalizerBuilder::new()
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &PricegridConfig {
        &self.cfg
    }

    /// Name of the bound source.
    #[must_use]
    pub fn source_name(&self) -> &'static str {
        self.source.name()
    }

    /// Read the source and denormalize every position.
    ///
    /// # Errors
    /// Propagates the source's error, tagged with the source name.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "pricegrid::core::run",
            skip(self),
            fields(source = self.source.name()),
        )
    )]
    pub fn run(&self) -> Result<Vec<DenormalizedPrice>, PricegridError> {
        let name = self.source.name();
        let positions = self
            .source
            .prices_by_position()
            .map_err(|e| tag_err(name, e))?;
        #[cfg(feature = "tracing")]
        tracing::info!(positions = positions.len(), "loaded prices");
        let rows = denormalize(positions, &self.cfg.denormalize);
        #[cfg(feature = "tracing")]
        tracing::info!(rows = rows.len(), "denormalized");
        Ok(rows)
    }

    /// Algorithm options in effect.
    #[must_use]
    pub const fn denormalize_config(&self) -> &DenormalizeConfig {
        &self.cfg.denormalize
    }

    /// Render rows as a fixed-width table using the configured layout.
    #[must_use]
    pub fn render(&self, rows: &[DenormalizedPrice]) -> String {
        render_table(rows, &self.cfg.render)
    }
}
