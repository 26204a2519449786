use pricegrid_core::{PositionId, PriceSource, PricegridError, RawPrice};

mod fixtures;

pub use fixtures::REFERENCE_POSITION;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Mode {
    All,
    Only(Vec<PositionId>),
    Fail,
}

/// Mock price source for tests and the CLI. Serves deterministic data from static fixtures.
#[derive(Debug, Clone)]
pub struct MockSource {
    mode: Mode,
}

impl Default for MockSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSource {
    /// Every fixture position: the reference data plus edge cases
    /// (a singleton, shared delivery dates with a duplicate, leap-day windows).
    #[must_use]
    pub const fn new() -> Self {
        Self { mode: Mode::All }
    }

    /// Only the reference data set (position 1).
    #[must_use]
    pub fn reference() -> Self {
        Self::positions([REFERENCE_POSITION])
    }

    /// The given fixture positions, in the given order. Reading fails if any
    /// id has no fixture.
    #[must_use]
    pub fn positions(ids: impl IntoIterator<Item = PositionId>) -> Self {
        Self {
            mode: Mode::Only(ids.into_iter().collect()),
        }
    }

    /// A source whose every read fails.
    #[must_use]
    pub const fn failing() -> Self {
        Self { mode: Mode::Fail }
    }

    fn not_found(id: PositionId) -> PricegridError {
        PricegridError::source_failed("pricegrid-mock", format!("no fixture for position {id}"))
    }
}

impl PriceSource for MockSource {
    fn name(&self) -> &'static str {
        "pricegrid-mock"
    }

    fn prices_by_position(&self) -> Result<Vec<(PositionId, Vec<RawPrice>)>, PricegridError> {
        let ids = match &self.mode {
            Mode::All => fixtures::all_positions(),
            Mode::Only(ids) => ids.clone(),
            Mode::Fail => {
                return Err(PricegridError::source_failed(
                    self.name(),
                    "forced failure: prices_by_position",
                ));
            }
        };
        ids.into_iter()
            .map(|id| {
                fixtures::by_position(id)
                    .map(|prices| (id, prices))
                    .ok_or_else(|| Self::not_found(id))
            })
            .collect()
    }
}
