use std::collections::HashMap;

use pricegrid_types::{PositionId, PricegridError, RawPrice, RawPriceRecord};

/// Supplies raw prices already partitioned by position.
pub trait PriceSource: Send + Sync {
    /// Human-readable source name, used in error messages and logs.
    fn name(&self) -> &'static str;

    /// All raw prices grouped by position, positions in first-appearance order.
    ///
    /// # Errors
    /// Implementations return `PricegridError::Source` when the underlying
    /// data cannot be produced, or `PricegridError::Parse` for malformed dates.
    fn prices_by_position(&self) -> Result<Vec<(PositionId, Vec<RawPrice>)>, PricegridError>;
}

/// Partition a flat price list by position.
///
/// Positions keep the order in which they first appear; prices keep their
/// input order within a position.
#[must_use]
pub fn group_by_position(prices: Vec<RawPrice>) -> Vec<(PositionId, Vec<RawPrice>)> {
    let mut slot: HashMap<PositionId, usize> = HashMap::new();
    let mut groups: Vec<(PositionId, Vec<RawPrice>)> = Vec::new();
    for p in prices {
        let idx = *slot.entry(p.position_id).or_insert_with(|| {
            groups.push((p.position_id, Vec::new()));
            groups.len() - 1
        });
        groups[idx].1.push(p);
    }
    groups
}

/// A price source backed by a list held in memory.
///
/// Grouping happens once, at construction.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    groups: Vec<(PositionId, Vec<RawPrice>)>,
}

impl InMemorySource {
    /// Build a source from typed raw prices.
    #[must_use]
    pub fn new(prices: Vec<RawPrice>) -> Self {
        Self {
            groups: group_by_position(prices),
        }
    }

    /// Build a source from wire records, validating every date.
    ///
    /// # Errors
    /// Returns `Err(PricegridError::Parse)` for the first malformed date.
    pub fn from_records(records: Vec<RawPriceRecord>) -> Result<Self, PricegridError> {
        let prices = records
            .into_iter()
            .map(RawPrice::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(prices))
    }

    /// Build a source from a JSON array of wire records.
    ///
    /// # Errors
    /// Returns `Err(PricegridError::Json)` if the text is not an array of
    /// records, or `Err(PricegridError::Parse)` for a malformed date.
    pub fn from_json(json: &str) -> Result<Self, PricegridError> {
        let records: Vec<RawPriceRecord> =
            serde_json::from_str(json).map_err(|e| PricegridError::Json(e.to_string()))?;
        Self::from_records(records)
    }

    /// Number of distinct positions.
    #[must_use]
    pub fn position_count(&self) -> usize {
        self.groups.len()
    }
}

impl PriceSource for InMemorySource {
    fn name(&self) -> &'static str {
        "in-memory"
    }

    fn prices_by_position(&self) -> Result<Vec<(PositionId, Vec<RawPrice>)>, PricegridError> {
        Ok(self.groups.clone())
    }
}
