use std::sync::Arc;

use uuid::Uuid;

use crate::domain::league::ScoringRules;
use crate::domain::repositories::RoundRepository;

use super::errors::{RecalcError, RecalcResult};

/// Resolves the scoring configuration of a round
///
/// Fails fast with `ConfigurationMissing` when the round does not exist;
/// no side effects.
pub struct ScoringRuleResolver {
    rounds: Arc<dyn RoundRepository>,
}

impl ScoringRuleResolver {
    pub fn new(rounds: Arc<dyn RoundRepository>) -> Self {
        Self { rounds }
    }

    pub async fn resolve(&self, round_id: Uuid) -> RecalcResult<ScoringRules> {
        let round = self
            .rounds
            .find_by_id(round_id)
            .await
            .map_err(RecalcError::Persistence)?
            .ok_or(RecalcError::ConfigurationMissing { round_id })?;

        Ok(round.scoring_rules())
    }
}
