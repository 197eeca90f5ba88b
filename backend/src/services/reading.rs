//! Full kin reading: position, descriptions and interpretation.

use chrono::NaiveDate;
use std::sync::Arc;
use tracing::info;

use crate::models::KinResult;
use crate::services::descriptions::DescriptionTable;
use crate::services::interpretation::{Interpretation, InterpretationComposer};
use crate::services::kin_calculator;

/// Everything known about a birth date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KinReading {
    pub kin: KinResult,
    pub day_sign_description: String,
    pub tone_description: String,
    pub interpretation: Interpretation,
}

/// Stateless reading service shared by all requests.
///
/// Holds only read-only data, so clones are cheap and need no locking.
#[derive(Debug, Clone)]
pub struct ReadingService {
    descriptions: Arc<DescriptionTable>,
    composer: InterpretationComposer,
}

impl ReadingService {
    pub fn new(descriptions: Arc<DescriptionTable>, composer: InterpretationComposer) -> Self {
        Self {
            descriptions,
            composer,
        }
    }

    pub fn descriptions(&self) -> &DescriptionTable {
        &self.descriptions
    }

    pub fn composer(&self) -> &InterpretationComposer {
        &self.composer
    }

    /// Compute the reading for `birth_date`.
    ///
    /// The generator call is the only suspension point.
    pub async fn read(&self, birth_date: NaiveDate) -> KinReading {
        let kin = kin_calculator::compute(birth_date);
        let interpretation = self
            .composer
            .compose(birth_date, &kin, &self.descriptions)
            .await;

        info!(
            date = %birth_date,
            kin = %kin.kin_number,
            day_sign = %kin.day_sign,
            tone = %kin.tone,
            source = ?interpretation.source,
            "Computed kin reading"
        );

        KinReading {
            day_sign_description: self.descriptions.day_sign(kin.day_sign).to_string(),
            tone_description: self.descriptions.tone(kin.tone).to_string(),
            kin,
            interpretation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DaySign;
    use crate::services::descriptions::DESCRIPTION_NOT_FOUND;
    use crate::services::interpretation::InterpretationSource;

    #[tokio::test]
    async fn test_read_attaches_descriptions_and_fallback() {
        let descriptions = DescriptionTable::empty().with_day_sign(DaySign::Ahau, "Sun.");
        let service = ReadingService::new(
            Arc::new(descriptions),
            InterpretationComposer::fallback_only(),
        );

        let date = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        let reading = service.read(date).await;

        assert_eq!(reading.kin, kin_calculator::compute(date));
        assert_eq!(reading.day_sign_description, "Sun.");
        assert_eq!(reading.tone_description, DESCRIPTION_NOT_FOUND);
        assert_eq!(reading.interpretation.source, InterpretationSource::Fallback);
        assert!(reading.interpretation.text.contains("Kin 260"));
    }
}
