use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use warband_core::SquadId;

/// Identifier of a stored battle report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportId(pub u32);

impl fmt::Display for ReportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "report#{}", self.0)
    }
}

/// Immutable record of one committed battle.
///
/// Squad names are captured at commit time: the loser no longer exists once
/// the commit lands.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleReport {
    pub id: ReportId,
    pub content: String,
    pub winner: SquadId,
    pub loser: SquadId,
    pub winner_name: String,
    pub loser_name: String,
    pub timestamp: DateTime<Utc>,
}

/// Client-facing shape of a report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleReportView {
    pub content: String,
    pub winner_name: String,
    pub loser_name: String,
    pub timestamp: DateTime<Utc>,
}

impl From<&BattleReport> for BattleReportView {
    fn from(report: &BattleReport) -> Self {
        Self {
            content: report.content.clone(),
            winner_name: report.winner_name.clone(),
            loser_name: report.loser_name.clone(),
            timestamp: report.timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_uses_camel_case_field_names() {
        let view = BattleReportView {
            content: "The battle is over!\n".into(),
            winner_name: "Iron Knights".into(),
            loser_name: "Crimson Horde".into(),
            timestamp: DateTime::from_timestamp(0, 0).unwrap(),
        };

        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["winnerName"], "Iron Knights");
        assert_eq!(json["loserName"], "Crimson Horde");
        assert!(json.get("content").is_some());
        assert!(json.get("timestamp").is_some());
    }
}
