//! # Stage Tags
//!
//! The stage tag names which notice shape a persisted row represents.
//! Every row is keyed by the pair (cpid, stage); advancing a case never
//! mutates an existing row, it creates a new one under the next tag.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The notice stages of the publication pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    /// Planning notice.
    #[serde(rename = "PN")]
    Pn,
    /// Prior information notice.
    #[serde(rename = "PIN")]
    Pin,
    /// Contract notice.
    #[serde(rename = "CN")]
    Cn,
    /// Early initiation notice.
    #[serde(rename = "EIN")]
    Ein,
}

impl Stage {
    /// All known stage tags.
    pub const ALL: [Stage; 4] = [Stage::Pn, Stage::Pin, Stage::Cn, Stage::Ein];

    /// Whether the stage is a planning-phase notice (PN, PIN, EIN).
    ///
    /// Planning-phase notices open in the Planning status; a contract
    /// notice opens directly in Active.
    pub fn is_planning_notice(&self) -> bool {
        matches!(self, Self::Pn | Self::Pin | Self::Ein)
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Pn => "PN",
            Self::Pin => "PIN",
            Self::Cn => "CN",
            Self::Ein => "EIN",
        };
        f.write_str(s)
    }
}

impl std::str::FromStr for Stage {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PN" => Ok(Self::Pn),
            "PIN" => Ok(Self::Pin),
            "CN" => Ok(Self::Cn),
            "EIN" => Ok(Self::Ein),
            other => Err(CoreError::UnknownStage(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_roundtrips_through_from_str() {
        for stage in Stage::ALL {
            let parsed: Stage = stage.to_string().parse().unwrap();
            assert_eq!(parsed, stage);
        }
    }

    #[test]
    fn test_unknown_stage_rejected() {
        assert!("PS".parse::<Stage>().is_err());
        assert!("pn".parse::<Stage>().is_err());
        assert!("".parse::<Stage>().is_err());
    }

    #[test]
    fn test_serde_uses_wire_tags() {
        assert_eq!(serde_json::to_string(&Stage::Pin).unwrap(), "\"PIN\"");
        let parsed: Stage = serde_json::from_str("\"EIN\"").unwrap();
        assert_eq!(parsed, Stage::Ein);
    }

    #[test]
    fn test_planning_notice_classification() {
        assert!(Stage::Pn.is_planning_notice());
        assert!(Stage::Pin.is_planning_notice());
        assert!(Stage::Ein.is_planning_notice());
        assert!(!Stage::Cn.is_planning_notice());
    }
}
