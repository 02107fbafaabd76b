use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Time-series granularity/adjustment selected by a dashboard table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeriesKind {
    #[serde(rename = "intraday")]
    Intraday,
    #[serde(rename = "daily")]
    Daily,
    #[serde(rename = "weekly")]
    Weekly,
    #[serde(rename = "monthly")]
    Monthly,
    #[serde(rename = "daily-adjusted")]
    DailyAdjusted,
    #[serde(rename = "weekly-adjusted")]
    WeeklyAdjusted,
    #[serde(rename = "monthly-adjusted")]
    MonthlyAdjusted,
}

impl SeriesKind {
    pub const ALL: [Self; 7] = [
        Self::Intraday,
        Self::Daily,
        Self::Weekly,
        Self::Monthly,
        Self::DailyAdjusted,
        Self::WeeklyAdjusted,
        Self::MonthlyAdjusted,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Intraday => "intraday",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::DailyAdjusted => "daily-adjusted",
            Self::WeeklyAdjusted => "weekly-adjusted",
            Self::MonthlyAdjusted => "monthly-adjusted",
        }
    }

    pub const fn is_adjusted(self) -> bool {
        matches!(
            self,
            Self::DailyAdjusted | Self::WeeklyAdjusted | Self::MonthlyAdjusted
        )
    }

    pub const fn is_intraday(self) -> bool {
        matches!(self, Self::Intraday)
    }
}

impl Display for SeriesKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeriesKind {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "intraday" => Ok(Self::Intraday),
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            "daily-adjusted" => Ok(Self::DailyAdjusted),
            "weekly-adjusted" => Ok(Self::WeeklyAdjusted),
            "monthly-adjusted" => Ok(Self::MonthlyAdjusted),
            other => Err(ValidationError::InvalidSeries {
                value: other.to_owned(),
            }),
        }
    }
}
