//! Promotional campaign records.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use quickbite_core::{AccountId, PromotionId};

/// A promotional banner campaign.
///
/// `active` is the stored on/off switch; whether a promotion is *currently
/// running* is always derived from the date window, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Promotion {
    /// Unique promotion ID.
    pub id: PromotionId,
    /// Banner headline. Non-empty.
    pub title: String,
    /// Banner body text. Non-empty.
    pub description: String,
    /// Banner image URI.
    pub image: String,
    /// First day the promotion runs (inclusive).
    pub start_date: NaiveDate,
    /// Last day the promotion runs (inclusive). Never before `start_date`.
    pub end_date: NaiveDate,
    /// Whether the promotion is switched on at all.
    pub active: bool,
    /// When the promotion was created.
    pub created_at: DateTime<Utc>,
    /// The admin account that created it.
    pub created_by: AccountId,
}

impl Promotion {
    /// Whether the promotion is running on `today`:
    /// switched on and inside its inclusive date window.
    #[must_use]
    pub fn is_running(&self, today: NaiveDate) -> bool {
        self.active && self.start_date <= today && today <= self.end_date
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn promotion(start: &str, end: &str, active: bool) -> Promotion {
        Promotion {
            id: PromotionId::generate(),
            title: "Two for one".to_owned(),
            description: "Every Tuesday".to_owned(),
            image: String::new(),
            start_date: start.parse().unwrap(),
            end_date: end.parse().unwrap(),
            active,
            created_at: Utc::now(),
            created_by: AccountId::generate(),
        }
    }

    #[test]
    fn test_running_inside_window() {
        let promo = promotion("2025-06-01", "2025-06-30", true);
        assert!(promo.is_running("2025-06-01".parse().unwrap()));
        assert!(promo.is_running("2025-06-15".parse().unwrap()));
        assert!(promo.is_running("2025-06-30".parse().unwrap()));
    }

    #[test]
    fn test_not_running_outside_window() {
        let promo = promotion("2025-06-01", "2025-06-30", true);
        assert!(!promo.is_running("2025-05-31".parse().unwrap()));
        assert!(!promo.is_running("2025-07-01".parse().unwrap()));
    }

    #[test]
    fn test_inactive_never_runs() {
        let promo = promotion("2025-06-01", "2025-06-30", false);
        assert!(!promo.is_running("2025-06-15".parse().unwrap()));
    }
}
