//! Market price rows, the row filter, price alerts and gainer/loser insights.

use chrono::NaiveDate;
use serde::Deserialize;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Quality {
    Premium,
    Standard,
    #[serde(rename = "Below Standard")]
    BelowStandard,
}

impl Quality {
    pub fn label(self) -> &'static str {
        match self {
            Quality::Premium => "Premium",
            Quality::Standard => "Standard",
            Quality::BelowStandard => "Below Standard",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Quality::Premium => "badge badge-success",
            Quality::Standard => "badge badge-secondary",
            Quality::BelowStandard => "badge badge-danger",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    pub fn icon(self) -> &'static str {
        match self {
            Trend::Up => "▲",
            Trend::Down => "▼",
            Trend::Stable => "●",
        }
    }

    pub fn text_class(self) -> &'static str {
        match self {
            Trend::Up => "text-green",
            Trend::Down => "text-red",
            Trend::Stable => "text-muted",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MarketRow {
    pub crop: String,
    #[serde(default)]
    pub variety: Option<String>,
    pub price: f64,
    pub previous_price: f64,
    pub market: String,
    pub date: NaiveDate,
    pub quality: Quality,
    pub unit: String,
}

impl MarketRow {
    /// Percentage change against the previous price, rounded to one decimal.
    pub fn change_percent(&self) -> f64 {
        if self.previous_price == 0.0 {
            return 0.0;
        }
        let raw = (self.price - self.previous_price) / self.previous_price * 100.0;
        (raw * 10.0).round() / 10.0
    }

    pub fn trend(&self) -> Trend {
        match self.change_percent().partial_cmp(&0.0) {
            Some(Ordering::Greater) => Trend::Up,
            Some(Ordering::Less) => Trend::Down,
            _ => Trend::Stable,
        }
    }

    pub fn absolute_change(&self) -> f64 {
        (self.price - self.previous_price).abs()
    }

    pub fn change_text(&self) -> String {
        let change = self.change_percent();
        let sign = if change > 0.0 { "+" } else { "" };
        format!("{sign}{change:.1}%")
    }
}

/// The row filter. `None` on crop or market means "All".
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MarketFilter {
    pub crop: Option<String>,
    pub market: Option<String>,
    pub search: String,
}

impl MarketFilter {
    pub fn matches(&self, row: &MarketRow) -> bool {
        let crop_ok = self.crop.as_deref().map_or(true, |c| row.crop == c);
        let market_ok = self.market.as_deref().map_or(true, |m| row.market == m);
        let search_ok = self.search.is_empty()
            || row.crop.to_lowercase().contains(&self.search.to_lowercase());
        crop_ok && market_ok && search_ok
    }

    pub fn apply<'a>(&self, rows: &'a [MarketRow]) -> Vec<&'a MarketRow> {
        rows.iter().filter(|row| self.matches(row)).collect()
    }
}

/// Distinct values of one column in first-seen order.
pub fn distinct<'a>(
    rows: &'a [MarketRow],
    column: impl Fn(&'a MarketRow) -> &'a str,
) -> Vec<&'a str> {
    let mut seen: Vec<&str> = Vec::new();
    for value in rows.iter().map(column) {
        if !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen
}

/// Rising rows, biggest gain first.
pub fn top_gainers(rows: &[MarketRow], limit: usize) -> Vec<&MarketRow> {
    let mut up: Vec<_> = rows.iter().filter(|r| r.trend() == Trend::Up).collect();
    up.sort_by(|a, b| b.change_percent().total_cmp(&a.change_percent()));
    up.truncate(limit);
    up
}

/// Falling rows, biggest drop first.
pub fn top_losers(rows: &[MarketRow], limit: usize) -> Vec<&MarketRow> {
    let mut down: Vec<_> = rows.iter().filter(|r| r.trend() == Trend::Down).collect();
    down.sort_by(|a, b| a.change_percent().total_cmp(&b.change_percent()));
    down.truncate(limit);
    down
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertDirection {
    #[default]
    Above,
    Below,
}

impl AlertDirection {
    pub fn id(self) -> &'static str {
        match self {
            AlertDirection::Above => "above",
            AlertDirection::Below => "below",
        }
    }

    pub fn from_id(id: &str) -> Self {
        if id == "below" {
            AlertDirection::Below
        } else {
            AlertDirection::Above
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AlertStatus {
    Reached,
    /// Rupees still to climb before an `above` alert fires.
    ToGo(f64),
    /// Rupees the price sits over a `below` target.
    AboveTarget(f64),
}

impl AlertStatus {
    pub fn text(self) -> String {
        match self {
            AlertStatus::Reached => "Target reached!".to_string(),
            AlertStatus::ToGo(gap) => format!("₹{gap:.0} to go"),
            AlertStatus::AboveTarget(gap) => format!("₹{gap:.0} above target"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PriceAlert {
    pub id: u64,
    pub crop: String,
    pub target_price: f64,
    pub current_price: f64,
    pub direction: AlertDirection,
    pub active: bool,
}

impl PriceAlert {
    pub fn status(&self) -> AlertStatus {
        let (current, target) = (self.current_price, self.target_price);
        match self.direction {
            AlertDirection::Above if current >= target => AlertStatus::Reached,
            AlertDirection::Above => AlertStatus::ToGo(target - current),
            AlertDirection::Below if current <= target => AlertStatus::Reached,
            AlertDirection::Below => AlertStatus::AboveTarget(current - target),
        }
    }

    pub fn is_reached(&self) -> bool {
        self.status() == AlertStatus::Reached
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AlertDraft {
    pub crop: String,
    pub target: String,
    pub direction: AlertDirection,
}

impl AlertDraft {
    pub fn can_submit(&self) -> bool {
        !self.crop.is_empty() && !self.target.trim().is_empty()
    }

    fn target_price(&self) -> Option<f64> {
        self.target
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|t| t.is_finite() && *t > 0.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AlertBoard {
    alerts: Vec<PriceAlert>,
    next_id: u64,
}

impl Default for AlertBoard {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl AlertBoard {
    pub fn new(seed: Vec<PriceAlert>) -> Self {
        let next_id = seed.iter().map(|a| a.id).max().unwrap_or(0) + 1;
        Self { alerts: seed, next_id }
    }

    pub fn alerts(&self) -> &[PriceAlert] {
        &self.alerts
    }

    pub fn active_count(&self) -> usize {
        self.alerts.iter().filter(|a| a.active).count()
    }

    /// Adds an alert from the draft and resets the draft. A draft with an
    /// unparseable target is left untouched and nothing is added.
    pub fn add(&mut self, draft: &mut AlertDraft, rows: &[MarketRow]) -> Option<&PriceAlert> {
        if !draft.can_submit() {
            return None;
        }
        let target_price = draft.target_price()?;
        let current_price = rows
            .iter()
            .find(|r| r.crop == draft.crop)
            .map_or(0.0, |r| r.price);
        let alert = PriceAlert {
            id: self.next_id,
            crop: std::mem::take(&mut draft.crop),
            target_price,
            current_price,
            direction: draft.direction,
            active: true,
        };
        *draft = AlertDraft::default();
        self.next_id += 1;
        self.alerts.push(alert);
        self.alerts.last()
    }

    pub fn toggle(&mut self, id: u64) -> Option<bool> {
        let alert = self.alerts.iter_mut().find(|a| a.id == id)?;
        alert.active = !alert.active;
        Some(alert.active)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct MarketContent {
    pub rows: Vec<MarketRow>,
    pub alerts: Vec<PriceAlert>,
    pub summary: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(crop: &str, market: &str, price: f64, previous_price: f64) -> MarketRow {
        MarketRow {
            crop: crop.into(),
            variety: None,
            price,
            previous_price,
            market: market.into(),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            quality: Quality::Standard,
            unit: "₹/Quintal".into(),
        }
    }

    fn rows() -> Vec<MarketRow> {
        vec![
            row("Rice", "Delhi Mandi", 2100.0, 1995.0),
            row("Wheat", "Indore Mandi", 2350.0, 2400.0),
            row("Cotton", "Akola Mandi", 5800.0, 5330.0),
            row("Soybean", "Bhopal Mandi", 4200.0, 4150.0),
            row("Onion", "Nashik Mandi", 1800.0, 1950.0),
            row("Tomato", "Bangalore Mandi", 2500.0, 2500.0),
        ]
    }

    #[test]
    fn change_is_derived_from_previous_price() {
        let rows = rows();
        let changes: Vec<_> = rows.iter().map(MarketRow::change_percent).collect();
        assert_eq!(changes, [5.3, -2.1, 8.8, 1.2, -7.7, 0.0]);
        assert_eq!(rows[5].trend(), Trend::Stable);
        assert_eq!(rows[0].change_text(), "+5.3%");
        assert_eq!(rows[1].change_text(), "-2.1%");
        assert_eq!(rows[1].absolute_change(), 50.0);
    }

    #[test]
    fn zero_previous_price_is_stable() {
        assert_eq!(row("Maize", "X", 100.0, 0.0).trend(), Trend::Stable);
    }

    #[test]
    fn filter_equals_predicate_subset() {
        let rows = rows();
        let crops = [None, Some("Rice"), Some("Onion"), Some("Maize")];
        let markets = [None, Some("Delhi Mandi"), Some("Nashik Mandi")];
        let searches = ["", "o", "ON", "rice", "zz"];
        for crop in crops {
            for market in markets {
                for search in searches {
                    let filter = MarketFilter {
                        crop: crop.map(str::to_string),
                        market: market.map(str::to_string),
                        search: search.to_string(),
                    };
                    let expected: Vec<&MarketRow> = rows
                        .iter()
                        .filter(|r| crop.map_or(true, |c| r.crop == c))
                        .filter(|r| market.map_or(true, |m| r.market == m))
                        .filter(|r| r.crop.to_lowercase().contains(&search.to_lowercase()))
                        .collect();
                    assert_eq!(filter.apply(&rows), expected, "{filter:?}");
                }
            }
        }
    }

    #[test]
    fn search_is_case_insensitive_on_crop_only() {
        let rows = rows();
        let filter = MarketFilter { search: "ON".into(), ..Default::default() };
        let crops: Vec<_> = filter.apply(&rows).iter().map(|r| r.crop.as_str()).collect();
        assert_eq!(crops, ["Cotton", "Onion"]);
        let by_market = MarketFilter { search: "delhi".into(), ..Default::default() };
        assert!(by_market.apply(&rows).is_empty());
    }

    #[test]
    fn distinct_keeps_first_seen_order() {
        let mut rows = rows();
        rows.push(row("Rice", "Akola Mandi", 2000.0, 2000.0));
        assert_eq!(distinct(&rows, |r| r.crop.as_str()).len(), 6);
        assert_eq!(distinct(&rows, |r| r.market.as_str())[2], "Akola Mandi");
    }

    #[test]
    fn gainers_and_losers() {
        let rows = rows();
        let gainers: Vec<_> = top_gainers(&rows, 3).iter().map(|r| r.crop.as_str()).collect();
        assert_eq!(gainers, ["Cotton", "Rice", "Soybean"]);
        let losers: Vec<_> = top_losers(&rows, 3).iter().map(|r| r.crop.as_str()).collect();
        assert_eq!(losers, ["Onion", "Wheat"]);
    }

    fn alert(direction: AlertDirection, target_price: f64, current_price: f64) -> PriceAlert {
        PriceAlert {
            id: 1,
            crop: "Rice".into(),
            target_price,
            current_price,
            direction,
            active: true,
        }
    }

    #[test]
    fn above_alert_reached_iff_current_at_or_over_target() {
        for (target, current) in [(2200.0, 2100.0), (2100.0, 2100.0), (2000.0, 2100.0)] {
            let a = alert(AlertDirection::Above, target, current);
            assert_eq!(a.is_reached(), current >= target);
        }
        assert_eq!(alert(AlertDirection::Above, 2200.0, 2100.0).status().text(), "₹100 to go");
    }

    #[test]
    fn below_alert_reached_iff_current_at_or_under_target() {
        for (target, current) in [(2200.0, 2100.0), (2100.0, 2100.0), (2000.0, 2100.0)] {
            let a = alert(AlertDirection::Below, target, current);
            assert_eq!(a.is_reached(), current <= target);
        }
        assert_eq!(
            alert(AlertDirection::Below, 2000.0, 2100.0).status().text(),
            "₹100 above target"
        );
    }

    #[test]
    fn adding_an_alert_uses_current_price_and_resets_draft() {
        let rows = rows();
        let mut board = AlertBoard::new(vec![alert(AlertDirection::Above, 2200.0, 2100.0)]);
        let mut draft = AlertDraft {
            crop: "Onion".into(),
            target: "1700".into(),
            direction: AlertDirection::Below,
        };
        let added = board.add(&mut draft, &rows).cloned().unwrap();
        assert_eq!(added.id, 2);
        assert_eq!(added.current_price, 1800.0);
        assert!(added.active);
        assert_eq!(added.status(), AlertStatus::AboveTarget(100.0));
        assert_eq!(draft, AlertDraft::default());
        assert_eq!(board.active_count(), 2);
    }

    #[test]
    fn bad_target_is_ignored() {
        let rows = rows();
        let mut board = AlertBoard::default();
        let mut draft = AlertDraft {
            crop: "Rice".into(),
            target: "abc".into(),
            ..Default::default()
        };
        assert!(draft.can_submit());
        assert!(board.add(&mut draft, &rows).is_none());
        assert_eq!(draft.crop, "Rice");
        let mut empty = AlertDraft { crop: "Rice".into(), ..Default::default() };
        assert!(!empty.can_submit());
        assert!(board.add(&mut empty, &rows).is_none());
        assert!(board.alerts().is_empty());
    }

    #[test]
    fn unknown_crop_alert_starts_at_zero_price() {
        let mut board = AlertBoard::default();
        let mut draft = AlertDraft {
            crop: "Maize".into(),
            target: "10".into(),
            ..Default::default()
        };
        let added = board.add(&mut draft, &rows()).cloned().unwrap();
        assert_eq!(added.current_price, 0.0);
        assert_eq!(added.id, 1);
    }

    #[test]
    fn markets_are_counted_once_across_rows() {
        let mut rows = rows();
        rows.push(row("Maize", "Delhi Mandi", 1900.0, 1900.0));
        let markets = distinct(&rows, |r| r.market.as_str());
        assert_eq!(markets.len(), 6);
        assert!(markets.len() < rows.len());
        assert_eq!(markets[0], "Delhi Mandi");
    }

    #[test]
    fn first_id_is_the_same_from_either_constructor() {
        let rows = rows();
        for mut board in [AlertBoard::default(), AlertBoard::new(Vec::new())] {
            let mut draft = AlertDraft {
                crop: "Rice".into(),
                target: "2500".into(),
                ..Default::default()
            };
            assert_eq!(board.add(&mut draft, &rows).map(|a| a.id), Some(1));
        }
        assert_eq!(AlertBoard::default(), AlertBoard::new(Vec::new()));
    }

    #[test]
    fn toggle_flips_active() {
        let mut board = AlertBoard::new(vec![alert(AlertDirection::Above, 1.0, 2.0)]);
        assert_eq!(board.toggle(1), Some(false));
        assert_eq!(board.active_count(), 0);
        assert_eq!(board.toggle(1), Some(true));
        assert_eq!(board.toggle(42), None);
    }
}
