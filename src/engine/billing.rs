//! Billing - turns a stay into an amount owed.
//!
//! Stays are billed in fixed slots. The slot the vehicle is currently in is
//! charged in full, so even a one-second stay costs one slot.

use crate::config::BillingConfig;

/// Pricing for one parking operator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tariff {
    price_per_hour: f64,
    slot_minutes: u32,
}

impl Tariff {
    /// `slot_minutes` must be non-zero.
    pub fn new(price_per_hour: f64, slot_minutes: u32) -> Self {
        Self {
            price_per_hour,
            slot_minutes,
        }
    }

    pub fn from_config(config: &BillingConfig) -> Self {
        Self::new(config.price_per_hour, config.slot_minutes)
    }

    /// Price of a single slot.
    pub fn price_per_slot(&self) -> f64 {
        self.price_per_hour * f64::from(self.slot_minutes) / 60.0
    }

    /// Amount owed after `parked_minutes` whole minutes.
    pub fn charge_for_minutes(&self, parked_minutes: i64) -> f64 {
        let completed_slots = parked_minutes.max(0) / i64::from(self.slot_minutes);
        completed_slots as f64 * self.price_per_slot() + self.price_per_slot()
    }

    /// Amount owed after `parked_seconds`; sub-minute remainders are dropped.
    pub fn charge_for_seconds(&self, parked_seconds: i64) -> f64 {
        self.charge_for_minutes(whole_minutes(parked_seconds))
    }
}

impl Default for Tariff {
    fn default() -> Self {
        Self::from_config(&BillingConfig::default())
    }
}

/// Floor of `seconds / 60`, clamped at zero.
pub fn whole_minutes(seconds: i64) -> i64 {
    seconds.max(0) / 60
}

/// Render an amount the way receipts show it: `2.5`, `5.0`, `252.5`.
pub fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{amount:.1}")
    } else {
        amount.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_slot_price() {
        let tariff = Tariff::default();
        assert_eq!(tariff.price_per_slot(), 2.5);
    }

    #[test]
    fn test_slot_boundaries() {
        let tariff = Tariff::default();

        assert_eq!(tariff.charge_for_seconds(1), 2.5);
        assert_eq!(tariff.charge_for_seconds(14 * 60 + 59), 2.5);
        assert_eq!(tariff.charge_for_seconds(15 * 60), 5.0);
        assert_eq!(tariff.charge_for_seconds(20 * 60), 5.0);
        assert_eq!(tariff.charge_for_seconds(30 * 60), 7.5);
    }

    #[test]
    fn test_zero_stay_pays_one_slot() {
        let tariff = Tariff::default();
        assert_eq!(tariff.charge_for_seconds(0), 2.5);
        assert_eq!(tariff.charge_for_seconds(-30), 2.5);
    }

    #[test]
    fn test_multi_day_stay_counts_every_minute() {
        let tariff = Tariff::default();

        // 25 hours = 1500 minutes = 100 full slots, plus the current one
        assert_eq!(tariff.charge_for_seconds(25 * 3600), 252.5);
        // 3 days and 1 minute
        assert_eq!(tariff.charge_for_minutes(3 * 24 * 60 + 1), 722.5);
    }

    #[test]
    fn test_custom_tariff() {
        let tariff = Tariff::new(6.0, 30);
        assert_eq!(tariff.price_per_slot(), 3.0);
        assert_eq!(tariff.charge_for_minutes(29), 3.0);
        assert_eq!(tariff.charge_for_minutes(30), 6.0);
    }

    #[test]
    fn test_whole_minutes() {
        assert_eq!(whole_minutes(59), 0);
        assert_eq!(whole_minutes(60), 1);
        assert_eq!(whole_minutes(899), 14);
        assert_eq!(whole_minutes(-5), 0);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(2.5), "2.5");
        assert_eq!(format_amount(5.0), "5.0");
        assert_eq!(format_amount(10.0), "10.0");
        assert_eq!(format_amount(252.5), "252.5");
    }
}
