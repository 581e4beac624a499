use super::mode::Mode;

/// Price per thousand leads on the public pricing page.
pub const PRICE_PER_THOUSAND: u32 = 3;

/// Slider bounds on the pricing page, in thousands of leads.
pub const CALCULATOR_MIN_LEADS: u32 = 1;
pub const CALCULATOR_MAX_LEADS: u32 = 50;

/// Price of `lead_count` thousand leads in the given mode.
pub fn price(lead_count: u32, mode: Mode) -> u32 {
    lead_count * mode.config().price_per_thousand
}

pub fn calculator_price(lead_count: u32) -> u32 {
    lead_count * PRICE_PER_THOUSAND
}

pub fn format_price(amount: u32) -> String {
    format!("${}.00", amount)
}

/// Fill percentage for a range input, fed to the `--range-progress` CSS var.
pub fn range_progress(value: u32, min: u32, max: u32) -> f64 {
    if max <= min {
        return 100.0;
    }
    let value = value.clamp(min, max);
    f64::from(value - min) / f64::from(max - min) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_is_three_per_thousand() {
        assert_eq!(price(7, Mode::Search), 21);
        assert_eq!(price(1, Mode::Search), 3);
        assert_eq!(price(10, Mode::Lists), 30);
        assert_eq!(calculator_price(7), 21);
        assert_eq!(calculator_price(50), 150);
    }

    #[test]
    fn formats_two_decimals() {
        assert_eq!(format_price(21), "$21.00");
    }

    #[test]
    fn progress_spans_the_range() {
        assert_eq!(range_progress(1, 1, 50), 0.0);
        assert_eq!(range_progress(50, 1, 50), 100.0);
        assert_eq!(range_progress(6, 1, 11), 50.0);
        assert_eq!(range_progress(99, 1, 10), 100.0);
        assert_eq!(range_progress(1, 1, 1), 100.0);
    }
}
