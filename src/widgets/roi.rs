//! Live return-on-investment estimate.

use log::debug;

use crate::config::RoiConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoiInputs {
    pub reviews: f64,
    pub minutes_per_review: f64,
    pub hourly_rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoiEstimate {
    pub hours_per_week: f64,
    pub value_per_month: f64,
}

/// Raw slider values as read from the page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawInputs {
    pub reviews: String,
    pub minutes_per_review: String,
    pub hourly_rate: String,
}

/// Every text the calculator writes back into the page.
#[derive(Debug, Clone, PartialEq)]
pub struct RoiReadout {
    pub reviews: String,
    pub minutes_per_review: String,
    pub hourly_rate: String,
    pub money: String,
    pub time: String,
}

impl RoiInputs {
    pub fn parse(raw: &RawInputs) -> Self {
        Self {
            reviews: parse_number(&raw.reviews),
            minutes_per_review: parse_number(&raw.minutes_per_review),
            hourly_rate: parse_number(&raw.hourly_rate),
        }
    }
}

pub fn estimate(inputs: &RoiInputs, config: &RoiConfig) -> RoiEstimate {
    let mut hours_per_week = (inputs.reviews * inputs.minutes_per_review / 60.0)
        * config.days_per_week
        + config.baseline_hours
        - config.baseline_offset_hours;
    if hours_per_week < 0.0 {
        hours_per_week = 0.0;
    }

    RoiEstimate {
        hours_per_week,
        value_per_month: hours_per_week * inputs.hourly_rate * config.weeks_per_month,
    }
}

impl RoiEstimate {
    pub fn money_label(&self, currency: &str) -> String {
        format!("{} {}", format_grouped(self.value_per_month, 0), currency)
    }

    pub fn time_label(&self) -> String {
        format!("{} hrs/week saved", format_grouped(self.hours_per_week, 1))
    }
}

pub fn readout(raw: &RawInputs, config: &RoiConfig) -> RoiReadout {
    let inputs = RoiInputs::parse(raw);
    let estimate = estimate(&inputs, config);

    RoiReadout {
        reviews: display_number(inputs.reviews),
        minutes_per_review: display_number(inputs.minutes_per_review),
        hourly_rate: display_number(inputs.hourly_rate),
        money: estimate.money_label(&config.currency),
        time: estimate.time_label(),
    }
}

/// Where the calculator reads its sliders and writes its results.
pub trait RoiView {
    fn read(&self) -> RawInputs;
    fn write(&mut self, readout: &RoiReadout);
}

pub struct RoiCalculator<V> {
    view: V,
    config: RoiConfig,
}

impl<V: RoiView> RoiCalculator<V> {
    pub fn new(view: V, config: RoiConfig) -> Self {
        Self { view, config }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Recomputes from the current slider values and writes the results.
    pub fn refresh(&mut self) -> RoiReadout {
        let readout = readout(&self.view.read(), &self.config);
        debug!("ROI estimate: {} / {}", readout.money, readout.time);
        self.view.write(&readout);
        readout
    }
}

/// Coerces a form value to a number: blank is zero, garbage is NaN.
pub fn parse_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse().unwrap_or(f64::NAN)
}

/// Shortest display of a number, without a trailing `.0` for whole values.
pub fn display_number(value: f64) -> String {
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}

/// en-US style formatting: `,` grouping, half-away-from-zero rounding to at
/// most `max_fraction_digits`, trailing zeros dropped.
///
/// Rounding works on the shortest decimal form of the value, so
/// `6.949999999999999` stays `6.9` instead of being pushed onto the tie.
pub fn format_grouped(value: f64, max_fraction_digits: u32) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let keep = max_fraction_digits as usize;
    let repr = format!("{}", value.abs());
    let (whole, fraction) = repr.split_once('.').unwrap_or((repr.as_str(), ""));

    let mut digits: Vec<u8> = whole
        .bytes()
        .chain(fraction.bytes().chain(std::iter::repeat(b'0')).take(keep))
        .collect();
    if fraction.as_bytes().get(keep).map_or(false, |&d| d >= b'5') {
        round_up(&mut digits);
    }

    let whole_len = digits.len() - keep;
    let (whole, fraction) = digits.split_at(whole_len);
    let whole = String::from_utf8_lossy(whole);
    let fraction = String::from_utf8_lossy(fraction);

    let mut out = String::new();
    if value.is_sign_negative() {
        out.push('-');
    }
    out.push_str(&group_thousands(&whole));

    let fraction = fraction.trim_end_matches('0');
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// Adds one unit in the last place of an ASCII digit string, growing it on
/// carry out of the leading digit.
fn round_up(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
