use serde::Serialize;

/// Discrete risk tier derived from a country's confirmed case count,
/// driving marker color via CSS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityTier {
    Low,
    Average,
    Moderate,
    High,
}

impl SeverityTier {
    pub fn css_class(&self) -> &'static str {
        match self {
            SeverityTier::Low => "low-risk",
            SeverityTier::Average => "average-risk",
            SeverityTier::Moderate => "moderate-risk",
            SeverityTier::High => "high-risk",
        }
    }
}

/// Strict-inequality thresholds. The boundary values 1000, 5000 and
/// 10000 satisfy none of the comparisons and classify as `Low`; that
/// fallthrough is part of the contract.
pub fn classify(cases: u64) -> SeverityTier {
    if cases > 10_000 {
        SeverityTier::High
    } else if cases < 10_000 && cases > 5_000 {
        SeverityTier::Moderate
    } else if cases < 5_000 && cases > 1_000 {
        SeverityTier::Average
    } else {
        SeverityTier::Low
    }
}

/// Groups a count into comma-separated thousands ("12345" -> "12,345").
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Marker label string. Counts above 1000 drop the last three
/// characters of the grouped string and append "k+", so 12345 becomes
/// "12,k+". The slice is taken literally, with no rounding.
pub fn abbreviate_cases(cases: u64) -> String {
    let formatted = format_count(cases);
    if cases > 1_000 {
        format!("{}k+", &formatted[..formatted.len() - 3])
    } else {
        formatted
    }
}
