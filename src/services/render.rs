use crate::models::feature::GeoFeature;
use crate::models::marker::MapMarker;
use crate::services::severity::{abbreviate_cases, classify, format_count};
use chrono::{TimeZone, Utc};

/// Structured tooltip content for one country, kept free of markup so
/// the field order and indicator classes can be asserted directly.
#[derive(Debug, Clone)]
pub struct TooltipView {
    pub country: String,
    pub flag: Option<String>,
    pub fields: Vec<TooltipField>,
    pub updated: Option<String>,
}

#[derive(Debug, Clone)]
pub struct TooltipField {
    pub label: &'static str,
    pub value: String,
    /// CSS indicator class: `info`, `safe` or `danger`.
    pub indicator: &'static str,
}

impl TooltipView {
    pub fn from_feature(feature: &GeoFeature) -> Self {
        let record = &feature.properties.record;

        let fields = vec![
            TooltipField {
                label: "Confirmed",
                value: format_count(record.cases),
                indicator: "info",
            },
            TooltipField {
                label: "Deaths",
                value: format_count(record.deaths),
                indicator: "danger",
            },
            TooltipField {
                label: "Recovered",
                value: format_count(record.recovered),
                indicator: "safe",
            },
            TooltipField {
                label: "Active",
                value: format_count(record.active),
                indicator: "info",
            },
            TooltipField {
                label: "Deaths today",
                value: format_count(record.today_deaths),
                indicator: daily_indicator(record.today_deaths),
            },
            TooltipField {
                label: "New cases today",
                value: format_count(record.today_cases),
                indicator: daily_indicator(record.today_cases),
            },
        ];

        Self {
            country: record.country.clone(),
            flag: feature.properties.flag.clone(),
            fields,
            updated: record.updated.and_then(format_updated),
        }
    }

    /// HTML fragment for the marker tooltip. Field order and labels are
    /// part of the wire contract with the map page's stylesheet.
    pub fn to_html(&self) -> String {
        let mut html = String::new();

        html.push_str("<span class=\"icon-marker-tooltip\">");
        html.push_str("<h2>");
        if let Some(flag) = &self.flag {
            html.push_str(&format!(
                "<img src=\"{}\" alt=\"{}\" width=\"40\" height=\"40\"> ",
                escape_html(flag),
                escape_html(&self.country)
            ));
        }
        html.push_str(&escape_html(&self.country));
        html.push_str("</h2><ul>");

        for field in &self.fields {
            html.push_str(&format!(
                "<li><strong>{}:</strong> <span class=\"{} bold\">{}</span></li>",
                field.label, field.indicator, field.value
            ));
        }

        if let Some(updated) = &self.updated {
            html.push_str(&format!("<li><strong>Updated on:</strong> {}</li>", updated));
        }

        html.push_str("</ul></span>");
        html
    }
}

/// Builds the marker for one geo feature: tier class on the outer span,
/// abbreviated case count as the visible label, tooltip nested inside.
pub fn render_marker(feature: &GeoFeature) -> MapMarker {
    let record = &feature.properties.record;
    let tier = classify(record.cases);
    let label = abbreviate_cases(record.cases);
    let view = TooltipView::from_feature(feature);

    let tooltip_html = format!(
        "<span class=\"icon-marker {}\">{} {}</span>",
        tier.css_class(),
        view.to_html(),
        label
    );

    MapMarker {
        lat: feature.geometry.lat(),
        lng: feature.geometry.lng(),
        label,
        css_class: format!("icon-marker {}", tier.css_class()),
        tooltip_html,
        tier,
    }
}

/// Daily counts flag danger as soon as they are non-zero.
fn daily_indicator(count: u64) -> &'static str {
    if count > 0 {
        "danger"
    } else {
        "safe"
    }
}

fn format_updated(epoch_millis: u64) -> Option<String> {
    Utc.timestamp_millis_opt(epoch_millis as i64)
        .single()
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
