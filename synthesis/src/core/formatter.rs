//! Markdown rendering of a verdict

use shared::{LocationInfo, ProductInfo, Verdict};

use super::normalizer::normalize;

pub const UNKNOWN_PLACEHOLDER: &str = "Unknown";
pub const AREA_PLACEHOLDER: &str = "your area";
pub const DISCLAIMER: &str = "*This recommendation is based on your local recycling guidelines.*";

/// `0.95` renders as `"95%"`
pub fn confidence_percent(confidence: f64) -> String {
    format!("{:.0}%", confidence * 100.0)
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// `"<municipality>, <state>"`, or the municipality alone without a state
pub fn location_label(location: &LocationInfo) -> String {
    let municipality = non_blank(location.municipality.as_deref()).unwrap_or(AREA_PLACEHOLDER);
    match non_blank(location.state.as_deref()) {
        Some(state) => format!("{municipality}, {state}"),
        None => municipality.to_string(),
    }
}

fn material_label(product: &ProductInfo) -> String {
    product
        .ric_code
        .as_deref()
        .map(normalize)
        .filter(|code| !code.is_empty())
        .map_or_else(|| UNKNOWN_PLACEHOLDER.to_string(), |code| code.to_string())
}

/// Render the user-facing explanation; never fails
pub fn format(product: &ProductInfo, location: &LocationInfo, verdict: &Verdict) -> String {
    let mut output = Vec::new();

    output.push("# ♻️ Recycling Recommendation\n".to_string());

    output.push("## 📦 Product Information".to_string());
    output.push(format!(
        "**Product:** {}",
        non_blank(product.product_name.as_deref()).unwrap_or(UNKNOWN_PLACEHOLDER)
    ));
    output.push(format!("**Material:** {}\n", material_label(product)));

    output.push(format!("## 📍 Location: {}\n", location_label(location)));

    output.push("## 🎯 Recommendation".to_string());
    let status = if verdict.is_recyclable {
        "✅ Recyclable"
    } else {
        "❌ Not Recyclable"
    };
    output.push(format!(
        "**Status:** {status} (Confidence: {})\n",
        confidence_percent(verdict.confidence)
    ));
    output.push(format!("**Reason:** {}\n", verdict.reason));

    if verdict.is_recyclable {
        if !verdict.instructions.is_empty() {
            output.push("## 📋 How to Recycle".to_string());
            for (i, step) in verdict.instructions.iter().enumerate() {
                output.push(format!("{}. {step}", i + 1));
            }
            output.push(String::new());
        }
    } else if !verdict.tips.is_empty() {
        output.push("## 💡 Tips".to_string());
        for tip in &verdict.tips {
            output.push(format!("• {tip}"));
        }
        output.push(String::new());
    }

    output.push("---".to_string());
    output.push(DISCLAIMER.to_string());

    output.join("\n")
}
