//! Prompt construction for crop analysis.
//!
//! The output skeleton is given as literal example values rather than type
//! descriptions: the extractor relies on the model echoing this exact shape.

use std::borrow::Cow;

use serde_json::Value;

use crate::advisory::models::{LocationData, SoilData, WeatherData};

/// Placeholder rendered for any field the caller did not supply.
pub const NOT_SPECIFIED: &str = "Not specified";

const ADVISOR_INTRO: &str = "As an expert agricultural advisor, analyze the following farming data \
    and provide comprehensive recommendations:";

/// Target schema the model must answer in.
pub const RECOMMENDATION_SCHEMA: &str = r#"Please provide detailed recommendations in the following JSON format:
{
    "recommended_crops": [
        {
            "crop_name": "Crop Name",
            "suitability_score": "1-10",
            "expected_yield": "Expected yield per hectare",
            "growing_season": "Best time to plant",
            "reasons": ["Reason 1", "Reason 2"]
        }
    ],
    "fertilizer_recommendations": [
        {
            "fertilizer_type": "Type of fertilizer",
            "application_rate": "Amount per hectare",
            "timing": "When to apply",
            "purpose": "What it addresses"
        }
    ],
    "pesticide_recommendations": [
        {
            "pesticide_type": "Type/Category",
            "target_pests": ["Pest 1", "Pest 2"],
            "application_method": "How to apply",
            "safety_notes": "Safety considerations"
        }
    ],
    "soil_improvement_suggestions": [
        "Suggestion 1",
        "Suggestion 2"
    ],
    "general_advice": "Overall farming advice for this area",
    "sustainability_tips": [
        "Sustainable practice 1",
        "Sustainable practice 2"
    ]
}"#;

pub const SUSTAINABILITY_INSTRUCTION: &str = "Focus on sustainable farming practices and consider \
    the UN SDG 2 (Zero Hunger) goals. Provide practical, actionable advice.";

/// Renders a field for interpolation: strings bare, everything else as JSON text.
fn field(value: &Option<Value>) -> Cow<'_, str> {
    match value {
        None | Some(Value::Null) => Cow::Borrowed(NOT_SPECIFIED),
        Some(Value::String(s)) => Cow::Borrowed(s),
        Some(other) => Cow::Owned(other.to_string()),
    }
}

/// Builds the analysis prompt. Deterministic for identical inputs; never fails.
pub fn build_prompt(soil: &SoilData, weather: &WeatherData, location: &LocationData) -> String {
    format!(
        "{ADVISOR_INTRO}

SOIL DATA:
- Soil Type: {soil_type}
- pH Level: {ph_level}
- Nitrogen (N) Content: {nitrogen} ppm
- Phosphorus (P) Content: {phosphorus} ppm
- Potassium (K) Content: {potassium} ppm
- Organic Matter: {organic_matter}%
- Moisture Content: {moisture}%

WEATHER DATA:
- Average Temperature: {avg_temperature}°C
- Humidity: {humidity}%
- Annual Rainfall: {rainfall} mm
- Season: {season}
- Sunlight Hours: {sunlight_hours} hours/day

LOCATION DATA:
- Region: {region}
- Climate Zone: {climate_zone}
- Altitude: {altitude} meters

{RECOMMENDATION_SCHEMA}

{SUSTAINABILITY_INSTRUCTION}
",
        soil_type = field(&soil.soil_type),
        ph_level = field(&soil.ph_level),
        nitrogen = field(&soil.nitrogen),
        phosphorus = field(&soil.phosphorus),
        potassium = field(&soil.potassium),
        organic_matter = field(&soil.organic_matter),
        moisture = field(&soil.moisture),
        avg_temperature = field(&weather.avg_temperature),
        humidity = field(&weather.humidity),
        rainfall = field(&weather.rainfall),
        season = field(&weather.season),
        sunlight_hours = field(&weather.sunlight_hours),
        region = field(&location.region),
        climate_zone = field(&location.climate_zone),
        altitude = field(&location.altitude),
    )
}
