//! Request records and the result envelope for crop analysis.
//!
//! Every agronomic field is optional and kept as the raw JSON value the caller
//! sent, so the prompt can echo it verbatim whatever its type.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{ser::SerializeMap, Deserialize, Serialize, Serializer};
use serde_json::Value;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SoilData {
    pub soil_type: Option<Value>,
    pub ph_level: Option<Value>,
    /// ppm
    pub nitrogen: Option<Value>,
    /// ppm
    pub phosphorus: Option<Value>,
    /// ppm
    pub potassium: Option<Value>,
    /// percent
    pub organic_matter: Option<Value>,
    /// percent
    pub moisture: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WeatherData {
    /// °C
    pub avg_temperature: Option<Value>,
    /// percent
    pub humidity: Option<Value>,
    /// mm per year
    pub rainfall: Option<Value>,
    pub season: Option<Value>,
    /// hours per day
    pub sunlight_hours: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LocationData {
    pub region: Option<Value>,
    pub climate_zone: Option<Value>,
    /// meters
    pub altitude: Option<Value>,
}

/// Body of `POST /api/analyze`. Missing or `null` sections are treated as empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AnalyzeRequest {
    pub soil_data: Option<SoilData>,
    pub weather_data: Option<WeatherData>,
    pub location_data: Option<LocationData>,
}

impl AnalyzeRequest {
    pub fn into_records(self) -> (SoilData, WeatherData, LocationData) {
        (
            self.soil_data.unwrap_or_default(),
            self.weather_data.unwrap_or_default(),
            self.location_data.unwrap_or_default(),
        )
    }
}

/// Outcome of one analysis call.
///
/// `Success` may still carry a degraded payload (`raw_response` + `note`) when
/// the model reply held no JSON object at all.
#[derive(Debug, Clone, PartialEq)]
pub enum RecommendationResult {
    Success {
        recommendations: Value,
        timestamp: DateTime<Utc>,
    },
    Failure {
        error: String,
    },
}

impl RecommendationResult {
    pub fn success(recommendations: Value) -> Self {
        RecommendationResult::Success {
            recommendations,
            timestamp: Utc::now(),
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        RecommendationResult::Failure {
            error: error.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, RecommendationResult::Success { .. })
    }
}

/// ISO-8601 UTC with microseconds, used for every timestamp the API emits.
pub fn iso_timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

impl Serialize for RecommendationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RecommendationResult::Success {
                recommendations,
                timestamp,
            } => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("success", &true)?;
                map.serialize_entry("recommendations", recommendations)?;
                map.serialize_entry("timestamp", &iso_timestamp(timestamp))?;
                map.end()
            }
            RecommendationResult::Failure { error } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("success", &false)?;
                map.serialize_entry("error", error)?;
                map.end()
            }
        }
    }
}

impl IntoResponse for RecommendationResult {
    fn into_response(self) -> Response {
        let status = if self.is_success() {
            StatusCode::OK
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        (status, Json(self)).into_response()
    }
}
