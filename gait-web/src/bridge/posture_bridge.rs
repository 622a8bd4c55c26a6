//! Posture bridge - judges posture readings measured on the JS side

use std::collections::HashMap;

use anyhow::{Context, Result};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::posture::{PostureAssessor, PostureMetric, PostureReading, PostureSummary, RegionGroup};

#[derive(Serialize)]
struct PostureReport {
    summary: PostureSummary,
    regions: Vec<RegionGroup>,
}

/// Takes a JSON object of `{ "metric_name": value }` and returns the
/// summary plus the per-region cards as JSON. Non-finite values are skipped.
#[wasm_bindgen]
pub fn assess_posture(json: &str) -> Result<String, JsValue> {
    assess(&PostureAssessor::default(), json).map_err(|err| {
        let message = format!("{err:#}");
        web_sys::console::warn_1(&message.as_str().into());
        JsValue::from_str(&message)
    })
}

fn assess(assessor: &PostureAssessor, json: &str) -> Result<String> {
    let reading = parse_reading(json)?;
    let report = PostureReport {
        summary: assessor.summarize(&reading),
        regions: assessor.grouped(&reading),
    };
    serde_json::to_string(&report).context("failed to serialize posture report")
}

fn parse_reading(json: &str) -> Result<PostureReading> {
    let values: HashMap<PostureMetric, Option<f32>> =
        serde_json::from_str(json).context("failed to parse posture reading")?;
    Ok(values
        .into_iter()
        .filter_map(|(metric, value)| value.filter(|v| v.is_finite()).map(|v| (metric, v)))
        .collect())
}
