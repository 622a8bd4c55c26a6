//! Posture assessor - judges externally measured posture readings
//!
//! Counts normal/abnormal metrics, names the abnormal ones and groups
//! readings by body region for the dashboard.

use serde::Serialize;

use super::ranges::{BodyRegion, NormalRange, PostureMetric};

/// Abnormal metrics named in the headline before collapsing to a count
const HEADLINE_ABNORMAL_LIMIT: usize = 3;

/// One posture measurement pass; a `None` slot was not measured
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PostureReading {
    values: [Option<f32>; PostureMetric::COUNT],
}

impl PostureReading {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, metric: PostureMetric, value: f32) {
        self.values[metric.index()] = Some(value);
    }

    pub fn get(&self, metric: PostureMetric) -> Option<f32> {
        self.values[metric.index()]
    }

    /// Measured metrics in fixed order
    pub fn iter(&self) -> impl Iterator<Item = (PostureMetric, f32)> + '_ {
        PostureMetric::ALL
            .iter()
            .filter_map(move |&m| self.get(m).map(|v| (m, v)))
    }
}

impl FromIterator<(PostureMetric, f32)> for PostureReading {
    fn from_iter<I: IntoIterator<Item = (PostureMetric, f32)>>(iter: I) -> Self {
        let mut reading = Self::new();
        for (metric, value) in iter {
            reading.set(metric, value);
        }
        reading
    }
}

/// A measured posture value with its normal range and verdict
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PostureCard {
    pub metric: PostureMetric,
    pub value: f32,
    pub unit: &'static str,
    pub normal_range: NormalRange,
    pub is_normal: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RegionGroup {
    pub region: BodyRegion,
    pub cards: Vec<PostureCard>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PostureSummary {
    pub total: usize,
    pub normal: usize,
    pub abnormal: Vec<PostureMetric>,
    pub headline: String,
    pub advice: &'static str,
}

/// Normal ranges per posture metric
#[derive(Clone, Debug, PartialEq)]
pub struct PostureAssessor {
    ranges: [NormalRange; PostureMetric::COUNT],
}

impl PostureAssessor {
    pub fn range(&self, metric: PostureMetric) -> NormalRange {
        self.ranges[metric.index()]
    }

    /// Replace one metric's normal range
    pub fn with_range(mut self, metric: PostureMetric, range: NormalRange) -> Self {
        self.ranges[metric.index()] = range;
        self
    }

    pub fn is_normal(&self, metric: PostureMetric, value: f32) -> bool {
        self.range(metric).contains(value)
    }

    pub fn card(&self, metric: PostureMetric, value: f32) -> PostureCard {
        PostureCard {
            metric,
            value,
            unit: metric.unit(),
            normal_range: self.range(metric),
            is_normal: self.is_normal(metric, value),
        }
    }

    /// Measured metrics grouped by body region; empty regions are left out
    pub fn grouped(&self, reading: &PostureReading) -> Vec<RegionGroup> {
        BodyRegion::ALL
            .iter()
            .filter_map(|&region| {
                let cards: Vec<_> = reading
                    .iter()
                    .filter(|(m, _)| m.region() == region)
                    .map(|(m, v)| self.card(m, v))
                    .collect();
                (!cards.is_empty()).then_some(RegionGroup { region, cards })
            })
            .collect()
    }

    pub fn summarize(&self, reading: &PostureReading) -> PostureSummary {
        let mut total = 0;
        let mut abnormal = Vec::new();
        for (metric, value) in reading.iter() {
            total += 1;
            if !self.is_normal(metric, value) {
                abnormal.push(metric);
            }
        }

        if total == 0 {
            return PostureSummary {
                total: 0,
                normal: 0,
                abnormal,
                headline: "No valid posture metrics detected".to_string(),
                advice: "",
            };
        }

        let normal = total - abnormal.len();
        let mut headline = format!(
            "{total} metrics measured: {normal} normal, {} abnormal.",
            abnormal.len()
        );
        let advice = if abnormal.is_empty() {
            "Posture looks good, keep it up."
        } else {
            let mut listed = abnormal
                .iter()
                .take(HEADLINE_ABNORMAL_LIMIT)
                .map(|m| m.display_name())
                .collect::<Vec<_>>()
                .join(", ");
            if abnormal.len() > HEADLINE_ABNORMAL_LIMIT {
                listed.push_str(&format!(" and {} items in total", abnormal.len()));
            }
            headline.push_str(&format!(" Abnormal: {listed}"));
            "Review the abnormal metrics below and adjust or train accordingly."
        };

        PostureSummary {
            total,
            normal,
            abnormal,
            headline,
            advice,
        }
    }
}

impl Default for PostureAssessor {
    fn default() -> Self {
        Self {
            ranges: PostureMetric::ALL.map(|m| m.normal_range()),
        }
    }
}
