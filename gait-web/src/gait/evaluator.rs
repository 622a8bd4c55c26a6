//! Gait metrics evaluator - one frame plus the previous frame's state in,
//! classified gait metrics and the next state out
//!
//! Every metric is gated on the confidence of the joints it reads. A metric
//! whose joints fail the gate is simply left out of the result.

use tracing::{debug, trace};

use super::metrics::{GaitMetric, GaitMetrics, MetricValue};
use crate::geometry::{distance, line_angle, midpoint, vertex_angle};
use crate::keypoints::{
    ConfidenceGate, FrameState, KeypointFrame, LEFT_ANKLE, LEFT_HIP, LEFT_KNEE, RIGHT_ANKLE,
    RIGHT_HIP, RIGHT_KNEE,
};
use crate::severity::{classify, GaitRangeTables};

/// Fully extended knee
const STRAIGHT_KNEE_DEG: f32 = 180.0;

/// Vertical shank (knee directly above ankle)
const NEUTRAL_SHANK_DEG: f32 = 90.0;

/// Joints of one leg
#[derive(Clone, Copy)]
struct Leg {
    hip: usize,
    knee: usize,
    ankle: usize,
    knee_metric: GaitMetric,
    ankle_metric: GaitMetric,
}

const LEFT_LEG: Leg = Leg {
    hip: LEFT_HIP,
    knee: LEFT_KNEE,
    ankle: LEFT_ANKLE,
    knee_metric: GaitMetric::LeftKneeAngle,
    ankle_metric: GaitMetric::LeftAnkleAngle,
};

const RIGHT_LEG: Leg = Leg {
    hip: RIGHT_HIP,
    knee: RIGHT_KNEE,
    ankle: RIGHT_ANKLE,
    knee_metric: GaitMetric::RightKneeAngle,
    ankle_metric: GaitMetric::RightAnkleAngle,
};

/// Stateless per-frame evaluator; the caller threads `FrameState` between calls
#[derive(Clone, Debug, Default)]
pub struct GaitMetricsEvaluator {
    gate: ConfidenceGate,
    ranges: GaitRangeTables,
}

impl GaitMetricsEvaluator {
    pub fn new(gate: ConfidenceGate, ranges: GaitRangeTables) -> Self {
        Self { gate, ranges }
    }

    pub fn gate(&self) -> &ConfidenceGate {
        &self.gate
    }

    pub fn ranges(&self) -> &GaitRangeTables {
        &self.ranges
    }

    /// Compute every metric the frame supports
    ///
    /// Returns the metric set and the snapshot to pass as `previous` on the
    /// next call.
    pub fn evaluate(
        &self,
        frame: &KeypointFrame,
        previous: Option<&FrameState>,
    ) -> (GaitMetrics, FrameState) {
        let mut metrics = GaitMetrics::new();

        self.step_width(frame, &mut metrics);
        self.step_length(frame, previous, &mut metrics);
        self.pelvic_rotation(frame, &mut metrics);
        for leg in [LEFT_LEG, RIGHT_LEG] {
            self.knee_angle(frame, leg, &mut metrics);
            self.ankle_angle(frame, leg, &mut metrics);
        }
        self.weight_shift(frame, &mut metrics);

        trace!(computed = metrics.len(), "gait metrics evaluated");

        (metrics, FrameState::capture(frame, &self.gate))
    }

    fn step_width(&self, frame: &KeypointFrame, metrics: &mut GaitMetrics) {
        let (Some(left), Some(right)) = (
            self.gate.position(frame, LEFT_ANKLE),
            self.gate.position(frame, RIGHT_ANKLE),
        ) else {
            return;
        };

        let width = distance(left, right);
        metrics.insert(
            GaitMetric::StepWidth,
            MetricValue::new(width, classify(width, &self.ranges.step_width)),
        );
    }

    /// Vertical ankle travel since the previous frame. Needs a complete
    /// previous snapshot and both current ankles.
    fn step_length(
        &self,
        frame: &KeypointFrame,
        previous: Option<&FrameState>,
        metrics: &mut GaitMetrics,
    ) {
        let Some((prev_left_y, prev_right_y)) = previous.and_then(FrameState::complete_ankles)
        else {
            trace!("no complete previous frame state, skipping step length");
            return;
        };
        let (Some(left), Some(right)) = (
            self.gate.position(frame, LEFT_ANKLE),
            self.gate.position(frame, RIGHT_ANKLE),
        ) else {
            return;
        };

        let left_step = (left.y - prev_left_y).abs();
        let right_step = (right.y - prev_right_y).abs();

        let mean = (left_step + right_step) / 2.0;
        let status = classify(mean, &self.ranges.step_length);
        metrics.insert(GaitMetric::LeftStepLength, MetricValue::new(left_step, status));
        metrics.insert(GaitMetric::RightStepLength, MetricValue::new(right_step, status));

        let diff = (left_step - right_step).abs();
        metrics.insert(
            GaitMetric::StepSymmetry,
            MetricValue::new(diff, classify(diff, &self.ranges.step_symmetry)),
        );
    }

    fn pelvic_rotation(&self, frame: &KeypointFrame, metrics: &mut GaitMetrics) {
        let (Some(left), Some(right)) = (
            self.gate.position(frame, LEFT_HIP),
            self.gate.position(frame, RIGHT_HIP),
        ) else {
            return;
        };

        let angle = line_angle(left, right);
        metrics.insert(
            GaitMetric::PelvicRotation,
            MetricValue::new(angle, classify(angle.abs(), &self.ranges.pelvic_rotation)),
        );
    }

    fn knee_angle(&self, frame: &KeypointFrame, leg: Leg, metrics: &mut GaitMetrics) {
        if !self.gate.all_pass(frame, &[leg.hip, leg.knee, leg.ankle]) {
            return;
        }

        let Some(angle) = vertex_angle(
            frame.position(leg.hip),
            frame.position(leg.knee),
            frame.position(leg.ankle),
        ) else {
            debug!(metric = leg.knee_metric.as_str(), "degenerate leg geometry, dropping knee angle");
            return;
        };

        let deviation = (angle - STRAIGHT_KNEE_DEG).abs();
        metrics.insert(
            leg.knee_metric,
            MetricValue::new(angle, classify(deviation, &self.ranges.knee_flexion)),
        );
    }

    fn ankle_angle(&self, frame: &KeypointFrame, leg: Leg, metrics: &mut GaitMetrics) {
        if !self.gate.all_pass(frame, &[leg.knee, leg.ankle]) {
            return;
        }

        let angle = line_angle(frame.position(leg.knee), frame.position(leg.ankle));
        let deviation = (angle - NEUTRAL_SHANK_DEG).abs();
        metrics.insert(
            leg.ankle_metric,
            MetricValue::new(angle, classify(deviation, &self.ranges.ankle_flexion)),
        );
    }

    fn weight_shift(&self, frame: &KeypointFrame, metrics: &mut GaitMetrics) {
        if !self
            .gate
            .all_pass(frame, &[LEFT_HIP, RIGHT_HIP, LEFT_ANKLE, RIGHT_ANKLE])
        {
            return;
        }

        let hip_center = midpoint(frame.position(LEFT_HIP), frame.position(RIGHT_HIP));
        let left_ankle = frame.position(LEFT_ANKLE);
        let right_ankle = frame.position(RIGHT_ANKLE);
        let ankle_center = midpoint(left_ankle, right_ankle);

        let ankle_spacing = distance(left_ankle, right_ankle);
        if ankle_spacing <= 0.0 {
            debug!("ankles coincide, dropping weight shift");
            return;
        }

        let percent = distance(hip_center, ankle_center) / ankle_spacing * 100.0;
        metrics.insert(
            GaitMetric::WeightShift,
            MetricValue::new(percent, classify(percent, &self.ranges.weight_shift)),
        );
    }
}
