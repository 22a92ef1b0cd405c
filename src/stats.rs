use serde::Serialize;

use crate::domain::probe::ProbeResult;

/// Aggregate round trip figures over the successes that reported one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RttStats {
    pub min: f64,
    pub max: f64,
    pub avg: f64,
}

/// Session counters accumulated across loop iterations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stats {
    pub sent: u64,
    pub ok: u64,
    pub failed: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rtt: Option<RttStats>,
}

/// Incremental accumulator, so probe results never need to be retained
/// across iterations.
#[derive(Debug)]
pub struct StatsRecorder {
    sent: u64,
    ok: u64,
    failed: u64,
    rtt_count: u64,
    rtt_sum: f64,
    rtt_min: f64,
    rtt_max: f64,
}

impl StatsRecorder {
    pub fn new() -> Self {
        Self {
            sent: 0,
            ok: 0,
            failed: 0,
            rtt_count: 0,
            rtt_sum: 0.0,
            rtt_min: f64::INFINITY,
            rtt_max: f64::NEG_INFINITY,
        }
    }

    pub fn record(&mut self, result: &ProbeResult) {
        self.sent += 1;
        match result {
            ProbeResult::Success { rtt_ms } => {
                self.ok += 1;
                if let Some(rtt) = rtt_ms {
                    self.rtt_count += 1;
                    self.rtt_sum += rtt;
                    self.rtt_min = self.rtt_min.min(*rtt);
                    self.rtt_max = self.rtt_max.max(*rtt);
                }
            }
            ProbeResult::Timeout { .. } | ProbeResult::Error { .. } => self.failed += 1,
        }
    }

    pub fn finish(&self) -> Stats {
        let rtt = (self.rtt_count > 0).then(|| RttStats {
            min: self.rtt_min,
            max: self.rtt_max,
            avg: self.rtt_sum / self.rtt_count as f64,
        });
        Stats {
            sent: self.sent,
            ok: self.ok,
            failed: self.failed,
            rtt,
        }
    }
}

impl Default for StatsRecorder {
    fn default() -> Self {
        Self::new()
    }
}
