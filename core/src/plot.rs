use crate::{catalog::CropSpec, types::CropId};
use serde::{Deserialize, Serialize};

/// A single planted plot.
///
/// `ready` holds exactly when `growth_stage == required_growth`. Once a plot
/// is ready it never changes again; harvesting removes it from the farm.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Plot {
    crop_type:       CropId,
    growth_stage:    u32,
    required_growth: u32,
    ready:           bool,
}

impl Plot {
    pub fn new(spec: &CropSpec) -> Self {
        Self {
            crop_type:       spec.id.clone(),
            growth_stage:    0,
            required_growth: spec.grow_time,
            ready:           false,
        }
    }

    pub fn crop_type(&self) -> &str {
        &self.crop_type
    }

    pub fn growth_stage(&self) -> u32 {
        self.growth_stage
    }

    pub fn required_growth(&self) -> u32 {
        self.required_growth
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Grow one day. Returns true only on the day the plot becomes ready.
    pub fn grow(&mut self) -> bool {
        if self.ready {
            return false;
        }
        self.growth_stage += 1;
        if self.growth_stage >= self.required_growth {
            self.growth_stage = self.required_growth;
            self.ready = true;
        }
        self.ready
    }

    /// "READY" or "Stage n/m".
    pub fn status_label(&self) -> String {
        if self.ready {
            "READY".to_string()
        } else {
            format!("Stage {}/{}", self.growth_stage, self.required_growth)
        }
    }
}
