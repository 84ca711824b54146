use crate::engine::assets::catalog::FlowerCatalog;
use crate::engine::scene::branches::BranchAngle;
use crate::engine::scene::composer::BranchPlacement;
use crate::error::{LoadError, RunError};
use constants::BranchSlot;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Opaque arrangement identifier issued by the base phase. Either a string
/// or a number on the wire, echoed back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArrangementId(pub Value);

impl ArrangementId {
    /// `""`, `0`, `false` and `null` identify nothing; export is skipped for them.
    pub fn is_present(&self) -> bool {
        is_truthy(&self.0)
    }

    /// Form used in the `arr_id` query parameter.
    pub fn as_query_value(&self) -> String {
        match &self.0 {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for ArrangementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_query_value())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BaseRequest {
    pub forced_flower: String,
    pub vase: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseAssignments {
    pub main: String,
    pub guest: String,
    pub middle1: String,
    pub middle2: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BaseLengths {
    pub main: f32,
    pub guest: f32,
    pub middle1: f32,
    pub middle2: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseAngles {
    pub main_azimuth: f32,
    pub main_elevation: f32,
    pub guest_azimuth: f32,
    pub guest_elevation: f32,
    pub middle1_azimuth: f32,
    pub middle1_elevation: f32,
    pub middle2_azimuth: f32,
    pub middle2_elevation: f32,
}

/// Response of `GET /optimize`. Extra fields (scores, diagnostics) are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseResult {
    pub assignments: BaseAssignments,
    pub main_len: f32,
    pub guest_len: f32,
    pub middle1_len: f32,
    pub middle2_len: f32,
    pub main_azimuth: f32,
    pub main_elevation: f32,
    pub guest_azimuth: f32,
    pub guest_elevation: f32,
    pub middle1_azimuth: f32,
    pub middle1_elevation: f32,
    pub middle2_azimuth: f32,
    pub middle2_elevation: f32,
    #[serde(rename = "arr_id", default)]
    pub arr_id: Option<ArrangementId>,
}

impl BaseResult {
    pub fn assignment(&self, slot: BranchSlot) -> Option<&str> {
        match slot {
            BranchSlot::Main => Some(&self.assignments.main),
            BranchSlot::Guest => Some(&self.assignments.guest),
            BranchSlot::Middle1 => Some(&self.assignments.middle1),
            BranchSlot::Middle2 => Some(&self.assignments.middle2),
            BranchSlot::Middle3 | BranchSlot::Middle4 => None,
        }
    }

    pub fn length(&self, slot: BranchSlot) -> Option<f32> {
        match slot {
            BranchSlot::Main => Some(self.main_len),
            BranchSlot::Guest => Some(self.guest_len),
            BranchSlot::Middle1 => Some(self.middle1_len),
            BranchSlot::Middle2 => Some(self.middle2_len),
            BranchSlot::Middle3 | BranchSlot::Middle4 => None,
        }
    }

    pub fn angle(&self, slot: BranchSlot) -> Option<BranchAngle> {
        let (azimuth, elevation) = match slot {
            BranchSlot::Main => (self.main_azimuth, self.main_elevation),
            BranchSlot::Guest => (self.guest_azimuth, self.guest_elevation),
            BranchSlot::Middle1 => (self.middle1_azimuth, self.middle1_elevation),
            BranchSlot::Middle2 => (self.middle2_azimuth, self.middle2_elevation),
            BranchSlot::Middle3 | BranchSlot::Middle4 => return None,
        };
        Some(BranchAngle::new(azimuth, elevation))
    }

    /// Placements for the four base slots, in slot order.
    pub fn placements(&self, catalog: &FlowerCatalog) -> Result<Vec<BranchPlacement>, LoadError> {
        BranchSlot::BASE
            .iter()
            .filter_map(|&slot| {
                Some((slot, self.assignment(slot)?, self.length(slot)?, self.angle(slot)?))
            })
            .map(|(slot, flower, length, angle)| {
                BranchPlacement::resolve(slot, flower, length, angle, catalog)
            })
            .collect()
    }
}

/// Body of `POST /optimize_extend`: the base identifier plus the full base
/// result as context.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtensionRequest {
    pub arr_id: Option<ArrangementId>,
    pub base_assignments: BaseAssignments,
    pub base_lengths: BaseLengths,
    pub base_angles: BaseAngles,
}

impl ExtensionRequest {
    pub fn from_base(base: &BaseResult) -> Self {
        Self {
            arr_id: base.arr_id.clone(),
            base_assignments: base.assignments.clone(),
            base_lengths: BaseLengths {
                main: base.main_len,
                guest: base.guest_len,
                middle1: base.middle1_len,
                middle2: base.middle2_len,
            },
            base_angles: BaseAngles {
                main_azimuth: base.main_azimuth,
                main_elevation: base.main_elevation,
                guest_azimuth: base.guest_azimuth,
                guest_elevation: base.guest_elevation,
                middle1_azimuth: base.middle1_azimuth,
                middle1_elevation: base.middle1_elevation,
                middle2_azimuth: base.middle2_azimuth,
                middle2_elevation: base.middle2_elevation,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExtensionAssignments {
    pub middle3: String,
    pub middle4: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExtensionLengths {
    pub middle3: f32,
    pub middle4: f32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionAngles {
    pub middle3_azimuth: f32,
    pub middle3_elevation: f32,
    pub middle4_azimuth: f32,
    pub middle4_elevation: f32,
}

/// Response of `POST /optimize_extend`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExtensionResult {
    pub assignments: ExtensionAssignments,
    pub lengths: ExtensionLengths,
    pub angles: ExtensionAngles,
}

impl ExtensionResult {
    /// Placements for `middle3` then `middle4`.
    pub fn placements(&self, catalog: &FlowerCatalog) -> Result<Vec<BranchPlacement>, LoadError> {
        let middle3 = BranchPlacement::resolve(
            BranchSlot::Middle3,
            &self.assignments.middle3,
            self.lengths.middle3,
            BranchAngle::new(self.angles.middle3_azimuth, self.angles.middle3_elevation),
            catalog,
        )?;
        let middle4 = BranchPlacement::resolve(
            BranchSlot::Middle4,
            &self.assignments.middle4,
            self.lengths.middle4,
            BranchAngle::new(self.angles.middle4_azimuth, self.angles.middle4_elevation),
            catalog,
        )?;
        Ok(vec![middle3, middle4])
    }
}

/// Acknowledgement of a point-cloud upload, e.g. `{"status":"ok"}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UploadAck {
    #[serde(default)]
    pub status: Option<String>,
}

// Empty strings, zero, false and null do not count as set.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn reject_server_error(body: &Value) -> Result<(), RunError> {
    match body.get("error").filter(|error| is_truthy(error)) {
        None => Ok(()),
        Some(Value::String(message)) => Err(RunError::protocol(message.clone())),
        Some(other) => Err(RunError::protocol(other.to_string())),
    }
}

pub fn parse_base_response(body: Value) -> Result<BaseResult, RunError> {
    reject_server_error(&body)?;
    Ok(serde_json::from_value(body)?)
}

pub fn parse_extension_response(body: Value) -> Result<ExtensionResult, RunError> {
    reject_server_error(&body)?;
    Ok(serde_json::from_value(body)?)
}

pub fn parse_upload_ack(body: Value) -> Result<UploadAck, RunError> {
    reject_server_error(&body)?;
    Ok(serde_json::from_value(body)?)
}
