/*
 * Copyright © 2025, United States Government, as represented by the Administrator of 
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License"); 
 * you may not use this file except in compliance with the License. You may obtain a copy 
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

//! the overlay pipeline: geodetic positions -> planar -> relative -> camera frame -> pixels,
//! plus vertical separation warnings and label placement
//!
//! `TrafficOverlay::compute` is a pure function of its inputs. Own-ship and traffic inputs are
//! not time-correlated, i.e. a result can combine a position fix and a traffic snapshot that were
//! captured at different times.

use serde::{Serialize,Deserialize};
use tracing::{debug,warn};

use crate::attitude::{AttitudeRotator, CameraFrameVector};
use crate::camera::{CameraConfig, PinholeProjector, PixelPoint};
use crate::errors::Result;
use crate::labels::{LabelBlock, LabelConfig, LabelPlacementEngine, TextMeasure, Viewport};
use crate::ownship::OwnshipState;
use crate::planar::{PlanarConfig, PlanarProjector};
use crate::proximity::{ProximityClassifier, Warning};
use crate::relative::{RangeInfo, relative_vector};
use crate::traffic::{TrafficRecord, TrafficSnapshot};

#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct ProjectedTarget {
    pub identifier: String,
    pub pixel: Option<PixelPoint>, // None if not projectable
    pub on_canvas: bool,           // in front of the camera and inside of the image
    pub range: RangeInfo,
    pub camera: CameraFrameVector,
}

/// a target we could not process, e.g. because it is outside of the projection zone
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct RejectedTarget {
    pub identifier: String,
    pub reason: String,
}

/// everything the renderer needs for one frame. All sequences follow the (sorted) snapshot order
#[derive(Debug,Clone,PartialEq,Default,Serialize,Deserialize)]
pub struct OverlayFrame {
    pub targets: Vec<ProjectedTarget>,
    pub warnings: Vec<Warning>,
    pub labels: Vec<LabelBlock>,
    pub banners: Vec<LabelBlock>,
    pub rejected: Vec<RejectedTarget>,
}

impl OverlayFrame {
    pub fn is_empty (&self)->bool {
        self.targets.is_empty() && self.warnings.is_empty() && self.rejected.is_empty()
    }
}

pub struct TrafficOverlay {
    planar: PlanarProjector,
    projector: PinholeProjector,
    classifier: ProximityClassifier,
    labels: LabelPlacementEngine,
}

impl TrafficOverlay {
    pub fn new (camera: &CameraConfig, projection: &PlanarConfig, labels: &LabelConfig)->Result<Self> {
        Ok( TrafficOverlay {
            planar: PlanarProjector::new( projection),
            projector: PinholeProjector::new( camera)?,
            classifier: ProximityClassifier::default(),
            labels: LabelPlacementEngine::new( labels.clone()),
        })
    }

    pub fn projector (&self)->&PinholeProjector { &self.projector }
    pub fn planar (&self)->&PlanarProjector { &self.planar }

    pub fn viewport (&self)->Viewport {
        Viewport { width: self.projector.width(), height: self.projector.height() }
    }

    /// compute the overlay for the latest own-ship state and traffic snapshot. Without own-ship state
    /// the result is empty. An own-ship position outside of the projection zone is an error, traffic
    /// outside of the zone is reported in `rejected`
    pub fn compute (&self, ownship: Option<&OwnshipState>, snapshot: Option<&TrafficSnapshot>, measure: &dyn TextMeasure)->Result<OverlayFrame> {
        let mut frame = OverlayFrame::default();

        let (own, snapshot) = match (ownship, snapshot) {
            (Some(own), Some(snapshot)) => (own, snapshot),
            _ => {
                debug!("no own-ship state or traffic yet");
                return Ok(frame)
            }
        };

        let own_xy = self.planar.project( own.lat, own.lon)?;
        let rotator = AttitudeRotator::new( own.heading); // one matrix per cycle
        let viewport = self.viewport();

        for rec in snapshot.iter() {
            let target_xy = match self.planar.project( rec.lat, rec.lon) {
                Ok(p) => p,
                Err(e) => {
                    warn!("rejecting target {}: {}", rec.identifier, e);
                    frame.rejected.push( RejectedTarget{ identifier: rec.identifier.clone(), reason: e.to_string() });
                    continue
                }
            };

            let rel = relative_vector( &own_xy, own.alt_m, &target_xy, rec.altitude_m());
            let range = rel.range_info();

            if let Some(warning) = self.classifier.assess( &rec.identifier, rec.display_name(), &rel, &range) {
                frame.warnings.push( warning);
            }

            let camera = rotator.rotate( &rel);
            let pixel = self.projector.project( &camera);
            let on_canvas = match &pixel {
                Some(p) => camera.depth > 0.0 && self.projector.is_on_canvas( p),
                None => false
            };

            if let (true, Some(p)) = (on_canvas, pixel) {
                let lines = label_lines( rec, &range);
                frame.labels.push( self.labels.place_label( &rec.identifier, p, lines, measure, viewport));
            }

            frame.targets.push( ProjectedTarget { identifier: rec.identifier.clone(), pixel, on_canvas, range, camera });
        }

        frame.banners = self.labels.place_banners( &frame.warnings, measure, viewport);

        debug!("overlay for {}: {} targets, {} labels, {} warnings, {} rejected",
               own, frame.targets.len(), frame.labels.len(), frame.warnings.len(), frame.rejected.len());
        Ok(frame)
    }
}

/// callsign and speed, position, altitude and slant range
pub fn label_lines (rec: &TrafficRecord, range: &RangeInfo)->Vec<String> {
    vec![
        format!("{} {:.0}kt", rec.display_name(), rec.ground_speed_kn),
        format!("{:.4},{:.4}", rec.lat, rec.lon),
        format!("{:.0}ft {:.2}nm", rec.altitude_ft, range.slant_nm),
    ]
}
