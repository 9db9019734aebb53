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

//! yaw-only rotation of relative vectors into the own-ship forward aligned camera frame
//! (pitch and roll of the own-ship are not modeled)

use nalgebra::{Rotation3, Vector3};
use serde::{Serialize,Deserialize};
use odin_common::angle::Angle360;
use crate::relative::RelativeVector;

/// a `RelativeVector` after rotation, `depth` points along the own-ship heading
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct CameraFrameVector {
    pub lateral: f64,
    pub depth: f64,
    pub vertical: f64,
}

#[derive(Debug,Clone)]
pub struct AttitudeRotator {
    heading: Angle360,
    rotation: Rotation3<f64>,
}

impl AttitudeRotator {
    pub fn new (heading: Angle360)->Self {
        AttitudeRotator { heading, rotation: yaw_rotation( heading) }
    }

    pub fn heading (&self)->Angle360 { self.heading }

    /// recompute the matrix only if the heading did change. Returns true if it was recomputed
    pub fn set_heading (&mut self, heading: Angle360)->bool {
        if heading != self.heading {
            self.heading = heading;
            self.rotation = yaw_rotation( heading);
            true
        } else {
            false
        }
    }

    pub fn rotate (&self, v: &RelativeVector)->CameraFrameVector {
        let r = self.rotation * Vector3::new( v.east, v.north, v.up);
        CameraFrameVector { lateral: r.x, depth: r.y, vertical: r.z }
    }
}

// headings are clockwise but our east axis is mirrored, which turns them counter-clockwise.
// Rotating by -heading around the up axis therefore maps the heading direction onto +depth
fn yaw_rotation (heading: Angle360)->Rotation3<f64> {
    Rotation3::from_axis_angle( &Vector3::z_axis(), -heading.radians())
}
