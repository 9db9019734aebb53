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

//! own-ship relative displacement vectors and ranges

use serde::{Serialize,Deserialize};
use odin_common::{hypot2, hypot3, uom::meters_to_nautical_miles};
use crate::planar::PlanarPoint;

/// displacement from own-ship to target in a world aligned frame (meters).
///
/// The `east` component is negated with respect to the planar easting delta, i.e. the frame is
/// mirrored left/right. Together with the downward growing image rows this corresponds to a camera
/// that is mounted upside down, which is how the overlay camera is installed.
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct RelativeVector {
    pub east: f64,
    pub north: f64,
    pub up: f64,
}

/// horizontal and 3D distance between own-ship and target in nautical miles
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct RangeInfo {
    pub lateral_nm: f64,
    pub slant_nm: f64,
}

pub fn relative_vector (own_xy: &PlanarPoint, own_alt_m: f64, target_xy: &PlanarPoint, target_alt_m: f64)->RelativeVector {
    RelativeVector {
        east: -(target_xy.x - own_xy.x),
        north: target_xy.y - own_xy.y,
        up: target_alt_m - own_alt_m,
    }
}

impl RelativeVector {
    pub fn lateral_m (&self)->f64 { hypot2( self.east, self.north) }
    pub fn slant_m (&self)->f64 { hypot3( self.east, self.north, self.up) }

    pub fn range_info (&self)->RangeInfo {
        RangeInfo {
            lateral_nm: meters_to_nautical_miles( self.lateral_m()),
            slant_nm: meters_to_nautical_miles( self.slant_m()),
        }
    }
}
