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

//! geodetic to locally flat (UTM) coordinates in a configured zone

use serde::{Serialize,Deserialize};
use odin_common::utm::{UtmZone, geo_to_utm_zone};
use odin_common::geo_constants::{UTM_ZONE_HALF_WIDTH, UTM_MIN_LAT, UTM_MAX_LAT};
use crate::errors::{OdinTrafficCamError, Result};

#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct PlanarConfig {
    pub zone: UtmZone,

    /// max longitude distance from the zone's central meridian we still accept. Beyond that
    /// the projection distortion is deemed too large and positions are reported as out-of-zone
    pub max_meridian_offset_deg: f64,
}

impl Default for PlanarConfig {
    fn default()->Self {
        // southern California
        PlanarConfig { zone: UtmZone{ zone: 11, north: true }, max_meridian_offset_deg: UTM_ZONE_HALF_WIDTH + 0.5 }
    }
}

/// a position in the planar reference system (meters)
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct PlanarPoint {
    pub x: f64, // easting
    pub y: f64, // northing
}

#[derive(Debug,Clone)]
pub struct PlanarProjector {
    zone: UtmZone,
    max_meridian_offset_deg: f64,
}

impl PlanarProjector {
    pub fn new (config: &PlanarConfig)->Self {
        PlanarProjector { zone: config.zone, max_meridian_offset_deg: config.max_meridian_offset_deg }
    }

    pub fn zone (&self)->UtmZone { self.zone }

    /// is the given position inside of our accuracy envelope
    pub fn is_in_zone (&self, lat: f64, lon: f64)->bool {
        (UTM_MIN_LAT..=UTM_MAX_LAT).contains( &lat)
            && lon.is_finite()
            && self.zone.meridian_offset(lon) <= self.max_meridian_offset_deg
    }

    pub fn project (&self, lat: f64, lon: f64)->Result<PlanarPoint> {
        if !self.is_in_zone( lat, lon) {
            return Err( self.out_of_zone( lat, lon))
        }

        geo_to_utm_zone( lat, lon, self.zone)
            .map( |utm| PlanarPoint { x: utm.easting, y: utm.northing })
            .ok_or_else( || self.out_of_zone( lat, lon))
    }

    fn out_of_zone (&self, lat: f64, lon: f64)->OdinTrafficCamError {
        OdinTrafficCamError::OutOfZone { lat, lon, zone: self.zone }
    }
}
