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
#![allow(non_snake_case,non_upper_case_globals)]

//! Universal Transverse Mercator projection for a caller-selected zone.
//!
//! The zone is not derived from the input position. Callers that work in a local operating area
//! configure one zone and project everything into it, so that all projected coordinates share
//! the same planar reference system. Accuracy of the series degrades with
//! distance from the central meridian, which is why `UtmZone::meridian_offset` is exposed.

use std::fmt;
use serde::{Serialize,Deserialize};

use crate::{sin, cos, sinh, cosh, atan, atanh, sqrt};
use crate::angle::normalize_180;
use crate::geo_constants::{
    E_EARTH, RECTIFYING_EARTH_RADIUS, UTM_K0, UTM_FALSE_EASTING, UTM_FALSE_NORTHING_SOUTH, UTM_MIN_LAT, UTM_MAX_LAT
};

#[derive(Debug,Copy,Clone,Serialize,Deserialize,PartialEq,Eq)]
pub struct UtmZone {
    pub zone: u32,   // 1..=60
    pub north: bool, // hemisphere (determines false northing)
}

impl UtmZone {
    pub fn new (zone: u32, north: bool)->Option<UtmZone> {
        if zone >= 1 && zone <= 60 { Some( UtmZone{zone,north}) } else { None }
    }

    /// the regular (non-exception) zone that contains the given position
    pub fn containing (lat_deg: f64, lon_deg: f64)->UtmZone {
        let zone = (((normalize_180(lon_deg) + 180.0) / 6.0).trunc() as u32 % 60) + 1;
        UtmZone { zone, north: lat_deg >= 0.0 }
    }

    pub fn central_meridian (&self)->f64 { (self.zone as f64) * 6.0 - 183.0 }

    /// absolute longitude distance in degrees between `lon_deg` and the central meridian of this zone
    pub fn meridian_offset (&self, lon_deg: f64)->f64 {
        normalize_180( lon_deg - self.central_meridian()).abs()
    }

    fn false_northing (&self)->f64 { if self.north { 0.0 } else { UTM_FALSE_NORTHING_SOUTH } }
}

impl fmt::Display for UtmZone {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result {
        write!(f, "{}{}", self.zone, if self.north {'N'} else {'S'})
    }
}

/// projected position in meters
#[derive(Debug,Copy,Clone,Serialize,Deserialize,PartialEq)]
pub struct UTM {
    pub easting: f64,
    pub northing: f64,
    pub zone: UtmZone,
}

// Krüger series up to n³ - see https://en.wikipedia.org/wiki/Universal_Transverse_Mercator_coordinate_system
const α1: f64 = 8.377318188192541E-4;   // n/2 - (2/3)n² + (5/16)n³
const α2: f64 = 7.608496958699166E-7;   // (13/48)n² - (3/5)n³
const α3: f64 = 1.2034877875966646E-9;  // (61/240)n³

/// project geodetic degrees into the given zone. Returns `None` for non-finite input or
/// latitudes outside the UTM range. Note this does *not* check the meridian offset, i.e. the
/// result for longitudes far away from the zone is mathematically defined but heavily distorted
pub fn geo_to_utm_zone (lat_deg: f64, lon_deg: f64, zone: UtmZone)->Option<UTM> {
    if !lat_deg.is_finite() || !lon_deg.is_finite() { return None }
    if lat_deg < UTM_MIN_LAT || lat_deg > UTM_MAX_LAT { return None }

    let D = UTM_K0 * RECTIFYING_EARTH_RADIUS;
    let C = E_EARTH; // == 2√n/(1+n)

    let φ = lat_deg.to_radians();
    let dλ = normalize_180( lon_deg - zone.central_meridian()).to_radians();

    let sin_φ = sin(φ);
    let t = sinh( atanh(sin_φ) - C * atanh( C * sin_φ));

    let ξ = atan( t / cos(dλ));
    let η = atanh( sin(dλ) / sqrt(1.0 + t*t));

    let easting = UTM_FALSE_EASTING + D * (η
        + α1 * cos(2.0*ξ) * sinh(2.0*η)
        + α2 * cos(4.0*ξ) * sinh(4.0*η)
        + α3 * cos(6.0*ξ) * sinh(6.0*η));

    let northing = zone.false_northing() + D * (ξ
        + α1 * sin(2.0*ξ) * cosh(2.0*η)
        + α2 * sin(4.0*ξ) * cosh(4.0*η)
        + α3 * sin(6.0*ξ) * cosh(6.0*η));

    Some( UTM { easting, northing, zone })
}
