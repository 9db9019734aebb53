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

//! vertical separation warnings

use std::fmt;
use serde::{Serialize,Deserialize};
use odin_common::uom::meters_to_feet;
use crate::relative::{RelativeVector, RangeInfo};

pub const VFR_VERTICAL_CLEARANCE_FT: f64 = 500.0;
pub const IFR_VERTICAL_CLEARANCE_FT: f64 = 1000.0;

#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash,Serialize,Deserialize)]
pub enum VerticalTier {
    VfrCritical,
    IfrCritical,
}

impl VerticalTier {
    pub fn description (&self)->&'static str {
        match self {
            VerticalTier::VfrCritical => "within minimum VFR vertical clearance",
            VerticalTier::IfrCritical => "within minimum IFR vertical clearance",
        }
    }
}

impl fmt::Display for VerticalTier {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result {
        match self {
            VerticalTier::VfrCritical => write!(f, "VFR"),
            VerticalTier::IfrCritical => write!(f, "IFR"),
        }
    }
}

#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct Warning {
    pub tier: VerticalTier,
    pub identifier: String,
    pub vertical_separation_ft: f64, // positive if target is above own-ship
    pub lateral_nm: f64,
    pub message: String,
}

/// classifies targets by their signed vertical separation (target altitude minus own-ship altitude).
/// Note that bearing and projectability do not matter - a target right behind us still warns
#[derive(Debug,Clone)]
pub struct ProximityClassifier {
    vfr_limit_ft: f64,
    ifr_limit_ft: f64,
}

impl Default for ProximityClassifier {
    fn default()->Self {
        ProximityClassifier { vfr_limit_ft: VFR_VERTICAL_CLEARANCE_FT, ifr_limit_ft: IFR_VERTICAL_CLEARANCE_FT }
    }
}

impl ProximityClassifier {
    /// first match wins: VFR below 500ft, IFR below 1000ft, otherwise no warning
    pub fn classify (&self, vertical_separation_ft: f64)->Option<VerticalTier> {
        if vertical_separation_ft < self.vfr_limit_ft {
            Some(VerticalTier::VfrCritical)
        } else if vertical_separation_ft < self.ifr_limit_ft {
            Some(VerticalTier::IfrCritical)
        } else {
            None
        }
    }

    /// `name` is what we show to the pilot (trimmed callsign or identifier)
    pub fn assess (&self, identifier: &str, name: &str, rel: &RelativeVector, range: &RangeInfo)->Option<Warning> {
        let vertical_separation_ft = meters_to_feet( rel.up);

        self.classify( vertical_separation_ft).map( |tier| {
            let message = format!( "{}: {} ({} ft, {:.3} nm)",
                name, tier.description(), vertical_separation_ft.round() as i64, range.lateral_nm);

            Warning {
                tier,
                identifier: identifier.to_string(),
                vertical_separation_ft,
                lateral_nm: range.lateral_nm,
                message
            }
        })
    }
}
