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

//! unit-of-measure helpers on top of the `uom` crate
//! traffic feeds report altitude in feet and distances in nautical miles, navigation receivers report meters

use uom::si::{f64::Length, length::{meter,foot,nautical_mile}};

#[inline] pub fn meters (len: f64)->Length { Length::new::<meter>(len) }
#[inline] pub fn feet (len: f64)->Length { Length::new::<foot>(len) }

#[inline] pub fn feet_to_meters (ft: f64)->f64 { feet(ft).get::<meter>() }
#[inline] pub fn meters_to_feet (m: f64)->f64 { meters(m).get::<foot>() }
#[inline] pub fn meters_to_nautical_miles (m: f64)->f64 { meters(m).get::<nautical_mile>() }
