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

/// geodetic constants that should be consistent throughout ODIN applications (WGS84)

/// first eccentricity, derived from semi major axis 6378137m and flattening 1/298.257223563
pub const E_EARTH: f64 = 0.08181919084262149;

/// rectifying radius A = a/(1+n) * (1 + n²/4 + n⁴/64) in meters, with third flattening n = f/(2-f)
pub const RECTIFYING_EARTH_RADIUS: f64 = 6367449.145823416;

/// UTM central meridian scale factor
pub const UTM_K0: f64 = 0.9996;

/// UTM false easting in meters
pub const UTM_FALSE_EASTING: f64 = 500000.0;

/// UTM false northing for southern hemisphere zones in meters
pub const UTM_FALSE_NORTHING_SOUTH: f64 = 10000000.0;

/// half width of a regular UTM zone in degrees
pub const UTM_ZONE_HALF_WIDTH: f64 = 3.0;

/// latitude range covered by UTM (polar regions use UPS)
pub const UTM_MIN_LAT: f64 = -80.0;
pub const UTM_MAX_LAT: f64 = 84.0;
