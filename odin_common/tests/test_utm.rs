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
#![allow(unused)]

use odin_common::utm::{UtmZone, geo_to_utm_zone};
use odin_common::geo_constants::UTM_FALSE_EASTING;

// run with "cargo test test_utm -- --nocapture"

#[test]
fn test_utm_zone () {
    let z = UtmZone::containing( 33.12, -117.28);
    println!("zone for Carlsbad: {z}");
    assert_eq!( z, UtmZone{ zone: 11, north: true });
    assert_eq!( z.central_meridian(), -117.0);
    assert!( (z.meridian_offset(-117.28) - 0.28).abs() < 1e-9);

    // wrap around the antimeridian
    let z = UtmZone::new( 60, true).unwrap();
    assert!( (z.meridian_offset(-179.0) - 4.0).abs() < 1e-9);

    assert!( UtmZone::new( 0, true).is_none());
    assert!( UtmZone::new( 61, true).is_none());
}

#[test]
fn test_utm_central_meridian () {
    let zone = UtmZone{ zone: 11, north: true };
    let p = geo_to_utm_zone( 33.0, -117.0, zone).unwrap();
    println!("33N,117W -> {p:?}");

    assert!( (p.easting - UTM_FALSE_EASTING).abs() < 1e-6);
    // k0-scaled meridian arc length for 33°N is ~3651.3km
    assert!( p.northing > 3_650_000.0 && p.northing < 3_655_000.0);
}

#[test]
fn test_utm_local_deltas () {
    let zone = UtmZone{ zone: 11, north: true };
    let p0 = geo_to_utm_zone( 33.0, -117.0, zone).unwrap();

    // 0.01° of latitude at 33° is ~1108.6m (including k0)
    let p1 = geo_to_utm_zone( 33.01, -117.0, zone).unwrap();
    let dn = p1.northing - p0.northing;
    println!("dn for 0.01° lat: {dn}");
    assert!( (dn - 1108.6).abs() < 1.0);
    assert!( (p1.easting - p0.easting).abs() < 1e-6);

    // 0.01° of longitude at 33° is ~934.2m
    let p2 = geo_to_utm_zone( 33.0, -116.99, zone).unwrap();
    let de = p2.easting - p0.easting;
    println!("de for 0.01° lon: {de}");
    assert!( (de - 934.2).abs() < 1.0);
}

#[test]
fn test_utm_invalid () {
    let zone = UtmZone{ zone: 11, north: true };
    assert!( geo_to_utm_zone( 85.0, -117.0, zone).is_none());
    assert!( geo_to_utm_zone( -81.0, -117.0, zone).is_none());
    assert!( geo_to_utm_zone( f64::NAN, -117.0, zone).is_none());

    let south = UtmZone{ zone: 11, north: false };
    let p = geo_to_utm_zone( -10.0, -117.0, south).unwrap();
    assert!( p.northing > 8_800_000.0 && p.northing < 10_000_000.0);
}
