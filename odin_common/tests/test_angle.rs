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

use odin_common::angle::*;
use odin_common::uom::*;
use odin_common::config::config_from_str;
use serde::Deserialize;

#[test]
fn test_normalize () {
    assert_eq!( normalize_360(-90.0), 270.0);
    assert_eq!( normalize_360(360.0), 0.0);
    assert_eq!( normalize_360(725.0), 5.0);
    assert!( normalize_360(-1e-20) < 360.0);

    assert_eq!( normalize_180(190.0), -170.0);
    assert_eq!( normalize_180(-190.0), 170.0);
    assert_eq!( normalize_90(100.0), 80.0);

    let hdg = Angle360::from_degrees(-45.0);
    println!("hdg = {hdg:?}");
    assert_eq!( hdg.degrees(), 315.0);
    assert_eq!( (hdg + Angle360::from_degrees(90.0)).degrees(), 45.0);
}

#[derive(Deserialize,Debug)]
struct Pos { lat: Latitude, lon: Longitude, hdg: Angle360 }

#[test]
fn test_angle_serde () {
    let p: Pos = serde_json::from_str( r#"{"lat": 33.1, "lon": -117.2, "hdg": 370.0}"#).unwrap();
    println!("{p:?}");
    assert_eq!( p.hdg.degrees(), 10.0);

    assert!( serde_json::from_str::<Pos>( r#"{"lat": 95.0, "lon": -117.2, "hdg": 0.0}"#).is_err());
    assert!( serde_json::from_str::<Pos>( r#"{"lat": 33.0, "lon": -181.0, "hdg": 0.0}"#).is_err());

    let p: Pos = config_from_str( "(lat: 33.0, lon: -117.0, hdg: -90.0)").unwrap();
    assert_eq!( p.hdg.degrees(), 270.0);
}

#[test]
fn test_kind_validation () {
    assert!( LatitudeKind::is_valid( 90.0));
    assert!( !LatitudeKind::is_valid( 90.5));
    assert!( LongitudeKind::is_valid( -180.0));
    assert!( !LongitudeKind::is_valid( 181.0));
    assert!( FullCircleKind::is_valid( 725.0));
    assert!( !FullCircleKind::is_valid( f64::NAN));

    let res: Result<Pos,_> = config_from_str( "(lat: 33.0, lon: -117.0, hdg: inf)");
    assert!( res.is_err());
}

#[test]
fn test_units () {
    assert!( (feet_to_meters(1000.0) - 304.8).abs() < 1e-9);
    assert!( (meters_to_feet(50.0) - 164.0420).abs() < 1e-3);
    assert!( (meters_to_nautical_miles(1852.0) - 1.0).abs() < 1e-12);
}
