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

use odin_trafficcam::{ProximityClassifier, RelativeVector, TrafficRecord, VerticalTier};

// run with "cargo test --test test_proximity -- --nocapture"

#[test]
fn test_tier_boundaries () {
    let pc = ProximityClassifier::default();

    let cases: [(f64, Option<VerticalTier>); 11] = [
        (-5000.0, Some(VerticalTier::VfrCritical)), // separation is signed, targets below always warn
        (-500.01, Some(VerticalTier::VfrCritical)),
        (-500.0,  Some(VerticalTier::VfrCritical)),
        (-499.99, Some(VerticalTier::VfrCritical)),
        (0.0,     Some(VerticalTier::VfrCritical)),
        (499.0,   Some(VerticalTier::VfrCritical)),
        (500.0,   Some(VerticalTier::IfrCritical)),
        (999.9,   Some(VerticalTier::IfrCritical)),
        (1000.0,  None),
        (1001.0,  None),
        (f64::NAN, None),
    ];

    for (ft, expected) in cases {
        let tier = pc.classify( ft);
        println!("{ft:9.2} ft -> {tier:?}");
        assert_eq!( tier, expected);
    }
}

#[test]
fn test_warning_message () {
    let pc = ProximityClassifier::default();
    let rel = RelativeVector { east: -1000.0, north: 1000.0, up: 200.0 * 0.3048 };
    let range = rel.range_info();

    let w = pc.assess( "a1b2c3", "SWA123", &rel, &range).unwrap();
    println!("{}", w.message);

    assert_eq!( w.tier, VerticalTier::VfrCritical);
    assert_eq!( w.identifier, "a1b2c3");
    assert!( (w.vertical_separation_ft - 200.0).abs() < 1e-6);
    // sqrt(2) km
    assert!( (w.lateral_nm - 0.7636).abs() < 1e-3);
    assert_eq!( w.message, "SWA123: within minimum VFR vertical clearance (200 ft, 0.764 nm)");
}

#[test]
fn test_ifr_warning_below () {
    let pc = ProximityClassifier::default();
    let rel = RelativeVector { east: 0.0, north: 0.0, up: 700.0 * 0.3048 };
    let w = pc.assess( "abc", "abc", &rel, &rel.range_info()).unwrap();
    assert_eq!( w.tier, VerticalTier::IfrCritical);
    assert_eq!( w.tier.to_string(), "IFR");
    assert!( w.message.contains( "within minimum IFR vertical clearance (700 ft, 0.000 nm)"));

    let rel = RelativeVector { east: 0.0, north: 0.0, up: 1500.0 * 0.3048 };
    assert!( pc.assess( "abc", "abc", &rel, &rel.range_info()).is_none());
}

#[test]
fn test_display_name () {
    let mut rec = TrafficRecord {
        identifier: "a1b2c3".to_string(), lat: 33.0, lon: -117.0, altitude_ft: 1000.0, callsign: "  ".to_string(), ground_speed_kn: 120.0
    };
    assert_eq!( rec.display_name(), "a1b2c3");

    rec.callsign = "N123AB  ".to_string();
    assert_eq!( rec.display_name(), "N123AB");
    assert!( (rec.altitude_m() - 304.8).abs() < 1e-9);
}
