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

use chrono::Utc;
use image::{Rgb, RgbImage};
use odin_trafficcam::{
    FixedCellMeasure, OdinTrafficCamError, OverlayRenderer, OwnshipState, RenderConfig, TrafficCamConfig, TrafficRecord, TrafficSnapshot, VerticalTier
};

// run with "cargo test --test test_pipeline -- --nocapture"

fn record (id: &str, callsign: &str, lat: f64, lon: f64, altitude_ft: f64, ground_speed_kn: f64)->TrafficRecord {
    TrafficRecord { identifier: id.to_string(), lat, lon, altitude_ft, callsign: callsign.to_string(), ground_speed_kn }
}

fn ownship ()->OwnshipState { OwnshipState::new( 33.0, -117.0, 100.0, 0.0).unwrap() }

fn snapshot ()->TrafficSnapshot {
    TrafficSnapshot::from_records( Utc::now(), vec![
        record( "e00004", "",      32.99, -117.0, 2000.0, 140.0),      // behind us
        record( "d00003", "FAR1",  33.0,  -100.0, 5000.0, 300.0),      // outside of projection zone
        record( "c00002", "HIGH1", 33.01, -117.0, 10000.0, 250.0),     // ahead but way above
        record( "b00001", "TEST1", 33.01, -117.0, 328.084, 95.0),      // straight ahead at our altitude
        record( "a1b2c3", "",      33.0,  -117.0, 492.126, 0.0),       // right on top of us, 50m above
    ])
}

#[test]
fn test_scenario () {
    let overlay = TrafficCamConfig::default().overlay().unwrap();
    let frame = overlay.compute( Some(&ownship()), Some(&snapshot()), &FixedCellMeasure::default()).unwrap();
    println!("{frame:#?}");

    // sorted by identifier, rejected ones are not in targets
    let ids: Vec<&str> = frame.targets.iter().map( |t| t.identifier.as_str()).collect();
    assert_eq!( ids, vec!["a1b2c3", "b00001", "c00002", "e00004"]);
    assert_eq!( frame.rejected.len(), 1);
    assert_eq!( frame.rejected[0].identifier, "d00003");

    // co-located target has no projection but still warns
    let a = &frame.targets[0];
    assert!( a.pixel.is_none());
    assert!( !a.on_canvas);

    let b = &frame.targets[1];
    assert_eq!( b.pixel.map( |p| (p.u,p.v)), Some((1032,752)));
    assert!( b.on_canvas);

    assert!( !frame.targets[2].on_canvas); // above the image
    assert!( frame.targets[3].camera.depth < 0.0);
    assert!( !frame.targets[3].on_canvas);

    let tiers: Vec<(&str,VerticalTier)> = frame.warnings.iter().map( |w| (w.identifier.as_str(), w.tier)).collect();
    assert_eq!( tiers, vec![("a1b2c3", VerticalTier::VfrCritical), ("b00001", VerticalTier::VfrCritical)]);
    assert_eq!( frame.warnings[0].message, "a1b2c3: within minimum VFR vertical clearance (164 ft, 0.000 nm)");
    assert_eq!( frame.warnings[1].message, "TEST1: within minimum VFR vertical clearance (0 ft, 0.599 nm)");

    assert_eq!( frame.labels.len(), 1);
    let texts: Vec<&str> = frame.labels[0].lines.iter().map( |l| l.text.as_str()).collect();
    assert_eq!( texts, vec!["TEST1 95kt", "33.0100,-117.0000", "328ft 0.60nm"]);

    assert_eq!( frame.banners.len(), 2);
    assert_eq!( frame.banners[0].identifier, "a1b2c3");
}

#[test]
fn test_idempotent () {
    let overlay = TrafficCamConfig::default().overlay().unwrap();
    let own = ownship();
    let snapshot = snapshot();
    let measure = FixedCellMeasure::default();

    let f1 = overlay.compute( Some(&own), Some(&snapshot), &measure).unwrap();
    let f2 = overlay.compute( Some(&own), Some(&snapshot), &measure).unwrap();
    assert_eq!( f1, f2);
}

#[test]
fn test_missing_inputs () {
    let overlay = TrafficCamConfig::default().overlay().unwrap();
    let measure = FixedCellMeasure::default();

    let frame = overlay.compute( None, Some(&snapshot()), &measure).unwrap();
    assert!( frame.is_empty());
    assert!( frame.labels.is_empty() && frame.banners.is_empty());

    let frame = overlay.compute( Some(&ownship()), None, &measure).unwrap();
    assert!( frame.is_empty());

    let empty = TrafficSnapshot::new( Utc::now());
    let frame = overlay.compute( Some(&ownship()), Some(&empty), &measure).unwrap();
    assert!( frame.is_empty());
}

#[test]
fn test_ownship_out_of_zone () {
    let overlay = TrafficCamConfig::default().overlay().unwrap();
    let own = OwnshipState::new( 40.0, -74.0, 100.0, 0.0).unwrap();

    let res = overlay.compute( Some(&own), Some(&snapshot()), &FixedCellMeasure::default());
    assert!( matches!( res, Err(OdinTrafficCamError::OutOfZone{..})));
}

#[test]
fn test_render_without_font () {
    let config = TrafficCamConfig::default();
    let overlay = config.overlay().unwrap();
    let renderer = OverlayRenderer::new( &config.render).unwrap();
    assert!( !renderer.has_font());

    let frame = overlay.compute( Some(&ownship()), Some(&snapshot()), renderer.measure()).unwrap();
    let mut img = RgbImage::new( 2064, 1504);
    renderer.draw( &mut img, &frame);

    // the marker of the VFR critical target ahead is drawn in the VFR color
    let red = Rgb([255u8, 0, 0]);
    assert_eq!( *img.get_pixel( 1032 - 8, 752), red);
    // and so is its banner box
    assert_eq!( *img.get_pixel( 8, 8), red);
}

#[test]
fn test_invalid_render_config () {
    let config = RenderConfig { vfr_color: "red".to_string(), ..RenderConfig::default() };
    assert!( OverlayRenderer::new( &config).is_err());

    let config = RenderConfig { font_path: Some("/does/not/exist.ttf".into()), ..RenderConfig::default() };
    assert!( OverlayRenderer::new( &config).is_err());
}
