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

use odin_trafficcam::{FixedCellMeasure, LabelConfig, LabelPlacementEngine, PixelPoint, TextMeasure, VerticalTier, Viewport, Warning};
use odin_trafficcam::labels::{AnchorSide, Stacking};

// run with "cargo test --test test_labels -- --nocapture"

const VIEWPORT: Viewport = Viewport { width: 2064, height: 1504 };

fn engine ()->LabelPlacementEngine { LabelPlacementEngine::new( LabelConfig::default()) }

fn lines ()->Vec<String> {
    vec![ "SWA123 250kt".to_string(), "33.0100,-117.0000".to_string(), "5000ft 1.20nm".to_string() ]
}

/// every line is 300x20, which gives us 3*20 + 2*4 = 68px blocks
fn wide_measure (_: &str)->(u32,u32) { (300, 20) }

#[test]
fn test_right_edge_anchors_left () {
    let block = engine().place_label( "a", PixelPoint::new( 2000, 700), lines(), &wide_measure, VIEWPORT);
    println!("{block:?}");

    assert_eq!( block.side, AnchorSide::Left);
    assert_eq!( block.stacking, Stacking::Upward);
    assert_eq!( block.anchor, PixelPoint::new( 2000 - 10 - 300, 700 - 68));
    assert!( block.bbox.is_inside( &VIEWPORT));
}

#[test]
fn test_left_edge_anchors_right () {
    let block = engine().place_label( "a", PixelPoint::new( 5, 700), lines(), &wide_measure, VIEWPORT);

    assert_eq!( block.side, AnchorSide::Right);
    assert_eq!( block.anchor, PixelPoint::new( 15, 632));
    assert_eq!( block.bbox.width, 300);
    assert_eq!( block.bbox.height, 68);

    let ys: Vec<i32> = block.lines.iter().map( |l| l.origin.v).collect();
    assert_eq!( ys, vec![632, 656, 680]);
    assert!( block.lines.iter().all( |l| l.origin.u == 15));
}

#[test]
fn test_top_edge_stacks_downward () {
    let block = engine().place_label( "a", PixelPoint::new( 500, 30), lines(), &wide_measure, VIEWPORT);
    println!("{block:?}");

    assert_eq!( block.stacking, Stacking::Downward);
    assert_eq!( block.anchor.v, 30);
    assert!( block.bbox.is_inside( &VIEWPORT));
}

#[test]
fn test_clamped_into_viewport () {
    // the target itself is outside, the label still has to be inside
    let block = engine().place_label( "a", PixelPoint::new( -50, 1500), lines(), &wide_measure, VIEWPORT);
    println!("{block:?}");
    assert_eq!( block.anchor.u, 0);
    assert!( block.bbox.is_inside( &VIEWPORT));

    let block = engine().place_label( "a", PixelPoint::new( 700, 1503), lines(), &wide_measure, Viewport{ width: 800, height: 50 });
    println!("{block:?}");
    assert_eq!( block.anchor.v, 0); // taller than the viewport
}

#[test]
fn test_fixed_cell_measure () {
    let m = FixedCellMeasure::default();
    assert_eq!( m.measure( "ABCD"), (44, 20));
    assert_eq!( m.measure( ""), (0, 20));

    let block = engine().place_label( "a", PixelPoint::new( 1000, 700), lines(), &m, VIEWPORT);
    assert_eq!( block.bbox.width, 17 * 11);
}

#[test]
fn test_banner_order () {
    let warnings: Vec<Warning> = ["first", "second", "third"].iter().map( |id| Warning {
        tier: VerticalTier::IfrCritical,
        identifier: id.to_string(),
        vertical_separation_ft: 800.0,
        lateral_nm: 1.0,
        message: format!("{id}: within minimum IFR vertical clearance (800 ft, 1.000 nm)")
    }).collect();

    let banners = engine().place_banners( &warnings, &FixedCellMeasure::default(), VIEWPORT);
    let ids: Vec<&str> = banners.iter().map( |b| b.identifier.as_str()).collect();
    let ys: Vec<i32> = banners.iter().map( |b| b.anchor.v).collect();
    println!("{ids:?} at {ys:?}");

    assert_eq!( ids, vec!["first", "second", "third"]);
    assert_eq!( ys, vec![10, 36, 62]);
    assert!( banners.iter().all( |b| b.anchor.u == 10 && b.lines.len() == 1));
}
