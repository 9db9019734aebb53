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

//! annotate a single camera image with the traffic from a dump1090 JSON file, for a given own-ship state

use std::fs;
use anyhow::Result;
use chrono::Utc;
use odin_common::{define_cli, check_cli};
use odin_trafficcam::{init_tracing, load_config, parse_traffic_json, OverlayRenderer, OwnshipState, TrafficCamConfig};

define_cli! { ARGS [about="draw ADS-B traffic labels and proximity warnings into a camera image"] =
    config: Option<String> [help="pathname of RON config (uses built-in defaults if not set)", long],
    lat: f64 [help="own-ship latitude in degrees", long, allow_hyphen_values=true],
    lon: f64 [help="own-ship longitude in degrees", long, allow_hyphen_values=true],
    alt: f64 [help="own-ship altitude in meters", long, allow_hyphen_values=true],
    heading: f64 [help="own-ship true heading in degrees", long, default_value="0"],
    traffic: String [help="pathname of dump1090 data.json"],
    input: String [help="input image"],
    output: String [help="output image"]
}

fn main ()->Result<()> {
    check_cli!(ARGS);
    init_tracing();

    let config: TrafficCamConfig = match &ARGS.config {
        Some(path) => load_config( path)?,
        None => TrafficCamConfig::default()
    };
    let overlay = config.overlay()?;
    let renderer = OverlayRenderer::new( &config.render)?;

    let ownship = OwnshipState::new( ARGS.lat, ARGS.lon, ARGS.alt, ARGS.heading)?;
    let snapshot = parse_traffic_json( Utc::now(), &fs::read( &ARGS.traffic)?)?;

    let mut img = image::open( &ARGS.input)?.to_rgb8();
    let expected = (overlay.projector().width(), overlay.projector().height());
    if img.dimensions() != expected {
        tracing::warn!("image size {:?} does not match camera config {:?}", img.dimensions(), expected);
    }

    let frame = overlay.compute( Some(&ownship), Some(&snapshot), renderer.measure())?;
    for w in &frame.warnings {
        println!("{}", w.message);
    }
    for r in &frame.rejected {
        println!("rejected {}: {}", r.identifier, r.reason);
    }

    renderer.draw( &mut img, &frame);
    img.save( &ARGS.output)?;
    println!("{} targets, {} labeled, saved to {}", frame.targets.len(), frame.labels.len(), ARGS.output);

    Ok(())
}
