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

//! traffic camera overlay: projects ADS-B traffic positions into the image of a camera that is
//! mounted on a moving platform (own-ship), warns about targets within vertical separation limits
//! and places the corresponding labels and banners.
//!
//! The computational core is `overlay::TrafficOverlay::compute`, which is synchronous and pure.
//! The `acquisition` module contains the tokio tasks that feed it via single value slots (`latest`),
//! `render` draws the computed frames into images.

use std::path::Path;
use serde::{Serialize,Deserialize};

pub mod errors;
pub mod planar;
pub mod relative;
pub mod attitude;
pub mod camera;
pub mod proximity;
pub mod labels;
pub mod traffic;
pub mod ownship;
pub mod latest;
pub mod overlay;
pub mod acquisition;
pub mod render;

pub use errors::{Result, OdinTrafficCamError};
pub use planar::{PlanarConfig, PlanarPoint, PlanarProjector};
pub use relative::{RelativeVector, RangeInfo, relative_vector};
pub use attitude::{AttitudeRotator, CameraFrameVector};
pub use camera::{CameraConfig, CameraIntrinsics, PinholeProjector, PixelPoint};
pub use proximity::{ProximityClassifier, VerticalTier, Warning};
pub use labels::{LabelConfig, LabelPlacementEngine, LabelBlock, TextMeasure, FixedCellMeasure, Viewport};
pub use traffic::{TrafficRecord, TrafficSnapshot, TrafficUpdate, parse_traffic_json};
pub use ownship::{OwnshipState, OwnshipUpdate, OwnshipTracker, parse_nmea};
pub use latest::{latest_slot, SlotReader, SlotWriter};
pub use overlay::{OverlayFrame, TrafficOverlay};
pub use acquisition::{AdsbConfig, AdsbPoller, GpsConfig, GpsConnector};
pub use render::{FontMeasure, OverlayRenderer, RenderConfig};

/// the complete application configuration. Missing sections use their defaults
#[derive(Debug,Clone,Default,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct TrafficCamConfig {
    pub camera: CameraConfig,
    pub projection: PlanarConfig,
    pub labels: LabelConfig,
    pub render: RenderConfig,
    pub gps: GpsConfig,
    pub adsb: AdsbConfig,
}

impl TrafficCamConfig {
    pub fn overlay (&self)->Result<TrafficOverlay> {
        TrafficOverlay::new( &self.camera, &self.projection, &self.labels)
    }
}

pub fn load_config<P: AsRef<Path>> (path: P)->Result<TrafficCamConfig> {
    Ok( odin_common::config::load_config_path( path)? )
}

/// log to stderr, filtered by RUST_LOG. This is a no-op if there already is a global subscriber
pub fn init_tracing () {
    let _ = tracing_subscriber::fmt()
        .with_env_filter( tracing_subscriber::EnvFilter::from_default_env())
        .with_writer( std::io::stderr)
        .try_init();
}
