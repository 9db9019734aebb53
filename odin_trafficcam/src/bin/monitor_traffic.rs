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

//! continuously compute the traffic overlay from live NMEA and dump1090 sources and report
//! proximity warnings

use anyhow::Result;
use tracing::{info,warn};
use odin_common::{define_cli, check_cli};
use odin_trafficcam::{
    init_tracing, latest_slot, load_config, AdsbPoller, FixedCellMeasure, GpsConnector, OwnshipState, TrafficCamConfig, TrafficSnapshot
};

define_cli! { ARGS [about="monitor ADS-B traffic relative to own-ship and report proximity warnings"] =
    config: Option<String> [help="pathname of RON config (uses built-in defaults if not set)", long],
    gps: Option<String> [help="override NMEA socket address (host:port)", long],
    adsb: Option<String> [help="override dump1090 data.json URL", long]
}

#[tokio::main]
async fn main ()->Result<()> {
    check_cli!(ARGS);
    init_tracing();

    let mut config: TrafficCamConfig = match &ARGS.config {
        Some(path) => load_config( path)?,
        None => TrafficCamConfig::default()
    };
    if let Some(address) = &ARGS.gps { config.gps.address = address.clone() }
    if let Some(url) = &ARGS.adsb { config.adsb.url = url.clone() }

    let overlay = config.overlay()?;
    let measure = FixedCellMeasure::default();

    let (ownship_writer, mut ownship) = latest_slot::<OwnshipState>();
    let (traffic_writer, mut traffic) = latest_slot::<TrafficSnapshot>();

    let gps_task = GpsConnector::new( config.gps.clone(), ownship_writer).spawn();
    let adsb_task = AdsbPoller::new( config.adsb.clone(), traffic_writer)?.spawn();
    info!("monitoring {} and {}", config.gps.address, config.adsb.url);

    loop {
        tokio::select! {
            res = ownship.changed() => res?,
            res = traffic.changed() => res?,
        }

        let own = ownship.consume();
        let snapshot = traffic.consume();

        match overlay.compute( own.as_deref(), snapshot.as_deref(), &measure) {
            Ok(frame) => {
                for w in &frame.warnings {
                    warn!("{}", w.message);
                }
                info!("{} targets ({} in view), {} warnings", frame.targets.len(), frame.labels.len(), frame.warnings.len());
            }
            Err(e) => warn!("no overlay: {}", e)
        }

        if gps_task.is_finished() || adsb_task.is_finished() {
            break
        }
    }

    Ok(())
}
