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

//! acquisition tasks that feed the overlay: an NMEA stream for own-ship state and a polled
//! dump1090 JSON endpoint for traffic. Both publish into latest-value slots and never block
//! each other or the consumer

use std::time::Duration;
use serde::{Serialize,Deserialize};
use chrono::Utc;
use tokio::{net::TcpStream, io::{AsyncBufRead, AsyncBufReadExt, BufReader}, task::JoinHandle, time::{sleep, interval, MissedTickBehavior}};
use tracing::{debug,info,warn};
use odin_common::datetime::{ser_duration_as_fractional_secs, de_duration_from_fractional_secs};

use crate::errors::Result;
use crate::latest::SlotWriter;
use crate::ownship::{OwnshipState, OwnshipTracker};
use crate::traffic::{TrafficSnapshot, parse_traffic_json};

#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct GpsConfig {
    pub address: String, // host:port of the NMEA socket
    #[serde(serialize_with="ser_duration_as_fractional_secs", deserialize_with="de_duration_from_fractional_secs")]
    pub reconnect_delay: Duration,
}

impl Default for GpsConfig {
    fn default()->Self {
        GpsConfig { address: "127.0.0.1:10110".to_string(), reconnect_delay: Duration::from_secs(5) }
    }
}

#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct AdsbConfig {
    pub url: String, // of the dump1090 data.json
    #[serde(serialize_with="ser_duration_as_fractional_secs", deserialize_with="de_duration_from_fractional_secs")]
    pub poll_interval: Duration,
    #[serde(serialize_with="ser_duration_as_fractional_secs", deserialize_with="de_duration_from_fractional_secs")]
    pub request_timeout: Duration,
}

impl Default for AdsbConfig {
    fn default()->Self {
        AdsbConfig {
            url: "http://127.0.0.1:8080/data.json".to_string(),
            poll_interval: Duration::from_millis(500),
            request_timeout: Duration::from_secs(2)
        }
    }
}

/* #region GPS ****************************************************************************/

/// feed NMEA lines from `reader` into `tracker`, publishing the own-ship state after each change.
/// Unparseable lines (including lines that are not valid UTF-8) are logged and skipped.
/// Returns when the input is exhausted
pub async fn process_nmea_lines<R> (mut reader: R, tracker: &mut OwnshipTracker, writer: &SlotWriter<OwnshipState>)->Result<()>
    where R: AsyncBufRead + Unpin
{
    let mut buf: Vec<u8> = Vec::with_capacity( 128);

    loop {
        buf.clear();
        if reader.read_until( b'\n', &mut buf).await? == 0 { break }

        let line = match std::str::from_utf8( &buf) {
            Ok(line) => line.trim(),
            Err(e) => { debug!("ignoring non-UTF-8 NMEA line: {}", e); continue }
        };
        if line.is_empty() { continue }

        match tracker.update_from_line( line) {
            Ok(true) => {
                if let Some(state) = tracker.state() {
                    writer.publish( state);
                }
            }
            Ok(false) => {}
            Err(e) => debug!("ignoring NMEA line '{}': {}", line, e)
        }
    }
    Ok(())
}

pub struct GpsConnector {
    config: GpsConfig,
    writer: SlotWriter<OwnshipState>,
}

impl GpsConnector {
    pub fn new (config: GpsConfig, writer: SlotWriter<OwnshipState>)->Self {
        GpsConnector { config, writer }
    }

    /// read from the configured socket, reconnecting after `reconnect_delay` if it fails or closes.
    /// The tracker survives reconnects so that we keep the last known heading
    pub async fn run (self) {
        let mut tracker = OwnshipTracker::new();

        loop {
            match self.read_stream( &mut tracker).await {
                Ok(()) => warn!("NMEA stream {} closed", self.config.address),
                Err(e) => warn!("NMEA stream {} failed: {}", self.config.address, e)
            }
            sleep( self.config.reconnect_delay).await;
        }
    }

    async fn read_stream (&self, tracker: &mut OwnshipTracker)->Result<()> {
        let stream = TcpStream::connect( &self.config.address).await?;
        info!("connected to NMEA stream {}", self.config.address);
        let reader = BufReader::with_capacity( 4096, stream);
        process_nmea_lines( reader, tracker, &self.writer).await
    }

    pub fn spawn (self)->JoinHandle<()> {
        tokio::spawn( self.run())
    }
}

/* #endregion GPS */

/* #region ADS-B **************************************************************************/

pub struct AdsbPoller {
    config: AdsbConfig,
    client: reqwest::Client,
    writer: SlotWriter<TrafficSnapshot>,
}

impl AdsbPoller {
    pub fn new (config: AdsbConfig, writer: SlotWriter<TrafficSnapshot>)->Result<Self> {
        let client = reqwest::Client::builder().timeout( config.request_timeout).build()?;
        Ok( AdsbPoller { config, client, writer } )
    }

    /// fetch and parse one traffic document
    pub async fn poll_once (&self)->Result<TrafficSnapshot> {
        let response = self.client.get( &self.config.url).send().await?.error_for_status()?;
        let bytes = response.bytes().await?;
        parse_traffic_json( Utc::now(), &bytes)
    }

    /// poll at the configured interval. Failed polls are logged and do not replace the last snapshot
    pub async fn run (self) {
        let mut ticker = interval( self.config.poll_interval.max( Duration::from_millis(10)));
        ticker.set_missed_tick_behavior( MissedTickBehavior::Skip);

        loop {
            ticker.tick().await;
            match self.poll_once().await {
                Ok(snapshot) => {
                    debug!("received {} traffic records", snapshot.len());
                    self.writer.publish( snapshot)
                }
                Err(e) => warn!("traffic poll of {} failed: {}", self.config.url, e)
            }
        }
    }

    pub fn spawn (self)->JoinHandle<()> {
        tokio::spawn( self.run())
    }
}

/* #endregion ADS-B */
