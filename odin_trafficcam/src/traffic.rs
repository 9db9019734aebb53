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

//! traffic records and snapshots as received from a dump1090 compatible surveillance feed

use std::collections::BTreeMap;
use chrono::{DateTime,Utc};
use serde::{Serialize,Deserialize};
use serde_json::Value;
use tracing::{debug,warn};
use odin_common::angle::{is_valid_latitude, is_valid_longitude};
use odin_common::uom::feet_to_meters;
use crate::errors::{OdinTrafficCamError, Result, parse_error};

/// a single observed aircraft. Note altitude is in feet, as reported by the feed
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct TrafficRecord {
    pub identifier: String, // ICAO24 hex code
    pub lat: f64,
    pub lon: f64,
    pub altitude_ft: f64,
    pub callsign: String,   // might be blank
    pub ground_speed_kn: f64,
}

impl TrafficRecord {
    pub fn altitude_m (&self)->f64 { feet_to_meters( self.altitude_ft) }

    /// the trimmed callsign, or the identifier if there is none
    pub fn display_name (&self)->&str {
        let cs = self.callsign.trim();
        if cs.is_empty() { self.identifier.as_str() } else { cs }
    }
}

/// the complete set of traffic we currently know about. Iteration order is sorted by identifier,
/// which makes all derived output orders reproducible
#[derive(Debug,Clone,PartialEq)]
pub struct TrafficSnapshot {
    pub received: DateTime<Utc>,
    records: BTreeMap<String,TrafficRecord>,
}

impl TrafficSnapshot {
    pub fn new (received: DateTime<Utc>)->Self {
        TrafficSnapshot { received, records: BTreeMap::new() }
    }

    pub fn from_records<I> (received: DateTime<Utc>, records: I)->Self where I: IntoIterator<Item=TrafficRecord> {
        let records = records.into_iter().map( |r| (r.identifier.clone(), r)).collect();
        TrafficSnapshot { received, records }
    }

    /// later records with the same identifier replace earlier ones
    pub fn insert (&mut self, rec: TrafficRecord)->Option<TrafficRecord> {
        self.records.insert( rec.identifier.clone(), rec)
    }

    pub fn get (&self, identifier: &str)->Option<&TrafficRecord> { self.records.get( identifier) }
    pub fn len (&self)->usize { self.records.len() }
    pub fn is_empty (&self)->bool { self.records.is_empty() }

    pub fn iter (&self)->impl Iterator<Item=&TrafficRecord> {
        self.records.values()
    }
}

/// what the surveillance collaborator hands over - always a full replacement
#[derive(Debug,Clone)]
pub struct TrafficUpdate {
    pub snapshot: TrafficSnapshot,
}

impl From<TrafficUpdate> for TrafficSnapshot {
    fn from (update: TrafficUpdate)->Self { update.snapshot }
}

//--- dump1090 JSON ingestion

// dump1090 'data.json' uses altitude/speed, readsb 'aircraft.json' uses alt_baro/gs
#[derive(Deserialize,Debug)]
struct RawAircraft {
    hex: String,
    flight: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
    #[serde(alias="alt_baro")]
    altitude: Option<f64>,
    #[serde(alias="gs")]
    speed: Option<f64>,
    validposition: Option<i64>,
}

/// parse a dump1090 'data.json' array (or an object with an 'aircraft' array). Records without
/// position are ignored, invalid records are logged and skipped. Only a document that is not
/// JSON or does not contain an aircraft list is an error
pub fn parse_traffic_json (received: DateTime<Utc>, input: &[u8])->Result<TrafficSnapshot> {
    let doc: Value = serde_json::from_slice( input)?;

    let items = match &doc {
        Value::Array(items) => items,
        Value::Object(o) => match o.get("aircraft") {
            Some(Value::Array(items)) => items,
            _ => return Err( parse_error!("no aircraft list in traffic document"))
        }
        _ => return Err( parse_error!("traffic document is neither array nor object"))
    };

    let mut snapshot = TrafficSnapshot::new( received);
    for item in items {
        match parse_record( item) {
            Ok(Some(rec)) => { snapshot.insert( rec); }
            Ok(None) => {}
            Err(e) => warn!("skipping traffic record: {e}")
        }
    }

    debug!("parsed {} of {} traffic records", snapshot.len(), items.len());
    Ok(snapshot)
}

/// Ok(None) means the record is valid but has no usable position yet
fn parse_record (item: &Value)->Result<Option<TrafficRecord>> {
    let raw = RawAircraft::deserialize( item)?;

    let identifier = raw.hex.trim().to_lowercase();
    if identifier.is_empty() {
        return Err( parse_error!("empty identifier"))
    }
    if raw.validposition == Some(0) {
        return Ok(None)
    }

    let (lat, lon, altitude_ft) = match (raw.lat, raw.lon, raw.altitude) {
        (Some(lat), Some(lon), Some(alt)) => (lat, lon, alt),
        _ => return Ok(None)
    };

    if !is_valid_latitude(lat) || !is_valid_longitude(lon) {
        return Err( parse_error!("invalid position for {}: {},{}", identifier, lat, lon))
    }
    if !altitude_ft.is_finite() {
        return Err( parse_error!("invalid altitude for {}", identifier))
    }

    let ground_speed_kn = raw.speed.filter( |s| s.is_finite()).unwrap_or(0.0);
    let callsign = raw.flight.map( |s| s.trim().to_string()).unwrap_or_default();

    Ok( Some( TrafficRecord { identifier, lat, lon, altitude_ft, callsign, ground_speed_kn }))
}
