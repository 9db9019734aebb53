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

//! own-ship state and NMEA 0183 navigation input

use std::fmt;
use serde::{Serialize,Deserialize};
use tracing::debug;
use odin_common::angle::{Angle360, is_valid_latitude, is_valid_longitude};
use crate::errors::{OdinTrafficCamError, Result, parse_error};

/// what the navigation collaborator hands over
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct OwnshipUpdate {
    pub lat: f64,
    pub lon: f64,
    pub alt_m: f64,
    pub heading_deg: f64,
}

/// validated own-ship snapshot. Heading is normalized to [0..360), altitude is in meters
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct OwnshipState {
    pub lat: f64,
    pub lon: f64,
    pub alt_m: f64,
    pub heading: Angle360,
}

impl OwnshipState {
    pub fn new (lat: f64, lon: f64, alt_m: f64, heading_deg: f64)->Result<Self> {
        OwnshipState::try_from( OwnshipUpdate { lat, lon, alt_m, heading_deg })
    }
}

impl TryFrom<OwnshipUpdate> for OwnshipState {
    type Error = OdinTrafficCamError;

    fn try_from (u: OwnshipUpdate)->Result<Self> {
        if !is_valid_latitude(u.lat) || !is_valid_longitude(u.lon) {
            return Err( OdinTrafficCamError::InvalidOwnship( format!("position out of range: {},{}", u.lat, u.lon)))
        }
        if !u.alt_m.is_finite() || !u.heading_deg.is_finite() {
            return Err( OdinTrafficCamError::InvalidOwnship( format!("non-finite altitude or heading: {} {}", u.alt_m, u.heading_deg)))
        }
        Ok( OwnshipState { lat: u.lat, lon: u.lon, alt_m: u.alt_m, heading: Angle360::from_degrees( u.heading_deg) })
    }
}

impl fmt::Display for OwnshipState {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result {
        write!(f, "Ownship( {:.5},{:.5}, alt: {:.0}m, hdg: {:.0} )", self.lat, self.lon, self.alt_m, self.heading.degrees())
    }
}

/* #region NMEA ***************************************************************************************************/

/// the NMEA sentences we care about
#[derive(Debug,Clone,PartialEq)]
pub enum NmeaSentence {
    Gga { lat: f64, lon: f64, alt_m: Option<f64> },
    Hdt { heading_deg: f64 },
    NoFix,          // GGA/HDT without valid data
    Other(String),  // sentence type we don't process
}

/// parse a single NMEA 0183 sentence such as
/// ```text
///   $GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47
///   $HEHDT,274.07,T*19
/// ```
/// The checksum is optional but if present it has to match
pub fn parse_nmea (line: &str)->Result<NmeaSentence> {
    let line = line.trim();
    let body = line.strip_prefix('$').ok_or_else( || parse_error!("not a NMEA sentence: '{}'", line))?;

    let body = match body.split_once('*') {
        Some((body,cs)) => {
            let expected = u8::from_str_radix( cs.trim(), 16).map_err( |_| parse_error!("invalid checksum field in '{}'", line))?;
            let actual = body.bytes().fold( 0u8, |acc,b| acc ^ b);
            if actual != expected {
                return Err( parse_error!("checksum mismatch in '{}': {:02X}", line, actual))
            }
            body
        }
        None => body
    };

    let fields: Vec<&str> = body.split(',').collect();
    let addr = fields[0];
    let msg_type = if addr.len() >= 5 { addr.get( addr.len()-3..) } else { None };

    match msg_type {
        Some("GGA") => parse_gga( &fields),
        Some("HDT") => parse_hdt( &fields),
        Some(other) => Ok( NmeaSentence::Other( other.to_string())),
        None => Err( parse_error!("invalid address field in '{}'", line))
    }
}

//  0: $--GGA, 1: time, 2: lat ddmm.mmmm, 3: N|S, 4: lon dddmm.mmmm, 5: E|W, 6: fix quality,
//  7: satellites, 8: hdop, 9: altitude, 10: M, ...
fn parse_gga (fields: &[&str])->Result<NmeaSentence> {
    if fields.len() < 10 {
        return Err( parse_error!("incomplete GGA sentence ({} fields)", fields.len()))
    }

    if fields[6].is_empty() || fields[6] == "0" || fields[2].is_empty() || fields[4].is_empty() {
        return Ok( NmeaSentence::NoFix)
    }

    let lat = parse_nmea_angle( fields[2], fields[3], 'N', 'S')?;
    let lon = parse_nmea_angle( fields[4], fields[5], 'E', 'W')?;
    let alt_m = if fields[9].is_empty() {
        None
    } else {
        Some( fields[9].parse::<f64>().ok().filter( |a| a.is_finite()).ok_or_else( || parse_error!("invalid GGA altitude '{}'", fields[9]))?)
    };

    if !is_valid_latitude(lat) || !is_valid_longitude(lon) {
        return Err( parse_error!("GGA position out of range: {},{}", lat, lon))
    }

    Ok( NmeaSentence::Gga { lat, lon, alt_m })
}

//  0: $--HDT, 1: heading degrees, 2: T
fn parse_hdt (fields: &[&str])->Result<NmeaSentence> {
    match fields.get(1) {
        Some(s) if !s.is_empty() => {
            let heading_deg = s.parse::<f64>().ok().filter( |h| h.is_finite()).ok_or_else( || parse_error!("invalid HDT heading '{}'", s))?;
            Ok( NmeaSentence::Hdt { heading_deg })
        }
        _ => Ok( NmeaSentence::NoFix)
    }
}

/// (d)ddmm.mmmm plus hemisphere into signed decimal degrees
fn parse_nmea_angle (value: &str, hemisphere: &str, positive: char, negative: char)->Result<f64> {
    let v: f64 = value.parse().map_err( |_| parse_error!("invalid NMEA angle '{}'", value))?;
    let deg = (v / 100.0).trunc();
    let min = v - deg * 100.0;
    if !(0.0..60.0).contains(&min) {
        return Err( parse_error!("invalid NMEA minutes in '{}'", value))
    }
    let d = deg + min / 60.0;

    match hemisphere.chars().next() {
        Some(c) if c == positive => Ok(d),
        Some(c) if c == negative => Ok(-d),
        _ => Err( parse_error!("invalid hemisphere '{}'", hemisphere))
    }
}

/// accumulates NMEA sentences into an own-ship state. Every GGA assigns the position (and altitude if
/// reported), every HDT assigns the heading. Heading defaults to north until the first HDT
#[derive(Debug,Clone,Default)]
pub struct OwnshipTracker {
    position: Option<(f64,f64)>,
    alt_m: f64,
    heading: Angle360,
}

impl OwnshipTracker {
    pub fn new ()->Self { Self::default() }

    /// returns true if this sentence changed the state
    pub fn update (&mut self, sentence: &NmeaSentence)->bool {
        match sentence {
            NmeaSentence::Gga { lat, lon, alt_m } => {
                self.position = Some((*lat, *lon));
                if let Some(alt) = alt_m { self.alt_m = *alt }
                true
            }
            NmeaSentence::Hdt { heading_deg } => {
                self.heading = Angle360::from_degrees( *heading_deg);
                true
            }
            NmeaSentence::NoFix => { debug!("no NMEA fix"); false }
            NmeaSentence::Other(_) => false
        }
    }

    /// parse and apply a sentence line. Returns true if the state changed
    pub fn update_from_line (&mut self, line: &str)->Result<bool> {
        let sentence = parse_nmea( line)?;
        Ok( self.update( &sentence))
    }

    /// None until we have received a position
    pub fn state (&self)->Option<OwnshipState> {
        self.position.map( |(lat,lon)| OwnshipState { lat, lon, alt_m: self.alt_m, heading: self.heading })
    }
}

/* #endregion NMEA */
