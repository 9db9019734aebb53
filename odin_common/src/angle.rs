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

//! normalized angle types
//!
//! Angles are stored in degrees and normalized on construction, i.e. a `Angle360` (which we use
//! for headings) can never hold a value outside of [0..360). The kind of an angle is encoded
//! as a zero-sized type parameter so that we can't accidentally add a latitude to a heading.

use std::{fmt, marker::PhantomData, ops};
use serde::{Serialize, Serializer, Deserialize, Deserializer, de};

#[inline]
pub fn normalize_90 (d: f64) -> f64 {
    let x = normalize_180(d);
    if x < -90.0 { -180.0 - x }
    else if x > 90.0 { 180.0 - x }
    else { x }
}

#[inline]
pub fn normalize_180 (d: f64) -> f64 {
    let x = d % 360.0;
    if x < -180.0 { x + 360.0 }
    else if x > 180.0 { x - 360.0 }
    else { x }
}

#[inline]
pub fn normalize_360 (d: f64) -> f64 {
    let x = d % 360.0;
    let x = if x < 0.0 { x + 360.0 } else { x };
    if x >= 360.0 { 0.0 } else { x } // tiny negative remainders round up to 360.0
}

#[inline] pub fn is_valid_latitude (d: f64)->bool { d.is_finite() && (-90.0..=90.0).contains(&d) }
#[inline] pub fn is_valid_longitude (d: f64)->bool { d.is_finite() && (-180.0..=180.0).contains(&d) }

pub trait AngleKind {
    const NAME: &'static str;
    fn normalize (deg: f64)->f64;

    /// is `deg` acceptable as input (before normalization)
    fn is_valid (deg: f64)->bool;
}

#[derive(Debug,Clone,Copy,PartialEq)]
pub struct LatitudeKind;
impl AngleKind for LatitudeKind {
    const NAME: &'static str = "Latitude";
    fn normalize (deg: f64)->f64 { normalize_90(deg) }
    fn is_valid (deg: f64)->bool { is_valid_latitude(deg) }
}

#[derive(Debug,Clone,Copy,PartialEq)]
pub struct LongitudeKind;
impl AngleKind for LongitudeKind {
    const NAME: &'static str = "Longitude";
    fn normalize (deg: f64)->f64 { normalize_180(deg) }
    fn is_valid (deg: f64)->bool { is_valid_longitude(deg) }
}

#[derive(Debug,Clone,Copy,PartialEq)]
pub struct FullCircleKind;
impl AngleKind for FullCircleKind {
    const NAME: &'static str = "Angle360";
    fn normalize (deg: f64)->f64 { normalize_360(deg) }
    fn is_valid (deg: f64)->bool { deg.is_finite() } // headings are taken modulo 360
}

#[derive(Clone,Copy)]
pub struct NormalizedAngle<K: AngleKind> {
    deg: f64,
    kind: PhantomData<K>,
}

impl<K: AngleKind> NormalizedAngle<K> {
    #[inline]
    pub fn from_degrees (deg: f64)->Self {
        NormalizedAngle { deg: K::normalize(deg), kind: PhantomData }
    }

    #[inline]
    pub fn from_radians (rad: f64)->Self {
        Self::from_degrees( rad.to_degrees())
    }

    #[inline] pub fn degrees (&self)->f64 { self.deg }
    #[inline] pub fn radians (&self)->f64 { self.deg.to_radians() }

    #[inline] pub fn sin (&self)->f64 { self.radians().sin() }
    #[inline] pub fn cos (&self)->f64 { self.radians().cos() }
}

pub type Latitude = NormalizedAngle<LatitudeKind>;
pub type Longitude = NormalizedAngle<LongitudeKind>;
pub type Angle360 = NormalizedAngle<FullCircleKind>;

impl<K: AngleKind> Default for NormalizedAngle<K> {
    fn default()->Self { Self::from_degrees(0.0) }
}

impl<K: AngleKind> PartialEq for NormalizedAngle<K> {
    fn eq (&self, other: &Self)->bool { self.deg == other.deg }
}

impl<K: AngleKind> PartialOrd for NormalizedAngle<K> {
    fn partial_cmp (&self, other: &Self)->Option<std::cmp::Ordering> { self.deg.partial_cmp( &other.deg) }
}

impl<K: AngleKind> fmt::Display for NormalizedAngle<K> {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result { write!(f, "{}°", self.deg) }
}

impl<K: AngleKind> fmt::Debug for NormalizedAngle<K> {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result { write!(f, "{}({})", K::NAME, self.deg) }
}

impl<K: AngleKind> From<NormalizedAngle<K>> for f64 {
    fn from (a: NormalizedAngle<K>)->f64 { a.deg }
}

// only same-kind angles can be added or subtracted, result is re-normalized
impl<K: AngleKind> ops::Add for NormalizedAngle<K> {
    type Output = Self;
    fn add (self, rhs: Self)->Self { Self::from_degrees( self.deg + rhs.deg) }
}

impl<K: AngleKind> ops::Sub for NormalizedAngle<K> {
    type Output = Self;
    fn sub (self, rhs: Self)->Self { Self::from_degrees( self.deg - rhs.deg) }
}

//--- serde support

impl<K: AngleKind> Serialize for NormalizedAngle<K> {
    fn serialize<S: Serializer> (&self, serializer: S)->Result<S::Ok,S::Error> {
        serializer.serialize_f64( self.deg)
    }
}

// latitudes and longitudes have to be in range, full circle angles (headings) are taken modulo 360
impl<'de, K: AngleKind> Deserialize<'de> for NormalizedAngle<K> {
    fn deserialize<D: Deserializer<'de>> (deserializer: D)->Result<Self,D::Error> {
        let deg = f64::deserialize( deserializer)?;
        if K::is_valid(deg) {
            Ok( Self::from_degrees(deg))
        } else {
            Err( de::Error::custom( format!("{} degrees out of range: {}", K::NAME, deg)))
        }
    }
}
