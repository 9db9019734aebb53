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
#![allow(uncommon_codepoints)]

//! geodetic, angle and unit helpers shared by ODIN traffic applications

pub mod macros;
pub mod angle;
pub mod geo_constants;
pub mod utm;
pub mod uom;
pub mod config;
pub mod datetime;

// syntactic sugar - this is just more readable in formula-heavy code
#[inline(always)] pub fn sin(x:f64) -> f64 { x.sin() }
#[inline(always)] pub fn cos(x:f64) -> f64 { x.cos() }
#[inline(always)] pub fn sinh(x:f64) -> f64 { x.sinh() }
#[inline(always)] pub fn cosh(x:f64) -> f64 { x.cosh() }
#[inline(always)] pub fn atan(x:f64) -> f64 { x.atan() }
#[inline(always)] pub fn atanh(x:f64) -> f64 { x.atanh() }
#[inline(always)] pub fn sqrt(x:f64) -> f64 { x.sqrt() }
#[inline(always)] pub fn pow2(x:f64) -> f64 { x*x }

/// euclidean length of a 2D vector
#[inline] pub fn hypot2 (x: f64, y: f64)->f64 { sqrt( pow2(x) + pow2(y)) }

/// euclidean length of a 3D vector
#[inline] pub fn hypot3 (x: f64, y: f64, z: f64)->f64 { sqrt( pow2(x) + pow2(y) + pow2(z)) }
