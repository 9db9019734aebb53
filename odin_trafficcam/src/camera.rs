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

//! pinhole camera model with fixed intrinsics

use std::fmt;
use serde::{Serialize,Deserialize};
use crate::attitude::CameraFrameVector;
use crate::errors::{OdinTrafficCamError, Result};

/// the physical camera parameters, supplied once at construction
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct CameraConfig {
    pub focal_length_mm: f64,
    pub sensor_width_mm: f64,
    pub sensor_height_mm: f64,
    pub image_width_px: u32,
    pub image_height_px: u32,
}

impl Default for CameraConfig {
    fn default()->Self {
        // 3.45µm pixel sensor with 8mm lens
        CameraConfig {
            focal_length_mm: 8.0,
            sensor_width_mm: 7.1208,
            sensor_height_mm: 5.1888,
            image_width_px: 2064,
            image_height_px: 1504,
        }
    }
}

/// intrinsics derived from a `CameraConfig`. Immutable after construction
#[derive(Debug,Clone,PartialEq)]
pub struct CameraIntrinsics {
    pub focal_length_mm: f64,
    pub sensor_width_mm: f64,
    pub sensor_height_mm: f64,
    pub pixel_pitch_x_mm: f64,
    pub pixel_pitch_y_mm: f64,
    pub fx: f64, // focal length in pixels
    pub fy: f64,
    pub cx: f64, // principal point
    pub cy: f64,
    pub width: u32,
    pub height: u32,
}

impl CameraIntrinsics {
    pub fn new (config: &CameraConfig)->Result<Self> {
        let CameraConfig { focal_length_mm, sensor_width_mm, sensor_height_mm, image_width_px, image_height_px } = *config;

        for (name, v) in [("focal_length_mm", focal_length_mm), ("sensor_width_mm", sensor_width_mm), ("sensor_height_mm", sensor_height_mm)] {
            if !(v.is_finite() && v > 0.0) {
                return Err( OdinTrafficCamError::InvalidCamera( format!("{name} has to be positive: {v}")))
            }
        }
        if image_width_px == 0 || image_height_px == 0 {
            return Err( OdinTrafficCamError::InvalidCamera( format!("empty image size {image_width_px}x{image_height_px}")))
        }

        let pixel_pitch_x_mm = sensor_width_mm / image_width_px as f64;
        let pixel_pitch_y_mm = sensor_height_mm / image_height_px as f64;

        Ok( CameraIntrinsics {
            focal_length_mm, sensor_width_mm, sensor_height_mm,
            pixel_pitch_x_mm, pixel_pitch_y_mm,
            fx: focal_length_mm / pixel_pitch_x_mm,
            fy: focal_length_mm / pixel_pitch_y_mm,
            cx: image_width_px as f64 / 2.0,
            cy: image_height_px as f64 / 2.0,
            width: image_width_px,
            height: image_height_px,
        })
    }
}

#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash,Serialize,Deserialize)]
pub struct PixelPoint {
    pub u: i32,
    pub v: i32,
}

impl PixelPoint {
    pub fn new (u: i32, v: i32)->Self { PixelPoint{u,v} }
}

impl fmt::Display for PixelPoint {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result { write!(f, "({},{})", self.u, self.v) }
}

#[derive(Debug,Clone)]
pub struct PinholeProjector {
    intrinsics: CameraIntrinsics,
}

impl PinholeProjector {
    pub fn new (config: &CameraConfig)->Result<Self> {
        Ok( PinholeProjector { intrinsics: CameraIntrinsics::new( config)? })
    }

    pub fn intrinsics (&self)->&CameraIntrinsics { &self.intrinsics }
    pub fn width (&self)->u32 { self.intrinsics.width }
    pub fn height (&self)->u32 { self.intrinsics.height }

    /// map a camera frame vector to a pixel. Returns `None` for points that are not projectable,
    /// which are vectors with zero depth or non-finite components
    pub fn project (&self, p: &CameraFrameVector)->Option<PixelPoint> {
        let CameraFrameVector { lateral, depth, vertical } = *p;
        if depth == 0.0 || !depth.is_finite() || !lateral.is_finite() || !vertical.is_finite() {
            return None
        }

        let ci = &self.intrinsics;
        let u = (lateral * ci.fx / depth) + ci.cx;
        let v = (vertical * ci.fy / depth) + ci.cy;

        // 'as' saturates for huge values, which keeps them off-canvas
        Some( PixelPoint { u: u.round() as i32, v: v.round() as i32 })
    }

    pub fn is_on_canvas (&self, p: &PixelPoint)->bool {
        p.u >= 0 && p.v >= 0 && (p.u as u32) < self.intrinsics.width && (p.v as u32) < self.intrinsics.height
    }
}
