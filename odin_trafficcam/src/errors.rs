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

use thiserror::Error;
use odin_common::utm::UtmZone;

pub type Result<T> = std::result::Result<T,OdinTrafficCamError>;

#[derive(Error,Debug)]
pub enum OdinTrafficCamError {

    #[error("position {lat},{lon} outside of projection zone {zone}")]
    OutOfZone { lat: f64, lon: f64, zone: UtmZone },

    #[error("invalid camera config {0}")]
    InvalidCamera(String),

    #[error("invalid own-ship state {0}")]
    InvalidOwnship(String),

    #[error("parse error {0}")]
    ParseError(String),

    #[error("JSON error {0}")]
    JsonError( #[from] serde_json::Error),

    #[error("IO error {0}")]
    IOError( #[from] std::io::Error),

    #[error("config error {0}")]
    ConfigError( #[from] odin_common::config::OdinConfigError),

    #[error("http error {0}")]
    HttpError( #[from] reqwest::Error),

    #[error("image error {0}")]
    ImageError( #[from] image::ImageError),

    #[error("invalid font {0}")]
    InvalidFont( #[from] ab_glyph::InvalidFont),

    #[error("operation failed {0}")]
    OpFailedError(String)
}

macro_rules! parse_error {
    ($fmt:literal $(, $arg:expr )* ) => {
        OdinTrafficCamError::ParseError( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use parse_error;
