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

//! loading of RON configuration files

use std::{fs, path::Path};
use serde::Deserialize;
use crate::define_error;

pub type Result<T> = std::result::Result<T,OdinConfigError>;

define_error!{ pub OdinConfigError =
    IOError( #[from] std::io::Error) : "IO error: {0}",
    RonError( #[from] ron::error::SpannedError) : "RON error: {0}"
}

/// read and deserialize a RON config file
pub fn load_config_path<C,P> (path: P)->Result<C> where C: for<'a> Deserialize<'a>, P: AsRef<Path> {
    let data = fs::read( path.as_ref())?;
    Ok( ron::de::from_bytes( data.as_slice())? )
}

/// deserialize a config from a RON string (mostly for tests and embedded defaults)
pub fn config_from_str<C> (s: &str)->Result<C> where C: for<'a> Deserialize<'a> {
    Ok( ron::from_str(s)? )
}
