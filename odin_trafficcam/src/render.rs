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

//! drawing of `OverlayFrame`s into RGB images

use std::{collections::HashMap, path::{Path,PathBuf}};
use serde::{Serialize,Deserialize};
use image::{Rgb, RgbImage};
use imageproc::{drawing::{draw_hollow_circle_mut, draw_hollow_rect_mut, draw_line_segment_mut, draw_text_mut, text_size}, rect::Rect};
use ab_glyph::{Font, FontVec, PxScale};
use tracing::debug;

use crate::errors::{OdinTrafficCamError, Result};
use crate::labels::{FixedCellMeasure, LabelBlock, TextMeasure};
use crate::overlay::OverlayFrame;
use crate::proximity::VerticalTier;

#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub font_path: Option<PathBuf>, // TTF/OTF file. Without it we only draw markers and boxes
    pub font_pt_size: f32,
    pub marker_radius: i32,
    pub marker_color: String, // hex RGB
    pub label_color: String,
    pub vfr_color: String,
    pub ifr_color: String,
}

impl Default for RenderConfig {
    fn default()->Self {
        RenderConfig {
            font_path: None,
            font_pt_size: 14.0,
            marker_radius: 8,
            marker_color: "00ff00".to_string(),
            label_color: "ffffff".to_string(),
            vfr_color: "ff0000".to_string(),
            ifr_color: "ffa500".to_string(),
        }
    }
}

/// parse a "rrggbb" color spec (with optional leading '#')
pub fn parse_hex_rgb (hex_color: &str)->Result<Rgb<u8>> {
    let s = hex_color.trim_start_matches('#');
    if s.len() != 6 {
        return Err( OdinTrafficCamError::OpFailedError( format!("invalid hex color '{hex_color}'")))
    }
    let v = u32::from_str_radix( s, 16).map_err( |_| OdinTrafficCamError::OpFailedError( format!("invalid hex color '{hex_color}'")))?;

    Ok( Rgb([ (v >> 16) as u8, (v >> 8 & 0xff) as u8, (v & 0xff) as u8 ]) )
}

pub fn load_font<P: AsRef<Path>> (path: P)->Result<FontVec> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err( OdinTrafficCamError::OpFailedError( format!("font not found: {}", path.display())))
    }
    let data = std::fs::read( path)?;
    Ok( FontVec::try_from_vec( data)? )
}

/// text metrics of a concrete font at a given point size
pub struct FontMeasure {
    font: FontVec,
    scale: PxScale,
}

impl FontMeasure {
    pub fn new (font: FontVec, pt_size: f32)->Result<Self> {
        let scale = font.pt_to_px_scale( pt_size).ok_or( OdinTrafficCamError::OpFailedError( format!("invalid font pt size {pt_size}")))?;
        Ok( FontMeasure { font, scale } )
    }

    pub fn font (&self)->&FontVec { &self.font }
    pub fn scale (&self)->PxScale { self.scale }
}

impl TextMeasure for FontMeasure {
    fn measure (&self, text: &str)->(u32,u32) {
        text_size( self.scale, &self.font, text)
    }
}

struct Palette {
    marker: Rgb<u8>,
    label: Rgb<u8>,
    vfr: Rgb<u8>,
    ifr: Rgb<u8>,
}

impl Palette {
    fn tier_color (&self, tier: VerticalTier)->Rgb<u8> {
        match tier {
            VerticalTier::VfrCritical => self.vfr,
            VerticalTier::IfrCritical => self.ifr,
        }
    }
}

pub struct OverlayRenderer {
    marker_radius: i32,
    palette: Palette,
    text: Option<FontMeasure>,
    fallback: FixedCellMeasure,
}

impl OverlayRenderer {
    pub fn new (config: &RenderConfig)->Result<Self> {
        let text = match &config.font_path {
            Some(path) => Some( FontMeasure::new( load_font( path)?, config.font_pt_size)?),
            None => None
        };
        let palette = Palette {
            marker: parse_hex_rgb( &config.marker_color)?,
            label: parse_hex_rgb( &config.label_color)?,
            vfr: parse_hex_rgb( &config.vfr_color)?,
            ifr: parse_hex_rgb( &config.ifr_color)?,
        };

        Ok( OverlayRenderer { marker_radius: config.marker_radius.max(1), palette, text, fallback: FixedCellMeasure::default() } )
    }

    /// the measure to use for label placement, which has to match what we draw
    pub fn measure (&self)->&dyn TextMeasure {
        match &self.text {
            Some(m) => m as &dyn TextMeasure,
            None => &self.fallback
        }
    }

    pub fn has_font (&self)->bool { self.text.is_some() }

    pub fn draw (&self, img: &mut RgbImage, frame: &OverlayFrame) {
        let tiers: HashMap<&str,VerticalTier> = frame.warnings.iter().map( |w| (w.identifier.as_str(), w.tier)).collect();

        for target in frame.targets.iter().filter( |t| t.on_canvas) {
            if let Some(p) = target.pixel {
                let color = tiers.get( target.identifier.as_str()).map( |t| self.palette.tier_color(*t)).unwrap_or( self.palette.marker);
                draw_hollow_circle_mut( img, (p.u, p.v), self.marker_radius, color);
            }
        }

        for label in &frame.labels {
            let (x, y) = leader_end( label);
            draw_line_segment_mut( img, (label.target.u as f32, label.target.v as f32), (x as f32, y as f32), self.palette.label);
            self.draw_block( img, label, self.palette.label, false);
        }

        for (banner, warning) in frame.banners.iter().zip( frame.warnings.iter()) {
            self.draw_block( img, banner, self.palette.tier_color( warning.tier), true);
        }

        debug!("rendered {} labels and {} banners", frame.labels.len(), frame.banners.len());
    }

    fn draw_block (&self, img: &mut RgbImage, block: &LabelBlock, color: Rgb<u8>, boxed: bool) {
        if let Some(fm) = &self.text {
            for line in &block.lines {
                draw_text_mut( img, color, line.origin.u, line.origin.v, fm.scale, &fm.font, &line.text);
            }
        }

        if (boxed || self.text.is_none()) && block.bbox.width > 0 && block.bbox.height > 0 {
            let rect = Rect::at( block.bbox.x - 2, block.bbox.y - 2).of_size( block.bbox.width + 4, block.bbox.height + 4);
            draw_hollow_rect_mut( img, rect, color);
        }
    }
}

/// the label bbox corner closest to its target
fn leader_end (label: &LabelBlock)->(i32,i32) {
    let b = &label.bbox;
    let x = if label.target.u <= b.x { b.x } else { b.right() };
    let y = if label.target.v <= b.y { b.y } else { b.bottom() };
    (x, y)
}
