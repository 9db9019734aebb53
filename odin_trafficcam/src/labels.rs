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

//! placement of multi-line target labels and warning banners within the image viewport
//!
//! Placement is a single deterministic choice per label (left or right of the target, above or
//! below it) followed by clamping into the viewport. There is no collision avoidance between the
//! labels of different targets, i.e. labels of close targets can overlap.

use serde::{Serialize,Deserialize};
use crate::camera::PixelPoint;
use crate::proximity::Warning;

/// the text metrics we need for placement. Implemented by font based renderers, closures and
/// the `FixedCellMeasure` approximation
pub trait TextMeasure {
    /// (width,height) in pixels of a single line of text
    fn measure (&self, text: &str)->(u32,u32);
}

impl<F> TextMeasure for F where F: Fn(&str)->(u32,u32) {
    fn measure (&self, text: &str)->(u32,u32) { self(text) }
}

/// monospace approximation that does not need a font
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct FixedCellMeasure {
    pub cell_width: u32,
    pub line_height: u32,
}

impl Default for FixedCellMeasure {
    fn default()->Self { FixedCellMeasure { cell_width: 11, line_height: 20 } }
}

impl TextMeasure for FixedCellMeasure {
    fn measure (&self, text: &str)->(u32,u32) {
        (text.chars().count() as u32 * self.cell_width, self.line_height)
    }
}

#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    pub margin_px: u32,         // horizontal gap between target marker and label
    pub line_spacing_px: u32,   // vertical gap between label lines
    pub banner_x: i32,          // top left of the warning banner column
    pub banner_y: i32,
    pub banner_spacing_px: u32, // vertical gap between banners
}

impl Default for LabelConfig {
    fn default()->Self {
        LabelConfig { margin_px: 10, line_spacing_px: 4, banner_x: 10, banner_y: 10, banner_spacing_px: 6 }
    }
}

#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize,Deserialize)]
pub enum AnchorSide { Left, Right }

#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize,Deserialize)]
pub enum Stacking { Upward, Downward }

#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize,Deserialize)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    pub fn right (&self)->i32 { self.x.saturating_add( self.width as i32) }
    pub fn bottom (&self)->i32 { self.y.saturating_add( self.height as i32) }

    pub fn is_inside (&self, viewport: &Viewport)->bool {
        self.x >= 0 && self.y >= 0 && self.right() <= viewport.width as i32 && self.bottom() <= viewport.height as i32
    }
}

#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct LabelLine {
    pub text: String,
    pub origin: PixelPoint, // top left
    pub width: u32,
    pub height: u32,
}

#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct LabelBlock {
    pub identifier: String,
    pub target: PixelPoint,  // what the label refers to
    pub anchor: PixelPoint,  // top left of the first line
    pub lines: Vec<LabelLine>,
    pub bbox: PixelRect,
    pub side: AnchorSide,
    pub stacking: Stacking,
}

#[derive(Debug,Clone)]
pub struct LabelPlacementEngine {
    config: LabelConfig,
}

impl LabelPlacementEngine {
    pub fn new (config: LabelConfig)->Self {
        LabelPlacementEngine { config }
    }

    pub fn config (&self)->&LabelConfig { &self.config }

    /// place label lines next to `target`. Labels go to the right of the target unless they would
    /// exceed the viewport width, and above the target unless they would exceed the top edge
    pub fn place_label (&self, identifier: &str, target: PixelPoint, lines: Vec<String>, measure: &dyn TextMeasure, viewport: Viewport)->LabelBlock {
        let sizes: Vec<(u32,u32)> = lines.iter().map( |l| measure.measure(l)).collect();
        let (max_width, total_height) = self.block_size( &sizes);
        let margin = self.config.margin_px as i32;

        let side = if target.u.saturating_add( max_width as i32).saturating_add( margin) > viewport.width as i32 {
            AnchorSide::Left
        } else {
            AnchorSide::Right
        };
        let stacking = if target.v.saturating_sub( total_height as i32) < 0 { Stacking::Downward } else { Stacking::Upward };

        let x = match side {
            AnchorSide::Left => target.u.saturating_sub( margin).saturating_sub( max_width as i32),
            AnchorSide::Right => target.u.saturating_add( margin),
        };
        let y = match stacking {
            Stacking::Upward => target.v.saturating_sub( total_height as i32),
            Stacking::Downward => target.v,
        };

        let x = clamp_into( x, max_width, viewport.width);
        let y = clamp_into( y, total_height, viewport.height);

        let lines = self.stack_lines( lines, &sizes, x, y);
        LabelBlock {
            identifier: identifier.to_string(),
            target,
            anchor: PixelPoint::new(x,y),
            lines,
            bbox: PixelRect { x, y, width: max_width, height: total_height },
            side,
            stacking
        }
    }

    /// single line banners in a fixed column, in order of the warnings
    pub fn place_banners (&self, warnings: &[Warning], measure: &dyn TextMeasure, viewport: Viewport)->Vec<LabelBlock> {
        let mut banners = Vec::with_capacity( warnings.len());
        let mut y = self.config.banner_y;

        for w in warnings {
            let (width, height) = measure.measure( &w.message);
            let x = clamp_into( self.config.banner_x, width, viewport.width);
            let origin = PixelPoint::new( x, y);

            banners.push( LabelBlock {
                identifier: w.identifier.clone(),
                target: origin,
                anchor: origin,
                lines: vec![ LabelLine { text: w.message.clone(), origin, width, height } ],
                bbox: PixelRect { x, y, width, height },
                side: AnchorSide::Right,
                stacking: Stacking::Downward,
            });

            y = y.saturating_add( (height + self.config.banner_spacing_px) as i32);
        }

        banners
    }

    fn block_size (&self, sizes: &[(u32,u32)])->(u32,u32) {
        let max_width = sizes.iter().map( |s| s.0).max().unwrap_or(0);
        let gaps = sizes.len().saturating_sub(1) as u32 * self.config.line_spacing_px;
        let total_height = sizes.iter().map( |s| s.1).sum::<u32>() + gaps;
        (max_width, total_height)
    }

    fn stack_lines (&self, lines: Vec<String>, sizes: &[(u32,u32)], x: i32, y: i32)->Vec<LabelLine> {
        let mut y = y;
        lines.into_iter().zip( sizes.iter()).map( |(text, &(width,height))| {
            let line = LabelLine { text, origin: PixelPoint::new(x,y), width, height };
            y = y.saturating_add( (height + self.config.line_spacing_px) as i32);
            line
        }).collect()
    }
}

/// clamp a start coordinate so that [pos..pos+extent] stays within [0..limit] if possible.
/// Blocks that are larger than the viewport start at 0
fn clamp_into (pos: i32, extent: u32, limit: u32)->i32 {
    let max_pos = (limit as i64 - extent as i64).max(0) as i32;
    pos.clamp( 0, max_pos)
}
