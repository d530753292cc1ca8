//! Device-to-native viewport mapping
//!
//! Physics runs in a fixed 1920x1080 native space centered on the origin (+y down).
//! The device viewport is fitted around it without ever upscaling past 1:1.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{NATIVE_HEIGHT, NATIVE_WIDTH};

/// Viewport parameters, replaced wholesale on every resize
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenParams {
    pub device_width: f32,
    pub device_height: f32,
    /// Top of the play-field in device-scaled units (negative; the floor sits at its negation)
    pub offset_to_native_top: f32,
    /// Left of the play-field in device-scaled units (negative)
    pub offset_to_native_left: f32,
    /// Native units to device pixels
    pub scale_fit_native: f32,
}

impl ScreenParams {
    /// Fit the native play-field into a device viewport
    pub fn fit(device_width: f32, device_height: f32) -> Self {
        let scale_fit_native = (device_width / NATIVE_WIDTH)
            .min(device_height / NATIVE_HEIGHT)
            .min(1.0);

        Self {
            device_width,
            device_height,
            offset_to_native_top: (-NATIVE_HEIGHT / 2.0) * scale_fit_native,
            offset_to_native_left: (-NATIVE_WIDTH / 2.0) * scale_fit_native,
            scale_fit_native,
        }
    }

    /// A zero or non-finite scale cannot map coordinates; treat it as not ready
    pub fn is_ready(&self) -> bool {
        self.scale_fit_native.is_finite()
            && self.scale_fit_native > 0.0
            && self.offset_to_native_top.is_finite()
            && self.offset_to_native_left.is_finite()
    }

    #[inline]
    pub fn native_to_device(&self, p: Vec2) -> Vec2 {
        p * self.scale_fit_native
    }

    #[inline]
    pub fn device_to_native(&self, p: Vec2) -> Vec2 {
        p / self.scale_fit_native
    }

    /// Bottom bound in native units
    pub fn floor_y(&self) -> f32 {
        -self.offset_to_native_top / self.scale_fit_native
    }

    /// Top bound in native units
    pub fn ceiling_y(&self) -> f32 {
        self.offset_to_native_top / self.scale_fit_native
    }

    /// Left bound in native units
    pub fn left_x(&self) -> f32 {
        self.offset_to_native_left / self.scale_fit_native
    }

    /// Right bound in native units
    pub fn right_x(&self) -> f32 {
        -self.offset_to_native_left / self.scale_fit_native
    }
}
