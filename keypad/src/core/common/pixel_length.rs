// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Display, Formatter},
          str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Suffix used by the persisted `"<number>px"` form.
pub const PIXEL_SUFFIX: &str = "px";

/// A length in pixels. It can be negative or fractional, since a dragged overlay can be
/// partially off screen and drag math halves the overlay's size.
///
/// It (de)serializes as a string like `"14px"` or `"-12.5px"`, which is the shape of the
/// persisted overlay anchor.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
pub struct Px(pub f64);

#[must_use]
pub fn px(value: f64) -> Px { Px(value) }

impl Px {
    #[must_use]
    pub const fn as_f64(self) -> f64 { self.0 }
}

impl Display for Px {
    /// Whole numbers print without a fractional part: `14px`, not `14.0px`.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{PIXEL_SUFFIX}", self.0)
    }
}

pub mod pixel_length_error {
    #[derive(thiserror::Error, Debug, miette::Diagnostic, PartialEq, Eq)]
    pub enum PixelLengthErrorCouldNot {
        #[error("📏 Could not find the `px` suffix in '{input}'")]
        FindPxSuffix { input: String },

        #[error("📏 Could not parse a finite number from '{input}'")]
        ParseFiniteNumber { input: String },
    }
}
use pixel_length_error::PixelLengthErrorCouldNot;

impl FromStr for Px {
    type Err = PixelLengthErrorCouldNot;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let Some(number_str) = input.trim().strip_suffix(PIXEL_SUFFIX) else {
            return Err(PixelLengthErrorCouldNot::FindPxSuffix {
                input: input.to_string(),
            });
        };

        match number_str.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Px(value)),
            _ => Err(PixelLengthErrorCouldNot::ParseFiniteNumber {
                input: input.to_string(),
            }),
        }
    }
}

impl Serialize for Px {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Px {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let it = String::deserialize(deserializer)?;
        it.parse::<Px>().map_err(serde::de::Error::custom)
    }
}
