//! Resolution encoding: `W x H @ RHz`
//!
//! Decoding tolerates a missing space around `x` and `@`, and a missing or
//! differently-cased `Hz` suffix: `1920x1080@60Hz`, `1920 x 1080 @ 60hz` and
//! `1920 x 1080 @ 60` all decode to the same value.

use once_cell::sync::Lazy;
use prefs_core::Resolution;
use regex::Regex;

use crate::error::CodecError;
use crate::tuple::{fields, parse_int};
use crate::StringCodec;

static RESOLUTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]+)\s?x\s?([0-9]+)\s?@\s?([0-9]+)(?:[Hh][Zz])?$")
        .expect("resolution pattern is valid")
});

impl StringCodec for Resolution {
    const NAME: &'static str = "Resolution";

    fn encode(&self) -> String {
        format!("{} x {} @ {}Hz", self.width, self.height, self.refresh_rate)
    }

    fn decode(input: &str) -> Result<Self, CodecError> {
        let [width, height, rate] = fields::<3>(&RESOLUTION, input, Self::NAME)?;
        Ok(Resolution {
            width: parse_int(width)?,
            height: parse_int(height)?,
            refresh_rate: parse_int(rate)?,
        })
    }
}
