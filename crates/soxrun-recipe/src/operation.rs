//! The closed set of sox operations and their static recipes.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::{RecipeError, RecipeResult};

/// An audio operation that can be applied to a selected file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Operation {
    /// Normalize to -0.1 dB.
    Normalize,
    /// Trim silence from the beginning and end.
    Trim,
    /// Split into several files at silences.
    SplitBySilence,
    /// Downmix stereo to mono.
    StereoToMono,
    /// Short fade in/out to remove clicks.
    Fade,
    /// Reverse the audio.
    Reverse,
    /// Convert to 1 channel.
    #[serde(rename = "to-1-channel")]
    To1Channel,
    /// Convert to 4 channels.
    #[serde(rename = "to-4-channel")]
    To4Channel,
    /// Resample to 48 kHz.
    #[serde(rename = "resample-48k")]
    Resample48k,
    /// Convert to 16 bit depth.
    #[serde(rename = "to-16-bit")]
    To16Bit,
    /// Convert to 24 bit depth.
    #[serde(rename = "to-24-bit")]
    To24Bit,
}

impl Operation {
    /// Every operation, in registry order.
    pub const ALL: [Operation; 11] = [
        Operation::Normalize,
        Operation::Trim,
        Operation::SplitBySilence,
        Operation::StereoToMono,
        Operation::Fade,
        Operation::Reverse,
        Operation::To1Channel,
        Operation::To4Channel,
        Operation::Resample48k,
        Operation::To16Bit,
        Operation::To24Bit,
    ];

    /// Returns the canonical name for this operation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Normalize => "normalize",
            Operation::Trim => "trim",
            Operation::SplitBySilence => "split-by-silence",
            Operation::StereoToMono => "stereo-to-mono",
            Operation::Fade => "fade",
            Operation::Reverse => "reverse",
            Operation::To1Channel => "to-1-channel",
            Operation::To4Channel => "to-4-channel",
            Operation::Resample48k => "resample-48k",
            Operation::To16Bit => "to-16-bit",
            Operation::To24Bit => "to-24-bit",
        }
    }

    /// Returns the short command alias file-manager users know this operation by.
    pub fn alias(&self) -> &'static str {
        match self {
            Operation::Normalize => "norm",
            Operation::Trim => "trim",
            Operation::SplitBySilence => "splitbysilence",
            Operation::StereoToMono => "stereo2mono",
            Operation::Fade => "fade",
            Operation::Reverse => "reverse",
            Operation::To1Channel => "channels1",
            Operation::To4Channel => "channels4",
            Operation::Resample48k => "samplerate48k",
            Operation::To16Bit => "bitrate16",
            Operation::To24Bit => "bitrate24",
        }
    }

    /// Looks up an operation by canonical name or alias.
    pub fn from_name(name: &str) -> RecipeResult<Self> {
        Self::ALL
            .into_iter()
            .find(|op| op.as_str() == name || op.alias() == name)
            .ok_or_else(|| RecipeError::unknown_operation(name))
    }

    /// Returns the static recipe for this operation.
    pub fn recipe(&self) -> &'static Recipe {
        // RECIPES is laid out in `ALL` order.
        &RECIPES[*self as usize]
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = RecipeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

/// Where the parameter clause sits in the sox command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamPlacement {
    /// `sox 'in' 'out' <params>`; effects follow the output file.
    AfterOutput,
    /// `sox 'in' <params> 'out'`; the clause lands between the two paths.
    ///
    /// Only the bit-depth recipes use this. sox reads `-b` there as an
    /// output format option, which differs from how every other recipe is
    /// laid out; it is kept as-is so invocations stay byte-for-byte stable.
    BetweenPaths,
}

/// Static description of one audio operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recipe {
    /// The operation this recipe implements.
    pub operation: Operation,
    /// Suffix inserted between the file stem and its extension.
    pub tag: &'static str,
    /// The sox parameter clause.
    pub params: &'static str,
    /// Placement of `params` relative to the paths.
    pub placement: ParamPlacement,
    /// One-line human description.
    pub description: &'static str,
}

const fn recipe(
    operation: Operation,
    tag: &'static str,
    params: &'static str,
    placement: ParamPlacement,
    description: &'static str,
) -> Recipe {
    Recipe {
        operation,
        tag,
        params,
        placement,
        description,
    }
}

/// The recipe table, indexed by `Operation as usize`.
pub static RECIPES: [Recipe; 11] = [
    recipe(
        Operation::Normalize,
        "_n",
        "--norm=-0.1",
        ParamPlacement::AfterOutput,
        "Normalize file to -0.1 dB",
    ),
    recipe(
        Operation::Trim,
        "_t",
        "silence -l 1 0.125 1% -1 2.0 1%",
        ParamPlacement::AfterOutput,
        "Trim silence from beginning and end of file",
    ),
    recipe(
        Operation::SplitBySilence,
        "_split",
        "silence 1 0.1 1% 1 0.1 1% : newfile : restart",
        ParamPlacement::AfterOutput,
        "Split file into several files by detecting silence",
    ),
    recipe(
        Operation::StereoToMono,
        "_mono",
        "remix 1,2",
        ParamPlacement::AfterOutput,
        "Downmix to mono from stereo",
    ),
    recipe(
        Operation::Fade,
        "_faded",
        "fade t 0.01 0 0.01",
        ParamPlacement::AfterOutput,
        "Add small fade in/out to file to remove clicks",
    ),
    recipe(
        Operation::Reverse,
        "_rev",
        "reverse",
        ParamPlacement::AfterOutput,
        "Reverse audio file",
    ),
    recipe(
        Operation::To1Channel,
        "_1chan",
        "channels 1",
        ParamPlacement::AfterOutput,
        "Convert to 1 channel",
    ),
    recipe(
        Operation::To4Channel,
        "_4chan",
        "channels 4",
        ParamPlacement::AfterOutput,
        "Convert to 4 channels",
    ),
    recipe(
        Operation::Resample48k,
        "_48khz",
        "rate 48k",
        ParamPlacement::AfterOutput,
        "Convert to 48 kHz",
    ),
    recipe(
        Operation::To16Bit,
        "_16bit",
        "-b 16",
        ParamPlacement::BetweenPaths,
        "Convert to 16 bit depth",
    ),
    recipe(
        Operation::To24Bit,
        "_24bit",
        "-b 24",
        ParamPlacement::BetweenPaths,
        "Convert to 24 bit depth",
    ),
];
