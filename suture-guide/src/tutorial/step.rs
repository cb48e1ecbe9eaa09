use serde::{Deserialize, Serialize};

/// Ordered steps of the suturing tutorial.
///
/// Declaration order is sequence order, so `Ord` compares progress.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Step {
    #[default]
    #[serde(rename = "pick_needle")]
    PickNeedle,
    #[serde(rename = "pass_1_approach")]
    Pass1Approach,
    #[serde(rename = "pass_1_release")]
    Pass1Release,
    #[serde(rename = "pass_2_approach")]
    Pass2Approach,
    #[serde(rename = "pass_2_release")]
    Pass2Release,
    #[serde(rename = "pass_3_approach")]
    Pass3Approach,
    #[serde(rename = "pass_3_release")]
    Pass3Release,
    #[serde(rename = "complete")]
    Complete,
}

impl Step {
    #[cfg(test)]
    pub const ALL: [Step; 8] = [
        Step::PickNeedle,
        Step::Pass1Approach,
        Step::Pass1Release,
        Step::Pass2Approach,
        Step::Pass2Release,
        Step::Pass3Approach,
        Step::Pass3Release,
        Step::Complete,
    ];

    /// Prompt shown to the user while this step is current.
    pub fn label(self) -> &'static str {
        match self {
            Self::PickNeedle => "STEP 1: Pick up the needle. Point at it, click and HOLD.",
            Self::Pass1Approach => "STEP 2: Drag the needle to the GREEN CIRCLE marked 1.",
            Self::Pass1Release => "STEP 3: Put needle in the circle, then RELEASE the mouse.",
            Self::Pass2Approach => "STEP 4: Drag the needle to the GREEN CIRCLE marked 2.",
            Self::Pass2Release => "STEP 5: Put needle in the circle, then RELEASE the mouse.",
            Self::Pass3Approach => "STEP 6: Drag the needle to the GREEN CIRCLE marked 3.",
            Self::Pass3Release => "STEP 7: Put needle in the circle, then RELEASE to finish!",
            Self::Complete => "DONE! Suture complete.",
        }
    }

    /// Step counter text ("N of 7").
    pub fn ordinal(self) -> &'static str {
        match self {
            Self::PickNeedle => "1 of 7",
            Self::Pass1Approach => "2 of 7",
            Self::Pass1Release => "3 of 7",
            Self::Pass2Approach => "4 of 7",
            Self::Pass2Release => "5 of 7",
            Self::Pass3Approach => "6 of 7",
            Self::Pass3Release => "7 of 7",
            Self::Complete => "Done!",
        }
    }

    /// Identifier used on the wire and in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PickNeedle => "pick_needle",
            Self::Pass1Approach => "pass_1_approach",
            Self::Pass1Release => "pass_1_release",
            Self::Pass2Approach => "pass_2_approach",
            Self::Pass2Release => "pass_2_release",
            Self::Pass3Approach => "pass_3_approach",
            Self::Pass3Release => "pass_3_release",
            Self::Complete => "complete",
        }
    }

    pub fn is_approach(self) -> bool {
        matches!(
            self,
            Self::Pass1Approach | Self::Pass2Approach | Self::Pass3Approach
        )
    }

    pub fn is_release(self) -> bool {
        matches!(
            self,
            Self::Pass1Release | Self::Pass2Release | Self::Pass3Release
        )
    }

    /// Zero-based pass index this step belongs to, if it is an approach or release step.
    pub fn pass_index(self) -> Option<usize> {
        match self {
            Self::Pass1Approach | Self::Pass1Release => Some(0),
            Self::Pass2Approach | Self::Pass2Release => Some(1),
            Self::Pass3Approach | Self::Pass3Release => Some(2),
            Self::PickNeedle | Self::Complete => None,
        }
    }

    /// Approach step of the pass at `pass_index`.
    pub fn approach(pass_index: usize) -> Option<Self> {
        match pass_index {
            0 => Some(Self::Pass1Approach),
            1 => Some(Self::Pass2Approach),
            2 => Some(Self::Pass3Approach),
            _ => None,
        }
    }

    /// Release step of the pass at `pass_index`.
    pub fn release(pass_index: usize) -> Option<Self> {
        match pass_index {
            0 => Some(Self::Pass1Release),
            1 => Some(Self::Pass2Release),
            2 => Some(Self::Pass3Release),
            _ => None,
        }
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
