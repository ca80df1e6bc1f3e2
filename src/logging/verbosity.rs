//! Reporting tiers for installer output.
use super::types::Log;

/// How much the installer reports about what it does.
///
/// Tiers are cumulative: each level reports everything the levels below it
/// do. The level is passed explicitly to every reporting call and never
/// changes what the installer does, only what it says.
///
/// # Examples
///
/// ```
/// use dotlinks_cli::logging::Verbosity;
///
/// assert_eq!(Verbosity::from_quiet(0), Verbosity::LinkOk);
/// assert_eq!(Verbosity::from_quiet(2), Verbosity::RenameFile);
/// assert!(Verbosity::CreateLink > Verbosity::RenameFile);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Verbosity {
    /// Report nothing.
    Nothing,
    /// Report entries renamed to a backup.
    RenameFile,
    /// Also report links being created.
    CreateLink,
    /// Also report links that are already correct.
    #[default]
    LinkOk,
}

impl Verbosity {
    /// The most talkative tier.
    pub const MAX: Self = Self::LinkOk;

    /// Map a `-q` repetition count to a tier, one tier quieter per step.
    ///
    /// Counts beyond the number of tiers saturate at [`Verbosity::Nothing`].
    #[must_use]
    pub const fn from_quiet(quiet: u8) -> Self {
        match quiet {
            0 => Self::LinkOk,
            1 => Self::CreateLink,
            2 => Self::RenameFile,
            _ => Self::Nothing,
        }
    }

    /// Return `true` if reports of `tier` are shown at this level.
    #[must_use]
    pub fn shows(self, tier: Self) -> bool {
        tier != Self::Nothing && self >= tier
    }

    /// Emit `msg` as an info line if `tier` is shown at this level.
    ///
    /// Suppressed reports are demoted to debug rather than dropped.
    pub fn report(self, log: &dyn Log, tier: Self, msg: &str) {
        if self.shows(tier) {
            log.info(msg);
        } else {
            log.debug(msg);
        }
    }
}
