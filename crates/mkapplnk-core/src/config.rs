//! Centralized configuration for mkapplnk.
//!
//! Console text, exit statuses and the runtime choices an operator can make.

/// Application-level configuration.
pub struct AppConfig;

impl AppConfig {
    pub const APP_NAME: &'static str = "mkapplnk";
    /// Positional arguments shown after the program name in the usage line.
    pub const USAGE_ARGS: &'static str = "[appname-substring [output-file] ]";
    pub const ABOUT: &'static str =
        "Creates shortcuts to any app in the apps folder, including UWP / MSIX apps.";
    /// Extension of shell link files.
    pub const LINK_EXTENSION: &'static str = "lnk";
    /// Leading characters that mark a command-line flag.
    pub const FLAG_MARKERS: [char; 2] = ['-', '/'];
}

/// Process exit statuses.
pub struct ExitStatus;

impl ExitStatus {
    pub const SUCCESS: i32 = 0;
    pub const USAGE: i32 = 1;
    pub const USER_ABORT: i32 = 2;
    pub const NO_APP: i32 = 3;
    pub const RUNTIME_ERROR: i32 = 4;
}

/// Interactive prompts and console messages.
pub struct PromptText;

impl PromptText {
    pub const SEARCH_TERM: &'static str = "App name to search for: ";
    pub const CONFIRM: &'static str = "Use this app? [Y/N; blank for Y] ";
    pub const OUTPUT_SKIP: &'static str = "Filename to save as (<enter> to skip): ";
    pub const NOT_FOUND: &'static str = "Did not find an app with that name.";
    /// Answer that rejects a candidate; compared case-insensitively.
    pub const REJECT: char = 'N';
}

/// What to do when the output path is left empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmptyOutputPolicy {
    /// End the run as aborted by the operator.
    Abort,
    /// Save as `<display name>.lnk` in the working directory.
    DeriveFromName,
}

impl EmptyOutputPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmptyOutputPolicy::Abort => "abort",
            EmptyOutputPolicy::DeriveFromName => "derive",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "abort" => Some(EmptyOutputPolicy::Abort),
            "derive" => Some(EmptyOutputPolicy::DeriveFromName),
            _ => None,
        }
    }
}

impl Default for EmptyOutputPolicy {
    fn default() -> Self {
        EmptyOutputPolicy::Abort
    }
}

impl std::fmt::Display for EmptyOutputPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Runtime options for one shortcut run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunConfig {
    pub empty_output: EmptyOutputPolicy,
}

impl RunConfig {
    pub fn new(empty_output: EmptyOutputPolicy) -> Self {
        Self { empty_output }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_roundtrip() {
        for policy in [EmptyOutputPolicy::Abort, EmptyOutputPolicy::DeriveFromName] {
            let parsed = EmptyOutputPolicy::from_str(policy.as_str()).expect("Should parse");
            assert_eq!(policy, parsed);
        }
        assert_eq!(
            EmptyOutputPolicy::from_str(" DERIVE "),
            Some(EmptyOutputPolicy::DeriveFromName)
        );
        assert_eq!(EmptyOutputPolicy::from_str("prompt"), None);
    }

    #[test]
    fn test_default_policy_is_strict() {
        assert_eq!(RunConfig::default().empty_output, EmptyOutputPolicy::Abort);
    }

    #[test]
    fn test_exit_statuses_are_distinct() {
        let codes = [
            ExitStatus::SUCCESS,
            ExitStatus::USAGE,
            ExitStatus::USER_ABORT,
            ExitStatus::NO_APP,
            ExitStatus::RUNTIME_ERROR,
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
