//! The fixed vocabulary of compose subcommands dockhand drives.

/// One compose invocation, mapped to argv by [`ComposeAction::args`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposeAction {
    /// Bring the stack up detached, optionally rebuilding images first.
    Up { rebuild: bool },
    /// Rebuild the stack's images without starting anything.
    Build,
    /// Query running-service status.
    Ps,
    /// Tear the stack down.
    Down,
}

impl ComposeAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Up { .. } => "up",
            Self::Build => "build",
            Self::Ps => "ps",
            Self::Down => "down",
        }
    }

    /// Arguments passed to the compose binary for this action.
    pub fn args(self) -> Vec<String> {
        match self {
            Self::Up { rebuild: false } => argv(&["up", "-d"]),
            Self::Up { rebuild: true } => argv(&["up", "-d", "--build"]),
            Self::Build => argv(&["build"]),
            Self::Ps => argv(&["ps"]),
            Self::Down => argv(&["down"]),
        }
    }
}

/// Whether a `ps` output reports running services.
///
/// compose prints a two-line header before any service rows, so
/// anything left after trimming and dropping those two lines is a
/// service. The offset is tied to that header format and nothing else.
pub fn has_running_services(ps_output: &str) -> bool {
    ps_output.trim().lines().nth(2).is_some()
}

fn argv(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| (*s).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn up_includes_rebuild_flag_only_when_requested() {
        assert_eq!(ComposeAction::Up { rebuild: false }.args(), ["up", "-d"]);
        assert_eq!(
            ComposeAction::Up { rebuild: true }.args(),
            ["up", "-d", "--build"]
        );
    }

    #[test]
    fn lifecycle_actions_map_to_single_subcommands() {
        assert_eq!(ComposeAction::Build.args(), ["build"]);
        assert_eq!(ComposeAction::Ps.args(), ["ps"]);
        assert_eq!(ComposeAction::Down.args(), ["down"]);
    }

    #[test]
    fn header_only_ps_output_reports_nothing_running() {
        assert!(!has_running_services(""));
        assert!(!has_running_services("\n\n"));
        assert!(!has_running_services("NAME   STATE\n"));
        assert!(!has_running_services("NAME   STATE\n------------\n"));
    }

    #[test]
    fn service_rows_after_the_header_report_running() {
        let out = "NAME   STATE\n------------\napi_db_1   Up\n";
        assert!(has_running_services(out));

        let many = "NAME   STATE\n------------\napi_db_1   Up\napi_web_1  Up\n";
        assert!(has_running_services(many));
    }

    #[test]
    fn interior_blank_lines_count_as_rows() {
        // Matches the plain line-offset rule: only the first two lines
        // are header, whatever follows is treated as services.
        assert!(has_running_services("NAME   STATE\n------------\n\nx"));
    }
}
