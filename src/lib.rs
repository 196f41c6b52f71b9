//! Library crate root re-exporting launcher, configuration, and CLI modules.

#[path = "lib/mod.rs"]
pub mod lib_mod;
pub use lib_mod as lib;
pub mod cli;
pub mod config;
pub mod launcher;
pub mod runtime;

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    #[test]
    fn launcher_layout_requires_split_modules() {
        let expected_files = [
            "src/launcher/mod.rs",
            "src/launcher/mode.rs",
            "src/launcher/params.rs",
            "src/launcher/command.rs",
            "src/launcher/process.rs",
            "src/launcher/controller.rs",
        ];

        for path in expected_files {
            assert!(
                Path::new(path).exists(),
                "launcher layout: {} must exist",
                path
            );
        }

        let mod_path = Path::new("src/launcher/mod.rs");
        let content = fs::read_to_string(mod_path)
            .unwrap_or_else(|_| panic!("launcher layout: failed to read {}", mod_path.display()));

        for needle in ["ModeController", "build_command", "ProcessLauncher"] {
            assert!(
                content.contains(needle),
                "launcher layout: mod.rs must re-export {}",
                needle
            );
        }
    }

    #[test]
    fn config_layout_requires_split_modules() {
        let expected_files = [
            "src/config/mod.rs",
            "src/config/program.rs",
            "src/config/defaults.rs",
            "src/config/telemetry.rs",
        ];

        for path in expected_files {
            assert!(
                Path::new(path).exists(),
                "config layout: {} must exist",
                path
            );
        }
    }
}
