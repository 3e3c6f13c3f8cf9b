/// Package manager driving init, installs and the dev server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PackageManager {
    #[default]
    Npm,
    Yarn,
}

impl PackageManager {
    /// Executable name invoked through the command runner.
    pub fn program(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
        }
    }

    /// Arguments for initializing a manifest in the current directory.
    pub fn init_args(&self) -> Vec<String> {
        vec!["init".to_string(), "-y".to_string()]
    }

    /// Arguments for adding `names` as dependencies, dev when `is_dev`.
    pub fn add_args(&self, names: &[String], is_dev: bool) -> Vec<String> {
        let subcommand = match self {
            PackageManager::Npm => "install",
            PackageManager::Yarn => "add",
        };

        let mut args = Vec::with_capacity(names.len() + 2);
        args.push(subcommand.to_string());
        args.extend(names.iter().cloned());
        if is_dev {
            args.push("-D".to_string());
        }
        args
    }

    /// Arguments for running a manifest script.
    pub fn run_args(&self, script: &str) -> Vec<String> {
        match self {
            PackageManager::Npm => vec!["run".to_string(), script.to_string()],
            PackageManager::Yarn => vec![script.to_string()],
        }
    }

    /// Human-readable dev-server launch command.
    pub fn dev_command(&self) -> String {
        let mut parts = vec![self.program().to_string()];
        parts.extend(self.run_args("dev"));
        parts.join(" ")
    }
}
