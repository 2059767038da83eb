/// Compile-time build metadata produced by `build.rs`.
#[derive(Debug, Clone, Copy)]
pub struct BuildMetadata {
    pub version: &'static str,
    pub git_hash: &'static str,
    pub git_status: &'static str,
    pub timestamp: &'static str,
    pub target: &'static str,
    pub profile: &'static str,
    pub rustc: &'static str,
}

impl BuildMetadata {
    /// One-line form used by the `version` command.
    pub fn short(&self) -> String {
        format!(
            "charter_inquiry {} ({} {}, {})",
            self.version, self.git_hash, self.git_status, self.profile
        )
    }

    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("Version:   {}", self.version),
            format!("Commit:    {} ({})", self.git_hash, self.git_status),
            format!("Built at:  {}", self.timestamp),
            format!("Target:    {}", self.target),
            format!("Profile:   {}", self.profile),
            format!("Compiler:  {}", self.rustc),
        ]
    }
}

/// Returns the statically-embedded build metadata.
pub fn current() -> BuildMetadata {
    BuildMetadata {
        version: env!("CARGO_PKG_VERSION"),
        git_hash: option_env!("CHARTER_INQUIRY_BUILD_HASH").unwrap_or("unknown"),
        git_status: option_env!("CHARTER_INQUIRY_BUILD_STATUS").unwrap_or("unknown"),
        timestamp: option_env!("CHARTER_INQUIRY_BUILD_TIMESTAMP").unwrap_or("unknown"),
        target: option_env!("CHARTER_INQUIRY_BUILD_TARGET").unwrap_or("unknown"),
        profile: option_env!("CHARTER_INQUIRY_BUILD_PROFILE").unwrap_or("unknown"),
        rustc: option_env!("CHARTER_INQUIRY_BUILD_RUSTC").unwrap_or("unknown"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_form_mentions_package_version() {
        let meta = current();
        assert!(meta.short().contains(env!("CARGO_PKG_VERSION")));
        assert_eq!(meta.lines().len(), 6);
    }
}
