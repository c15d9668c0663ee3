use crate::build;

/// Returns the long version string with build information
pub fn long_version() -> String {
    let version = build::PKG_VERSION;
    let git_sha = build::SHORT_COMMIT;
    #[allow(clippy::const_is_empty)]
    let git_branch = if build::BRANCH.is_empty() { "unknown" } else { build::BRANCH };
    let git_dirty = if build::GIT_CLEAN { "clean" } else { "dirty" };

    format!(
        "{version} ({git_branch} {git_sha} {git_dirty})
Build: {}
Target: {} ({})
Rustc: {}",
        build::BUILD_TIME,
        build::BUILD_TARGET,
        build::BUILD_OS,
        build::RUST_VERSION
    )
}
