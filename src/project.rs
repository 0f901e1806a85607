use anyhow::Context;
use std::{
    env,
    path::{Path, PathBuf},
};

/// Overrides project-root resolution, for tests and CI.
pub const PROJECT_DIR_ENV: &str = "ICONGEN_PROJECT_DIR";

/// The project root is the parent of the directory holding the executable,
/// matching a tool installed under `<project>/bin` or `<project>/scripts`.
pub fn resolve_project_root() -> anyhow::Result<PathBuf> {
    if let Some(dir) = env::var_os(PROJECT_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }

    let exe = env::current_exe().context("Failed to locate the running executable")?;
    let root = exe
        .parent()
        .and_then(Path::parent)
        .context("Executable has no enclosing project directory")?;

    Ok(root.to_path_buf())
}

pub fn icons_dir(project_root: &Path) -> PathBuf {
    project_root.join("assets").join("icons")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icons_dir_is_under_assets() {
        assert_eq!(
            icons_dir(Path::new("/project")),
            Path::new("/project/assets/icons")
        );
    }

    #[test]
    fn env_var_overrides_resolution() {
        env::set_var(PROJECT_DIR_ENV, "/somewhere/else");
        let root = resolve_project_root().unwrap();
        env::remove_var(PROJECT_DIR_ENV);

        assert_eq!(root, PathBuf::from("/somewhere/else"));
    }
}
