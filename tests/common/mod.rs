use assert_cmd::Command;
use assert_fs::{fixture::ChildPath, prelude::*, TempDir};

pub const SQUARE_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="64" height="64"><rect width="64" height="64" fill="#2d6ae3"/></svg>"##;

pub const WIDE_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="128" height="32"><rect width="128" height="32" fill="#e3962d"/></svg>"##;

pub const BROKEN_SVG: &str = "<svg";

pub struct Project {
    pub dir: TempDir,
}

impl Project {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn write_icon(&self, file_name: &str, contents: &str) -> ChildPath {
        let file = self.dir.child("assets").child("icons").child(file_name);
        file.write_str(contents).unwrap();
        file
    }

    pub fn icon_path(&self, file_name: &str) -> ChildPath {
        self.dir.child("assets").child("icons").child(file_name)
    }

    pub fn run(&self) -> Command {
        let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
        cmd.env("ICONGEN_PROJECT_DIR", self.dir.path());
        cmd
    }
}
