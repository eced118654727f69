//! テストフィクスチャ管理

use std::path::PathBuf;

use tempfile::TempDir;

/// Seven-stage almanac whose range minimum is 46 and point minimum is 35.
#[allow(dead_code)]
pub const EXAMPLE: &str = include_str!("../fixtures/example.txt");

/// Two rules of `seed-to-soil` claim seeds 5..=9.
#[allow(dead_code)]
pub const OVERLAPPING: &str = "\
seeds: 0 20

seed-to-soil map:
0 0 10
100 5 10
";

/// 一時ディレクトリ管理
#[allow(dead_code)]
pub struct TempWorkspace {
    dir: TempDir,
}

#[allow(dead_code)]
impl TempWorkspace {
    pub fn new() -> Self {
        Self { dir: tempfile::tempdir().unwrap() }
    }

    /// ファイルを作成
    pub fn create_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    pub fn example(&self) -> PathBuf {
        self.create_file("example.txt", EXAMPLE)
    }
}
