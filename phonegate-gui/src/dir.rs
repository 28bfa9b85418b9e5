use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "phonegate.toml";
const LOG_FILE_NAME: &str = "phonegate.log";

#[derive(Clone, Debug, PartialEq)]
pub struct PhonegateDirectory(PathBuf);

impl PhonegateDirectory {
    pub fn new(p: PathBuf) -> Self {
        PhonegateDirectory(p)
    }
    pub fn new_default() -> Result<Self, Box<dyn std::error::Error>> {
        default_datadir().map(PhonegateDirectory::new)
    }
}

impl PhonegateDirectory {
    pub fn exists(&self) -> bool {
        self.0.as_path().exists()
    }
    pub fn init(&self) -> Result<(), Box<dyn std::error::Error>> {
        create_directory(self.0.as_path())
    }
    pub fn path(&self) -> &Path {
        self.0.as_path()
    }
    pub fn config_file(&self) -> PathBuf {
        self.0.join(CONFIG_FILE_NAME)
    }
    pub fn log_file(&self) -> PathBuf {
        self.0.join(LOG_FILE_NAME)
    }
}

// Get the absolute path to the phonegate data folder.
///
/// This a "Phonegate" directory in the XDG standard configuration directory for all OSes but
/// Linux-based ones, for which it's `~/.phonegate`.
fn default_datadir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    #[cfg(target_os = "linux")]
    let configs_dir = dirs::home_dir();

    #[cfg(not(target_os = "linux"))]
    let configs_dir = dirs::config_dir();

    if let Some(mut path) = configs_dir {
        #[cfg(target_os = "linux")]
        path.push(".phonegate");

        #[cfg(not(target_os = "linux"))]
        path.push("Phonegate");

        return Ok(path);
    }

    Err("Failed to get default data directory".into())
}

fn create_directory(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(unix)]
    return {
        use std::fs::DirBuilder;
        use std::os::unix::fs::DirBuilderExt;

        let mut builder = DirBuilder::new();
        builder.mode(0o700).recursive(true).create(path)?;
        Ok(())
    };

    #[cfg(not(unix))]
    return {
        std::fs::create_dir_all(path)?;
        Ok(())
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_layout() {
        let tmp = tempfile::tempdir().unwrap();
        let datadir = PhonegateDirectory::new(tmp.path().join("phonegate"));
        assert!(!datadir.exists());
        datadir.init().unwrap();
        assert!(datadir.exists());
        assert_eq!(
            datadir.config_file(),
            tmp.path().join("phonegate").join("phonegate.toml")
        );
        assert_eq!(
            datadir.log_file(),
            tmp.path().join("phonegate").join("phonegate.log")
        );
    }
}
