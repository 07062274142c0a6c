//! Dumper download
//!
//! The artifact is only fetched when it is not already present in the
//! working directory.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::UpdaterConfig;
use crate::error::Result;

/// Retrieves a remote file into a local path
pub trait Fetch {
    fn fetch(&self, url: &str, dest: &Path) -> Result<()>;
}

/// Make sure the dumper exists locally, downloading it if absent
pub fn ensure_dumper(fetcher: &dyn Fetch, config: &UpdaterConfig) -> Result<PathBuf> {
    let path = config.dumper_path();
    if path.exists() {
        return Ok(path);
    }

    info!("Downloading {}...", config.dumper_name);
    fetcher.fetch(&config.dumper_url, &path)?;
    info!("Download complete.");
    Ok(path)
}

#[cfg(feature = "download")]
pub use http::HttpFetcher;

#[cfg(feature = "download")]
mod http {
    use std::fs::{self, File};
    use std::io::{self, Read};
    use std::path::{Path, PathBuf};
    use std::time::Duration;

    use tracing::debug;

    use super::Fetch;
    use crate::error::{Error, Result};

    const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Blocking HTTP fetcher
    pub struct HttpFetcher {
        agent: ureq::Agent,
    }

    impl Default for HttpFetcher {
        fn default() -> Self {
            Self::new()
        }
    }

    impl HttpFetcher {
        pub fn new() -> Self {
            let user_agent = format!(
                "offsync/{} ({})",
                env!("CARGO_PKG_VERSION"),
                std::env::consts::OS
            );
            let config = ureq::Agent::config_builder()
                .timeout_connect(Some(CONNECT_TIMEOUT))
                .user_agent(user_agent)
                .build();
            Self {
                agent: config.into(),
            }
        }
    }

    impl Fetch for HttpFetcher {
        fn fetch(&self, url: &str, dest: &Path) -> Result<()> {
            let download_error = |message: String| Error::Download {
                url: url.to_string(),
                message,
            };

            let mut response = self
                .agent
                .get(url)
                .call()
                .map_err(|e| download_error(e.to_string()))?;

            let written = write_atomically(&mut response.body_mut().as_reader(), dest)
                .map_err(|e| download_error(e.to_string()))?;
            make_executable(dest)?;
            debug!("Downloaded {} bytes to {}", written, dest.display());
            Ok(())
        }
    }

    /// Stream `reader` into a sibling `.part` file and rename it onto `dest`.
    ///
    /// An interrupted transfer never looks like a complete artifact, and the
    /// part file is removed when anything before the rename fails.
    fn write_atomically<R: Read>(reader: &mut R, dest: &Path) -> io::Result<u64> {
        let part = part_path(dest);
        let result = File::create(&part).and_then(|mut file| {
            let written = io::copy(reader, &mut file)?;
            file.sync_all()?;
            Ok(written)
        });

        match result.and_then(|written| fs::rename(&part, dest).map(|()| written)) {
            Ok(written) => Ok(written),
            Err(e) => {
                let _ = fs::remove_file(&part);
                Err(e)
            }
        }
    }

    fn part_path(dest: &Path) -> PathBuf {
        let mut name = dest.as_os_str().to_os_string();
        name.push(".part");
        PathBuf::from(name)
    }

    #[cfg(unix)]
    fn make_executable(path: &Path) -> io::Result<()> {
        use std::os::unix::fs::PermissionsExt;

        let mut perms = fs::metadata(path)?.permissions();
        perms.set_mode(perms.mode() | 0o755);
        fs::set_permissions(path, perms)
    }

    #[cfg(not(unix))]
    fn make_executable(_path: &Path) -> io::Result<()> {
        Ok(())
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::fs;
    use tempfile::TempDir;

    struct CountingFetcher {
        calls: Cell<usize>,
    }

    impl Fetch for CountingFetcher {
        fn fetch(&self, _url: &str, dest: &Path) -> Result<()> {
            self.calls.set(self.calls.get() + 1);
            fs::write(dest, b"MZ")?;
            Ok(())
        }
    }

    #[test]
    fn test_downloads_when_absent() {
        let dir = TempDir::new().unwrap();
        let config = UpdaterConfig::builder().work_dir(dir.path()).build();
        let fetcher = CountingFetcher { calls: Cell::new(0) };

        let path = ensure_dumper(&fetcher, &config).unwrap();
        assert_eq!(fetcher.calls.get(), 1);
        assert_eq!(path, dir.path().join("cs2-dumper.exe"));
        assert!(path.exists());
    }

    #[test]
    fn test_skips_download_when_present() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("cs2-dumper.exe"), b"MZ").unwrap();
        let config = UpdaterConfig::builder().work_dir(dir.path()).build();
        let fetcher = CountingFetcher { calls: Cell::new(0) };

        ensure_dumper(&fetcher, &config).unwrap();
        assert_eq!(fetcher.calls.get(), 0);
    }
}
