//! Sink that downloads images into a directory.

use crate::config::ConflictPolicy;
use crate::error::Result;
use crate::http::Fetcher;
use crate::io::{ensure_dir, write_bytes};
use crate::sink::naming::{file_name_for, target_path};
use crate::sink::{Sink, SinkOutcome, format_size};
use std::collections::HashSet;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use url::Url;

/// Fetches each URL and writes it to `dir`.
///
/// Within one run every distinct URL ends up in its own file: a second URL
/// whose name was already used this run gets a numbered name whatever the
/// policy, and a URL seen before is not downloaded again. The
/// [`ConflictPolicy`] only governs files that existed before the run.
///
/// Each saved image is reported on `out` as `<url> : <size>`.
#[derive(Debug)]
pub struct DownloadSink<F, W> {
    fetcher: F,
    dir: PathBuf,
    policy: ConflictPolicy,
    out: W,
    /// File names written this run.
    names: HashSet<String>,
    /// URLs saved this run.
    seen: HashSet<Url>,
}

impl<F: Fetcher, W: Write> DownloadSink<F, W> {
    /// Creates the sink, creating `dir` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if `dir` cannot be created or is not a directory.
    pub fn new(
        fetcher: F,
        dir: impl Into<PathBuf>,
        policy: ConflictPolicy,
        out: W,
    ) -> Result<Self> {
        let dir = dir.into();
        ensure_dir(&dir)?;
        Ok(Self {
            fetcher,
            dir,
            policy,
            out,
            names: HashSet::new(),
            seen: HashSet::new(),
        })
    }

    /// Destination directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the progress writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<F: Fetcher, W: Write> Sink for DownloadSink<F, W> {
    fn accept(&mut self, url: &Url) -> Result<SinkOutcome> {
        if self.seen.contains(url) {
            debug!(%url, "already downloaded this run");
            return Ok(SinkOutcome::Skipped {
                reason: "duplicate URL".to_string(),
            });
        }

        let name = file_name_for(url);
        let names = &self.names;
        let Some(path) = target_path(&self.dir, &name, self.policy, |n| names.contains(n))
        else {
            info!(%url, file = %name, "file exists, skipping");
            return Ok(SinkOutcome::Skipped {
                reason: format!("{name} already exists"),
            });
        };

        let response = self.fetcher.get(url)?;
        write_bytes(&path, &response.body)?;
        let bytes = response.body.len() as u64;

        let stored = path
            .file_name()
            .map_or_else(|| name.clone(), |n| n.to_string_lossy().into_owned());
        self.names.insert(stored);
        self.seen.insert(url.clone());

        writeln!(self.out, "{url} : {}", format_size(bytes))?;
        self.out.flush()?;
        debug!(%url, path = %path.display(), bytes, "saved image");

        Ok(SinkOutcome::Written { path, bytes })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use crate::http::Response;
    use std::cell::Cell;
    use tempfile::TempDir;

    /// Serves the URL path as the body and counts requests.
    #[derive(Default)]
    struct EchoFetcher {
        calls: Cell<usize>,
    }

    impl Fetcher for EchoFetcher {
        fn fetch(&self, url: &Url, read_body: &dyn Fn(&Response) -> bool) -> Result<Response> {
            self.calls.set(self.calls.get() + 1);
            if url.path().contains("missing") {
                return Err(FetchError::Status {
                    url: url.to_string(),
                    status: 404,
                }
                .into());
            }
            let mut response = Response::new(url.clone(), Some("image/jpeg"), Vec::new());
            if read_body(&response) {
                response.body = url.path().as_bytes().to_vec();
            }
            Ok(response)
        }
    }

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    fn sink(dir: &Path, policy: ConflictPolicy) -> DownloadSink<EchoFetcher, Vec<u8>> {
        DownloadSink::new(EchoFetcher::default(), dir, policy, Vec::new()).unwrap()
    }

    #[test]
    fn test_downloads_into_new_directory() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("images");
        let mut sink = sink(&dir, ConflictPolicy::Overwrite);
        assert!(dir.is_dir());

        let outcome = sink.accept(&url("https://a.com/x/s1600/photo.jpg")).unwrap();
        assert_eq!(
            outcome,
            SinkOutcome::Written {
                path: dir.join("photo.jpg"),
                bytes: 18,
            }
        );
        assert_eq!(std::fs::read(dir.join("photo.jpg")).unwrap(), b"/x/s1600/photo.jpg");

        let progress = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(progress, "https://a.com/x/s1600/photo.jpg : 18.00 bytes\n");
    }

    #[test]
    fn test_same_name_different_urls_get_distinct_files() {
        let temp_dir = TempDir::new().unwrap();
        let mut sink = sink(temp_dir.path(), ConflictPolicy::Overwrite);

        sink.accept(&url("https://a.com/one/photo.jpg")).unwrap();
        let second = sink.accept(&url("https://a.com/two/photo.jpg")).unwrap();
        assert_eq!(
            second,
            SinkOutcome::Written {
                path: temp_dir.path().join("photo-1.jpg"),
                bytes: 14,
            }
        );
        assert_eq!(std::fs::read(temp_dir.path().join("photo.jpg")).unwrap(), b"/one/photo.jpg");
        assert_eq!(std::fs::read(temp_dir.path().join("photo-1.jpg")).unwrap(), b"/two/photo.jpg");
    }

    #[test]
    fn test_duplicate_url_is_fetched_once() {
        let temp_dir = TempDir::new().unwrap();
        let mut sink = sink(temp_dir.path(), ConflictPolicy::Overwrite);
        let u = url("https://a.com/photo.jpg");

        sink.accept(&u).unwrap();
        let again = sink.accept(&u).unwrap();
        assert!(matches!(again, SinkOutcome::Skipped { .. }));
        assert_eq!(sink.fetcher.calls.get(), 1);
    }

    #[test]
    fn test_repeat_after_renames_is_still_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let mut sink = sink(temp_dir.path(), ConflictPolicy::Overwrite);
        let urls: Vec<Url> = (0..3)
            .map(|i| url(&format!("https://a.com/{i}/photo.jpg")))
            .collect();

        for u in &urls {
            assert!(matches!(sink.accept(u).unwrap(), SinkOutcome::Written { .. }));
        }
        let again = sink.accept(&urls[0]).unwrap();
        assert!(matches!(again, SinkOutcome::Skipped { .. }));
        assert_eq!(sink.fetcher.calls.get(), 3);
        assert!(temp_dir.path().join("photo-2.jpg").exists());
        assert!(!temp_dir.path().join("photo-3.jpg").exists());
    }

    #[test]
    fn test_skip_policy_keeps_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("photo.jpg"), "original").unwrap();
        let mut sink = sink(temp_dir.path(), ConflictPolicy::Skip);

        let outcome = sink.accept(&url("https://a.com/photo.jpg")).unwrap();
        assert!(matches!(outcome, SinkOutcome::Skipped { .. }));
        assert_eq!(sink.fetcher.calls.get(), 0);
        assert_eq!(std::fs::read(temp_dir.path().join("photo.jpg")).unwrap(), b"original");
    }

    #[test]
    fn test_overwrite_policy_replaces_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("photo.jpg"), "original").unwrap();
        let mut sink = sink(temp_dir.path(), ConflictPolicy::Overwrite);

        sink.accept(&url("https://a.com/photo.jpg")).unwrap();
        assert_eq!(std::fs::read(temp_dir.path().join("photo.jpg")).unwrap(), b"/photo.jpg");
    }

    #[test]
    fn test_rename_policy_keeps_both() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("photo.jpg"), "original").unwrap();
        let mut sink = sink(temp_dir.path(), ConflictPolicy::Rename);

        sink.accept(&url("https://a.com/photo.jpg")).unwrap();
        assert_eq!(std::fs::read(temp_dir.path().join("photo.jpg")).unwrap(), b"original");
        assert_eq!(std::fs::read(temp_dir.path().join("photo-1.jpg")).unwrap(), b"/photo.jpg");
    }

    #[test]
    fn test_failed_download_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let mut sink = sink(temp_dir.path(), ConflictPolicy::Overwrite);

        assert!(sink.accept(&url("https://a.com/missing.jpg")).is_err());
        assert!(!temp_dir.path().join("missing.jpg").exists());
        assert!(sink.into_inner().is_empty());
    }

    #[test]
    fn test_destination_that_is_a_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("not-a-dir");
        std::fs::write(&file, "x").unwrap();

        let result =
            DownloadSink::new(EchoFetcher::default(), &file, ConflictPolicy::Overwrite, Vec::new());
        assert!(result.is_err());
    }
}
