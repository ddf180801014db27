//! Response bodies, and the fixtures they can be recorded as.
//!
//! With the `test-mode` feature and `HS_RECORD=1`, every body read here is
//! written to `HS_FIXDIR` (default `tests/fixtures`) under the name the offline
//! tests load it by.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Which upstream a response came from.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Fixture<'a> {
    /// A top-headlines page for one country.
    Headlines { country: &'a str },
    /// A batch answer from the sentiment model.
    Inference,
}

impl Fixture<'_> {
    pub(crate) fn file_name(&self) -> String {
        match self {
            Self::Headlines { country } => format!("headlines_{country}.json"),
            Self::Inference => "inference_batch.json".to_string(),
        }
    }
}

fn recording() -> bool {
    cfg!(feature = "test-mode") && env::var("HS_RECORD").ok().as_deref() == Some("1")
}

fn fixture_dir() -> PathBuf {
    env::var("HS_FIXDIR").map_or_else(
        |_| Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures"),
        PathBuf::from,
    )
}

fn write_fixture(dir: &Path, fixture: Fixture<'_>, body: &str) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(fixture.file_name());
    fs::write(&path, body)?;
    Ok(path)
}

/// Reads the whole body, recording it when fixture recording is on.
pub(crate) async fn read_body(
    resp: reqwest::Response,
    fixture: Fixture<'_>,
) -> Result<String, reqwest::Error> {
    let text = resp.text().await?;

    if recording()
        && let Err(e) = write_fixture(&fixture_dir(), fixture, &text)
    {
        eprintln!("HS_RECORD: failed to write {}: {e}", fixture.file_name());
    }

    Ok(text)
}
