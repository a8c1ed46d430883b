//! Opening documentation URLs in the user's browser.

use std::io;
use std::process::{Command, Stdio};

use url::Url;

/// Injected capability for opening a URL, so command handlers stay
/// testable without spawning a real browser.
pub trait UrlOpener {
    fn open(&self, url: &Url) -> io::Result<()>;
}

/// Opens URLs through the platform launcher
pub struct SystemUrlOpener;

impl UrlOpener for SystemUrlOpener {
    fn open(&self, url: &Url) -> io::Result<()> {
        let (program, args): (&str, &[&str]) = if cfg!(target_os = "macos") {
            ("open", &[])
        } else if cfg!(target_os = "windows") {
            ("cmd", &["/C", "start", ""])
        } else {
            ("xdg-open", &[])
        };

        let status = Command::new(program)
            .args(args)
            .arg(url.as_str())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()?;

        if !status.success() {
            return Err(io::Error::other(format!(
                "'{program}' exited with {status} while opening {url}"
            )));
        }
        Ok(())
    }
}

/// Records opened URLs instead of launching anything
#[cfg(test)]
pub struct RecordingUrlOpener {
    pub opened: std::cell::RefCell<Vec<Url>>,
}

#[cfg(test)]
impl RecordingUrlOpener {
    pub fn new() -> Self {
        Self {
            opened: std::cell::RefCell::new(Vec::new()),
        }
    }
}

#[cfg(test)]
impl UrlOpener for RecordingUrlOpener {
    fn open(&self, url: &Url) -> io::Result<()> {
        self.opened.borrow_mut().push(url.clone());
        Ok(())
    }
}
