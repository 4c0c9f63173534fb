use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Desktop services the app needs but does not own: choosing a file and
/// handing a file to its default application.
pub trait Platform {
    /// Blocks until the user picks a file or dismisses the dialog.
    fn pick_file(&self, title: &str) -> Option<PathBuf>;

    fn open(&self, path: &Path) -> Result<()>;
}

/// The real desktop: native dialog via `rfd`, default-app launch via `open`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DesktopPlatform;

impl Platform for DesktopPlatform {
    fn pick_file(&self, title: &str) -> Option<PathBuf> {
        rfd::FileDialog::new().set_title(title).pick_file()
    }

    fn open(&self, path: &Path) -> Result<()> {
        open_with_default_application(path)
    }
}

/// Opens `path` with whatever the OS associates with it: ShellExecute on
/// Windows, `open` on macOS, the xdg/desktop launchers elsewhere.
pub fn open_with_default_application(path: &Path) -> Result<()> {
    open::that(path).with_context(|| format!("Could not open {}", path.display()))?;
    tracing::info!(path = %path.display(), "Opened file with default application");
    Ok(())
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Scripted platform for driving the app in tests.
    #[derive(Debug, Default)]
    pub struct FakePlatform {
        pub next_pick: RefCell<Option<PathBuf>>,
        pub open_error: Option<String>,
        pub opened: RefCell<Vec<PathBuf>>,
    }

    impl Platform for FakePlatform {
        fn pick_file(&self, _title: &str) -> Option<PathBuf> {
            self.next_pick.borrow_mut().take()
        }

        fn open(&self, path: &Path) -> Result<()> {
            if let Some(message) = &self.open_error {
                return Err(anyhow::anyhow!("{message}"));
            }
            self.opened.borrow_mut().push(path.to_path_buf());
            Ok(())
        }
    }

    impl<P: Platform + ?Sized> Platform for Rc<P> {
        fn pick_file(&self, title: &str) -> Option<PathBuf> {
            (**self).pick_file(title)
        }

        fn open(&self, path: &Path) -> Result<()> {
            (**self).open(path)
        }
    }
}
