use derive_new::new;
use std::ffi::{OsStr, OsString};
use std::fmt::Display;
use std::path::{Path, PathBuf};

const TEMPLATE_EXTENSION: &str = ".gitignore";

/// An immediate subdirectory of the working directory that may receive a `.gitignore`.
///
/// The name is kept as an `OsString`: folder names are not required to be UTF-8.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct CandidateFolder {
    name: OsString,
    path: PathBuf,
}

impl CandidateFolder {
    pub fn name(&self) -> &OsStr {
        &self.name
    }

    pub fn display_name(&self) -> String {
        self.name.to_string_lossy().to_string()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn template_name(&self) -> TemplateName {
        TemplateName::from_folder_name(&self.name)
    }
}

impl TryFrom<&Path> for CandidateFolder {
    type Error = anyhow::Error;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let name = path
            .file_name()
            .ok_or_else(|| anyhow::anyhow!("folder path has no name: {:?}", path))?;

        Ok(CandidateFolder::new(name.to_os_string(), path.to_path_buf()))
    }
}

/// File name of the template matching a folder, e.g. `Go.gitignore` for `go`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TemplateName(OsString);

impl TemplateName {
    // Only the first character is uppercased, the rest is kept verbatim:
    // template repositories name files `Go.gitignore`, `CMake.gitignore`, ...
    // A name starting with bytes that are not UTF-8 is kept as is.
    pub fn from_folder_name(folder_name: impl AsRef<OsStr>) -> Self {
        let folder_name = folder_name.as_ref();
        let bytes = folder_name.as_encoded_bytes();

        let valid_len = match std::str::from_utf8(bytes) {
            Ok(_) => bytes.len(),
            Err(err) => err.valid_up_to(),
        };
        let valid_prefix = std::str::from_utf8(&bytes[..valid_len]).unwrap_or_default();

        let mut name = OsString::with_capacity(bytes.len() + TEMPLATE_EXTENSION.len() + 2);
        match valid_prefix.chars().next() {
            Some(first) => {
                name.push(first.to_uppercase().collect::<String>());
                // SAFETY: the split point directly follows a valid UTF-8 character,
                // so the tail is a valid encoded `OsStr` on every platform.
                let tail =
                    unsafe { OsStr::from_encoded_bytes_unchecked(&bytes[first.len_utf8()..]) };
                name.push(tail);
            }
            None => name.push(folder_name),
        }
        name.push(TEMPLATE_EXTENSION);

        TemplateName(name)
    }
}

impl AsRef<OsStr> for TemplateName {
    fn as_ref(&self) -> &OsStr {
        &self.0
    }
}

impl AsRef<Path> for TemplateName {
    fn as_ref(&self) -> &Path {
        Path::new(&self.0)
    }
}

impl Display for TemplateName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_string_lossy())
    }
}
