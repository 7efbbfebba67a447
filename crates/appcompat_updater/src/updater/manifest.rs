/// Build-server target every appcompat artifact comes from.
pub const SDK_TARGET: &str = "sdk_arm64-sdk";

/// Target the provenance file is fetched from. Every artifact comes from the
/// same build, so one `repo.prop` covers all of them.
pub const REPO_PROP_TARGET: &str = "sdk";
pub const REPO_PROP: &str = "repo.prop";

/// A single artifact to fetch from the build server and place in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstallEntry {
    pub target: &'static str,
    pub name: &'static str,
    pub install_path: &'static str,
    pub need_strip: bool,
    pub need_unzip: bool,
}

impl InstallEntry {
    pub const fn new(target: &'static str, name: &'static str, install_path: &'static str) -> Self {
        Self {
            target,
            name,
            install_path,
            need_strip: false,
            need_unzip: false,
        }
    }

    pub const fn stripped(self) -> Self {
        Self {
            need_strip: true,
            ..self
        }
    }

    pub const fn unzipped(self) -> Self {
        Self {
            need_unzip: true,
            ..self
        }
    }
}

/// Files fetched and installed directly.
pub const INSTALL_LIST: &[InstallEntry] =
    &[InstallEntry::new(SDK_TARGET, "veridex.zip", "veridex-linux.zip").unzipped()];

/// Files that land in the tree by unpacking an archive from [`INSTALL_LIST`].
pub const EXTRACTED_LIST: &[InstallEntry] = &[
    InstallEntry::new(SDK_TARGET, "veridex", "veridex").stripped(),
    InstallEntry::new(SDK_TARGET, "appcompat.sh", "appcompat.sh"),
    InstallEntry::new(SDK_TARGET, "hiddenapi-flags.csv", "hiddenapi-flags.csv"),
    InstallEntry::new(SDK_TARGET, "system-stubs.zip", "system-stubs.zip"),
    InstallEntry::new(
        SDK_TARGET,
        "org.apache.http.legacy-stubs.zip",
        "org.apache.http.legacy-stubs.zip",
    ),
];

#[derive(Debug, Clone, Copy)]
pub struct Manifest {
    pub install_list: &'static [InstallEntry],
    pub extracted_list: &'static [InstallEntry],
}

impl Manifest {
    pub const fn new(
        install_list: &'static [InstallEntry],
        extracted_list: &'static [InstallEntry],
    ) -> Self {
        Self {
            install_list,
            extracted_list,
        }
    }

    /// Every path this manifest installs, direct installs first.
    pub fn list_installed_files(&self) -> Vec<&'static str> {
        self.install_list
            .iter()
            .chain(self.extracted_list)
            .map(|entry| entry.install_path)
            .collect()
    }

    /// Paths staged for the update commit: the provenance file plus every installed file.
    pub fn commit_paths(&self) -> Vec<&'static str> {
        let mut paths = vec![REPO_PROP];
        paths.extend(self.list_installed_files());
        paths
    }
}

impl Default for Manifest {
    fn default() -> Self {
        Self::new(INSTALL_LIST, EXTRACTED_LIST)
    }
}
