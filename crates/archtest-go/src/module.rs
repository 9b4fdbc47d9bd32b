//! A Go module on disk, exposed as a [`PackageProvider`].

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use archtest_graph::{PackageId, PackageImports, PackageProvider, ProviderError, ProviderResult};
use indexmap::IndexSet;
use path_clean::PathClean;
use regex::Regex;
use tracing::{debug, trace};
use walkdir::WalkDir;

use crate::error::{GoModuleError, Result};
use crate::scanner::{self, GoSource};

/// Manifest file that marks a module root.
pub const GO_MOD: &str = "go.mod";

static MODULE_DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^\s*module\s+(?:"([^"]+)"|`([^`]+)`|(\S+))"#).expect("valid module regex")
});

/// Package metadata read straight from a Go module source tree.
///
/// Package `<module>/<rel>` lives in directory `<root>/<rel>`. Nothing is
/// cached: every `load` re-reads the directory.
#[derive(Debug, Clone)]
pub struct GoModule {
    root: PathBuf,
    path: PackageId,
}

impl GoModule {
    /// Open the module whose `go.mod` sits directly in `root`.
    pub fn open(root: impl AsRef<Path>) -> Result<Self> {
        let root = absolute(root.as_ref())?;
        let manifest = root.join(GO_MOD);
        if !manifest.is_file() {
            return Err(GoModuleError::MissingGoMod(root));
        }

        let content = fs::read_to_string(&manifest)?;
        let module_path = parse_module_path(&content)
            .ok_or_else(|| GoModuleError::MissingModuleDirective(manifest.clone()))?;
        let path =
            PackageId::new(&module_path).map_err(|source| GoModuleError::InvalidModulePath {
                path: module_path,
                source,
            })?;

        debug!(module = %path, root = %root.display(), "opened Go module");
        Ok(Self { root, path })
    }

    /// Open the nearest module at or above `start`.
    pub fn discover(start: impl AsRef<Path>) -> Result<Self> {
        let start = absolute(start.as_ref())?;
        let mut current: Option<&Path> = Some(&start);
        while let Some(dir) = current {
            if dir.join(GO_MOD).is_file() {
                return Self::open(dir);
            }
            current = dir.parent();
        }
        Err(GoModuleError::MissingGoMod(start))
    }

    /// Module root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Module path from the `module` directive.
    pub fn module_path(&self) -> &PackageId {
        &self.path
    }

    /// Directory holding package `id`, if the id belongs to this module.
    pub fn package_dir(&self, id: &PackageId) -> Option<PathBuf> {
        if !id.is_within(&self.path) {
            return None;
        }
        let rel = id.as_str()[self.path.as_str().len()..].trim_start_matches('/');
        let mut dir = self.root.clone();
        for segment in rel.split('/').filter(|s| !s.is_empty()) {
            if segment == "." || segment == ".." {
                return None;
            }
            dir.push(segment);
        }
        Some(dir)
    }

    /// Package id for a directory inside the module.
    pub fn package_id(&self, dir: &Path) -> Option<PackageId> {
        let rel = dir.strip_prefix(&self.root).ok()?;
        let mut id = self.path.as_str().to_string();
        for component in rel.components() {
            id.push('/');
            id.push_str(component.as_os_str().to_str()?);
        }
        PackageId::new(id).ok()
    }

    fn walk(&self, dir: &Path) -> Vec<PackageId> {
        let walker = WalkDir::new(dir)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !skip_dir(entry.path()));

        let mut packages = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    debug!(error = %err, "skipping unreadable entry");
                    continue;
                }
            };
            if !entry.file_type().is_dir() {
                continue;
            }
            if has_go_files(entry.path()) {
                if let Some(id) = self.package_id(entry.path()) {
                    packages.push(id);
                }
            }
        }
        packages
    }
}

impl PackageProvider for GoModule {
    fn load(&self, id: &PackageId) -> ProviderResult<PackageImports> {
        let dir = self
            .package_dir(id)
            .ok_or_else(|| ProviderError::NotFound(id.clone()))?;
        if !dir.is_dir() {
            return Err(ProviderError::NotFound(id.clone()));
        }

        let files = go_files(&dir).map_err(|err| io_error(id, err))?;
        if files.is_empty() {
            return Err(ProviderError::NotFound(id.clone()));
        }

        let mut imports = ImportSets::default();
        let mut package_name: Option<String> = None;

        for file in files {
            let content = fs::read_to_string(&file).map_err(|err| io_error(id, err))?;
            let source = scanner::scan(&content).map_err(|err| ProviderError::Malformed {
                package: id.to_string(),
                reason: format!("{}: {err}", file.display()),
            })?;
            if source.build_ignored {
                trace!(file = %file.display(), "skipping build-ignored file");
                continue;
            }

            let is_test = file_name(&file).is_some_and(|name| name.ends_with("_test.go"));
            if is_test && source.is_external_test() {
                imports.external_test.extend(parse_ids(id, &source));
                continue;
            }

            match &package_name {
                Some(name) if *name != source.package => {
                    return Err(ProviderError::Malformed {
                        package: id.to_string(),
                        reason: format!(
                            "found packages {name} and {} in {}",
                            source.package,
                            dir.display()
                        ),
                    });
                }
                Some(_) => {}
                None => package_name = Some(source.package.clone()),
            }

            if is_test {
                imports.test.extend(parse_ids(id, &source));
            } else {
                imports.regular.extend(parse_ids(id, &source));
            }
        }

        Ok(imports.into_record())
    }

    fn packages_under(&self, prefix: Option<&PackageId>) -> ProviderResult<Vec<PackageId>> {
        let dir = match prefix {
            None => self.root.clone(),
            Some(prefix) if self.path.is_within(prefix) => self.root.clone(),
            Some(prefix) => match self.package_dir(prefix) {
                Some(dir) => dir,
                None => return Ok(Vec::new()),
            },
        };
        if !dir.is_dir() {
            return Ok(Vec::new());
        }
        Ok(self.walk(&dir))
    }
}

#[derive(Default)]
struct ImportSets {
    regular: IndexSet<PackageId>,
    test: IndexSet<PackageId>,
    external_test: IndexSet<PackageId>,
}

impl ImportSets {
    fn into_record(self) -> PackageImports {
        PackageImports {
            imports: self.regular.into_iter().collect(),
            test_imports: self.test.into_iter().collect(),
            external_test_imports: self.external_test.into_iter().collect(),
        }
    }
}

/// Extract the module path from `go.mod` content.
pub fn parse_module_path(content: &str) -> Option<String> {
    let caps = MODULE_DIRECTIVE.captures(content)?;
    caps.get(1)
        .or_else(|| caps.get(2))
        .or_else(|| caps.get(3))
        .map(|m| m.as_str().to_string())
}

fn parse_ids<'s>(owner: &'s PackageId, source: &'s GoSource) -> impl Iterator<Item = PackageId> + 's {
    source
        .imports
        .iter()
        .filter_map(move |raw| match PackageId::new(raw) {
            Ok(id) => Some(id),
            Err(err) => {
                debug!(package = %owner, import = %raw, error = %err, "ignoring invalid import path");
                None
            }
        })
}

/// Directories the Go tool never treats as part of the package tree.
fn skip_dir(path: &Path) -> bool {
    if !path.is_dir() {
        return false;
    }
    let Some(name) = file_name(path) else {
        return true;
    };
    if name == "testdata" || name == "vendor" || name.starts_with('.') || name.starts_with('_') {
        return true;
    }
    // A nested go.mod starts a different module.
    path.join(GO_MOD).is_file()
}

fn has_go_files(dir: &Path) -> bool {
    go_files(dir).is_ok_and(|files| !files.is_empty())
}

/// `.go` files directly in `dir`, sorted by name.
fn go_files(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let path = entry.path();
        let Some(name) = file_name(&path) else {
            continue;
        };
        if name.ends_with(".go") && !name.starts_with('.') && !name.starts_with('_') {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn file_name(path: &Path) -> Option<&str> {
    path.file_name().and_then(|name| name.to_str())
}

fn io_error(id: &PackageId, source: std::io::Error) -> ProviderError {
    ProviderError::Io {
        package: id.to_string(),
        source,
    }
}

fn absolute(path: &Path) -> Result<PathBuf> {
    let path = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };
    Ok(path.clean())
}
