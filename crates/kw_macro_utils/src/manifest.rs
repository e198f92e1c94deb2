use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use toml_edit::{Document, Item, Table};

const FACADE_NAME: &str = "keyway";
const CRATE_PREFIX: &str = "kw_";

/// The parsed `Cargo.toml` of the crate currently invoking a proc-macro.
///
/// Generated code must name `kw_*` crates by a path that resolves from the
/// caller, which may depend on the member crate directly or only on the
/// `keyway` facade.
///
/// # Example
///
/// ```rust
/// # use kw_macro_utils::Manifest;
/// let path: syn::Path = Manifest::shared(|m| m.get_crate_path("kw_reflect"));
/// ```
///
/// # Resolution rules
///
/// 1. `dependencies` lists the crate: `::kw_name`.
/// 2. The name starts with `kw_` and `dependencies` lists `keyway`:
///    `::keyway::name` (e.g. `kw_reflect` -> `::keyway::reflect`).
/// 3. Rules 1 and 2 against `dev-dependencies`.
/// 4. Otherwise `::kw_name`.
///
/// A crate deriving its own traits should declare `extern crate self as kw_name;`
/// so that `::kw_name` resolves from inside the crate and from its doctests.
#[derive(Debug)]
pub struct Manifest {
    pub manifest: Document<Box<str>>,
    pub modified_time: SystemTime,
}

impl Manifest {
    #[inline(never)]
    fn manifest_path() -> PathBuf {
        let dir = env::var_os("CARGO_MANIFEST_DIR")
            .expect("CARGO_MANIFEST_DIR should be auto-defined by cargo.");
        let path = PathBuf::from(dir).join("Cargo.toml");
        assert!(
            path.exists(),
            "Cargo manifest does not exist at path {}",
            path.display(),
        );
        path
    }

    #[inline(never)]
    fn modified_time(path: &Path) -> std::io::Result<SystemTime> {
        std::fs::metadata(path)?.modified()
    }

    #[inline(never)]
    fn read(path: &Path) -> Document<Box<str>> {
        let text = std::fs::read_to_string(path)
            .unwrap_or_else(|_| panic!("Unable to read cargo manifest: {}", path.display()));
        Document::parse(text.into_boxed_str())
            .unwrap_or_else(|_| panic!("Failed to parse cargo manifest: {}", path.display()))
    }

    fn absolute(name: &str) -> syn::Path {
        syn::parse_str(&format!("::{name}"))
            .unwrap_or_else(|_| panic!("`{name}` is not a valid crate name"))
    }

    fn lookup(deps: &Table, name: &str) -> Option<syn::Path> {
        if deps.contains_key(name) {
            return Some(Self::absolute(name));
        }
        let module = name.strip_prefix(CRATE_PREFIX)?;
        if !deps.contains_key(FACADE_NAME) {
            return None;
        }
        let mut path = Self::absolute(FACADE_NAME);
        let segment = syn::parse_str::<syn::PathSegment>(module)
            .unwrap_or_else(|_| panic!("`{module}` is not a valid path segment"));
        path.segments.push(segment);
        Some(path)
    }

    /// Returns the path under which crate `name` is reachable from the
    /// caller. See the type documentation for the rules.
    #[inline(never)]
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        ["dependencies", "dev-dependencies"]
            .into_iter()
            .filter_map(|table| match self.manifest.get(table) {
                Some(Item::Table(deps)) => Self::lookup(deps, name),
                _ => None,
            })
            .next()
            .unwrap_or_else(|| Self::absolute(name))
    }

    /// Runs `func` against the caller's manifest.
    ///
    /// Manifests are cached per path and re-read when the file's modified
    /// time changes. Call once per macro invocation and keep the result.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static MANIFESTS: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let path = Self::manifest_path();
        let modified_time =
            Self::modified_time(&path).expect("The Cargo.toml should have a modified time.");

        {
            let manifests = MANIFESTS.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(manifest) = manifests.get(&path)
                && manifest.modified_time == modified_time
            {
                return func(manifest);
            }
        }

        let manifest = Manifest {
            manifest: Self::read(&path),
            modified_time,
        };
        let result = func(&manifest);

        MANIFESTS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path, manifest);

        result
    }
}

#[cfg(test)]
mod tests {
    use super::Manifest;
    use std::time::SystemTime;
    use toml_edit::Document;

    fn render(path: &syn::Path) -> String {
        path.segments
            .iter()
            .map(|s| s.ident.to_string())
            .collect::<Vec<_>>()
            .join("::")
    }

    fn manifest(text: &str) -> Manifest {
        Manifest {
            manifest: Document::parse(text.to_owned().into_boxed_str()).unwrap(),
            modified_time: SystemTime::UNIX_EPOCH,
        }
    }

    #[test]
    fn direct_dependency() {
        let m = manifest("[dependencies]\nkw_reflect = \"0.0.1\"\n");
        assert_eq!(render(&m.get_crate_path("kw_reflect")), "kw_reflect");
    }

    #[test]
    fn through_facade() {
        let m = manifest("[dependencies]\nkeyway = \"0.0.1\"\n");
        assert_eq!(render(&m.get_crate_path("kw_reflect")), "keyway::reflect");
    }

    #[test]
    fn dev_dependency_and_fallback() {
        let m = manifest("[dev-dependencies]\nkeyway = \"0.0.1\"\n");
        assert_eq!(render(&m.get_crate_path("kw_json")), "keyway::json");
        assert_eq!(render(&m.get_crate_path("serde")), "serde");
    }
}
