//! Target scaffolding
//!
//! Creates the on-disk side of an extension target: its directory, the
//! view-controller source instantiated from the template, and copies of the
//! optional resource files. Returns the file names the target's group lists.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::ports::FileSystem;
use crate::domain::value_objects::{
    entitlements_file_name, view_controller_type, ExtensionFlavor, GenerationWarning,
};
use crate::error::{ExtgenError, ExtgenResult};

/// Type name the template declares; replaced per target
pub const TEMPLATE_PLACEHOLDER: &str = "ShareExtensionViewController";

/// Template shipped with extgen
pub const BUILTIN_TEMPLATE: &str =
    include_str!("../../templates/ShareExtensionViewController.swift");

/// Directory under the platform root shared by all extensions
pub const SHARED_RESOURCES_DIR: &str = "SharedResources";

pub const INFO_PLIST: &str = "Info.plist";

/// What to scaffold for one target
#[derive(Debug, Clone)]
pub struct ScaffoldRequest<'a> {
    pub target_name: &'a str,
    pub flavor: ExtensionFlavor,
    pub platform_root: &'a Path,
    /// Template file; the built-in template when `None`
    pub template: Option<&'a Path>,
    /// Optional files copied into the target directory, already resolved
    pub resources: Vec<&'a Path>,
}

/// Result of [`scaffold_target`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scaffold {
    pub target_dir: PathBuf,
    pub view_controller: PathBuf,
    /// File names the target group lists, in order
    pub members: Vec<String>,
    /// The subset of `members` that are copied resources
    pub resources: Vec<String>,
    pub warnings: Vec<GenerationWarning>,
}

/// Target directory under the platform root
pub fn target_dir(platform_root: &Path, target_name: &str) -> PathBuf {
    platform_root.join(target_name)
}

/// Write the target's files; any file system error aborts
pub fn scaffold_target<F: FileSystem>(
    fs: &F,
    request: &ScaffoldRequest<'_>,
) -> ExtgenResult<Scaffold> {
    let dir = target_dir(request.platform_root, request.target_name);
    ensure_dir(fs, &dir)?;
    ensure_dir(fs, &request.platform_root.join(SHARED_RESOURCES_DIR))?;

    let template = match request.template {
        Some(path) => {
            if !fs.exists(path) {
                return Err(ExtgenError::TemplateNotFound {
                    path: path.to_path_buf(),
                });
            }
            fs.read(path)?
        }
        None => BUILTIN_TEMPLATE.to_string(),
    };
    let source_name = request.flavor.view_controller_file();
    let view_controller = dir.join(&source_name);
    let type_name = view_controller_type(request.target_name);
    fs.write(
        &view_controller,
        &replace_identifier(&template, TEMPLATE_PLACEHOLDER, &type_name),
    )?;
    debug!(path = %view_controller.display(), type_name, "instantiated view controller");

    let mut members = vec![
        source_name,
        INFO_PLIST.to_string(),
        entitlements_file_name(request.target_name),
    ];
    let mut resources = Vec::new();
    let mut warnings = Vec::new();
    for source in &request.resources {
        let Some(file_name) = source.file_name().and_then(|n| n.to_str()) else {
            warn!(
                target_name = request.target_name,
                path = %source.display(),
                "optional resource has no usable file name, skipping"
            );
            warnings.push(GenerationWarning::for_target(
                request.target_name,
                format!("{} has no usable file name; not copied", source.display()),
            ));
            continue;
        };
        if !fs.exists(source) {
            warn!(
                target_name = request.target_name,
                path = %source.display(),
                "optional resource not found, skipping"
            );
            warnings.push(GenerationWarning::for_target(
                request.target_name,
                format!("{} does not exist; not copied", source.display()),
            ));
            continue;
        }
        fs.copy(source, &dir.join(file_name))?;
        members.push(file_name.to_string());
        resources.push(file_name.to_string());
    }

    Ok(Scaffold {
        target_dir: dir,
        view_controller,
        members,
        resources,
        warnings,
    })
}

fn ensure_dir<F: FileSystem>(fs: &F, dir: &Path) -> ExtgenResult<()> {
    if !fs.exists(dir) {
        fs.create_dir_all(dir)?;
    }
    Ok(())
}

/// Replace whole-identifier occurrences of `from` with `to`
///
/// An occurrence inside a longer identifier, such as `from` followed by
/// `Delegate`, is left alone.
pub fn replace_identifier(text: &str, from: &str, to: &str) -> String {
    if from.is_empty() {
        return text.to_string();
    }
    let is_ident = |c: char| c.is_alphanumeric() || c == '_';

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    let mut prev: Option<char> = None;
    while let Some(pos) = rest.find(from) {
        let before = rest[..pos].chars().next_back().or(prev);
        let after = rest[pos + from.len()..].chars().next();
        let whole = !before.is_some_and(is_ident) && !after.is_some_and(is_ident);

        out.push_str(&rest[..pos]);
        out.push_str(if whole { to } else { from });
        prev = from.chars().next_back();
        rest = &rest[pos + from.len()..];
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::file_system::MockFileSystem;

    fn request<'a>(root: &'a Path, flavor: ExtensionFlavor, name: &'a str) -> ScaffoldRequest<'a> {
        ScaffoldRequest {
            target_name: name,
            flavor,
            platform_root: root,
            template: None,
            resources: Vec::new(),
        }
    }

    #[test]
    fn replace_identifier_whole_tokens_only() {
        let text = "class ShareExtensionViewController: X {}\n\
                    let d: ShareExtensionViewControllerDelegate\n\
                    ShareExtensionViewController.init()";
        let out = replace_identifier(text, TEMPLATE_PLACEHOLDER, "AppShareExtensionViewController");
        assert_eq!(
            out,
            "class AppShareExtensionViewController: X {}\n\
             let d: ShareExtensionViewControllerDelegate\n\
             AppShareExtensionViewController.init()"
        );
    }

    #[test]
    fn replace_identifier_respects_prefixes() {
        assert_eq!(replace_identifier("MyFoo Foo _Foo", "Foo", "Bar"), "MyFoo Bar _Foo");
        assert_eq!(replace_identifier("FooFoo", "Foo", "Bar"), "FooFoo");
        assert_eq!(replace_identifier("(Foo)", "Foo", "Bar"), "(Bar)");
    }

    #[test]
    fn scaffold_writes_renamed_view_controller() {
        let fs = MockFileSystem::new();
        let root = Path::new("ios");
        let scaffold =
            scaffold_target(&fs, &request(root, ExtensionFlavor::Share, "MyAppShareExtension"))
                .unwrap();

        assert_eq!(
            scaffold.view_controller,
            PathBuf::from("ios/MyAppShareExtension/ShareExtensionViewController.swift")
        );
        let source = fs.content(&scaffold.view_controller).unwrap();
        assert!(source.contains("class MyAppShareExtensionViewController"));
        assert!(!source.contains("class ShareExtensionViewController"));
        assert!(fs.exists(Path::new("ios/MyAppShareExtension")));
        assert!(fs.exists(Path::new("ios/SharedResources")));
        assert_eq!(
            scaffold.members,
            [
                "ShareExtensionViewController.swift",
                "Info.plist",
                "MyAppShareExtension.entitlements"
            ]
        );
        assert!(scaffold.resources.is_empty());
    }

    #[test]
    fn custom_template_is_used_and_left_untouched() {
        let template = Path::new("templates/Custom.swift");
        let fs = MockFileSystem::new()
            .with_file(template, "final class ShareExtensionViewController {}");
        let mut req = request(Path::new("ios"), ExtensionFlavor::Action, "MyAppActionExtension");
        req.template = Some(template);

        let scaffold = scaffold_target(&fs, &req).unwrap();
        assert_eq!(
            fs.content(&scaffold.view_controller).unwrap(),
            "final class MyAppActionExtensionViewController {}"
        );
        assert_eq!(
            fs.content(template).unwrap(),
            "final class ShareExtensionViewController {}"
        );
    }

    #[test]
    fn missing_custom_template_is_fatal() {
        let fs = MockFileSystem::new();
        let mut req = request(Path::new("ios"), ExtensionFlavor::Share, "T");
        req.template = Some(Path::new("nowhere.swift"));
        let err = scaffold_target(&fs, &req).unwrap_err();
        assert!(matches!(err, ExtgenError::TemplateNotFound { .. }));
    }

    #[test]
    fn resources_are_copied_and_listed() {
        let fs = MockFileSystem::new()
            .with_file("app/GoogleService-Info.plist", "<plist/>")
            .with_file("app/preprocessing.js", "var x;");
        let mut req = request(Path::new("ios"), ExtensionFlavor::Share, "MyAppShareExtension");
        req.resources = vec![
            Path::new("app/GoogleService-Info.plist"),
            Path::new("app/preprocessing.js"),
        ];

        let scaffold = scaffold_target(&fs, &req).unwrap();
        assert_eq!(scaffold.resources, ["GoogleService-Info.plist", "preprocessing.js"]);
        assert_eq!(scaffold.members.len(), 5);
        assert_eq!(
            fs.content(Path::new("ios/MyAppShareExtension/preprocessing.js")).unwrap(),
            "var x;"
        );
    }

    #[test]
    fn missing_resource_is_skipped_with_warning() {
        let fs = MockFileSystem::new();
        let mut req = request(Path::new("ios"), ExtensionFlavor::Share, "MyAppShareExtension");
        req.resources = vec![Path::new("app/GoogleService-Info.plist")];

        let scaffold = scaffold_target(&fs, &req).unwrap();
        assert!(scaffold.resources.is_empty());
        assert_eq!(scaffold.members.len(), 3);
        assert_eq!(scaffold.warnings.len(), 1);
        assert_eq!(scaffold.warnings[0].target.as_deref(), Some("MyAppShareExtension"));
    }

    #[test]
    fn rescaffolding_keeps_unrelated_files() {
        let fs = MockFileSystem::new().with_file("ios/MyAppShareExtension/Notes.txt", "keep");
        let req = request(Path::new("ios"), ExtensionFlavor::Share, "MyAppShareExtension");

        let first = scaffold_target(&fs, &req).unwrap();
        let second = scaffold_target(&fs, &req).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            fs.content(Path::new("ios/MyAppShareExtension/Notes.txt")).unwrap(),
            "keep"
        );
    }

    #[test]
    fn resource_already_in_target_dir_survives_rescaffold() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("ios");
        let resource = root.join("MyAppShareExtension").join("GoogleService-Info.plist");
        std::fs::create_dir_all(resource.parent().unwrap()).unwrap();
        std::fs::write(&resource, "<plist>secret</plist>").unwrap();

        let mut req = request(&root, ExtensionFlavor::Share, "MyAppShareExtension");
        req.resources = vec![resource.as_path()];
        let fs = crate::infrastructure::fs::LocalFs::new();
        let scaffold = scaffold_target(&fs, &req).unwrap();

        assert_eq!(scaffold.resources, vec!["GoogleService-Info.plist".to_string()]);
        assert_eq!(
            std::fs::read_to_string(&resource).unwrap(),
            "<plist>secret</plist>"
        );
    }

    #[test]
    fn resource_without_file_name_is_skipped_with_warning() {
        let fs = MockFileSystem::new();
        let mut req = request(Path::new("ios"), ExtensionFlavor::Share, "MyAppShareExtension");
        req.resources = vec![Path::new("..")];

        let scaffold = scaffold_target(&fs, &req).unwrap();
        assert!(scaffold.resources.is_empty());
        assert_eq!(scaffold.warnings.len(), 1);
        assert_eq!(
            scaffold.warnings[0].target.as_deref(),
            Some("MyAppShareExtension")
        );
        assert!(scaffold.warnings[0].message.contains("no usable file name"));
    }
}
