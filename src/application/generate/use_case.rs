//! Generate Use Case
//!
//! Runs the share pass, then the action pass, against one project graph:
//! 1. Write the manifests the target group will list
//! 2. Configuration list, product reference, native target
//! 3. Register the target and make the host app depend on it
//! 4. Scaffold the target directory and create its group
//! 5. Build phases, embedding the product in the host app
//!
//! A pass whose target already exists only refreshes the scaffold.

use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::domain::entities::ProjectGraph;
use crate::domain::ports::FileSystem;
use crate::domain::services::{
    add_configuration_list, add_native_target, add_product_reference, add_target_group,
    assemble_build_phases, register_target, seed, wire_host_dependency, ConfigurationListSpec,
    IdMinter, PhaseSpec,
};
use crate::domain::value_objects::{bundle_identifier, target_name, ExtensionFlavor, ObjectId};
use crate::error::{ExtgenError, ExtgenResult};

use super::super::manifests::write_manifests;
use super::super::scaffold::{scaffold_target, target_dir, ScaffoldRequest};
use super::result::{GenerateResult, PassReport};

/// Generate use case, parameterized by the file system it scaffolds into
pub struct GenerateUseCase<FS: FileSystem> {
    file_system: FS,
}

impl<FS: FileSystem> GenerateUseCase<FS> {
    pub fn new(file_system: FS) -> Self {
        Self { file_system }
    }

    pub fn file_system(&self) -> &FS {
        &self.file_system
    }

    pub fn into_file_system(self) -> FS {
        self.file_system
    }

    /// Run both passes
    ///
    /// Configuration errors and a missing host app are reported before the
    /// graph or the file system is touched.
    pub fn execute(
        &self,
        config: &Config,
        graph: &mut ProjectGraph,
    ) -> ExtgenResult<GenerateResult> {
        config.validate()?;
        let host = graph
            .host_application_target()
            .ok_or(ExtgenError::MissingHostTarget)?;

        let mut result = GenerateResult::new();
        result.host = Some(host);
        for warning in config.advisories() {
            warn!("{}", warning.message);
            result.warnings.push(warning);
        }

        let before = graph.len();
        let mut ids = IdMinter::new();
        for flavor in ExtensionFlavor::ALL {
            let pass = self.run_pass(config, graph, &mut ids, flavor)?;
            result.passes.push(pass);
        }
        result.records_added = graph.len().saturating_sub(before);
        Ok(result)
    }

    /// Run the pass for one flavor
    pub fn run_pass(
        &self,
        config: &Config,
        graph: &mut ProjectGraph,
        ids: &mut IdMinter,
        flavor: ExtensionFlavor,
    ) -> ExtgenResult<PassReport> {
        let app_bundle = config.bundle_identifier()?;
        let name = target_name(&config.app.name, flavor)?;
        let bundle = bundle_identifier(app_bundle, flavor);
        let platform_root = config.paths.resolved_platform_root();
        let dir = target_dir(&platform_root, &name);

        write_manifests(&self.file_system, config, &name, flavor, &dir)?;
        debug!(target_name = %name, "wrote manifests");

        let plan = match graph.target_named(&name) {
            Some(target) => PassPlan::Existing(target),
            None => PassPlan::New(self.add_target(config, graph, ids, &name, &bundle)?),
        };

        let template = config
            .extension
            .template
            .as_deref()
            .map(|path| config.paths.resolve(path));
        let resource_paths: Vec<PathBuf> = [
            &config.extension.google_services_file,
            &config.extension.preprocessing_file,
        ]
        .into_iter()
        .flatten()
        .map(|path| config.paths.resolve(path))
        .collect();
        let scaffold = scaffold_target(
            &self.file_system,
            &ScaffoldRequest {
                target_name: &name,
                flavor,
                platform_root: &platform_root,
                template: template.as_deref(),
                resources: resource_paths.iter().map(PathBuf::as_path).collect(),
            },
        )?;

        let stages = match plan {
            PassPlan::New(stages) => stages,
            PassPlan::Existing(target) => {
                info!(target_name = %name, "target already present, project left unchanged");
                return Ok(PassReport {
                    flavor,
                    target_name: name,
                    bundle_identifier: bundle,
                    target,
                    skipped: true,
                    embed_phase: None,
                    target_dir: scaffold.target_dir,
                    files: scaffold.members,
                    warnings: scaffold.warnings,
                });
            }
        };

        let group = add_target_group(graph, ids, &name, &scaffold.members)?;
        debug!(target_name = %name, group = %group.group, "created target group");

        let source = group
            .file(&flavor.view_controller_file())
            .cloned()
            .ok_or_else(|| ExtgenError::DanglingReference {
                id: group.group.clone(),
                expected: "PBXFileReference",
            })?;
        let resources: Vec<_> = scaffold
            .resources
            .iter()
            .filter_map(|file| group.file(file).cloned())
            .collect();
        let phases = assemble_build_phases(
            graph,
            ids,
            &PhaseSpec {
                target: &stages.target,
                product_ref: &stages.product_ref,
                source: &source,
                resources: &resources,
                embed_label: flavor.embed_phase_label(),
            },
        )?;
        debug!(
            target_name = %name,
            embed = %phases.embed,
            created = phases.embed_created,
            "assembled build phases"
        );

        info!(target_name = %name, target = %stages.target, "generated {} extension", flavor);
        Ok(PassReport {
            flavor,
            target_name: name,
            bundle_identifier: bundle,
            target: stages.target,
            skipped: false,
            embed_phase: Some(phases.embed),
            target_dir: scaffold.target_dir,
            files: scaffold.members,
            warnings: scaffold.warnings,
        })
    }

    /// Stages that precede scaffolding: everything that only touches the graph
    fn add_target(
        &self,
        config: &Config,
        graph: &mut ProjectGraph,
        ids: &mut IdMinter,
        name: &str,
        bundle: &str,
    ) -> ExtgenResult<TargetStages> {
        let configuration_list = add_configuration_list(
            graph,
            ids,
            &ConfigurationListSpec {
                target_name: name,
                bundle_identifier: bundle,
                build_number: config.app.build_number.as_deref(),
                marketing_version: config.app.version.as_deref(),
            },
        );
        let product = add_product_reference(graph, ids, name)?;
        let target_id = ids.mint(graph, &seed(name, "native-target"));
        let target = add_native_target(
            graph,
            &target_id,
            name,
            &product.file_ref,
            &configuration_list,
        );
        register_target(graph, &target)?;
        let wired = wire_host_dependency(graph, ids, &target)?;
        debug!(target_name = name, host = %wired.host, "wired host dependency");

        Ok(TargetStages {
            target,
            product_ref: product.file_ref,
        })
    }
}

enum PassPlan {
    Existing(ObjectId),
    New(TargetStages),
}

struct TargetStages {
    target: ObjectId,
    product_ref: ObjectId,
}
