//! Build-phase assembler
//!
//! Gives a new extension target its sources, frameworks and resources
//! phases, then embeds its product in the host app through a copy-files
//! phase shared by every extension with the same label.

use serde_json::{json, Value};
use tracing::debug;

use crate::domain::entities::{
    BuildFile, BuildPhase, Fields, NativeTarget, PhaseKind, ProjectGraph,
};
use crate::domain::services::minter::{seed, IdMinter};
use crate::domain::value_objects::ObjectId;
use crate::error::{ExtgenError, ExtgenResult};

/// Inputs of [`assemble_build_phases`]
#[derive(Debug, Clone)]
pub struct PhaseSpec<'a> {
    pub target: &'a ObjectId,
    pub product_ref: &'a ObjectId,
    /// File reference of the view-controller source
    pub source: &'a ObjectId,
    /// File references of the optional resources
    pub resources: &'a [ObjectId],
    /// Display label of the host's embed phase
    pub embed_label: &'a str,
}

/// Ids produced by [`assemble_build_phases`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembledPhases {
    pub sources: ObjectId,
    pub frameworks: ObjectId,
    pub resources: ObjectId,
    /// The host's embed phase, new or reused
    pub embed: ObjectId,
    pub embed_created: bool,
    /// Build file wrapping the product inside the embed phase
    pub embed_file: ObjectId,
}

/// Attach the target's own phases and embed its product in the host app
pub fn assemble_build_phases(
    graph: &mut ProjectGraph,
    ids: &mut IdMinter,
    spec: &PhaseSpec<'_>,
) -> ExtgenResult<AssembledPhases> {
    let host = graph
        .host_application_target()
        .ok_or(ExtgenError::MissingHostTarget)?;
    let target_name = graph.require::<NativeTarget>(spec.target)?.name.clone();

    let source_file = add_build_file(graph, ids, &target_name, "source", spec.source, None);
    let sources = add_phase(graph, ids, &target_name, PhaseKind::Sources, vec![source_file]);
    let frameworks = add_phase(graph, ids, &target_name, PhaseKind::Frameworks, Vec::new());
    let resource_files: Vec<ObjectId> = spec
        .resources
        .iter()
        .enumerate()
        .map(|(n, file_ref)| {
            let role = format!("resource/{}", n);
            add_build_file(graph, ids, &target_name, &role, file_ref, None)
        })
        .collect();
    let resources = add_phase(graph, ids, &target_name, PhaseKind::Resources, resource_files);

    graph
        .require_mut::<NativeTarget>(spec.target)?
        .build_phases
        .extend([sources.clone(), frameworks.clone(), resources.clone()]);

    let (embed, embed_created) = find_or_create_embed_phase(graph, ids, &host, spec.embed_label)?;
    let settings = json!({ "ATTRIBUTES": ["CodeSignOnCopy", "RemoveHeadersOnCopy"] });
    let embed_file = add_build_file(
        graph,
        ids,
        &target_name,
        "embed",
        spec.product_ref,
        Some(settings),
    );
    graph
        .require_mut::<BuildPhase>(&embed)?
        .files
        .push(embed_file.clone());

    debug!(
        target_name,
        embed = %embed,
        embed_created,
        resources = spec.resources.len(),
        "assembled build phases"
    );
    Ok(AssembledPhases {
        sources,
        frameworks,
        resources,
        embed,
        embed_created,
        embed_file,
    })
}

/// The host's copy-files phase into PlugIns with `label`, added when absent
fn find_or_create_embed_phase(
    graph: &mut ProjectGraph,
    ids: &mut IdMinter,
    host: &ObjectId,
    label: &str,
) -> ExtgenResult<(ObjectId, bool)> {
    let host_target = graph.require::<NativeTarget>(host)?;
    let existing = host_target.build_phases.iter().find(|id| {
        graph
            .get::<BuildPhase>(id)
            .is_some_and(|phase| phase.is_embed_phase(label))
    });
    if let Some(id) = existing {
        return Ok((id.clone(), false));
    }

    let id = ids.mint(graph, &seed(label, "copy-files-phase"));
    graph.insert(id.clone(), BuildPhase::embed_plugins(label));
    graph
        .require_mut::<NativeTarget>(host)?
        .build_phases
        .push(id.clone());
    Ok((id, true))
}

fn add_phase(
    graph: &mut ProjectGraph,
    ids: &mut IdMinter,
    target_name: &str,
    kind: PhaseKind,
    files: Vec<ObjectId>,
) -> ObjectId {
    let id = ids.mint(graph, &seed(target_name, kind.isa()));
    graph.insert(
        id.clone(),
        BuildPhase {
            files,
            ..BuildPhase::new(kind)
        },
    );
    id
}

fn add_build_file(
    graph: &mut ProjectGraph,
    ids: &mut IdMinter,
    target_name: &str,
    role: &str,
    file_ref: &ObjectId,
    settings: Option<Value>,
) -> ObjectId {
    let id = ids.mint(graph, &seed(target_name, &format!("build-file/{}", role)));
    let settings = match settings {
        Some(Value::Object(map)) => Some(map),
        _ => None,
    };
    graph.insert(
        id.clone(),
        BuildFile {
            file_ref: Some(file_ref.clone()),
            settings,
            extra: Fields::new(),
        },
    );
    id
}
