//! Dependency wirer
//!
//! Makes the host application target depend on a new extension target, so
//! the build tool builds the extension before the app that embeds it.

use tracing::debug;

use crate::domain::entities::{
    ContainerItemProxy, Fields, NativeTarget, ProjectGraph, TargetDependency,
    TARGET_REFERENCE_PROXY_TYPE,
};
use crate::domain::services::minter::{seed, IdMinter};
use crate::domain::value_objects::ObjectId;
use crate::error::{ExtgenError, ExtgenResult};

/// Ids produced by [`wire_host_dependency`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostDependency {
    pub host: ObjectId,
    pub dependency: ObjectId,
    pub proxy: ObjectId,
}

/// Add a proxy + dependency on `target` to the host app's dependency list
///
/// Fails with [`ExtgenError::MissingHostTarget`] before touching the graph
/// when the project has no application target.
pub fn wire_host_dependency(
    graph: &mut ProjectGraph,
    ids: &mut IdMinter,
    target: &ObjectId,
) -> ExtgenResult<HostDependency> {
    let host = graph
        .host_application_target()
        .ok_or(ExtgenError::MissingHostTarget)?;
    let target_name = graph.require::<NativeTarget>(target)?.name.clone();
    let portal = graph.root_id().clone();

    let proxy = ids.mint(graph, &seed(&target_name, "container-item-proxy"));
    graph.insert(
        proxy.clone(),
        ContainerItemProxy {
            container_portal: portal,
            proxy_type: TARGET_REFERENCE_PROXY_TYPE.to_string(),
            remote_global_id_string: target.clone(),
            remote_info: Some(target_name.clone()),
            extra: Fields::new(),
        },
    );

    let dependency = ids.mint(graph, &seed(&target_name, "target-dependency"));
    graph.insert(
        dependency.clone(),
        TargetDependency {
            target: Some(target.clone()),
            target_proxy: proxy.clone(),
            extra: Fields::new(),
        },
    );

    graph
        .require_mut::<NativeTarget>(&host)?
        .dependencies
        .push(dependency.clone());

    debug!(host = %host, target = %target, dependency = %dependency, "wired host dependency");
    Ok(HostDependency {
        host,
        dependency,
        proxy,
    })
}
