use routewise_core::graph::ShortestPaths;

/// Build the JSON document for route results
pub fn route_json(result: &ShortestPaths) -> serde_json::Value {
    let routers: Vec<serde_json::Value> = (0..result.node_count())
        .map(|router| match result.path_to(router) {
            Ok(path) => serde_json::json!({
                "router": router,
                "reachable": true,
                "cost": path.cost,
                "path": path.nodes(),
            }),
            Err(_) => serde_json::json!({
                "router": router,
                "reachable": false,
                "cost": null,
                "path": null,
            }),
        })
        .collect();

    serde_json::json!({
        "source": result.source,
        "objective": result.objective,
        "routers": routers,
    })
}
