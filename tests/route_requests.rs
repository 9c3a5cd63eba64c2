// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Anchorroute-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Anchorroute and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fs;
use std::path::{Path, PathBuf};

use anchorroute::request::{execute_batch, BatchEntry};
use anchorroute::{
    ObstacleIndex, Obstacles, Point, RequestDocument, RequestError, RouteError, RouteRequest,
    SearchError,
};

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures").join("route_requests")
}

fn read_fixture(name: &str) -> String {
    let path = fixtures_dir().join(name);
    fs::read_to_string(&path).unwrap_or_else(|err| panic!("failed to read {path:?}: {err}"))
}

fn single(name: &str) -> RouteRequest {
    match RequestDocument::parse(&read_fixture(name)) {
        Ok(RequestDocument::Single(request)) => request,
        Ok(RequestDocument::Batch(_)) => panic!("{name} is a batch"),
        Err(err) => panic!("{name} failed to parse: {err}"),
    }
}

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

#[test]
fn detour_request_routes_around_the_obstacle() {
    let request = single("detour.json");
    let response = request.execute().expect("route");
    let points = response.points.points();

    assert_eq!(points.first(), Some(&p(0.0, 0.0)));
    assert_eq!(points.last(), Some(&p(6.0, 0.0)));
    assert_eq!(response.vertex_count, points.len());
    assert!(points.iter().any(|point| point.y.abs() >= 1.5));

    let obstacles = request.obstacles.iter().copied().collect::<Obstacles>();
    for segment in response.points.segments() {
        assert!(obstacles.is_clear(&segment), "{segment:?} touches the obstacle");
    }
    let manhattan_floor = 6.0 + 2.0 * 1.5;
    assert!(response.length >= manhattan_floor);
}

#[test]
fn waypoint_request_keeps_waypoint_order() {
    let response = single("waypoints.json").execute().expect("route");
    assert_eq!(
        response.points.points(),
        &[
            p(0.0, 0.0),
            p(0.5, 0.0),
            p(0.5, 2.0),
            p(3.0, 2.0),
            p(3.0, -1.0),
            p(6.0, -1.0),
            p(6.0, 0.0),
            p(10.0, 0.0),
        ]
    );
    assert_eq!(response.length, 0.5 + 2.0 + 2.5 + 3.0 + 3.0 + 1.0 + 4.0);
}

#[test]
fn enclosed_request_is_a_routing_failure() {
    let err = single("enclosed.json").execute().expect_err("no route out of the box");
    assert!(err.is_routing_failure());
    match err {
        RequestError::Route(RouteError::Hop { hop, source, .. }) => {
            assert_eq!(hop, 0);
            assert!(matches!(source, SearchError::Exhausted { .. }));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn batch_reports_each_request_in_order() {
    let RequestDocument::Batch(requests) =
        RequestDocument::parse(&read_fixture("batch.json")).expect("parse")
    else {
        panic!("expected a batch");
    };
    assert_eq!(requests.len(), 2);

    let results = execute_batch(&requests);
    let routed = results[0].as_ref().expect("first request routes");
    assert_eq!(routed.points.last(), Some(p(6.0, 0.0)));
    assert!(matches!(&results[1], Err(err) if !err.is_routing_failure()));

    let json = serde_json::to_value(results.into_iter().map(BatchEntry::from).collect::<Vec<_>>())
        .expect("serialize");
    assert_eq!(json[1]["error"], "invalid start endpoint: zero normal");
}

#[test]
fn swapped_obstacle_corners_route_like_ordered_ones() {
    let RequestDocument::Batch(requests) =
        RequestDocument::parse(&read_fixture("batch.json")).expect("parse")
    else {
        panic!("expected a batch");
    };
    let swapped = requests[0].execute().expect("route");
    let ordered = single("detour.json").execute().expect("route");
    assert_eq!(swapped, ordered);
}

#[test]
fn responses_serialize_points_as_objects() {
    let response = single("waypoints.json").execute().expect("route");
    let json = serde_json::to_value(&response).expect("serialize");
    assert_eq!(json["vertex_count"], 8);
    assert_eq!(json["points"][2], serde_json::json!({ "x": 0.5, "y": 2.0 }));
}
