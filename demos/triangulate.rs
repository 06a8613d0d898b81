use bearings::{
    BearingLine, DivergencePolicy, GeoPoint, IntersectOptions, bounding_box,
    pairwise_intersections,
};
use serde_json::json;
use std::env;

/// Parses `lat,lon,bearing[,declination]` into a bearing line
fn parse_observation(input: &str) -> Result<BearingLine, Box<dyn std::error::Error>> {
    let values = input
        .split(',')
        .map(|value| value.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()?;

    match values[..] {
        [lat, lon, bearing] => Ok(BearingLine::new(lat, lon, bearing)),
        [lat, lon, bearing, declination] => {
            Ok(BearingLine::with_declination(lat, lon, bearing, declination))
        }
        _ => Err(format!("expected `lat,lon,bearing[,declination]`, got `{input}`").into()),
    }
}

/// Converts an intersection to a GeoJSON Point feature
fn point_feature(point: &GeoPoint) -> serde_json::Value {
    json!({
        "type": "Feature",
        "geometry": {
            "type": "Point",
            "coordinates": [point.lon, point.lat]
        },
        "properties": {
            "kind": "intersection"
        }
    })
}

/// Converts a `(min_lon, max_lon, min_lat, max_lat)` box to a GeoJSON Polygon feature
fn bbox_feature((min_lon, max_lon, min_lat, max_lat): (f64, f64, f64, f64)) -> serde_json::Value {
    json!({
        "type": "Feature",
        "geometry": {
            "type": "Polygon",
            "coordinates": [[
                [min_lon, min_lat],
                [max_lon, min_lat],
                [max_lon, max_lat],
                [min_lon, max_lat],
                [min_lon, min_lat]
            ]]
        },
        "properties": {
            "kind": "bounding_box"
        }
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() < 2 {
        eprintln!("Usage: triangulate <lat,lon,bearing[,declination]>...");
        std::process::exit(1);
    }

    let lines = args
        .iter()
        .map(|arg| parse_observation(arg))
        .collect::<Result<Vec<_>, _>>()?;

    let options = IntersectOptions::default()
        .with_divergence(DivergencePolicy::Suppress)
        .with_ignore_errors(true);

    let points = pairwise_intersections(&lines, &options)?;
    eprintln!(
        "{} of {} pairs intersect",
        points.len(),
        lines.len() * (lines.len() - 1) / 2
    );

    let mut features: Vec<_> = points.iter().map(point_feature).collect();
    features.push(bbox_feature(bounding_box(points)?));

    let collection = json!({
        "type": "FeatureCollection",
        "features": features
    });
    println!("{}", serde_json::to_string_pretty(&collection)?);

    Ok(())
}
