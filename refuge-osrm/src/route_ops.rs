use itertools::Itertools;
use refuge_core::model::{Coordinate, Route, RouteStep};
use uom::si::{f64::Length, length::meter};

use crate::{OsrmError, OsrmManeuver, OsrmResponse, OsrmStep};

/// road name used when OSRM reports an unnamed way.
const UNNAMED_ROAD: &str = "road";

/// transforms the first candidate route of an OSRM response into a [`Route`].
///
/// the path is taken from the route's GeoJSON geometry with each `[lon, lat]`
/// position swapped into a latitude-first [`Coordinate`]. steps come from the
/// first leg only, with distances rounded to the nearest meter.
pub fn into_route(response: OsrmResponse) -> Result<Route, OsrmError> {
    if !response.is_ok() {
        let msg = match response.message {
            Some(message) => format!("{}: {message}", response.code),
            None => response.code,
        };
        return Err(OsrmError::NoRoute(msg));
    }
    let route = response
        .routes
        .into_iter()
        .next()
        .ok_or_else(|| OsrmError::NoRoute(String::from("response contains zero routes")))?;

    let geometry = route
        .geometry
        .ok_or_else(|| OsrmError::NoRoute(String::from("route has no geometry")))?;
    let positions = match geometry.value {
        geojson::Value::LineString(positions) => positions,
        _ => {
            return Err(OsrmError::NoRoute(String::from(
                "route geometry is not a LineString",
            )))
        }
    };
    let coordinates = positions
        .iter()
        .map(|p| match p.as_slice() {
            [lon, lat, ..] => Ok(Coordinate::from_lon_lat(*lon, *lat)),
            _ => Err(OsrmError::NoRoute(format!(
                "geometry position {p:?} is missing longitude or latitude"
            ))),
        })
        .collect::<Result<Vec<_>, _>>()?;
    if coordinates.is_empty() {
        return Err(OsrmError::NoRoute(String::from("route geometry is empty")));
    }

    let leg = route
        .legs
        .into_iter()
        .next()
        .ok_or_else(|| OsrmError::NoRoute(String::from("route has no legs")))?;
    let steps = leg.steps.iter().map(into_step).collect_vec();

    Ok(Route::new(coordinates, steps))
}

/// maneuver type followed by its modifier, e.g. "turn left" or "depart".
pub fn instruction(maneuver: &OsrmManeuver) -> String {
    match maneuver.modifier.as_deref().map(str::trim) {
        Some(modifier) if !modifier.is_empty() => {
            format!("{} {modifier}", maneuver.maneuver_type)
        }
        _ => maneuver.maneuver_type.clone(),
    }
}

fn into_step(step: &OsrmStep) -> RouteStep {
    let name = if step.name.trim().is_empty() {
        String::from(UNNAMED_ROAD)
    } else {
        step.name.clone()
    };
    RouteStep::new(
        instruction(&step.maneuver),
        name,
        Length::new::<meter>(step.distance.round()),
    )
}
