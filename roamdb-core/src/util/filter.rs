use crate::{
    db::{PlaceIndex, PlaceIndexQuery},
    entities::*,
    repositories::PlaceRepo,
};

use anyhow::Result as Fallible;

/// Inclusive radius check: a point exactly on the boundary matches.
pub fn within_radius(origin: MapPoint, point: MapPoint, radius: Distance) -> bool {
    MapPoint::distance(origin, point) <= radius
}

/// Brute-force distance filter, preserving the input order.
pub fn nearby(
    origin: MapPoint,
    radius: Distance,
    places: impl IntoIterator<Item = Place>,
) -> Vec<(Place, Distance)> {
    places
        .into_iter()
        .filter_map(|place| {
            let distance = MapPoint::distance(origin, place.pos);
            (distance <= radius).then_some((place, distance))
        })
        .collect()
}

pub fn matches_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Full-scan implementation of [`PlaceIndex`] on top of a repository.
#[derive(Debug)]
pub struct LinearScan<'a, R>(pub &'a R);

impl<R: PlaceRepo> PlaceIndex for LinearScan<'_, R> {
    fn query_places(&self, query: &PlaceIndexQuery) -> Fallible<Vec<(Place, Option<Distance>)>> {
        let mut places = self.0.all_places()?;
        if let Some(name) = &query.name {
            places.retain(|place| matches_ignore_case(&place.name, name));
        }
        if let Some(category) = &query.category {
            places.retain(|place| matches_ignore_case(place.category.as_str(), category));
        }
        let results = match (query.origin, query.radius) {
            (Some(origin), Some(radius)) => nearby(origin, radius, places)
                .into_iter()
                .map(|(place, distance)| (place, Some(distance)))
                .collect(),
            (Some(origin), None) => places
                .into_iter()
                .map(|place| {
                    let distance = MapPoint::distance(origin, place.pos);
                    (place, Some(distance))
                })
                .collect(),
            _ => places.into_iter().map(|place| (place, None)).collect(),
        };
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roamdb_entities::builders::*;

    #[test]
    fn radius_boundary_is_inclusive() {
        let origin = MapPoint::from_lat_lng_deg(0.0, 0.0);
        let point = MapPoint::from_lat_lng_deg(0.0, 0.5);
        let exact = MapPoint::distance(origin, point);
        assert!(within_radius(origin, point, exact));
        assert!(!within_radius(
            origin,
            point,
            Distance::from_meters(exact.to_meters() - 1.0)
        ));
        assert!(within_radius(origin, point, Distance::infinite()));
    }

    #[test]
    fn nearby_keeps_insertion_order_and_distances() {
        let origin = MapPoint::from_lat_lng_deg(0.0, 0.0);
        let places = vec![
            Place::build()
                .id("far")
                .pos(MapPoint::from_lat_lng_deg(10.0, 10.0))
                .finish(),
            Place::build()
                .id("near")
                .pos(MapPoint::from_lat_lng_deg(0.01, 0.01))
                .finish(),
            Place::build()
                .id("here")
                .pos(MapPoint::from_lat_lng_deg(0.0, 0.0))
                .finish(),
        ];
        let hits = nearby(origin, Distance::from_kilometers(4.0), places);
        let ids: Vec<_> = hits.iter().map(|(place, _)| place.id.as_str()).collect();
        assert_eq!(ids, ["near", "here"]);
        assert!(hits[0].1 > hits[1].1);
    }

    #[test]
    fn substring_matching_ignores_case() {
        assert!(matches_ignore_case("Grand Hotel Panorama", "hotel"));
        assert!(matches_ignore_case("guest_house", "GUEST"));
        assert!(!matches_ignore_case("museum", "hotel"));
    }
}
