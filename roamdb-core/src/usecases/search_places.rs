use super::prelude::*;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Pagination {
    /// 1-based page number.
    pub page: usize,
    pub limit: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: 1, limit: 10 }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PlaceSearchRequest {
    pub name: Option<String>,
    pub category: Option<String>,
    pub origin: Option<MapPoint>,
    pub radius: Option<Distance>,
}

#[derive(Debug)]
pub struct PlaceSearchResults {
    /// The requested page, in insertion order. Distances are present
    /// when the request carried an origin.
    pub matches: Vec<(Place, Option<Distance>)>,
    pub total: usize,
    pub pages: usize,
}

pub fn search_places<I: PlaceIndex>(
    index: &I,
    req: PlaceSearchRequest,
    pagination: Pagination,
) -> Result<PlaceSearchResults> {
    let Pagination { page, limit } = pagination;
    if page < 1 || limit < 1 {
        return Err(Error::Pagination);
    }
    let PlaceSearchRequest {
        name,
        category,
        origin,
        radius,
    } = req;
    let query = PlaceIndexQuery {
        name,
        category,
        origin,
        radius,
    };
    let all = index
        .query_places(&query)
        .map_err(|err| Error::Repo(err.into()))?;
    let total = all.len();
    let pages = total.div_ceil(limit);
    let matches = all
        .into_iter()
        .skip((page - 1) * limit)
        .take(limit)
        .collect();
    Ok(PlaceSearchResults {
        matches,
        total,
        pages,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{mock_db::MockDb, util::filter::LinearScan};
    use roamdb_entities::builders::*;

    fn db_with_places(places: Vec<Place>) -> MockDb {
        let db = MockDb::default();
        *db.places.borrow_mut() = places;
        db
    }

    #[test]
    fn nearby_search_is_inclusive_at_the_radius() {
        let origin = MapPoint::from_lat_lng_deg(0.0, 0.0);
        let on_boundary = MapPoint::from_lat_lng_deg(0.0, 0.5);
        let exact = MapPoint::distance(origin, on_boundary);
        let db = db_with_places(vec![
            Place::build().id("edge").pos(on_boundary).finish(),
            Place::build()
                .id("beyond")
                .pos(MapPoint::from_lat_lng_deg(0.0, 0.50001))
                .finish(),
        ]);
        let results = search_places(
            &LinearScan(&db),
            PlaceSearchRequest {
                origin: Some(origin),
                radius: Some(exact),
                ..Default::default()
            },
            Pagination::default(),
        )
        .unwrap();
        assert_eq!(results.total, 1);
        assert_eq!(results.matches[0].0.id.as_str(), "edge");
        assert_eq!(results.matches[0].1, Some(exact));
    }

    #[test]
    fn text_filters_match_substrings_case_insensitively() {
        let db = db_with_places(vec![
            Place::build().id("a").name("Grand Hotel").category("hotel").finish(),
            Place::build().id("b").name("Grand Cafe").category("cafe").finish(),
            Place::build().id("c").name("Panorama hotel bar").category("bar").finish(),
        ]);
        let results = search_places(
            &LinearScan(&db),
            PlaceSearchRequest {
                name: Some("hotel".into()),
                ..Default::default()
            },
            Pagination::default(),
        )
        .unwrap();
        let ids: Vec<_> = results.matches.iter().map(|(p, _)| p.id.as_str()).collect();
        assert_eq!(ids, ["a", "c"]);

        let results = search_places(
            &LinearScan(&db),
            PlaceSearchRequest {
                name: Some("grand".into()),
                category: Some("HOTEL".into()),
                ..Default::default()
            },
            Pagination::default(),
        )
        .unwrap();
        assert_eq!(results.total, 1);
        assert_eq!(results.matches[0].0.id.as_str(), "a");
    }

    #[test]
    fn results_are_paginated_with_totals() {
        let places = (0..5)
            .map(|i| Place::build().id(&format!("p{i}")).finish())
            .collect();
        let db = db_with_places(places);
        let page = |page| {
            search_places(
                &LinearScan(&db),
                PlaceSearchRequest::default(),
                Pagination { page, limit: 2 },
            )
            .unwrap()
        };
        let first = page(1);
        assert_eq!(first.total, 5);
        assert_eq!(first.pages, 3);
        assert_eq!(first.matches.len(), 2);
        assert_eq!(first.matches[0].0.id.as_str(), "p0");

        let last = page(3);
        assert_eq!(last.matches.len(), 1);
        assert_eq!(last.matches[0].0.id.as_str(), "p4");

        assert!(page(4).matches.is_empty());
    }

    #[test]
    fn zero_page_or_limit_is_rejected() {
        let db = MockDb::default();
        for pagination in [
            Pagination { page: 0, limit: 10 },
            Pagination { page: 1, limit: 0 },
        ] {
            assert!(matches!(
                search_places(&LinearScan(&db), PlaceSearchRequest::default(), pagination),
                Err(Error::Pagination)
            ));
        }
    }
}
