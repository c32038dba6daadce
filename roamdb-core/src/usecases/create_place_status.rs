use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewPlaceStatus {
    pub place_id: Id,
    pub opening_state: OpeningState,
    pub opening_time: Option<String>,
    pub closing_time: Option<String>,
    pub availability: Option<Availability>,
    pub available_rooms: Option<u32>,
    pub price: f64,
    pub contact: Option<String>,
}

pub fn create_place_status<D>(db: &D, s: NewPlaceStatus) -> Result<PlaceStatus>
where
    D: PlaceRepo + PlaceStatusRepo,
{
    let NewPlaceStatus {
        place_id,
        opening_state,
        opening_time,
        closing_time,
        availability,
        available_rooms,
        price,
        contact,
    } = s;
    if !price.is_finite() || price < 0.0 {
        return Err(Error::Price);
    }
    let place = db.get_place(place_id.as_str())?;
    if db.try_get_place_status_of_place(place.id.as_str())?.is_some() {
        return Err(Error::Repo(RepoError::AlreadyExists));
    }
    // Availability and room count only apply to lodging places.
    let (availability, available_rooms) = if place.category.is_lodging() {
        (availability, available_rooms)
    } else {
        (None, None)
    };
    let status = PlaceStatus {
        id: Id::new(),
        place_id: place.id,
        opening_state,
        opening_time,
        closing_time,
        availability,
        available_rooms,
        price,
        contact,
        updated_at: Timestamp::now(),
    };
    db.create_place_status(status.clone())?;
    Ok(status)
}
